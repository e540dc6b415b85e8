//! Search result repository.

use super::ReleaseDetail;
use serde::Serialize;

/// A repository as listed in search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repository {
    /// Repository name.
    pub name: String,

    /// Login of the owning user or organization.
    pub owner: String,

    /// Short description, if set.
    pub description: Option<String>,

    /// Stargazer count.
    pub stars: u32,

    /// Fork count.
    pub forks: u32,

    /// Primary language name, if GitHub detected one.
    pub language: Option<String>,

    /// Most recent release, if any.
    pub latest_release: Option<ReleaseDetail>,
}

impl Repository {
    /// Returns the repository name in "owner/name" format.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}
