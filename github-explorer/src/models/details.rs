//! Detailed repository information.

use super::ReleaseDetail;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything the details view shows about a single repository.
///
/// `issues` and `pull_requests` hold the most recent page only, so
/// `total_issues >= issues.len()` and `total_pull_requests >= pull_requests.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryDetails {
    /// GraphQL node id.
    pub id: String,

    /// Repository name.
    pub name: String,

    /// Full name in "owner/name" format.
    pub name_with_owner: String,

    /// Short description, if set.
    pub description: Option<String>,

    /// GitHub URL of the repository.
    pub url: String,

    /// Project homepage, if set.
    pub homepage_url: Option<String>,

    /// Stargazer count.
    pub stars: u32,

    /// Fork count.
    pub forks: u32,

    /// Whether the repository is private.
    pub is_private: bool,

    /// Owning user or organization.
    pub owner: Owner,

    /// Primary language, if GitHub detected one.
    pub primary_language: Option<Language>,

    /// Languages used in the repository.
    pub languages: Vec<Language>,

    /// Most recent issues.
    pub issues: Vec<Issue>,

    /// Most recent pull requests.
    pub pull_requests: Vec<PullRequest>,

    /// Total number of issues in the repository.
    pub total_issues: u32,

    /// Total number of pull requests in the repository.
    pub total_pull_requests: u32,

    /// README contents.
    pub readme: Readme,

    /// Most recent release, if any.
    pub latest_release: Option<ReleaseDetail>,

    /// Most recent releases.
    pub releases: Vec<ReleaseDetail>,
}

/// Owner of a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Owner {
    pub login: String,
    pub avatar_url: String,
    pub url: String,
}

/// A programming language with its GitHub colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Language {
    pub name: String,
    pub color: Option<String>,
}

/// An issue in a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub url: String,
    /// State as reported by GitHub (e.g. "OPEN", "CLOSED").
    pub state: String,
    pub created_at: DateTime<Utc>,
    /// `None` when the author account was deleted.
    pub author: Option<Author>,
}

/// A pull request in a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub url: String,
    /// State as reported by GitHub (e.g. "OPEN", "CLOSED", "MERGED").
    pub state: String,
    pub created_at: DateTime<Utc>,
    pub author: Option<Author>,
}

/// Author of an issue or pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub login: String,
    pub avatar_url: String,
}

/// README contents of a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Readme {
    pub text: String,
}

impl Readme {
    /// Returns true if this is the placeholder used when no README was found.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.text == super::README_NOT_FOUND
    }
}
