//! Release information.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A published (or draft) release of a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseDetail {
    /// Release title. Empty when the release was never named.
    pub name: String,

    /// Git tag the release points at.
    pub tag_name: String,

    /// GitHub URL of the release page.
    pub url: String,

    /// Whether GitHub marks this as the latest release.
    pub is_latest: bool,

    /// Release notes, if any.
    pub description: Option<String>,

    /// Publication time. `None` for drafts.
    pub release_date: Option<DateTime<Utc>>,

    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}
