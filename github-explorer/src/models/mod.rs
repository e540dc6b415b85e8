//! Domain models for GitHub repositories.
//!
//! These are plain value records with no behaviour. They are produced by the
//! repository adapter and consumed by the view-models and views.

mod details;
mod release;
mod repository;

pub use details::{Author, Issue, Language, Owner, PullRequest, Readme, RepositoryDetails};
pub use release::ReleaseDetail;
pub use repository::Repository;

/// README text used when a repository has no README the adapter could find.
pub const README_NOT_FOUND: &str = "No Readme.md Found";
