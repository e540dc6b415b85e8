//! Repository port and its GraphQL adapter.
//!
//! [`GitHubRepository`] is the port the view-models depend on. Each
//! operation returns a stream that yields exactly one item, either the
//! mapped result or a [`RepositoryError`]. Faults never escape as panics;
//! transport, decoding and server-side errors all arrive as `Err` items.
//!
//! [`GraphQlRepository`] implements the port against the GitHub GraphQL API.

mod adapter;
mod error;
mod mappers;
mod queries;
mod wire;

pub use adapter::{GraphQlRepository, QueryOptions};
pub use error::{RepositoryError, UNKNOWN_ERROR_MESSAGE};

use crate::models::{Repository, RepositoryDetails};
use futures::stream::BoxStream;

/// Read access to GitHub repositories.
pub trait GitHubRepository: Send + Sync {
    /// Searches repositories matching `query`, in GitHub's relevance order.
    fn search_repositories(
        &self,
        query: &str,
    ) -> BoxStream<'static, Result<Vec<Repository>, RepositoryError>>;

    /// Loads details of `owner/name`.
    fn get_repository_details(
        &self,
        owner: &str,
        name: &str,
    ) -> BoxStream<'static, Result<RepositoryDetails, RepositoryError>>;

    /// Loads the README of `owner/name` from the REST contents API.
    fn get_repository_readme(
        &self,
        owner: &str,
        name: &str,
    ) -> BoxStream<'static, Result<String, RepositoryError>>;
}
