//! Repository error types.

use crate::client::ClientError;
use thiserror::Error;

/// Message used when GitHub reports an error without one.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

/// Failure reported by a [`GitHubRepository`](super::GitHubRepository) call.
///
/// The `Display` output is the message shown to the user.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Transport or decoding failure.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// GitHub returned a GraphQL error list.
    #[error("{message}")]
    GraphQl { message: String },

    /// The requested repository does not exist or is not visible.
    #[error("Repository not found")]
    NotFound { owner: String, name: String },

    /// The repository has no README.
    #[error("No Readme.md Found")]
    ReadmeNotFound { owner: String, name: String },
}
