//! Client error types.

use thiserror::Error;

/// Errors raised while talking to GitHub.
#[derive(Debug, Error)]
pub enum ClientError {
    /// GitHub API or HTTP transport error.
    #[error("GitHub API error: {0}")]
    GitHub(#[from] octocrab::Error),

    /// The response body did not have the expected shape.
    #[error("Failed to decode GitHub response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Any other transport failure.
    #[error("Transport error: {0}")]
    Transport(String),
}
