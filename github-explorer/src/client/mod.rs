//! Shared GitHub client plumbing.
//!
//! This module owns everything between the repository adapter and the
//! network: the bearer credentials, the [`GitHubTransport`] seam the adapter
//! talks through, and the [`ClientCache`] that lazily builds the single
//! shared client instance.

mod cache;
mod credentials;
mod error;
mod transport;

pub use cache::ClientCache;
pub use credentials::{Credentials, TOKEN_ENV_VAR};
pub use error::ClientError;
pub use transport::{GitHubTransport, GraphQlRequest};

use octocrab::Octocrab;
use tracing::debug;

/// Default GitHub API root. GraphQL requests go to `{base}/graphql`.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Settings needed to build the shared [`Octocrab`] client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Token attached to every request.
    credentials: Credentials,
    /// API root, e.g. a GitHub Enterprise server or a test double.
    api_base_url: String,
}

impl ClientConfig {
    /// Creates a configuration targeting the public GitHub API.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// Sets a custom API root.
    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    /// Returns the configured credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the configured API root.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

/// Builds an authenticated [`Octocrab`] client.
///
/// Octocrab sends the personal token as `Authorization: Bearer <token>` on
/// every request, GraphQL and REST alike.
///
/// # Errors
///
/// Returns [`ClientError::GitHub`] if the base URL is invalid or the HTTP
/// client cannot be constructed.
pub fn build_octocrab(config: &ClientConfig) -> Result<Octocrab, ClientError> {
    debug!(base_url = %config.api_base_url, "Building GitHub client");
    let octocrab = Octocrab::builder()
        .personal_token(config.credentials.token().to_string())
        .base_uri(config.api_base_url.as_str())?
        .build()?;
    Ok(octocrab)
}
