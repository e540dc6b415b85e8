//! The seam between the repository adapter and the HTTP client.

use super::ClientError;
use async_trait::async_trait;
use octocrab::models::repos::Content;
use octocrab::Octocrab;
use serde::Serialize;
use serde_json::Value;

/// A GraphQL operation ready to be posted.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest {
    /// GraphQL document, including any fragments it spreads.
    pub query: &'static str,

    /// Operation variables.
    pub variables: Value,

    /// Name of the operation inside `query` to execute.
    #[serde(rename = "operationName")]
    pub operation_name: &'static str,
}

/// Operations the repository adapter needs from a GitHub client.
///
/// Implemented for [`Octocrab`]; tests substitute scripted fakes.
#[async_trait]
pub trait GitHubTransport: Send + Sync {
    /// Executes a GraphQL operation and returns the raw `{data, errors}` body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failures or non-success HTTP
    /// statuses. GraphQL-level errors are part of the returned body.
    async fn execute(&self, request: &GraphQlRequest) -> Result<Value, ClientError>;

    /// Fetches the decoded README of a repository through the REST API.
    ///
    /// Returns `Ok(None)` when the repository has no README.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failures.
    async fn fetch_readme(&self, owner: &str, name: &str) -> Result<Option<String>, ClientError>;
}

#[async_trait]
impl GitHubTransport for Octocrab {
    async fn execute(&self, request: &GraphQlRequest) -> Result<Value, ClientError> {
        let body: Value = self.post("/graphql", Some(request)).await?;
        Ok(body)
    }

    async fn fetch_readme(&self, owner: &str, name: &str) -> Result<Option<String>, ClientError> {
        let route = format!("/repos/{owner}/{name}/readme");
        match self.get::<Content, _, _>(route, None::<&()>).await {
            Ok(content) => Ok(content.decoded_content()),
            Err(octocrab::Error::GitHub { source, .. }) if source.status_code.as_u16() == 404 => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
