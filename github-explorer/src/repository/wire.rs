//! Wire shapes of the GraphQL responses.
//!
//! These mirror the selections in `graphql/*.graphql`. Optional and nullable
//! fields are `Option` so partial responses still decode.

use super::{RepositoryError, UNKNOWN_ERROR_MESSAGE};
use crate::rate_limit::RateLimitInfo;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// The `{data, errors}` envelope every GraphQL response is wrapped in.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> GraphQlResponse<T> {
    /// Returns the failure reason if the response carries errors.
    ///
    /// Only the first error is reported; an error without a message falls
    /// back to [`UNKNOWN_ERROR_MESSAGE`].
    pub fn error_message(&self) -> Option<String> {
        let first = self.errors.as_ref()?.first()?;
        Some(
            first
                .message
                .clone()
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string()),
        )
    }

    /// Converts the envelope into its data, failing on reported errors.
    pub fn into_result(self) -> Result<Option<T>, RepositoryError> {
        match self.error_message() {
            Some(message) => Err(RepositoryError::GraphQl { message }),
            None => Ok(self.data),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RateLimitNode {
    pub limit: u32,
    pub remaining: u32,
    pub reset_at: DateTime<Utc>,
}

impl From<&RateLimitNode> for RateLimitInfo {
    fn from(node: &RateLimitNode) -> Self {
        RateLimitInfo::from_reset_at(node.limit, node.remaining, node.reset_at)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchData {
    pub search: Option<SearchConnection>,
    #[serde(default)]
    pub rate_limit: Option<RateLimitNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchConnection {
    #[serde(default)]
    pub edges: Option<Vec<Option<SearchEdge>>>,
}

/// A search edge. The node stays untyped so that non-repository results
/// and malformed entries can be skipped individually.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchEdge {
    #[serde(default)]
    pub node: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RepositoryNode {
    pub name: String,
    pub owner: LoginNode,
    pub description: Option<String>,
    pub stargazer_count: u32,
    pub fork_count: u32,
    pub primary_language: Option<LanguageNode>,
    pub latest_release: Option<ReleaseNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginNode {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LanguageNode {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReleaseNode {
    pub name: Option<String>,
    pub tag_name: String,
    pub url: String,
    pub is_latest: bool,
    pub description: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DetailsData {
    pub repository: Option<RepositoryDetailsNode>,
    #[serde(default)]
    pub rate_limit: Option<RateLimitNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RepositoryDetailsNode {
    pub id: String,
    pub name: String,
    pub name_with_owner: String,
    pub description: Option<String>,
    pub url: String,
    pub homepage_url: Option<String>,
    pub stargazer_count: u32,
    pub fork_count: u32,
    pub is_private: bool,
    pub owner: OwnerNode,
    pub primary_language: Option<LanguageNode>,
    #[serde(default)]
    pub languages: Option<Connection<LanguageNode>>,
    pub issues: CountedConnection<IssueNode>,
    pub pull_requests: CountedConnection<IssueNode>,
    pub latest_release: Option<ReleaseNode>,
    #[serde(default)]
    pub releases: Option<Connection<ReleaseNode>>,
    #[serde(default)]
    pub readme_upper: Option<BlobNode>,
    #[serde(default)]
    pub readme_lower: Option<BlobNode>,
    #[serde(default)]
    pub readme_title: Option<BlobNode>,
    #[serde(default)]
    pub readme_plain: Option<BlobNode>,
    #[serde(default)]
    pub readme_docs: Option<BlobNode>,
}

impl RepositoryDetailsNode {
    /// README candidates in lookup priority order.
    pub fn readme_candidates(&self) -> [Option<&BlobNode>; 5] {
        [
            self.readme_upper.as_ref(),
            self.readme_lower.as_ref(),
            self.readme_title.as_ref(),
            self.readme_plain.as_ref(),
            self.readme_docs.as_ref(),
        ]
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OwnerNode {
    pub login: String,
    pub avatar_url: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Connection<T> {
    pub nodes: Option<Vec<Option<T>>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CountedConnection<T> {
    pub total_count: u32,
    pub nodes: Option<Vec<Option<T>>>,
}

/// Shared shape of issue and pull request nodes.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IssueNode {
    pub number: u64,
    pub title: String,
    pub url: String,
    pub state: String,
    pub created_at: DateTime<Utc>,
    pub author: Option<AuthorNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthorNode {
    pub login: String,
    pub avatar_url: String,
}

/// A git object. Only blobs carry `text`; trees and binary blobs don't.
#[derive(Debug, Deserialize)]
pub(crate) struct BlobNode {
    #[serde(default)]
    pub text: Option<String>,
}
