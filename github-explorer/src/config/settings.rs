//! Explorer settings deserialization.

use serde::Deserialize;

/// Parsed contents of the optional config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ExplorerConfig {
    /// GitHub API root (defaults to the public API).
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Query searched when the search view opens.
    #[serde(default = "default_query")]
    pub default_query: String,

    /// Number of repositories requested per search.
    #[serde(default = "default_search_limit")]
    pub search_limit: u32,

    /// Number of issues, pull requests, releases and languages requested
    /// for the details view.
    #[serde(default = "default_detail_items")]
    pub detail_items: u32,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            default_query: default_query(),
            search_limit: default_search_limit(),
            detail_items: default_detail_items(),
        }
    }
}

pub(crate) fn default_api_base_url() -> String {
    crate::client::DEFAULT_API_BASE_URL.to_string()
}

pub(crate) fn default_query() -> String {
    crate::view_models::DEFAULT_SEARCH_QUERY.to_string()
}

pub(crate) fn default_search_limit() -> u32 {
    20
}

pub(crate) fn default_detail_items() -> u32 {
    10
}
