//! Search screen state.

use crate::models::Repository;
use serde::Serialize;

/// Query searched when the screen opens.
pub const DEFAULT_SEARCH_QUERY: &str = "kotlin";

/// Snapshot of the search screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchState {
    /// Text currently in the search box.
    pub search_query: String,

    /// Results of the last completed search, in GitHub's order.
    pub repositories: Vec<Repository>,

    /// Whether a search is in flight.
    pub is_loading: bool,

    /// Message of the last failed search.
    pub error_message: Option<String>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::with_query(DEFAULT_SEARCH_QUERY)
    }
}

impl SearchState {
    /// Creates an idle state with the given query.
    #[must_use]
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            search_query: query.into(),
            repositories: Vec::new(),
            is_loading: false,
            error_message: None,
        }
    }

    pub(crate) fn begin_loading(&mut self) {
        self.is_loading = true;
        self.error_message = None;
    }

    pub(crate) fn complete(&mut self, outcome: Result<Vec<Repository>, String>) {
        self.is_loading = false;
        match outcome {
            Ok(repositories) => {
                self.repositories = repositories;
                self.error_message = None;
            }
            Err(message) => {
                self.repositories = Vec::new();
                self.error_message = Some(message);
            }
        }
    }
}
