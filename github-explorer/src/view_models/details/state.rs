//! Details screen state.

use crate::models::RepositoryDetails;
use serde::Serialize;

/// Snapshot of the details screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetailsState {
    /// Whether the details query is in flight.
    pub is_loading: bool,

    /// Details of the last successfully loaded repository.
    pub repository_details: Option<RepositoryDetails>,

    /// Message of the last failed details query.
    pub error_message: Option<String>,

    /// README text loaded separately when the details query found none.
    pub readme_content: Option<String>,

    /// Whether the separate README request is in flight.
    pub is_readme_loading: bool,

    /// Message of the last failed README request.
    pub readme_error: Option<String>,
}

impl DetailsState {
    /// Returns the README text to display, preferring the separately loaded one.
    #[must_use]
    pub fn readme_text(&self) -> Option<&str> {
        self.readme_content.as_deref().or_else(|| {
            self.repository_details
                .as_ref()
                .map(|details| details.readme.text.as_str())
        })
    }

    pub(crate) fn begin_loading(&mut self) {
        self.is_loading = true;
        self.error_message = None;
    }

    pub(crate) fn complete(&mut self, outcome: Result<RepositoryDetails, String>) {
        self.is_loading = false;
        match outcome {
            Ok(details) => {
                self.repository_details = Some(details);
                self.error_message = None;
                self.readme_content = None;
                self.readme_error = None;
            }
            Err(message) => self.error_message = Some(message),
        }
    }

    pub(crate) fn begin_readme(&mut self) {
        self.is_readme_loading = true;
        self.readme_error = None;
    }

    pub(crate) fn complete_readme(&mut self, outcome: Result<String, String>) {
        self.is_readme_loading = false;
        match outcome {
            Ok(text) => {
                self.readme_content = Some(text);
                self.readme_error = None;
            }
            Err(message) => self.readme_error = Some(message),
        }
    }
}
