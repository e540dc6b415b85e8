//! View-models for the search and details screens.
//!
//! Each view-model owns its state in a [`tokio::sync::watch`] channel: the
//! view-model is the only writer, and views subscribe to receive a fresh
//! snapshot on every change. Actions spawn a Tokio task that consumes the
//! repository stream and folds the result into state; the task handle is
//! returned so callers can await completion.

mod details;
mod search;

pub use details::{DetailsState, DetailsViewModel};
pub use search::{SearchState, SearchViewModel, DEFAULT_SEARCH_QUERY};

use crate::repository::{RepositoryError, UNKNOWN_ERROR_MESSAGE};
use futures::stream::BoxStream;
use futures::StreamExt;

/// Takes the single result a repository stream yields.
///
/// Errors become their display message. A stream that ends without
/// emitting is treated as a failure too.
async fn first_result<T>(
    mut stream: BoxStream<'static, Result<T, RepositoryError>>,
) -> Result<T, String> {
    match stream.next().await {
        Some(Ok(value)) => Ok(value),
        Some(Err(e)) => Err(e.to_string()),
        None => Err(UNKNOWN_ERROR_MESSAGE.to_string()),
    }
}
