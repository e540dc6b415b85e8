//! Search screen view-model.

mod state;

pub use state::{SearchState, DEFAULT_SEARCH_QUERY};

use super::first_result;
use crate::models::Repository;
use crate::repository::{GitHubRepository, RepositoryError};
use futures::stream::BoxStream;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info_span, warn, Instrument};

/// Drives the search screen.
///
/// Searches are not cancelled when a new one starts. Whichever request
/// completes last writes the state, so a slow older search can overwrite
/// the results of a newer one. Such late results are logged as superseded.
#[derive(Clone)]
pub struct SearchViewModel {
    inner: Arc<SearchInner>,
}

struct SearchInner {
    repository: Arc<dyn GitHubRepository>,
    state: watch::Sender<SearchState>,
    /// Id of the most recently issued request.
    issued: AtomicU64,
}

impl SearchViewModel {
    /// Creates the view-model and searches for [`DEFAULT_SEARCH_QUERY`].
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn new(repository: Arc<dyn GitHubRepository>) -> Self {
        Self::with_query(repository, DEFAULT_SEARCH_QUERY)
    }

    /// Creates the view-model and searches for `query` unless it is blank.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn with_query(repository: Arc<dyn GitHubRepository>, query: impl Into<String>) -> Self {
        let (state, _) = watch::channel(SearchState::with_query(query));
        let view_model = Self {
            inner: Arc::new(SearchInner {
                repository,
                state,
                issued: AtomicU64::new(0),
            }),
        };
        view_model.on_search_clicked();
        view_model
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> SearchState {
        self.inner.state.borrow().clone()
    }

    /// Subscribes to state changes.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.inner.state.subscribe()
    }

    /// Updates the query text. Does not search.
    pub fn on_search_query_changed(&self, query: impl Into<String>) {
        let query = query.into();
        self.inner
            .state
            .send_modify(|state| state.search_query = query);
    }

    /// Searches for the current query.
    ///
    /// Returns the handle of the spawned search, or `None` if the query is
    /// blank.
    pub fn on_search_clicked(&self) -> Option<JoinHandle<()>> {
        let query = self.inner.state.borrow().search_query.clone();
        if query.trim().is_empty() {
            debug!("Ignoring search for blank query");
            return None;
        }
        Some(self.launch_search(query))
    }

    fn launch_search(&self, query: String) -> JoinHandle<()> {
        let request_id = self.inner.issued.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.state.send_modify(SearchState::begin_loading);

        let results = self.inner.repository.search_repositories(&query);
        let inner = Arc::clone(&self.inner);
        let span = info_span!("search", request_id, query = %query);
        tokio::spawn(async move { inner.finish_search(request_id, results).await }.instrument(span))
    }
}

impl SearchInner {
    async fn finish_search(
        &self,
        request_id: u64,
        results: BoxStream<'static, Result<Vec<Repository>, RepositoryError>>,
    ) {
        let outcome = first_result(results).await;

        let latest = self.issued.load(Ordering::SeqCst);
        if request_id < latest {
            warn!(
                request_id,
                latest, "Superseded search completed after a newer request; applying its result"
            );
        }

        self.state.send_modify(|state| state.complete(outcome));
    }
}
