//! Details screen view-model.

mod state;

pub use state::DetailsState;

use super::first_result;
use crate::models::RepositoryDetails;
use crate::repository::{GitHubRepository, RepositoryError};
use futures::stream::BoxStream;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info_span, Instrument};

/// Drives the details screen of one repository at a time.
#[derive(Clone)]
pub struct DetailsViewModel {
    inner: Arc<DetailsInner>,
}

struct DetailsInner {
    repository: Arc<dyn GitHubRepository>,
    state: watch::Sender<DetailsState>,
    /// Last (owner, name) the screen was activated for.
    active: Mutex<Option<(String, String)>>,
}

impl DetailsViewModel {
    /// Creates an idle view-model.
    pub fn new(repository: Arc<dyn GitHubRepository>) -> Self {
        let (state, _) = watch::channel(DetailsState::default());
        Self {
            inner: Arc::new(DetailsInner {
                repository,
                state,
                active: Mutex::new(None),
            }),
        }
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> DetailsState {
        self.inner.state.borrow().clone()
    }

    /// Subscribes to state changes.
    pub fn subscribe(&self) -> watch::Receiver<DetailsState> {
        self.inner.state.subscribe()
    }

    /// Called when the details screen becomes active for `owner/name`.
    ///
    /// Loads the details once per distinct repository; re-activation for the
    /// same repository returns `None`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn on_screen_active(&self, owner: &str, name: &str) -> Option<JoinHandle<()>> {
        {
            let mut active = self
                .inner
                .active
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if active
                .as_ref()
                .is_some_and(|(o, n)| o == owner && n == name)
            {
                debug!(owner, name, "Details already requested");
                return None;
            }
            *active = Some((owner.to_string(), name.to_string()));
        }
        Some(self.load_repository_details(owner, name))
    }

    /// Loads the details of `owner/name`.
    ///
    /// If the details carry no README, the README is then fetched
    /// separately within the same task.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn load_repository_details(&self, owner: &str, name: &str) -> JoinHandle<()> {
        self.inner.state.send_modify(DetailsState::begin_loading);
        let results = self.inner.repository.get_repository_details(owner, name);

        let inner = Arc::clone(&self.inner);
        let (owner, name) = (owner.to_string(), name.to_string());
        let span = info_span!("details", owner = %owner, name = %name);
        tokio::spawn(async move { inner.finish_details(&owner, &name, results).await }.instrument(span))
    }

    /// Loads the README of `owner/name` into the README sub-state.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn load_readme(&self, owner: &str, name: &str) -> JoinHandle<()> {
        let inner = Arc::clone(&self.inner);
        let (owner, name) = (owner.to_string(), name.to_string());
        let span = info_span!("readme", owner = %owner, name = %name);
        tokio::spawn(async move { inner.run_readme(&owner, &name).await }.instrument(span))
    }
}

impl DetailsInner {
    async fn finish_details(
        &self,
        owner: &str,
        name: &str,
        results: BoxStream<'static, Result<RepositoryDetails, RepositoryError>>,
    ) {
        let outcome = first_result(results).await;
        let readme_missing = matches!(&outcome, Ok(details) if details.readme.is_missing());

        self.state.send_modify(|state| state.complete(outcome));

        if readme_missing {
            debug!("No README in details, fetching it separately");
            self.run_readme(owner, name).await;
        }
    }

    async fn run_readme(&self, owner: &str, name: &str) {
        self.state.send_modify(DetailsState::begin_readme);
        let outcome = first_result(self.repository.get_repository_readme(owner, name)).await;
        self.state.send_modify(|state| state.complete_readme(outcome));
    }
}
