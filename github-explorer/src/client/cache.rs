//! Lazily constructed shared client.

use super::{build_octocrab, ClientConfig, ClientError};
use octocrab::Octocrab;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

type Factory<T> = Box<dyn Fn() -> Result<T, ClientError> + Send + Sync>;

/// Holds the single client instance shared by every query.
///
/// The client is built on first use. Acquisition is double-checked: a read
/// lock serves the common case, and the write lock re-checks the slot before
/// constructing, so concurrent first callers share one instance. [`clear`]
/// drops the instance under the same lock; the next acquisition builds a
/// fresh one.
///
/// [`clear`]: ClientCache::clear
pub struct ClientCache<T> {
    factory: Factory<T>,
    slot: RwLock<Option<Arc<T>>>,
}

impl<T> ClientCache<T> {
    /// Creates an empty cache that builds clients with `factory`.
    pub fn new(factory: impl Fn() -> Result<T, ClientError> + Send + Sync + 'static) -> Self {
        Self {
            factory: Box::new(factory),
            slot: RwLock::new(None),
        }
    }

    /// Returns the shared client, building it if needed.
    ///
    /// # Errors
    ///
    /// Returns the factory's error if construction fails. The slot stays
    /// empty so the next call retries.
    pub async fn get(&self) -> Result<Arc<T>, ClientError> {
        {
            let slot = self.slot.read().await;
            if let Some(client) = slot.as_ref() {
                return Ok(Arc::clone(client));
            }
        }

        let mut slot = self.slot.write().await;
        if let Some(client) = slot.as_ref() {
            return Ok(Arc::clone(client));
        }

        debug!("Creating shared GitHub client");
        let client = Arc::new((self.factory)()?);
        *slot = Some(Arc::clone(&client));
        Ok(client)
    }

    /// Discards the shared client.
    pub async fn clear(&self) {
        let mut slot = self.slot.write().await;
        if slot.take().is_some() {
            info!("Cleared shared GitHub client");
        }
    }

    /// Returns true if a client has been built and not cleared.
    pub async fn is_initialized(&self) -> bool {
        self.slot.read().await.is_some()
    }
}

impl ClientCache<Octocrab> {
    /// Creates a cache that builds authenticated [`Octocrab`] clients.
    pub fn github(config: ClientConfig) -> Self {
        Self::new(move || build_octocrab(&config))
    }
}

impl<T> fmt::Debug for ClientCache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCache").finish_non_exhaustive()
    }
}
