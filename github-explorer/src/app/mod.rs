//! Composition root.
//!
//! [`App`] owns the one shared client cache and the repository adapter built
//! on top of it, and hands out view-models wired to that adapter. Nothing
//! else in the crate constructs these objects.

mod error;

pub use error::AppError;

use crate::client::{ClientCache, ClientConfig, Credentials};
use crate::config::ExplorerConfig;
use crate::repository::{GitHubRepository, GraphQlRepository, QueryOptions};
use crate::view_models::{DetailsViewModel, SearchViewModel};
use crate::views::ViewRenderer;
use octocrab::Octocrab;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// The assembled object graph.
pub struct App {
    config: ExplorerConfig,
    clients: Arc<ClientCache<Octocrab>>,
    repository: GraphQlRepository<Octocrab>,
    renderer: ViewRenderer,
}

impl App {
    /// Assembles the application. The GitHub client itself is built lazily
    /// on first use.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::View`] if a view template fails to parse.
    pub fn new(config: ExplorerConfig, credentials: Credentials) -> Result<Self, AppError> {
        let client_config =
            ClientConfig::new(credentials).with_api_base_url(config.api_base_url.clone());
        let clients = Arc::new(ClientCache::github(client_config));
        let repository = GraphQlRepository::new(
            Arc::clone(&clients),
            QueryOptions {
                search_limit: config.search_limit,
                detail_items: config.detail_items,
            },
        );

        Ok(Self {
            config,
            clients,
            repository,
            renderer: ViewRenderer::new()?,
        })
    }

    /// Loads the optional config file and resolves the token, falling back
    /// to `GITHUB_TOKEN` when none is given.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if the config file is invalid or no
    /// token is available.
    pub fn from_sources(config_path: Option<&Path>, token: Option<String>) -> Result<Self, AppError> {
        let config = ExplorerConfig::load_or_default(config_path)?;
        let credentials = match token {
            Some(token) if !token.trim().is_empty() => Credentials::new(token),
            _ => Credentials::from_env()?,
        };
        info!(api = %config.api_base_url, "Starting GitHub explorer");
        Self::new(config, credentials)
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Returns the view renderer.
    pub fn renderer(&self) -> &ViewRenderer {
        &self.renderer
    }

    /// Returns the repository port backed by the shared client.
    pub fn repository(&self) -> Arc<dyn GitHubRepository> {
        Arc::new(self.repository.clone())
    }

    /// Creates a search view-model that immediately searches for the
    /// configured default query.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn search_view_model(&self) -> SearchViewModel {
        SearchViewModel::with_query(self.repository(), self.config.default_query.clone())
    }

    /// Creates an idle details view-model.
    pub fn details_view_model(&self) -> DetailsViewModel {
        DetailsViewModel::new(self.repository())
    }

    /// Drops the shared client so the next request builds a fresh one.
    pub async fn clear_cache(&self) {
        self.clients.clear().await;
    }

    /// Returns whether the shared client has been built.
    pub async fn is_client_initialized(&self) -> bool {
        self.clients.is_initialized().await
    }
}
