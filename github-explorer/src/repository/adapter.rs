//! GraphQL-backed implementation of the repository port.

use super::wire::{DetailsData, GraphQlResponse, SearchData};
use super::{mappers, queries, GitHubRepository, RepositoryError};
use crate::client::{ClientCache, ClientError, GitHubTransport, GraphQlRequest};
use crate::models::{Repository, RepositoryDetails};
use crate::rate_limit::{RateLimitInfo, RateLimitTracker};
use futures::stream::{self, BoxStream, StreamExt};
use octocrab::Octocrab;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, info, info_span, warn, Instrument};

/// Page sizes used when querying GitHub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Repositories requested per search.
    pub search_limit: u32,
    /// Issues, pull requests, releases and languages requested per details query.
    pub detail_items: u32,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            search_limit: 20,
            detail_items: 10,
        }
    }
}

/// Implements [`GitHubRepository`] on top of the GitHub GraphQL API.
///
/// Every call acquires the shared client from the [`ClientCache`], so
/// clearing the cache affects all subsequent calls.
pub struct GraphQlRepository<T = Octocrab> {
    inner: Arc<Adapter<T>>,
}

struct Adapter<T> {
    clients: Arc<ClientCache<T>>,
    options: QueryOptions,
    rate_limit: RateLimitTracker,
}

impl<T> Clone for GraphQlRepository<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: GitHubTransport + 'static> GraphQlRepository<T> {
    /// Creates an adapter that issues queries through `clients`.
    pub fn new(clients: Arc<ClientCache<T>>, options: QueryOptions) -> Self {
        Self {
            inner: Arc::new(Adapter {
                clients,
                options,
                rate_limit: RateLimitTracker::new(),
            }),
        }
    }

    /// Discards the shared client; the next call builds a new one.
    pub async fn clear_cache(&self) {
        self.inner.clients.clear().await;
    }

    /// Returns the rate limit reported by the last response.
    pub fn rate_limit(&self) -> Option<RateLimitInfo> {
        self.inner.rate_limit.latest()
    }
}

impl<T: GitHubTransport + 'static> GitHubRepository for GraphQlRepository<T> {
    fn search_repositories(
        &self,
        query: &str,
    ) -> BoxStream<'static, Result<Vec<Repository>, RepositoryError>> {
        let inner = Arc::clone(&self.inner);
        let query = query.to_string();
        let span = info_span!("search_repositories", query = %query);

        stream::once(
            async move {
                let result = inner.search(&query).await;
                match &result {
                    Ok(repositories) => info!(count = repositories.len(), "Search complete"),
                    Err(e) => warn!(error = %e, "Search failed"),
                }
                result
            }
            .instrument(span),
        )
        .boxed()
    }

    fn get_repository_details(
        &self,
        owner: &str,
        name: &str,
    ) -> BoxStream<'static, Result<RepositoryDetails, RepositoryError>> {
        let inner = Arc::clone(&self.inner);
        let owner = owner.to_string();
        let name = name.to_string();
        let span = info_span!("repository_details", owner = %owner, name = %name);

        stream::once(
            async move {
                let result = inner.details(&owner, &name).await;
                match &result {
                    Ok(details) => info!(
                        issues = details.issues.len(),
                        pull_requests = details.pull_requests.len(),
                        releases = details.releases.len(),
                        "Details loaded"
                    ),
                    Err(e) => warn!(error = %e, "Failed to load details"),
                }
                result
            }
            .instrument(span),
        )
        .boxed()
    }

    fn get_repository_readme(
        &self,
        owner: &str,
        name: &str,
    ) -> BoxStream<'static, Result<String, RepositoryError>> {
        let inner = Arc::clone(&self.inner);
        let owner = owner.to_string();
        let name = name.to_string();
        let span = info_span!("repository_readme", owner = %owner, name = %name);

        stream::once(
            async move {
                let result = inner.readme(&owner, &name).await;
                if let Err(e) = &result {
                    warn!(error = %e, "Failed to load README");
                }
                result
            }
            .instrument(span),
        )
        .boxed()
    }
}

impl<T: GitHubTransport> Adapter<T> {
    async fn search(&self, query: &str) -> Result<Vec<Repository>, RepositoryError> {
        let request = queries::search_repositories(query, self.options.search_limit);
        let response: GraphQlResponse<SearchData> = self.execute(&request).await?;

        let Some(data) = response.into_result()? else {
            debug!("Search response carried no data");
            return Ok(Vec::new());
        };
        if let Some(rate_limit) = &data.rate_limit {
            self.rate_limit.record(rate_limit.into());
        }

        Ok(mappers::map_search_results(data.search))
    }

    async fn details(&self, owner: &str, name: &str) -> Result<RepositoryDetails, RepositoryError> {
        let request = queries::repository_details(owner, name, self.options.detail_items);
        let response: GraphQlResponse<DetailsData> = self.execute(&request).await?;

        let data = response.into_result()?;
        if let Some(rate_limit) = data.as_ref().and_then(|data| data.rate_limit.as_ref()) {
            self.rate_limit.record(rate_limit.into());
        }

        match data.and_then(|data| data.repository) {
            Some(repository) => Ok(mappers::map_repository_details(repository)),
            None => Err(RepositoryError::NotFound {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
        }
    }

    async fn readme(&self, owner: &str, name: &str) -> Result<String, RepositoryError> {
        let client = self.clients.get().await?;
        match client.fetch_readme(owner, name).await? {
            Some(text) => Ok(text),
            None => Err(RepositoryError::ReadmeNotFound {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
        }
    }

    /// Runs a GraphQL request and decodes the envelope.
    async fn execute<D: DeserializeOwned>(
        &self,
        request: &GraphQlRequest,
    ) -> Result<GraphQlResponse<D>, RepositoryError> {
        self.rate_limit.throttle().await;

        let client = self.clients.get().await?;
        debug!(operation = request.operation_name, "Executing GraphQL operation");
        let body = client.execute(request).await?;

        let response = serde_json::from_value(body).map_err(ClientError::from)?;
        Ok(response)
    }
}
