#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod app;
pub mod client;
pub mod config;
pub mod models;
pub mod rate_limit;
pub mod repository;
pub mod view_models;
pub mod views;

#[cfg(test)]
mod testing;

pub use app::{App, AppError};
pub use client::{ClientCache, ClientConfig, ClientError, Credentials, GitHubTransport};
pub use config::{ConfigError, ExplorerConfig};
pub use models::{
    Author, Issue, Language, Owner, PullRequest, Readme, ReleaseDetail, Repository,
    RepositoryDetails, README_NOT_FOUND,
};
pub use rate_limit::{wait_if_needed, RateLimitInfo, RateLimitTracker};
pub use repository::{
    GitHubRepository, GraphQlRepository, QueryOptions, RepositoryError, UNKNOWN_ERROR_MESSAGE,
};
pub use view_models::{DetailsState, DetailsViewModel, SearchState, SearchViewModel};
pub use views::{ViewError, ViewRenderer};
