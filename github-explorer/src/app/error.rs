//! Application assembly errors.

use crate::config::ConfigError;
use crate::views::ViewError;

/// Errors that can occur while assembling or running the application.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration and credential errors.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// View template errors.
    #[error(transparent)]
    View(#[from] ViewError),

    /// A view-model task panicked or was cancelled.
    #[error("View-model task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
