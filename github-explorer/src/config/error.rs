//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse config file '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Validation error in the config file.
    #[error("Validation error in '{path}': {message}")]
    ValidationError { path: String, message: String },

    /// No GitHub token was supplied.
    #[error("GitHub token not configured; pass --token or set GITHUB_TOKEN")]
    MissingToken,
}
