//! Configuration loading.
//!
//! All settings are optional; a missing file means defaults. The token is
//! deliberately not part of the file and comes from the command line or
//! `GITHUB_TOKEN` instead (see [`crate::client::Credentials`]).

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::ExplorerConfig;

use std::path::Path;
use tracing::{debug, info};

/// Upper bound GitHub accepts for `first:` connection arguments.
pub const MAX_PAGE_SIZE: u32 = 100;

impl ExplorerConfig {
    /// Loads and validates a config file.
    ///
    /// ```toml
    /// api-base-url = "https://api.github.com"
    /// default-query = "kotlin"
    /// search-limit = 20
    /// detail-items = 10
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file can't be read, isn't valid TOML,
    /// or contains out-of-range values.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        info!(path = %path.display(), "Loading config");

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

        config.validate(path)?;
        debug!(?config, "Loaded config");
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    ///
    /// # Errors
    ///
    /// See [`ExplorerConfig::load`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::ValidationError {
            path: path.display().to_string(),
            message,
        };

        let url = url::Url::parse(&self.api_base_url)
            .map_err(|e| invalid(format!("api-base-url '{}': {e}", self.api_base_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!(
                "api-base-url must use http or https, got '{}'",
                url.scheme()
            )));
        }

        for (key, value) in [
            ("search-limit", self.search_limit),
            ("detail-items", self.detail_items),
        ] {
            if value == 0 || value > MAX_PAGE_SIZE {
                return Err(invalid(format!(
                    "{key} must be between 1 and {MAX_PAGE_SIZE}, got {value}"
                )));
            }
        }

        Ok(())
    }
}
