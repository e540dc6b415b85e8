//! Bearer token credentials.

use crate::config::ConfigError;
use std::fmt;

/// Environment variable the token is read from.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// A single static GitHub token.
///
/// The token is never printed; `Debug` output is redacted.
#[derive(Clone)]
pub struct Credentials {
    token: String,
}

impl Credentials {
    /// Wraps a token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Reads the token from `GITHUB_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingToken`] if the variable is unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(TOKEN_ENV_VAR) {
            Ok(token) if !token.trim().is_empty() => Ok(Self::new(token.trim())),
            _ => Err(ConfigError::MissingToken),
        }
    }

    /// Returns the raw token.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .finish()
    }
}
