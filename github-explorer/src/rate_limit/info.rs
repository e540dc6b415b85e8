//! Rate limit information.

use chrono::{DateTime, Utc};

/// GraphQL rate limit state reported alongside a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Points remaining in the current window.
    pub remaining: u32,

    /// Unix timestamp when the rate limit resets.
    pub reset: u64,

    /// Total points allowed per window.
    pub limit: u32,
}

impl RateLimitInfo {
    /// Builds rate limit info from the GraphQL `rateLimit` object.
    #[must_use]
    pub fn from_reset_at(limit: u32, remaining: u32, reset_at: DateTime<Utc>) -> Self {
        Self {
            remaining,
            reset: u64::try_from(reset_at.timestamp()).unwrap_or_default(),
            limit,
        }
    }
}
