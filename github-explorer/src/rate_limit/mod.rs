//! Rate limiting for the GitHub GraphQL API.
//!
//! Every query selects `rateLimit { limit remaining resetAt }`. The adapter
//! records the latest value in a [`RateLimitTracker`] and waits for the
//! window to reset before issuing a request when the budget is nearly spent.

mod info;

pub use info::RateLimitInfo;

use std::sync::Mutex;
use std::time::Duration;
use tracing::{info, warn};

/// Maximum time to wait for rate limit reset (1 hour).
const MAX_WAIT_SECS: u64 = 3600;

/// Minimum remaining points before proactively waiting.
const MIN_REMAINING_THRESHOLD: u32 = 5;

/// Waits if the rate limit is low, returning true if we waited.
///
/// Waits until `info.reset` when fewer than `MIN_REMAINING_THRESHOLD` points
/// remain. The wait is capped at one hour.
pub async fn wait_if_needed(info: &RateLimitInfo) -> bool {
    if info.remaining >= MIN_REMAINING_THRESHOLD {
        return false;
    }

    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    if info.reset <= now {
        return false;
    }

    let wait_secs = info.reset - now;
    if wait_secs > MAX_WAIT_SECS {
        warn!(
            wait_secs,
            max_wait = MAX_WAIT_SECS,
            "Rate limit reset too far in future, capping wait time"
        );
    }

    let actual_wait = wait_secs.min(MAX_WAIT_SECS);
    info!(
        remaining = info.remaining,
        wait_secs = actual_wait,
        "Rate limit low, waiting for reset"
    );

    tokio::time::sleep(Duration::from_secs(actual_wait)).await;
    true
}

/// Remembers the most recent rate limit reported by GitHub.
#[derive(Debug, Default)]
pub struct RateLimitTracker {
    latest: Mutex<Option<RateLimitInfo>>,
}

impl RateLimitTracker {
    /// Creates a tracker with no recorded state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the rate limit from a response.
    pub fn record(&self, info: RateLimitInfo) {
        *self
            .latest
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(info);
    }

    /// Returns the most recently recorded rate limit.
    pub fn latest(&self) -> Option<RateLimitInfo> {
        *self
            .latest
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Waits for the reset if the last response left too few points.
    ///
    /// Returns true if we waited.
    pub async fn throttle(&self) -> bool {
        match self.latest() {
            Some(info) => wait_if_needed(&info).await,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_wait_if_needed_no_wait() {
        let info = RateLimitInfo {
            remaining: 100,
            reset: 0,
            limit: 1000,
        };

        let waited = wait_if_needed(&info).await;
        assert!(!waited);
    }

    #[tokio::test]
    async fn test_wait_if_needed_reset_passed() {
        let info = RateLimitInfo {
            remaining: 1,
            reset: 0, // Already passed
            limit: 5000,
        };

        let waited = wait_if_needed(&info).await;
        assert!(!waited);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_if_needed_waits_until_reset() {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs();
        let info = RateLimitInfo {
            remaining: 0,
            reset: now + 30,
            limit: 5000,
        };

        let waited = wait_if_needed(&info).await;
        assert!(waited);
    }

    #[tokio::test]
    async fn tracker_starts_empty() {
        let tracker = RateLimitTracker::new();

        assert!(tracker.latest().is_none());
        assert!(!tracker.throttle().await);
    }

    #[test]
    fn tracker_survives_poisoned_lock() {
        let tracker = std::sync::Arc::new(RateLimitTracker::new());
        let holder = std::sync::Arc::clone(&tracker);
        let _ = std::thread::spawn(move || {
            let _guard = holder.latest.lock().unwrap();
            panic!("panicked while holding the rate limit lock");
        })
        .join();
        assert!(tracker.latest.is_poisoned());

        tracker.record(RateLimitInfo {
            remaining: 3,
            reset: 7,
            limit: 5000,
        });

        assert_eq!(tracker.latest().map(|info| info.remaining), Some(3));
    }

    #[test]
    fn tracker_keeps_latest_value() {
        let tracker = RateLimitTracker::new();
        tracker.record(RateLimitInfo {
            remaining: 10,
            reset: 1,
            limit: 5000,
        });
        tracker.record(RateLimitInfo {
            remaining: 9,
            reset: 2,
            limit: 5000,
        });

        assert_eq!(tracker.latest().map(|info| info.remaining), Some(9));
    }
}
