//! Client-side request pacing
//!
//! A single shared token bucket (governor) in front of every outbound GET.
//! A page plus its lookahead is two tokens.

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Governor};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::sync::Arc;

type DirectLimiter = Governor<NotKeyed, InMemoryState, DefaultClock>;

/// Rate limit settings, as read from the `http.rate_limit` config block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimiterConfig {
    /// Sustained requests per second
    pub requests_per_second: u32,
    /// Requests allowed back to back before pacing starts
    #[serde(default = "default_burst_size")]
    pub burst_size: u32,
}

fn default_burst_size() -> u32 {
    // Enough for a page and its lookahead
    2
}

impl RateLimiterConfig {
    /// Create a new rate limiter config
    pub fn new(requests_per_second: u32, burst_size: u32) -> Self {
        Self {
            requests_per_second,
            burst_size,
        }
    }

    fn quota(&self) -> Quota {
        let at_least_one = |n: u32| NonZeroU32::new(n).unwrap_or(NonZeroU32::MIN);
        Quota::per_second(at_least_one(self.requests_per_second))
            .allow_burst(at_least_one(self.burst_size))
    }
}

/// Shared token bucket; clones draw from the same bucket
#[derive(Clone)]
pub struct RateLimiter {
    bucket: Arc<DirectLimiter>,
}

impl RateLimiter {
    /// Create a limiter; zero settings are raised to one
    pub fn new(config: &RateLimiterConfig) -> Self {
        Self {
            bucket: Arc::new(Governor::direct(config.quota())),
        }
    }

    /// Wait for a token
    pub async fn acquire(&self) {
        self.bucket.until_ready().await;
    }

    /// Take a token if one is available now
    pub fn try_acquire(&self) -> bool {
        self.bucket.check().is_ok()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod rate_limit_tests {
    use super::*;

    #[test]
    fn test_config_burst_defaults_to_page_and_lookahead() {
        let config: RateLimiterConfig =
            serde_yaml::from_str("requests_per_second: 5").unwrap();
        assert_eq!(config, RateLimiterConfig::new(5, 2));
    }

    #[test]
    fn test_zero_settings_still_admit_one_request() {
        let limiter = RateLimiter::new(&RateLimiterConfig::new(0, 0));
        assert!(limiter.try_acquire());
        assert!(!limiter.try_acquire());
    }

    #[test]
    fn test_clones_share_bucket() {
        let limiter = RateLimiter::new(&RateLimiterConfig::new(1, 2));
        let clone = limiter.clone();

        assert!(limiter.try_acquire());
        assert!(clone.try_acquire());
        assert!(!limiter.try_acquire());
    }

    #[tokio::test]
    async fn test_acquire_within_burst_does_not_block() {
        let limiter = RateLimiter::new(&RateLimiterConfig::new(100, 10));
        tokio::time::timeout(std::time::Duration::from_millis(50), limiter.acquire())
            .await
            .unwrap();
    }
}
