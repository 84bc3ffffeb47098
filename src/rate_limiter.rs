//! Rate limiter for controlling API request rates
//!
//! Uses the `governor` crate to implement a token bucket keyed off the
//! configured requests-per-period and burst size. The SendPulse API throttles
//! aggressive clients, so every outgoing request waits on this limiter first.

use crate::config::RateLimiterConfig;
use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::QuantaClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Token-bucket rate limiter shared by all requests of one client instance
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock>>,
}

impl RateLimiter {
    /// Creates a new rate limiter from configuration.
    ///
    /// The replenish period is `period_seconds / max_requests`, so
    /// `max_requests` requests fit into each period, with `burst_size`
    /// allowed at once.
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        let per_request = Duration::from_secs_f64(
            config.period_seconds.max(1) as f64 / config.max_requests.max(1) as f64,
        );

        let burst_size = NonZeroU32::new(config.burst_size)
            .unwrap_or_else(|| NonZeroU32::new(1).expect("1 is non-zero"));

        let quota = Quota::with_period(per_request)
            .expect("per-request period is non-zero")
            .allow_burst(burst_size);

        Self {
            limiter: Arc::new(GovernorRateLimiter::direct(quota)),
        }
    }

    /// Waits until a request may proceed under the rate limit
    pub async fn wait(&self) {
        while self.limiter.check().is_err() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    /// Checks whether a request may proceed immediately
    #[must_use]
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("limiter", &"GovernorRateLimiter")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn burst_is_allowed_immediately() {
        let config = RateLimiterConfig {
            max_requests: 10,
            period_seconds: 1,
            burst_size: 5,
        };

        let limiter = RateLimiter::new(&config);

        for _ in 0..5 {
            assert!(limiter.check());
        }
    }

    #[tokio::test]
    async fn wait_blocks_past_the_burst() {
        let config = RateLimiterConfig {
            max_requests: 2,
            period_seconds: 1,
            burst_size: 2,
        };

        let limiter = RateLimiter::new(&config);

        limiter.wait().await;
        limiter.wait().await;

        let start = std::time::Instant::now();
        limiter.wait().await;
        assert!(start.elapsed().as_millis() > 0);
    }
}
