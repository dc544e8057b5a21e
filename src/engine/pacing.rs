// * Spacing between emitted report blocks.
// * The downstream transport rate-limits bursts, so blocks leave at most one per period.

use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use nonzero_ext::nonzero;
use std::time::Duration;
use tracing::debug;

pub struct Pacer {
    limiter: Option<DefaultDirectRateLimiter>,
    period: Duration,
}

impl Pacer {
    /// A zero period disables pacing entirely
    pub fn new(period: Duration) -> Self {
        let limiter = Quota::with_period(period)
            .map(|quota| RateLimiter::direct(quota.allow_burst(nonzero!(1u32))));

        Self { limiter, period }
    }

    /// Returns immediately the first time, then waits out the remaining period
    pub async fn wait(&self) {
        if let Some(limiter) = &self.limiter {
            if limiter.check().is_err() {
                debug!(period_ms = self.period.as_millis() as u64, "Pacing next report block");
                limiter.until_ready().await;
            }
        }
    }
}
