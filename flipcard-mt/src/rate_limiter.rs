//! Minimum spacing between outbound provider calls
//!
//! One limiter is shared by every session in the process. The last grant
//! time sits behind an async mutex that stays locked while a caller waits,
//! so grants are handed out one at a time and every pair of consecutive
//! grants is at least `min_interval` apart.

use crate::clock::{Clock, SystemClock};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Spacing enforced between two provider calls unless configured otherwise
pub const MIN_INTERVAL: Duration = Duration::from_millis(500);

pub struct RateLimiter {
    min_interval: Duration,
    clock: Arc<dyn Clock>,
    last_grant: Mutex<Option<Instant>>,
}

impl RateLimiter {
    /// Intervals shorter than [`MIN_INTERVAL`] are raised to it
    pub fn new(min_interval: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            min_interval: min_interval.max(MIN_INTERVAL),
            clock,
            last_grant: Mutex::new(None),
        }
    }

    /// Limiter on the system clock with the default interval
    pub fn system() -> Self {
        Self::new(MIN_INTERVAL, Arc::new(SystemClock))
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Wait until a provider call is allowed, then record it
    pub async fn acquire(&self) {
        let mut last_grant = self.last_grant.lock().await;

        if let Some(last) = *last_grant {
            let since_last = self.clock.now().saturating_duration_since(last);
            if since_last < self.min_interval {
                let wait = self.min_interval - since_last;
                tracing::debug!(wait_ms = wait.as_millis() as u64, "rate limiter delaying call");
                self.clock.sleep(wait).await;
            }
        }

        *last_grant = Some(self.clock.now());
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("min_interval", &self.min_interval)
            .finish()
    }
}
