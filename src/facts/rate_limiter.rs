use core::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Minimum spacing between calls when none is configured (5 calls per second).
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(200);

/// Enforces a minimum spacing between successive calls.
///
/// Each collector owns its own limiter, so independent collectors never wait on each
/// other. Concurrent callers of the same limiter are serialized: the lock is held across
/// the sleep so every pair of admitted calls is at least `min_interval` apart.
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    last_call: Mutex<Option<Instant>>,
}

impl RateLimiter {
    #[must_use]
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_call: Mutex::new(None),
        }
    }

    #[must_use]
    pub const fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Wait until a call is allowed, then record it.
    pub async fn wait(&self) {
        let mut last_call = self.last_call.lock().await;

        if let Some(last) = *last_call {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }

        *last_call = Some(Instant::now());
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }
}
