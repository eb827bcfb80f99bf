// Fixed-interval rate limiter for chat-completion calls.
//
// Every remote call acquires a permit first. The first permit is granted
// immediately; each later one waits until `interval` has passed since the
// previous permit. The gate only looks at its own clock: it doesn't care
// whether the previous call succeeded and never reads retry-after headers.

use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

/// A simple rate limiter that enforces a minimum spacing between requests.
#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<RateLimiterInner>>,
}

struct RateLimiterInner {
    /// Minimum time between requests
    interval: Duration,
    /// When the last request was allowed through
    last_request: Option<Instant>,
}

impl RateLimiter {
    /// Create a rate limiter with an explicit minimum spacing.
    /// A zero interval never waits.
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(RateLimiterInner {
                interval,
                last_request: None,
            })),
        }
    }

    /// Wait until a request is allowed, then return.
    ///
    /// If we're within the rate limit, this returns immediately.
    /// If we need to wait, it sleeps for the appropriate duration.
    pub async fn acquire(&self) {
        let mut inner = self.inner.lock().await;
        let now = Instant::now();

        if let Some(last) = inner.last_request {
            let elapsed = now.duration_since(last);
            if elapsed < inner.interval {
                let sleep_time = inner.interval - elapsed;
                // Drop the lock before sleeping so other tasks aren't blocked
                drop(inner);
                tokio::time::sleep(sleep_time).await;
                // Re-acquire after sleeping
                inner = self.inner.lock().await;
            }
        }

        inner.last_request = Some(Instant::now());
    }
}
