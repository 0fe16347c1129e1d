//! Fixed-interval rate limiting
//!
//! Each limiter instance tracks a single "earliest next permitted time".
//! Callers block until that time has passed; the limiter then re-arms
//! itself one minimum interval into the future. Search API calls and
//! image downloads each get their own instance so the two call classes
//! keep independent spacing budgets.

use std::time::{Duration, Instant};

/// Enforces a minimum spacing between consecutive permitted calls
#[derive(Debug)]
pub struct RateLimiter {
    /// Minimum time between permitted calls
    min_interval: Duration,

    /// Earliest instant at which the next call may proceed
    next_permitted: Option<Instant>,
}

impl RateLimiter {
    /// Creates a limiter with the given minimum inter-call interval
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            next_permitted: None,
        }
    }

    /// Blocks until the next call is permitted, then re-arms the limiter
    ///
    /// The first call on a fresh limiter proceeds immediately. Every call
    /// records `now + min_interval` as the next permitted time.
    pub async fn acquire(&mut self) {
        if let Some(wait) = self.time_until_ready(Instant::now()) {
            tokio::time::sleep(wait).await;
        }
        self.next_permitted = Some(Instant::now() + self.min_interval);
    }

    /// Returns how long a call at `now` would have to wait, if at all
    pub fn time_until_ready(&self, now: Instant) -> Option<Duration> {
        match self.next_permitted {
            Some(next) if next > now => Some(next - now),
            _ => None,
        }
    }

    /// The configured minimum inter-call interval
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}
