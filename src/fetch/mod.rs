//! Rate-limited, retrying HTTP fetch layer
//!
//! This is the one piece of the system with real design in it: a
//! fixed-interval limiter per call class (search API calls vs. image
//! downloads) feeding a bounded retry loop with exponential backoff,
//! jitter, and server-supplied retry hints.

mod client;
mod limiter;

pub use client::{build_http_client, fetch_with_retry, FetchError, RetryPolicy};
pub use limiter::RateLimiter;
