//! Retrying HTTP fetch layer
//!
//! Every outbound GET goes through [`fetch_with_retry`], which:
//! - waits on the call class's rate limiter before each attempt,
//! - classifies each attempt as success, transient, or fatal,
//! - sleeps between transient failures with exponential backoff plus
//!   jitter, honoring a numeric `Retry-After` hint when the server sends
//!   one,
//! - gives up after a fixed attempt budget with a typed error instead of
//!   a panic.

use crate::config::FetchConfig;
use crate::fetch::limiter::RateLimiter;
use rand::Rng;
use reqwest::{header, Client, Response, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Statuses that may succeed on a later attempt
const TRANSIENT_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

/// Terminal outcome of a fetch that never produced a usable response
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed with status {status}")]
    Fatal { url: String, status: u16 },

    #[error("request to {url} failed: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("giving up on {url} after {attempts} attempts")]
    Exhausted { url: String, attempts: u32 },
}

/// Retry timing policy, injected so tests can shrink the delays
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Attempt budget, counting the first try
    pub max_attempts: u32,

    /// First retry delay; doubles per transient failure
    pub base_backoff: Duration,

    /// Ceiling for the exponential delay
    pub max_backoff: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &FetchConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            base_backoff: config.base_backoff,
            max_backoff: config.max_backoff,
        }
    }

    /// Delay before the attempt following transient failure number `attempt`
    /// (0-based): `base_backoff * 2^attempt + jitter`, capped before jitter.
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
        let exponential = self.base_backoff.saturating_mul(factor).min(self.max_backoff);
        exponential + jitter(self.base_backoff)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&FetchConfig::default())
    }
}

/// Result of a single attempt, before retry policy is applied
enum AttemptOutcome {
    /// Usable response; hand it to the caller
    Success(Response),

    /// Worth retrying after a delay
    Transient {
        reason: String,
        retry_after: Option<Duration>,
    },

    /// Non-success status that retrying cannot fix
    Fatal { status: StatusCode },

    /// Transport error that retrying cannot fix
    Failed { source: reqwest::Error },
}

/// Builds the HTTP client shared by search calls and downloads
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    let user_agent = format!(
        "Mozilla/5.0 (compatible; rockhound/{})",
        env!("CARGO_PKG_VERSION")
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(config.request_timeout)
        .connect_timeout(config.connect_timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Performs a rate-limited GET with bounded retry
///
/// The limiter is consulted before every attempt, so retries are spaced by
/// at least the limiter's interval on top of the backoff delay. Query
/// parameters are appended to the URL when given.
pub async fn fetch_with_retry(
    client: &Client,
    url: &str,
    query: Option<&[(String, String)]>,
    limiter: &mut RateLimiter,
    policy: &RetryPolicy,
) -> Result<Response, FetchError> {
    for attempt in 0..policy.max_attempts {
        limiter.acquire().await;

        match perform_attempt(client, url, query).await {
            AttemptOutcome::Success(response) => {
                if attempt > 0 {
                    tracing::debug!(url, attempts = attempt + 1, "Fetch succeeded after retry");
                }
                return Ok(response);
            }
            AttemptOutcome::Fatal { status } => {
                tracing::debug!(url, %status, "Fetch failed with non-retryable status");
                return Err(FetchError::Fatal {
                    url: url.to_string(),
                    status: status.as_u16(),
                });
            }
            AttemptOutcome::Failed { source } => {
                tracing::debug!(url, error = %source, "Fetch failed with non-retryable transport error");
                return Err(FetchError::Request {
                    url: url.to_string(),
                    source,
                });
            }
            AttemptOutcome::Transient {
                reason,
                retry_after,
            } => {
                let remaining = policy.max_attempts - attempt - 1;
                if remaining == 0 {
                    // Budget spent; fall through to the exhausted error
                    break;
                }

                let delay = match retry_after {
                    Some(hint) => hint + jitter(policy.base_backoff),
                    None => policy.backoff_delay(attempt),
                };

                tracing::warn!(
                    url,
                    attempt = attempt + 1,
                    max_attempts = policy.max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    reason = %reason,
                    "Transient fetch failure, retrying"
                );

                tokio::time::sleep(delay).await;
            }
        }
    }

    Err(FetchError::Exhausted {
        url: url.to_string(),
        attempts: policy.max_attempts,
    })
}

/// Sends one GET and classifies the result
async fn perform_attempt(
    client: &Client,
    url: &str,
    query: Option<&[(String, String)]>,
) -> AttemptOutcome {
    let mut request = client.get(url);
    if let Some(params) = query {
        request = request.query(params);
    }

    match request.send().await {
        Ok(response) => {
            let status = response.status();

            if status.is_success() {
                return AttemptOutcome::Success(response);
            }

            if is_transient_status(status) {
                return AttemptOutcome::Transient {
                    reason: format!("status {}", status.as_u16()),
                    retry_after: parse_retry_after(&response),
                };
            }

            AttemptOutcome::Fatal { status }
        }
        Err(e) if e.is_timeout() => AttemptOutcome::Transient {
            reason: "request timeout".to_string(),
            retry_after: None,
        },
        Err(e) if e.is_connect() => AttemptOutcome::Transient {
            reason: "connection failed".to_string(),
            retry_after: None,
        },
        Err(e) => AttemptOutcome::Failed { source: e },
    }
}

/// Whether a status is in the transient set
fn is_transient_status(status: StatusCode) -> bool {
    TRANSIENT_STATUSES.contains(&status.as_u16())
}

/// Reads a numeric `Retry-After` hint from a response
fn parse_retry_after(response: &Response) -> Option<Duration> {
    let value = response.headers().get(header::RETRY_AFTER)?.to_str().ok()?;
    parse_retry_after_value(value)
}

/// Parses the delta-seconds form of `Retry-After`
///
/// HTTP-date hints and garbage values return None so the caller falls back
/// to exponential backoff. Negative values clamp to zero.
fn parse_retry_after_value(value: &str) -> Option<Duration> {
    let seconds = value.trim().parse::<i64>().ok()?;
    Some(Duration::from_secs(seconds.max(0) as u64))
}

/// Uniform jitter in `[0, base]`
fn jitter(base: Duration) -> Duration {
    let factor: f64 = rand::thread_rng().gen_range(0.0..=1.0);
    base.mul_f64(factor)
}
