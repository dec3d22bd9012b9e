//! Resilient GET with bounded retry.
//!
//! # Design
//! One `fetch` call walks a small state machine. It sends the request,
//! classifies the status, and then either returns the body, sleeps and
//! retries, or fails. 429 and 5xx are retried up to `RetryPolicy::max_retries`
//! times with a linearly growing delay. 401 and 403 fail at once, as does any
//! other non-200 status. Transport faults are never retried. The fetcher
//! knows nothing about response content.

use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{BggError, Result};
use crate::http::{HttpRequest, Transport};

pub const DEFAULT_MAX_RETRIES: u32 = 5;
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_secs(2);
pub const MIN_BASE_DELAY: Duration = Duration::from_millis(1);

/// How many times to retry and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    /// Raised to `MIN_BASE_DELAY` when smaller, so delays always grow.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay: DEFAULT_BASE_DELAY,
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `attempt + 1`: `base_delay × (attempt + 1)`.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        self.base_delay
            .max(MIN_BASE_DELAY)
            .saturating_mul(attempt.saturating_add(1))
    }
}

/// Blocks the calling thread between attempts.
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

impl<S: Sleeper + ?Sized> Sleeper for &S {
    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// What a status code means for the retry loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    Retryable,
    Unauthorized,
    Failed,
}

impl StatusClass {
    pub fn of(status: u16) -> Self {
        match status {
            200 => StatusClass::Success,
            429 | 500..=u16::MAX => StatusClass::Retryable,
            401 | 403 => StatusClass::Unauthorized,
            _ => StatusClass::Failed,
        }
    }
}

/// Performs one logical GET per `fetch`, absorbing transient failures.
///
/// Holds only the transport, the sleeper, the optional bearer token and the
/// policy, so a single instance can serve independent calls.
#[derive(Debug, Clone)]
pub struct Fetcher<T, S = ThreadSleeper> {
    transport: T,
    sleeper: S,
    auth_token: Option<String>,
    policy: RetryPolicy,
}

impl<T: Transport, S: Sleeper> Fetcher<T, S> {
    /// A blank `auth_token` is treated as absent.
    pub fn new(transport: T, sleeper: S, auth_token: Option<String>, policy: RetryPolicy) -> Self {
        Self {
            transport,
            sleeper,
            auth_token: auth_token.filter(|t| !t.trim().is_empty()),
            policy,
        }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// The request sent on every attempt for `url`.
    pub fn request_for(&self, url: &str) -> HttpRequest {
        let mut headers = vec![("Accept".to_string(), "application/xml".to_string())];
        if let Some(token) = &self.auth_token {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        HttpRequest {
            url: url.to_string(),
            headers,
        }
    }

    /// GET `url` and return the body of the first 200 response.
    ///
    /// # Errors
    ///
    /// - `Transport` on any I/O fault, without retrying.
    /// - `Authorization` on 401/403, without retrying.
    /// - `RequestFailed` on any other non-200, non-retryable status.
    /// - `RetriesExhausted` when 429/5xx persists past `max_retries`.
    pub fn fetch(&self, url: &str) -> Result<String> {
        let request = self.request_for(url);
        let mut attempt = 0;

        debug!(url, "fetching");
        loop {
            let response =
                self.transport
                    .execute(&request)
                    .map_err(|source| BggError::Transport {
                        url: url.to_string(),
                        source,
                    })?;
            let status = response.status;

            match StatusClass::of(status) {
                StatusClass::Success => return Ok(response.body),
                StatusClass::Unauthorized => {
                    return Err(BggError::Authorization {
                        status,
                        url: url.to_string(),
                    })
                }
                StatusClass::Failed => {
                    return Err(BggError::RequestFailed {
                        status,
                        url: url.to_string(),
                    })
                }
                StatusClass::Retryable if attempt >= self.policy.max_retries => {
                    warn!(url, status, attempts = attempt + 1, "retries exhausted");
                    return Err(BggError::RetriesExhausted {
                        status,
                        url: url.to_string(),
                    });
                }
                StatusClass::Retryable => {
                    let delay = self.policy.delay_for_attempt(attempt);
                    warn!(
                        url,
                        status,
                        attempt = attempt + 1,
                        max_retries = self.policy.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        "transient failure, retrying"
                    );
                    self.sleeper.sleep(delay);
                    attempt += 1;
                }
            }
        }
    }
}
