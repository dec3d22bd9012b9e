//! Error types for the BoardGameGeek XML API client.
//!
//! # Design
//! Every fatal condition surfaces as one `BggError`. Authorization failures
//! get their own variant so callers can ask for fresh credentials instead of
//! treating them like any other rejected request. Retryable statuses (429 and
//! 5xx) never reach the caller unless the retry budget runs out, in which
//! case they arrive as `RetriesExhausted` with the last status seen.

use thiserror::Error;

/// Underlying cause of a transport failure.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by `Fetcher` and `BggClient`.
#[derive(Error, Debug)]
pub enum BggError {
    /// Connection refused, timeout, broken body read. Never retried.
    #[error("network error while reaching {url}")]
    Transport {
        url: String,
        #[source]
        source: TransportError,
    },

    /// The server answered 401 or 403.
    #[error("authorization failed (status: {status}, url: {url})")]
    Authorization { status: u16, url: String },

    /// 429 or 5xx persisted through every retry.
    #[error("exceeded retry count (status: {status}, url: {url})")]
    RetriesExhausted { status: u16, url: String },

    /// Any other non-200 status.
    #[error("request failed (status: {status}, url: {url})")]
    RequestFailed { status: u16, url: String },

    /// The body could not be deserialized into `target`. `url` is set when
    /// the body came from a fetch.
    #[error("failed to map XML to {target}")]
    Mapping {
        target: String,
        url: Option<String>,
        #[source]
        source: quick_xml::DeError,
    },
}

impl BggError {
    /// HTTP status behind the error, or 0 when the failure was not an HTTP
    /// response.
    pub fn status_code(&self) -> u16 {
        match self {
            BggError::Authorization { status, .. }
            | BggError::RetriesExhausted { status, .. }
            | BggError::RequestFailed { status, .. } => *status,
            BggError::Transport { .. } | BggError::Mapping { .. } => 0,
        }
    }

    /// The URL that was being fetched, when known.
    pub fn url(&self) -> Option<&str> {
        match self {
            BggError::Transport { url, .. }
            | BggError::Authorization { url, .. }
            | BggError::RetriesExhausted { url, .. }
            | BggError::RequestFailed { url, .. } => Some(url),
            BggError::Mapping { url, .. } => url.as_deref(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BggError>;
