//! Client configuration.
//!
//! Defaults target the public BoardGameGeek endpoint. `from_env` layers
//! environment overrides on top; values that fail to parse are ignored.

use std::time::Duration;

use tracing::warn;

use crate::fetch::RetryPolicy;

pub const DEFAULT_ENDPOINT_TEMPLATE: &str = "https://boardgamegeek.com/xmlapi2/{command}";
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(20);
/// Large collections run to tens of MiB; this leaves plenty of headroom.
pub const DEFAULT_MAX_BODY_BYTES: u64 = 512 * 1024 * 1024;

pub const ENV_ENDPOINT_TEMPLATE: &str = "BGG_ENDPOINT_TEMPLATE";
pub const ENV_API_TOKEN: &str = "BGG_API_TOKEN";
pub const ENV_MAX_RETRIES: &str = "BGG_MAX_RETRIES";
pub const ENV_RETRY_DELAY_MS: &str = "BGG_RETRY_DELAY_MS";
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "BGG_CONNECT_TIMEOUT_SECS";
pub const ENV_MAX_BODY_BYTES: &str = "BGG_MAX_BODY_BYTES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL with a `{command}` placeholder.
    pub endpoint_template: String,

    /// Sent as `Authorization: Bearer <token>` when present and non-blank.
    pub auth_token: Option<String>,

    pub retry: RetryPolicy,

    /// Connect timeout for the underlying transport. There is no deadline
    /// across the whole retry loop.
    pub connect_timeout: Duration,

    /// Upper bound on a response body. Longer bodies fail as transport
    /// errors.
    pub max_body_bytes: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint_template: DEFAULT_ENDPOINT_TEMPLATE.to_string(),
            auth_token: None,
            retry: RetryPolicy::default(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ClientConfig {
    /// Defaults plus overrides from the process environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Apply overrides from `lookup`, keyed by the `ENV_*` names.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(template) = lookup(ENV_ENDPOINT_TEMPLATE) {
            self.endpoint_template = template;
        }

        if let Some(token) = lookup(ENV_API_TOKEN) {
            self.auth_token = Some(token).filter(|t| !t.trim().is_empty());
        }

        if let Some(retries) = parsed(&lookup, ENV_MAX_RETRIES) {
            self.retry.max_retries = retries;
        }

        let delay_ms: Option<u64> = parsed(&lookup, ENV_RETRY_DELAY_MS);
        match delay_ms {
            Some(0) => warn!(key = ENV_RETRY_DELAY_MS, "ignoring zero retry delay"),
            Some(millis) => self.retry.base_delay = Duration::from_millis(millis),
            None => {}
        }

        if let Some(secs) = parsed(&lookup, ENV_CONNECT_TIMEOUT_SECS) {
            self.connect_timeout = Duration::from_secs(secs);
        }

        if let Some(bytes) = parsed(&lookup, ENV_MAX_BODY_BYTES) {
            self.max_body_bytes = bytes;
        }
    }
}

fn parsed<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparseable override");
            None
        }
    }
}
