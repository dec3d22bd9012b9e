//! HTTP transport types and the transport seam.
//!
//! # Design
//! Requests and responses are plain data. The `Fetcher` decides what a
//! status means; a `Transport` only moves bytes and must hand back every
//! status code as an ordinary `HttpResponse`. Only I/O faults become
//! `Err`. This keeps retry policy testable against scripted transports and
//! leaves the production path to `UreqTransport`.

use std::time::Duration;

use crate::error::TransportError;

/// An HTTP GET described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Executes a single GET round-trip.
///
/// Implementations must be safe to reuse across independent calls; they
/// hold no per-call state.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

/// Blocking transport backed by a shared `ureq` agent.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    max_body_bytes: u64,
}

impl UreqTransport {
    /// Bodies longer than `max_body_bytes` fail the read.
    pub fn new(connect_timeout: Duration, max_body_bytes: u64) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_connect(Some(connect_timeout))
            .build()
            .new_agent();
        Self {
            agent,
            max_body_bytes,
        }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut call = self.agent.get(&request.url);
        for (name, value) in &request.headers {
            call = call.header(name.as_str(), value.as_str());
        }
        let mut response = call.call()?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .with_config()
            .limit(self.max_body_bytes)
            .read_to_string()?;
        Ok(HttpResponse { status, body })
    }
}
