//! In-process imitation of the `/xmlapi2/{command}` surface.
//!
//! Serves the canned payloads in `fixtures`. A `MockState` can queue
//! non-200 statuses to return before the fixture, and can require a bearer
//! token. Every request is recorded for inspection.

pub mod fixtures;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::{
    extract::{Path, RawQuery, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;

/// A request as the server saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub command: String,
    pub query: Option<String>,
    pub accept: Option<String>,
    pub authorization: Option<String>,
}

#[derive(Debug, Default)]
struct Inner {
    script: VecDeque<u16>,
    required_token: Option<String>,
    body: Option<String>,
    requests: Vec<RecordedRequest>,
}

/// Shared, cloneable server state.
#[derive(Debug, Clone, Default)]
pub struct MockState {
    inner: Arc<Mutex<Inner>>,
}

impl MockState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue statuses to answer with, one per request, before falling back
    /// to the fixture. A queued 200 serves the fixture.
    pub fn with_script(self, statuses: impl IntoIterator<Item = u16>) -> Self {
        self.lock().script.extend(statuses);
        self
    }

    /// Reject requests lacking `Authorization: Bearer <token>` with 401.
    pub fn with_required_token(self, token: impl Into<String>) -> Self {
        self.lock().required_token = Some(token.into());
        self
    }

    /// Serve `body` for every command instead of the fixtures.
    pub fn with_body(self, body: impl Into<String>) -> Self {
        self.lock().body = Some(body.into());
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub fn app(state: MockState) -> Router {
    Router::new()
        .route("/xmlapi2/{command}", get(xmlapi))
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: MockState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}

async fn xmlapi(
    State(state): State<MockState>,
    Path(command): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Response {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let recorded = RecordedRequest {
        command: command.clone(),
        query,
        accept: header_value(header::ACCEPT),
        authorization: header_value(header::AUTHORIZATION),
    };
    tracing::debug!(?recorded, "xmlapi request");

    let mut inner = state.lock();
    inner.requests.push(recorded.clone());

    if let Some(token) = &inner.required_token {
        if recorded.authorization.as_deref() != Some(format!("Bearer {token}").as_str()) {
            return StatusCode::UNAUTHORIZED.into_response();
        }
    }

    if let Some(status) = inner.script.pop_front() {
        if status != 200 {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            return status.into_response();
        }
    }
    let body = inner.body.clone();
    drop(inner);

    match body.or_else(|| fixtures::for_command(&command).map(str::to_string)) {
        Some(xml) => ([(header::CONTENT_TYPE, "text/xml; charset=utf-8")], xml).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
