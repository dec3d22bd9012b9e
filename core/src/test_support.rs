//! Scripted doubles for the transport and sleeper seams.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

use crate::error::TransportError;
use crate::fetch::Sleeper;
use crate::http::{HttpRequest, HttpResponse, Transport};

/// Replays a fixed sequence of outcomes and records every request.
pub(crate) struct ScriptedTransport {
    outcomes: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new(outcomes: Vec<Result<HttpResponse, TransportError>>) -> Self {
        Self {
            outcomes: RefCell::new(outcomes.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn statuses(responses: impl IntoIterator<Item = (u16, &'static str)>) -> Self {
        Self::new(
            responses
                .into_iter()
                .map(|(status, body)| {
                    Ok(HttpResponse {
                        status,
                        body: body.to_string(),
                    })
                })
                .collect(),
        )
    }

    pub(crate) fn ok(body: &str) -> Self {
        Self::new(vec![Ok(HttpResponse {
            status: 200,
            body: body.to_string(),
        })])
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Transport for ScriptedTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request.clone());
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err("script exhausted".into()))
    }
}

/// Records requested delays instead of blocking.
#[derive(Default)]
pub(crate) struct RecordingSleeper {
    slept: RefCell<Vec<Duration>>,
}

impl RecordingSleeper {
    pub(crate) fn recorded(&self) -> Vec<Duration> {
        self.slept.borrow().clone()
    }

    pub(crate) fn total(&self) -> Duration {
        self.slept.borrow().iter().sum()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.slept.borrow_mut().push(duration);
    }
}
