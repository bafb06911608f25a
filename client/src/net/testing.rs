//! Scripted transport for exercising the API client without a network.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::error::TransportError;
use super::http::{HttpResponse, HttpTransport};

#[derive(Clone, Debug, PartialEq)]
pub enum RecordedCall {
    Post { url: String, body: serde_json::Value },
    Get { url: String, token: String },
}

/// Replays queued responses in order and records every request.
///
/// Running out of queued responses yields a transport error.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, resp: Result<HttpResponse, TransportError>) -> Self {
        self.responses.borrow_mut().push_back(resp);
        self
    }

    pub fn json(self, status: u16, body: &str) -> Self {
        self.with_response(Ok(json_response(status, body)))
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    fn next(&self) -> Result<HttpResponse, TransportError> {
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted response".to_owned())))
    }
}

impl HttpTransport for ScriptedTransport {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpResponse, TransportError> {
        self.calls
            .borrow_mut()
            .push(RecordedCall::Post { url: url.to_owned(), body: body.clone() });
        self.next()
    }

    async fn get_authorized(&self, url: &str, token: &str) -> Result<HttpResponse, TransportError> {
        self.calls
            .borrow_mut()
            .push(RecordedCall::Get { url: url.to_owned(), token: token.to_owned() });
        self.next()
    }
}

pub fn json_response(status: u16, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        content_type: Some("application/json; charset=utf-8".to_owned()),
        body: body.to_owned(),
    }
}

pub fn html_response(status: u16, body: &str) -> HttpResponse {
    HttpResponse { status, content_type: Some("text/html".to_owned()), body: body.to_owned() }
}
