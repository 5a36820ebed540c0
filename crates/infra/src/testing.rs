//! Test doubles for code built on [`PayPalClient`](crate::api::PayPalClient)
//!
//! Available to this crate's unit tests and, with the `test-utils` feature,
//! to downstream crates.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use http::{HeaderMap, HeaderValue, StatusCode};
use paypal_sdk_core::{ApiRequest, ApiResponse, HttpTransport};
use paypal_sdk_domain::{PayPalError, Result};

#[derive(Default)]
struct State {
    responses: VecDeque<Result<ApiResponse>>,
    requests: Vec<ApiRequest>,
}

/// Transport that replays queued responses in order and keeps every request
/// it was given. Clones share the same queue.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    state: Arc<Mutex<State>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue a response with a raw body.
    ///
    /// # Panics
    /// Panics if `status` is not a valid HTTP status code.
    pub fn push_response(&self, status: u16, body: impl Into<Vec<u8>>) {
        let status = StatusCode::from_u16(status).expect("valid status code");
        self.lock().responses.push_back(Ok(ApiResponse::new(status, HeaderMap::new(), body)));
    }

    /// Queue a JSON response with a `Content-Type: application/json` header.
    ///
    /// # Panics
    /// Panics if `status` is not a valid HTTP status code.
    pub fn push_json(&self, status: u16, body: &serde_json::Value) {
        let status = StatusCode::from_u16(status).expect("valid status code");
        let mut headers = HeaderMap::new();
        headers.insert(http::header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self.lock()
            .responses
            .push_back(Ok(ApiResponse::new(status, headers, body.to_string())));
    }

    /// Queue a transport failure.
    pub fn push_error(&self, error: PayPalError) {
        self.lock().responses.push_back(Err(error));
    }

    /// Requests executed so far, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.lock().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }
}

impl HttpTransport for ScriptedTransport {
    fn execute(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let mut state = self.lock();
        state.requests.push(request.clone());
        state
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(PayPalError::Network("no scripted response left".into())))
    }
}

impl std::fmt::Debug for ScriptedTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("ScriptedTransport")
            .field("queued", &state.responses.len())
            .field("requests", &state.requests.len())
            .finish()
    }
}
