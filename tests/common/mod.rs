//! Shared test helpers and mock transport.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use radio_code::error::RadioError;
use radio_code::transport::{JsonObject, RequestForm, Transport};

/// A transport that returns canned results and records every request.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<JsonObject, RadioError>>>,
    requests: Mutex<Vec<RequestForm>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON object response.
    pub fn queue_json(&self, value: serde_json::Value) {
        let object = match value {
            serde_json::Value::Object(object) => object,
            other => panic!("mock responses must be JSON objects, got {other}"),
        };
        self.responses.lock().unwrap().push_back(Ok(object));
    }

    /// Queue a transport failure.
    pub fn queue_error(&self, error: RadioError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<RequestForm> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post_form(&self, form: &RequestForm) -> Result<JsonObject, RadioError> {
        self.requests.lock().unwrap().push(form.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(RadioError::EmptyResponse))
    }
}
