#![allow(dead_code)]

use async_trait::async_trait;
use bithumb_global_rs::{
    BithumbError, BithumbGlobal, ClientConfig, Credentials, ParamValue, Params, Transport,
};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

pub const TEST_BASE: &str = "https://bithumb.test";

#[derive(Debug, Clone, PartialEq)]
pub enum Method {
    Get,
    Post,
}

/// One request seen by the mock.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: Method,
    pub url: String,
    pub body: Option<Params>,
    pub timeout: Duration,
}

impl RecordedCall {
    pub fn param(&self, key: &str) -> Option<&ParamValue> {
        self.body.as_ref().and_then(|body| body.get(key))
    }
}

/// Replays queued results in order and records every request.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<Value, BithumbError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    pub fn with_responses(responses: Vec<Value>) -> Self {
        Self::with_results(responses.into_iter().map(Ok).collect())
    }

    /// Queue that can also fail, e.g. with `BithumbError::HttpStatus`.
    pub fn with_results(results: Vec<Result<Value, BithumbError>>) -> Self {
        Self {
            responses: Mutex::new(results.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn next(&self, call: RecordedCall) -> Result<Value, BithumbError> {
        self.calls.lock().unwrap().push(call);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(BithumbError::InvalidResponse("mock has no queued response".to_string()))
            })
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post_json(
        &self,
        url: &str,
        body: &Params,
        timeout: Duration,
    ) -> Result<Value, BithumbError> {
        self.next(RecordedCall {
            method: Method::Post,
            url: url.to_string(),
            body: Some(body.clone()),
            timeout,
        })
    }

    async fn get_json(&self, url: &str, timeout: Duration) -> Result<Value, BithumbError> {
        self.next(RecordedCall {
            method: Method::Get,
            url: url.to_string(),
            body: None,
            timeout,
        })
    }
}

pub fn test_config() -> ClientConfig {
    ClientConfig::default().with_base_url(TEST_BASE)
}

pub fn signed_client(responses: Vec<Value>) -> BithumbGlobal<MockTransport> {
    BithumbGlobal::with_transport(
        MockTransport::with_responses(responses),
        test_config(),
        Some(Credentials::new("test_key", "test_secret")),
    )
    .unwrap()
}

pub fn signed_client_with(results: Vec<Result<Value, BithumbError>>) -> BithumbGlobal<MockTransport> {
    BithumbGlobal::with_transport(
        MockTransport::with_results(results),
        test_config(),
        Some(Credentials::new("test_key", "test_secret")),
    )
    .unwrap()
}

pub fn public_client(responses: Vec<Value>) -> BithumbGlobal<MockTransport> {
    BithumbGlobal::with_transport(MockTransport::with_responses(responses), test_config(), None)
        .unwrap()
}

pub fn ok(data: Value) -> Value {
    serde_json::json!({"code": "0", "msg": "success", "data": data})
}

pub fn text(value: &str) -> ParamValue {
    ParamValue::Text(value.to_string())
}
