//! Mock implementations for testing.
//!
//! These stand in for the network-facing seams so invoker and client
//! behavior can be exercised without credentials or a live endpoint.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use http::StatusCode;
use serde_json::Value;

use crate::client::ServiceClient;
use crate::command::{OperationDescriptor, RequestValue};
use crate::error::{PinpointError, PinpointResult, TransportKind};
use crate::http::{HttpClient, PinpointRequest, PinpointResponse};

type ErrorFactory = Arc<dyn Fn() -> PinpointError + Send + Sync>;

enum Behavior {
    Respond(Value),
    Fail(ErrorFactory),
    Hang,
}

/// Mock service client with a call counter.
pub struct MockServiceClient {
    behavior: Behavior,
    call_count: AtomicUsize,
    requests: Mutex<Vec<(String, Value)>>,
    endpoint: String,
    region: String,
}

impl MockServiceClient {
    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            call_count: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            endpoint: "https://pinpoint.us-east-1.amazonaws.com".to_string(),
            region: "us-east-1".to_string(),
        }
    }

    /// Succeed with `response` on every call.
    pub fn responding(response: Value) -> Self {
        Self::with_behavior(Behavior::Respond(response))
    }

    /// Fail every call with a fresh error from `factory`.
    pub fn failing(factory: impl Fn() -> PinpointError + Send + Sync + 'static) -> Self {
        Self::with_behavior(Behavior::Fail(Arc::new(factory)))
    }

    /// Fail every call with a connect-level transport fault.
    pub fn unreachable() -> Self {
        Self::failing(|| PinpointError::Transport {
            message: "dns error: failed to lookup address information".to_string(),
            kind: TransportKind::Connect,
            source: None,
        })
    }

    /// Never complete a call.
    pub fn hanging() -> Self {
        Self::with_behavior(Behavior::Hang)
    }

    /// Override the reported endpoint and region.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>, region: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self.region = region.into();
        self
    }

    /// Number of calls made.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Operation name and request value of every call, in order.
    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ServiceClient for MockServiceClient {
    async fn call(
        &self,
        descriptor: &OperationDescriptor,
        request: &RequestValue,
    ) -> PinpointResult<Value> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push((descriptor.name.to_string(), request.as_value().clone()));
        }

        match &self.behavior {
            Behavior::Respond(response) => Ok(response.clone()),
            Behavior::Fail(factory) => Err(factory()),
            Behavior::Hang => std::future::pending().await,
        }
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn region(&self) -> &str {
        &self.region
    }
}

/// Mock HTTP client returning one configured response.
pub struct MockHttpClient {
    status: StatusCode,
    headers: HashMap<String, String>,
    body: Vec<u8>,
    call_count: AtomicUsize,
    requests: Mutex<Vec<PinpointRequest>>,
}

impl MockHttpClient {
    /// Respond `200 OK` with an empty body.
    pub fn new() -> Self {
        Self {
            status: StatusCode::OK,
            headers: HashMap::new(),
            body: Vec::new(),
            call_count: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Respond with `status` and an empty body.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self
    }

    /// Respond with `status` and a JSON body.
    pub fn with_json(self, status: u16, body: Value) -> Self {
        let mut mock = self.with_status(status);
        mock.body = body.to_string().into_bytes();
        mock.headers
            .insert("content-type".to_string(), "application/json".to_string());
        mock
    }

    /// Respond with a Pinpoint error.
    pub fn with_error_response(self, status: u16, code: &str, body: Value) -> Self {
        let mut mock = self.with_json(status, body);
        mock.headers
            .insert("x-amzn-errortype".to_string(), code.to_string());
        mock
    }

    /// Number of requests sent.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Requests sent, in order.
    pub fn requests(&self) -> Vec<PinpointRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn send_request(&self, request: PinpointRequest) -> PinpointResult<PinpointResponse> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }

        let response = PinpointResponse::new(self.status, self.headers.clone(), self.body.clone());
        if response.is_success() {
            Ok(response)
        } else {
            Err(response.into_error())
        }
    }

    fn endpoint(&self) -> &str {
        "https://pinpoint.us-east-1.amazonaws.com"
    }

    fn region(&self) -> &str {
        "us-east-1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_http_client_records_requests() {
        let mock = MockHttpClient::new().with_json(200, json!({"ok": true}));
        let response = mock
            .send_request(PinpointRequest::new(HttpMethod::GET, "/v1/apps/a"))
            .await
            .unwrap();

        assert_eq!(response.json_value().unwrap(), json!({"ok": true}));
        assert_eq!(mock.call_count(), 1);
        assert_eq!(mock.requests()[0].path(), "/v1/apps/a");
    }

    #[tokio::test]
    async fn test_mock_http_client_error() {
        let mock = MockHttpClient::new().with_error_response(
            400,
            "BadRequestException",
            json!({"message": "bad"}),
        );
        let error = mock
            .send_request(PinpointRequest::new(HttpMethod::GET, "/"))
            .await
            .unwrap_err();
        assert_eq!(error.error_code(), Some("BadRequestException"));
    }

    #[test]
    fn test_unreachable_is_connectivity_fault() {
        let mock = MockServiceClient::unreachable();
        if let Behavior::Fail(factory) = &mock.behavior {
            assert!(factory().is_connectivity_fault());
        } else {
            panic!("expected failing behavior");
        }
    }
}
