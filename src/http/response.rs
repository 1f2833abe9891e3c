//! HTTP response handling for the Pinpoint REST API.

use http::StatusCode;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::{map_service_error, PinpointError, PinpointResult};

/// A raw response from the Pinpoint REST API.
#[derive(Debug, Clone)]
pub struct PinpointResponse {
    status: StatusCode,
    headers: HashMap<String, String>,
    body: Vec<u8>,
    request_id: Option<String>,
}

impl PinpointResponse {
    /// Create a new response. Header names are expected in lowercase.
    pub fn new(status: StatusCode, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        let request_id = headers
            .get("x-amzn-requestid")
            .or_else(|| headers.get("x-amzn-request-id"))
            .or_else(|| headers.get("x-amz-request-id"))
            .cloned();

        Self {
            status,
            headers,
            body,
            request_id,
        }
    }

    /// Create a response from a reqwest Response, reading the whole body.
    pub async fn from_reqwest(response: reqwest::Response) -> PinpointResult<Self> {
        let status = response.status();

        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(value_str) = value.to_str() {
                headers.insert(name.as_str().to_lowercase(), value_str.to_string());
            }
        }

        let body = response.bytes().await?.to_vec();

        Ok(Self::new(status, headers, body))
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get a header value (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Get the response body as bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Get the AWS request ID.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// True for 2xx responses.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Parse the body as JSON. An empty body parses as `null`.
    ///
    /// ```rust
    /// use integrations_aws_pinpoint::http::PinpointResponse;
    /// use http::StatusCode;
    /// use std::collections::HashMap;
    ///
    /// let response = PinpointResponse::new(StatusCode::NO_CONTENT, HashMap::new(), vec![]);
    /// assert!(response.json_value().unwrap().is_null());
    /// ```
    pub fn json_value(&self) -> PinpointResult<Value> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&self.body).map_err(Into::into)
    }

    /// Convert a failed response into a service error.
    pub fn into_error(self) -> PinpointError {
        map_service_error(
            self.status.as_u16(),
            self.header("x-amzn-errortype"),
            self.request_id.as_deref(),
            &self.body,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_request_id_extraction() {
        let response = PinpointResponse::new(
            StatusCode::OK,
            headers(&[("x-amzn-requestid", "abc-123")]),
            vec![],
        );
        assert_eq!(response.request_id(), Some("abc-123"));
        assert_eq!(response.header("X-Amzn-RequestId"), Some("abc-123"));
    }

    #[test]
    fn test_json_value() {
        let response = PinpointResponse::new(
            StatusCode::CREATED,
            HashMap::new(),
            br#"{"Id":"app-1","Name":"demo"}"#.to_vec(),
        );
        assert!(response.is_success());
        assert_eq!(response.json_value().unwrap(), json!({"Id": "app-1", "Name": "demo"}));
    }

    #[test]
    fn test_into_error_uses_error_type_header() {
        let response = PinpointResponse::new(
            StatusCode::NOT_FOUND,
            headers(&[
                ("x-amzn-errortype", "NotFoundException:http://internal/"),
                ("x-amzn-requestid", "req-9"),
            ]),
            br#"{"Message":"Resource not found"}"#.to_vec(),
        );

        let error = response.into_error();
        assert_eq!(error.error_code(), Some("NotFoundException"));
        assert_eq!(error.request_id(), Some("req-9"));
        assert_eq!(error.to_string(), "NotFoundException: Resource not found");
    }
}
