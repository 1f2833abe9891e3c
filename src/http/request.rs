//! HTTP request type for the Pinpoint REST API.

use http::header::{HeaderName, HeaderValue};
use http::HeaderMap;
use serde::Serialize;

use crate::error::{PinpointError, PinpointResult, ValidationError};
use crate::signing::uri_encode;

/// HTTP methods used by the Pinpoint REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET request
    GET,
    /// POST request
    POST,
    /// PUT request
    PUT,
    /// DELETE request
    DELETE,
}

impl HttpMethod {
    /// The method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
        }
    }

    /// Whether requests with this method carry a JSON body.
    pub fn carries_body(&self) -> bool {
        matches!(self, HttpMethod::POST | HttpMethod::PUT)
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::GET => reqwest::Method::GET,
            HttpMethod::POST => reqwest::Method::POST,
            HttpMethod::PUT => reqwest::Method::PUT,
            HttpMethod::DELETE => reqwest::Method::DELETE,
        }
    }
}

/// A single request to the Pinpoint REST API.
///
/// `path` is stored exactly as it goes on the wire, with URI labels already
/// percent-encoded.
#[derive(Debug, Clone)]
pub struct PinpointRequest {
    method: HttpMethod,
    path: String,
    query_params: Vec<(String, String)>,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
    content_type: Option<String>,
}

impl PinpointRequest {
    /// Create a new request with the specified method.
    ///
    /// ```rust
    /// use integrations_aws_pinpoint::http::{HttpMethod, PinpointRequest};
    ///
    /// let request = PinpointRequest::new(HttpMethod::POST, "/v1/apps");
    /// assert_eq!(request.path(), "/v1/apps");
    /// ```
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query_params: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
            content_type: None,
        }
    }

    /// Add a query parameter. Repeated keys are kept in order.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((key.into(), value.into()));
        self
    }

    /// Add a header to the request.
    pub fn header(mut self, key: &str, value: &str) -> PinpointResult<Self> {
        let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| invalid_header(key, e))?;
        let header_value = HeaderValue::from_str(value).map_err(|e| invalid_header(key, e))?;
        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Set the request body as JSON and mark it `application/json`.
    pub fn json<T: Serialize + ?Sized>(mut self, json: &T) -> PinpointResult<Self> {
        self.body = Some(serde_json::to_vec(json)?);
        self.content_type = Some("application/json".to_string());
        Ok(self)
    }

    /// Get the HTTP method.
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Get the request path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get the query parameters.
    pub fn query_params(&self) -> &[(String, String)] {
        &self.query_params
    }

    /// Get the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get the request body.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Get the content type.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// The request body parsed back into JSON, if any.
    pub fn body_json(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_slice(body).ok())
    }

    /// Build the full URL for this request.
    ///
    /// Query components are encoded the same way they are signed.
    ///
    /// ```rust
    /// use integrations_aws_pinpoint::http::{HttpMethod, PinpointRequest};
    ///
    /// let request = PinpointRequest::new(HttpMethod::DELETE, "/v1/tags/arn")
    ///     .query("tagKeys", "team name");
    ///
    /// assert_eq!(
    ///     request.build_url("https://pinpoint.us-east-1.amazonaws.com"),
    ///     "https://pinpoint.us-east-1.amazonaws.com/v1/tags/arn?tagKeys=team%20name"
    /// );
    /// ```
    pub fn build_url(&self, endpoint: &str) -> String {
        let mut url = format!("{}{}", endpoint.trim_end_matches('/'), self.path);

        if !self.query_params.is_empty() {
            url.push('?');
            let query_string = self
                .query_params
                .iter()
                .map(|(k, v)| format!("{}={}", uri_encode(k, true), uri_encode(v, true)))
                .collect::<Vec<_>>()
                .join("&");
            url.push_str(&query_string);
        }

        url
    }
}

fn invalid_header(name: &str, error: impl std::fmt::Display) -> PinpointError {
    ValidationError::InvalidValue {
        field: name.to_string(),
        message: format!("invalid header: {error}"),
    }
    .into()
}
