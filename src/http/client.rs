//! Signed HTTP client for the Pinpoint REST API.
//!
//! Every call is exactly one signed round trip. There is no retry loop; a
//! failed call surfaces to the invoker as-is.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use url::Url;

use crate::config::PinpointConfig;
use crate::error::{PinpointError, PinpointResult};
use crate::signing::{sign_request, SigningParams, PINPOINT_SERVICE};

use super::request::PinpointRequest;
use super::response::PinpointResponse;
use super::transport::{ReqwestTransport, Transport};
use super::HttpClient;

/// HTTP client that signs and sends Pinpoint requests.
///
/// ```rust,no_run
/// use integrations_aws_pinpoint::config::PinpointConfig;
/// use integrations_aws_pinpoint::http::{HttpClient, HttpMethod, PinpointHttpClient, PinpointRequest};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = PinpointConfig::builder()
///     .region("us-east-1")
///     .credentials("access_key", "secret_key")
///     .build()?;
///
/// let client = PinpointHttpClient::new(config)?;
/// let response = client
///     .send_request(PinpointRequest::new(HttpMethod::GET, "/v1/apps/abc"))
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct PinpointHttpClient {
    config: Arc<PinpointConfig>,
    transport: Arc<dyn Transport>,
    endpoint: String,
    host: String,
}

impl PinpointHttpClient {
    /// Create a new client backed by reqwest.
    pub fn new(config: PinpointConfig) -> PinpointResult<Self> {
        let transport = Arc::new(ReqwestTransport::new(config.timeout, config.connect_timeout)?);
        Self::with_transport(config, transport)
    }

    /// Create a new client with a custom transport.
    pub fn with_transport(
        config: PinpointConfig,
        transport: Arc<dyn Transport>,
    ) -> PinpointResult<Self> {
        let endpoint = config.pinpoint_endpoint();
        let host = extract_host(&endpoint)?;

        Ok(Self {
            config: Arc::new(config),
            transport,
            endpoint,
            host,
        })
    }

    /// Build a signed `reqwest::Request`.
    async fn build_request(&self, request: &PinpointRequest) -> PinpointResult<reqwest::Request> {
        let credentials = self.config.credentials_provider.credentials().await?;

        let url = Url::parse(&request.build_url(&self.endpoint)).map_err(|e| {
            PinpointError::Configuration {
                message: format!("Invalid request URL: {}", e),
                source: Some(Box::new(e)),
            }
        })?;

        let mut http_request = reqwest::Request::new(request.method().into(), url);
        let headers = http_request.headers_mut();

        for (name, value) in request.headers() {
            headers.insert(name.clone(), value.clone());
        }

        headers.insert(http::header::HOST, header_value("host", &self.host)?);
        headers.insert(
            "amz-sdk-invocation-id",
            header_value("amz-sdk-invocation-id", &uuid::Uuid::new_v4().to_string())?,
        );

        if let Some(content_type) = request.content_type() {
            headers.insert(
                http::header::CONTENT_TYPE,
                header_value("content-type", content_type)?,
            );
        }

        let user_agent = self
            .config
            .user_agent
            .clone()
            .unwrap_or_else(|| format!("integrations-aws-pinpoint/{}", env!("CARGO_PKG_VERSION")));
        headers.insert(http::header::USER_AGENT, header_value("user-agent", &user_agent)?);

        if let Some(body) = request.body() {
            *http_request.body_mut() = Some(body.to_vec().into());
        }

        let signing_params =
            SigningParams::from_credentials(&self.config.region, PINPOINT_SERVICE, &credentials);

        sign_request(
            request.method().as_str(),
            request.path(),
            request.query_params(),
            http_request.headers_mut(),
            request.body(),
            &signing_params,
            &Utc::now(),
        )?;

        Ok(http_request)
    }
}

fn header_value(name: &str, value: &str) -> PinpointResult<http::HeaderValue> {
    http::HeaderValue::from_str(value).map_err(|e| PinpointError::Configuration {
        message: format!("Invalid {} header: {}", name, e),
        source: Some(Box::new(e)),
    })
}

/// Host (and non-default port) of an endpoint URL.
fn extract_host(endpoint: &str) -> PinpointResult<String> {
    let url = Url::parse(endpoint).map_err(|e| PinpointError::Configuration {
        message: format!("Invalid endpoint URL: {}", e),
        source: Some(Box::new(e)),
    })?;

    let host = url.host_str().ok_or_else(|| PinpointError::Configuration {
        message: "Endpoint URL has no host".to_string(),
        source: None,
    })?;

    Ok(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

#[async_trait]
impl HttpClient for PinpointHttpClient {
    async fn send_request(&self, request: PinpointRequest) -> PinpointResult<PinpointResponse> {
        let http_request = self.build_request(&request).await?;

        tracing::debug!(
            method = request.method().as_str(),
            path = request.path(),
            "Sending Pinpoint request"
        );

        let response = self.transport.send(http_request).await?;
        let response = PinpointResponse::from_reqwest(response).await?;

        tracing::debug!(
            status = response.status().as_u16(),
            request_id = response.request_id().unwrap_or("-"),
            "Received Pinpoint response"
        );

        if response.is_success() {
            Ok(response)
        } else {
            Err(response.into_error())
        }
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn region(&self) -> &str {
        &self.config.region
    }
}

impl std::fmt::Debug for PinpointHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinpointHttpClient")
            .field("endpoint", &self.endpoint)
            .field("region", &self.config.region)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;

    fn config(endpoint: Option<&str>) -> PinpointConfig {
        let builder = PinpointConfig::builder()
            .region("us-west-2")
            .credentials("AKIDEXAMPLE", "SECRET");
        match endpoint {
            Some(endpoint) => builder.endpoint(endpoint),
            None => builder,
        }
        .build()
        .unwrap()
    }

    #[test]
    fn test_extract_host() {
        assert_eq!(
            extract_host("https://pinpoint.us-west-2.amazonaws.com").unwrap(),
            "pinpoint.us-west-2.amazonaws.com"
        );
        assert_eq!(extract_host("http://127.0.0.1:4566").unwrap(), "127.0.0.1:4566");
        assert!(extract_host("not a url").is_err());
    }

    #[test]
    fn test_endpoint_and_region() {
        let client = PinpointHttpClient::new(config(None)).unwrap();
        assert_eq!(client.endpoint(), "https://pinpoint.us-west-2.amazonaws.com");
        assert_eq!(client.region(), "us-west-2");
    }

    #[tokio::test]
    async fn test_build_request_is_signed() {
        let client = PinpointHttpClient::new(config(Some("http://localhost:4566"))).unwrap();
        let request = PinpointRequest::new(HttpMethod::POST, "/v1/apps")
            .json(&serde_json::json!({"Name": "demo"}))
            .unwrap();

        let built = client.build_request(&request).await.unwrap();

        assert_eq!(built.url().as_str(), "http://localhost:4566/v1/apps");
        assert_eq!(built.headers()["host"], "localhost:4566");
        assert_eq!(built.headers()["content-type"], "application/json");
        assert!(built.headers().contains_key("amz-sdk-invocation-id"));
        let auth = built.headers()["authorization"].to_str().unwrap();
        assert!(auth.contains("/us-west-2/mobiletargeting/aws4_request"));
    }
}
