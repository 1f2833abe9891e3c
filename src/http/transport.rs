//! Transport layer abstraction for HTTP communication.

use async_trait::async_trait;
use reqwest::{Client, Request, Response};
use std::time::Duration;

use crate::error::{PinpointError, PinpointResult, TransportKind};

/// Sends a prepared HTTP request.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send an HTTP request and return the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or times out.
    async fn send(&self, request: Request) -> PinpointResult<Response>;
}

/// Reqwest-based HTTP transport.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a new reqwest transport.
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use integrations_aws_pinpoint::http::ReqwestTransport;
    ///
    /// let transport = ReqwestTransport::new(Duration::from_secs(30), Duration::from_secs(10));
    /// assert!(transport.is_ok());
    /// ```
    pub fn new(timeout: Duration, connect_timeout: Duration) -> PinpointResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .build()
            .map_err(|e| PinpointError::Transport {
                message: format!("Failed to create HTTP client: {}", e),
                kind: TransportKind::Other,
                source: Some(Box::new(e)),
            })?;

        Ok(Self { client })
    }

    /// Get a reference to the underlying reqwest client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: Request) -> PinpointResult<Response> {
        self.client.execute(request).await.map_err(Into::into)
    }
}
