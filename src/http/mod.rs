//! HTTP plumbing for the Pinpoint REST API.
//!
//! ```text
//! ┌────────────────────┐
//! │ PinpointHttpClient │  - SigV4 signing
//! │                    │  - error mapping
//! └─────────┬──────────┘
//!           │
//!           ▼
//! ┌────────────────────┐
//! │     Transport      │  - reqwest by default
//! └────────────────────┘
//! ```

mod client;
mod request;
mod response;
mod transport;

pub use client::PinpointHttpClient;
pub use request::{HttpMethod, PinpointRequest};
pub use response::PinpointResponse;
pub use transport::{ReqwestTransport, Transport};

use crate::error::PinpointResult;
use async_trait::async_trait;

/// Sends Pinpoint requests and returns successful responses.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send a request. Non-2xx responses come back as
    /// [`PinpointError::Service`](crate::error::PinpointError::Service).
    async fn send_request(&self, request: PinpointRequest) -> PinpointResult<PinpointResponse>;

    /// Base endpoint URL.
    fn endpoint(&self) -> &str;

    /// AWS region.
    fn region(&self) -> &str;
}
