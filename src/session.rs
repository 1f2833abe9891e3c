//! Long-lived session holding the shared service client.

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::client::{PinpointClient, ServiceClient};
use crate::config::{PinpointConfig, PinpointConfigBuilder};
use crate::error::{PinpointError, PinpointResult};

enum Source {
    Config(Box<PinpointConfig>),
    Builder(Box<PinpointConfigBuilder>),
    Environment,
}

/// Owns the service client shared by every invocation.
///
/// The client is created on first use, at most once, and afterwards only
/// read. Concurrent first calls wait on the same initialization.
pub struct Session {
    client: OnceCell<Arc<dyn ServiceClient>>,
    source: Source,
}

impl Session {
    /// Session that creates its client from `config` on first use.
    pub fn new(config: PinpointConfig) -> Self {
        Self {
            client: OnceCell::new(),
            source: Source::Config(Box::new(config)),
        }
    }

    /// Session that finishes `builder` on first use.
    ///
    /// Configuration faults surface from the first invocation that needs the
    /// client rather than at construction.
    pub fn lazy(builder: PinpointConfigBuilder) -> Self {
        Self {
            client: OnceCell::new(),
            source: Source::Builder(Box::new(builder)),
        }
    }

    /// Session that reads ambient configuration on first use.
    pub fn from_env() -> Self {
        Self {
            client: OnceCell::new(),
            source: Source::Environment,
        }
    }

    /// Session around an existing client.
    pub fn with_client(client: Arc<dyn ServiceClient>) -> Self {
        Self {
            client: OnceCell::new_with(Some(client)),
            source: Source::Environment,
        }
    }

    /// The shared client, creating it if needed.
    ///
    /// A failed creation is returned to the caller and retried by the next
    /// invocation.
    pub async fn client(&self) -> PinpointResult<Arc<dyn ServiceClient>> {
        self.client
            .get_or_try_init(|| async {
                let config = match &self.source {
                    Source::Config(config) => config.as_ref().clone(),
                    Source::Builder(builder) => builder.as_ref().clone().build()?,
                    Source::Environment => PinpointConfig::from_env()?,
                };
                tracing::debug!(region = %config.region, "Creating Pinpoint client");
                let client: Arc<dyn ServiceClient> = Arc::new(PinpointClient::new(config)?);
                Ok::<_, PinpointError>(client)
            })
            .await
            .cloned()
    }

    /// Whether the client has been created.
    pub fn is_initialized(&self) -> bool {
        self.client.initialized()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockServiceClient;
    use serde_json::json;

    #[tokio::test]
    async fn test_with_client_reuses_instance() {
        let mock = Arc::new(MockServiceClient::responding(json!({})));
        let session = Session::with_client(mock);
        assert!(session.is_initialized());

        let first = session.client().await.unwrap();
        let second = session.client().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_created_once_from_config() {
        let config = PinpointConfig::builder()
            .region("us-west-2")
            .credentials("AKID", "SECRET")
            .build()
            .unwrap();
        let session = Session::new(config);
        assert!(!session.is_initialized());

        let first = session.client().await.unwrap();
        let second = session.client().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.region(), "us-west-2");
        assert_eq!(first.endpoint(), "https://pinpoint.us-west-2.amazonaws.com");
    }

    #[tokio::test]
    async fn test_lazy_builder_fault_surfaces_on_first_use() {
        let session = Session::lazy(PinpointConfig::builder().credentials("AKID", "SECRET"));

        let error = session.client().await.err().unwrap();
        assert!(matches!(error, PinpointError::Configuration { .. }));
        assert!(!session.is_initialized());
    }
}
