//! Chain credential provider for trying multiple sources in order.

use super::{AwsCredentials, CredentialProvider};
use crate::credentials::error::CredentialError;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Tries each provider in order until one returns credentials.
///
/// If every provider fails, the error from the last one is returned.
///
/// ```no_run
/// use integrations_aws_pinpoint::credentials::{
///     ChainCredentialProvider, EnvironmentCredentialProvider, ProfileCredentialProvider,
/// };
///
/// let provider = ChainCredentialProvider::new()
///     .with_provider(EnvironmentCredentialProvider::new())
///     .with_provider(ProfileCredentialProvider::new());
/// ```
#[derive(Clone, Default)]
pub struct ChainCredentialProvider {
    providers: Vec<Arc<dyn CredentialProvider + Send + Sync>>,
}

impl ChainCredentialProvider {
    /// Create a new empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a provider to the end of the chain.
    pub fn with_provider<P>(mut self, provider: P) -> Self
    where
        P: CredentialProvider + Send + Sync + 'static,
    {
        self.providers.push(Arc::new(provider));
        self
    }

    /// Number of providers in the chain.
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }
}

#[async_trait]
impl CredentialProvider for ChainCredentialProvider {
    async fn credentials(&self) -> Result<AwsCredentials, CredentialError> {
        let mut last_error = None;

        for (index, provider) in self.providers.iter().enumerate() {
            match provider.credentials().await {
                Ok(credentials) => return Ok(credentials),
                Err(e) => {
                    tracing::debug!(provider = index, error = %e, "Credential provider failed");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| CredentialError::Missing {
            message: "No credential providers configured in chain".to_string(),
        }))
    }

    fn is_expired(&self) -> bool {
        !self.providers.is_empty() && self.providers.iter().all(|p| p.is_expired())
    }
}

impl fmt::Debug for ChainCredentialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainCredentialProvider")
            .field("provider_count", &self.providers.len())
            .finish()
    }
}
