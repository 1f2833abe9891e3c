//! Configuration module for the Pinpoint client.
//!
//! This module provides configuration types and builders for the service
//! client the command invoker talks to:
//!
//! - Region and endpoint configuration
//! - Credential provider configuration
//! - Request and connect timeouts
//! - User agent customization
//!
//! Retries are deliberately absent: every invocation performs exactly one
//! round trip.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

pub mod error;

pub use error::ConfigError;

use crate::credentials::{
    CredentialProvider, DefaultCredentialProvider, ProfileCredentialProvider,
    StaticCredentialProvider,
};

/// Environment variable naming the region.
pub const AWS_REGION: &str = "AWS_REGION";

/// Fallback environment variable naming the region.
pub const AWS_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";

/// Service-specific endpoint override.
pub const AWS_ENDPOINT_URL_PINPOINT: &str = "AWS_ENDPOINT_URL_PINPOINT";

/// Global endpoint override.
pub const AWS_ENDPOINT_URL: &str = "AWS_ENDPOINT_URL";

/// Configuration for the Pinpoint client.
#[derive(Clone)]
pub struct PinpointConfig {
    /// AWS region (e.g., "us-east-1").
    pub region: String,

    /// Custom endpoint URL (for LocalStack or a private gateway).
    pub endpoint: Option<String>,

    /// Credential provider for AWS authentication.
    pub credentials_provider: Arc<dyn CredentialProvider + Send + Sync>,

    /// Timeout for the entire request.
    pub timeout: Duration,

    /// Timeout for establishing connections.
    pub connect_timeout: Duration,

    /// Custom user agent string.
    pub user_agent: Option<String>,
}

impl PinpointConfig {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```
    /// use integrations_aws_pinpoint::config::PinpointConfig;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = PinpointConfig::builder()
    ///     .region("us-east-1")
    ///     .credentials("access_key", "secret_key")
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> PinpointConfigBuilder {
        PinpointConfigBuilder::default()
    }

    /// Create a configuration from environment variables.
    ///
    /// Reads `AWS_REGION` or `AWS_DEFAULT_REGION` (falling back to the
    /// active profile's `region`), an optional endpoint override from
    /// `AWS_ENDPOINT_URL_PINPOINT` or `AWS_ENDPOINT_URL`, and uses the
    /// default credential chain.
    pub fn from_env() -> Result<Self, ConfigError> {
        let builder = PinpointConfigBuilder::from_env();
        if builder.region.is_none() && builder.profile_region.is_none() {
            return Err(ConfigError::Environment {
                message: format!("{AWS_REGION} or {AWS_DEFAULT_REGION} must be set"),
            });
        }
        builder.build()
    }

    /// Get the Pinpoint endpoint URL for this configuration.
    ///
    /// ```
    /// use integrations_aws_pinpoint::config::PinpointConfig;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = PinpointConfig::builder()
    ///     .region("eu-west-1")
    ///     .credentials("access_key", "secret_key")
    ///     .build()?;
    ///
    /// assert_eq!(config.pinpoint_endpoint(), "https://pinpoint.eu-west-1.amazonaws.com");
    /// # Ok(())
    /// # }
    /// ```
    pub fn pinpoint_endpoint(&self) -> String {
        self.endpoint
            .clone()
            .map(|endpoint| endpoint.trim_end_matches('/').to_string())
            .unwrap_or_else(|| format!("https://pinpoint.{}.amazonaws.com", self.region))
    }
}

impl fmt::Debug for PinpointConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PinpointConfig")
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

/// Builder for creating Pinpoint client configurations.
#[derive(Clone, Default)]
pub struct PinpointConfigBuilder {
    region: Option<String>,
    profile_region: Option<String>,
    endpoint: Option<String>,
    credentials_provider: Option<Arc<dyn CredentialProvider + Send + Sync>>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl PinpointConfigBuilder {
    /// Start a builder pre-populated from the environment.
    ///
    /// Values read here can still be overridden by later builder calls.
    pub fn from_env() -> Self {
        let region = std::env::var(AWS_REGION)
            .or_else(|_| std::env::var(AWS_DEFAULT_REGION))
            .ok()
            .filter(|value| !value.is_empty());

        let endpoint = std::env::var(AWS_ENDPOINT_URL_PINPOINT)
            .or_else(|_| std::env::var(AWS_ENDPOINT_URL))
            .ok()
            .filter(|value| !value.is_empty());

        Self {
            region,
            profile_region: ProfileCredentialProvider::new().region(),
            endpoint,
            credentials_provider: Some(Arc::new(DefaultCredentialProvider::new())),
            ..Self::default()
        }
    }

    /// Use a named profile for credentials.
    ///
    /// The profile's `region` is used when no region is set explicitly.
    pub fn profile(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.profile_region = ProfileCredentialProvider::with_profile(name.clone()).region();
        self.credentials_provider = Some(Arc::new(DefaultCredentialProvider::with_profile(name)));
        self
    }

    /// Set the AWS region.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set a custom endpoint URL.
    ///
    /// This is useful for testing against a local gateway.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set a custom credential provider.
    pub fn credentials_provider(
        mut self,
        provider: impl CredentialProvider + Send + Sync + 'static,
    ) -> Self {
        self.credentials_provider = Some(Arc::new(provider));
        self
    }

    /// Set static credentials (convenience method).
    pub fn credentials(self, access_key: &str, secret_key: &str) -> Self {
        self.credentials_provider(StaticCredentialProvider::from_keys(access_key, secret_key))
    }

    /// Set the request timeout.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Set the connection timeout.
    pub fn connect_timeout(mut self, duration: Duration) -> Self {
        self.connect_timeout = Some(duration);
        self
    }

    /// Set a custom user agent string.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` if the region or credentials
    /// provider is not set, and `ConfigError::Invalid` for a malformed
    /// endpoint URL.
    pub fn build(self) -> Result<PinpointConfig, ConfigError> {
        let region = self
            .region
            .filter(|region| !region.is_empty())
            .or(self.profile_region)
            .filter(|region| !region.is_empty())
            .ok_or_else(|| ConfigError::MissingField {
                field: "region".to_string(),
            })?;

        let credentials_provider =
            self.credentials_provider
                .ok_or_else(|| ConfigError::MissingField {
                    field: "credentials_provider".to_string(),
                })?;

        if let Some(endpoint) = &self.endpoint {
            url::Url::parse(endpoint).map_err(|e| ConfigError::Invalid {
                message: format!("endpoint '{endpoint}' is not a valid URL: {e}"),
            })?;
        }

        Ok(PinpointConfig {
            region,
            endpoint: self.endpoint,
            credentials_provider,
            timeout: self.timeout.unwrap_or(Duration::from_secs(30)),
            connect_timeout: self.connect_timeout.unwrap_or(Duration::from_secs(10)),
            user_agent: self.user_agent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_with_required_fields() {
        let config = PinpointConfig::builder()
            .region("us-east-1")
            .credentials("access_key", "secret_key")
            .build()
            .unwrap();

        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn test_builder_with_custom_endpoint() {
        let config = PinpointConfig::builder()
            .region("us-east-1")
            .endpoint("http://localhost:4566/")
            .credentials("access_key", "secret_key")
            .build()
            .unwrap();

        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:4566/"));
        assert_eq!(config.pinpoint_endpoint(), "http://localhost:4566");
    }

    #[test]
    fn test_builder_rejects_bad_endpoint() {
        let result = PinpointConfig::builder()
            .region("us-east-1")
            .endpoint("not a url")
            .credentials("access_key", "secret_key")
            .build();

        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_builder_with_custom_timeouts() {
        let config = PinpointConfig::builder()
            .region("us-east-1")
            .credentials("access_key", "secret_key")
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(5))
            .user_agent("pinpoint-cli/0.1")
            .build()
            .unwrap();

        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent.as_deref(), Some("pinpoint-cli/0.1"));
    }

    #[test]
    fn test_builder_missing_region() {
        let result = PinpointConfig::builder()
            .credentials("access_key", "secret_key")
            .build();

        match result {
            Err(ConfigError::MissingField { field }) => assert_eq!(field, "region"),
            other => panic!("Expected MissingField error, got {other:?}"),
        }
    }

    #[test]
    fn test_builder_missing_credentials() {
        let result = PinpointConfig::builder().region("us-east-1").build();

        match result {
            Err(ConfigError::MissingField { field }) => {
                assert_eq!(field, "credentials_provider")
            }
            other => panic!("Expected MissingField error, got {other:?}"),
        }
    }

    #[test]
    fn test_default_endpoint() {
        let config = PinpointConfig::builder()
            .region("ap-south-1")
            .credentials("access_key", "secret_key")
            .build()
            .unwrap();

        assert_eq!(
            config.pinpoint_endpoint(),
            "https://pinpoint.ap-south-1.amazonaws.com"
        );
    }

    #[test]
    fn test_debug_hides_credentials() {
        let config = PinpointConfig::builder()
            .region("us-east-1")
            .credentials("AKID", "TOP-SECRET")
            .build()
            .unwrap();

        let debug = format!("{config:?}");
        assert!(debug.contains("us-east-1"));
        assert!(!debug.contains("TOP-SECRET"));
    }
}
