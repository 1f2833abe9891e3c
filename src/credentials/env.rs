//! Environment variable credentials provider.

use super::{AwsCredentials, CredentialProvider};
use crate::credentials::error::CredentialError;
use async_trait::async_trait;
use std::env;

/// Environment variable holding the access key ID.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
/// Environment variable holding the secret access key.
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
/// Environment variable holding the optional session token.
pub const AWS_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";

/// Credentials provider that reads from environment variables.
///
/// - `AWS_ACCESS_KEY_ID`: the access key ID (required)
/// - `AWS_SECRET_ACCESS_KEY`: the secret access key (required)
/// - `AWS_SESSION_TOKEN`: optional session token for temporary credentials
#[derive(Debug, Clone, Default)]
pub struct EnvironmentCredentialProvider;

impl EnvironmentCredentialProvider {
    /// Create a new environment credentials provider.
    pub fn new() -> Self {
        Self
    }

    /// Resolve credentials through an arbitrary variable lookup.
    pub(crate) fn resolve<F>(lookup: F) -> Result<AwsCredentials, CredentialError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| -> Result<String, CredentialError> {
            let value = lookup(name).ok_or_else(|| CredentialError::Missing {
                message: format!("{} environment variable not set", name),
            })?;
            if value.is_empty() {
                return Err(CredentialError::Invalid {
                    message: format!("{} is empty", name),
                });
            }
            Ok(value)
        };

        let access_key_id = required(AWS_ACCESS_KEY_ID)?;
        let secret_access_key = required(AWS_SECRET_ACCESS_KEY)?;

        let credentials = AwsCredentials::new(access_key_id, secret_access_key);
        match lookup(AWS_SESSION_TOKEN).filter(|token| !token.is_empty()) {
            Some(token) => Ok(credentials.with_session_token(token)),
            None => Ok(credentials),
        }
    }
}

#[async_trait]
impl CredentialProvider for EnvironmentCredentialProvider {
    async fn credentials(&self) -> Result<AwsCredentials, CredentialError> {
        Self::resolve(|name| env::var(name).ok())
    }
}
