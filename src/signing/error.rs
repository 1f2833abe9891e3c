//! Signing error types.

use thiserror::Error;

/// Errors that can occur during AWS Signature V4 signing.
#[derive(Debug, Error)]
pub enum SigningError {
    /// A required header was missing from the request.
    #[error("Missing required header: {header}")]
    MissingHeader {
        /// The name of the missing header.
        header: String,
    },

    /// A computed header value could not be represented as an HTTP header.
    #[error("Invalid header value for {header}")]
    InvalidHeaderValue {
        /// The header that could not be set.
        header: String,
    },

    /// The signing operation failed.
    ///
    /// ```
    /// use integrations_aws_pinpoint::signing::SigningError;
    ///
    /// let error = SigningError::SigningFailed {
    ///     message: "Access key ID is required".to_string(),
    /// };
    /// assert_eq!(error.to_string(), "Signing failed: Access key ID is required");
    /// ```
    #[error("Signing failed: {message}")]
    SigningFailed {
        /// Details about the signing failure.
        message: String,
    },
}

impl From<SigningError> for crate::error::PinpointError {
    fn from(err: SigningError) -> Self {
        crate::error::PinpointError::Signing {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_header_error() {
        let error = SigningError::MissingHeader {
            header: "host".to_string(),
        };
        assert_eq!(error.to_string(), "Missing required header: host");
    }

    #[test]
    fn test_into_pinpoint_error() {
        let error: crate::error::PinpointError = SigningError::InvalidHeaderValue {
            header: "x-amz-security-token".to_string(),
        }
        .into();
        assert!(error.to_string().contains("x-amz-security-token"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SigningError>();
    }
}
