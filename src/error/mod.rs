//! Error types for the AWS Pinpoint command layer.
//!
//! Errors are split by where they originate so a caller can tell a local
//! binding mistake from a network fault or a service rejection:
//!
//! - [`ValidationError`] - local, raised before any network activity
//! - [`PinpointError::Connectivity`] - name resolution or connection failure,
//!   clarified with the endpoint that could not be reached
//! - [`PinpointError::Service`] - the service answered and rejected the call
//! - [`PinpointError::Cancelled`] - the caller withdrew the invocation
//!
//! Client setup faults (configuration, credentials, signing, serialization)
//! pass through unchanged.
//!
//! # Examples
//!
//! ```rust
//! use integrations_aws_pinpoint::error::{PinpointError, ValidationError};
//!
//! fn describe(error: &PinpointError) -> &'static str {
//!     match error {
//!         PinpointError::Validation(ValidationError::MissingRequiredField { .. }) => "missing",
//!         PinpointError::Connectivity { .. } => "offline",
//!         PinpointError::Service { .. } => "rejected",
//!         PinpointError::Cancelled => "cancelled",
//!         _ => "other",
//!     }
//! }
//! ```

mod mapping;

pub use mapping::{map_service_error, parse_error_response, ServiceErrorResponse};

use thiserror::Error;

/// Result alias used throughout the crate.
pub type PinpointResult<T> = std::result::Result<T, PinpointError>;

/// Top-level error type for a command invocation.
#[derive(Debug, Error)]
pub enum PinpointError {
    /// A local validation fault, raised before any network activity.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The remote endpoint could not be resolved or reached.
    #[error(
        "Unable to reach service endpoint {endpoint} in region {region}. \
         Check network connectivity and the configured region or endpoint URL"
    )]
    Connectivity {
        /// Endpoint that could not be reached.
        endpoint: String,
        /// Region the client was configured for.
        region: String,
        /// The underlying transport fault.
        #[source]
        source: Box<PinpointError>,
    },

    /// The service completed a round trip and rejected the request.
    #[error("{code}: {message}")]
    Service {
        /// Service error code (e.g. "NotFoundException").
        code: String,
        /// Human-readable message from the service.
        message: String,
        /// HTTP status code of the response.
        status: u16,
        /// AWS request ID for support tickets.
        request_id: Option<String>,
    },

    /// The caller cancelled the invocation before it completed.
    #[error("Operation cancelled")]
    Cancelled,

    /// Client configuration is invalid or incomplete.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error.
        message: String,
        /// Optional underlying error source.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Credentials could not be obtained.
    #[error("Credential error: {message}")]
    Credential {
        /// Description of the credential error.
        message: String,
    },

    /// Request signing failed.
    #[error("Signing error: {message}")]
    Signing {
        /// Description of the signing error.
        message: String,
    },

    /// Transport-level failure that is not a service rejection.
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the transport error.
        message: String,
        /// Classification of the failure.
        kind: TransportKind,
        /// Optional underlying error source.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Request or response (de)serialization failed.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Description of the serialization error.
        message: String,
    },
}

/// Classification of transport failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// DNS resolution or TCP/TLS connection failure.
    Connect,
    /// The request or response timed out.
    Timeout,
    /// Any other transport failure (body read, malformed response...).
    Other,
}

impl PinpointError {
    /// Returns true when the failure is a name-resolution or connection fault.
    pub fn is_connectivity_fault(&self) -> bool {
        matches!(
            self,
            PinpointError::Transport {
                kind: TransportKind::Connect,
                ..
            } | PinpointError::Connectivity { .. }
        )
    }

    /// Returns true for local validation faults.
    pub fn is_validation(&self) -> bool {
        matches!(self, PinpointError::Validation(_))
    }

    /// Returns the service error code if available.
    ///
    /// ```rust
    /// use integrations_aws_pinpoint::error::PinpointError;
    ///
    /// let error = PinpointError::Service {
    ///     code: "NotFoundException".to_string(),
    ///     message: "Resource not found".to_string(),
    ///     status: 404,
    ///     request_id: None,
    /// };
    /// assert_eq!(error.error_code(), Some("NotFoundException"));
    /// ```
    pub fn error_code(&self) -> Option<&str> {
        match self {
            PinpointError::Service { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }

    /// Returns the AWS request ID if available.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            PinpointError::Service { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }

    /// Wrap a connectivity fault with the endpoint and region that failed.
    pub(crate) fn into_connectivity(self, endpoint: &str, region: &str) -> Self {
        match self {
            already @ PinpointError::Connectivity { .. } => already,
            other => PinpointError::Connectivity {
                endpoint: endpoint.to_string(),
                region: region.to_string(),
                source: Box::new(other),
            },
        }
    }
}

/// Local validation faults. Always raised before any network activity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A field the operation requires was not bound (or bound to null).
    #[error("Missing required field '{field}' for operation {operation}")]
    MissingRequiredField {
        /// Operation being invoked.
        operation: String,
        /// Name of the missing field.
        field: String,
    },

    /// The output selector override does not name anything the operation exposes.
    #[error("Invalid output selector '{selector}' for operation {operation}: {reason}")]
    InvalidSelector {
        /// Operation being invoked.
        operation: String,
        /// The selector text as supplied.
        selector: String,
        /// Why the selector was rejected.
        reason: String,
    },

    /// Both the pass-through flag and a selector override were set.
    #[error("PassThru cannot be combined with an explicit output selector")]
    ConflictingSelectors,

    /// A bound field is not declared by the operation.
    #[error("Unknown field '{field}' for operation {operation}")]
    UnknownField {
        /// Operation being invoked.
        operation: String,
        /// The undeclared field name.
        field: String,
    },

    /// The same field was bound more than once under different spellings.
    #[error("Field '{field}' bound more than once for operation {operation}")]
    DuplicateField {
        /// Operation being invoked.
        operation: String,
        /// Declared name of the repeated field.
        field: String,
    },

    /// A textual argument could not be parsed into the field's kind.
    #[error("Invalid value for field '{field}': {message}")]
    InvalidValue {
        /// Field being bound.
        field: String,
        /// Why parsing failed.
        message: String,
    },

    /// A piped value was supplied but the operation has no pipeline field.
    #[error("Operation {operation} does not accept piped input")]
    NoPipelineField {
        /// Operation being invoked.
        operation: String,
    },
}

impl From<serde_json::Error> for PinpointError {
    fn from(err: serde_json::Error) -> Self {
        PinpointError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for PinpointError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            TransportKind::Timeout
        } else if err.is_connect() {
            TransportKind::Connect
        } else {
            TransportKind::Other
        };

        PinpointError::Transport {
            message: err.to_string(),
            kind,
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connectivity_classification() {
        let connect = PinpointError::Transport {
            message: "dns error".to_string(),
            kind: TransportKind::Connect,
            source: None,
        };
        assert!(connect.is_connectivity_fault());

        let timeout = PinpointError::Transport {
            message: "timed out".to_string(),
            kind: TransportKind::Timeout,
            source: None,
        };
        assert!(!timeout.is_connectivity_fault());

        let service = PinpointError::Service {
            code: "BadRequestException".to_string(),
            message: "bad".to_string(),
            status: 400,
            request_id: None,
        };
        assert!(!service.is_connectivity_fault());
    }

    #[test]
    fn test_into_connectivity_names_endpoint() {
        let connect = PinpointError::Transport {
            message: "dns error".to_string(),
            kind: TransportKind::Connect,
            source: None,
        };
        let wrapped = connect.into_connectivity("https://pinpoint.us-east-1.amazonaws.com", "us-east-1");

        let text = wrapped.to_string();
        assert!(text.starts_with("Unable to reach service endpoint"));
        assert!(text.contains("https://pinpoint.us-east-1.amazonaws.com"));
        assert!(text.contains("us-east-1"));
        assert!(std::error::Error::source(&wrapped).is_some());

        let twice = wrapped.into_connectivity("other", "other");
        match twice {
            PinpointError::Connectivity { endpoint, .. } => {
                assert_eq!(endpoint, "https://pinpoint.us-east-1.amazonaws.com")
            }
            other => panic!("Expected Connectivity, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_display() {
        let error: PinpointError = ValidationError::MissingRequiredField {
            operation: "CreateApp".to_string(),
            field: "Name".to_string(),
        }
        .into();
        assert!(error.is_validation());
        assert_eq!(
            error.to_string(),
            "Missing required field 'Name' for operation CreateApp"
        );
    }

    #[test]
    fn test_error_code_and_request_id() {
        let error = PinpointError::Service {
            code: "ForbiddenException".to_string(),
            message: "denied".to_string(),
            status: 403,
            request_id: Some("req-1".to_string()),
        };
        assert_eq!(error.error_code(), Some("ForbiddenException"));
        assert_eq!(error.request_id(), Some("req-1"));
        assert_eq!(PinpointError::Cancelled.error_code(), None);
    }

    #[test]
    fn test_from_serde_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error: PinpointError = json_err.into();
        assert!(matches!(error, PinpointError::Serialization { .. }));
    }
}
