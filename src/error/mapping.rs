//! Pinpoint error response mapping.
//!
//! Pinpoint speaks REST-JSON. A rejected request carries the error code in
//! the `x-amzn-ErrorType` header (optionally followed by `:` and a URL) and a
//! body of the form:
//!
//! ```json
//! {
//!   "Message": "Resource not found",
//!   "RequestID": "0a1b2c3d-..."
//! }
//! ```
//!
//! Some gateways put the code in the body instead (`__type` or `code`), which
//! may carry a `namespace#` prefix.

use super::PinpointError;
use serde::{Deserialize, Serialize};

/// Parsed Pinpoint error body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceErrorResponse {
    /// Error code from the body, if present.
    #[serde(
        default,
        alias = "__type",
        alias = "code",
        alias = "Code",
        skip_serializing_if = "Option::is_none"
    )]
    pub error_type: Option<String>,

    /// Human-readable message.
    #[serde(default, alias = "Message")]
    pub message: String,

    /// Request ID echoed in the body.
    #[serde(
        default,
        alias = "RequestID",
        alias = "RequestId",
        alias = "requestId",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_id: Option<String>,
}

/// Parse an error body. Empty or non-JSON bodies yield an empty response.
///
/// ```rust
/// use integrations_aws_pinpoint::error::parse_error_response;
///
/// let parsed = parse_error_response(br#"{"Message":"App not found","RequestID":"r-1"}"#);
/// assert_eq!(parsed.message, "App not found");
/// assert_eq!(parsed.request_id.as_deref(), Some("r-1"));
/// ```
pub fn parse_error_response(body: &[u8]) -> ServiceErrorResponse {
    serde_json::from_slice(body).unwrap_or_default()
}

/// Build a [`PinpointError::Service`] from the pieces of a failed response.
///
/// The header error type wins over the body; when neither is present the
/// code is derived from the HTTP status.
pub fn map_service_error(
    status: u16,
    header_error_type: Option<&str>,
    header_request_id: Option<&str>,
    body: &[u8],
) -> PinpointError {
    let parsed = parse_error_response(body);

    let code = header_error_type
        .map(str::to_string)
        .or(parsed.error_type)
        .map(|raw| sanitize_error_code(&raw))
        .filter(|code| !code.is_empty())
        .unwrap_or_else(|| fallback_code(status).to_string());

    let message = if parsed.message.is_empty() {
        String::from_utf8_lossy(body).trim().to_string()
    } else {
        parsed.message
    };

    PinpointError::Service {
        code,
        message,
        status,
        request_id: header_request_id.map(str::to_string).or(parsed.request_id),
    }
}

/// Strip `:<url>` suffixes and `namespace#` prefixes from an error code.
fn sanitize_error_code(raw: &str) -> String {
    let without_suffix = raw.split(':').next().unwrap_or(raw);
    let without_prefix = without_suffix
        .rsplit('#')
        .next()
        .unwrap_or(without_suffix);
    without_prefix.trim().to_string()
}

fn fallback_code(status: u16) -> &'static str {
    match status {
        400 => "BadRequestException",
        403 => "ForbiddenException",
        404 => "NotFoundException",
        405 => "MethodNotAllowedException",
        409 => "ConflictException",
        413 => "PayloadTooLargeException",
        429 => "TooManyRequestsException",
        500..=599 => "InternalServerErrorException",
        _ => "UnknownError",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_error_type_wins() {
        let error = map_service_error(
            404,
            Some("NotFoundException:http://internal.amazon.com/coral/com.amazonaws.pinpoint/"),
            Some("hdr-req"),
            br#"{"Message":"Resource not found","RequestID":"body-req"}"#,
        );

        match error {
            PinpointError::Service {
                code,
                message,
                status,
                request_id,
            } => {
                assert_eq!(code, "NotFoundException");
                assert_eq!(message, "Resource not found");
                assert_eq!(status, 404);
                assert_eq!(request_id.as_deref(), Some("hdr-req"));
            }
            other => panic!("Expected Service error, got {other:?}"),
        }
    }

    #[test]
    fn test_body_type_with_namespace() {
        let error = map_service_error(
            400,
            None,
            None,
            br#"{"__type":"com.amazonaws.pinpoint#BadRequestException","message":"Invalid name"}"#,
        );
        assert_eq!(error.error_code(), Some("BadRequestException"));
        assert_eq!(error.to_string(), "BadRequestException: Invalid name");
    }

    #[test]
    fn test_fallback_code_from_status() {
        let error = map_service_error(429, None, None, b"");
        assert_eq!(error.error_code(), Some("TooManyRequestsException"));

        let error = map_service_error(503, None, None, b"Service Unavailable");
        assert_eq!(error.error_code(), Some("InternalServerErrorException"));
        assert_eq!(error.to_string(), "InternalServerErrorException: Service Unavailable");
    }

    #[test]
    fn test_parse_garbage_body() {
        let parsed = parse_error_response(b"<html>oops</html>");
        assert_eq!(parsed, ServiceErrorResponse::default());
    }
}
