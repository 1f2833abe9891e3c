//! Service client used by the command invoker.
//!
//! [`ServiceClient`] is the seam between the generic invoker and the wire:
//! it takes a descriptor and the request value built for it, performs one
//! round trip, and returns the structured response. [`PinpointClient`] is the
//! REST-JSON implementation driven entirely by each descriptor's HTTP
//! binding.
//!
//! # Example
//!
//! ```rust,no_run
//! use integrations_aws_pinpoint::client::{PinpointClient, ServiceClient};
//! use integrations_aws_pinpoint::command::{BoundArgs, CallContext, RequestValue};
//! use integrations_aws_pinpoint::config::PinpointConfig;
//! use integrations_aws_pinpoint::operations;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PinpointClient::new(PinpointConfig::from_env()?)?;
//!
//! let args = BoundArgs::new().bind("ApplicationId", "a1b2c3");
//! let context = CallContext::new(&operations::apps::GET_APP, &args, None)?;
//! let response = client
//!     .call(context.descriptor(), &RequestValue::build(&context))
//!     .await?;
//! println!("{response}");
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::debug;

use crate::command::{FieldLocation, OperationDescriptor, RequestValue};
use crate::config::PinpointConfig;
use crate::error::{PinpointResult, ValidationError};
use crate::http::{HttpClient, PinpointHttpClient, PinpointRequest};
use crate::signing::uri_encode;

/// Executes one remote operation.
#[async_trait]
pub trait ServiceClient: Send + Sync {
    /// Perform exactly one round trip for `descriptor`.
    async fn call(
        &self,
        descriptor: &OperationDescriptor,
        request: &RequestValue,
    ) -> PinpointResult<Value>;

    /// Endpoint the client talks to.
    fn endpoint(&self) -> &str;

    /// Region the client is configured for.
    fn region(&self) -> &str;
}

/// REST-JSON Pinpoint client.
#[derive(Clone)]
pub struct PinpointClient {
    http: Arc<dyn HttpClient>,
}

impl PinpointClient {
    /// Create a client with the default signed HTTP stack.
    pub fn new(config: PinpointConfig) -> PinpointResult<Self> {
        Ok(Self::with_http_client(Arc::new(PinpointHttpClient::new(
            config,
        )?)))
    }

    /// Create a client over a custom HTTP client.
    pub fn with_http_client(http: Arc<dyn HttpClient>) -> Self {
        Self { http }
    }
}

impl std::fmt::Debug for PinpointClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinpointClient")
            .field("endpoint", &self.http.endpoint())
            .field("region", &self.http.region())
            .finish()
    }
}

#[async_trait]
impl ServiceClient for PinpointClient {
    async fn call(
        &self,
        descriptor: &OperationDescriptor,
        request: &RequestValue,
    ) -> PinpointResult<Value> {
        let http_request = to_http_request(descriptor, request)?;
        debug!(
            operation = descriptor.name,
            method = http_request.method().as_str(),
            path = http_request.path(),
            "Dispatching Pinpoint operation"
        );

        let response = self.http.send_request(http_request).await?;
        let body = match response.json_value()? {
            Value::Null => Value::Object(Map::new()),
            other => other,
        };

        Ok(match descriptor.response.payload {
            Some(member) => {
                let mut wrapped = Map::new();
                wrapped.insert(member.to_string(), body);
                Value::Object(wrapped)
            }
            None => body,
        })
    }

    fn endpoint(&self) -> &str {
        self.http.endpoint()
    }

    fn region(&self) -> &str {
        self.http.region()
    }
}

/// Map a request value onto the descriptor's HTTP binding.
pub(crate) fn to_http_request(
    descriptor: &OperationDescriptor,
    request: &RequestValue,
) -> PinpointResult<PinpointRequest> {
    let path = expand_uri(descriptor, request)?;
    let mut http_request = PinpointRequest::new(descriptor.http.method, path);

    for field in descriptor.fields {
        let FieldLocation::Query(key) = field.location else {
            continue;
        };
        match request.get(field.member) {
            Some(Value::Array(items)) => {
                for item in items {
                    http_request = http_request.query(key, label_text(item));
                }
            }
            Some(value) => http_request = http_request.query(key, label_text(value)),
            None => {}
        }
    }

    let payload = descriptor
        .http
        .payload
        .and_then(|member| request.get(member));
    match payload {
        Some(body) => http_request = http_request.json(body)?,
        None if descriptor.http.method.carries_body() => {
            http_request = http_request.json(&Value::Object(Map::new()))?
        }
        None => {}
    }

    Ok(http_request)
}

fn expand_uri(descriptor: &OperationDescriptor, request: &RequestValue) -> PinpointResult<String> {
    let mut path = String::with_capacity(descriptor.http.uri.len() + 32);
    let mut rest = descriptor.http.uri;

    while let Some(open) = rest.find('{') {
        path.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after.find('}').unwrap_or(after.len());
        let label = &after[..close];

        let field = descriptor
            .fields
            .iter()
            .find(|field| field.location == FieldLocation::Uri(label));
        let value = field.and_then(|field| request.get(field.member));
        match (field, value) {
            (Some(_), Some(value)) => path.push_str(&uri_encode(&label_text(value), true)),
            _ => {
                return Err(ValidationError::MissingRequiredField {
                    operation: descriptor.name.to_string(),
                    field: field.map_or(label, |field| field.name).to_string(),
                }
                .into())
            }
        }

        rest = after.get(close + 1..).unwrap_or("");
    }
    path.push_str(rest);

    Ok(path)
}

fn label_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{BoundArgs, CallContext};
    use crate::http::HttpMethod;
    use crate::mocks::MockHttpClient;
    use crate::operations::{apps, campaigns, tags};
    use serde_json::json;

    fn request_for(
        descriptor: &'static OperationDescriptor,
        args: BoundArgs,
    ) -> (RequestValue, &'static OperationDescriptor) {
        let context = CallContext::new(descriptor, &args, None).unwrap();
        (RequestValue::build(&context), descriptor)
    }

    #[test]
    fn test_uri_labels_are_encoded() {
        let (request, descriptor) = request_for(
            &tags::TAG_RESOURCE,
            BoundArgs::new()
                .bind("ResourceArn", "arn:aws:mobiletargeting:us-east-1:123:apps/abc")
                .bind("Tags", json!({"team": "growth"})),
        );
        let http_request = to_http_request(descriptor, &request).unwrap();
        assert_eq!(
            http_request.path(),
            "/v1/tags/arn%3Aaws%3Amobiletargeting%3Aus-east-1%3A123%3Aapps%2Fabc"
        );
        assert_eq!(
            http_request.body_json(),
            Some(json!({"tags": {"team": "growth"}}))
        );
    }

    #[test]
    fn test_query_list_repeats_key() {
        let (request, descriptor) = request_for(
            &tags::UNTAG_RESOURCE,
            BoundArgs::new()
                .bind("ResourceArn", "arn")
                .bind("TagKeys", json!(["a", "b"])),
        );
        let http_request = to_http_request(descriptor, &request).unwrap();
        assert_eq!(http_request.method(), HttpMethod::DELETE);
        assert_eq!(
            http_request.query_params(),
            &[
                ("tagKeys".to_string(), "a".to_string()),
                ("tagKeys".to_string(), "b".to_string())
            ]
        );
        assert!(http_request.body().is_none());
    }

    #[test]
    fn test_payload_member_is_the_body() {
        let (request, descriptor) = request_for(
            &campaigns::CREATE_CAMPAIGN,
            BoundArgs::new()
                .bind("ApplicationId", "app-1")
                .bind("Name", "spring"),
        );
        let http_request = to_http_request(descriptor, &request).unwrap();
        assert_eq!(http_request.path(), "/v1/apps/app-1/campaigns");
        assert_eq!(http_request.body_json(), Some(json!({"Name": "spring"})));
    }

    #[test]
    fn test_empty_payload_still_sends_object_for_put() {
        let (request, descriptor) = request_for(
            &apps::UPDATE_APPLICATION_SETTINGS,
            BoundArgs::new().bind("ApplicationId", "app-1"),
        );
        let http_request = to_http_request(descriptor, &request).unwrap();
        assert_eq!(http_request.body_json(), Some(json!({})));
    }

    #[tokio::test]
    async fn test_response_is_wrapped_in_payload_member() {
        let http = Arc::new(MockHttpClient::new().with_json(200, json!({"Id": "app-1", "Name": "demo"})));
        let client = PinpointClient::with_http_client(http.clone());

        let (request, descriptor) =
            request_for(&apps::GET_APP, BoundArgs::new().bind("ApplicationId", "app-1"));
        let response = client.call(descriptor, &request).await.unwrap();

        assert_eq!(
            response,
            json!({"ApplicationResponse": {"Id": "app-1", "Name": "demo"}})
        );
        assert_eq!(http.call_count(), 1);
        let sent = http.requests();
        assert_eq!(sent[0].path(), "/v1/apps/app-1");
        assert_eq!(sent[0].method(), HttpMethod::GET);
    }

    #[tokio::test]
    async fn test_empty_response_without_payload_member() {
        let http = Arc::new(MockHttpClient::new().with_status(204));
        let client = PinpointClient::with_http_client(http);

        let (request, descriptor) = request_for(
            &tags::UNTAG_RESOURCE,
            BoundArgs::new()
                .bind("ResourceArn", "arn")
                .bind("TagKeys", json!(["a"])),
        );
        assert_eq!(client.call(descriptor, &request).await.unwrap(), json!({}));
    }

    #[tokio::test]
    async fn test_service_error_passes_through() {
        let http = Arc::new(MockHttpClient::new().with_error_response(
            404,
            "NotFoundException",
            json!({"Message": "Resource not found"}),
        ));
        let client = PinpointClient::with_http_client(http);

        let (request, descriptor) =
            request_for(&apps::GET_APP, BoundArgs::new().bind("ApplicationId", "missing"));
        let error = client.call(descriptor, &request).await.unwrap_err();
        assert_eq!(error.error_code(), Some("NotFoundException"));
    }
}
