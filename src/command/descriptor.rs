//! Static operation descriptors.
//!
//! Every Pinpoint operation is described by a `const` [`OperationDescriptor`]:
//! its caller-facing fields, where each field lands in the request, the HTTP
//! binding the concrete client uses, and the shape of the response that
//! output selectors may target. Descriptors are never mutated.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Number, Value};

use crate::http::HttpMethod;

/// How a textual argument is parsed into a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain string.
    String,
    /// 64-bit signed integer.
    Integer,
    /// Double precision number.
    Double,
    /// `true` / `false`.
    Boolean,
    /// RFC 3339 timestamp, normalized to UTC.
    Timestamp,
    /// Comma separated values or a JSON array.
    StringList,
    /// `key=value` pairs separated by commas, or a JSON object.
    StringMap,
    /// Arbitrary JSON.
    Document,
}

impl FieldKind {
    /// Parse command-line text into a value of this kind.
    ///
    /// ```
    /// use integrations_aws_pinpoint::command::FieldKind;
    /// use serde_json::json;
    ///
    /// assert_eq!(FieldKind::Integer.parse_text("42").unwrap(), json!(42));
    /// assert_eq!(FieldKind::StringList.parse_text("a, b").unwrap(), json!(["a", "b"]));
    /// assert_eq!(FieldKind::StringMap.parse_text("team=growth").unwrap(), json!({"team": "growth"}));
    /// ```
    pub fn parse_text(&self, text: &str) -> Result<Value, String> {
        let trimmed = text.trim();
        match self {
            FieldKind::String => Ok(Value::String(text.to_string())),
            FieldKind::Integer => trimmed
                .parse::<i64>()
                .map(Value::from)
                .map_err(|e| format!("expected an integer: {e}")),
            FieldKind::Double => trimmed
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .ok_or_else(|| "expected a finite number".to_string()),
            FieldKind::Boolean => match trimmed.to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(Value::Bool(true)),
                "false" | "0" | "no" => Ok(Value::Bool(false)),
                _ => Err("expected true or false".to_string()),
            },
            FieldKind::Timestamp => DateTime::parse_from_rfc3339(trimmed)
                .map(|ts| {
                    Value::String(
                        ts.with_timezone(&Utc)
                            .to_rfc3339_opts(SecondsFormat::AutoSi, true),
                    )
                })
                .map_err(|e| format!("expected an RFC 3339 timestamp: {e}")),
            FieldKind::StringList => {
                if trimmed.starts_with('[') {
                    return parse_json(trimmed).and_then(|value| match value {
                        Value::Array(_) => Ok(value),
                        _ => Err("expected a JSON array".to_string()),
                    });
                }
                Ok(Value::Array(
                    trimmed
                        .split(',')
                        .map(str::trim)
                        .filter(|item| !item.is_empty())
                        .map(|item| Value::String(item.to_string()))
                        .collect(),
                ))
            }
            FieldKind::StringMap => {
                if trimmed.starts_with('{') {
                    return parse_json(trimmed).and_then(|value| match value {
                        Value::Object(_) => Ok(value),
                        _ => Err("expected a JSON object".to_string()),
                    });
                }
                let mut map = Map::new();
                for pair in trimmed.split(',').map(str::trim).filter(|p| !p.is_empty()) {
                    let (key, value) = pair
                        .split_once('=')
                        .ok_or_else(|| format!("expected key=value, got '{pair}'"))?;
                    map.insert(key.trim().to_string(), Value::String(value.trim().to_string()));
                }
                Ok(Value::Object(map))
            }
            FieldKind::Document => parse_json(trimmed),
        }
    }
}

fn parse_json(text: &str) -> Result<Value, String> {
    serde_json::from_str(text).map_err(|e| format!("invalid JSON: {e}"))
}

/// Whether a field must be bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// The invocation fails without it.
    Required,
    /// May be omitted; omitted fields never appear in the request.
    Optional,
}

/// How a field may be bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingSource {
    /// Only by name.
    Named,
    /// By name, or from the piped value.
    Pipeline,
}

/// Where a field lands on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLocation {
    /// Substituted into the URI template at `{label}`.
    Uri(&'static str),
    /// Sent as a query parameter; list values repeat the key.
    Query(&'static str),
    /// Part of the JSON body.
    Payload,
}

/// One caller-facing field of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Caller-facing name (e.g. `ApplicationId`).
    pub name: &'static str,
    /// Dotted path of the member in the request value
    /// (e.g. `WriteCampaignRequest.Schedule.StartTime`).
    pub member: &'static str,
    /// Parsing rule for textual arguments.
    pub kind: FieldKind,
    /// Required or optional.
    pub requirement: Requirement,
    /// Named only, or also bindable from the pipeline.
    pub source: BindingSource,
    /// Wire location.
    pub location: FieldLocation,
}

impl FieldDescriptor {
    /// A required payload field.
    pub const fn required(name: &'static str, member: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            member,
            kind,
            requirement: Requirement::Required,
            source: BindingSource::Named,
            location: FieldLocation::Payload,
        }
    }

    /// An optional payload field.
    pub const fn optional(name: &'static str, member: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            member,
            kind,
            requirement: Requirement::Optional,
            source: BindingSource::Named,
            location: FieldLocation::Payload,
        }
    }

    /// Move this field into the URI at `{label}`.
    pub const fn in_uri(self, label: &'static str) -> Self {
        let mut field = self;
        field.location = FieldLocation::Uri(label);
        field
    }

    /// Move this field into the query string under `key`.
    pub const fn in_query(self, key: &'static str) -> Self {
        let mut field = self;
        field.location = FieldLocation::Query(key);
        field
    }

    /// Allow binding this field from the pipeline.
    pub const fn from_pipeline(self) -> Self {
        let mut field = self;
        field.source = BindingSource::Pipeline;
        field
    }

    /// True for required fields.
    pub fn is_required(&self) -> bool {
        self.requirement == Requirement::Required
    }

    /// Member path segments.
    pub fn member_path(&self) -> impl Iterator<Item = &'static str> {
        self.member.split('.')
    }
}

/// HTTP binding of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpBinding {
    /// HTTP method.
    pub method: HttpMethod,
    /// URI template with `{label}` placeholders.
    pub uri: &'static str,
    /// Top-level request member sent as the JSON body.
    pub payload: Option<&'static str>,
}

/// Shape of an operation's response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseShape {
    /// Member the response body is wrapped in.
    pub payload: Option<&'static str>,
    /// Top-level response fields a selector may name.
    pub fields: &'static [&'static str],
}

/// What an invocation emits when the caller does not choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultOutput {
    /// One named top-level response field.
    Field(&'static str),
    /// The whole response.
    WholeResponse,
}

/// Static metadata for one remote operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationDescriptor {
    /// Operation name (e.g. `CreateCampaign`).
    pub name: &'static str,
    /// One-line summary for help output.
    pub summary: &'static str,
    /// Declared fields, in binding order.
    pub fields: &'static [FieldDescriptor],
    /// HTTP binding.
    pub http: HttpBinding,
    /// Response shape.
    pub response: ResponseShape,
    /// Default projection.
    pub default_output: DefaultOutput,
    /// Whether the operation must pass the confirmation gate.
    pub state_changing: bool,
}

impl OperationDescriptor {
    /// Look up a declared field by caller-facing name (case-insensitive).
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// The field that may be bound from the pipeline, if any.
    pub fn pipeline_field(&self) -> Option<&'static FieldDescriptor> {
        self.fields
            .iter()
            .find(|f| f.source == BindingSource::Pipeline)
    }

    /// Required fields in declaration order.
    pub fn required_fields(&self) -> impl Iterator<Item = &'static FieldDescriptor> {
        self.fields.iter().filter(|f| f.is_required())
    }

    /// Whether `name` is a top-level response field.
    pub fn has_response_field(&self, name: &str) -> bool {
        self.response.fields.iter().any(|f| *f == name)
    }

    /// Kebab-case command name (`CreateSmsTemplate` becomes `create-sms-template`).
    pub fn cli_name(&self) -> String {
        let mut out = String::with_capacity(self.name.len() + 4);
        for (i, ch) in self.name.char_indices() {
            if ch.is_ascii_uppercase() && i > 0 {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FIELDS: &[FieldDescriptor] = &[
        FieldDescriptor::required("ApplicationId", "ApplicationId", FieldKind::String)
            .in_uri("application-id")
            .from_pipeline(),
        FieldDescriptor::optional("Name", "WriteThing.Name", FieldKind::String),
    ];

    const OP: OperationDescriptor = OperationDescriptor {
        name: "UpdateThingSettings",
        summary: "test",
        fields: FIELDS,
        http: HttpBinding {
            method: HttpMethod::PUT,
            uri: "/v1/apps/{application-id}/thing",
            payload: Some("WriteThing"),
        },
        response: ResponseShape {
            payload: Some("ThingResponse"),
            fields: &["ThingResponse"],
        },
        default_output: DefaultOutput::Field("ThingResponse"),
        state_changing: true,
    };

    #[test]
    fn test_const_builders() {
        let app = &FIELDS[0];
        assert_eq!(app.location, FieldLocation::Uri("application-id"));
        assert_eq!(app.source, BindingSource::Pipeline);
        assert!(app.is_required());
        assert!(!FIELDS[1].is_required());
        assert_eq!(FIELDS[1].member_path().collect::<Vec<_>>(), vec!["WriteThing", "Name"]);
    }

    #[test]
    fn test_descriptor_lookups() {
        assert_eq!(OP.field("applicationid").map(|f| f.name), Some("ApplicationId"));
        assert!(OP.field("Missing").is_none());
        assert_eq!(OP.pipeline_field().map(|f| f.name), Some("ApplicationId"));
        assert_eq!(OP.required_fields().count(), 1);
        assert!(OP.has_response_field("ThingResponse"));
        assert_eq!(OP.cli_name(), "update-thing-settings");
    }

    #[test]
    fn test_parse_text_scalars() {
        assert_eq!(FieldKind::String.parse_text(" keep ").unwrap(), json!(" keep "));
        assert_eq!(FieldKind::Double.parse_text("0.5").unwrap(), json!(0.5));
        assert_eq!(FieldKind::Boolean.parse_text("FALSE").unwrap(), json!(false));
        assert!(FieldKind::Integer.parse_text("ten").is_err());
        assert!(FieldKind::Double.parse_text("NaN").is_err());
        assert!(FieldKind::Boolean.parse_text("maybe").is_err());
    }

    #[test]
    fn test_parse_text_timestamp_normalizes_to_utc() {
        assert_eq!(
            FieldKind::Timestamp.parse_text("2024-03-01T10:00:00+02:00").unwrap(),
            json!("2024-03-01T08:00:00Z")
        );
        assert!(FieldKind::Timestamp.parse_text("yesterday").is_err());
    }

    #[test]
    fn test_parse_text_collections() {
        assert_eq!(
            FieldKind::StringList.parse_text(r#"["a","b"]"#).unwrap(),
            json!(["a", "b"])
        );
        assert_eq!(FieldKind::StringList.parse_text("").unwrap(), json!([]));
        assert_eq!(
            FieldKind::StringMap.parse_text("a=1, b = two").unwrap(),
            json!({"a": "1", "b": "two"})
        );
        assert!(FieldKind::StringMap.parse_text("novalue").is_err());
        assert_eq!(
            FieldKind::Document.parse_text(r#"{"x":[1,2]}"#).unwrap(),
            json!({"x": [1, 2]})
        );
        assert!(FieldKind::Document.parse_text("{oops").is_err());
    }
}
