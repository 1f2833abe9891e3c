//! The immutable call context built once per invocation.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use super::binding::{ArgValue, BoundArgs};
use super::descriptor::{DefaultOutput, FieldDescriptor, OperationDescriptor};
use super::options::SelectorOverride;
use super::selector::OutputSelector;
use crate::error::ValidationError;

/// Validated arguments plus the resolved output selector.
///
/// Every present value was supplied by the caller. A field bound to `null`
/// is treated exactly like an unbound one.
#[derive(Debug, Clone, PartialEq)]
pub struct CallContext {
    descriptor: &'static OperationDescriptor,
    values: BTreeMap<&'static str, Value>,
    selector: OutputSelector,
}

impl CallContext {
    /// Validate `args` against `descriptor` and resolve the selector.
    ///
    /// Checks run in a fixed order and the first failure wins: unknown or
    /// repeated names and unparsable text, piped input without a pipeline
    /// field, the first missing required field in declaration order, then the
    /// selector.
    pub fn new(
        descriptor: &'static OperationDescriptor,
        args: &BoundArgs,
        selector: Option<&SelectorOverride>,
    ) -> Result<Self, ValidationError> {
        let mut values = BTreeMap::new();
        let mut named = BTreeSet::new();

        for (name, arg) in args.named() {
            let field = descriptor
                .field(name)
                .ok_or_else(|| ValidationError::UnknownField {
                    operation: descriptor.name.to_string(),
                    field: name.to_string(),
                })?;
            if !named.insert(field.name) {
                return Err(ValidationError::DuplicateField {
                    operation: descriptor.name.to_string(),
                    field: field.name.to_string(),
                });
            }
            if let Some(value) = resolve(field, arg)? {
                values.insert(field.name, value);
            }
        }

        if let Some(arg) = args.piped() {
            let field = descriptor
                .pipeline_field()
                .ok_or_else(|| ValidationError::NoPipelineField {
                    operation: descriptor.name.to_string(),
                })?;
            if !values.contains_key(field.name) {
                if let Some(value) = resolve(field, arg)? {
                    values.insert(field.name, value);
                }
            }
        }

        if let Some(missing) = descriptor
            .required_fields()
            .find(|field| !values.contains_key(field.name))
        {
            return Err(ValidationError::MissingRequiredField {
                operation: descriptor.name.to_string(),
                field: missing.name.to_string(),
            });
        }

        let selector = resolve_selector(descriptor, selector)?;

        Ok(Self {
            descriptor,
            values,
            selector,
        })
    }

    /// The operation being invoked.
    pub fn descriptor(&self) -> &'static OperationDescriptor {
        self.descriptor
    }

    /// The selector applied to the response.
    pub fn selector(&self) -> &OutputSelector {
        &self.selector
    }

    /// Bound value of a field (case-insensitive name).
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.descriptor
            .field(name)
            .and_then(|field| self.values.get(field.name))
    }

    /// Present fields in declaration order.
    pub fn present(&self) -> impl Iterator<Item = (&'static FieldDescriptor, &Value)> {
        self.descriptor
            .fields
            .iter()
            .filter_map(|field| self.values.get(field.name).map(|value| (field, value)))
    }

    /// Number of present fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Human-readable target for confirmation and what-if messages.
    ///
    /// The pipeline field's value if bound, otherwise the first bound
    /// required field.
    pub fn target(&self) -> Option<String> {
        self.descriptor
            .pipeline_field()
            .and_then(|field| self.values.get(field.name))
            .or_else(|| {
                self.descriptor
                    .required_fields()
                    .find_map(|field| self.values.get(field.name))
            })
            .map(|value| match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            })
    }
}

fn resolve(field: &FieldDescriptor, arg: &ArgValue) -> Result<Option<Value>, ValidationError> {
    match arg {
        ArgValue::Json(Value::Null) => Ok(None),
        ArgValue::Json(value) => Ok(Some(value.clone())),
        ArgValue::Text(text) => field
            .kind
            .parse_text(text)
            .map(Some)
            .map_err(|message| ValidationError::InvalidValue {
                field: field.name.to_string(),
                message,
            }),
    }
}

fn resolve_selector(
    descriptor: &OperationDescriptor,
    selector: Option<&SelectorOverride>,
) -> Result<OutputSelector, ValidationError> {
    let invalid = |selector: String, reason: String| ValidationError::InvalidSelector {
        operation: descriptor.name.to_string(),
        selector,
        reason,
    };

    match selector {
        None => Ok(match descriptor.default_output {
            DefaultOutput::Field(name) => OutputSelector::ResponseField(name.to_string()),
            DefaultOutput::WholeResponse => OutputSelector::WholeResponse,
        }),
        Some(SelectorOverride::PassThru) => descriptor
            .pipeline_field()
            .map(|field| OutputSelector::Parameter(field.name.to_string()))
            .ok_or_else(|| {
                invalid(
                    "PassThru".to_string(),
                    "operation has no pipeline input to pass through".to_string(),
                )
            }),
        Some(SelectorOverride::Expression(OutputSelector::WholeResponse)) => {
            Ok(OutputSelector::WholeResponse)
        }
        Some(SelectorOverride::Expression(OutputSelector::Parameter(name))) => descriptor
            .field(name)
            .map(|field| OutputSelector::Parameter(field.name.to_string()))
            .ok_or_else(|| {
                invalid(
                    format!("^{name}"),
                    "not a parameter of this operation".to_string(),
                )
            }),
        Some(SelectorOverride::Expression(OutputSelector::ResponseField(path))) => {
            let head = path.split('.').next().unwrap_or(path);
            if descriptor.has_response_field(head) {
                Ok(OutputSelector::ResponseField(path.clone()))
            } else if descriptor.response.fields.is_empty() {
                Err(invalid(
                    path.clone(),
                    "operation returns no named fields; use '*'".to_string(),
                ))
            } else {
                Err(invalid(
                    path.clone(),
                    format!(
                        "expected one of {}",
                        descriptor.response.fields.join(", ")
                    ),
                ))
            }
        }
    }
}
