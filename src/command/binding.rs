//! Caller-supplied arguments, prior to validation.

use std::collections::BTreeMap;

use serde_json::Value;

/// One bound argument.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// A value already in its final JSON form (library callers).
    Json(Value),
    /// Raw text to be parsed by the field's kind (command line).
    Text(String),
}

/// Arguments bound for one invocation.
///
/// Field names are kept as supplied; matching against the descriptor is
/// case-insensitive and happens when the call context is built.
///
/// ```
/// use integrations_aws_pinpoint::command::BoundArgs;
/// use serde_json::json;
///
/// let args = BoundArgs::new()
///     .bind("Name", json!("my-app"))
///     .bind_text("tags", "team=growth");
/// assert_eq!(args.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundArgs {
    named: BTreeMap<String, ArgValue>,
    piped: Option<ArgValue>,
}

impl BoundArgs {
    /// Empty argument set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a JSON value by name. Rebinding a name replaces the earlier value.
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.named.insert(name.into(), ArgValue::Json(value.into()));
        self
    }

    /// Bind raw text by name.
    pub fn bind_text(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.named.insert(name.into(), ArgValue::Text(text.into()));
        self
    }

    /// Supply the piped value.
    pub fn pipe(mut self, value: impl Into<Value>) -> Self {
        self.piped = Some(ArgValue::Json(value.into()));
        self
    }

    /// Supply the piped value as raw text.
    pub fn pipe_text(mut self, text: impl Into<String>) -> Self {
        self.piped = Some(ArgValue::Text(text.into()));
        self
    }

    /// Named arguments in name order.
    pub fn named(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.named.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// The piped value, if any.
    pub fn piped(&self) -> Option<&ArgValue> {
        self.piped.as_ref()
    }

    /// Number of named arguments.
    pub fn len(&self) -> usize {
        self.named.len()
    }

    /// True when nothing was bound, piped input included.
    pub fn is_empty(&self) -> bool {
        self.named.is_empty() && self.piped.is_none()
    }
}
