//! Output selectors.
//!
//! A selector is a pure projection `(response, context) -> value`. The set is
//! closed: a named response field (dotted paths reach into nested members),
//! the whole response, or an echo of one bound input field.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use super::context::CallContext;

/// What an invocation emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSelector {
    /// A named response field. `A.B` walks into nested objects.
    ResponseField(String),
    /// The entire response.
    WholeResponse,
    /// The bound value of an input field.
    Parameter(String),
}

impl OutputSelector {
    /// Apply the selector.
    ///
    /// Missing response fields project to `null`; the service omits empty
    /// members and that is not an error.
    pub fn project(&self, response: &Value, context: &CallContext) -> Value {
        match self {
            OutputSelector::WholeResponse => response.clone(),
            OutputSelector::ResponseField(path) => path
                .split('.')
                .try_fold(response, |current, segment| current.get(segment))
                .cloned()
                .unwrap_or(Value::Null),
            OutputSelector::Parameter(name) => {
                context.value(name).cloned().unwrap_or(Value::Null)
            }
        }
    }
}

impl FromStr for OutputSelector {
    type Err = String;

    /// `*` selects the whole response, `^Name` echoes a parameter, anything
    /// else names a response field.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        if text.is_empty() {
            return Err("selector is empty".to_string());
        }
        if text == "*" {
            return Ok(OutputSelector::WholeResponse);
        }
        if let Some(name) = text.strip_prefix('^') {
            if name.is_empty() {
                return Err("'^' must be followed by a parameter name".to_string());
            }
            return Ok(OutputSelector::Parameter(name.to_string()));
        }
        if text.split('.').any(str::is_empty) {
            return Err(format!("'{text}' has an empty path segment"));
        }
        Ok(OutputSelector::ResponseField(text.to_string()))
    }
}

impl fmt::Display for OutputSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputSelector::ResponseField(path) => f.write_str(path),
            OutputSelector::WholeResponse => f.write_str("*"),
            OutputSelector::Parameter(name) => write!(f, "^{name}"),
        }
    }
}
