//! Request value construction.

use serde_json::{Map, Value};

use super::context::CallContext;

/// The nested request object for one invocation.
///
/// Only present fields are copied, each along its member path. An
/// intermediate object is created only when a member beneath it is present,
/// so an untouched group is absent rather than empty.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestValue {
    root: Value,
}

impl RequestValue {
    /// Build the request value for `context`.
    ///
    /// Pure and deterministic: the same context always yields the same
    /// serialization.
    pub fn build(context: &CallContext) -> Self {
        let mut root = Map::new();
        for (field, value) in context.present() {
            insert_path(&mut root, field.member, value.clone());
        }
        Self {
            root: Value::Object(root),
        }
    }

    /// Look up a dotted member path.
    pub fn get(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.root, |current, segment| current.get(segment))
    }

    /// The request as a JSON value.
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Consume into the JSON value.
    pub fn into_value(self) -> Value {
        self.root
    }

    /// Compact JSON serialization.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.root.to_string().into_bytes()
    }
}

fn insert_path(root: &mut Map<String, Value>, path: &str, value: Value) {
    let mut segments = path.split('.').peekable();
    let mut current = root;
    while let Some(segment) = segments.next() {
        if segments.peek().is_none() {
            current.insert(segment.to_string(), value);
            return;
        }
        let slot = current
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        current = match slot {
            Value::Object(map) => map,
            _ => return,
        };
    }
}
