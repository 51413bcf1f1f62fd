//! Row records.
//!
//! A row is an opaque key-value record. The engine only ever reads fields
//! from it and reorders whole rows; it never mutates one.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single data record, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(Map<String, Value>);

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set a field.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// Look up a field value.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// All fields, in insertion order.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Reconciliation key taken from `field`.
    ///
    /// Returns `None` when `field` is empty or the row lacks it; callers fall
    /// back to positional identity in that case.
    pub fn key(&self, field: &str) -> Option<String> {
        if field.is_empty() {
            return None;
        }
        self.get(field).map(|v| cast_value(Some(v)))
    }
}

impl From<Map<String, Value>> for Row {
    fn from(map: Map<String, Value>) -> Self {
        Row(map)
    }
}

/// Plain string form of a cell value.
///
/// Strings are returned verbatim, a missing value is empty, and everything
/// else uses its JSON text (`12`, `true`, `null`, ...).
pub fn cast_value(value: Option<&Value>) -> String {
    match value {
        None => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
