use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One route, device, or conduit specification.
///
/// Records are free-form key/value mappings. The conventional keys for each
/// category live in [`crate::models::category`]; nothing here enforces them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Display text for `key`, or `None` when the key is missing or null.
    ///
    /// Strings are used verbatim, numbers and booleans use their JSON text,
    /// and nested arrays/objects render as compact JSON.
    pub fn cell(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn cell_or(&self, key: &str, placeholder: &str) -> String {
        self.cell(key).unwrap_or_else(|| placeholder.to_string())
    }
}
