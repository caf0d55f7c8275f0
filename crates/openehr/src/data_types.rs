//! Opaque data values carried through from openEHR-style JSON.
//!
//! Observation fields are presence-checked but never type-checked, so each one is held as the
//! JSON value it was read as. [`FieldValue`] gives that value a plain-text rendering for human
//! output and serialises back to exactly the JSON it came from.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// A single observation field value, kept verbatim from the input document.
///
/// # Display
///
/// - JSON strings render without surrounding quotes (`2024-01-01T10:00:00Z`).
/// - Every other value renders as its compact JSON text (`120`, `120.50`, `true`, `null`).
///   Numbers keep their source digits exactly, however long.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldValue(Value);

impl FieldValue {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Borrow the underlying JSON value.
    pub fn as_json(&self) -> &Value {
        &self.0
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(text) => f.write_str(text),
            other => write!(f, "{other}"),
        }
    }
}
