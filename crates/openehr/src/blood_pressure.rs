//! Blood pressure observation loading and validation.
//!
//! This module reads an openEHR-style JSON document of the form
//!
//! ```json
//! {
//!   "observation": {
//!     "time": "2024-01-01T10:00:00Z",
//!     "systolic_mmHg": 120,
//!     "diastolic_mmHg": 80,
//!     "mean_arterial_pressure_mmHg": 93,
//!     "pulse_per_min": 72
//!   }
//! }
//! ```
//!
//! and produces a [`BloodPressureObservation`].
//!
//! Responsibilities:
//! - Parse raw bytes as JSON, surfacing the parser diagnostic on failure
//! - Assert the `observation` container and its five required keys are present
//! - Carry field values through verbatim (no type or range checks)
//!
//! Notes:
//! - Missing fields are collected and reported together, never fail-fast
//! - Keys beyond the required set are kept in [`BloodPressureObservation::extra`]

use crate::data_types::FieldValue;
use crate::validation::{missing_fields, OBSERVATION_KEY};
use crate::{OpenEhrError, OpenEhrResult};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

// ============================================================================
// Public domain-level types
// ============================================================================

/// A validated blood pressure observation.
///
/// Only [`BloodPressure`] constructs this type, and only once every required key has been found,
/// so holding one means all five fields were present in the source document.
#[derive(Clone, Debug, PartialEq)]
pub struct BloodPressureObservation {
    /// Observation timestamp (`time`). Opaque; never parsed.
    pub time: FieldValue,

    /// Systolic pressure in mmHg (`systolic_mmHg`).
    pub systolic_mmhg: FieldValue,

    /// Diastolic pressure in mmHg (`diastolic_mmHg`).
    pub diastolic_mmhg: FieldValue,

    /// Mean arterial pressure in mmHg (`mean_arterial_pressure_mmHg`).
    pub mean_arterial_pressure_mmhg: FieldValue,

    /// Pulse rate in beats per minute (`pulse_per_min`).
    pub pulse_per_min: FieldValue,

    /// Any other keys found in the observation container.
    pub extra: Map<String, Value>,
}

// ============================================================================
// Public BloodPressure operations
// ============================================================================

/// Blood pressure observation operations.
///
/// This is a zero-sized type used for namespacing loader operations.
/// All methods are associated functions.
pub struct BloodPressure;

impl BloodPressure {
    /// Load and validate a blood pressure observation from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the input file. Its display form is used in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`OpenEhrError`] if:
    /// - the file cannot be opened or read (`NotFound`),
    /// - the content is not valid JSON (`Malformed`),
    /// - the `observation` key or any required field is absent (`SchemaViolation`).
    pub fn load(path: impl AsRef<Path>) -> OpenEhrResult<BloodPressureObservation> {
        let path = path.as_ref();
        let filename = path.display().to_string();

        let bytes = fs::read(path).map_err(|source| OpenEhrError::NotFound {
            filename: filename.clone(),
            source,
        })?;
        tracing::debug!("read {} bytes from {}", bytes.len(), filename);

        Self::parse(&bytes, &filename)
    }

    /// Parse and validate a blood pressure observation from in-memory bytes.
    ///
    /// `filename` is only used to label a `Malformed` error.
    pub fn parse(bytes: &[u8], filename: &str) -> OpenEhrResult<BloodPressureObservation> {
        let document: Value =
            serde_json::from_slice(bytes).map_err(|source| OpenEhrError::Malformed {
                filename: filename.to_owned(),
                source,
            })?;

        Self::from_document(document)
    }

    /// Validate an already-parsed JSON document.
    ///
    /// A top-level value that is not an object is treated as lacking the `observation` key.
    /// An `observation` value that is not an object is treated as missing every required field.
    ///
    /// # Errors
    ///
    /// Returns [`OpenEhrError::SchemaViolation`] naming `observation`, or naming every absent
    /// required field in fixed order.
    pub fn from_document(document: Value) -> OpenEhrResult<BloodPressureObservation> {
        let container = match document {
            Value::Object(mut root) => root.remove(OBSERVATION_KEY),
            _ => None,
        }
        .ok_or_else(|| OpenEhrError::SchemaViolation(vec![OBSERVATION_KEY]))?;

        let mut container = match container {
            Value::Object(map) => map,
            other => {
                tracing::debug!("observation container is not an object: {other}");
                Map::new()
            }
        };

        let missing = missing_fields(&container);
        if !missing.is_empty() {
            tracing::debug!("observation is missing {} field(s)", missing.len());
            return Err(OpenEhrError::SchemaViolation(missing));
        }

        let time = take_field(&mut container, "time")?;
        let systolic_mmhg = take_field(&mut container, "systolic_mmHg")?;
        let diastolic_mmhg = take_field(&mut container, "diastolic_mmHg")?;
        let mean_arterial_pressure_mmhg = take_field(&mut container, "mean_arterial_pressure_mmHg")?;
        let pulse_per_min = take_field(&mut container, "pulse_per_min")?;

        Ok(BloodPressureObservation {
            time,
            systolic_mmhg,
            diastolic_mmhg,
            mean_arterial_pressure_mmhg,
            pulse_per_min,
            extra: container,
        })
    }
}

// ============================================================================
// Helper functions (internal)
// ============================================================================

fn take_field(
    container: &mut Map<String, Value>,
    field: &'static str,
) -> OpenEhrResult<FieldValue> {
    container
        .remove(field)
        .map(FieldValue::new)
        .ok_or_else(|| OpenEhrError::SchemaViolation(vec![field]))
}
