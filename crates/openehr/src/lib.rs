//! openEHR wire/boundary support.
//!
//! This crate is responsible for reading openEHR-style blood pressure JSON documents and
//! validating them into a typed [`BloodPressureObservation`].
//!
//! Rendering (human-readable reports, FHIR) lives elsewhere. This crate handles the input format
//! and its presence rules only.

pub mod blood_pressure;
pub mod data_types;
pub mod validation;

pub use blood_pressure::{BloodPressure, BloodPressureObservation};
pub use data_types::FieldValue;
pub use validation::{OBSERVATION_KEY, REQUIRED_FIELDS};

use thiserror::Error;

/// Errors returned by the `openehr` boundary crate.
///
/// The `Display` text of each variant is the user-facing message.
#[derive(Debug, Error)]
pub enum OpenEhrError {
    #[error("File '{filename}' not found.")]
    NotFound {
        filename: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in '{filename}': {source}.")]
    Malformed {
        filename: String,
        #[source]
        source: serde_json::Error,
    },

    /// One or more required keys are absent. The `observation` container itself is reported
    /// as a single pseudo-field.
    #[error("Missing field '{}' in JSON data.", .0.join(", "))]
    SchemaViolation(Vec<&'static str>),
}

/// Type alias for Results that can fail with an [`OpenEhrError`].
pub type OpenEhrResult<T> = Result<T, OpenEhrError>;
