//! FHIR wire/boundary support.
//!
//! This crate provides the **wire model** and **translation helpers** for emitting a blood
//! pressure reading as a FHIR R4 `Observation` resource:
//! - fixed coding systems and LOINC codes ([`codes`])
//! - translation from a validated openEHR observation ([`Observation::from_blood_pressure`])
//! - JSON rendering ([`Observation::render_json`])
//!
//! Only R4 is supported, and the resource is never read back.

pub mod codes;
pub mod observation;

// Re-export facade
pub use observation::Observation;

// Re-export wire types
pub use observation::{CodeableConcept, Coding, ObservationComponent, ObservationResource, Quantity};

/// Errors returned by the `fhir` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum FhirError {
    #[error("failed to serialise FHIR JSON: {0}")]
    Serialization(serde_json::Error),
}

/// Type alias for Results that can fail with a [`FhirError`].
pub type FhirResult<T> = Result<T, FhirError>;
