//! FHIR R4 blood pressure Observation wire model and translation helpers.
//!
//! This module maps a validated openEHR [`BloodPressureObservation`] onto a fixed-shape FHIR R4
//! `Observation` resource and renders it as JSON.
//!
//! Responsibilities:
//! - Define the wire model for the output resource (camelCase keys, fixed key order)
//! - Translate the domain observation into the wire model
//! - Serialise the wire model as 2-space-indented JSON
//!
//! Notes:
//! - Only systolic and diastolic are emitted, as the two panel components (systolic first).
//!   Mean arterial pressure and pulse are required on input but have no place in this panel.
//! - Values are copied verbatim; nothing is coerced to a number.
//! - Rendered JSON is pure ASCII: non-ASCII characters are written as `\uXXXX` escapes
//!   (UTF-16 surrogate pairs outside the BMP).

use crate::codes::{category, loinc, systems, units, RESOURCE_TYPE_OBSERVATION, STATUS_FINAL};
use crate::{FhirError, FhirResult};
use openehr::{BloodPressureObservation, FieldValue};
use serde::Serialize;

// ============================================================================
// Wire types
// ============================================================================

/// FHIR R4 `Observation` resource for a blood pressure panel.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationResource {
    pub resource_type: String,
    pub status: String,
    pub category: Vec<CodeableConcept>,
    pub code: CodeableConcept,
    pub effective_date_time: FieldValue,
    pub component: Vec<ObservationComponent>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CodeableConcept {
    pub coding: Vec<Coding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Coding {
    pub system: String,
    pub code: String,
    pub display: String,
}

/// One entry of `Observation.component`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationComponent {
    pub code: CodeableConcept,
    pub value_quantity: Quantity,
}

/// FHIR `Quantity` with a UCUM unit.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Quantity {
    pub value: FieldValue,
    pub unit: String,
    pub system: String,
    pub code: String,
}

// ============================================================================
// Public Observation operations
// ============================================================================

/// FHIR Observation operations.
///
/// This is a zero-sized type used for namespacing Observation-related operations.
/// All methods are associated functions.
pub struct Observation;

impl Observation {
    /// Translate a validated blood pressure observation into a FHIR R4 Observation.
    ///
    /// `effectiveDateTime` is copied from `time`; component 0 is systolic and component 1 is
    /// diastolic.
    pub fn from_blood_pressure(obs: &BloodPressureObservation) -> ObservationResource {
        tracing::debug!("mapping blood pressure observation at {} to FHIR", obs.time);

        ObservationResource {
            resource_type: RESOURCE_TYPE_OBSERVATION.to_owned(),
            status: STATUS_FINAL.to_owned(),
            category: vec![CodeableConcept {
                coding: vec![coding(
                    systems::OBSERVATION_CATEGORY,
                    category::VITAL_SIGNS,
                    category::VITAL_SIGNS_DISPLAY,
                )],
                text: None,
            }],
            code: CodeableConcept {
                coding: vec![coding(systems::LOINC, loinc::BP_PANEL, loinc::BP_PANEL_DISPLAY)],
                text: Some(loinc::BP_PANEL_TEXT.to_owned()),
            },
            effective_date_time: obs.time.clone(),
            component: vec![
                pressure_component(loinc::SYSTOLIC, loinc::SYSTOLIC_DISPLAY, &obs.systolic_mmhg),
                pressure_component(
                    loinc::DIASTOLIC,
                    loinc::DIASTOLIC_DISPLAY,
                    &obs.diastolic_mmhg,
                ),
            ],
        }
    }

    /// Render an Observation resource as ASCII-only JSON text with 2-space indentation.
    ///
    /// # Errors
    ///
    /// Returns [`FhirError::Serialization`] if serialisation fails.
    pub fn render_json(resource: &ObservationResource) -> FhirResult<String> {
        let text = serde_json::to_string_pretty(resource).map_err(FhirError::Serialization)?;
        Ok(escape_non_ascii(&text))
    }
}

// ============================================================================
// Helper functions (internal)
// ============================================================================

fn coding(system: &str, code: &str, display: &str) -> Coding {
    Coding {
        system: system.to_owned(),
        code: code.to_owned(),
        display: display.to_owned(),
    }
}

/// Replace every non-ASCII character with a lowercase `\uXXXX` escape.
///
/// Only valid on serialised JSON, where non-ASCII characters can appear inside strings only.
fn escape_non_ascii(json: &str) -> String {
    if json.is_ascii() {
        return json.to_owned();
    }

    let mut out = String::with_capacity(json.len());
    for ch in json.chars() {
        if ch.is_ascii() {
            out.push(ch);
        } else {
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units).iter() {
                out.push_str(&format!("\\u{unit:04x}"));
            }
        }
    }
    out
}

fn pressure_component(code: &str, display: &str, value: &FieldValue) -> ObservationComponent {
    ObservationComponent {
        code: CodeableConcept {
            coding: vec![coding(systems::LOINC, code, display)],
            text: None,
        },
        value_quantity: Quantity {
            value: value.clone(),
            unit: units::MMHG.to_owned(),
            system: systems::UCUM.to_owned(),
            code: units::MMHG_CODE.to_owned(),
        },
    }
}
