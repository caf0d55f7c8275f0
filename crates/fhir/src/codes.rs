//! Fixed coding systems and codes used by the blood pressure Observation.

/// Coding system URLs.
pub mod systems {
    pub const LOINC: &str = "http://loinc.org";
    pub const OBSERVATION_CATEGORY: &str =
        "http://terminology.hl7.org/CodeSystem/observation-category";
    pub const UCUM: &str = "http://unitsofmeasure.org";
}

/// LOINC codes for the blood pressure panel and its components.
pub mod loinc {
    /// Blood pressure panel - LOINC 85354-9
    pub const BP_PANEL: &str = "85354-9";
    pub const BP_PANEL_DISPLAY: &str = "Blood pressure panel with all children optional";
    pub const BP_PANEL_TEXT: &str = "Blood pressure";

    /// Systolic blood pressure - LOINC 8480-6
    pub const SYSTOLIC: &str = "8480-6";
    pub const SYSTOLIC_DISPLAY: &str = "Systolic blood pressure";

    /// Diastolic blood pressure - LOINC 8462-4
    pub const DIASTOLIC: &str = "8462-4";
    pub const DIASTOLIC_DISPLAY: &str = "Diastolic blood pressure";
}

/// Observation category codes.
pub mod category {
    pub const VITAL_SIGNS: &str = "vital-signs";
    pub const VITAL_SIGNS_DISPLAY: &str = "Vital Signs";
}

/// UCUM pressure unit.
pub mod units {
    pub const MMHG: &str = "mmHg";
    pub const MMHG_CODE: &str = "mm[Hg]";
}

pub const RESOURCE_TYPE_OBSERVATION: &str = "Observation";
pub const STATUS_FINAL: &str = "final";
