//! # BP Core
//!
//! Core orchestration for the blood pressure converter.
//!
//! This crate ties the boundary crates together:
//! - `openehr` loads and validates the input observation
//! - [`report`] renders the human-readable report
//! - `fhir` translates and serialises the FHIR R4 Observation
//!
//! **No CLI concerns**: argument parsing, environment lookup and exit codes belong in `bp-cli`.

pub mod config;
pub mod constants;
pub mod error;
pub mod report;

pub use config::{resolve_input_path, CoreConfig, OutputMode};
pub use error::{BpError, BpResult};
pub use report::{render_report, summary_line};

use openehr::{BloodPressure, BloodPressureObservation};
use std::io::Write;

/// Render a validated observation in the requested output mode.
///
/// FHIR output is 2-space-indented JSON followed by a newline.
pub fn render(obs: &BloodPressureObservation, mode: OutputMode) -> BpResult<String> {
    match mode {
        OutputMode::Report => Ok(render_report(obs)),
        OutputMode::Fhir => {
            let resource = fhir::Observation::from_blood_pressure(obs);
            let mut text = fhir::Observation::render_json(&resource)?;
            text.push('\n');
            Ok(text)
        }
    }
}

/// Load the configured input, render it, and write the result to `out`.
///
/// The output is rendered in full before anything is written, so a failure never leaves partial
/// output behind.
///
/// # Errors
///
/// Returns [`BpError::Load`] for any loader failure, [`BpError::Fhir`] if FHIR serialisation fails
/// and [`BpError::Output`] if writing to `out` fails.
pub fn run<W: Write>(config: &CoreConfig, out: &mut W) -> BpResult<()> {
    tracing::debug!(
        "loading {} for {:?} output",
        config.input_path().display(),
        config.output_mode()
    );

    let obs = BloodPressure::load(config.input_path())?;
    tracing::debug!("{}", summary_line(&obs));

    let text = render(&obs, config.output_mode())?;
    out.write_all(text.as_bytes()).map_err(BpError::Output)?;
    out.flush().map_err(BpError::Output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use openehr::OpenEhrError;
    use serde_json::Value;
    use std::path::PathBuf;

    const SAMPLE: &str = r#"{"observation": {"time":"2024-01-01T10:00:00Z","systolic_mmHg":120,"diastolic_mmHg":80,"mean_arterial_pressure_mmHg":93,"pulse_per_min":72}}"#;

    fn write_input(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("bp_openehr.json");
        std::fs::write(&path, contents).expect("write input");
        path
    }

    #[test]
    fn writes_report_by_default() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = CoreConfig::new(write_input(&dir, SAMPLE), OutputMode::Report);

        let mut out = Vec::new();
        run(&config, &mut out).expect("run");

        let text = String::from_utf8(out).expect("utf8");
        assert!(text.starts_with("Blood pressure\n"));
        assert!(text
            .trim_end()
            .ends_with("BP: 120/80 mmHg, MAP: 93 mmHg, Pulse: 72 bpm @ 2024-01-01T10:00:00Z"));
    }

    #[test]
    fn writes_fhir_json_when_requested() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = CoreConfig::new(write_input(&dir, SAMPLE), OutputMode::Fhir);

        let mut out = Vec::new();
        run(&config, &mut out).expect("run");

        let text = String::from_utf8(out).expect("utf8");
        assert!(text.ends_with("}\n"));

        let parsed: Value = serde_json::from_str(&text).expect("json");
        assert_eq!(parsed["resourceType"], "Observation");
        assert_eq!(parsed["component"][0]["valueQuantity"]["value"], 120);
        assert_eq!(parsed["component"][1]["valueQuantity"]["value"], 80);
    }

    #[test]
    fn missing_file_produces_no_output() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = CoreConfig::new(dir.path().join("x.json"), OutputMode::Report);

        let mut out = Vec::new();
        let err = run(&config, &mut out).expect_err("should fail");
        assert!(matches!(err, BpError::Load(OpenEhrError::NotFound { .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn invalid_json_produces_no_output() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = CoreConfig::new(write_input(&dir, "{not json"), OutputMode::Fhir);

        let mut out = Vec::new();
        let err = run(&config, &mut out).expect_err("should fail");
        assert!(matches!(err, BpError::Load(OpenEhrError::Malformed { .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn schema_violation_message_passes_through() {
        let dir = tempfile::tempdir().expect("temp dir");
        let input = r#"{"observation": {"time":"t","systolic_mmHg":1,"mean_arterial_pressure_mmHg":3}}"#;
        let config = CoreConfig::new(write_input(&dir, input), OutputMode::Report);

        let mut out = Vec::new();
        let err = run(&config, &mut out).expect_err("should fail");
        assert_eq!(
            err.to_string(),
            "Missing field 'diastolic_mmHg, pulse_per_min' in JSON data."
        );
        assert!(out.is_empty());
    }

    #[test]
    fn render_dispatches_on_mode() {
        let obs = BloodPressure::parse(SAMPLE.as_bytes(), "sample").expect("valid");
        let report = render(&obs, OutputMode::Report).expect("report");
        let json = render(&obs, OutputMode::Fhir).expect("fhir");

        assert!(report.starts_with("Blood pressure"));
        assert!(json.starts_with("{\n  \"resourceType\": \"Observation\""));
    }
}
