//! Human-readable blood pressure report.
//!
//! Values are interpolated using their natural text form (see [`openehr::FieldValue`]); no
//! rounding or precision formatting is applied.

use crate::constants::{PRESSURE_UNIT, PULSE_UNIT, REPORT_HEADER};
use openehr::BloodPressureObservation;

/// Render the full report: header, one labelled line per field, then the summary line.
///
/// Every line, including the last, ends with a newline.
pub fn render_report(obs: &BloodPressureObservation) -> String {
    let lines = [
        REPORT_HEADER.to_owned(),
        format!("Time: {}", obs.time),
        format!("Sys: {} {PRESSURE_UNIT}", obs.systolic_mmhg),
        format!("Dia: {} {PRESSURE_UNIT}", obs.diastolic_mmhg),
        format!("MAP: {} {PRESSURE_UNIT}", obs.mean_arterial_pressure_mmhg),
        format!("Pulse: {} {PULSE_UNIT}", obs.pulse_per_min),
        summary_line(obs),
    ];

    let mut out = String::new();
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Single-line summary for logs, without a trailing newline.
///
/// `BP: {sys}/{dia} mmHg, MAP: {map} mmHg, Pulse: {pulse} bpm @ {time}`
pub fn summary_line(obs: &BloodPressureObservation) -> String {
    format!(
        "BP: {}/{} {PRESSURE_UNIT}, MAP: {} {PRESSURE_UNIT}, Pulse: {} {PULSE_UNIT} @ {}",
        obs.systolic_mmhg,
        obs.diastolic_mmhg,
        obs.mean_arterial_pressure_mmhg,
        obs.pulse_per_min,
        obs.time
    )
}
