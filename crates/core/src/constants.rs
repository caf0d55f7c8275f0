//! Constants used throughout the core crate.

/// Input file read when no filename is given and `BP_INPUT_FILE` is unset.
pub const DEFAULT_INPUT_FILENAME: &str = "bp_openehr.json";

/// Environment variable overriding [`DEFAULT_INPUT_FILENAME`].
pub const INPUT_FILE_ENV: &str = "BP_INPUT_FILE";

/// Header line of the human-readable report.
pub const REPORT_HEADER: &str = "Blood pressure";

/// Pressure unit shown in the human-readable report.
pub const PRESSURE_UNIT: &str = "mmHg";

/// Pulse unit shown in the human-readable report.
pub const PULSE_UNIT: &str = "bpm";
