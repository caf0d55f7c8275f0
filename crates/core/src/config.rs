//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into [`crate::run`]. Nothing
//! below the binary reads environment variables, which keeps the driver deterministic in tests.

use crate::constants::DEFAULT_INPUT_FILENAME;
use std::path::{Path, PathBuf};

/// Which rendering of the observation to write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Multi-line human-readable report.
    #[default]
    Report,
    /// FHIR R4 Observation JSON.
    Fhir,
}

impl OutputMode {
    pub fn from_fhir_flag(to_fhir: bool) -> Self {
        if to_fhir {
            OutputMode::Fhir
        } else {
            OutputMode::Report
        }
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    input_path: PathBuf,
    output_mode: OutputMode,
}

impl CoreConfig {
    pub fn new(input_path: PathBuf, output_mode: OutputMode) -> Self {
        Self {
            input_path,
            output_mode,
        }
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }
}

/// Resolve the input path without reading environment variables.
///
/// Precedence: an explicit `filename` argument, then a non-blank `env_value`, then
/// [`DEFAULT_INPUT_FILENAME`].
pub fn resolve_input_path(filename: Option<PathBuf>, env_value: Option<String>) -> PathBuf {
    if let Some(path) = filename {
        return path;
    }

    env_value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filename_wins() {
        let path = resolve_input_path(Some("given.json".into()), Some("env.json".into()));
        assert_eq!(path, PathBuf::from("given.json"));
    }

    #[test]
    fn env_value_overrides_default() {
        let path = resolve_input_path(None, Some(" env.json ".into()));
        assert_eq!(path, PathBuf::from("env.json"));
    }

    #[test]
    fn blank_env_value_falls_back_to_default() {
        assert_eq!(
            resolve_input_path(None, Some("   ".into())),
            PathBuf::from(DEFAULT_INPUT_FILENAME)
        );
        assert_eq!(
            resolve_input_path(None, None),
            PathBuf::from("bp_openehr.json")
        );
    }

    #[test]
    fn fhir_flag_selects_output_mode() {
        assert_eq!(OutputMode::from_fhir_flag(true), OutputMode::Fhir);
        assert_eq!(OutputMode::from_fhir_flag(false), OutputMode::Report);
        assert_eq!(OutputMode::default(), OutputMode::Report);
    }
}
