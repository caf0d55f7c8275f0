//! Presence validation for blood pressure documents.
//!
//! The loader's contract is presence-of-keys only: value types, numeric bounds and timestamp
//! formats are not checked here or anywhere else.

use serde_json::{Map, Value};

/// Top-level key holding the observation container.
pub const OBSERVATION_KEY: &str = "observation";

/// Keys that must be present inside the observation container, in reporting order.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "time",
    "systolic_mmHg",
    "diastolic_mmHg",
    "mean_arterial_pressure_mmHg",
    "pulse_per_min",
];

/// Returns the required fields absent from `container`, in [`REQUIRED_FIELDS`] order.
///
/// An empty vector means the container is complete.
pub fn missing_fields(container: &Map<String, Value>) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| !container.contains_key(*field))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn container(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn complete_container_has_nothing_missing() {
        let map = container(json!({
            "time": "2024-01-01T10:00:00Z",
            "systolic_mmHg": 120,
            "diastolic_mmHg": 80,
            "mean_arterial_pressure_mmHg": 93,
            "pulse_per_min": 72
        }));
        assert!(missing_fields(&map).is_empty());
    }

    #[test]
    fn reports_every_missing_field_in_fixed_order() {
        // Insertion order of the input must not affect reporting order.
        let map = container(json!({
            "mean_arterial_pressure_mmHg": 93,
            "systolic_mmHg": 120,
            "time": "2024-01-01T10:00:00Z"
        }));
        assert_eq!(missing_fields(&map), vec!["diastolic_mmHg", "pulse_per_min"]);
    }

    #[test]
    fn empty_container_is_missing_everything() {
        assert_eq!(missing_fields(&Map::new()), REQUIRED_FIELDS.to_vec());
    }

    #[test]
    fn null_values_count_as_present() {
        let map = container(json!({
            "time": null,
            "systolic_mmHg": null,
            "diastolic_mmHg": null,
            "mean_arterial_pressure_mmHg": null,
            "pulse_per_min": null
        }));
        assert!(missing_fields(&map).is_empty());
    }
}
