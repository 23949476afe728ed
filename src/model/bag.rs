//! Parsing helpers for the schemaless JSON "bag" columns.

use std::collections::BTreeMap;

use crate::error::ValidationError;

/// Parse a JSON object of numeric values into a typed map.
pub fn parse_number_map(
    field: &str,
    value: &serde_json::Value,
) -> Result<BTreeMap<String, f64>, ValidationError> {
    let obj = value.as_object().ok_or_else(|| ValidationError::NotANumberMap {
        field: field.to_string(),
    })?;

    obj.iter()
        .map(|(key, value)| {
            value
                .as_f64()
                .map(|number| (key.clone(), number))
                .ok_or_else(|| ValidationError::NotANumberMap {
                    field: field.to_string(),
                })
        })
        .collect()
}

/// Require a JSON object without constraining its value types, for map
/// fields whose values mix shapes (booleans, nested objects).
pub fn require_object(field: &str, value: &serde_json::Value) -> Result<(), ValidationError> {
    if value.is_object() {
        return Ok(());
    }

    Err(ValidationError::NotAnObject {
        field: field.to_string(),
    })
}

/// Parse a number map and enforce the shared trait value range `0..=5`.
pub fn parse_trait_map(
    field: &str,
    value: &serde_json::Value,
) -> Result<BTreeMap<String, f64>, ValidationError> {
    let traits = parse_number_map(field, value)?;

    for (name, value) in &traits {
        if !(0.0..=5.0).contains(value) {
            return Err(ValidationError::TraitOutOfRange {
                name: name.clone(),
                value: *value,
            });
        }
    }

    Ok(traits)
}

/// Parse a progression map (`level -> point threshold`) sorted ascending by
/// threshold so lookups can walk it front to back.
pub fn parse_progression(
    value: &serde_json::Value,
) -> Result<Vec<(u32, i64)>, ValidationError> {
    let obj = value.as_object().ok_or_else(|| ValidationError::NotANumberMap {
        field: "progression".to_string(),
    })?;

    let mut levels = obj
        .iter()
        .map(|(key, value)| {
            // Level 0 is the implicit "no threshold reached" floor and must
            // not appear as a key
            let level = key
                .parse::<u32>()
                .ok()
                .filter(|&level| level > 0)
                .ok_or_else(|| ValidationError::BadProgressionLevel { key: key.clone() })?;
            let threshold = value
                .as_i64()
                .filter(|&threshold| threshold >= 0)
                .ok_or_else(|| ValidationError::BadProgressionThreshold { key: key.clone() })?;

            Ok((level, threshold))
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    levels.sort_by_key(|&(level, threshold)| (threshold, level));

    Ok(levels)
}
