//! Category summarizer: buckets an entity collection by field value
//! into labeled, colored counts for chart rendering.
//!
//! Pure tallying. Works over any serializable entity collection so the
//! same code serves patients, rooms, or alert rows.

use crate::utils::config::{DEFAULT_CATEGORY_COLOR, STATUS_COLORS};
use crate::utils::error::ChartError;
use log::warn;
use serde::{Deserialize, Serialize};

/// One chart bucket: distinct field value, occurrence count, display color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub name: String,
    pub value: u64,
    pub color: String,
}

/// Group entities by a field and count occurrences per distinct value
///
/// **Public** - main entry point for chart data generation
///
/// Buckets are ordered by first-seen value for determinism. Entities
/// whose field is absent or not a scalar are skipped with a warning,
/// mirroring how partial records behave elsewhere in the engine.
///
/// # Errors
/// * `ChartError::EmptyField` - empty field name
/// * `ChartError::SerializationFailed` - entity cannot be serialized
pub fn generate_chart_data<T: Serialize>(
    entities: &[T],
    field: &str,
) -> Result<Vec<ChartSlice>, ChartError> {
    if field.trim().is_empty() {
        return Err(ChartError::EmptyField);
    }

    let mut slices: Vec<ChartSlice> = Vec::new();

    for (index, entity) in entities.iter().enumerate() {
        let value = serde_json::to_value(entity)?;

        let Some(raw) = value.get(field) else {
            warn!("Entity {} has no field '{}', skipping", index, field);
            continue;
        };

        let Some(name) = scalar_to_string(raw) else {
            warn!(
                "Entity {} field '{}' is not a scalar, skipping",
                index, field
            );
            continue;
        };

        match slices.iter_mut().find(|slice| slice.name == name) {
            Some(slice) => slice.value += 1,
            None => {
                let color = color_for(&name).to_string();
                slices.push(ChartSlice {
                    name,
                    value: 1,
                    color,
                });
            }
        }
    }

    Ok(slices)
}

/// Render a scalar JSON value as a bucket name
///
/// **Private** - internal helper for generate_chart_data
fn scalar_to_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Display color for a category value, from the static status palette
///
/// **Public** - the renderer relies on these exact hex values
pub fn color_for(name: &str) -> &'static str {
    STATUS_COLORS
        .iter()
        .find(|(status, _)| *status == name)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_CATEGORY_COLOR)
}
