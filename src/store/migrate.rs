use serde_json::{json, Map, Value};

use super::repository::StoreError;
use super::state::PlannerState;

/// Version written by this build.
pub const STATE_VERSION: u32 = 2;

/// Upgrade a persisted state document written at `from_version` to the current shape.
pub fn migrate(mut raw: Value, from_version: u32) -> Result<PlannerState, StoreError> {
    if from_version > STATE_VERSION {
        return Err(StoreError::UnsupportedVersion {
            found: from_version,
            supported: STATE_VERSION,
        });
    }

    if !raw.is_object() {
        raw = Value::Object(Map::new());
    }

    if from_version < 2 {
        upgrade_from_v1(&mut raw);
    }

    Ok(serde_json::from_value(raw)?)
}

// v1 predates search, region, budget, flight limit, favorites, compare and child travelers.
fn upgrade_from_v1(raw: &mut Value) {
    let Some(root) = raw.as_object_mut() else {
        return;
    };

    let preferences = root
        .entry("preferences")
        .or_insert_with(|| Value::Object(Map::new()));
    if !preferences.is_object() {
        *preferences = Value::Object(Map::new());
    }
    if let Some(preferences) = preferences.as_object_mut() {
        for (key, default) in [
            ("searchQuery", json!("")),
            ("regionPreference", json!("Any")),
            ("budgetSensitivity", json!("moderate")),
            ("maxFlightTime", json!(0)),
            ("favorites", json!([])),
            ("compareList", json!([])),
        ] {
            let slot = preferences.entry(key).or_insert(Value::Null);
            if slot.is_null() {
                *slot = default;
            }
        }
    }

    if let Some(travelers) = root.get_mut("travelers").and_then(Value::as_array_mut) {
        for traveler in travelers.iter_mut().filter_map(Value::as_object_mut) {
            let slot = traveler.entry("isChild").or_insert(Value::Null);
            if slot.is_null() {
                *slot = Value::Bool(false);
            }
        }
    }
}
