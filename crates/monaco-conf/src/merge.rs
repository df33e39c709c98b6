//! Recursive key-wise merge for nested editor option maps

use serde_json::{Map, Value};

/// Deep-merge `overlay` into `base`.
///
/// Keys present on both sides with object values merge recursively with
/// `overlay` taking precedence. Every other collision, including a type
/// mismatch between the layers, replaces the base value wholesale. Nothing
/// is validated: replacing a nested object with a scalar is a supported way
/// to wipe it out.
pub fn deep_merge(base: &mut Map<String, Value>, overlay: &Map<String, Value>) {
    for (key, overlay_value) in overlay {
        if let Some(base_value) = base.get_mut(key) {
            deep_merge_value(base_value, overlay_value);
        } else {
            base.insert(key.clone(), overlay_value.clone());
        }
    }
}

/// Deep-merge into a fresh map, leaving `base` untouched.
pub fn merged(base: &Map<String, Value>, overlay: &Map<String, Value>) -> Map<String, Value> {
    let mut result = base.clone();
    deep_merge(&mut result, overlay);
    result
}

fn deep_merge_value(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            deep_merge(base_map, overlay_map);
        }
        (base, overlay) => {
            *base = overlay.clone();
        }
    }
}
