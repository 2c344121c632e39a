//! In-place rewrite of `AuthenticationMode` values inside a JSON tree.

use serde_json::{Map, Value};

use crate::types::{AUTH_MODE_KEY, Direction};

/// Apply `visit` to every mapping in the tree, depth first, parent before
/// children. Returns true if any call returned true.
///
/// Every mapping is visited even after a hit, so a single pass covers all
/// occurrences.
pub fn visit_mappings_mut<F>(node: &mut Value, visit: &mut F) -> bool
where
    F: FnMut(&mut Map<String, Value>) -> bool,
{
    match node {
        Value::Object(map) => {
            let mut changed = visit(map);
            for child in map.values_mut() {
                changed |= visit_mappings_mut(child, visit);
            }
            changed
        }
        Value::Array(items) => {
            let mut changed = false;
            for item in items.iter_mut() {
                changed |= visit_mappings_mut(item, visit);
            }
            changed
        }
        _ => false,
    }
}

/// Rewrite the key in a single mapping if it holds exactly the source value.
pub fn rewrite_mapping(map: &mut Map<String, Value>, direction: Direction) -> bool {
    match map.get_mut(AUTH_MODE_KEY) {
        Some(current) if *current == direction.source() => {
            *current = Value::String(direction.target().to_string());
            true
        }
        _ => false,
    }
}

/// Rewrite every qualifying `AuthenticationMode` in the tree.
///
/// Strict equality, not a toggle: values that already hold the target, or
/// anything else, are left alone.
pub fn update_auth_mode(node: &mut Value, direction: Direction) -> bool {
    visit_mappings_mut(node, &mut |map: &mut Map<String, Value>| {
        rewrite_mapping(map, direction)
    })
}
