//! Tree compaction
//!
//! A single recursive pass over the assembled document: mappings drop any
//! key whose compacted value is null or an empty collection, sequences
//! drop null/empty elements, scalars pass through unchanged. Runs once,
//! immediately before validation.

use crate::MAX_DEPTH;
use serde_json::{Map, Value};

/// Compact a JSON tree, removing null and empty values depth-first.
pub fn compact(value: &Value) -> Value {
    prune(value, 0).unwrap_or(Value::Null)
}

fn prune(value: &Value, depth: usize) -> Option<Value> {
    if depth >= MAX_DEPTH {
        return None;
    }
    match value {
        Value::Null => None,
        Value::Object(map) => {
            let pruned: Map<String, Value> = map
                .iter()
                .filter_map(|(key, value)| {
                    prune(value, depth + 1).map(|value| (key.clone(), value))
                })
                .collect();
            if pruned.is_empty() {
                None
            } else {
                Some(Value::Object(pruned))
            }
        }
        Value::Array(items) => {
            let pruned: Vec<Value> = items
                .iter()
                .filter_map(|item| prune(item, depth + 1))
                .collect();
            if pruned.is_empty() {
                None
            } else {
                Some(Value::Array(pruned))
            }
        }
        scalar => Some(scalar.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nulls_and_empty_collections_are_dropped() {
        let value = json!({"a": null, "b": [], "c": {"d": 1}});
        assert_eq!(compact(&value), json!({"c": {"d": 1}}));
    }

    #[test]
    fn test_removal_cascades_upward() {
        let value = json!({"outer": {"inner": {"empty": {}, "gone": null}}});
        assert_eq!(compact(&value), Value::Null);
    }

    #[test]
    fn test_scalars_pass_through() {
        let value = json!({"kept": false, "zero": 0, "blank": ""});
        assert_eq!(compact(&value), json!({"kept": false, "zero": 0, "blank": ""}));
    }

    #[test]
    fn test_sequences_drop_null_and_empty_elements() {
        let value = json!([null, {}, [], 1, "x", {"a": 2}]);
        assert_eq!(compact(&value), json!([1, "x", {"a": 2}]));
    }
}
