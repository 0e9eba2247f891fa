//! Flat, single-level views of JSON values.

use serde_json::{Map, Value};

use crate::segment::{join_index, join_key};

/// Flatten a JSON value into a single-level map keyed by canonical path
/// strings.
///
/// Every leaf (any value that is not an object or array, including `null`)
/// reachable from `value` gets exactly one entry. Array indices render as
/// `[i]` attached with no separator; object keys are dot-joined except the
/// very first segment, which takes no leading dot. Sibling subtrees produce
/// disjoint key prefixes, so merging is purely additive.
///
/// Empty objects and empty arrays contribute zero entries, so their
/// existence is not observable in the flat view. A non-collection root
/// yields an empty map; callers are expected to bypass flattening for such
/// roots.
///
/// The input must be acyclic, which JSON values are by construction.
///
/// # Example
///
/// ```
/// use flatpath::flatten;
/// use serde_json::json;
///
/// let flat = flatten(&json!({"a": {"b": 1}, "c": [true, null]}));
/// assert_eq!(flat.get("a.b"), Some(&json!(1)));
/// assert_eq!(flat.get("c[0]"), Some(&json!(true)));
/// assert_eq!(flat.get("c[1]"), Some(&json!(null)));
/// assert_eq!(flat.len(), 3);
/// ```
pub fn flatten(value: &Value) -> Map<String, Value> {
    let mut out = Map::new();
    flatten_into(value, "", &mut out);
    out
}

fn flatten_into(value: &Value, prefix: &str, out: &mut Map<String, Value>) {
    match value {
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                let combined = join_index(prefix, i);
                if is_collection(item) {
                    flatten_into(item, &combined, out);
                } else {
                    out.insert(combined, item.clone());
                }
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                let combined = join_key(prefix, key);
                if is_collection(item) {
                    flatten_into(item, &combined, out);
                } else {
                    out.insert(combined, item.clone());
                }
            }
        }
        // A non-collection root has no meaningful flat view.
        _ => {}
    }
}

/// Check whether a value is a collection (object or array).
///
/// Non-collection roots bypass flattening at the call site.
///
/// # Example
///
/// ```
/// use flatpath::is_collection;
/// use serde_json::json;
///
/// assert!(is_collection(&json!({})));
/// assert!(is_collection(&json!([1, 2])));
/// assert!(!is_collection(&json!(null)));
/// assert!(!is_collection(&json!("text")));
/// ```
pub fn is_collection(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Count the leaves reachable from a value.
///
/// Primitives and `null` count one; collections recurse; empty collections
/// count zero. For collection roots this equals the number of entries
/// [`flatten`] produces.
///
/// # Example
///
/// ```
/// use flatpath::leaf_count;
/// use serde_json::json;
///
/// assert_eq!(leaf_count(&json!({"a": {"b": 1}, "c": [true, null]})), 3);
/// assert_eq!(leaf_count(&json!({"a": {}, "b": []})), 0);
/// assert_eq!(leaf_count(&json!(42)), 1);
/// ```
pub fn leaf_count(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.iter().map(leaf_count).sum(),
        Value::Object(map) => map.values().map(leaf_count).sum(),
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_nested_object() {
        let flat = flatten(&json!({"a": {"b": 1}}));
        assert_eq!(flat.len(), 1);
        assert_eq!(flat.get("a.b"), Some(&json!(1)));
    }

    #[test]
    fn test_flatten_array_under_key() {
        let flat = flatten(&json!({"a": [1, 2]}));
        assert_eq!(flat.len(), 2);
        assert_eq!(flat.get("a[0]"), Some(&json!(1)));
        assert_eq!(flat.get("a[1]"), Some(&json!(2)));
    }

    #[test]
    fn test_flatten_array_root() {
        let flat = flatten(&json!([{"x": 1}, {"x": 2}]));
        assert_eq!(flat.len(), 2);
        assert_eq!(flat.get("[0].x"), Some(&json!(1)));
        assert_eq!(flat.get("[1].x"), Some(&json!(2)));
    }

    #[test]
    fn test_flatten_nested_arrays() {
        let flat = flatten(&json!([[1, 2], [3]]));
        assert_eq!(flat.len(), 3);
        assert_eq!(flat.get("[0][0]"), Some(&json!(1)));
        assert_eq!(flat.get("[0][1]"), Some(&json!(2)));
        assert_eq!(flat.get("[1][0]"), Some(&json!(3)));
    }

    #[test]
    fn test_flatten_deep_mix() {
        let flat = flatten(&json!({
            "users": [
                {"name": "Alice", "tags": ["admin"]},
                {"name": "Bob", "tags": []}
            ],
            "total": 2
        }));
        assert_eq!(flat.get("users[0].name"), Some(&json!("Alice")));
        assert_eq!(flat.get("users[0].tags[0]"), Some(&json!("admin")));
        assert_eq!(flat.get("users[1].name"), Some(&json!("Bob")));
        assert_eq!(flat.get("total"), Some(&json!(2)));
        assert_eq!(flat.len(), 4);
    }

    #[test]
    fn test_flatten_keeps_null_leaves() {
        let flat = flatten(&json!({"a": null, "b": [null]}));
        assert_eq!(flat.get("a"), Some(&Value::Null));
        assert_eq!(flat.get("b[0]"), Some(&Value::Null));
        assert_eq!(flat.len(), 2);
    }

    // Existing behavior: empty collections leave no trace in the flat view,
    // so `{"a": {}}` and `{}` flatten identically.
    #[test]
    fn test_flatten_empty_collections_contribute_nothing() {
        assert!(flatten(&json!({})).is_empty());
        assert!(flatten(&json!([])).is_empty());
        assert!(flatten(&json!({"a": {}, "b": []})).is_empty());
        assert_eq!(
            flatten(&json!({"a": {}})),
            flatten(&json!({}))
        );
    }

    #[test]
    fn test_flatten_non_collection_root() {
        assert!(flatten(&json!(null)).is_empty());
        assert!(flatten(&json!(42)).is_empty());
        assert!(flatten(&json!("text")).is_empty());
        assert!(flatten(&json!(true)).is_empty());
    }

    #[test]
    fn test_flatten_preserves_key_order() {
        let flat = flatten(&json!({"z": 1, "a": {"m": 2, "b": 3}, "k": [4]}));
        let keys: Vec<&String> = flat.keys().collect();
        assert_eq!(keys, vec!["z", "a.m", "a.b", "k[0]"]);
    }

    #[test]
    fn test_flatten_entry_count_matches_leaf_count() {
        let value = json!({
            "a": {"b": 1, "c": [2, 3, {"d": null}]},
            "e": [],
            "f": {"g": {}}
        });
        assert_eq!(flatten(&value).len(), leaf_count(&value));
    }

    #[test]
    fn test_flatten_idempotent() {
        let value = json!({"a": [1, {"b": 2}], "c": null});
        assert_eq!(flatten(&value), flatten(&value));
    }

    #[test]
    fn test_is_collection() {
        assert!(is_collection(&json!({})));
        assert!(is_collection(&json!({"a": 1})));
        assert!(is_collection(&json!([])));

        assert!(!is_collection(&json!(null)));
        assert!(!is_collection(&json!(false)));
        assert!(!is_collection(&json!(1.5)));
        assert!(!is_collection(&json!("s")));
    }

    #[test]
    fn test_leaf_count() {
        assert_eq!(leaf_count(&json!(null)), 1);
        assert_eq!(leaf_count(&json!(42)), 1);
        assert_eq!(leaf_count(&json!({})), 0);
        assert_eq!(leaf_count(&json!([])), 0);
        assert_eq!(leaf_count(&json!({"a": [1, 2], "b": {"c": 3}})), 3);
        assert_eq!(leaf_count(&json!([[], {}, [null]])), 1);
    }
}
