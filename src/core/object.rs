//! Structural row comparison and dotted-path field extraction.
//!
//! Table rows are dynamic [`serde_json::Value`] records. Selection membership
//! is decided by deep structural equality, never by object identity, so a row
//! refetched from the server is still recognized as the same logical entity.

use serde_json::Value;

/// Deep structural equality between two row values.
///
/// Arrays are compared element-wise and order-sensitively, objects by key set
/// and values, primitives by value. `null` compares equal only to `null`.
pub fn is_same_object(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| is_same_object(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, v)| ys.get(k).is_some_and(|w| is_same_object(v, w)))
        }
        _ => false,
    }
}

/// Walk a row along a dotted path (e.g. `"applicant.name"`).
///
/// Returns `None` when any intermediate segment is missing or not an object,
/// so renamed/missing fields degrade to blank cells instead of panicking.
pub fn get_own_value_by_key<'v>(row: &'v Value, dotted_path: &str) -> Option<&'v Value> {
    dotted_path
        .split('.')
        .try_fold(row, |current, segment| current.as_object()?.get(segment))
}

/// Order-preserving de-duplication.
pub fn uniq<T: PartialEq>(values: Vec<T>) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(values.len());
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_same_object_reflexive_and_symmetric() {
        let a = json!({"id": 1, "applicant": {"name": "Kim", "tags": ["a", "b"]}});
        let b = json!({"applicant": {"tags": ["a", "b"], "name": "Kim"}, "id": 1});
        assert!(is_same_object(&a, &a));
        assert!(is_same_object(&a, &b));
        assert!(is_same_object(&b, &a));
    }

    #[test]
    fn test_is_same_object_detects_structural_mismatch() {
        let a = json!({"id": 1, "result": {"status": "NOT_RATED"}});
        assert!(!is_same_object(&a, &json!({"id": 1})));
        assert!(!is_same_object(
            &a,
            &json!({"id": 1, "result": {"status": "SCREENING_PASSED"}})
        ));
        // Arrays are order-sensitive.
        assert!(!is_same_object(&json!([1, 2]), &json!([2, 1])));
        assert!(!is_same_object(&json!([1, 2]), &json!([1, 2, 3])));
    }

    #[test]
    fn test_is_same_object_null_leaves() {
        assert!(is_same_object(&Value::Null, &Value::Null));
        assert!(!is_same_object(&Value::Null, &json!(0)));
        assert!(!is_same_object(&json!({"a": null}), &json!({"a": 0})));
        assert!(is_same_object(&json!({"a": null}), &json!({"a": null})));
    }

    #[test]
    fn test_get_own_value_by_key_walks_nested_paths() {
        let row = json!({"applicant": {"name": "Kim", "phone": {"number": "010"}}});
        assert_eq!(
            get_own_value_by_key(&row, "applicant.name"),
            Some(&json!("Kim"))
        );
        assert_eq!(
            get_own_value_by_key(&row, "applicant.phone.number"),
            Some(&json!("010"))
        );
    }

    #[test]
    fn test_get_own_value_by_key_missing_segment_is_none() {
        let row = json!({"applicant": {"name": "Kim"}});
        assert_eq!(get_own_value_by_key(&row, "applicant.email"), None);
        assert_eq!(get_own_value_by_key(&row, "team.name"), None);
        // Intermediate segment that is not an object.
        assert_eq!(get_own_value_by_key(&row, "applicant.name.first"), None);
    }

    #[test]
    fn test_uniq_preserves_first_occurrence_order() {
        assert_eq!(uniq(vec!["b", "a", "b", "c", "a"]), vec!["b", "a", "c"]);
        assert_eq!(uniq(Vec::<i32>::new()), Vec::<i32>::new());
    }
}
