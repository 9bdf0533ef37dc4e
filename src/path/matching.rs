// ============================================================================
// spark-models - Value Matching
// Partial deep comparison used for value-based removal
// ============================================================================

use serde_json::Value;

use crate::core::types::Attributes;

/// Whether `object` matches every property of `source`.
///
/// Mappings match partially: each key of `source` must exist in `object`
/// with a matching value, while extra keys in `object` are ignored. Arrays
/// must have the same length and match element by element. Numbers compare
/// by numeric value, so `1` matches `1.0`. Everything else uses equality.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use spark_models::path::is_match;
///
/// assert!(is_match(&json!({"a": 1, "b": {"c": 2, "d": 3}}), &json!({"b": {"c": 2}})));
/// assert!(!is_match(&json!({"a": 1}), &json!({"a": 2})));
/// ```
pub fn is_match(object: &Value, source: &Value) -> bool {
    match (object, source) {
        (Value::Object(o), Value::Object(s)) => is_match_attributes(o, s),
        (Value::Array(o), Value::Array(s)) => {
            o.len() == s.len() && o.iter().zip(s).all(|(a, b)| is_match(a, b))
        }
        (Value::Number(a), Value::Number(b)) => {
            if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
                a == b
            } else if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
                a == b
            } else {
                a.as_f64() == b.as_f64()
            }
        }
        (a, b) => a == b,
    }
}

/// [`is_match`] for two attribute mappings.
pub fn is_match_attributes(object: &Attributes, source: &Attributes) -> bool {
    source
        .iter()
        .all(|(key, value)| object.get(key).is_some_and(|o| is_match(o, value)))
}
