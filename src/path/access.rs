// ============================================================================
// spark-models - Path Access
// Read and write values at a path inside an attribute tree
// ============================================================================

use serde_json::Value;

use super::parse::{parse_path, PathStep};
use crate::core::constants::MAX_ARRAY_PADDING;
use crate::core::types::Attributes;

// =============================================================================
// READ
// =============================================================================

/// Resolve `path` inside `root`.
///
/// Returns `None` when a segment is missing or the value at an intermediate
/// segment cannot be traversed (scalars, non-numeric keys on arrays).
/// The empty path resolves to nothing.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use spark_models::path;
///
/// let root = json!({"a": {"b": [10, 20]}});
/// let root = root.as_object().unwrap();
///
/// assert_eq!(path::get(root, "a.b[1]"), Some(&json!(20)));
/// assert_eq!(path::get(root, "a.b.0"), Some(&json!(10)));
/// assert_eq!(path::get(root, "a.c.d"), None);
/// ```
pub fn get<'a>(root: &'a Attributes, path: &str) -> Option<&'a Value> {
    get_steps(root, &parse_path(path))
}

/// [`get`] over already-parsed steps.
pub fn get_steps<'a>(root: &'a Attributes, steps: &[PathStep]) -> Option<&'a Value> {
    let (first, rest) = steps.split_first()?;
    let mut node = root.get(&first.to_key())?;
    for step in rest {
        node = child(node, step)?;
    }
    Some(node)
}

/// Whether `path` resolves to any value, `null` included.
pub fn contains(root: &Attributes, path: &str) -> bool {
    get(root, path).is_some()
}

fn child<'a>(node: &'a Value, step: &PathStep) -> Option<&'a Value> {
    match node {
        Value::Object(map) => map.get(&step.to_key()),
        Value::Array(items) => items.get(step.as_index()?),
        _ => None,
    }
}

// =============================================================================
// WRITE
// =============================================================================

/// Assign `value` at `path` inside `root`, creating intermediate nodes.
///
/// A missing intermediate becomes an array when the following step is a
/// bracket index and a mapping otherwise. Intermediates that cannot hold the
/// following step (scalars, or arrays addressed by a non-numeric key) are
/// overwritten. Writing past the end of an array pads it with `null`.
///
/// Returns false, leaving `root` untouched, when the path is empty or when
/// an index lies more than [`MAX_ARRAY_PADDING`] slots past the end of its
/// array.
///
/// # Example
///
/// ```
/// use serde_json::{json, Map};
/// use spark_models::path;
///
/// let mut root = Map::new();
/// path::set(&mut root, "a.list[2]", json!("x"));
/// assert_eq!(json!(root), json!({"a": {"list": [null, null, "x"]}}));
///
/// assert!(!path::set(&mut root, "a.list[4000000000]", json!("y")));
/// ```
pub fn set(root: &mut Attributes, path: &str, value: Value) -> bool {
    set_steps(root, &parse_path(path), value)
}

/// [`set`] over already-parsed steps.
pub fn set_steps(root: &mut Attributes, steps: &[PathStep], value: Value) -> bool {
    let Some((first, rest)) = steps.split_first() else {
        return false;
    };
    if !within_padding(root, first, rest) {
        return false;
    }

    let mut node = root.entry(first.to_key()).or_insert(Value::Null);
    for step in rest {
        match slot(node, step) {
            Some(next) => node = next,
            None => return false,
        }
    }
    *node = value;
    true
}

/// Whether every array the write would touch stays within the padding cap.
///
/// Walks the existing tree read-only, so a refused write changes nothing.
fn within_padding(root: &Attributes, first: &PathStep, rest: &[PathStep]) -> bool {
    let mut node = root.get(&first.to_key());
    for step in rest {
        let Some(index) = step.as_index() else {
            node = node.and_then(|n| child(n, step));
            continue;
        };
        let len = match node {
            Some(Value::Array(items)) => Some(items.len()),
            Some(Value::Object(_)) => None,
            _ => matches!(step, PathStep::Index(_)).then_some(0),
        };
        if len.is_some_and(|len| index.saturating_sub(len) > MAX_ARRAY_PADDING) {
            return false;
        }
        node = node.and_then(|n| child(n, step));
    }
    true
}

/// The child slot `step` addresses in `node`, reshaping `node` if it cannot
/// hold that step.
fn slot<'a>(node: &'a mut Value, step: &PathStep) -> Option<&'a mut Value> {
    let index = step.as_index();
    let fits = match node {
        Value::Object(_) => true,
        Value::Array(_) => index.is_some(),
        _ => false,
    };
    if !fits {
        *node = match step {
            PathStep::Index(_) => Value::Array(Vec::new()),
            PathStep::Key(_) => Value::Object(Attributes::new()),
        };
    }

    match node {
        Value::Array(items) => {
            let i = index.unwrap_or(items.len());
            let end = i.checked_add(1)?;
            if end > items.len() {
                items.resize(end, Value::Null);
            }
            items.get_mut(i)
        }
        Value::Object(map) => Some(map.entry(step.to_key()).or_insert(Value::Null)),
        other => Some(other),
    }
}

// =============================================================================
// TESTS
// =============================================================================
