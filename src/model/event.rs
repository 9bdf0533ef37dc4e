// ============================================================================
// spark-models - Model Events
// ============================================================================

use serde_json::Value;

/// Payload delivered to model listeners.
///
/// | Event name      | Payload                      |
/// |-----------------|------------------------------|
/// | `change:<path>` | `Change { path, value }`     |
/// | `change`        | `Change { path, value }`     |
/// | `remove`        | `Remove`                     |
#[derive(Debug, Clone, PartialEq)]
pub enum ModelEvent {
    /// An attribute was written at `path`.
    Change { path: String, value: Value },
    /// The model asked to be removed from its collections.
    Remove,
}

impl ModelEvent {
    /// Path written, for change events.
    pub fn path(&self) -> Option<&str> {
        match self {
            ModelEvent::Change { path, .. } => Some(path),
            ModelEvent::Remove => None,
        }
    }

    /// New value, for change events.
    pub fn value(&self) -> Option<&Value> {
        match self {
            ModelEvent::Change { value, .. } => Some(value),
            ModelEvent::Remove => None,
        }
    }
}
