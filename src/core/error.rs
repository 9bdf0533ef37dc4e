// ============================================================================
// spark-models - Errors
// Failures at the serialization boundary
// ============================================================================
//
// Model and collection operations themselves never fail: missing paths read
// as `None`, unsupported `set_value` keys are ignored. Only building models
// from foreign JSON, or reading attributes back into typed structs, can go
// wrong.
// ============================================================================

use thiserror::Error;

/// Errors raised when converting between JSON and models or collections.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Malformed JSON text, or attributes that do not fit the requested type.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A model source must be a JSON object (or null for an empty model).
    #[error("model source must be an object, found {found}")]
    NotAnObject { found: &'static str },

    /// A collection source must be a JSON array (or null for an empty one).
    #[error("collection source must be an array, found {found}")]
    NotAnArray { found: &'static str },

    /// An element of a collection source is not a JSON object.
    #[error("collection item {index} must be an object, found {found}")]
    InvalidItem { index: usize, found: &'static str },
}
