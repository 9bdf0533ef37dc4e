// ============================================================================
// spark-models - Core Module
// Fundamental types, errors, constants and the thread-local id context
// ============================================================================

pub mod constants;
pub mod context;
pub mod error;
pub mod types;

// Re-export commonly used items
pub use constants::*;
pub use context::{
    next_model_id, set_id_generator, with_context, with_id_generator, IdGenerator, ModelContext,
    ProcessIds, SequentialIds,
};
pub use error::ModelError;
pub use types::{is_truthy, kind_of, Attributes, ModelId};
