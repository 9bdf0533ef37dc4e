// ============================================================================
// spark-models - Observable Models and Collections for Rust
// ============================================================================
//
// A Model is an id-bearing tree of JSON attributes that emits an event for
// every write. A Collection is an ordered list of models that forwards their
// events and drops a model as soon as it asks to be removed.
//
// Everything is single-threaded and synchronous: emitting calls every
// listener in subscription order before returning.
// ============================================================================

pub mod collection;
pub mod core;
pub mod events;
mod macros;
pub mod model;
pub mod path;

// Re-export core items at crate root for ergonomic access
pub use core::constants;
pub use core::context::{
    next_model_id, set_id_generator, with_context, with_id_generator, IdGenerator, ModelContext,
    ProcessIds, SequentialIds,
};
pub use core::error::ModelError;
pub use core::types::{is_truthy, Attributes, ModelId};

// Re-export the event capability
pub use events::{Emitter, ListenerId, Observable, Subscription};

// Re-export models and collections
pub use collection::{
    Collection, CollectionEvent, CollectionOptions, Item, ModelFactory, RemovalPolicy,
};
pub use model::{Model, ModelEvent, WeakModel};

#[doc(hidden)]
pub mod __private {
    pub use serde_json;

    use serde_json::Value;

    use crate::core::types::Attributes;

    /// Used by `model!` and `collection!`, which only accept object literals.
    pub fn attributes(value: Value) -> Attributes {
        match value {
            Value::Object(attributes) => attributes,
            _ => Attributes::new(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
