// ============================================================================
// spark-models - Events Module
// Synchronous publish/subscribe shared by models and collections
// ============================================================================
//
// Three pieces:
//
// 1. Emitter<E>: name-keyed listener registry, synchronous dispatch
// 2. Subscription: handle that detaches exactly one listener
// 3. Observable: trait that exposes an emitter as a capability
// ============================================================================

mod emitter;
mod observable;
mod subscription;

pub use emitter::Emitter;
pub use observable::Observable;
pub use subscription::{ListenerId, Subscription};
