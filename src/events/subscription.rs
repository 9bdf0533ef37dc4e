// ============================================================================
// spark-models - Subscription Handle
// Deterministic detachment of a single listener
// ============================================================================

use std::cell::Cell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Identifier of a listener within one emitter.
pub type ListenerId = u64;

/// Type-erased view of a listener registry, so handles need not carry the
/// emitter's payload type.
pub(crate) trait Detach {
    fn detach(&self, id: ListenerId) -> bool;
}

/// Handle to one registered listener.
///
/// Returned by every `subscribe` call. Dropping the handle leaves the
/// listener attached; call [`Subscription::unsubscribe`] to detach it.
/// The handle only holds a weak reference to its emitter.
pub struct Subscription {
    id: ListenerId,
    event: String,
    active: Rc<Cell<bool>>,
    registry: Weak<dyn Detach>,
}

impl Subscription {
    pub(crate) fn new(
        id: ListenerId,
        event: &str,
        active: Rc<Cell<bool>>,
        registry: Weak<dyn Detach>,
    ) -> Self {
        Self {
            id,
            event: event.to_string(),
            active,
            registry,
        }
    }

    /// Listener id within its emitter.
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Event name the listener is attached to.
    pub fn event(&self) -> &str {
        &self.event
    }

    /// Whether the listener can still be invoked.
    ///
    /// False once unsubscribed, once a one-shot listener has fired, after
    /// `unsubscribe_all` on its event, or when the emitter is gone.
    pub fn is_active(&self) -> bool {
        self.active.get() && self.registry.strong_count() > 0
    }

    /// Detach the listener.
    ///
    /// Returns true if it was attached until now. Calling it again is a
    /// no-op returning false.
    pub fn unsubscribe(&self) -> bool {
        let registry = self.registry.upgrade();
        let was_active = self.active.replace(false);
        match registry {
            Some(registry) if was_active => {
                registry.detach(self.id);
                true
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("event", &self.event)
            .field("active", &self.is_active())
            .finish()
    }
}
