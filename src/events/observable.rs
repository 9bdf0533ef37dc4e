// ============================================================================
// spark-models - Observable Capability
// ============================================================================

use super::emitter::Emitter;
use super::subscription::Subscription;

/// Publish/subscribe capability for types that own an [`Emitter`].
///
/// Implementors only provide `emitter()`; every other method forwards to it.
/// `Model` and `Collection` both compose an emitter this way instead of
/// inheriting from one.
pub trait Observable {
    /// Payload passed to listeners.
    type Event: 'static;

    /// The emitter backing this object.
    fn emitter(&self) -> &Emitter<Self::Event>;

    /// Attach a persistent listener to `event`.
    fn subscribe(&self, event: &str, listener: impl Fn(&Self::Event) + 'static) -> Subscription {
        self.emitter().subscribe(event, listener)
    }

    /// Attach a listener that runs at most once.
    fn subscribe_once(
        &self,
        event: &str,
        listener: impl Fn(&Self::Event) + 'static,
    ) -> Subscription {
        self.emitter().subscribe_once(event, listener)
    }

    /// Dispatch `payload` to the listeners of `event`. Returns how many ran.
    fn emit(&self, event: &str, payload: &Self::Event) -> usize {
        self.emitter().emit(event, payload)
    }

    /// Detach every listener of `event`.
    fn unsubscribe_all(&self, event: &str) -> usize {
        self.emitter().unsubscribe_all(event)
    }

    /// Number of listeners attached to `event`.
    fn listener_count(&self, event: &str) -> usize {
        self.emitter().listener_count(event)
    }
}
