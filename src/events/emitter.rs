// ============================================================================
// spark-models - Event Emitter
// Synchronous, name-keyed publish/subscribe registry
// ============================================================================
//
// Listeners are kept in subscription order. `emit` snapshots the listeners
// registered for an event, releases the registry borrow, then calls them one
// by one, so a listener may subscribe, unsubscribe or emit again without
// tripping the RefCell. A listener detached mid-dispatch is skipped for the
// rest of that dispatch.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use super::subscription::{Detach, ListenerId, Subscription};

/// Listener callback, shared so a dispatch can outlive its registry entry.
type Callback<E> = Rc<dyn Fn(&E)>;

struct Listener<E> {
    id: ListenerId,
    event: String,
    once: bool,
    active: Rc<Cell<bool>>,
    callback: Callback<E>,
}

/// Listener storage behind an [`Emitter`].
pub(crate) struct Registry<E> {
    next_id: ListenerId,
    listeners: Vec<Listener<E>>,
}

impl<E> Registry<E> {
    fn new() -> Self {
        Self {
            next_id: 1,
            listeners: Vec::new(),
        }
    }

    /// Drop every listener matching `pred`, marking each one inactive.
    fn detach_where(&mut self, mut pred: impl FnMut(&Listener<E>) -> bool) -> usize {
        let before = self.listeners.len();
        self.listeners.retain(|l| {
            if pred(l) {
                l.active.set(false);
                false
            } else {
                true
            }
        });
        before - self.listeners.len()
    }
}

impl<E> Detach for RefCell<Registry<E>> {
    fn detach(&self, id: ListenerId) -> bool {
        self.borrow_mut().detach_where(|l| l.id == id) > 0
    }
}

// =============================================================================
// EMITTER
// =============================================================================

/// A synchronous event emitter carrying payloads of type `E`.
///
/// # Example
///
/// ```
/// use spark_models::events::Emitter;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let emitter: Emitter<i32> = Emitter::new();
/// let total = Rc::new(Cell::new(0));
///
/// let t = total.clone();
/// emitter.subscribe("add", move |n| t.set(t.get() + n));
///
/// emitter.emit("add", &2);
/// emitter.emit("add", &3);
/// emitter.emit("other", &100);
/// assert_eq!(total.get(), 5);
/// ```
pub struct Emitter<E> {
    registry: Rc<RefCell<Registry<E>>>,
}

impl<E: 'static> Emitter<E> {
    /// Create an emitter with no listeners.
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry::new())),
        }
    }

    /// Register a persistent listener for `event`.
    pub fn subscribe(&self, event: &str, listener: impl Fn(&E) + 'static) -> Subscription {
        self.register(event, false, Rc::new(listener))
    }

    /// Register a listener that runs at most once.
    ///
    /// It is detached before it is invoked, so a re-entrant emit of the same
    /// event from inside the listener does not call it again.
    pub fn subscribe_once(&self, event: &str, listener: impl Fn(&E) + 'static) -> Subscription {
        self.register(event, true, Rc::new(listener))
    }

    fn register(&self, event: &str, once: bool, callback: Callback<E>) -> Subscription {
        let active = Rc::new(Cell::new(true));
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.listeners.push(Listener {
                id,
                event: event.to_string(),
                once,
                active: active.clone(),
                callback,
            });
            id
        };

        let weak: Weak<RefCell<Registry<E>>> = Rc::downgrade(&self.registry);
        let weak: Weak<dyn Detach> = weak;
        Subscription::new(id, event, active, weak)
    }

    /// Invoke every listener of `event` with `payload`, in subscription order.
    ///
    /// Returns the number of listeners actually called.
    pub fn emit(&self, event: &str, payload: &E) -> usize {
        let batch: Vec<(bool, Rc<Cell<bool>>, Callback<E>)> = {
            let mut registry = self.registry.borrow_mut();
            let batch = registry
                .listeners
                .iter()
                .filter(|l| l.event == event)
                .map(|l| (l.once, l.active.clone(), l.callback.clone()))
                .collect();
            // One-shot listeners leave the registry now; their flag stays set
            // until this dispatch reaches them.
            registry.listeners.retain(|l| !(l.once && l.event == event));
            batch
        };

        tracing::trace!(event, listeners = batch.len(), "emit");

        let mut invoked = 0;
        for (once, active, callback) in batch {
            if !active.get() {
                continue;
            }
            if once {
                active.set(false);
            }
            callback(payload);
            invoked += 1;
        }
        invoked
    }

    /// Detach every listener of `event`. Returns how many were removed.
    pub fn unsubscribe_all(&self, event: &str) -> usize {
        let removed = self.registry.borrow_mut().detach_where(|l| l.event == event);
        if removed > 0 {
            tracing::trace!(event, removed, "unsubscribe all");
        }
        removed
    }

    /// Detach every listener of every event.
    pub fn clear(&self) -> usize {
        self.registry.borrow_mut().detach_where(|_| true)
    }

    /// Number of listeners currently attached to `event`.
    pub fn listener_count(&self, event: &str) -> usize {
        self.registry
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.event == event)
            .count()
    }

    /// Names of events with at least one listener, in first-subscription order.
    pub fn event_names(&self) -> Vec<String> {
        let registry = self.registry.borrow();
        let mut names: Vec<String> = Vec::new();
        for l in &registry.listeners {
            if !names.iter().any(|n| n == &l.event) {
                names.push(l.event.clone());
            }
        }
        names
    }
}

impl<E: 'static> Default for Emitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Emitter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners = self
            .registry
            .try_borrow()
            .map(|r| r.listeners.len())
            .unwrap_or_default();
        f.debug_struct("Emitter")
            .field("listeners", &listeners)
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
