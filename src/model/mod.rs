// ============================================================================
// spark-models - Model
// An id-bearing attribute tree that announces every write
// ============================================================================
//
// A Model is a cheap handle: clones share the same id, attributes and
// listeners. Equality between handles is identity; use `Model::matches` for
// value comparison.
//
// Writes go through the path accessor and then emit, in order:
//
// 1. `change:<path>` with the written value
// 2. `change` with the path and value
//
// No attribute borrow is held while listeners run, so listeners may read or
// write the model again.
// ============================================================================

mod event;

pub use event::ModelEvent;

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::core::constants::{change_event, CHANGE, REMOVE};
use crate::core::context::next_model_id;
use crate::core::error::ModelError;
use crate::core::types::{is_truthy, kind_of, Attributes, ModelId};
use crate::events::{Emitter, Observable};
use crate::path;

// =============================================================================
// MODEL INNER
// =============================================================================

/// Shared state behind every handle of one model.
pub struct ModelInner {
    id: ModelId,
    attributes: RefCell<Attributes>,
    emitter: Emitter<ModelEvent>,
}

// =============================================================================
// MODEL
// =============================================================================

/// An observable record: a unique id plus a nested attribute mapping.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use spark_models::{Model, Observable};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let user = Model::new();
/// let seen = Rc::new(RefCell::new(Vec::new()));
///
/// let s = seen.clone();
/// user.subscribe("change:profile.name", move |event| {
///     s.borrow_mut().push(event.value().cloned());
/// });
///
/// user.set("profile.name", "Ada");
/// assert_eq!(user.get("profile.name"), Some(json!("Ada")));
/// assert_eq!(*seen.borrow(), vec![Some(json!("Ada"))]);
/// ```
#[derive(Clone)]
pub struct Model {
    inner: Rc<ModelInner>,
}

impl Model {
    /// Create a model with no attributes.
    pub fn new() -> Self {
        Self::with_attributes(Attributes::new())
    }

    /// Create a model that takes ownership of `attributes`.
    ///
    /// The model never shares structure with the caller: later changes to
    /// the caller's data cannot reach it.
    pub fn with_attributes(attributes: Attributes) -> Self {
        let id = next_model_id();
        tracing::trace!(%id, keys = attributes.len(), "model created");
        Self {
            inner: Rc::new(ModelInner {
                id,
                attributes: RefCell::new(attributes),
                emitter: Emitter::new(),
            }),
        }
    }

    /// Create a model from a JSON value. `null` yields an empty model.
    pub fn from_value(value: Value) -> Result<Self, ModelError> {
        match value {
            Value::Object(attributes) => Ok(Self::with_attributes(attributes)),
            Value::Null => Ok(Self::new()),
            other => Err(ModelError::NotAnObject {
                found: kind_of(&other),
            }),
        }
    }

    /// Parse JSON text into a model.
    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Create a model from any serializable value that maps to an object.
    pub fn from_serializable<T: Serialize + ?Sized>(value: &T) -> Result<Self, ModelError> {
        Self::from_value(serde_json::to_value(value)?)
    }

    /// The model's identifier.
    pub fn id(&self) -> &ModelId {
        &self.inner.id
    }

    // =========================================================================
    // READ
    // =========================================================================

    /// Whether `key` resolves to a truthy value.
    ///
    /// This is a truthiness check: a stored `0`, `""`, `false` or `null`
    /// reads as absent. Use [`Model::contains`] to test presence.
    pub fn has(&self, key: &str) -> bool {
        path::get(&self.inner.attributes.borrow(), key).is_some_and(is_truthy)
    }

    /// Whether `key` resolves to any value, falsy ones included.
    pub fn contains(&self, key: &str) -> bool {
        path::contains(&self.inner.attributes.borrow(), key)
    }

    /// Value at `key`, cloned out of the attribute tree.
    pub fn get(&self, key: &str) -> Option<Value> {
        path::get(&self.inner.attributes.borrow(), key).cloned()
    }

    /// Borrow the attribute tree for the duration of `f`.
    ///
    /// # Panics
    ///
    /// Panics if `f` writes to this model.
    pub fn with<R>(&self, f: impl FnOnce(&Attributes) -> R) -> R {
        f(&self.inner.attributes.borrow())
    }

    // =========================================================================
    // WRITE
    // =========================================================================

    /// Write `value` at `path`, then emit `change:<path>` and `change`.
    ///
    /// An empty path addresses nothing, and an index far past the end of
    /// its array is refused. Neither writes or emits.
    pub fn set(&self, path: &str, value: impl Into<Value>) -> &Self {
        let value = value.into();
        let written = path::set(
            &mut self.inner.attributes.borrow_mut(),
            path,
            value.clone(),
        );
        if !written {
            tracing::trace!(id = %self.inner.id, path, "ignored write");
            return self;
        }

        let event = ModelEvent::Change {
            path: path.to_string(),
            value,
        };
        self.inner.emitter.emit(&change_event(path), &event);
        self.inner.emitter.emit(CHANGE, &event);
        self
    }

    /// Write every entry of `attributes` in iteration order.
    ///
    /// Each entry emits its own `change:<key>` / `change` pair. Keys are
    /// paths, so `"a.b"` writes into a nested mapping.
    pub fn set_many(&self, attributes: Attributes) -> &Self {
        for (key, value) in attributes {
            self.set(&key, value);
        }
        self
    }

    /// Dynamically typed write.
    ///
    /// A mapping `key` is applied with [`Model::set_many`] (and `value` is
    /// ignored); a string `key` is a path for [`Model::set`]. Any other key
    /// is silently ignored and emits nothing.
    pub fn set_value(&self, key: &Value, value: Value) -> &Self {
        match key {
            Value::Object(attributes) => self.set_many(attributes.clone()),
            Value::String(path) => self.set(path, value),
            other => {
                tracing::trace!(id = %self.inner.id, kind = kind_of(other), "ignored set");
                self
            }
        }
    }

    /// Announce that this model should be removed.
    ///
    /// Only emits `remove`. The model keeps its attributes and listeners;
    /// collections holding it react by dropping it.
    pub fn remove(&self) -> &Self {
        tracing::trace!(id = %self.inner.id, "model remove requested");
        self.inner.emitter.emit(REMOVE, &ModelEvent::Remove);
        self
    }

    // =========================================================================
    // SERIALIZATION
    // =========================================================================

    /// Deep copy of the attributes.
    pub fn to_json(&self) -> Attributes {
        self.inner.attributes.borrow().clone()
    }

    /// Deep copy of the attributes as a JSON object value.
    pub fn to_value(&self) -> Value {
        Value::Object(self.to_json())
    }

    /// Deserialize the attributes into `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, ModelError> {
        Ok(serde_json::from_value(self.to_value())?)
    }

    // =========================================================================
    // IDENTITY
    // =========================================================================

    /// Whether two handles refer to the same model.
    pub fn ptr_eq(a: &Model, b: &Model) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }

    /// Value match: same id, and this model's attributes contain every
    /// attribute of `other` (partial deep match).
    pub fn matches(&self, other: &Model) -> bool {
        if Model::ptr_eq(self, other) {
            return true;
        }
        self.inner.id == other.inner.id
            && path::is_match_attributes(
                &self.inner.attributes.borrow(),
                &other.inner.attributes.borrow(),
            )
    }

    /// Weak handle that does not keep the model alive.
    pub fn downgrade(&self) -> WeakModel {
        WeakModel {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Attributes> for Model {
    fn from(attributes: Attributes) -> Self {
        Self::with_attributes(attributes)
    }
}

impl Observable for Model {
    type Event = ModelEvent;

    fn emitter(&self) -> &Emitter<ModelEvent> {
        &self.inner.emitter
    }
}

impl PartialEq for Model {
    fn eq(&self, other: &Self) -> bool {
        Model::ptr_eq(self, other)
    }
}

impl Eq for Model {}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Model");
        s.field("id", &self.inner.id);
        match self.inner.attributes.try_borrow() {
            Ok(attributes) => s.field("attributes", &*attributes),
            Err(_) => s.field("attributes", &"<borrowed>"),
        };
        s.finish()
    }
}

impl Serialize for Model {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.inner.attributes.borrow().serialize(serializer)
    }
}

// =============================================================================
// WEAK MODEL
// =============================================================================

/// Non-owning model handle, used by listeners that must not keep a model
/// alive through its own emitter.
#[derive(Clone)]
pub struct WeakModel {
    inner: Weak<ModelInner>,
}

impl WeakModel {
    /// Recover a strong handle if the model still exists.
    pub fn upgrade(&self) -> Option<Model> {
        self.inner.upgrade().map(|inner| Model { inner })
    }
}

impl fmt::Debug for WeakModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakModel")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
