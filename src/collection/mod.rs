// ============================================================================
// spark-models - Collection
// Ordered, observable container of models with cascading events
// ============================================================================
//
// Wiring is fixed when the collection is built: the collection subscribes to
// its own `push` event, and every pushed model gets a binding of two
// listeners:
//
// 1. `change` on the model -> `change(Some(model))` on the collection
// 2. `remove` on the model (one-shot) -> `collection.remove(model)`
//
// `remove` disposes the bindings of every element it takes out. Dropping the
// last handle of a collection disposes whatever bindings remain.
// ============================================================================

mod event;
mod options;

pub use event::{CollectionEvent, Item};
pub use options::{CollectionOptions, ModelFactory, RemovalPolicy};

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::core::constants::{CHANGE, PUSH, REMOVE};
use crate::core::error::ModelError;
use crate::core::types::{kind_of, Attributes};
use crate::events::{Emitter, Observable, Subscription};
use crate::model::{Model, ModelEvent};

// =============================================================================
// BINDING
// =============================================================================

/// The two listeners a collection holds on one of its elements.
struct Binding {
    model: Model,
    change: Subscription,
    remove: Subscription,
}

impl Binding {
    fn dispose(&self) {
        self.change.unsubscribe();
        self.remove.unsubscribe();
    }
}

// =============================================================================
// COLLECTION INNER
// =============================================================================

struct CollectionInner {
    models: RefCell<Vec<Model>>,
    length: Cell<usize>,
    emitter: Emitter<CollectionEvent>,
    bindings: RefCell<Vec<Binding>>,
    options: CollectionOptions,
}

impl Drop for CollectionInner {
    fn drop(&mut self) {
        let bindings = std::mem::take(self.bindings.get_mut());
        if !bindings.is_empty() {
            tracing::debug!(bindings = bindings.len(), "collection dropped, detaching");
        }
        for binding in &bindings {
            binding.dispose();
        }
    }
}

// =============================================================================
// COLLECTION
// =============================================================================

/// An ordered, observable sequence of models.
///
/// Cloning a `Collection` yields another handle to the same collection.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use spark_models::{Collection, CollectionEvent, Model, Observable};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let todos = Collection::new();
/// let changes = Rc::new(Cell::new(0));
///
/// let c = changes.clone();
/// todos.subscribe("change", move |event| {
///     if let CollectionEvent::Change(Some(_)) = event {
///         c.set(c.get() + 1);
///     }
/// });
///
/// let todo = Model::new();
/// todos.push(&todo);
/// todo.set("done", true);
/// assert_eq!(changes.get(), 1);
///
/// todo.remove();
/// assert!(todos.is_empty());
/// ```
#[derive(Clone)]
pub struct Collection {
    inner: Rc<CollectionInner>,
}

impl Collection {
    /// Create an empty collection with default options.
    pub fn new() -> Self {
        Self::with_options(Vec::<Item>::new(), CollectionOptions::new())
    }

    /// Create a collection from raw mappings and/or models.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        Self::with_options(items, CollectionOptions::new())
    }

    /// Create a collection with explicit options.
    ///
    /// Raw mappings are wrapped by the options' model factory; models are
    /// used as they are. Every element is pushed, so listeners see the usual
    /// wiring even for initial elements.
    pub fn with_options<I>(items: I, options: CollectionOptions) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        let collection = Self {
            inner: Rc::new(CollectionInner {
                models: RefCell::new(Vec::new()),
                length: Cell::new(0),
                emitter: Emitter::new(),
                bindings: RefCell::new(Vec::new()),
                options,
            }),
        };
        collection.listen_to_push();
        for item in items {
            collection.add(item);
        }
        collection
    }

    /// Build a collection from a JSON array of objects. `null` yields an
    /// empty collection.
    pub fn from_value(value: Value) -> Result<Self, ModelError> {
        Self::from_value_with_options(value, CollectionOptions::new())
    }

    /// [`Collection::from_value`] with explicit options.
    pub fn from_value_with_options(
        value: Value,
        options: CollectionOptions,
    ) -> Result<Self, ModelError> {
        let items = match value {
            Value::Array(items) => items,
            Value::Null => Vec::new(),
            other => {
                return Err(ModelError::NotAnArray {
                    found: kind_of(&other),
                });
            }
        };

        let mut raw = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match item {
                Value::Object(attributes) => raw.push(attributes),
                other => {
                    return Err(ModelError::InvalidItem {
                        index,
                        found: kind_of(&other),
                    });
                }
            }
        }
        Ok(Self::with_options(raw, options))
    }

    /// Parse JSON text into a collection.
    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// The options this collection was built with.
    pub fn options(&self) -> &CollectionOptions {
        &self.inner.options
    }

    // =========================================================================
    // WIRING
    // =========================================================================

    /// Install the standing `push` listener that binds every pushed model.
    fn listen_to_push(&self) {
        let collection = Rc::downgrade(&self.inner);
        self.inner.emitter.subscribe(PUSH, move |event| {
            if let (CollectionEvent::Push(model), Some(inner)) = (event, collection.upgrade()) {
                Collection { inner }.bind(model);
            }
        });
    }

    /// Attach the forwarding and removal listeners to `model`.
    fn bind(&self, model: &Model) {
        let collection = Rc::downgrade(&self.inner);
        let target = model.downgrade();

        let change = model.subscribe(CHANGE, {
            let collection = collection.clone();
            let target = target.clone();
            move |_: &ModelEvent| {
                if let (Some(inner), Some(model)) = (collection.upgrade(), target.upgrade()) {
                    inner
                        .emitter
                        .emit(CHANGE, &CollectionEvent::Change(Some(model)));
                }
            }
        });

        let remove = model.subscribe_once(REMOVE, move |_: &ModelEvent| {
            if let (Some(inner), Some(model)) = (collection.upgrade(), target.upgrade()) {
                Collection { inner }.remove(&model);
            }
        });

        tracing::debug!(model = %model.id(), "bound model");
        self.inner.bindings.borrow_mut().push(Binding {
            model: model.clone(),
            change,
            remove,
        });
    }

    /// Dispose one binding per removed element.
    fn unbind(&self, removed: &[Model]) {
        let disposed: Vec<Binding> = {
            let mut bindings = self.inner.bindings.borrow_mut();
            let mut disposed = Vec::with_capacity(removed.len());
            for model in removed {
                if let Some(pos) = bindings.iter().position(|b| Model::ptr_eq(&b.model, model)) {
                    disposed.push(bindings.remove(pos));
                }
            }
            disposed
        };
        for binding in &disposed {
            binding.dispose();
        }
    }

    // =========================================================================
    // ACCESS
    // =========================================================================

    /// Number of models.
    pub fn len(&self) -> usize {
        self.inner.length.get()
    }

    /// Whether the collection holds no models.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Model at `index`, or `None` when out of range.
    pub fn at(&self, index: usize) -> Option<Model> {
        self.inner.models.borrow().get(index).cloned()
    }

    /// Whether some model has the id `id`.
    pub fn has(&self, id: impl AsRef<str>) -> bool {
        let id = id.as_ref();
        self.inner.models.borrow().iter().any(|m| m.id() == id)
    }

    /// First model with the id `id`.
    pub fn get(&self, id: impl AsRef<str>) -> Option<Model> {
        let id = id.as_ref();
        self.inner
            .models
            .borrow()
            .iter()
            .find(|m| m.id() == id)
            .cloned()
    }

    /// Snapshot of the current models, in order.
    pub fn models(&self) -> Vec<Model> {
        self.inner.models.borrow().clone()
    }

    // =========================================================================
    // MUTATION
    // =========================================================================

    /// Append `model`, then emit `push` and `change`.
    ///
    /// The same model may be pushed more than once; each entry gets its own
    /// binding.
    pub fn push(&self, model: &Model) -> &Self {
        let length = {
            let mut models = self.inner.models.borrow_mut();
            models.push(model.clone());
            models.len()
        };
        self.inner.length.set(length);
        tracing::debug!(model = %model.id(), length, "push");

        self.inner
            .emitter
            .emit(PUSH, &CollectionEvent::Push(model.clone()));
        self.inner.emitter.emit(CHANGE, &CollectionEvent::Change(None));
        self
    }

    /// Push a model or raw mapping, wrapping the latter with the model
    /// factory.
    pub fn add(&self, item: impl Into<Item>) -> &Self {
        let model = match item.into() {
            Item::Raw(attributes) => self.inner.options.build_model(attributes),
            Item::Model(model) => model,
        };
        self.push(&model)
    }

    /// Remove every element that value-matches `model`.
    ///
    /// Matching elements share `model`'s id and contain all of its
    /// attributes. Their bindings are disposed before `remove(model)` and
    /// `change` are emitted. Under [`RemovalPolicy::RemovedOnly`] nothing is
    /// emitted when no element matched; under [`RemovalPolicy::Always`] the
    /// events fire regardless and every `change` listener of `model` is
    /// stripped afterwards.
    pub fn remove(&self, model: &Model) -> &Self {
        let (removed, length) = {
            let mut models = self.inner.models.borrow_mut();
            let mut removed = Vec::new();
            models.retain(|m| {
                if m.matches(model) {
                    removed.push(m.clone());
                    false
                } else {
                    true
                }
            });
            (removed, models.len())
        };
        self.inner.length.set(length);
        tracing::debug!(model = %model.id(), removed = removed.len(), length, "remove");

        self.unbind(&removed);

        let policy = self.inner.options.policy();
        if removed.is_empty() && policy == RemovalPolicy::RemovedOnly {
            return self;
        }

        self.inner
            .emitter
            .emit(REMOVE, &CollectionEvent::Remove(model.clone()));
        self.inner.emitter.emit(CHANGE, &CollectionEvent::Change(None));

        if policy == RemovalPolicy::Always {
            model.unsubscribe_all(CHANGE);
        }
        self
    }

    // =========================================================================
    // ITERATION
    // =========================================================================

    /// Call `callback(model, index)` for each model in order.
    ///
    /// The element count is fixed when the walk starts and each element is
    /// read fresh. Pushing or removing from inside the callback is allowed
    /// but which elements are then visited is unspecified.
    pub fn for_each(&self, mut callback: impl FnMut(&Model, usize)) -> &Self {
        let length = self.inner.models.borrow().len();
        for index in 0..length {
            let Some(model) = self.at(index) else {
                break;
            };
            callback(&model, index);
        }
        self
    }

    // =========================================================================
    // SERIALIZATION
    // =========================================================================

    /// Deep copies of every model's attributes, in order.
    pub fn to_json(&self) -> Vec<Attributes> {
        self.inner.models.borrow().iter().map(Model::to_json).collect()
    }

    /// [`Collection::to_json`] as a JSON array value.
    pub fn to_value(&self) -> Value {
        Value::Array(self.to_json().into_iter().map(Value::Object).collect())
    }

    /// Whether two handles refer to the same collection.
    pub fn ptr_eq(a: &Collection, b: &Collection) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }
}

impl Default for Collection {
    fn default() -> Self {
        Self::new()
    }
}

impl Observable for Collection {
    type Event = CollectionEvent;

    fn emitter(&self) -> &Emitter<CollectionEvent> {
        &self.inner.emitter
    }
}

impl PartialEq for Collection {
    fn eq(&self, other: &Self) -> bool {
        Collection::ptr_eq(self, other)
    }
}

impl fmt::Debug for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Collection");
        s.field("length", &self.inner.length.get());
        match self.inner.models.try_borrow() {
            Ok(models) => s.field("models", &*models),
            Err(_) => s.field("models", &"<borrowed>"),
        };
        s.finish()
    }
}

impl Serialize for Collection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.inner.models.borrow().iter())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(value: Value) -> Attributes {
        match value {
            Value::Object(map) => map,
            _ => Attributes::new(),
        }
    }

    /// Records every event the collection emits under `events`.
    fn record(
        collection: &Collection,
        events: &[&str],
    ) -> Rc<RefCell<Vec<(String, CollectionEvent)>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        for &name in events {
            let log = log.clone();
            let tag = name.to_string();
            collection.subscribe(name, move |event| {
                log.borrow_mut().push((tag.clone(), event.clone()));
            });
        }
        log
    }

    #[test]
    fn new_collection_is_empty() {
        let collection = Collection::new();
        assert_eq!(collection.len(), 0);
        assert!(collection.is_empty());
        assert!(collection.models().is_empty());
        assert_eq!(collection.at(0), None);
    }

    #[test]
    fn builds_models_from_raw_items() {
        let collection = Collection::from_items([
            attrs(json!({"a": {"b": 1}})),
            attrs(json!({"a": {"b": 2}})),
        ]);

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.at(0).unwrap().get("a.b"), Some(json!(1)));
        assert_eq!(
            collection.to_value(),
            json!([{"a": {"b": 1}}, {"a": {"b": 2}}])
        );
    }

    #[test]
    fn ready_models_are_used_as_is() {
        let model = Model::new();
        let collection = Collection::from_items([Item::from(&model), Item::from(attrs(json!({})))]);
        assert_eq!(collection.at(0), Some(model));
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn model_factory_wraps_raw_items() {
        let options = CollectionOptions::new().model_factory(|attributes| {
            let model = Model::with_attributes(attributes);
            model.set("wrapped", true);
            model
        });
        let collection = Collection::with_options([attrs(json!({"x": 1}))], options);

        let model = collection.at(0).unwrap();
        assert_eq!(model.get("wrapped"), Some(json!(true)));
        assert_eq!(model.get("x"), Some(json!(1)));
    }

    #[test]
    fn push_appends_and_emits_push_then_change() {
        let collection = Collection::new();
        let log = record(&collection, &[PUSH, CHANGE]);
        let model = Model::new();

        collection.push(&model);

        assert_eq!(collection.len(), 1);
        assert_eq!(collection.at(collection.len() - 1), Some(model.clone()));
        assert_eq!(
            *log.borrow(),
            vec![
                (PUSH.to_string(), CollectionEvent::Push(model)),
                (CHANGE.to_string(), CollectionEvent::Change(None)),
            ]
        );
    }

    #[test]
    fn push_is_chainable() {
        let (a, b) = (Model::new(), Model::new());
        let collection = Collection::new();
        collection.push(&a).push(&b).remove(&a);
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.at(0), Some(b));
    }

    #[test]
    fn push_binds_exactly_one_listener_pair() {
        let collection = Collection::new();
        let model = Model::new();
        collection.push(&model);

        assert_eq!(model.listener_count(CHANGE), 1);
        assert_eq!(model.listener_count(REMOVE), 1);
    }

    #[test]
    fn model_change_is_forwarded_once() {
        let collection = Collection::new();
        let model = Model::new();
        collection.push(&model);
        let log = record(&collection, &[CHANGE]);

        model.set("x", "y");

        assert_eq!(
            *log.borrow(),
            vec![(CHANGE.to_string(), CollectionEvent::Change(Some(model)))]
        );
    }

    #[test]
    fn model_remove_takes_it_out() {
        let collection = Collection::new();
        let model = Model::new();
        let other = Model::new();
        collection.push(&model).push(&other);
        let log = record(&collection, &[REMOVE]);

        model.remove();

        assert_eq!(collection.len(), 1);
        assert_eq!(collection.at(0), Some(other));
        assert!(!collection.has(model.id()));
        assert_eq!(
            *log.borrow(),
            vec![(REMOVE.to_string(), CollectionEvent::Remove(model.clone()))]
        );
        assert_eq!(model.listener_count(CHANGE), 0);
        assert_eq!(model.listener_count(REMOVE), 0);
    }

    #[test]
    fn removed_model_no_longer_forwards() {
        let collection = Collection::new();
        let model = Model::new();
        collection.push(&model).remove(&model);
        let log = record(&collection, &[CHANGE]);

        model.set("x", 1);
        model.remove();

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn remove_keeps_foreign_listeners() {
        let collection = Collection::new();
        let model = Model::new();
        model.subscribe(CHANGE, |_| {});
        collection.push(&model);
        assert_eq!(model.listener_count(CHANGE), 2);

        collection.remove(&model);
        assert_eq!(model.listener_count(CHANGE), 1);
    }

    #[test]
    fn remove_of_non_member_is_silent_by_default() {
        let collection = Collection::from_items([attrs(json!({"a": 1}))]);
        let log = record(&collection, &[REMOVE, CHANGE]);
        let stranger = Model::new();
        stranger.subscribe(CHANGE, |_| {});

        collection.remove(&stranger);

        assert_eq!(collection.len(), 1);
        assert!(log.borrow().is_empty());
        assert_eq!(stranger.listener_count(CHANGE), 1);
    }

    #[test]
    fn remove_of_non_member_broadcasts_under_always() {
        let options = CollectionOptions::new().removal_policy(RemovalPolicy::Always);
        let collection = Collection::with_options([attrs(json!({"a": 1}))], options);
        let log = record(&collection, &[REMOVE, CHANGE]);
        let stranger = Model::new();
        stranger.subscribe(CHANGE, |_| {});

        collection.remove(&stranger);

        assert_eq!(collection.len(), 1);
        assert_eq!(
            *log.borrow(),
            vec![
                (REMOVE.to_string(), CollectionEvent::Remove(stranger.clone())),
                (CHANGE.to_string(), CollectionEvent::Change(None)),
            ]
        );
        assert_eq!(stranger.listener_count(CHANGE), 0);
    }

    #[test]
    fn always_policy_strips_every_change_listener_of_members() {
        let options = CollectionOptions::new().removal_policy(RemovalPolicy::Always);
        let collection = Collection::with_options(Vec::<Item>::new(), options);
        let model = Model::new();
        model.subscribe(CHANGE, |_| {});
        collection.push(&model);

        collection.remove(&model);

        assert_eq!(model.listener_count(CHANGE), 0);
        assert!(collection.is_empty());
    }

    #[test]
    fn duplicates_are_all_removed() {
        let collection = Collection::new();
        let model = Model::new();
        collection.push(&model).push(&model);
        assert_eq!(collection.len(), 2);
        assert_eq!(model.listener_count(CHANGE), 2);

        let log = record(&collection, &[CHANGE]);
        model.set("k", 1);
        assert_eq!(log.borrow().len(), 2);

        model.remove();
        assert!(collection.is_empty());
        assert_eq!(model.listener_count(CHANGE), 0);
        assert_eq!(model.listener_count(REMOVE), 0);
    }

    #[test]
    fn remove_matches_by_value_not_handle() {
        let collection = Collection::new();
        let member = Model::new();
        collection.push(&member);

        let twin = crate::core::context::with_id_generator(
            {
                let id = member.id().clone();
                move || id.clone()
            },
            Model::new,
        );
        assert!(!Model::ptr_eq(&member, &twin));

        collection.remove(&twin);
        assert!(collection.is_empty());
        assert_eq!(member.listener_count(CHANGE), 0);
    }

    #[test]
    fn has_and_get_by_id() {
        let collection = Collection::from_items([attrs(json!({"n": 1})), attrs(json!({"n": 2}))]);
        let second = collection.at(1).unwrap();

        assert!(collection.has(second.id()));
        assert_eq!(collection.get(second.id()), Some(second.clone()));
        assert!(!collection.has("no-such-id"));
        assert_eq!(collection.get("no-such-id"), None);

        collection.remove(&second);
        assert!(!collection.has(second.id()));
    }

    #[test]
    fn lookups_on_empty_collection() {
        let collection = Collection::new();
        assert!(!collection.has("3"));
        assert_eq!(collection.get("3"), None);
    }

    #[test]
    fn for_each_visits_in_order() {
        let collection = Collection::from_items([
            attrs(json!({"n": 0})),
            attrs(json!({"n": 1})),
            attrs(json!({"n": 2})),
        ]);
        let mut seen = Vec::new();
        collection.for_each(|model, index| {
            assert_eq!(collection.at(index).as_ref(), Some(model));
            seen.push((index, model.get("n")));
        });
        assert_eq!(
            seen,
            vec![(0, Some(json!(0))), (1, Some(json!(1))), (2, Some(json!(2)))]
        );
    }

    #[test]
    fn for_each_tolerates_removal() {
        let collection = Collection::from_items([
            attrs(json!({"n": 0})),
            attrs(json!({"n": 1})),
            attrs(json!({"n": 2})),
            attrs(json!({"n": 3})),
        ]);
        let mut visited = Vec::new();
        collection.for_each(|model, index| {
            visited.push((index, model.get("n")));
            model.remove();
        });

        // Each removal shifts the tail left, so every other element is
        // skipped and the walk stops once the index runs past the end.
        assert_eq!(visited, vec![(0, Some(json!(0))), (1, Some(json!(2)))]);
        assert_eq!(collection.len(), 2);
        assert_eq!(
            collection.to_value(),
            json!([{"n": 1}, {"n": 3}])
        );
    }

    #[test]
    fn for_each_tolerates_push() {
        let collection = Collection::from_items([attrs(json!({})), attrs(json!({}))]);
        let mut visits = 0;
        collection.for_each(|_, _| {
            visits += 1;
            collection.push(&Model::new());
        });

        assert_eq!(visits, 2);
        assert_eq!(collection.len(), 4);
    }

    #[test]
    fn length_tracks_models_through_mixed_mutation() {
        let collection = Collection::new();
        let (a, b) = (Model::new(), Model::new());
        collection.push(&a).push(&b).push(&a);
        assert_eq!(collection.len(), collection.models().len());

        collection.remove(&a);
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.len(), collection.models().len());

        collection.remove(&a);
        assert_eq!(collection.len(), 1);

        b.remove();
        assert_eq!(collection.len(), 0);
        assert_eq!(collection.len(), collection.models().len());
    }

    #[test]
    fn listeners_may_remove_during_change() {
        let collection = Collection::new();
        let model = Model::new();
        collection.push(&model);

        let handle = collection.clone();
        collection.subscribe(CHANGE, move |event| {
            if let CollectionEvent::Change(Some(m)) = event {
                handle.remove(m);
            }
        });

        model.set("x", 1);
        assert!(collection.is_empty());
    }

    #[test]
    fn to_json_is_deep_copy() {
        let collection = Collection::from_items([attrs(json!({"a": {"b": 1}}))]);
        let mut json = collection.to_json();
        json[0].insert("a".into(), json!(null));
        assert_eq!(collection.at(0).unwrap().get("a.b"), Some(json!(1)));
    }

    #[test]
    fn serializes_as_array() {
        let collection = Collection::from_items([attrs(json!({"baz": {"foo": "bar"}}))]);
        assert_eq!(
            serde_json::to_string(&collection).unwrap(),
            r#"[{"baz":{"foo":"bar"}}]"#
        );
    }

    #[test]
    fn from_value_validates_shape() {
        let collection = Collection::from_value(json!([{"a": 1}, {}])).unwrap();
        assert_eq!(collection.len(), 2);
        assert!(Collection::from_value(json!(null)).unwrap().is_empty());

        assert!(matches!(
            Collection::from_value(json!({"a": 1})),
            Err(ModelError::NotAnArray { found: "object" })
        ));
        assert!(matches!(
            Collection::from_value(json!([{}, 5])),
            Err(ModelError::InvalidItem { index: 1, found: "number" })
        ));
        assert!(matches!(
            Collection::from_json_str("[{"),
            Err(ModelError::Json(_))
        ));
    }

    #[test]
    fn dropping_collection_detaches_bindings() {
        let model = Model::new();
        {
            let collection = Collection::new();
            collection.push(&model);
            assert_eq!(model.listener_count(CHANGE), 1);
        }
        assert_eq!(model.listener_count(CHANGE), 0);
        assert_eq!(model.listener_count(REMOVE), 0);
    }
}
