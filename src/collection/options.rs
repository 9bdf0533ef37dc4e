// ============================================================================
// spark-models - Collection Options
// Model factory and removal policy
// ============================================================================

use std::fmt;
use std::rc::Rc;

use crate::core::types::Attributes;
use crate::model::Model;

/// Builds the model that wraps a raw attribute mapping.
pub type ModelFactory = Rc<dyn Fn(Attributes) -> Model>;

/// What `Collection::remove` does when it is asked to remove a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemovalPolicy {
    /// Emit `remove`/`change` only when at least one element was removed.
    /// Listeners installed by other parties stay attached.
    #[default]
    RemovedOnly,
    /// Always emit `remove`/`change`, even if nothing matched, and strip
    /// every `change` listener from the model passed in, including ones the
    /// collection did not install.
    Always,
}

/// Configuration for a [`Collection`](super::Collection).
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use spark_models::{Collection, CollectionOptions, Item, Model};
///
/// let options = CollectionOptions::new().model_factory(|mut attributes| {
///     attributes.entry("kind").or_insert(json!("todo"));
///     Model::with_attributes(attributes)
/// });
///
/// let todos = Collection::with_options(Vec::<Item>::new(), options);
/// todos.add(json!({"title": "write docs"}).as_object().unwrap().clone());
/// assert_eq!(todos.at(0).unwrap().get("kind"), Some(json!("todo")));
/// ```
#[derive(Clone)]
pub struct CollectionOptions {
    model_factory: ModelFactory,
    removal_policy: RemovalPolicy,
}

impl CollectionOptions {
    /// Default options: plain `Model` wrapping, `RemovedOnly` removal.
    pub fn new() -> Self {
        Self {
            model_factory: Rc::new(Model::with_attributes),
            removal_policy: RemovalPolicy::default(),
        }
    }

    /// Use `factory` to wrap raw mappings into models.
    pub fn model_factory(mut self, factory: impl Fn(Attributes) -> Model + 'static) -> Self {
        self.model_factory = Rc::new(factory);
        self
    }

    /// Set the removal policy.
    pub fn removal_policy(mut self, policy: RemovalPolicy) -> Self {
        self.removal_policy = policy;
        self
    }

    /// The configured removal policy.
    pub fn policy(&self) -> RemovalPolicy {
        self.removal_policy
    }

    /// Wrap `attributes` with the configured factory.
    pub fn build_model(&self, attributes: Attributes) -> Model {
        (self.model_factory)(attributes)
    }
}

impl Default for CollectionOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CollectionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionOptions")
            .field("removal_policy", &self.removal_policy)
            .finish_non_exhaustive()
    }
}
