// ============================================================================
// spark-models - Collection Events
// ============================================================================

use crate::core::types::Attributes;
use crate::model::Model;

/// Payload delivered to collection listeners.
///
/// | Event name | Payload                | Cause                         |
/// |------------|------------------------|-------------------------------|
/// | `push`     | `Push(model)`          | `push`                        |
/// | `change`   | `Change(None)`         | `push` / `remove`             |
/// | `change`   | `Change(Some(model))`  | a member model changed        |
/// | `remove`   | `Remove(model)`        | `remove`                      |
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionEvent {
    Push(Model),
    Change(Option<Model>),
    Remove(Model),
}

impl CollectionEvent {
    /// The model carried by the event, if any.
    pub fn model(&self) -> Option<&Model> {
        match self {
            CollectionEvent::Push(model) | CollectionEvent::Remove(model) => Some(model),
            CollectionEvent::Change(model) => model.as_ref(),
        }
    }
}

/// Element accepted when building a collection.
#[derive(Debug, Clone)]
pub enum Item {
    /// Raw attributes, wrapped by the collection's model factory.
    Raw(Attributes),
    /// A ready model, used as-is.
    Model(Model),
}

impl From<Attributes> for Item {
    fn from(attributes: Attributes) -> Self {
        Item::Raw(attributes)
    }
}

impl From<Model> for Item {
    fn from(model: Model) -> Self {
        Item::Model(model)
    }
}

impl From<&Model> for Item {
    fn from(model: &Model) -> Self {
        Item::Model(model.clone())
    }
}
