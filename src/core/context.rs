// ============================================================================
// spark-models - Model Context
// Thread-local state: the id generator every new model draws from
// ============================================================================

use std::cell::RefCell;
use std::sync::atomic::{AtomicU64, Ordering};

use super::constants::FIRST_SEQUENTIAL_ID;
use super::types::ModelId;

// =============================================================================
// ID GENERATORS
// =============================================================================

/// Source of unique model identifiers.
///
/// Every thread starts out with [`ProcessIds`], so ids are unique across the
/// whole process. [`set_id_generator`] swaps in another generator for the
/// current thread only.
pub trait IdGenerator {
    /// Produce the next identifier. Must never repeat for the generator's
    /// lifetime.
    fn next_id(&mut self) -> ModelId;
}

/// Process-wide counter behind [`ProcessIds`].
static NEXT_PROCESS_ID: AtomicU64 = AtomicU64::new(FIRST_SEQUENTIAL_ID);

/// The default generator: one counter shared by every thread.
///
/// Yields `"1"`, `"2"`, ... in creation order across the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessIds;

impl IdGenerator for ProcessIds {
    fn next_id(&mut self) -> ModelId {
        ModelId::from(NEXT_PROCESS_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Monotonic counter owned by the generator, optionally prefixed.
///
/// Meant for deterministic ids in tests. Yields `"1"`, `"2"`, ... or, with
/// a prefix, `"c1"`, `"c2"`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    /// Counter starting at 1, no prefix.
    pub fn new() -> Self {
        Self::starting_at(FIRST_SEQUENTIAL_ID)
    }

    /// Counter starting at `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            prefix: String::new(),
            next: first,
        }
    }

    /// Prepend `prefix` to every generated id.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// The value the next call will use.
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> ModelId {
        let n = self.next;
        self.next = self.next.saturating_add(1);
        if self.prefix.is_empty() {
            ModelId::from(n)
        } else {
            ModelId::from(format!("{}{}", self.prefix, n))
        }
    }
}

impl<F> IdGenerator for F
where
    F: FnMut() -> ModelId,
{
    fn next_id(&mut self) -> ModelId {
        self()
    }
}

// =============================================================================
// MODEL CONTEXT
// =============================================================================

/// Thread-local context holding process-wide model state.
pub struct ModelContext {
    /// Generator consulted by every model constructor on this thread
    id_generator: RefCell<Box<dyn IdGenerator>>,
}

impl ModelContext {
    /// Create a context drawing from the process-wide [`ProcessIds`].
    pub fn new() -> Self {
        Self {
            id_generator: RefCell::new(Box::new(ProcessIds)),
        }
    }

    /// Draw the next id.
    pub fn next_id(&self) -> ModelId {
        let id = self.id_generator.borrow_mut().next_id();
        tracing::trace!(%id, "generated model id");
        id
    }

    /// Install a new generator, returning the previous one.
    pub fn replace_id_generator(&self, generator: Box<dyn IdGenerator>) -> Box<dyn IdGenerator> {
        self.id_generator.replace(generator)
    }
}

impl Default for ModelContext {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// THREAD-LOCAL ACCESS
// =============================================================================

thread_local! {
    /// The thread-local model context
    static CONTEXT: ModelContext = ModelContext::new();
}

/// Access the thread-local model context.
pub fn with_context<R>(f: impl FnOnce(&ModelContext) -> R) -> R {
    CONTEXT.with(f)
}

// =============================================================================
// CONVENIENCE FUNCTIONS
// =============================================================================

/// Draw the next model id from the current thread's generator.
pub fn next_model_id() -> ModelId {
    with_context(|ctx| ctx.next_id())
}

/// Install `generator` for the current thread, returning the previous one.
///
/// Models already built keep their ids.
pub fn set_id_generator(generator: impl IdGenerator + 'static) -> Box<dyn IdGenerator> {
    with_context(|ctx| ctx.replace_id_generator(Box::new(generator)))
}

/// Run `f` with `generator` installed, restoring the previous generator
/// afterwards.
///
/// # Example
///
/// ```
/// use spark_models::{with_id_generator, Model, SequentialIds};
///
/// let (a, b) = with_id_generator(SequentialIds::new().with_prefix("user-"), || {
///     (Model::new(), Model::new())
/// });
/// assert_eq!(a.id().as_str(), "user-1");
/// assert_eq!(b.id().as_str(), "user-2");
/// ```
pub fn with_id_generator<R>(generator: impl IdGenerator + 'static, f: impl FnOnce() -> R) -> R {
    struct Restore(Option<Box<dyn IdGenerator>>);

    impl Drop for Restore {
        fn drop(&mut self) {
            if let Some(prev) = self.0.take() {
                with_context(|ctx| ctx.replace_id_generator(prev));
            }
        }
    }

    let _restore = Restore(Some(set_id_generator(generator)));
    f()
}

// =============================================================================
// TESTS
// =============================================================================
