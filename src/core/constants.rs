// ============================================================================
// spark-models - Constants
// Event names shared by models and collections
// ============================================================================

// =============================================================================
// EVENT NAMES
// =============================================================================

/// Generic change event.
///
/// Emitted by a model after every attribute write, and by a collection on
/// push, remove, and when a member model changes.
pub const CHANGE: &str = "change";

/// Removal event.
///
/// A model emits it from `remove()` with no payload; a collection emits it
/// with the model passed to `Collection::remove`.
pub const REMOVE: &str = "remove";

/// Emitted by a collection when a model is appended.
pub const PUSH: &str = "push";

/// Prefix of the path-scoped change event (`change:<path>`).
pub const CHANGE_PREFIX: &str = "change:";

// =============================================================================
// PATH SYNTAX
// =============================================================================

/// Separator between path segments.
pub const PATH_SEPARATOR: char = '.';

/// Escape character for a literal separator or bracket inside a key.
pub const PATH_ESCAPE: char = '\\';

/// Most `null` slots a single write may add past the end of an array.
///
/// A write whose index lies further out is refused.
pub const MAX_ARRAY_PADDING: usize = 4096;

// =============================================================================
// ID GENERATION
// =============================================================================

/// First value handed out by the process-wide counter and by a fresh
/// `SequentialIds` generator.
pub const FIRST_SEQUENTIAL_ID: u64 = 1;

/// Build the path-scoped change event name for `path`.
///
/// ```
/// use spark_models::constants::change_event;
///
/// assert_eq!(change_event("a.b"), "change:a.b");
/// ```
pub fn change_event(path: &str) -> String {
    let mut name = String::with_capacity(CHANGE_PREFIX.len() + path.len());
    name.push_str(CHANGE_PREFIX);
    name.push_str(path);
    name
}

// =============================================================================
// TESTS
// =============================================================================
