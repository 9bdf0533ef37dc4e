// ============================================================================
// spark-models - Path Module
// Path-based access into nested attribute trees
// ============================================================================

mod access;
mod matching;
mod parse;

pub use access::{contains, get, get_steps, set, set_steps};
pub use matching::{is_match, is_match_attributes};
pub use parse::{parse_path, PathStep};
