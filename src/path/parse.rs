// ============================================================================
// spark-models - Path Parsing
// Dot-delimited attribute paths with bracket indices
// ============================================================================
//
// Grammar:
//
//   path    := segment ( "." segment | "[" digits "]" )*
//   segment := ( char | "\." | "\[" | "\]" )+
//
// `a.b.c`, `items[0].name`, `grid[1][2]` and `dotted\.key` are all valid.
// Empty segments are skipped, so `a..b` addresses the same node as `a.b`.
// ============================================================================

use crate::core::constants::{PATH_ESCAPE, PATH_SEPARATOR};

/// One step of a parsed path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    /// Mapping key (also an array index when the key is numeric)
    Key(String),
    /// Bracketed array index (`[n]`)
    Index(usize),
}

impl PathStep {
    /// Array position this step addresses, if any.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathStep::Index(i) => Some(*i),
            PathStep::Key(k) => parse_digits(k),
        }
    }

    /// Mapping key this step addresses.
    pub fn to_key(&self) -> String {
        match self {
            PathStep::Key(k) => k.clone(),
            PathStep::Index(i) => i.to_string(),
        }
    }
}

/// Parse a path string into steps.
///
/// # Example
///
/// ```
/// use spark_models::path::{parse_path, PathStep};
///
/// assert_eq!(
///     parse_path("users[1].name"),
///     vec![
///         PathStep::Key("users".into()),
///         PathStep::Index(1),
///         PathStep::Key("name".into()),
///     ]
/// );
/// ```
pub fn parse_path(path: &str) -> Vec<PathStep> {
    split_raw(path).into_iter().map(|raw| classify(&raw)).collect()
}

/// Split on unescaped separators and before unescaped `[`, keeping escapes.
fn split_raw(path: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = path.chars();

    while let Some(c) = chars.next() {
        match c {
            PATH_ESCAPE => {
                current.push(c);
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            PATH_SEPARATOR => {
                if !current.is_empty() {
                    parts.push(std::mem::take(&mut current));
                }
            }
            '[' => {
                if !current.is_empty() {
                    parts.push(std::mem::take(&mut current));
                }
                current.push(c);
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

fn classify(raw: &str) -> PathStep {
    if let Some(index) = raw
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .and_then(parse_digits)
    {
        return PathStep::Index(index);
    }
    PathStep::Key(unescape(raw))
}

fn unescape(raw: &str) -> String {
    if !raw.contains(PATH_ESCAPE) {
        return raw.to_string();
    }
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c == PATH_ESCAPE {
            if let Some(&next) = chars.peek() {
                if next == PATH_SEPARATOR || next == '[' || next == ']' {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

fn parse_digits(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

// =============================================================================
// TESTS
// =============================================================================
