//! Type definitions for flat-view paths.

use std::fmt;

/// A single raw step in a flat-view path.
pub type PathStep = String;

/// A flat-view path: ordered steps from the root to a node.
pub type Path = Vec<PathStep>;

/// A raw path segment as reported by a tree-rendering caller.
///
/// Segments arrive either as object keys or as array indices. Notation is
/// decided later, on the rendered string form, so a `Key` that happens to be
/// all digits renders in bracket notation just like an `Index` (see
/// [`is_numeric_segment`](crate::is_numeric_segment)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// An object key.
    Key(String),
    /// An array index.
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => f.write_str(key),
            Segment::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Segment::Key(key.to_string())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Segment::Key(key)
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment::Index(index)
    }
}
