//! Canonical path construction for "copy as path" interactions.

use crate::segment::{bracket_segment, is_numeric_segment};
use crate::types::Segment;

/// Build the canonical path string for a node from its raw segments.
///
/// `segments` is the ordered list of steps from the root to the node, as
/// reported by a tree-rendering caller. `prefix` is an optional path context
/// established by the caller, e.g. a field name under which the whole value
/// is nested in a larger document; it participates in notation as if it were
/// the first segment.
///
/// Notation rules, applied left to right over prefix-then-segments:
///
/// - A numeric segment (see [`is_numeric_segment`]) is wrapped in brackets
///   and attached with no separator, even in the first position.
/// - A segment that already starts with `[` was pre-rendered as a bracketed
///   index token by an upstream producer and is appended verbatim.
/// - Any other segment is dot-joined, except the first, which takes no
///   leading dot.
///
/// Returns `None` only when there is nothing to copy: `segments` is empty
/// and no `prefix` was supplied. Clicking "copy" on the root node therefore
/// yields no path string, and callers suppress the copy action.
///
/// # Example
///
/// ```
/// use flatpath::build_path;
///
/// assert_eq!(build_path::<&str>(&[], None), None);
/// assert_eq!(build_path(&["a", "b"], None).unwrap(), "a.b");
/// assert_eq!(build_path(&["0", "b"], None).unwrap(), "[0].b");
/// assert_eq!(build_path(&["b"], Some("root")).unwrap(), "root.b");
/// ```
pub fn build_path<S: AsRef<str>>(segments: &[S], prefix: Option<&str>) -> Option<String> {
    if segments.is_empty() && prefix.is_none() {
        return None;
    }

    let mut all: Vec<&str> = Vec::with_capacity(segments.len() + 1);
    if let Some(prefix) = prefix {
        all.push(prefix);
    }
    for segment in segments {
        all.push(segment.as_ref());
    }

    let mut acc = String::new();
    for (i, segment) in all.iter().enumerate() {
        if is_numeric_segment(segment) {
            acc.push_str(&bracket_segment(segment));
        } else if segment.starts_with('[') {
            acc.push_str(segment);
        } else if i == 0 {
            acc.push_str(segment);
        } else {
            acc.push('.');
            acc.push_str(segment);
        }
    }
    Some(acc)
}

/// Build the canonical path string from typed [`Segment`]s.
///
/// Each segment is rendered to its string form and then classified textually,
/// exactly as in [`build_path`]. In particular a `Segment::Key` whose text is
/// all digits still renders in bracket notation.
///
/// # Example
///
/// ```
/// use flatpath::{build_segment_path, Segment};
///
/// let segments = vec![Segment::from("items"), Segment::from(2usize)];
/// assert_eq!(build_segment_path(&segments, None).unwrap(), "items[2]");
/// ```
pub fn build_segment_path(segments: &[Segment], prefix: Option<&str>) -> Option<String> {
    let steps: Vec<String> = segments.iter().map(Segment::to_string).collect();
    build_path(&steps, prefix)
}
