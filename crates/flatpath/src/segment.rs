//! Segment classification and shared notation helpers.
//!
//! The flattener and the path builder never call each other; they agree on
//! the dot/bracket notation because both render their tokens through the
//! helpers in this module.

/// Check if a raw segment is numeric: non-empty and all ASCII digits.
///
/// This is the sole place where "this segment is an array index" is decided
/// for path construction. It is a textual test, not a semantic one: an object
/// key that happens to be an all-digit string (a field literally named
/// `"123"`) classifies as numeric and renders in bracket notation. Leading
/// zeros are allowed; this is the flat-view notation test, not an RFC 6901
/// index validation.
///
/// # Example
///
/// ```
/// use flatpath::is_numeric_segment;
///
/// assert!(is_numeric_segment("0"));
/// assert!(is_numeric_segment("123"));
/// assert!(is_numeric_segment("01"));
/// assert!(!is_numeric_segment(""));
/// assert!(!is_numeric_segment("-1"));
/// assert!(!is_numeric_segment("1a"));
/// assert!(!is_numeric_segment("foo"));
/// ```
pub fn is_numeric_segment(segment: &str) -> bool {
    if segment.is_empty() {
        return false;
    }
    segment.bytes().all(|b| b.is_ascii_digit())
}

/// Wrap a segment in array-index brackets, e.g. `[3]`.
pub(crate) fn bracket_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len() + 2);
    out.push('[');
    out.push_str(segment);
    out.push(']');
    out
}

/// Append an object key to a path. Keys are dot-joined except after an empty
/// path, which takes no leading dot.
pub(crate) fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        return key.to_string();
    }
    let mut out = String::with_capacity(prefix.len() + key.len() + 1);
    out.push_str(prefix);
    out.push('.');
    out.push_str(key);
    out
}

/// Append an array index to a path. Brackets attach with no separator, even
/// after an empty path.
pub(crate) fn join_index(prefix: &str, index: usize) -> String {
    let mut out = String::from(prefix);
    out.push_str(&bracket_segment(&index.to_string()));
    out
}
