//! Flat views and canonical path notation for JSON values.
//!
//! This crate implements two independent pure functions over the same
//! dot/bracket path notation:
//!
//! - [`flatten`] walks a JSON value and produces a single-level map keyed by
//!   canonical path strings, one entry per leaf.
//! - [`build_path`] renders the canonical path string for one node from the
//!   raw segments reported by a tree-rendering caller, plus an optional
//!   caller-supplied prefix.
//!
//! The two never call each other. They agree on notation because both render
//! their tokens through the same shared helpers, and the agreement is pinned
//! by tests.
//!
//! # Example
//!
//! ```
//! use flatpath::{build_path, flatten};
//! use serde_json::json;
//!
//! let value = json!({"user": {"tags": ["a", "b"]}});
//!
//! // Flat view of the whole value.
//! let flat = flatten(&value);
//! assert_eq!(flat.get("user.tags[0]"), Some(&json!("a")));
//!
//! // Path for one clicked node, with the value nested under an outer field.
//! let path = build_path(&["tags", "1"], Some("user"));
//! assert_eq!(path.as_deref(), Some("user.tags[1]"));
//! ```

mod types;
pub use types::{Path, PathStep, Segment};

mod segment;
pub use segment::is_numeric_segment;

mod build;
pub use build::{build_path, build_segment_path};

mod flatten;
pub use flatten::{flatten, is_collection, leaf_count};
