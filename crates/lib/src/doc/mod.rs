//! Document values and paths.
//!
//! A document is a tree of [`Value`]s: maps and lists as branches, scalars as
//! leaves. A [`Path`] names a node inside that tree. Everything else in the
//! crate (diffing, patching, merging) is built from these two pieces.
//!
//! # Usage
//!
//! ```
//! use confluence::doc::{Value, deep_clone, deep_equal};
//! use serde_json::json;
//!
//! let original = Value::from(json!({"x": 5, "tags": ["a", "b"]}));
//! let copy = deep_clone(&original)?;
//! assert!(deep_equal(&original, &copy));
//! # Ok::<(), confluence::doc::DocError>(())
//! ```

pub mod errors;
pub mod map;
pub mod path;
pub mod value;

pub use errors::DocError;
pub use map::Map;
pub use path::{Path, PathBuf, PathError, Segment, path_overlaps};
pub use value::Value;

/// Returns a deep, independent copy of `value`.
///
/// The copy shares nothing with the original. Fails with
/// [`DocError::UnsupportedValue`] if the value contains something the engine
/// cannot represent (a non-finite float), before any copying happens.
pub fn deep_clone(value: &Value) -> Result<Value, DocError> {
    value.validate()?;
    Ok(value.clone())
}

/// Structural equality over documents.
///
/// - Maps are equal when they hold the same keys with equal values; key order
///   does not matter.
/// - Lists are equal when they have the same length and equal elements in
///   the same order. A trailing hole counts as an element, so `[1, undefined]`
///   and `[1]` differ.
/// - `Absent` and `Null` are different values.
///
/// The result does not depend on argument order.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    a == b
}
