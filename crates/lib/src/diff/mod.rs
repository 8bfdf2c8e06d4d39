//! Structural diff and patch.
//!
//! [`diff`] walks two documents in lock-step and emits one [`Change`] per
//! differing node. It recurses whenever both sides hold the same container
//! kind, so edits to disjoint subtrees end up on disjoint paths; only a
//! change of kind, or a key/element appearing or disappearing, is recorded as
//! a single entry at that path. [`patch`] applies such a list to a document.
//!
//! # Usage
//!
//! ```
//! use confluence::diff::{diff, patched};
//! use confluence::doc::Value;
//! use serde_json::json;
//!
//! let original = Value::from(json!({"x": [1], "y": {"a": 1}}));
//! let modified = Value::from(json!({"x": [1, 2], "y": {"a": 2}}));
//!
//! let changes = diff(&original, &modified);
//! assert_eq!(changes.len(), 2);
//! assert_eq!(patched(&original, &changes)?, modified);
//! # Ok::<(), confluence::diff::PatchError>(())
//! ```
//!
//! # Entry order
//!
//! Within a map, keys of the original are visited in their order (changed or
//! removed), then keys only present in the modified document in theirs.
//! Within a list, shared positions are visited ascending, then appended
//! elements ascending, then trailing removals descending so every index is
//! still valid when its entry is applied.

use tracing::trace;

use crate::doc::{Map, PathBuf, Value};

pub mod change;
pub mod errors;
pub mod patch;

pub use change::{Change, Diff};
pub use errors::PatchError;
pub use patch::{apply_change, patch, patched};

/// Computes the changes that turn `original` into `modified`.
///
/// Neither input is modified. `diff(O, O)` is empty, and
/// `patched(O, &diff(O, A))` equals `A`.
pub fn diff(original: &Value, modified: &Value) -> Diff {
    let mut changes = Vec::new();
    let mut path = PathBuf::new();
    diff_node(original, modified, &mut path, &mut changes);
    trace!(entries = changes.len(), "computed diff");
    Diff::from(changes)
}

fn diff_node(original: &Value, modified: &Value, path: &mut PathBuf, out: &mut Vec<Change>) {
    match (original, modified) {
        (Value::Map(o), Value::Map(m)) => diff_maps(o, m, path, out),
        (Value::List(o), Value::List(m)) => diff_lists(o, m, path, out),
        _ if original == modified => {}
        (Value::Absent, _) => out.push(Change::Add {
            path: path.clone(),
            value: modified.clone(),
        }),
        (_, Value::Absent) => out.push(Change::Remove {
            path: path.clone(),
            prev: original.clone(),
        }),
        _ => out.push(Change::Replace {
            path: path.clone(),
            prev: original.clone(),
            value: modified.clone(),
        }),
    }
}

fn diff_maps(original: &Map, modified: &Map, path: &mut PathBuf, out: &mut Vec<Change>) {
    for (key, before) in original.iter() {
        match modified.get(key) {
            Some(after) => {
                path.push_mut(key);
                diff_node(before, after, path, out);
                path.pop();
            }
            None => out.push(Change::Remove {
                path: path.join(key),
                prev: before.clone(),
            }),
        }
    }

    for (key, after) in modified.iter() {
        if !original.contains_key(key) {
            out.push(Change::Add {
                path: path.join(key),
                value: after.clone(),
            });
        }
    }
}

fn diff_lists(original: &[Value], modified: &[Value], path: &mut PathBuf, out: &mut Vec<Change>) {
    let shared = original.len().min(modified.len());

    for (i, (before, after)) in original.iter().zip(modified).enumerate() {
        path.push_mut(i);
        if before.same_container_kind(after) {
            diff_node(before, after, path, out);
        } else if before != after {
            // In place, even when one side is a hole: Add/Remove would shift
            out.push(Change::Replace {
                path: path.clone(),
                prev: before.clone(),
                value: after.clone(),
            });
        }
        path.pop();
    }

    for (i, after) in modified.iter().enumerate().skip(shared) {
        out.push(Change::Add {
            path: path.join(i),
            value: after.clone(),
        });
    }

    for i in (shared..original.len()).rev() {
        out.push(Change::Remove {
            path: path.join(i),
            prev: original[i].clone(),
        });
    }
}
