//! Applying diffs to documents.

use tracing::debug;

use super::{Change, Diff, PatchError};
use crate::doc::{Map, Path, Segment, Value};

/// Applies every entry of `diff`, in order, to `doc`.
///
/// `Add` entries create missing intermediate containers (a map for a key
/// segment, a list for an index segment). `Remove` and `Replace` entries
/// require their path to resolve and fail with
/// [`PatchError::PathNotFound`] otherwise; in that case `doc` may be
/// partially patched and should be discarded.
///
/// The diff itself is never modified.
pub fn patch(doc: &mut Value, diff: &Diff) -> Result<(), PatchError> {
    for change in diff {
        if let Err(err) = apply_change(doc, change) {
            debug!(path = %change.path(), kind = change.kind(), "patch failed: {err}");
            return Err(err);
        }
    }
    Ok(())
}

/// Applies `diff` to a copy of `doc`, leaving `doc` untouched.
pub fn patched(doc: &Value, diff: &Diff) -> Result<Value, PatchError> {
    let mut out = doc.clone();
    patch(&mut out, diff)?;
    Ok(out)
}

/// Applies a single change entry to `doc`.
pub fn apply_change(doc: &mut Value, change: &Change) -> Result<(), PatchError> {
    let path = change.path();
    let Some((last, parent_path)) = path.split_last() else {
        if !matches!(change, Change::Add { .. }) && doc.is_absent() {
            return Err(not_found(path, "document is empty"));
        }
        *doc = change.value().clone();
        return Ok(());
    };

    match change {
        Change::Add { value, .. } => {
            let parent = make_parent(doc, parent_path, last, path)?;
            insert_child(parent, last, value.clone(), path)
        }
        Change::Remove { .. } => {
            let parent = lookup_mut(doc, parent_path)
                .ok_or_else(|| not_found(path, "parent does not exist"))?;
            remove_child(parent, last, path)
        }
        Change::Replace { value, .. } => {
            let parent = lookup_mut(doc, parent_path)
                .ok_or_else(|| not_found(path, "parent does not exist"))?;
            replace_child(parent, last, value.clone(), path)
        }
    }
}

fn not_found(path: &Path, reason: impl Into<String>) -> PatchError {
    PatchError::PathNotFound {
        path: path.to_string(),
        reason: reason.into(),
    }
}

fn mismatch(path: &Path, segment: &Segment, found: &Value) -> PatchError {
    PatchError::TypeMismatch {
        path: path.to_string(),
        expected: match segment {
            Segment::Key(_) => "map",
            Segment::Index(_) => "list",
        },
        found: found.type_name(),
    }
}

fn empty_container(segment: &Segment) -> Value {
    match segment {
        Segment::Key(_) => Value::Map(Map::new()),
        Segment::Index(_) => Value::List(Vec::new()),
    }
}

fn lookup_mut<'a>(doc: &'a mut Value, path: &Path) -> Option<&'a mut Value> {
    let mut node = doc;
    for segment in path {
        node = match (node, segment) {
            (Value::Map(map), Segment::Key(k)) => map.get_mut(k)?,
            (Value::List(items), Segment::Index(i)) => items.get_mut(*i)?,
            _ => return None,
        };
    }
    Some(node)
}

/// Walks to the parent of an `Add` target, creating containers on the way.
fn make_parent<'a>(
    doc: &'a mut Value,
    parent_path: &Path,
    last: &Segment,
    full: &Path,
) -> Result<&'a mut Value, PatchError> {
    let segments = parent_path.segments();
    let mut node = doc;
    for (i, segment) in segments.iter().enumerate() {
        let next = segments.get(i + 1).unwrap_or(last);
        if node.is_absent() {
            *node = empty_container(segment);
        }
        node = match (node, segment) {
            (Value::Map(map), Segment::Key(k)) => map.get_or_insert_with(k, || empty_container(next)),
            (Value::List(items), Segment::Index(idx)) => {
                if *idx > items.len() {
                    return Err(not_found(
                        full,
                        format!("index {idx} past end of list of length {}", items.len()),
                    ));
                }
                if *idx == items.len() {
                    items.push(empty_container(next));
                }
                &mut items[*idx]
            }
            (other, _) => return Err(mismatch(full, segment, other)),
        };
    }
    if node.is_absent() {
        *node = empty_container(last);
    }
    Ok(node)
}

fn insert_child(parent: &mut Value, last: &Segment, value: Value, full: &Path) -> Result<(), PatchError> {
    match (parent, last) {
        (Value::Map(map), Segment::Key(k)) => {
            map.insert(k.as_str(), value);
            Ok(())
        }
        (Value::List(items), Segment::Index(idx)) => {
            // Interpreted against the current length
            let at = (*idx).min(items.len());
            items.insert(at, value);
            Ok(())
        }
        (other, _) => Err(mismatch(full, last, other)),
    }
}

fn remove_child(parent: &mut Value, last: &Segment, full: &Path) -> Result<(), PatchError> {
    match (parent, last) {
        (Value::Map(map), Segment::Key(k)) => map
            .remove(k)
            .map(|_| ())
            .ok_or_else(|| not_found(full, "key does not exist")),
        (Value::List(items), Segment::Index(idx)) if *idx < items.len() => {
            items.remove(*idx);
            Ok(())
        }
        (Value::List(items), Segment::Index(idx)) => Err(not_found(
            full,
            format!("index {idx} out of range for list of length {}", items.len()),
        )),
        (other, _) => Err(not_found(
            full,
            format!("cannot remove {last} from {}", other.type_name()),
        )),
    }
}

fn replace_child(parent: &mut Value, last: &Segment, value: Value, full: &Path) -> Result<(), PatchError> {
    match (parent, last) {
        (Value::Map(map), Segment::Key(k)) if map.contains_key(k) => {
            map.insert(k.as_str(), value);
            Ok(())
        }
        (Value::Map(_), Segment::Key(_)) => Err(not_found(full, "key does not exist")),
        (Value::List(items), Segment::Index(idx)) => match items.get_mut(*idx) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(not_found(
                full,
                format!("index {idx} out of range for list of length {}", items.len()),
            )),
        },
        (other, _) => Err(not_found(
            full,
            format!("cannot replace {last} in {}", other.type_name()),
        )),
    }
}
