//! Conflict resolution strategies.

use tracing::debug;

use super::{Conflict, Overlap};
use crate::{doc::Value, text};

/// Strategy consulted once per conflicting pair of entries.
///
/// Returning `true` accepts the (possibly rewritten) [`Conflict::merged`]
/// value. Returning `false` discards any rewrite and keeps the default
/// outcome for that pair. A resolver only sees copies of the entries and
/// documents involved, so it cannot alter the diffs being merged.
///
/// Any `FnMut(&mut Conflict) -> bool` closure is a resolver:
///
/// ```
/// use confluence::diff::diff;
/// use confluence::doc::Value;
/// use confluence::resolve::{Conflict, resolve_with};
/// use serde_json::json;
///
/// let o = Value::from(json!({"n": 1}));
/// let a = diff(&o, &Value::from(json!({"n": 2})));
/// let b = diff(&o, &Value::from(json!({"n": 3})));
///
/// // Let the second diff win every conflict
/// let merged = resolve_with(&a, &b, &mut |c: &mut Conflict| {
///     c.merged = c.theirs().value().clone();
///     true
/// });
/// assert_eq!(merged.changes()[0].value(), &Value::Int(3));
/// ```
pub trait ConflictResolver {
    fn resolve(&mut self, conflict: &mut Conflict) -> bool;
}

impl<F> ConflictResolver for F
where
    F: FnMut(&mut Conflict) -> bool,
{
    fn resolve(&mut self, conflict: &mut Conflict) -> bool {
        self(conflict)
    }
}

/// The default policy: the diff applied first wins every conflict, and an
/// ancestor-path edit wins over a nested one.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstWins;

impl ConflictResolver for FirstWins {
    fn resolve(&mut self, _conflict: &mut Conflict) -> bool {
        false
    }
}

/// Merges concurrent edits to the same string character by character.
///
/// Applies only when both entries replace the same text node with text;
/// every other conflict falls back to the default policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextMerge;

impl ConflictResolver for TextMerge {
    fn resolve(&mut self, conflict: &mut Conflict) -> bool {
        if conflict.overlap() != Overlap::Same {
            return false;
        }
        let (Value::Text(ancestor), Value::Text(ours), Value::Text(theirs)) = (
            conflict.ancestor(),
            conflict.ours().value(),
            conflict.theirs().value(),
        ) else {
            return false;
        };

        match text::merge(ancestor, ours, theirs) {
            Ok(merged) => {
                conflict.merged = Value::Text(merged);
                true
            }
            Err(err) => {
                debug!(path = %conflict.theirs().path(), "text merge failed: {err}");
                false
            }
        }
    }
}
