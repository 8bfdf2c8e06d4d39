//! Conflict records handed to resolvers.

use crate::{
    diff::Change,
    doc::{Path, Value},
};

/// How the two conflicting paths relate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlap {
    /// Both entries target the same node
    Same,
    /// Our entry targets an ancestor of their entry's path
    OursAncestor,
    /// Their entry targets an ancestor of our entry's path
    TheirsAncestor,
}

impl Overlap {
    pub(crate) fn between(ours: &Path, theirs: &Path) -> Self {
        if ours == theirs {
            Overlap::Same
        } else if theirs.starts_with(ours) {
            Overlap::OursAncestor
        } else {
            Overlap::TheirsAncestor
        }
    }
}

/// A pair of overlapping entries, one from each diff.
///
/// "Ours" is the entry of the diff that is applied first; "theirs" is the
/// entry being rebased on top of it. A resolver inspects the record and may
/// overwrite [`merged`](Conflict::merged), the value that will end up at
/// their entry's path. It starts out as the outcome of the default policy.
#[derive(Debug, Clone)]
pub struct Conflict {
    ours: Change,
    theirs: Change,
    overlap: Overlap,
    current: Value,
    /// Proposed value at their entry's path after the merge
    pub merged: Value,
}

impl Conflict {
    pub(crate) fn new(ours: &Change, theirs: &Change, current: &Value, merged: Value) -> Self {
        Self {
            overlap: Overlap::between(ours.path(), theirs.path()),
            ours: ours.clone(),
            theirs: theirs.clone(),
            current: current.clone(),
            merged,
        }
    }

    pub fn ours(&self) -> &Change {
        &self.ours
    }

    pub fn theirs(&self) -> &Change {
        &self.theirs
    }

    pub fn overlap(&self) -> Overlap {
        self.overlap
    }

    /// The shared ancestor's value at their entry's path
    pub fn ancestor(&self) -> &Value {
        self.theirs.prev()
    }

    /// The value at their entry's path once our diff has been applied
    pub fn current(&self) -> &Value {
        &self.current
    }
}
