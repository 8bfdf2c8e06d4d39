//! Change entries and diffs.

use serde::{Deserialize, Serialize};

use crate::doc::{Path, PathBuf, Segment, Value};

/// One edit at one path.
///
/// The meaning of `Add` and `Remove` depends on the last path segment:
///
/// | Last segment | `Add`                      | `Remove`                      | `Replace`      |
/// |--------------|----------------------------|-------------------------------|----------------|
/// | key          | key becomes present        | key removed                   | value set      |
/// | index        | element inserted, rest shift right | element removed, rest shift left | element set in place |
///
/// `Remove` and `Replace` carry the value they displace so a diff can be
/// inspected or inverted without the original document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Change {
    /// A key or element newly present
    Add { path: PathBuf, value: Value },
    /// A key or element removed
    Remove { path: PathBuf, prev: Value },
    /// A value changed in place
    Replace {
        path: PathBuf,
        prev: Value,
        value: Value,
    },
}

impl Change {
    /// The path this change applies to
    pub fn path(&self) -> &Path {
        match self {
            Change::Add { path, .. } | Change::Remove { path, .. } | Change::Replace { path, .. } => {
                path
            }
        }
    }

    /// Short name of the change kind
    pub fn kind(&self) -> &'static str {
        match self {
            Change::Add { .. } => "add",
            Change::Remove { .. } => "remove",
            Change::Replace { .. } => "replace",
        }
    }

    /// The value at the path before the change; `Absent` for `Add`
    pub fn prev(&self) -> &Value {
        match self {
            Change::Add { .. } => &Value::Absent,
            Change::Remove { prev, .. } | Change::Replace { prev, .. } => prev,
        }
    }

    /// The value at the path after the change; `Absent` for `Remove`
    pub fn value(&self) -> &Value {
        match self {
            Change::Remove { .. } => &Value::Absent,
            Change::Add { value, .. } | Change::Replace { value, .. } => value,
        }
    }

    /// Returns true for an element inserted into a list
    pub fn is_insertion(&self) -> bool {
        matches!(self, Change::Add { path, .. } if path.last().is_some_and(Segment::is_index))
    }

    /// Returns true for an element removed from a list
    pub fn is_sequence_removal(&self) -> bool {
        matches!(self, Change::Remove { path, .. } if path.last().is_some_and(Segment::is_index))
    }

    /// Returns the change that undoes this one.
    ///
    /// ```
    /// # use confluence::{diff::Change, doc::Value, path};
    /// let add = Change::Add { path: path!("x"), value: Value::Int(1) };
    /// assert_eq!(add.inverse(), Change::Remove { path: path!("x"), prev: Value::Int(1) });
    /// ```
    pub fn inverse(&self) -> Change {
        match self {
            Change::Add { path, value } => Change::Remove {
                path: path.clone(),
                prev: value.clone(),
            },
            Change::Remove { path, prev } => Change::Add {
                path: path.clone(),
                value: prev.clone(),
            },
            Change::Replace { path, prev, value } => Change::Replace {
                path: path.clone(),
                prev: value.clone(),
                value: prev.clone(),
            },
        }
    }

    /// Returns a copy of this change targeting `path` instead.
    pub fn with_path(&self, path: PathBuf) -> Change {
        match self {
            Change::Add { value, .. } => Change::Add {
                path,
                value: value.clone(),
            },
            Change::Remove { prev, .. } => Change::Remove {
                path,
                prev: prev.clone(),
            },
            Change::Replace { prev, value, .. } => Change::Replace {
                path,
                prev: prev.clone(),
                value: value.clone(),
            },
        }
    }
}

/// An ordered list of changes transforming one document into another.
///
/// Order matters for list edits: each index-based entry is interpreted
/// against the document as left by the entries before it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diff {
    changes: Vec<Change>,
}

impl Diff {
    /// Creates an empty diff
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }

    /// Number of change entries
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Returns true if the diff changes nothing
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Appends a change entry
    pub fn push(&mut self, change: Change) {
        self.changes.push(change);
    }

    /// The change entries in application order
    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    /// Iterates the change entries in application order
    pub fn iter(&self) -> std::slice::Iter<'_, Change> {
        self.changes.iter()
    }

    /// Consumes the diff, returning its entries
    pub fn into_changes(self) -> Vec<Change> {
        self.changes
    }

    /// Returns the diff that undoes this one.
    ///
    /// Entries are inverted and applied in reverse order, so
    /// `patch(patch(O, d), d.inverse())` restores `O`.
    pub fn inverse(&self) -> Diff {
        self.changes.iter().rev().map(Change::inverse).collect()
    }
}

impl From<Vec<Change>> for Diff {
    fn from(changes: Vec<Change>) -> Self {
        Diff { changes }
    }
}

impl FromIterator<Change> for Diff {
    fn from_iter<I: IntoIterator<Item = Change>>(iter: I) -> Self {
        Diff {
            changes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Diff {
    type Item = Change;
    type IntoIter = std::vec::IntoIter<Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diff {
    type Item = &'a Change;
    type IntoIter = std::slice::Iter<'a, Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.iter()
    }
}
