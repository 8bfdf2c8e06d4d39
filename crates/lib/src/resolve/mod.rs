//! Three-way merge of concurrent diffs.
//!
//! Given two diffs computed from the same ancestor, [`resolve`] produces the
//! diff that carries the second side's edits on top of the first:
//!
//! ```text
//! patch(patch(O, ours), resolve(ours, theirs))
//! ```
//!
//! holds both sides' intents wherever they do not touch the same node.
//!
//! # Conflicts
//!
//! Two entries conflict when their paths overlap (one is a prefix of the
//! other). A sequence insertion is an exception: it names a gap between
//! elements rather than a node, so it only conflicts with an entry on the
//! list itself or one of its ancestors. Concurrent appends therefore never
//! conflict; ours are placed first.
//!
//! Entries of `theirs` that are identical to an entry of `ours` are already
//! applied and are dropped.
//!
//! For every other conflicted entry the default policy is:
//!
//! - Same path, or our path is an ancestor: ours wins and their entry is
//!   dropped.
//! - Their path is an ancestor: the shallower edit wins, so their entry
//!   replaces whatever ours left behind.
//!
//! A [`ConflictResolver`] can override the outcome pair by pair; see
//! [`TextMerge`] for merging concurrent string edits.
//!
//! # Usage
//!
//! ```
//! use confluence::doc::Value;
//! use confluence::resolve::{TextMerge, merge};
//! use serde_json::json;
//!
//! let o = Value::from(json!({"x": [], "z": "pewpew"}));
//! let a = Value::from(json!({"x": ["a"], "z": "pewpew bang"}));
//! let b = Value::from(json!({"x": ["b"], "z": "powpow"}));
//!
//! let merged = merge(&o, &a, &b, &mut TextMerge)?;
//! assert_eq!(merged, Value::from(json!({"x": ["a", "b"], "z": "powpow bang"})));
//! # Ok::<(), confluence::Error>(())
//! ```

use tracing::{debug, trace, warn};

use crate::{
    diff::{Change, Diff, apply_change, diff, patch},
    doc::{PathBuf, Value, deep_clone},
};

pub mod conflict;
pub mod resolver;

mod rebase;

pub use conflict::{Conflict, Overlap};
pub use resolver::{ConflictResolver, FirstWins, TextMerge};

/// Merges `theirs` on top of `ours` with the default policy.
///
/// Equivalent to [`resolve_with`] and [`FirstWins`].
pub fn resolve(ours: &Diff, theirs: &Diff) -> Diff {
    resolve_with(ours, theirs, &mut FirstWins)
}

/// Merges `theirs` on top of `ours`, consulting `resolver` for every
/// conflicting pair of entries.
///
/// The result is meant to be patched onto the ancestor after `ours`. Neither
/// input diff is modified.
pub fn resolve_with<R>(ours: &Diff, theirs: &Diff, resolver: &mut R) -> Diff
where
    R: ConflictResolver + ?Sized,
{
    // Entries of ours matched by an identical entry of theirs; they no longer
    // move indices for the entries of theirs that follow
    let mut consumed = vec![false; ours.len()];
    let mut merged = Diff::new();

    for entry in theirs {
        if let Some(i) = ours
            .iter()
            .enumerate()
            .position(|(i, candidate)| !consumed[i] && candidate == entry)
        {
            trace!(path = %entry.path(), "dropping entry present on both sides");
            consumed[i] = true;
            continue;
        }

        let mut path = entry.path().to_path_buf();
        rebase::rebase(
            &mut path,
            ours.iter()
                .zip(&consumed)
                .filter(|(_, consumed)| !**consumed)
                .map(|(change, _)| change),
        );

        let conflicting: Vec<&Change> = ours
            .iter()
            .filter(|candidate| conflicts(candidate, entry))
            .collect();
        if conflicting.is_empty() {
            if &*path != entry.path() {
                trace!(from = %entry.path(), to = %path, "rebased entry");
            }
            merged.push(entry.with_path(path));
            continue;
        }

        if let Some(change) = settle(entry, &conflicting, path, resolver) {
            merged.push(change);
        }
    }

    debug!(
        ours = ours.len(),
        theirs = theirs.len(),
        merged = merged.len(),
        "resolved diffs"
    );
    merged
}

/// Full three-way merge of documents.
///
/// Diffs both sides against `ancestor`, resolves the diffs and patches the
/// result onto a copy of `ancestor`. None of the inputs are modified.
pub fn merge<R>(ancestor: &Value, ours: &Value, theirs: &Value, resolver: &mut R) -> crate::Result<Value>
where
    R: ConflictResolver + ?Sized,
{
    ours.validate()?;
    theirs.validate()?;

    let ours_diff = diff(ancestor, ours);
    let theirs_diff = diff(ancestor, theirs);
    let rebased = resolve_with(&ours_diff, &theirs_diff, resolver);

    let mut out = deep_clone(ancestor)?;
    patch(&mut out, &ours_diff)?;
    patch(&mut out, &rebased)?;
    Ok(out)
}

/// Returns true if the two entries touch overlapping parts of the document.
fn conflicts(ours: &Change, theirs: &Change) -> bool {
    let gap_conflicts = |insertion: &Change, other: &Change| {
        insertion
            .path()
            .parent()
            .is_some_and(|list| list.starts_with(other.path()))
    };

    if ours.is_insertion() {
        gap_conflicts(ours, theirs)
    } else if theirs.is_insertion() {
        gap_conflicts(theirs, ours)
    } else {
        ours.path().overlaps(theirs.path())
    }
}

/// Decides what, if anything, their conflicted entry turns into.
fn settle<R>(theirs: &Change, conflicting: &[&Change], path: PathBuf, resolver: &mut R) -> Option<Change>
where
    R: ConflictResolver + ?Sized,
{
    let target = theirs.path();
    // Deepest of our entries at or above their path
    let covering = conflicting
        .iter()
        .rev()
        .find(|ours| target.starts_with(ours.path()));

    let current = if theirs.is_insertion() {
        Value::Absent
    } else if let Some(ours) = covering {
        target
            .strip_prefix(ours.path())
            .and_then(|relative| ours.value().get_path(relative))
            .cloned()
            .unwrap_or_default()
    } else {
        // Only nested edits of ours: replay them inside the ancestor value
        let mut current = theirs.prev().clone();
        for ours in conflicting {
            let Some(relative) = ours.path().strip_prefix(target) else {
                continue;
            };
            if let Err(err) = apply_change(&mut current, &ours.with_path(relative.to_path_buf())) {
                warn!(path = %ours.path(), "could not replay nested change: {err}");
            }
        }
        current
    };

    let mut merged = if covering.is_some() {
        current.clone()
    } else {
        theirs.value().clone()
    };

    for ours in conflicting {
        let mut conflict = Conflict::new(ours, theirs, &current, merged.clone());
        let accepted = resolver.resolve(&mut conflict);
        debug!(
            path = %target,
            ours = ours.kind(),
            theirs = theirs.kind(),
            overlap = ?conflict.overlap(),
            accepted,
            "conflict"
        );
        if accepted {
            merged = conflict.merged;
        }
    }

    match (current, merged) {
        (Value::Absent, Value::Absent) => None,
        (Value::Absent, value) => Some(Change::Add { path, value }),
        (prev, Value::Absent) => Some(Change::Remove { path, prev }),
        (prev, value) if prev == value => None,
        (prev, value) => Some(Change::Replace { path, prev, value }),
    }
}
