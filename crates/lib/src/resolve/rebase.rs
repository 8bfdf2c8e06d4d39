//! Index rebasing across sequence edits.

use crate::{
    diff::Change,
    doc::{PathBuf, Segment},
};

/// Moves `path` from ancestor coordinates to coordinates valid after
/// `applied` has been patched.
///
/// Only sequence insertions and removals move anything: an insertion at `i`
/// pushes indices at or after `i` up by one, and a removal at `i` pulls
/// indices after `i` down by one. A path through the removed element itself
/// is left alone; it conflicts with the removal and is settled there.
pub(crate) fn rebase<'a>(path: &mut PathBuf, applied: impl IntoIterator<Item = &'a Change>) {
    for change in applied {
        let insertion = change.is_insertion();
        if !insertion && !change.is_sequence_removal() {
            continue;
        }
        let Some((Segment::Index(at), list)) = change.path().split_last() else {
            continue;
        };
        if path.len() <= list.len() || !path.starts_with(list) {
            continue;
        }
        let depth = list.len();
        let Some(Segment::Index(index)) = path.segments().get(depth).cloned() else {
            continue;
        };

        let shifted = match insertion {
            true if index >= *at => index + 1,
            false if index > *at => index - 1,
            _ => continue,
        };
        path.set_segment(depth, Segment::Index(shifted));
    }
}
