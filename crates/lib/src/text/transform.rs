//! Rebasing text edits over concurrent edits.

use std::cmp::Ordering;

use super::TextOp;

/// Rebases `ops` (made against `base`) so they apply after `by` (also made
/// against `base`).
///
/// Both lists must be ascending and non-overlapping. Characters that `by`
/// already removed are not removed again; an op that straddles a removal is
/// split around it. Insertions at the same offset are ordered by comparing
/// the inserted strings, and an insertion identical to one in `by` at the
/// same offset is dropped.
///
/// The result is ascending, expressed against `base` with `by` applied, and
/// clamped to that text's length.
pub fn transform(ops: &[TextOp], by: &[TextOp], base: &str) -> Vec<TextOp> {
    let mut out = Vec::with_capacity(ops.len());
    for op in ops {
        let mut pieces = vec![op.clone()];
        // Later edits first: they leave the offsets of earlier ones intact
        for other in by.iter().rev() {
            pieces = pieces
                .iter()
                .flat_map(|piece| transform_op(piece, other))
                .collect();
        }
        pieces.sort_by_key(|p| (p.offset, p.to_remove));
        out.extend(pieces);
    }

    let len = (base.chars().count() + by.iter().map(TextOp::insert_len).sum::<usize>())
        .saturating_sub(by.iter().map(|op| op.to_remove).sum::<usize>());
    for op in &mut out {
        op.offset = op.offset.min(len);
        op.to_remove = op.to_remove.min(len - op.offset);
    }
    out.retain(|op| !op.is_noop());
    out
}

/// Rebases a single op over a single concurrent op.
fn transform_op(op: &TextOp, by: &TextOp) -> Vec<TextOp> {
    let (ts, te) = (op.offset, op.end());
    let (bs, be) = (by.offset, by.end());
    let ins = by.insert_len();
    let shift = |p: usize| p - by.to_remove + ins;

    let mut pieces = Vec::with_capacity(2);
    if ts < bs && te > ts {
        pieces.push(TextOp::delete(ts, te.min(bs) - ts));
    }
    if te > be {
        let start = ts.max(be);
        pieces.push(TextOp::delete(shift(start), te - start));
    }

    if !op.to_insert.is_empty() {
        let at = if ts < bs {
            Some(ts)
        } else if ts == bs {
            if by.to_insert.is_empty() {
                Some(bs)
            } else {
                match op.to_insert.cmp(&by.to_insert) {
                    Ordering::Less => Some(bs),
                    Ordering::Greater => Some(bs + ins),
                    Ordering::Equal => None,
                }
            }
        } else if ts < be {
            Some(bs + ins)
        } else {
            Some(shift(ts))
        };

        if let Some(at) = at {
            match pieces.iter_mut().find(|p| p.offset == at) {
                Some(piece) => piece.to_insert.clone_from(&op.to_insert),
                None => pieces.push(TextOp::insert(at, op.to_insert.clone())),
            }
        }
    }

    pieces
}
