//! Character-level text edits and three-way text merging.
//!
//! A [`TextOp`] removes a run of characters at an offset and inserts a
//! string in its place. Offsets and lengths count `char`s, not bytes. Lists of
//! ops produced by [`diff`] are ascending and non-overlapping, all expressed
//! against the same base text.
//!
//! [`merge`] combines two independent edits of one ancestor string: it
//! applies our edits, then their edits rebased with [`transform`] so they
//! land on the right characters of our result.
//!
//! ```
//! use confluence::text;
//!
//! let merged = text::merge("pewpew", "pewpew bang", "powpow")?;
//! assert_eq!(merged, "powpow bang");
//! # Ok::<(), confluence::text::TextError>(())
//! ```

use dissimilar::Chunk;
use serde::{Deserialize, Serialize};
use tracing::trace;

pub mod errors;
pub mod transform;

pub use errors::TextError;
pub use transform::transform;

/// A single text edit: remove `to_remove` chars at `offset`, then insert
/// `to_insert` there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextOp {
    pub offset: usize,
    pub to_remove: usize,
    pub to_insert: String,
}

impl TextOp {
    /// An empty edit at `offset`
    pub fn at(offset: usize) -> Self {
        Self {
            offset,
            ..Self::default()
        }
    }

    /// Removes `to_remove` chars at `offset`
    pub fn delete(offset: usize, to_remove: usize) -> Self {
        Self {
            offset,
            to_remove,
            to_insert: String::new(),
        }
    }

    /// Inserts `text` at `offset`
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self {
            offset,
            to_remove: 0,
            to_insert: text.into(),
        }
    }

    /// Returns true if the edit changes nothing
    pub fn is_noop(&self) -> bool {
        self.to_remove == 0 && self.to_insert.is_empty()
    }

    /// Number of chars inserted
    pub fn insert_len(&self) -> usize {
        self.to_insert.chars().count()
    }

    /// Offset one past the last removed char
    pub fn end(&self) -> usize {
        self.offset + self.to_remove
    }

    /// Applies this edit to `text`.
    pub fn apply(&self, text: &str) -> Result<String, TextError> {
        let len = text.chars().count();
        if self.end() > len {
            return Err(TextError::OffsetOutOfRange {
                offset: self.offset,
                to_remove: self.to_remove,
                len,
            });
        }

        let start = byte_offset(text, self.offset);
        let end = byte_offset(text, self.end());
        let mut out = String::with_capacity(text.len() - (end - start) + self.to_insert.len());
        out.push_str(&text[..start]);
        out.push_str(&self.to_insert);
        out.push_str(&text[end..]);
        Ok(out)
    }
}

fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices().nth(chars).map_or(text.len(), |(i, _)| i)
}

/// Computes the edits that turn `before` into `after`.
///
/// Adjacent deletions and insertions are folded into one op, so the result
/// alternates strictly with unchanged runs.
pub fn diff(before: &str, after: &str) -> Vec<TextOp> {
    let mut ops = Vec::new();
    let mut pending: Option<TextOp> = None;
    let mut pos = 0;

    for chunk in dissimilar::diff(before, after) {
        match chunk {
            Chunk::Equal(text) => {
                ops.extend(pending.take());
                pos += text.chars().count();
            }
            Chunk::Delete(text) => {
                let n = text.chars().count();
                pending.get_or_insert_with(|| TextOp::at(pos)).to_remove += n;
                pos += n;
            }
            Chunk::Insert(text) => {
                pending
                    .get_or_insert_with(|| TextOp::at(pos))
                    .to_insert
                    .push_str(text);
            }
        }
    }
    ops.extend(pending);
    ops
}

/// Applies a list of ascending, non-overlapping edits to `text`.
///
/// All offsets refer to `text` as given; ops are applied back to front so
/// earlier offsets stay valid.
pub fn apply_all(text: &str, ops: &[TextOp]) -> Result<String, TextError> {
    let mut out = text.to_string();
    for op in ops.iter().rev() {
        out = op.apply(&out)?;
    }
    Ok(out)
}

/// Three-way merge of two edits of `ancestor`.
///
/// When both sides insert different text at the same offset, the
/// lexicographically smaller insertion comes first, so the result does not
/// depend on which side is called "ours". Identical insertions at the same
/// offset are kept once.
pub fn merge(ancestor: &str, ours: &str, theirs: &str) -> Result<String, TextError> {
    let ours_ops = diff(ancestor, ours);
    let theirs_ops = diff(ancestor, theirs);
    let rebased = transform(&theirs_ops, &ours_ops, ancestor);
    trace!(
        ours = ours_ops.len(),
        theirs = theirs_ops.len(),
        rebased = rebased.len(),
        "merging text"
    );
    apply_all(ours, &rebased)
}
