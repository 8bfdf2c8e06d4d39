//!
//! Confluence: structural diff, patch and three-way merge for JSON-like documents.
//!
//! Two copies of a document edited independently from a common ancestor can be
//! brought back together: each side's edits are captured as a [`diff::Diff`],
//! the two diffs are resolved into one, and the result is patched onto the
//! ancestor.
//!
//! ## Core Concepts
//!
//! * **Values (`doc::Value`)**: A closed tree of maps, lists and scalars. `Absent`
//!   is distinct from `Null` and marks a key that is not present.
//! * **Paths (`doc::Path`)**: The keys and indices leading from the root to a node.
//!   Two paths *overlap* when one is a prefix of the other.
//! * **Diffs (`diff::Diff`)**: Ordered lists of `add`/`remove`/`replace` entries.
//!   Diffing recurses into matching containers so edits to disjoint subtrees land
//!   on disjoint paths.
//! * **Resolve (`resolve::resolve`)**: Rebases one diff on top of another,
//!   settling overlapping entries with a default policy or a pluggable
//!   `resolve::ConflictResolver`.
//! * **Text (`text`)**: Character-level edits and the transform that lets two
//!   concurrent string edits converge.
//!
//! Every operation except [`diff::patch`] takes its inputs by shared reference
//! and returns freshly owned results.

pub mod diff;
pub mod doc;
pub mod resolve;
pub mod text;

/// Result type used throughout the Confluence library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Confluence library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured value errors from the doc module
    #[error(transparent)]
    Doc(doc::DocError),

    /// Path parsing errors from the doc module
    #[error(transparent)]
    Path(doc::PathError),

    /// Structured patch errors from the diff module
    #[error(transparent)]
    Patch(diff::PatchError),

    /// Structured text edit errors from the text module
    #[error(transparent)]
    Text(text::TextError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Doc(_) | Error::Path(_) => "doc",
            Error::Patch(_) => "diff",
            Error::Text(_) => "text",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a path did not resolve.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Patch(patch_err) => patch_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error indicates a value the engine cannot represent.
    pub fn is_unsupported(&self) -> bool {
        match self {
            Error::Doc(doc_err) => doc_err.is_unsupported(),
            _ => false,
        }
    }

    /// Check if this error indicates malformed input (a bad path or an
    /// out-of-range text edit).
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Error::Path(_) => true,
            Error::Text(text_err) => text_err.is_out_of_range(),
            Error::Patch(patch_err) => patch_err.is_type_mismatch(),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}
