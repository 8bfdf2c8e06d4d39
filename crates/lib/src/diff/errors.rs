//! Error types for applying diffs.

use thiserror::Error;

/// Structured error types for patch application.
///
/// A failed patch usually means the diff was computed against a different
/// base than the document it is applied to, or an unresolved conflict was
/// passed to [`patch`](crate::diff::patch). The target document may have been
/// partially patched and should be discarded.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PatchError {
    /// A change entry's path does not resolve in the target document
    #[error("Path not found: {path} - {reason}")]
    PathNotFound { path: String, reason: String },

    /// An `Add` entry would have to descend into or add to a scalar, or use
    /// a key on a list (or an index on a map)
    #[error("Type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl PatchError {
    /// Check if this error indicates a missing path
    pub fn is_not_found(&self) -> bool {
        matches!(self, PatchError::PathNotFound { .. })
    }

    /// Check if this error indicates a container of the wrong kind
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, PatchError::TypeMismatch { .. })
    }

    /// Get the path of the failing change entry
    pub fn path(&self) -> &str {
        match self {
            PatchError::PathNotFound { path, .. } | PatchError::TypeMismatch { path, .. } => path,
        }
    }
}

impl From<PatchError> for crate::Error {
    fn from(err: PatchError) -> Self {
        crate::Error::Patch(err)
    }
}
