//! Error types for document values and paths.
//!
//! Values handed to the engine are plain data, so the only failure a value
//! itself can cause is being something the engine cannot represent faithfully
//! (for example a non-finite float, which has no JSON form and is not equal to
//! itself).

use thiserror::Error;

/// Structured error types for document value operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DocError {
    /// A value kind the engine cannot clone, diff or patch.
    #[error("Unsupported value at {path}: {reason}")]
    UnsupportedValue { path: String, reason: String },
}

impl DocError {
    /// Check if this error is an unsupported value
    pub fn is_unsupported(&self) -> bool {
        matches!(self, DocError::UnsupportedValue { .. })
    }

    /// Get the path of the offending value, if known
    pub fn path(&self) -> Option<&str> {
        match self {
            DocError::UnsupportedValue { path, .. } => Some(path),
        }
    }
}

impl From<DocError> for crate::Error {
    fn from(err: DocError) -> Self {
        crate::Error::Doc(err)
    }
}
