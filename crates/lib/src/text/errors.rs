//! Error types for text operations.

use thiserror::Error;

/// Structured error types for text edit application.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TextError {
    /// An edit reaches past the end of the text it is applied to
    #[error("Text edit at {offset} removing {to_remove} is out of range for length {len}")]
    OffsetOutOfRange {
        offset: usize,
        to_remove: usize,
        len: usize,
    },
}

impl TextError {
    /// Check if this error is an out-of-range edit
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, TextError::OffsetOutOfRange { .. })
    }
}

impl From<TextError> for crate::Error {
    fn from(err: TextError) -> Self {
        crate::Error::Text(err)
    }
}
