//! Error types for document access and conversion.

use thiserror::Error;

/// Structured error types for document access and conversion.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocError {
    /// A value did not have the expected type
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// A document in a batch had no `_id` field
    #[error("Document at index {index} has no identifier field")]
    MissingIdentifier { index: usize },

    /// JSON input could not be represented as a document
    #[error("Invalid document JSON: {reason}")]
    InvalidJson { reason: String },
}

impl DocError {
    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(self, DocError::TypeMismatch { .. })
    }

    /// Check if this error is a missing document identifier
    pub fn is_not_found_error(&self) -> bool {
        matches!(self, DocError::MissingIdentifier { .. })
    }

    /// Get the batch index if this error concerns one document of a batch
    pub fn index(&self) -> Option<usize> {
        match self {
            DocError::MissingIdentifier { index } => Some(*index),
            _ => None,
        }
    }
}

impl From<DocError> for crate::Error {
    fn from(err: DocError) -> Self {
        crate::Error::Doc(err)
    }
}
