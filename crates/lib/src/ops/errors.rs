//! Error types for document transformations.
//!
//! Every failure here is local to one call; nothing is fatal to the caller.

use thiserror::Error;

/// Structured error types for document transformations.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// A sequence could not be reduced to a representative document
    #[error("Malformed sequence at '{path}': {reason}")]
    MalformedSequence { path: String, reason: String },

    /// Two values collided under [`ConflictPolicy::Error`](crate::ConflictPolicy::Error)
    #[error("Conflicting values at '{path}'")]
    Conflict { path: String },

    /// Input nesting went past the configured maximum depth
    #[error("Maximum depth {limit} exceeded at '{path}'")]
    DepthExceeded { limit: usize, path: String },
}

impl TransformError {
    /// Check if this error is a malformed sequence
    pub fn is_malformed_sequence(&self) -> bool {
        matches!(self, TransformError::MalformedSequence { .. })
    }

    /// Check if this error is a merge conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, TransformError::Conflict { .. })
    }

    /// Check if this error is a depth limit violation
    pub fn is_depth_exceeded(&self) -> bool {
        matches!(self, TransformError::DepthExceeded { .. })
    }

    /// Get the document path the error occurred at
    pub fn path(&self) -> &str {
        match self {
            TransformError::MalformedSequence { path, .. }
            | TransformError::Conflict { path }
            | TransformError::DepthExceeded { path, .. } => path,
        }
    }
}

impl From<TransformError> for crate::Error {
    fn from(err: TransformError) -> Self {
        crate::Error::Transform(err)
    }
}
