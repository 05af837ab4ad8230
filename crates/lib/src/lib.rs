//!
//! Docshape: structural transformations for schemaless documents.
//!
//! Documents are ordered maps from string keys to [`doc::Value`]s. This crate
//! reshapes them without ever mutating its inputs.
//!
//! ## Core Concepts
//!
//! * **Documents (`doc::Doc`)**: Insertion-ordered, structurally compared maps with recursive values.
//! * **Paths (`doc::Path`)**: Dot-separated field paths, normalized on construction.
//! * **Transformer (`Transformer`)**: Applies transformations with fixed [`Options`] and a diagnostics sink:
//!     * **Union**: Deep merge of two or more documents with a configurable [`ConflictPolicy`].
//!     * **Normalize**: Collapses every list field to one representative value.
//!     * **Fold**: Turns a flat record with dotted keys and list fields into a nested document.
//!     * **Apply**: Evaluates a path expression against a document.
//! * **Expand / Find**: Build a nested document from a path, and search a document tree for an attribute.
//! * **Diagnostics (`diagnostics::Diagnostics`)**: Observes every value a lossy transformation discards.

pub mod diagnostics;
pub mod doc;
pub mod extract;
pub mod ops;
pub mod query;

pub use diagnostics::{
    CollectingDiagnostics, DiagnosticEvent, Diagnostics, DropReason, NoopDiagnostics,
    TracingDiagnostics,
};
pub use ops::{
    ConflictPolicy, ListFoldMode, Options, TransformError, Transformer, expand, find, fold,
    normalize, union,
};
pub use query::{PathQuery, QueryError, SimplePathQuery, apply};

/// Result type used throughout the Docshape library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Docshape library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured document access errors from the doc module
    #[error(transparent)]
    Doc(doc::DocError),

    /// Structured transformation errors from the ops module
    #[error(transparent)]
    Transform(ops::TransformError),

    /// Structured path query errors from the query module
    #[error(transparent)]
    Query(query::QueryError),

    /// Unparseable object identifiers
    #[error(transparent)]
    ObjectId(#[from] doc::ObjectIdError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Doc(_) => "doc",
            Error::Transform(_) => "ops",
            Error::Query(_) => "query",
            Error::ObjectId(_) => "object_id",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a value was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Doc(doc_err) => doc_err.is_not_found_error(),
            Error::Query(query_err) => query_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error indicates two values could not be merged.
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::Transform(transform_err) => transform_err.is_conflict(),
            _ => false,
        }
    }

    /// Check if this error is type-related.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Doc(doc_err) => doc_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error is transformation-related.
    pub fn is_transform_error(&self) -> bool {
        matches!(self, Error::Transform(_))
    }

    /// Check if this error is a malformed sequence during normalization.
    pub fn is_malformed_sequence(&self) -> bool {
        match self {
            Error::Transform(transform_err) => transform_err.is_malformed_sequence(),
            _ => false,
        }
    }

    /// Check if this error is a document exceeding the nesting limit.
    pub fn is_depth_exceeded(&self) -> bool {
        match self {
            Error::Transform(transform_err) => transform_err.is_depth_exceeded(),
            _ => false,
        }
    }

    /// Check if this error is a serialization failure.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
