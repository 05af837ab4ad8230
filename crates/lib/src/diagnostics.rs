//! Observer hooks for lossy transformations.
//!
//! Several operations silently discard data: the merger drops conflicting
//! keys, the normalizer drops values it cannot represent, the folder ignores
//! non-document list elements, and path queries turn failures into `None`.
//! None of these are errors, but each one is reported to a [`Diagnostics`]
//! implementation so callers can observe it.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use docshape::{CollectingDiagnostics, Options, Transformer, doc::Doc};
//!
//! let diagnostics = Arc::new(CollectingDiagnostics::default());
//! let transformer = Transformer::new(Options::default()).with_diagnostics(diagnostics.clone());
//!
//! let first = Doc::new().with("a", 1);
//! let second = Doc::new().with("a", 2);
//! let merged = transformer.union(&first, &second)?;
//! assert!(merged.is_empty());
//! assert_eq!(diagnostics.events().len(), 1);
//! # Ok::<(), docshape::Error>(())
//! ```

use std::{fmt, fmt::Debug, sync::Mutex};

use crate::query::QueryError;

/// Why a field was left out of a transformation's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropReason {
    /// Both merge inputs held the key and they were not both documents.
    Conflict,
    /// The value is outside the scalar allow-list and is not a container.
    UnrecognizedValue { type_name: &'static str },
    /// A list element that is not a document was skipped while folding.
    NonDocumentElement { index: usize, type_name: &'static str },
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::Conflict => write!(f, "conflicting values"),
            DropReason::UnrecognizedValue { type_name } => {
                write!(f, "unrecognized value kind '{type_name}'")
            }
            DropReason::NonDocumentElement { index, type_name } => {
                write!(f, "non-document element {index} of kind '{type_name}'")
            }
        }
    }
}

/// A single recorded diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEvent {
    /// A field was dropped at `path` (dot-joined from the operation's root).
    FieldDropped { path: String, reason: DropReason },
    /// A path query failed and was converted to an absent result.
    QueryFailed { expression: String, error: String },
}

/// Receiver for diagnostics emitted by transformations.
///
/// All methods have empty default bodies so implementors only override what
/// they care about.
pub trait Diagnostics: Send + Sync + Debug {
    /// Called whenever a field is left out of an output document.
    fn field_dropped(&self, _path: &str, _reason: &DropReason) {}

    /// Called when a path query fails.
    fn query_failed(&self, _expression: &str, _error: &QueryError) {}
}

/// Default diagnostics sink emitting `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn field_dropped(&self, path: &str, reason: &DropReason) {
        tracing::debug!(path, reason = %reason, "Field dropped");
    }

    fn query_failed(&self, expression: &str, error: &QueryError) {
        tracing::error!(expression, error = %error, "Error during path query");
    }
}

/// Diagnostics sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {}

/// Diagnostics sink recording every event in memory.
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl CollectingDiagnostics {
    /// Returns a snapshot of the recorded events, oldest first.
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.lock().clone()
    }

    /// Returns the paths of all dropped fields, oldest first.
    pub fn dropped_paths(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|event| match event {
                DiagnosticEvent::FieldDropped { path, .. } => Some(path.clone()),
                DiagnosticEvent::QueryFailed { .. } => None,
            })
            .collect()
    }

    /// Discards all recorded events.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<DiagnosticEvent>> {
        // A poisoned lock still holds a usable event list.
        self.events
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn field_dropped(&self, path: &str, reason: &DropReason) {
        self.lock().push(DiagnosticEvent::FieldDropped {
            path: path.to_string(),
            reason: reason.clone(),
        });
    }

    fn query_failed(&self, expression: &str, error: &QueryError) {
        self.lock().push(DiagnosticEvent::QueryFailed {
            expression: expression.to_string(),
            error: error.to_string(),
        });
    }
}
