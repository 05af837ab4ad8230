//! Document transformations.
//!
//! The [`Transformer`] carries [`Options`] and a [`Diagnostics`] sink and
//! exposes every transformation as a method. The free functions in this
//! module ([`union`], [`normalize`], [`fold`], [`expand`], [`find`]) use the
//! default options and report to `tracing`.
//!
//! No transformation mutates its input. Apart from the empty-document
//! short-circuits of [`Transformer::union`], every result is freshly built,
//! so inputs can be shared freely across threads.
//!
//! # Depth limit
//!
//! Merge, normalize and fold recurse once per nesting level and fail with
//! [`TransformError::DepthExceeded`] past [`Options::max_depth`].
//! [`expand`] and [`find`] are iterative and have no limit.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use docshape::{ConflictPolicy, NoopDiagnostics, Options, Transformer, doc::Doc};
//!
//! let transformer = Transformer::new(
//!     Options::default().with_conflict_policy(ConflictPolicy::FirstWins),
//! )
//! .with_diagnostics(Arc::new(NoopDiagnostics));
//!
//! let first = Doc::new().with("a", 1);
//! let second = Doc::new().with("a", 2);
//! let merged = transformer.union(&first, &second)?;
//! assert_eq!(merged.get_as::<i32>("a"), Some(1));
//! # Ok::<(), docshape::Error>(())
//! ```

use std::sync::Arc;

use crate::{
    diagnostics::{Diagnostics, TracingDiagnostics},
    doc::Doc,
};

pub mod config;
pub mod errors;
mod expand;
mod fold;
mod merge;
mod normalize;
mod search;
mod trail;

pub use config::{ConflictPolicy, DEFAULT_MAX_DEPTH, ListFoldMode, Options};
pub use errors::TransformError;
pub use expand::expand;
pub use search::find;

/// Applies document transformations with a fixed set of options.
///
/// Cloning is cheap; the diagnostics sink is shared.
#[derive(Debug, Clone)]
pub struct Transformer {
    options: Options,
    diagnostics: Arc<dyn Diagnostics>,
}

impl Transformer {
    /// Creates a transformer reporting to [`TracingDiagnostics`].
    pub fn new(options: Options) -> Self {
        Self {
            options,
            diagnostics: Arc::new(TracingDiagnostics),
        }
    }

    /// Replaces the diagnostics sink.
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Returns the options in effect.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Returns the diagnostics sink.
    pub fn diagnostics(&self) -> &Arc<dyn Diagnostics> {
        &self.diagnostics
    }
}

impl Default for Transformer {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

/// Merges two documents with the default options. See [`Transformer::union`].
///
/// ```
/// use docshape::{doc::Doc, union};
///
/// let merged = union(&Doc::new().with("a", 1), &Doc::new().with("b", 2))?;
/// assert_eq!(merged, Doc::new().with("a", 1).with("b", 2));
/// # Ok::<(), docshape::Error>(())
/// ```
pub fn union(first: &Doc, second: &Doc) -> crate::Result<Doc> {
    Ok(Transformer::default().union(first, second)?.into_owned())
}

/// Normalizes lists with the default options. See [`Transformer::normalize`].
pub fn normalize(doc: &Doc) -> crate::Result<Doc> {
    Transformer::default().normalize(doc)
}

/// Folds a flat record with the default options. See [`Transformer::fold`].
pub fn fold(flat: &Doc) -> crate::Result<Doc> {
    Transformer::default().fold(flat)
}
