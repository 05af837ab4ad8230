//! Transformation options.
//!
//! Options are plain data and can be loaded from any serde format:
//!
//! ```
//! use docshape::{ConflictPolicy, ListFoldMode, Options};
//!
//! let options: Options = serde_json::from_str(r#"{"conflict_policy": "second_wins"}"#)?;
//! assert_eq!(options.conflict_policy, ConflictPolicy::SecondWins);
//! assert_eq!(options.list_fold_mode, ListFoldMode::MergeElements);
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};

/// Default nesting limit for recursive transformations.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// What a merge does with a key both inputs hold when the two values are not
/// both documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    /// Neither value survives; the key is absent from the result.
    ///
    /// This is the long-standing behaviour and the default.
    #[default]
    DropOnConflict,

    /// The first document's value is kept, in the first document's position.
    FirstWins,

    /// The second document's value is kept. It is placed with the keys that
    /// only the second document holds, after all of the first document's keys.
    SecondWins,

    /// The merge fails with [`TransformError::Conflict`](crate::TransformError::Conflict).
    Error,
}

/// How the record folder treats list fields holding sub-records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ListFoldMode {
    /// Fold every document element and combine the results with an n-ary,
    /// order-independent merge, then store them as a one-element list.
    ///
    /// Lists without any document element are copied through unchanged.
    #[default]
    MergeElements,

    /// Union each folded element against the whole outer accumulator and keep
    /// only the last such result, wrapped in a one-element list.
    ///
    /// Kept for output compatibility with older folded documents.
    Legacy,
}

/// Options shared by all transformations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Conflict handling for merges.
    pub conflict_policy: ConflictPolicy,
    /// List handling for the record folder.
    pub list_fold_mode: ListFoldMode,
    /// Maximum nesting depth before a transformation fails with
    /// [`TransformError::DepthExceeded`](crate::TransformError::DepthExceeded).
    ///
    /// Depth counts keys: a top-level key is at depth 1, its children at
    /// depth 2. A limit of 1 therefore allows flat documents only, and a limit
    /// of 0 rejects every non-empty document passed to normalize or fold.
    /// Union only descends at shared keys, so it checks the limit there.
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            conflict_policy: ConflictPolicy::default(),
            list_fold_mode: ListFoldMode::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Options {
    /// Builder method to set the conflict policy
    pub fn with_conflict_policy(mut self, policy: ConflictPolicy) -> Self {
        self.conflict_policy = policy;
        self
    }

    /// Builder method to set the list fold mode
    pub fn with_list_fold_mode(mut self, mode: ListFoldMode) -> Self {
        self.list_fold_mode = mode;
        self
    }

    /// Builder method to set the maximum depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
