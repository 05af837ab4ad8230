//! Path expansion: a dotted key plus a leaf value becomes a nested document.

use crate::doc::{Doc, Path, Value};

/// Builds the minimal nested document holding `value` at `path`.
///
/// Returns `None` when the path has no segments. A single-segment path
/// gives a one-key flat document. Segment names are not validated beyond
/// being non-empty; collisions are a merge concern.
///
/// The nesting is built from the leaf outward, so arbitrarily long paths
/// do not recurse.
///
/// ```
/// use docshape::{doc::Doc, expand};
///
/// let doc = expand("book.author", "Asimov").unwrap();
/// assert_eq!(doc, Doc::new().with("book", Doc::new().with("author", "Asimov")));
///
/// assert!(expand("", 1).is_none());
/// ```
pub fn expand(path: impl Into<Path>, value: impl Into<Value>) -> Option<Doc> {
    let path = path.into();
    let mut segments = path.segments().rev();
    let leaf = segments.next()?;

    let mut doc = Doc::new().with(leaf, value);
    for segment in segments {
        doc = Doc::new().with(segment, doc);
    }
    Some(doc)
}
