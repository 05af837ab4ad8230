//! Attribute search.

use crate::doc::{Doc, Value};

/// Finds the first document holding `key` mapped to the string `value`.
///
/// The search is depth-first and pre-order: `doc` itself is checked first,
/// then each sub-document in key order, fully, before the next one. Only
/// text values match; a number whose text form equals `value` does not.
/// Documents inside lists are not searched.
///
/// The returned reference points into `doc`. The walk uses an explicit stack,
/// so deep documents cannot overflow the call stack.
///
/// ```
/// use docshape::{doc::Doc, find};
///
/// let doc = Doc::new().with("name", "A").with("child", Doc::new().with("name", "B"));
/// assert_eq!(find(&doc, "name", "B"), Some(&Doc::new().with("name", "B")));
/// assert_eq!(find(&doc, "name", "C"), None);
/// ```
pub fn find<'d>(doc: &'d Doc, key: &str, value: &str) -> Option<&'d Doc> {
    let mut stack = vec![doc];

    while let Some(current) = stack.pop() {
        if current.get(key).and_then(Value::as_text) == Some(value) {
            return Some(current);
        }
        stack.extend(current.values().rev().filter_map(Value::as_doc));
    }

    None
}
