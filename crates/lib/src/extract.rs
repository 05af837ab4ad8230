//! Small extraction helpers used around the core transformations.

use crate::doc::{Doc, DocError, ObjectId};

/// Field holding a document's identifier.
pub const ID_FIELD: &str = "_id";

/// Reads the `_id` of every document, in order.
///
/// Fails on the first document without an identifier, or whose identifier is
/// not an [`ObjectId`].
///
/// ```
/// use docshape::{doc::{Doc, ObjectId}, extract::document_ids};
///
/// let id = ObjectId::from_bytes([7; 12]);
/// assert_eq!(document_ids(&[Doc::new().with("_id", id)])?, vec![id]);
/// assert!(document_ids(&[Doc::new().with("name", "x")]).is_err());
/// # Ok::<(), docshape::Error>(())
/// ```
pub fn document_ids(docs: &[Doc]) -> crate::Result<Vec<ObjectId>> {
    docs.iter()
        .enumerate()
        .map(|(index, doc)| -> crate::Result<ObjectId> {
            let value = doc
                .get(ID_FIELD)
                .ok_or(DocError::MissingIdentifier { index })?;
            Ok(ObjectId::try_from(value)?)
        })
        .collect()
}

/// Collapses doubled separators in an escaped path string.
///
/// If the input contains any backslash, every `\\` becomes `\` and slashes
/// are left alone. Otherwise every `//` becomes `/`.
///
/// ```
/// use docshape::extract::collapse_escapes;
///
/// assert_eq!(collapse_escapes(r"C:\\data\\x"), r"C:\data\x");
/// assert_eq!(collapse_escapes("a//b"), "a/b");
/// assert_eq!(collapse_escapes(r"a\b//c"), r"a\b//c");
/// assert_eq!(collapse_escapes(""), "");
/// ```
pub fn collapse_escapes(input: &str) -> String {
    if input.contains('\\') {
        input.replace(r"\\", r"\")
    } else {
        input.replace("//", "/")
    }
}
