//! Document model.
//!
//! This module provides the tree type every transformation operates on. A
//! [`Doc`] is an insertion-ordered mapping from string keys to [`Value`]s.
//! Keys are unique; inserting an existing key replaces its value in place and
//! keeps its original position. Order matters because document text is
//! order-sensitive.
//!
//! Keys are taken literally: a key such as `"book.author"` is a single flat
//! key. Use [`Doc::get_path`] to walk nested documents.
//!
//! # Usage
//!
//! ```
//! use docshape::doc::{Doc, Path, Value};
//!
//! let doc = Doc::new()
//!     .with("name", "Asimov")
//!     .with("book", Doc::new().with("title", "Foundation"));
//!
//! assert_eq!(doc.get_as::<&str>("name"), Some("Asimov"));
//! assert_eq!(
//!     doc.get_path(&Path::new("book.title")),
//!     Some(&Value::from("Foundation"))
//! );
//! ```

use std::fmt;

use indexmap::IndexMap;

pub mod errors;
pub mod json;
pub mod object_id;
pub mod path;
pub mod value;

pub use errors::DocError;
pub use object_id::{ObjectId, ObjectIdError};
pub use path::Path;
pub use value::{Value, ValueKind, classify};

/// An ordered, string-keyed document.
///
/// # Examples
///
/// ```
/// # use docshape::doc::Doc;
/// let mut doc = Doc::new();
/// doc.insert("b", 2);
/// doc.insert("a", 1);
/// doc.insert("b", 3);
///
/// let keys: Vec<&str> = doc.keys().collect();
/// assert_eq!(keys, vec!["b", "a"]);
/// assert_eq!(doc.get_as::<i32>("b"), Some(3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Doc {
    fields: IndexMap<String, Value>,
}

impl Doc {
    /// Creates a new empty document
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Creates an empty document with room for `capacity` fields
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: IndexMap::with_capacity(capacity),
        }
    }

    /// Returns true if this document has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the number of top-level fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the document has a top-level field named `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Gets the value of a top-level field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Gets a top-level value with automatic type conversion using TryFrom
    ///
    /// Returns None if the key doesn't exist or the type doesn't match.
    pub fn get_as<'a, T>(&'a self, key: &str) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = DocError>,
    {
        let value = self.get(key)?;
        T::try_from(value).ok()
    }

    /// Gets a nested document stored under a top-level key
    pub fn get_doc(&self, key: &str) -> Option<&Doc> {
        self.get(key)?.as_doc()
    }

    /// Walks nested documents (and list indices) along `path`.
    ///
    /// Returns `None` for an empty path, a missing segment, or a segment
    /// that would have to pass through a scalar.
    pub fn get_path(&self, path: impl AsRef<Path>) -> Option<&Value> {
        let mut segments = path.as_ref().segments();
        let mut current = self.get(segments.next()?)?;

        for segment in segments {
            current = match current {
                Value::Doc(doc) => doc.get(segment)?,
                Value::List(list) => {
                    let index: usize = segment.parse().ok()?;
                    list.get(index)?
                }
                _ => return None,
            };
        }

        Some(current)
    }

    /// Sets a top-level field, returning the previous value if present.
    ///
    /// An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.fields.get_mut(key)
    }

    /// Removes a top-level field, returning its value if present.
    ///
    /// Later fields shift up to keep their relative order.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.shift_remove(key)
    }

    /// Returns a shallow copy of this document without the top-level `field`.
    ///
    /// Nested values are cloned as-is; only the first level is filtered.
    pub fn without(&self, field: &str) -> Doc {
        self.iter()
            .filter(|(key, _)| *key != field)
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    /// Returns an iterator over all key-value pairs in insertion order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns an iterator over all keys in insertion order
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns an iterator over all values in insertion order
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &Value> {
        self.fields.values()
    }

    /// Returns the first field, if any
    pub fn first(&self) -> Option<(&str, &Value)> {
        self.fields.first().map(|(k, v)| (k.as_str(), v))
    }

    /// Builder method to set a value and return self
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder method to set a list value
    pub fn with_list<T: Into<Value>>(
        self,
        key: impl Into<String>,
        items: impl IntoIterator<Item = T>,
    ) -> Self {
        let list: Vec<Value> = items.into_iter().map(Into::into).collect();
        self.with(key, Value::List(list))
    }
}

/// Documents are equal when they hold the same fields in the same order.
impl PartialEq for Doc {
    fn eq(&self, other: &Self) -> bool {
        self.fields.len() == other.fields.len() && self.fields.iter().eq(other.fields.iter())
    }
}

impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Doc {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut doc = Doc::new();
        doc.extend(iter);
        doc
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Doc {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Doc {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
