//! Dot-notation paths into nested documents.
//!
//! A [`Path`] is a sequence of non-empty segments obtained by splitting a key
//! on `.`. Construction always normalizes: leading, trailing and repeated dots
//! are discarded, so `"book..author."` and `"book.author"` are the same path.
//! A path with no segments is representable, but every operation that
//! consumes a path treats it as absent.
//!
//! ```rust
//! use docshape::doc::Path;
//!
//! let path = Path::new("book.author");
//! assert_eq!(path.segments().collect::<Vec<_>>(), vec!["book", "author"]);
//!
//! let built = Path::default().push("book").push("author");
//! assert_eq!(built, path);
//! ```

use std::{fmt, str::FromStr};

fn normalize(input: &str) -> String {
    input
        .split('.')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

/// A normalized, dot-separated path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    inner: String,
}

impl Path {
    /// Creates a path by normalizing the input string. Never fails.
    pub fn new(path: impl AsRef<str>) -> Self {
        Self {
            inner: normalize(path.as_ref()),
        }
    }

    /// Appends a (possibly dotted) string to the end of this path.
    pub fn push(mut self, path: impl AsRef<str>) -> Self {
        let normalized = normalize(path.as_ref());
        if normalized.is_empty() {
            return self;
        }

        if !self.inner.is_empty() {
            self.inner.push('.');
        }
        self.inner.push_str(&normalized);
        self
    }

    /// Returns an iterator over the segments, root first.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.inner.split('.').filter(|s| !s.is_empty())
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments().count()
    }

    /// Returns `true` if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl FromStr for Path {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Path {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&Path> for Path {
    fn from(path: &Path) -> Self {
        path.clone()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inner.is_empty() {
            write!(f, "(empty path)")
        } else {
            write!(f, "{}", self.inner)
        }
    }
}

/// Constructs a [`Path`] from one or more string-like pieces.
///
/// ```rust
/// # use docshape::path;
/// let base = "book";
/// let path = path!(base, "author", "name");
/// assert_eq!(path.as_str(), "book.author.name");
/// assert!(path!().is_empty());
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::doc::Path::default()
    };

    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let path = $crate::doc::Path::new($first.to_string());
        $(
            let path = path.push($rest.to_string());
        )*
        path
    }};
}
