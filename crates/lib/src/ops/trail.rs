//! Position tracking for recursive transformations.

use super::TransformError;

/// The chain of keys from an operation's root to the node being processed.
///
/// Trails live on the stack and link to their parent, so the dotted path is
/// only rendered when a diagnostic or error needs it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Trail<'a> {
    parent: Option<&'a Trail<'a>>,
    key: &'a str,
    depth: usize,
    limit: usize,
}

impl<'a> Trail<'a> {
    pub(crate) fn root(limit: usize) -> Self {
        Self {
            parent: None,
            key: "",
            depth: 0,
            limit,
        }
    }

    /// Descends into `key`, failing once the depth limit is passed.
    pub(crate) fn child(&'a self, key: &'a str) -> Result<Trail<'a>, TransformError> {
        let child = Trail {
            parent: Some(self),
            key,
            depth: self.depth + 1,
            limit: self.limit,
        };
        if child.depth > self.limit {
            return Err(TransformError::DepthExceeded {
                limit: self.limit,
                path: child.render(),
            });
        }
        Ok(child)
    }

    pub(crate) fn render(&self) -> String {
        let mut keys = Vec::with_capacity(self.depth);
        let mut current = Some(self);
        while let Some(trail) = current {
            if trail.parent.is_some() {
                keys.push(trail.key);
            }
            current = trail.parent;
        }
        keys.reverse();
        keys.join(".")
    }
}
