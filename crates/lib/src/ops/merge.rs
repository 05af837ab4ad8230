//! Deep, non-mutating document merge.
//!
//! # Binary union
//!
//! [`Transformer::union`] walks the first document's keys, then the second's:
//!
//! 1. A key only the first document holds is copied.
//! 2. A key both hold with two document values is merged recursively.
//! 3. A key both hold with any other pair of values is a conflict, resolved
//!    by the configured [`ConflictPolicy`]. The default drops the key: neither
//!    value survives.
//! 4. A key only the second document holds is copied, after all of the
//!    first document's keys.
//!
//! When either side is empty the other side is returned as-is
//! ([`Cow::Borrowed`]), without copying.
//!
//! # N-ary union
//!
//! [`Transformer::union_all`] merges any number of documents at once. Per key,
//! contributors that are all documents are merged recursively, contributors
//! that all agree keep their value, and anything else is a single conflict.
//! The result does not depend on how the inputs would have been grouped.
//!
//! # In-place merge
//!
//! Folding merges many single-key documents into one accumulator.
//! `merge_into` applies the binary rules for one incoming key directly to the
//! accumulator, so each merge costs the depth of the key rather than the size
//! of the accumulator.

use std::{borrow::Cow, collections::HashSet};

use indexmap::IndexSet;

use super::{ConflictPolicy, TransformError, Transformer, trail::Trail};
use crate::{
    diagnostics::DropReason,
    doc::{Doc, Value},
};

impl Transformer {
    /// Merges `second` into `first`, returning a new document.
    ///
    /// Neither input is modified. See the [module docs](self) for the rules.
    ///
    /// ```
    /// use docshape::{Options, Transformer, doc::Doc};
    ///
    /// let transformer = Transformer::new(Options::default());
    /// let a = Doc::new().with("a", Doc::new().with("x", 1));
    /// let b = Doc::new().with("a", Doc::new().with("y", 2));
    ///
    /// let merged = transformer.union(&a, &b)?;
    /// assert_eq!(*merged, Doc::new().with("a", Doc::new().with("x", 1).with("y", 2)));
    /// # Ok::<(), docshape::Error>(())
    /// ```
    pub fn union<'a>(&self, first: &'a Doc, second: &'a Doc) -> crate::Result<Cow<'a, Doc>> {
        let root = Trail::root(self.options.max_depth);
        Ok(self.union_at(first, second, &root)?)
    }

    pub(crate) fn union_at<'a>(
        &self,
        first: &'a Doc,
        second: &'a Doc,
        trail: &Trail<'_>,
    ) -> Result<Cow<'a, Doc>, TransformError> {
        if first.is_empty() {
            return Ok(Cow::Borrowed(second));
        }
        if second.is_empty() {
            return Ok(Cow::Borrowed(first));
        }

        let policy = self.options.conflict_policy;
        let mut result = Doc::with_capacity(first.len() + second.len());
        let mut deferred: HashSet<&str> = HashSet::new();

        for (key, value) in first.iter() {
            let Some(other) = second.get(key) else {
                result.insert(key, value.clone());
                continue;
            };

            let here = trail.child(key)?;
            match (value, other) {
                (Value::Doc(mine), Value::Doc(theirs)) => {
                    let merged = self.union_at(mine, theirs, &here)?;
                    result.insert(key, merged.into_owned());
                }
                _ => match policy {
                    ConflictPolicy::DropOnConflict => {
                        self.diagnostics
                            .field_dropped(&here.render(), &DropReason::Conflict);
                    }
                    ConflictPolicy::FirstWins => {
                        result.insert(key, value.clone());
                    }
                    ConflictPolicy::SecondWins => {
                        deferred.insert(key);
                    }
                    ConflictPolicy::Error => {
                        return Err(TransformError::Conflict {
                            path: here.render(),
                        });
                    }
                },
            }
        }

        for (key, value) in second.iter() {
            if !first.contains_key(key) || deferred.contains(key) {
                result.insert(key, value.clone());
            }
        }

        Ok(Cow::Owned(result))
    }

    /// Merges any number of documents in one pass.
    ///
    /// Keys appear in the order they are first seen across `docs`. Values
    /// that are equal across every contributor are kept, which differs from
    /// [`Transformer::union`], where any shared non-document key conflicts.
    ///
    /// ```
    /// use docshape::{Options, Transformer, doc::Doc};
    ///
    /// let transformer = Transformer::new(Options::default());
    /// let docs = [
    ///     Doc::new().with("kind", "book").with("id", 1),
    ///     Doc::new().with("kind", "book").with("id", 2),
    ///     Doc::new().with("meta", Doc::new().with("lang", "en")),
    /// ];
    ///
    /// let merged = transformer.union_all(&docs)?;
    /// assert_eq!(
    ///     merged,
    ///     Doc::new().with("kind", "book").with("meta", Doc::new().with("lang", "en"))
    /// );
    /// # Ok::<(), docshape::Error>(())
    /// ```
    pub fn union_all(&self, docs: &[Doc]) -> crate::Result<Doc> {
        let root = Trail::root(self.options.max_depth);
        let refs: Vec<&Doc> = docs.iter().collect();
        Ok(self.union_all_at(&refs, &root)?)
    }

    pub(crate) fn union_all_at(
        &self,
        docs: &[&Doc],
        trail: &Trail<'_>,
    ) -> Result<Doc, TransformError> {
        let keys: IndexSet<&str> = docs.iter().flat_map(|doc| doc.keys()).collect();

        let mut result = Doc::with_capacity(keys.len());
        for key in keys {
            let values: Vec<&Value> = docs.iter().filter_map(|doc| doc.get(key)).collect();
            let [first, rest @ ..] = values.as_slice() else {
                continue;
            };
            if rest.is_empty() {
                result.insert(key, (*first).clone());
                continue;
            }

            let here = trail.child(key)?;
            let nested: Option<Vec<&Doc>> = values.iter().map(|value| value.as_doc()).collect();
            if let Some(nested) = nested {
                result.insert(key, self.union_all_at(&nested, &here)?);
            } else if rest.iter().all(|value| value == first) {
                result.insert(key, (*first).clone());
            } else {
                match self.options.conflict_policy {
                    ConflictPolicy::DropOnConflict => {
                        self.diagnostics
                            .field_dropped(&here.render(), &DropReason::Conflict);
                    }
                    ConflictPolicy::FirstWins => {
                        result.insert(key, (*first).clone());
                    }
                    ConflictPolicy::SecondWins => {
                        let last = rest.last().unwrap_or(first);
                        result.insert(key, (*last).clone());
                    }
                    ConflictPolicy::Error => {
                        return Err(TransformError::Conflict {
                            path: here.render(),
                        });
                    }
                }
            }
        }

        Ok(result)
    }

    /// Merges `{key: value}` into `target` in place.
    ///
    /// Produces the same fields, in the same order, as
    /// `union_at(target, {key: value})`. A key resolved by
    /// [`ConflictPolicy::SecondWins`] moves to the end, exactly as the binary
    /// union appends the second document's keys.
    pub(crate) fn merge_into(
        &self,
        target: &mut Doc,
        key: &str,
        value: Value,
        trail: &Trail<'_>,
    ) -> Result<(), TransformError> {
        if !target.contains_key(key) {
            target.insert(key, value);
            return Ok(());
        }

        let here = trail.child(key)?;
        let value = match (target.get_mut(key), value) {
            (Some(Value::Doc(mine)), Value::Doc(theirs)) => {
                for (inner_key, inner_value) in theirs {
                    self.merge_into(mine, &inner_key, inner_value, &here)?;
                }
                return Ok(());
            }
            (_, value) => value,
        };

        match self.options.conflict_policy {
            ConflictPolicy::DropOnConflict => {
                self.diagnostics
                    .field_dropped(&here.render(), &DropReason::Conflict);
                target.remove(key);
            }
            ConflictPolicy::FirstWins => {}
            ConflictPolicy::SecondWins => {
                target.remove(key);
                target.insert(key, value);
            }
            ConflictPolicy::Error => {
                return Err(TransformError::Conflict {
                    path: here.render(),
                });
            }
        }
        Ok(())
    }
}
