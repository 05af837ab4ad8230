//! Array normalization ("unArray").
//!
//! Collapses list-valued fields to a single representative value, for
//! consumers that only care whether a field has structure, not how many
//! values it holds. This is deliberately lossy.
//!
//! Per field:
//!
//! | value                        | result                                   |
//! |------------------------------|------------------------------------------|
//! | scalar                       | copied                                   |
//! | document                     | normalized recursively                   |
//! | `[]`                         | copied as `[]`                           |
//! | `[scalar]`                   | the bare scalar                          |
//! | any other list               | [`Transformer::reduce_sequence`]         |
//! | unrecognized (id, double, null) | dropped and reported to diagnostics   |

use super::{TransformError, Transformer, trail::Trail};
use crate::{
    diagnostics::DropReason,
    doc::{Doc, Value},
};

impl Transformer {
    /// Returns a new document with every list replaced by a representative.
    ///
    /// ```
    /// use docshape::{Options, Transformer, doc::Doc};
    ///
    /// let transformer = Transformer::new(Options::default());
    /// let doc = Doc::new()
    ///     .with_list("tags", ["solo"])
    ///     .with_list("authors", [Doc::new().with("name", "Asimov"), Doc::new().with("name", "Clarke")]);
    ///
    /// let normalized = transformer.normalize(&doc)?;
    /// assert_eq!(
    ///     normalized,
    ///     Doc::new().with("tags", "solo").with("authors", Doc::new().with("name", "Asimov"))
    /// );
    /// # Ok::<(), docshape::Error>(())
    /// ```
    pub fn normalize(&self, doc: &Doc) -> crate::Result<Doc> {
        let root = Trail::root(self.options.max_depth);
        Ok(self.normalize_at(doc, &root)?)
    }

    /// Reduces a sequence to one representative document.
    ///
    /// - first element is a document: that document, normalized
    /// - first element is a list whose own first element is a document: that
    ///   inner document, normalized
    /// - otherwise: `{first.to_string(): second}`, which needs two elements
    ///
    /// Anything else fails with [`TransformError::MalformedSequence`].
    ///
    /// ```
    /// use docshape::{Options, Transformer, doc::{Doc, Value}};
    ///
    /// let transformer = Transformer::new(Options::default());
    /// let pair = [Value::from("color"), Value::from("red")];
    /// assert_eq!(transformer.reduce_sequence(&pair)?, Doc::new().with("color", "red"));
    ///
    /// assert!(transformer.reduce_sequence(&[Value::Null]).is_err());
    /// # Ok::<(), docshape::Error>(())
    /// ```
    pub fn reduce_sequence(&self, items: &[Value]) -> crate::Result<Doc> {
        let root = Trail::root(self.options.max_depth);
        Ok(self.reduce_at(items, &root)?)
    }

    fn normalize_at(&self, doc: &Doc, trail: &Trail<'_>) -> Result<Doc, TransformError> {
        let mut result = Doc::with_capacity(doc.len());

        for (key, value) in doc.iter() {
            let here = trail.child(key)?;
            match value {
                Value::Text(_)
                | Value::Int(_)
                | Value::Long(_)
                | Value::Date(_)
                | Value::Bool(_) => {
                    result.insert(key, value.clone());
                }
                Value::List(items) => match items.as_slice() {
                    [] => {
                        result.insert(key, Value::List(Vec::new()));
                    }
                    [only] if only.is_scalar() => {
                        result.insert(key, only.clone());
                    }
                    _ => {
                        result.insert(key, self.reduce_at(items, &here)?);
                    }
                },
                Value::Doc(inner) => {
                    result.insert(key, self.normalize_at(inner, &here)?);
                }
                Value::ObjectId(_) | Value::Double(_) | Value::Null => {
                    self.diagnostics.field_dropped(
                        &here.render(),
                        &DropReason::UnrecognizedValue {
                            type_name: value.type_name(),
                        },
                    );
                }
            }
        }

        Ok(result)
    }

    fn reduce_at(&self, items: &[Value], trail: &Trail<'_>) -> Result<Doc, TransformError> {
        match items {
            [] => Err(TransformError::MalformedSequence {
                path: trail.render(),
                reason: "sequence is empty".to_string(),
            }),
            [Value::Doc(first), ..] => self.normalize_at(first, trail),
            [Value::List(inner), ..] => match inner.first() {
                Some(Value::Doc(first)) => self.normalize_at(first, trail),
                Some(other) => Err(TransformError::MalformedSequence {
                    path: trail.render(),
                    reason: format!(
                        "nested sequence starts with {} instead of a document",
                        other.type_name()
                    ),
                }),
                None => Err(TransformError::MalformedSequence {
                    path: trail.render(),
                    reason: "nested sequence is empty".to_string(),
                }),
            },
            [first, second, ..] => Ok(Doc::new().with(first.to_string(), second.clone())),
            [only] => Err(TransformError::MalformedSequence {
                path: trail.render(),
                reason: format!("single {} element has no paired value", only.type_name()),
            }),
        }
    }
}
