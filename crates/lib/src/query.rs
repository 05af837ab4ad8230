//! Path queries over documents.
//!
//! Query evaluation is pluggable through [`PathQuery`]. The built-in
//! [`SimplePathQuery`] understands a small JSONPath subset:
//!
//! - `$` the root document
//! - `.name` a field
//! - `['name']` or `["name"]` a field whose name needs quoting
//! - `[index]` a list element, zero-based
//!
//! [`Transformer::apply`] never fails: evaluation errors are reported to the
//! transformer's diagnostics sink and become `None`.

use std::fmt::Debug;

use thiserror::Error;

use crate::{
    Transformer,
    doc::{Doc, Value},
};

/// Errors from evaluating a path query.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum QueryError {
    /// The expression could not be parsed.
    #[error("Invalid path expression '{expression}': {reason}")]
    InvalidExpression { expression: String, reason: String },

    /// The expression is valid but selects nothing in the document.
    #[error("Path not found: {expression}")]
    PathNotFound { expression: String },
}

impl QueryError {
    /// Check if this error indicates the path selected nothing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, QueryError::PathNotFound { .. })
    }

    /// Check if this error indicates a malformed expression.
    pub fn is_invalid_expression(&self) -> bool {
        matches!(self, QueryError::InvalidExpression { .. })
    }

    /// The expression that failed.
    pub fn expression(&self) -> &str {
        match self {
            QueryError::InvalidExpression { expression, .. }
            | QueryError::PathNotFound { expression } => expression,
        }
    }
}

impl From<QueryError> for crate::Error {
    fn from(err: QueryError) -> Self {
        crate::Error::Query(err)
    }
}

/// Evaluates path expressions against documents.
pub trait PathQuery: Send + Sync + Debug {
    /// Returns the value selected by `expression`.
    fn query(&self, doc: &Doc, expression: &str) -> Result<Value, QueryError>;
}

/// Built-in evaluator for the JSONPath subset described in the
/// [module docs](self).
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplePathQuery;

#[derive(Debug, PartialEq, Eq)]
enum Step<'e> {
    Field(&'e str),
    Index(usize),
}

fn invalid(expression: &str, reason: impl Into<String>) -> QueryError {
    QueryError::InvalidExpression {
        expression: expression.to_string(),
        reason: reason.into(),
    }
}

fn parse(expression: &str) -> Result<Vec<Step<'_>>, QueryError> {
    let Some(mut rest) = expression.strip_prefix('$') else {
        return Err(invalid(expression, "expression must start with '$'"));
    };

    let mut steps = Vec::new();
    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix('.') {
            let end = after.find(['.', '[']).unwrap_or(after.len());
            if end == 0 {
                return Err(invalid(expression, "empty field name"));
            }
            steps.push(Step::Field(&after[..end]));
            rest = &after[end..];
        } else if let Some(after) = rest.strip_prefix('[') {
            let Some(close) = after.find(']') else {
                return Err(invalid(expression, "unclosed '['"));
            };
            let inner = &after[..close];
            let quoted = inner
                .strip_prefix('\'')
                .and_then(|s| s.strip_suffix('\''))
                .or_else(|| inner.strip_prefix('"').and_then(|s| s.strip_suffix('"')));
            let step = match quoted {
                Some(name) => Step::Field(name),
                None => Step::Index(inner.parse().map_err(|_| {
                    invalid(expression, format!("'{inner}' is not a list index"))
                })?),
            };
            steps.push(step);
            rest = &after[close + 1..];
        } else {
            return Err(invalid(
                expression,
                format!("unexpected input at '{rest}'"),
            ));
        }
    }

    Ok(steps)
}

impl PathQuery for SimplePathQuery {
    fn query(&self, doc: &Doc, expression: &str) -> Result<Value, QueryError> {
        let steps = parse(expression)?;
        let not_found = || QueryError::PathNotFound {
            expression: expression.to_string(),
        };

        let Some((first, rest)) = steps.split_first() else {
            return Ok(Value::Doc(doc.clone()));
        };
        let Step::Field(name) = first else {
            return Err(not_found());
        };

        let mut current = doc.get(name).ok_or_else(not_found)?;
        for step in rest {
            current = match (step, current) {
                (Step::Field(name), Value::Doc(inner)) => inner.get(name),
                (Step::Index(index), Value::List(items)) => items.get(*index),
                _ => None,
            }
            .ok_or_else(not_found)?;
        }

        Ok(current.clone())
    }
}

impl Transformer {
    /// Evaluates `expression` with [`SimplePathQuery`].
    ///
    /// ```
    /// use docshape::{Transformer, doc::{Doc, Value}};
    ///
    /// let doc = Doc::new().with("book", Doc::new().with_list("tags", ["sf", "classic"]));
    /// let transformer = Transformer::default();
    ///
    /// assert_eq!(transformer.apply(&doc, "$.book.tags[1]"), Some(Value::from("classic")));
    /// assert_eq!(transformer.apply(&doc, "$.missing"), None);
    /// ```
    pub fn apply(&self, doc: &Doc, expression: &str) -> Option<Value> {
        self.apply_with(&SimplePathQuery, doc, expression)
    }

    /// Evaluates `expression` with a caller-supplied evaluator.
    ///
    /// Failures are reported to diagnostics and returned as `None`.
    pub fn apply_with<Q>(&self, query: &Q, doc: &Doc, expression: &str) -> Option<Value>
    where
        Q: PathQuery + ?Sized,
    {
        match query.query(doc, expression) {
            Ok(value) => Some(value),
            Err(err) => {
                self.diagnostics().query_failed(expression, &err);
                None
            }
        }
    }
}

/// Evaluates `expression` with the default transformer.
/// See [`Transformer::apply`].
pub fn apply(doc: &Doc, expression: &str) -> Option<Value> {
    Transformer::default().apply(doc, expression)
}
