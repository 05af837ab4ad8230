use docshape::{
    DiagnosticEvent, PathQuery, QueryError, SimplePathQuery, apply,
    doc::{Doc, Value},
};

use crate::helpers::collecting;

fn library() -> Doc {
    Doc::new().with(
        "shelf",
        Doc::new().with_list(
            "books",
            [
                Doc::new().with("title", "Foundation").with("tags.main", "sf"),
                Doc::new().with("title", "Dune"),
            ],
        ),
    )
}

#[test]
fn test_apply_selects_values() {
    let doc = library();
    assert_eq!(
        apply(&doc, "$.shelf.books[1].title"),
        Some(Value::from("Dune"))
    );
    assert_eq!(
        apply(&doc, "$.shelf.books[0]['tags.main']"),
        Some(Value::from("sf"))
    );
    assert_eq!(apply(&doc, "$"), Some(Value::Doc(doc.clone())));
}

#[test]
fn test_failures_become_none_and_are_reported() {
    let (transformer, diagnostics) = collecting();
    let doc = library();

    assert_eq!(transformer.apply(&doc, "$.shelf.missing"), None);
    assert_eq!(transformer.apply(&doc, "shelf"), None);

    let events = diagnostics.events();
    assert_eq!(events.len(), 2);
    assert!(matches!(
        &events[0],
        DiagnosticEvent::QueryFailed { expression, .. } if expression == "$.shelf.missing"
    ));
    assert!(matches!(
        &events[1],
        DiagnosticEvent::QueryFailed { error, .. } if error.starts_with("Invalid path expression")
    ));
}

#[derive(Debug)]
struct FixedQuery(Value);

impl PathQuery for FixedQuery {
    fn query(&self, _doc: &Doc, expression: &str) -> Result<Value, QueryError> {
        if expression == "fail" {
            return Err(QueryError::PathNotFound {
                expression: expression.to_string(),
            });
        }
        Ok(self.0.clone())
    }
}

#[test]
fn test_custom_evaluator() {
    let (transformer, diagnostics) = collecting();
    let query = FixedQuery(Value::Int(5));

    assert_eq!(
        transformer.apply_with(&query, &Doc::new(), "anything"),
        Some(Value::Int(5))
    );
    assert_eq!(transformer.apply_with(&query, &Doc::new(), "fail"), None);
    assert_eq!(diagnostics.events().len(), 1);
}

#[test]
fn test_query_errors_convert() {
    let err: docshape::Error = SimplePathQuery
        .query(&Doc::new(), "$.x")
        .unwrap_err()
        .into();
    assert!(err.is_not_found());
    assert_eq!(err.module(), "query");
}
