use chrono::{TimeZone, Utc};
use docshape::{
    DropReason, Options, Transformer,
    doc::{Doc, ObjectId, Value},
    normalize,
};

use crate::helpers::{collecting, nested};

#[test]
fn test_singleton_tag_collapses() {
    let doc = Doc::new().with_list("tags", ["solo"]);
    assert_eq!(normalize(&doc).unwrap(), Doc::new().with("tags", "solo"));
}

#[test]
fn test_every_scalar_kind_collapses() {
    let date = Utc.timestamp_millis_opt(86_400_000).unwrap();
    let scalars = [
        Value::from("s"),
        Value::Int(1),
        Value::Long(1 << 40),
        Value::Date(date),
        Value::Bool(true),
    ];
    for scalar in scalars {
        let doc = Doc::new().with("field", Value::List(vec![scalar.clone()]));
        assert_eq!(normalize(&doc).unwrap(), Doc::new().with("field", scalar));
    }
}

#[test]
fn test_empty_list_is_kept_empty() {
    let doc = Doc::new().with("field", Value::List(vec![]));
    assert_eq!(normalize(&doc).unwrap(), doc);
}

#[test]
fn test_list_of_documents_uses_first() {
    let doc = Doc::new().with_list(
        "authors",
        [
            Doc::new().with_list("names", ["Isaac"]),
            Doc::new().with("ignored", true),
        ],
    );
    assert_eq!(
        normalize(&doc).unwrap(),
        Doc::new().with("authors", Doc::new().with("names", "Isaac"))
    );
}

#[test]
fn test_scalar_pair_becomes_document() {
    let doc = Doc::new().with(
        "attr",
        Value::List(vec![Value::Int(7), Value::from("seven"), Value::Null]),
    );
    assert_eq!(
        normalize(&doc).unwrap(),
        Doc::new().with("attr", Doc::new().with("7", "seven"))
    );
}

#[test]
fn test_nested_documents_are_normalized() {
    let doc = Doc::new().with(
        "outer",
        Doc::new().with("inner", Doc::new().with_list("v", [3])),
    );
    assert_eq!(
        normalize(&doc).unwrap(),
        Doc::new().with("outer", Doc::new().with("inner", Doc::new().with("v", 3)))
    );
}

#[test]
fn test_unrecognized_values_are_dropped() {
    let (transformer, diagnostics) = collecting();
    let doc = Doc::new()
        .with("_id", ObjectId::from_bytes([9; 12]))
        .with("score", 0.5)
        .with("kept", "yes")
        .with("child", Doc::new().with("nothing", Value::Null));

    let normalized = transformer.normalize(&doc).unwrap();
    assert_eq!(
        normalized,
        Doc::new().with("kept", "yes").with("child", Doc::new())
    );
    assert_eq!(
        diagnostics.dropped_paths(),
        vec!["_id".to_string(), "score".to_string(), "child.nothing".to_string()]
    );
    assert!(diagnostics.events().iter().any(|event| matches!(
        event,
        docshape::DiagnosticEvent::FieldDropped {
            reason: DropReason::UnrecognizedValue { type_name: "double" },
            ..
        }
    )));
}

#[test]
fn test_malformed_sequences() {
    let cases = [
        Value::List(vec![Value::Null]),
        Value::List(vec![Value::List(vec![])]),
        Value::List(vec![Value::List(vec![Value::Int(1)])]),
        Value::List(vec![Value::List(vec![Value::from("a")]), Value::Int(2)]),
    ];
    for list in cases {
        let doc = Doc::new().with("bad", list);
        let err = normalize(&doc).unwrap_err();
        assert!(err.is_malformed_sequence(), "{err}");
    }
}

#[test]
fn test_reduce_sequence_directly() {
    let transformer = Transformer::default();
    let items = [Value::from("k"), Value::List(vec![Value::Int(1), Value::Int(2)])];
    assert_eq!(
        transformer.reduce_sequence(&items).unwrap(),
        Doc::new().with("k", Value::List(vec![Value::Int(1), Value::Int(2)]))
    );
    assert!(transformer.reduce_sequence(&[]).unwrap_err().is_malformed_sequence());
}

#[test]
fn test_input_is_unchanged() {
    let doc = Doc::new()
        .with_list("tags", ["a"])
        .with("child", Doc::new().with_list("xs", [Doc::new().with("y", 1)]));
    let before = doc.clone();
    let _ = normalize(&doc).unwrap();
    assert_eq!(doc, before);
}

#[test]
fn test_depth_limit() {
    let transformer = Transformer::new(Options::default().with_max_depth(5));
    assert!(transformer.normalize(&nested(4, 1)).is_ok());
    let err = transformer.normalize(&nested(5, 1)).unwrap_err();
    assert!(err.is_depth_exceeded());
}
