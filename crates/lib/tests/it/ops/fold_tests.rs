use docshape::{
    ConflictPolicy, DiagnosticEvent, DropReason, Options, TransformError, Transformer,
    doc::{Doc, Value},
    fold,
};

use crate::helpers::{collecting, joined_row, keys, legacy, nested, with_policy};

fn author() -> Doc {
    Doc::new().with("first", "Isaac").with("last", "Asimov")
}

#[test]
fn test_fold_merges_list_elements() {
    let folded = fold(&joined_row()).unwrap();
    assert_eq!(
        folded,
        Doc::new()
            .with("title", "Foundation")
            .with("author", author())
            .with_list(
                "editions",
                [Doc::new()
                    .with("year", 1951)
                    .with("publisher", Doc::new().with("name", "Gnome"))
                    .with("format", "paperback")]
            )
    );
}

#[test]
fn test_legacy_mode_keeps_last_element_over_accumulator() {
    let folded = legacy().fold(&joined_row()).unwrap();
    assert_eq!(
        folded,
        Doc::new()
            .with("title", "Foundation")
            .with("author", author())
            .with_list(
                "editions",
                [Doc::new()
                    .with("title", "Foundation")
                    .with("author", author())
                    .with("format", "paperback")]
            )
    );
}

#[test]
fn test_merge_mode_is_element_order_independent() {
    let a = Doc::new().with("x", 1);
    let b = Doc::new().with("y.z", 2);
    let forward = fold(&Doc::new().with_list("items", [a.clone(), b.clone()])).unwrap();
    let backward = fold(&Doc::new().with_list("items", [b, a])).unwrap();

    let combined = forward.get("items").and_then(Value::as_list).unwrap();
    let reversed = backward.get("items").and_then(Value::as_list).unwrap();
    let combined = combined[0].as_doc().unwrap();
    let reversed = reversed[0].as_doc().unwrap();
    assert_eq!(combined.get("x"), reversed.get("x"));
    assert_eq!(combined.get("y"), reversed.get("y"));
}

#[test]
fn test_conflicting_elements_are_dropped_once() {
    let (transformer, diagnostics) = collecting();
    let flat = Doc::new().with_list(
        "items",
        [
            Doc::new().with("k", 1).with("same", "s"),
            Doc::new().with("k", 2).with("same", "s"),
        ],
    );

    let folded = transformer.fold(&flat).unwrap();
    assert_eq!(
        folded,
        Doc::new().with_list("items", [Doc::new().with("same", "s")])
    );
    assert_eq!(diagnostics.dropped_paths(), vec!["items.k".to_string()]);
}

#[test]
fn test_dotted_key_against_plain_key_conflicts() {
    let (transformer, diagnostics) = collecting();
    let flat = Doc::new().with("a", 1).with("a.b", 2).with("c", 3);

    let folded = transformer.fold(&flat).unwrap();
    assert_eq!(folded, Doc::new().with("c", 3));
    assert_eq!(diagnostics.dropped_paths(), vec!["a".to_string()]);
}

#[test]
fn test_dotted_keys_share_prefix() {
    let flat = Doc::new()
        .with("a.b.c", 1)
        .with("a.b.d", 2)
        .with("a.e", 3);
    assert_eq!(
        fold(&flat).unwrap(),
        Doc::new().with(
            "a",
            Doc::new()
                .with("b", Doc::new().with("c", 1).with("d", 2))
                .with("e", 3)
        )
    );
}

#[test]
fn test_scalar_lists_are_copied() {
    let flat = Doc::new().with_list("tags", ["sf", "classic"]);
    assert_eq!(fold(&flat).unwrap(), flat);
}

#[test]
fn test_empty_list_is_kept() {
    let flat = Doc::new().with("title", "x").with("items", Value::List(vec![]));
    assert_eq!(fold(&flat).unwrap(), flat);
    assert_eq!(legacy().fold(&flat).unwrap(), flat);
}

#[test]
fn test_non_document_elements_are_reported() {
    let (transformer, diagnostics) = collecting();
    let flat = Doc::new().with(
        "items",
        Value::List(vec![
            Value::Doc(Doc::new().with("a", 1)),
            Value::from("stray"),
        ]),
    );

    let folded = transformer.fold(&flat).unwrap();
    assert_eq!(
        folded,
        Doc::new().with_list("items", [Doc::new().with("a", 1)])
    );
    assert_eq!(
        diagnostics.events(),
        vec![DiagnosticEvent::FieldDropped {
            path: "items".to_string(),
            reason: DropReason::NonDocumentElement {
                index: 1,
                type_name: "text",
            },
        }]
    );
}

#[test]
fn test_nested_lists_fold_recursively() {
    let flat = Doc::new().with_list(
        "orders",
        [Doc::new().with("id", 1).with_list(
            "lines",
            [Doc::new().with("sku.code", "A"), Doc::new().with("qty", 2)],
        )],
    );
    assert_eq!(
        fold(&flat).unwrap(),
        Doc::new().with_list(
            "orders",
            [Doc::new().with("id", 1).with_list(
                "lines",
                [Doc::new()
                    .with("sku", Doc::new().with("code", "A"))
                    .with("qty", 2)]
            )]
        )
    );
}

#[test]
fn test_fold_depth_limit() {
    let transformer = Transformer::new(Options::default().with_max_depth(2));
    let mut flat = Doc::new().with("x", 1);
    for _ in 0..3 {
        flat = Doc::new().with_list("l", [flat]);
    }
    assert!(transformer.fold(&flat).unwrap_err().is_depth_exceeded());

    // Plain sub-documents are copied, not descended into.
    assert!(transformer.fold(&nested(10, 1)).is_ok());
}

#[test]
fn test_empty_record() {
    assert!(fold(&Doc::new()).unwrap().is_empty());
}

#[test]
fn test_depth_counts_top_level_keys() {
    let flat = Doc::new().with("a", 1).with("b", 2);

    let one = Transformer::new(Options::default().with_max_depth(1));
    assert_eq!(one.fold(&flat).unwrap(), flat);
    assert!(one.fold(&Doc::new().with("a.b", 1)).is_ok());

    let zero = Transformer::new(Options::default().with_max_depth(0));
    let err = zero.fold(&flat).unwrap_err();
    assert!(matches!(
        err,
        docshape::Error::Transform(TransformError::DepthExceeded { limit: 0, ref path }) if path == "a"
    ));
    assert!(zero.fold(&Doc::new()).unwrap().is_empty());
}

#[test]
fn test_wide_dotted_record() {
    let width = 5000;
    let flat: Doc = (0..width).map(|i| (format!("k{i}.v"), i as i64)).collect();

    let folded = fold(&flat).unwrap();
    assert_eq!(folded.len(), width);
    assert_eq!(folded.keys().next(), Some("k0"));
    assert_eq!(folded.keys().last(), Some("k4999"));
    assert_eq!(
        folded.get_doc("k1234").and_then(|d| d.get("v")),
        Some(&Value::Long(1234))
    );
}

#[test]
fn test_dotted_conflict_follows_policy_order() {
    let flat = Doc::new().with("a", 1).with("x", 0).with("a.b", 2);

    let second = with_policy(ConflictPolicy::SecondWins).fold(&flat).unwrap();
    assert_eq!(keys(&second), vec!["x", "a"]);
    assert_eq!(second.get("a"), Some(&Value::Doc(Doc::new().with("b", 2))));

    let first = with_policy(ConflictPolicy::FirstWins).fold(&flat).unwrap();
    assert_eq!(first, Doc::new().with("a", 1).with("x", 0));

    let dropped = fold(&flat).unwrap();
    assert_eq!(dropped, Doc::new().with("x", 0));
}

#[test]
fn test_empty_element_keeps_its_list() {
    let folded = fold(&Doc::new().with_list("items", [Doc::new()])).unwrap();
    assert_eq!(folded, Doc::new().with_list("items", [Doc::new()]));

    // An empty list and a list of one empty record stay distinct.
    let empty = fold(&Doc::new().with_list("items", Vec::<Value>::new())).unwrap();
    assert_eq!(empty.get("items"), Some(&Value::List(Vec::new())));
}
