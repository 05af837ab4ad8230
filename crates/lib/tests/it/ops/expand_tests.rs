use docshape::{
    doc::{Doc, Path, Value},
    expand,
};

#[test]
fn test_expand_book_author() {
    assert_eq!(
        expand("book.author", "Asimov"),
        Some(Doc::new().with("book", Doc::new().with("author", "Asimov")))
    );
}

#[test]
fn test_value_reads_back_along_path() {
    let leaves = [
        Value::from("text"),
        Value::Long(9),
        Value::Doc(Doc::new().with("x", 1)),
        Value::List(vec![Value::Int(1)]),
        Value::Null,
    ];
    for path in ["a", "a.b", "a.b.c.d.e", "x..y"] {
        for leaf in &leaves {
            let doc = expand(path, leaf.clone()).unwrap();
            assert_eq!(doc.get_path(&Path::new(path)), Some(leaf), "{path}");
        }
    }
}

#[test]
fn test_empty_paths_are_absent() {
    assert!(expand("", 1).is_none());
    assert!(expand(".", 1).is_none());
    assert!(expand(Path::default(), 1).is_none());
}

#[test]
fn test_long_paths_do_not_recurse() {
    let path = vec!["k"; 1_000].join(".");
    let doc = expand(path.as_str(), "deep").unwrap();
    assert_eq!(doc.get_path(&Path::new(&path)), Some(&Value::from("deep")));
}
