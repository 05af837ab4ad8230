use chrono::{TimeZone, Utc};
use docshape::doc::{Doc, DocError, ObjectId, Value, ValueKind, classify};

#[test]
fn test_classification_is_total() {
    let id = ObjectId::from_bytes([0; 12]);
    let cases = [
        (Value::from("text"), ValueKind::Scalar),
        (Value::Int(1), ValueKind::Scalar),
        (Value::Long(1), ValueKind::Scalar),
        (Value::Date(Utc.timestamp_millis_opt(0).unwrap()), ValueKind::Scalar),
        (Value::Bool(false), ValueKind::Scalar),
        (Value::Doc(Doc::new()), ValueKind::SubDocument),
        (Value::List(vec![]), ValueKind::Sequence),
        (Value::ObjectId(id), ValueKind::Unrecognized),
        (Value::Double(0.5), ValueKind::Unrecognized),
        (Value::Null, ValueKind::Unrecognized),
    ];

    for (value, kind) in cases {
        assert_eq!(classify(&value), kind, "{value:?}");
        assert_eq!(value.is_scalar(), kind == ValueKind::Scalar);
    }
}

#[test]
fn test_display_forms() {
    let date = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
    assert_eq!(Value::from("plain").to_string(), "plain");
    assert_eq!(Value::Long(-7).to_string(), "-7");
    assert_eq!(Value::Date(date).to_string(), "2024-03-01T12:30:00.000Z");
    assert_eq!(
        Value::List(vec![Value::Int(1), Value::from("a")]).to_string(),
        "[1, a]"
    );
    assert_eq!(
        Value::Doc(Doc::new().with("k", true)).to_string(),
        "{k: true}"
    );
}

#[test]
fn test_try_from_conversions() {
    let value = Value::Int(12);
    assert_eq!(i64::try_from(&value).unwrap(), 12);
    assert_eq!(i32::try_from(&value).unwrap(), 12);

    let err = String::try_from(&value).unwrap_err();
    assert_eq!(
        err,
        DocError::TypeMismatch {
            expected: "text".to_string(),
            actual: "int".to_string(),
        }
    );
    assert!(err.is_type_error());
}

#[test]
fn test_option_maps_to_null() {
    assert_eq!(Value::from(None::<i32>), Value::Null);
    assert_eq!(Value::from(Some("x")), Value::from("x"));
}

#[test]
fn test_direct_comparisons() {
    assert!(Value::from("hello") == "hello");
    assert!(Value::Long(3) == 3_i64);
    assert!(Value::Bool(true) == true);
    assert!(Value::Int(3) != Value::Long(3));
}
