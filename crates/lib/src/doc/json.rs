//! JSON text form of documents.
//!
//! Documents serialize through serde with their field order preserved.
//! Values outside plain JSON use the extended notation common to
//! document stores:
//!
//! - [`Value::ObjectId`] ↔ `{"$oid": "<24 hex digits>"}`
//! - [`Value::Date`] ↔ `{"$date": <milliseconds since epoch>}` (RFC 3339
//!   strings are also accepted when parsing)
//!
//! Integers parse as [`Value::Int`] when they fit in 32 bits and as
//! [`Value::Long`] otherwise; any other number becomes [`Value::Double`].
//!
//! ```
//! use docshape::doc::Doc;
//!
//! let doc = Doc::from_json_str(r#"{"b": 1, "a": {"$oid": "5f1d7a3c9b1e8a0012345678"}}"#)?;
//! assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["b", "a"]);
//! assert_eq!(
//!     doc.to_json_string()?,
//!     r#"{"b":1,"a":{"$oid":"5f1d7a3c9b1e8a0012345678"}}"#
//! );
//! # Ok::<(), docshape::Error>(())
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, MapAccess, SeqAccess, Visitor},
    ser::SerializeMap,
};

use super::{Doc, DocError, ObjectId, Value};

const OID_KEY: &str = "$oid";
const DATE_KEY: &str = "$date";

/// Text form of a document with no fields.
pub const EMPTY_DOCUMENT_JSON: &str = "{}";

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Text(s) => serializer.serialize_str(s),
            Value::Int(n) => serializer.serialize_i32(*n),
            Value::Long(n) => serializer.serialize_i64(*n),
            Value::Date(d) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(DATE_KEY, &d.timestamp_millis())?;
                map.end()
            }
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Doc(doc) => doc.serialize(serializer),
            Value::List(list) => list.serialize(serializer),
            Value::ObjectId(id) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(OID_KEY, &id.to_hex())?;
                map.end()
            }
            Value::Double(n) => serializer.serialize_f64(*n),
            Value::Null => serializer.serialize_unit(),
        }
    }
}

impl Serialize for Doc {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(i32::try_from(v).map_or(Value::Long(v), Value::Int))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        match i64::try_from(v) {
            Ok(n) => self.visit_i64(n),
            Err(_) => Ok(Value::Double(v as f64)),
        }
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Double(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::Text(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut list = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            list.push(item);
        }
        Ok(Value::List(list))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut doc = Doc::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            doc.insert(key, value);
        }
        Ok(extended_value(doc))
    }
}

/// Recognizes the single-key `$oid` / `$date` wrappers.
fn extended_value(doc: Doc) -> Value {
    if doc.len() != 1 {
        return Value::Doc(doc);
    }
    let recognized = match doc.first() {
        Some((OID_KEY, Value::Text(hex))) => hex.parse::<ObjectId>().ok().map(Value::ObjectId),
        Some((DATE_KEY, value)) => match value {
            Value::Int(_) | Value::Long(_) => value
                .as_long()
                .and_then(DateTime::<Utc>::from_timestamp_millis)
                .map(Value::Date),
            Value::Text(text) => DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|d| Value::Date(d.with_timezone(&Utc))),
            _ => None,
        },
        _ => None,
    };
    recognized.unwrap_or(Value::Doc(doc))
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

impl<'de> Deserialize<'de> for Doc {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Doc(doc) => Ok(doc),
            other => Err(de::Error::custom(format!(
                "expected a JSON object, found {}",
                other.type_name()
            ))),
        }
    }
}

impl Doc {
    /// Serializes this document to compact JSON text.
    pub fn to_json_string(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a document from JSON text. The top level must be an object.
    pub fn from_json_str(json: &str) -> crate::Result<Doc> {
        let value: Value = serde_json::from_str(json)?;
        match value {
            Value::Doc(doc) => Ok(doc),
            other => Err(DocError::InvalidJson {
                reason: format!("expected a JSON object, found {}", other.type_name()),
            }
            .into()),
        }
    }
}

/// Returns true when `doc` is absent or has the canonical empty text form.
///
/// ```
/// # use docshape::doc::{Doc, json::is_empty_document};
/// assert!(is_empty_document(None));
/// assert!(is_empty_document(Some(&Doc::new())));
/// assert!(!is_empty_document(Some(&Doc::new().with("a", 1))));
/// ```
pub fn is_empty_document(doc: Option<&Doc>) -> bool {
    doc.is_none_or(Doc::is_empty)
}

/// Serializes each document to JSON text, preserving input order.
pub fn to_json_strings(docs: &[Doc]) -> crate::Result<Vec<String>> {
    docs.iter().map(Doc::to_json_string).collect()
}
