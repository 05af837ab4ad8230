//! Value types for documents.
//!
//! This module provides the [`Value`] enum that represents everything a
//! document field can hold, and the [`ValueKind`] classification every
//! transformation dispatches on.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

use super::{Doc, DocError, ObjectId};

/// Structural kind of a [`Value`].
///
/// Classification is total: every value falls into exactly one kind.
///
/// - [`Scalar`](ValueKind::Scalar) - the fixed allow-list of primitive kinds
///   (text, 32/64-bit integers, dates, booleans)
/// - [`SubDocument`](ValueKind::SubDocument) - a nested [`Doc`]
/// - [`Sequence`](ValueKind::Sequence) - an ordered list of values
/// - [`Unrecognized`](ValueKind::Unrecognized) - anything else (identifiers,
///   floating point numbers, null). Transformations never treat these as
///   scalars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Scalar,
    SubDocument,
    Sequence,
    Unrecognized,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Scalar => "scalar",
            ValueKind::SubDocument => "sub-document",
            ValueKind::Sequence => "sequence",
            ValueKind::Unrecognized => "unrecognized",
        };
        f.write_str(name)
    }
}

/// Values that can be stored in documents.
///
/// # Value Types
///
/// ## Scalars
/// - [`Value::Text`] - UTF-8 text strings
/// - [`Value::Int`] - 32-bit signed integers
/// - [`Value::Long`] - 64-bit signed integers
/// - [`Value::Date`] - UTC timestamps
/// - [`Value::Bool`] - Boolean values
///
/// ## Containers
/// - [`Value::Doc`] - Nested document
/// - [`Value::List`] - Ordered collection of values
///
/// ## Unrecognized
/// - [`Value::ObjectId`] - Document identifiers
/// - [`Value::Double`] - Floating point numbers
/// - [`Value::Null`] - Explicit null
///
/// # Direct Comparisons
///
/// ```
/// # use docshape::doc::Value;
/// let text = Value::from("hello");
/// let number = Value::from(42);
///
/// assert!(text == "hello");
/// assert!(number == 42);
/// assert!(!(text == 42));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text string value
    Text(String),
    /// 32-bit integer value
    Int(i32),
    /// 64-bit integer value
    Long(i64),
    /// Timestamp value
    Date(DateTime<Utc>),
    /// Boolean value
    Bool(bool),

    /// Nested document
    Doc(Doc),
    /// Ordered collection of values
    List(Vec<Value>),

    /// Document identifier
    ObjectId(ObjectId),
    /// Floating point value
    Double(f64),
    /// Null value
    Null,
}

impl Value {
    /// Classifies this value into its structural kind.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Text(_) | Value::Int(_) | Value::Long(_) | Value::Date(_) | Value::Bool(_) => {
                ValueKind::Scalar
            }
            Value::Doc(_) => ValueKind::SubDocument,
            Value::List(_) => ValueKind::Sequence,
            Value::ObjectId(_) | Value::Double(_) | Value::Null => ValueKind::Unrecognized,
        }
    }

    /// Returns true if this value is on the scalar allow-list
    pub fn is_scalar(&self) -> bool {
        self.kind() == ValueKind::Scalar
    }

    /// Returns true if this is a nested document
    pub fn is_doc(&self) -> bool {
        matches!(self, Value::Doc(_))
    }

    /// Returns true if this is a list
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Date(_) => "date",
            Value::Bool(_) => "bool",
            Value::Doc(_) => "doc",
            Value::List(_) => "list",
            Value::ObjectId(_) => "object_id",
            Value::Double(_) => "double",
            Value::Null => "null",
        }
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to an integer, widening 32-bit values
    pub fn as_long(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(i64::from(*n)),
            Value::Long(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to a timestamp
    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::Date(d) => Some(d),
            _ => None,
        }
    }

    /// Attempts to convert to an object id
    pub fn as_object_id(&self) -> Option<ObjectId> {
        match self {
            Value::ObjectId(id) => Some(*id),
            _ => None,
        }
    }

    /// Attempts to convert to a Doc (returns immutable reference)
    pub fn as_doc(&self) -> Option<&Doc> {
        match self {
            Value::Doc(doc) => Some(doc),
            _ => None,
        }
    }

    /// Attempts to convert to a list (returns immutable reference)
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }
}

/// Classifies a value into its structural kind.
///
/// ```
/// # use docshape::doc::{classify, Value, ValueKind};
/// assert_eq!(classify(&Value::from("x")), ValueKind::Scalar);
/// assert_eq!(classify(&Value::Null), ValueKind::Unrecognized);
/// ```
pub fn classify(value: &Value) -> ValueKind {
    value.kind()
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{s}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Long(n) => write!(f, "{n}"),
            Value::Date(d) => write!(f, "{}", d.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Doc(doc) => write!(f, "{doc}"),
            Value::List(list) => {
                write!(f, "[")?;
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::ObjectId(id) => write!(f, "{id}"),
            Value::Double(n) => write!(f, "{n}"),
            Value::Null => write!(f, "null"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Long(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Date(value)
    }
}

impl From<ObjectId> for Value {
    fn from(value: ObjectId) -> Self {
        Value::ObjectId(value)
    }
}

impl From<Doc> for Value {
    fn from(value: Doc) -> Self {
        Value::Doc(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

fn mismatch(expected: &str, value: &Value) -> DocError {
    DocError::TypeMismatch {
        expected: expected.to_string(),
        actual: value.type_name().to_string(),
    }
}

impl TryFrom<&Value> for String {
    type Error = DocError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s.clone()),
            _ => Err(mismatch("text", value)),
        }
    }
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = DocError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s),
            _ => Err(mismatch("text", value)),
        }
    }
}

impl TryFrom<&Value> for i64 {
    type Error = DocError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_long().ok_or_else(|| mismatch("long", value))
    }
}

impl TryFrom<&Value> for i32 {
    type Error = DocError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => Ok(*n),
            _ => Err(mismatch("int", value)),
        }
    }
}

impl TryFrom<&Value> for bool {
    type Error = DocError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_bool().ok_or_else(|| mismatch("bool", value))
    }
}

impl TryFrom<&Value> for ObjectId {
    type Error = DocError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_object_id().ok_or_else(|| mismatch("object_id", value))
    }
}

impl TryFrom<&Value> for Doc {
    type Error = DocError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Doc(doc) => Ok(doc.clone()),
            _ => Err(mismatch("doc", value)),
        }
    }
}

// PartialEq implementations for comparing Value with primitives
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        match self {
            Value::Text(s) => s == other,
            _ => false,
        }
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        match self {
            Value::Int(n) => n == other,
            _ => false,
        }
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        match self {
            Value::Long(n) => n == other,
            _ => false,
        }
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        match self {
            Value::Bool(b) => b == other,
            _ => false,
        }
    }
}
