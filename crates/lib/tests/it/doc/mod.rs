//! Document model integration tests
//!
//! Tests for Doc, Value and Path, and the JSON text form of documents.

mod value_tests;
