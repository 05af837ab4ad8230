//! Transformation integration tests
//!
//! One file per transformation; cross-cutting guarantees live in `properties`.

mod expand_tests;
mod fold_tests;
mod normalize_tests;
