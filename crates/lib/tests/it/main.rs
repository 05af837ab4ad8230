/*! Integration tests for Docshape.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - doc: Tests for the Doc and Value types, paths and JSON text
 * - ops: Tests for expand, union, normalize, fold and find
 * - query: Tests for path queries and their diagnostics
 * - extract: Tests for identifier extraction and escape collapsing
 * - properties: Cross-cutting guarantees shared by every transformation
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("docshape=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod doc;
mod ops;
mod query;
