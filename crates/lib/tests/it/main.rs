/*! Integration tests for Confluence.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - doc: Tests for values, maps and paths
 * - diff: Tests for diff computation and patch application
 * - text: Tests for character-level merging
 * - resolve: Tests for three-way merges of documents and diffs
 * - properties: Property-based tests over generated documents
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("confluence=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod doc;
mod properties;
mod resolve;
mod text;
