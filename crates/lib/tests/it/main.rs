/*! Integration tests for Credbook.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - labels: Tests for the label text codec
 * - storage: Tests for the storage port and its implementations
 * - store: Tests for AccountStore hydration, persistence and validation
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("credbook=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod helpers;
mod storage;
mod store;
