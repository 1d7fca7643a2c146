//! Shared test helpers for `devicedata-core` integration tests.
//!
//! These helpers provide in-memory platform fakes and a recording module so
//! that enrichment tests can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod modules;
pub mod platform;

/// Route `tracing` output to the test harness; repeated calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
