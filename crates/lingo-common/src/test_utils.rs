//! Test utilities and shared test helpers for the Lingo workspace.
//!
//! This module provides common testing utilities and helper functions that
//! can be used across all crates in the workspace for unit and integration
//! testing.

use std::sync::Once;

#[cfg(feature = "tracing-subscriber")]
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
#[cfg(feature = "tracing-subscriber")]
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        fmt().with_test_writer().with_env_filter(filter).init();
    });
}

/// No-op version when tracing-subscriber is not available
#[cfg(not(feature = "tracing-subscriber"))]
pub fn init_test_logging() {
    // No-op when tracing-subscriber is not available
    let _ = &INIT;
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}
