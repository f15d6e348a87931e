//! Utility functions exposed to Python.
//!
//! Provides version and diagnostics helpers for the `rounding` module.

use pyo3::prelude::*;

/// Returns the rounding module version string (e.g., for scripting or
/// diagnostics).
///
/// # Returns
///
/// A version string such as `"0.3.1"`.
#[pyfunction]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Initializes tracing output for the embedded Rust code.
///
/// Opt-in: mode transitions are emitted at `TRACE` level, filtered by the
/// `RUST_LOG` environment variable. Safe to call more than once; later calls
/// are no-ops.
#[pyfunction]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
