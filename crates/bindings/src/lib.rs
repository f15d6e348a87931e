//! Python bindings for the rounding control service.
//!
//! This crate exposes directed rounding control to Python via PyO3. It
//! provides:
//! 1. **Mode control:** `get_mode()` / `set_mode(i)` with the `-1/0/1`
//!    integer convention and integer status returns.
//! 2. **Constants:** `DOWNWARD`, `TO_NEAREST`, `UPWARD`, and the platform's
//!    `TOWARD_ZERO` directive code.
//! 3. **Utilities:** version string and opt-in tracing initialization.
//!
//! Malformed requests (wrong arity, non-integer argument) are rejected by
//! PyO3 at the call boundary with a `TypeError`, before any hardware
//! interaction; a well-formed request that the hardware rejects comes back
//! as a non-zero status, never an exception.

use pyo3::prelude::*;

use roundctl_core::env::codes;

/// Mode query/set functions (`get_mode`, `set_mode`).
pub mod modes;
/// Utility functions (version, tracing init).
pub mod utils;

/// Registers the rounding functions and constants onto the given module.
///
/// Called from the `#[pymodule]` entry point to expose `get_mode`,
/// `set_mode`, `version`, `init_tracing`, and the mode constants.
///
/// # Errors
///
/// Returns a `PyErr` if registration fails.
pub fn register_rounding_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(modes::get_mode, m)?)?;
    m.add_function(wrap_pyfunction!(modes::set_mode, m)?)?;
    m.add_function(wrap_pyfunction!(utils::version, m)?)?;
    m.add_function(wrap_pyfunction!(utils::init_tracing, m)?)?;

    m.add("DOWNWARD", -1)?;
    m.add("TO_NEAREST", 0)?;
    m.add("UPWARD", 1)?;
    // Toward-zero has no code of its own in the -1/0/1 convention; it is
    // reachable through the raw pass-through path via this platform code.
    m.add("TOWARD_ZERO", codes::FE_TOWARDZERO)?;

    Ok(())
}

#[pymodule]
fn rounding(m: &Bound<'_, PyModule>) -> PyResult<()> {
    register_rounding_module(m)
}
