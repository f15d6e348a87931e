//! Rounding mode control exposed to Python.
//!
//! Reproduces the integer protocol of the original extension module:
//! `-1` downward, `0` to-nearest, `1` upward, any other integer forwarded
//! verbatim as a raw hardware directive. `set_mode` answers with an integer
//! status (`0` installed, `1` rejected) rather than raising, leaving the
//! caller to decide whether a rejected mode change is fatal — an interval
//! algorithm that fails to install a directed mode must not go on to compute
//! a bound as if it had succeeded.

use pyo3::prelude::*;

use roundctl_core::{RoundingController, RoundingMode};

/// Returns the current rounding mode.
///
/// # Returns
///
/// `-1` for downward, `0` for to-nearest, `1` for upward, otherwise the raw
/// hardware directive code (toward-zero reports as its platform code).
#[pyfunction]
pub fn get_mode() -> i32 {
    RoundingController::host().get_mode().to_code()
}

/// Sets the rounding mode for the calling thread.
///
/// The mode stays installed for all subsequent floating-point arithmetic on
/// this thread until overwritten; callers computing enclosures should
/// capture `get_mode()` first and restore it afterward.
///
/// # Arguments
///
/// * `mode` - `-1` downward, `0` to-nearest, `1` upward, or a raw hardware
///   directive code passed through untranslated.
///
/// # Returns
///
/// `0` if the mode was installed, `1` if the hardware rejected it (the
/// previously active mode is then still in effect).
#[pyfunction]
pub fn set_mode(mode: i32) -> i32 {
    let mut ctl = RoundingController::host();
    match ctl.set_mode(RoundingMode::from_code(mode)) {
        Ok(()) => 0,
        Err(_) => 1,
    }
}
