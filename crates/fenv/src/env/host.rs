//! Host floating-point environment.
//!
//! FFI onto the C library's `fenv.h` rounding interface. `fegetround` and
//! `fesetround` are thin wrappers over the architecture's control register
//! (MXCSR/x87 control word, FPCR, or `fcsr`), so both calls are a handful of
//! instructions with no blocking phase and no allocation.

use libc::c_int;

use crate::error::FenvError;

use super::FpEnv;

unsafe extern "C" {
    fn fegetround() -> c_int;
    fn fesetround(round: c_int) -> c_int;
}

/// Handle over the calling thread's hardware floating-point environment.
///
/// Zero-sized: the state lives in the processor, scoped per OS thread. Two
/// handles on the same thread alias the same register; handles on different
/// threads are independent and never observe each other's mode changes.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostFpEnv;

impl HostFpEnv {
    /// Creates a handle to the current thread's floating-point environment.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FpEnv for HostFpEnv {
    fn read_raw(&self) -> i32 {
        // SAFETY: fegetround reads the thread's rounding field and touches
        // no memory; it cannot fail once the fp environment is initialized,
        // which the runtime guarantees before main.
        unsafe { fegetround() }
    }

    fn write_raw(&mut self, code: i32) -> Result<(), FenvError> {
        // SAFETY: fesetround writes the thread's rounding field and touches
        // no memory. It validates its argument and leaves the register
        // unchanged when the code is invalid, reporting non-zero.
        let status = unsafe { fesetround(code) };
        if status == 0 {
            Ok(())
        } else {
            Err(FenvError::UnsupportedMode { code })
        }
    }
}
