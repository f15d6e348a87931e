//! Shared test infrastructure for rounding control tests.

use roundctl_core::env::codes;
use roundctl_core::{FenvError, FpEnv};

/// Software double of the floating-point environment.
///
/// Holds a single directive register and a set of accepted codes. Writes of
/// unaccepted codes are rejected and leave the register untouched, matching
/// the all-or-nothing contract of the hardware.
#[derive(Debug, Clone)]
pub struct SoftFpEnv {
    register: i32,
    accepted: Vec<i32>,
}

impl SoftFpEnv {
    /// An environment accepting the four canonical directives, initialized
    /// to round-to-nearest like a real runtime.
    pub fn new() -> Self {
        Self {
            register: codes::FE_TONEAREST,
            accepted: vec![
                codes::FE_TONEAREST,
                codes::FE_DOWNWARD,
                codes::FE_UPWARD,
                codes::FE_TOWARDZERO,
            ],
        }
    }

    /// Like [`SoftFpEnv::new`], but also accepting one extra raw code, to
    /// model hardware with a directive outside the symbolic set.
    pub fn with_extra_code(code: i32) -> Self {
        let mut env = Self::new();
        env.accepted.push(code);
        env
    }
}

impl Default for SoftFpEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl FpEnv for SoftFpEnv {
    fn read_raw(&self) -> i32 {
        self.register
    }

    fn write_raw(&mut self, code: i32) -> Result<(), FenvError> {
        if self.accepted.contains(&code) {
            self.register = code;
            Ok(())
        } else {
            Err(FenvError::UnsupportedMode { code })
        }
    }
}
