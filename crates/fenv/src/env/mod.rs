//! Floating-point environment handle.
//!
//! The rounding register is global mutable processor state with no owning
//! data structure; every floating-point instruction on the thread consults
//! it. This module makes that dependency explicit and injectable:
//! 1. **Seam:** the [`FpEnv`] trait, a raw get/set capability over the
//!    active rounding directive.
//! 2. **Production handle:** [`HostFpEnv`], FFI onto the C library's
//!    `fegetround(3)`/`fesetround(3)`.
//! 3. **Code tables:** per-architecture `FE_*` constants in [`codes`].
//!
//! Test harnesses substitute a software implementation of [`FpEnv`] so that
//! controller behavior can be checked without touching the real register.

/// Per-architecture `FE_*` directive codes.
pub mod codes;

/// Host environment handle backed by `fegetround`/`fesetround`.
pub mod host;

pub use host::HostFpEnv;

use crate::error::FenvError;

/// Raw get/set capability over the active rounding directive.
///
/// Implementations operate on the calling thread's floating-point
/// environment (or a software stand-in for it). Both operations are
/// synchronous and non-blocking: a read or write of a single register.
pub trait FpEnv {
    /// Reads the active rounding directive.
    ///
    /// Infallible: once the floating-point environment is initialized (the
    /// runtime does this before any user code runs), a rounding directive is
    /// always well-defined.
    fn read_raw(&self) -> i32;

    /// Installs a rounding directive, all or nothing.
    ///
    /// On success the environment has entirely adopted `code`. On rejection
    /// the previously active directive remains installed, unchanged.
    ///
    /// # Errors
    ///
    /// [`FenvError::UnsupportedMode`] when `code` does not name a valid
    /// rounding direction on this architecture.
    fn write_raw(&mut self, code: i32) -> Result<(), FenvError>;
}
