//! Directed floating-point rounding control.
//!
//! This crate exposes the host's IEEE-754 rounding direction to Rust code so
//! that numerical algorithms can compute guaranteed enclosures. It provides:
//! 1. **Mode vocabulary:** [`RoundingMode`], the four symbolic rounding
//!    directions plus a raw pass-through for hardware-specific directives.
//! 2. **Environment seam:** [`FpEnv`], an injectable handle over the
//!    floating-point environment, with [`HostFpEnv`] backed by
//!    `fegetround(3)`/`fesetround(3)`.
//! 3. **Controller:** [`RoundingController`], which reads and installs
//!    directives and offers scoped save/restore around directed computations.
//!
//! The rounding register is per-OS-thread processor state. Installing a mode
//! affects every subsequent floating-point instruction on the calling thread
//! until it is overwritten, so directed computations should restore the prior
//! mode when they finish:
//!
//! ```
//! use roundctl_core::{RoundingController, RoundingMode};
//!
//! let mut ctl = RoundingController::host();
//! let lo = ctl.with_mode(RoundingMode::Downward, || {
//!     std::hint::black_box(1.0_f64) / std::hint::black_box(3.0)
//! })?;
//! let hi = ctl.with_mode(RoundingMode::Upward, || {
//!     std::hint::black_box(1.0_f64) / std::hint::black_box(3.0)
//! })?;
//! assert!(lo < hi); // [lo, hi] encloses 1/3
//! # Ok::<(), roundctl_core::FenvError>(())
//! ```

/// Rounding controller and scoped mode guard.
pub mod controller;
/// Floating-point environment handle (trait, host FFI, hardware code tables).
pub mod env;
/// Error types for rejected rounding directives.
pub mod error;
/// Rounding mode vocabulary and integer conversions.
pub mod mode;

/// Main controller type; construct with `RoundingController::host()`.
pub use crate::controller::{ModeGuard, RoundingController};
/// Environment seam; implement for software doubles, use `HostFpEnv` in production.
pub use crate::env::{FpEnv, HostFpEnv};
/// Error returned when the environment rejects a directive.
pub use crate::error::FenvError;
/// The rounding direction vocabulary.
pub use crate::mode::RoundingMode;
