//! Error types for the rounding control service.
//!
//! There is exactly one failure the hardware can report: a rejected rounding
//! directive. Rejections are propagated synchronously to the caller as a
//! `Result`; they are never substituted with a fallback mode and never
//! retried, since `fesetround` is deterministic for a given input.

use thiserror::Error;

/// Failure reported by the floating-point environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FenvError {
    /// The environment rejected a rounding directive.
    ///
    /// Raised when `fesetround` returns non-zero: the requested code does not
    /// name a valid rounding direction on this architecture. The previously
    /// active mode remains installed.
    #[error("floating-point environment rejected rounding directive {code:#x}")]
    UnsupportedMode {
        /// The raw hardware code that was rejected.
        code: i32,
    },
}
