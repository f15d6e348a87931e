//! Floating-point rounding direction vocabulary.
//!
//! IEEE-754 defines four directed rounding attributes. This module
//! implements the following:
//! 1. **Mode Classification:** the four symbolic directions plus a raw
//!    pass-through for hardware-specific directives.
//! 2. **Conversions:** between modes, hardware `FE_*` codes, and the
//!    `-1/0/1` integer convention used at the Python boundary.
//! 3. **Observability:** human-readable naming and display formatting.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::env::codes;

/// A directed-rounding policy for floating-point results.
///
/// The symbolic variants map 1:1 onto the hardware directives in
/// [`codes`]; [`RoundingMode::Raw`] forwards an architecture-specific code
/// verbatim, for directives outside the symbolic set.
///
/// Mode values are stateless tags. The entity with a lifecycle is the
/// *active* mode, a per-thread hardware register that this vocabulary only
/// names; see [`crate::RoundingController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundingMode {
    /// Round toward −∞. Used for guaranteed lower bounds.
    Downward,
    /// Round to nearest representable value, ties to even.
    ///
    /// The conventional default; runtimes initialize the register to this
    /// mode before any user code runs.
    ToNearest,
    /// Round toward +∞. Used for guaranteed upper bounds.
    Upward,
    /// Round toward zero (truncation).
    TowardZero,
    /// An architecture-specific directive passed through untranslated.
    Raw(i32),
}

impl RoundingMode {
    /// Classifies a hardware directive code.
    ///
    /// Total: codes matching the platform's canonical `FE_*` values become
    /// symbolic variants, anything else becomes [`RoundingMode::Raw`]. A
    /// read of the environment therefore never fails merely because the
    /// code is unrecognized.
    #[must_use]
    pub fn from_raw(code: i32) -> Self {
        match code {
            codes::FE_DOWNWARD => Self::Downward,
            codes::FE_TONEAREST => Self::ToNearest,
            codes::FE_UPWARD => Self::Upward,
            codes::FE_TOWARDZERO => Self::TowardZero,
            other => Self::Raw(other),
        }
    }

    /// Returns the hardware directive code for this mode.
    ///
    /// Symbolic variants translate to the platform's `FE_*` value;
    /// [`RoundingMode::Raw`] is forwarded verbatim.
    #[must_use]
    pub fn to_raw(self) -> i32 {
        match self {
            Self::Downward => codes::FE_DOWNWARD,
            Self::ToNearest => codes::FE_TONEAREST,
            Self::Upward => codes::FE_UPWARD,
            Self::TowardZero => codes::FE_TOWARDZERO,
            Self::Raw(code) => code,
        }
    }

    /// Decodes the `-1/0/1` integer convention used at the call boundary.
    ///
    /// `-1` is downward, `0` nearest, `1` upward; any other integer is
    /// interpreted as a raw hardware directive and passed through verbatim.
    /// Toward-zero has no code of its own in this convention (it travels as
    /// its platform `FE_TOWARDZERO` value through the raw path).
    #[must_use]
    pub fn from_code(code: i32) -> Self {
        match code {
            -1 => Self::Downward,
            0 => Self::ToNearest,
            1 => Self::Upward,
            other => Self::Raw(other),
        }
    }

    /// Encodes this mode in the `-1/0/1` integer convention.
    ///
    /// The three wire-symbolic directions report `-1/0/1`; toward-zero and
    /// raw directives report the hardware code, so a set/get round-trip over
    /// the integer boundary stays consistent.
    #[must_use]
    pub fn to_code(self) -> i32 {
        match self {
            Self::Downward => -1,
            Self::ToNearest => 0,
            Self::Upward => 1,
            Self::TowardZero | Self::Raw(_) => self.to_raw(),
        }
    }

    /// Returns the human-readable name of the rounding direction.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Downward => "downward",
            Self::ToNearest => "to-nearest",
            Self::Upward => "upward",
            Self::TowardZero => "toward-zero",
            Self::Raw(_) => "raw",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(code) => write!(f, "raw({code:#x})"),
            other => f.write_str(other.name()),
        }
    }
}
