//! Hardware rounding directive codes.
//!
//! The `FE_*` values accepted by `fesetround(3)` are architecture ABI
//! constants fixed by the platform's `fenv.h`:
//!
//! | Constant       | x86/x86_64 | arm/aarch64 | riscv |
//! |----------------|------------|-------------|-------|
//! | `FE_TONEAREST` | 0x000      | 0x000000    | 0x0   |
//! | `FE_DOWNWARD`  | 0x400      | 0x800000    | 0x2   |
//! | `FE_UPWARD`    | 0x800      | 0x400000    | 0x3   |
//! | `FE_TOWARDZERO`| 0xC00      | 0xC00000    | 0x1   |
//!
//! x86 encodes the direction in the MXCSR/x87 control-word rounding field,
//! AArch64 in FPCR.RMode, and RISC-V in `fcsr.frm`. Codes outside these four
//! are rejected by `fesetround` on every supported architecture.

/// Round to nearest representable value, ties to even (the IEEE default).
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub const FE_TONEAREST: i32 = 0x000;
/// Round toward −∞.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub const FE_DOWNWARD: i32 = 0x400;
/// Round toward +∞.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub const FE_UPWARD: i32 = 0x800;
/// Round toward zero (truncation).
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub const FE_TOWARDZERO: i32 = 0xC00;

/// Round to nearest representable value, ties to even (the IEEE default).
#[cfg(any(target_arch = "arm", target_arch = "aarch64"))]
pub const FE_TONEAREST: i32 = 0x000000;
/// Round toward −∞.
#[cfg(any(target_arch = "arm", target_arch = "aarch64"))]
pub const FE_DOWNWARD: i32 = 0x800000;
/// Round toward +∞.
#[cfg(any(target_arch = "arm", target_arch = "aarch64"))]
pub const FE_UPWARD: i32 = 0x400000;
/// Round toward zero (truncation).
#[cfg(any(target_arch = "arm", target_arch = "aarch64"))]
pub const FE_TOWARDZERO: i32 = 0xC00000;

/// Round to nearest representable value, ties to even (the IEEE default).
#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
pub const FE_TONEAREST: i32 = 0x0;
/// Round toward −∞.
#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
pub const FE_DOWNWARD: i32 = 0x2;
/// Round toward +∞.
#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
pub const FE_UPWARD: i32 = 0x3;
/// Round toward zero (truncation).
#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
pub const FE_TOWARDZERO: i32 = 0x1;

#[cfg(not(any(
    target_arch = "x86",
    target_arch = "x86_64",
    target_arch = "arm",
    target_arch = "aarch64",
    target_arch = "riscv32",
    target_arch = "riscv64",
)))]
compile_error!(
    "roundctl-core does not know the fenv.h rounding codes for this \
     architecture; add them to env/codes.rs rather than guessing"
);
