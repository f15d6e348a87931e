//! Rounding mode vocabulary tests.
//!
//! These verify the classification of hardware directive codes, the
//! `-1/0/1` integer convention used at the call boundary, and the raw
//! pass-through escape hatch.

use proptest::prelude::*;
use rstest::rstest;

use roundctl_core::RoundingMode;
use roundctl_core::env::codes;

#[rstest]
#[case(-1, RoundingMode::Downward)]
#[case(0, RoundingMode::ToNearest)]
#[case(1, RoundingMode::Upward)]
fn wire_codes_decode_symbolically(#[case] code: i32, #[case] expected: RoundingMode) {
    assert_eq!(RoundingMode::from_code(code), expected);
    assert_eq!(expected.to_code(), code);
}

#[test]
fn unrecognized_wire_codes_pass_through_raw() {
    assert_eq!(RoundingMode::from_code(0x55), RoundingMode::Raw(0x55));
    assert_eq!(RoundingMode::Raw(0x55).to_code(), 0x55);
    assert_eq!(RoundingMode::from_code(-7), RoundingMode::Raw(-7));
}

#[rstest]
#[case(codes::FE_DOWNWARD, RoundingMode::Downward)]
#[case(codes::FE_TONEAREST, RoundingMode::ToNearest)]
#[case(codes::FE_UPWARD, RoundingMode::Upward)]
#[case(codes::FE_TOWARDZERO, RoundingMode::TowardZero)]
fn canonical_hardware_codes_classify(#[case] code: i32, #[case] expected: RoundingMode) {
    assert_eq!(RoundingMode::from_raw(code), expected);
    assert_eq!(expected.to_raw(), code);
}

// The documented vocabulary has four directions but the integer convention
// only names three; toward-zero travels as its platform hardware code. On
// riscv that code overlaps the -1/0/1 range, which is an ambiguity inherited
// from the protocol, so the non-overlap claim is checked where it holds.
#[cfg(not(any(target_arch = "riscv32", target_arch = "riscv64")))]
#[test]
fn toward_zero_has_no_dedicated_wire_code() {
    let code = RoundingMode::TowardZero.to_code();
    assert_eq!(code, codes::FE_TOWARDZERO);
    assert!(![-1, 0, 1].contains(&code));
    assert_eq!(RoundingMode::from_code(code), RoundingMode::Raw(code));
}

#[test]
fn display_names() {
    assert_eq!(RoundingMode::Downward.to_string(), "downward");
    assert_eq!(RoundingMode::ToNearest.to_string(), "to-nearest");
    assert_eq!(RoundingMode::Upward.to_string(), "upward");
    assert_eq!(RoundingMode::TowardZero.to_string(), "toward-zero");
    assert_eq!(RoundingMode::Raw(0x55).to_string(), "raw(0x55)");
}

#[test]
fn modes_serialize_for_fixtures() {
    let json = serde_json::to_string(&RoundingMode::Downward).unwrap();
    assert_eq!(json, "\"Downward\"");
    let back: RoundingMode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, RoundingMode::Downward);

    let raw: RoundingMode = serde_json::from_str("{\"Raw\":1024}").unwrap();
    assert_eq!(raw, RoundingMode::Raw(1024));
}

proptest! {
    // Classification is total and lossless: every i32 maps to a mode whose
    // hardware code is the original value.
    #[test]
    fn raw_classification_is_lossless(code in any::<i32>()) {
        prop_assert_eq!(RoundingMode::from_raw(code).to_raw(), code);
    }

    // The wire decode never invents a symbolic direction outside -1/0/1.
    #[test]
    fn wire_decode_outside_convention_is_raw(code in any::<i32>()) {
        prop_assume!(!(-1..=1).contains(&code));
        prop_assert_eq!(RoundingMode::from_code(code), RoundingMode::Raw(code));
    }
}
