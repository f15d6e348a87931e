//! Unit tests for the rounding control components.



/// Mode vocabulary classification and integer conversions.
pub mod mode;
