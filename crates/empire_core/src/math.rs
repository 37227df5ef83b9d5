//! Fixed-point math utilities for deterministic output modifiers.
//!
//! Improvement effects such as the Library's science bonus are stored as
//! fixed-point multipliers. Floating-point operations can produce
//! different results on different CPUs, and city output must match on
//! every client.

use fixed::types::{I32F32, I64F64};

/// Fixed-point number type for all modifier math.
///
/// Uses 32 bits for integer part and 32 bits for fractional part.
/// Range: approximately -2,147,483,648 to 2,147,483,647
/// Precision: approximately 0.00000000023
pub type Fixed = I32F32;

/// Serde support for fixed-point numbers.
///
/// Serializes fixed-point numbers as their raw bit representation (i64)
/// to preserve exact precision across serialization boundaries.
pub mod fixed_serde {
    use super::Fixed;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serialize a fixed-point number as its raw bit representation.
    pub fn serialize<S>(value: &Fixed, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.to_bits().serialize(serializer)
    }

    /// Deserialize a fixed-point number from its raw bit representation.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Fixed, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = i64::deserialize(deserializer)?;
        Ok(Fixed::from_bits(bits))
    }
}

/// Build a multiplier from a whole percentage (150 -> 1.5).
#[must_use]
pub fn from_percent(percent: u32) -> Fixed {
    Fixed::saturating_from_num(percent) / Fixed::from_num(100)
}

/// Apply a multiplier to a whole output amount, rounding down.
///
/// Every `u32` amount is accepted: the product is taken in `I64F64` and
/// saturates at `u32::MAX`. Negative factors clamp to zero output.
#[must_use]
pub fn scale(amount: u32, factor: Fixed) -> u32 {
    let scaled = I64F64::from_num(amount).saturating_mul(I64F64::from_num(factor));
    if scaled <= I64F64::ZERO {
        return 0;
    }
    scaled.floor().saturating_to_num::<u32>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_determinism() {
        // Same operations must produce identical results
        let a = Fixed::from_num(1) / Fixed::from_num(3);
        let b = Fixed::from_num(1) / Fixed::from_num(3);
        assert_eq!(a, b);

        let result1 = a * Fixed::from_num(7);
        let result2 = b * Fixed::from_num(7);
        assert_eq!(result1, result2);
    }

    #[test]
    fn test_from_percent() {
        assert_eq!(from_percent(150), Fixed::from_num(1.5));
        assert_eq!(from_percent(100), Fixed::from_num(1));
        assert_eq!(from_percent(0), Fixed::ZERO);
    }

    #[test]
    fn test_scale_rounds_down() {
        let one_and_half = from_percent(150);
        assert_eq!(scale(10, one_and_half), 15);
        // 7 * 1.5 = 10.5
        assert_eq!(scale(7, one_and_half), 10);
        assert_eq!(scale(0, one_and_half), 0);
    }

    #[test]
    fn test_scale_full_u32_range() {
        assert_eq!(scale(u32::MAX, Fixed::ONE), u32::MAX);
        assert_eq!(scale(3_000_000_000, from_percent(50)), 1_500_000_000);
        assert_eq!(scale(3_000_000_000, from_percent(150)), u32::MAX);
        assert_eq!(scale(u32::MAX, Fixed::MAX), u32::MAX);
    }

    #[test]
    fn test_from_percent_saturates() {
        assert_eq!(from_percent(u32::MAX), Fixed::MAX / Fixed::from_num(100));
    }

    #[test]
    fn test_scale_negative_factor_clamps() {
        assert_eq!(scale(10, Fixed::from_num(-2)), 0);
    }

    #[test]
    fn test_fixed_bits_for_data_files() {
        // Catalog RON files store multipliers as raw bits
        assert_eq!(Fixed::from_num(1.5).to_bits(), 6_442_450_944);
        assert_eq!(Fixed::from_num(3).to_bits(), 12_884_901_888);
    }
}
