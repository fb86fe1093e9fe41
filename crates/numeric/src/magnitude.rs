//! The int32 → int64 → wide conversion cascade.

use std::fmt;

use tracing::trace;

use crate::convert::{try_to_bignum_or_float, try_to_int32, try_to_int64, Precision, WideNumber};
use crate::COMPONENT_MAX;

/// A digit run converted by the narrowest representation that holds it.
#[derive(Debug, Clone, PartialEq)]
pub enum Magnitude {
    /// The value fits a version component as is.
    Int32(i32),
    /// The value overflows `i32` but fits `i64`.
    Int64(i64),
    /// The value overflows `i64`.
    Wide(WideNumber),
}

impl Magnitude {
    /// Converts `digits` trying `i32`, then `i64`, then the wide
    /// representation allowed by `precision`.
    ///
    /// Returns `None` only if no tier could represent the value.
    #[must_use]
    pub fn convert(digits: &str, precision: Precision) -> Option<Self> {
        if let Some(value) = try_to_int32(digits) {
            return Some(Self::Int32(value));
        }
        if let Some(value) = try_to_int64(digits) {
            trace!(digits, "digit run overflows i32, held as i64");
            return Some(Self::Int64(value));
        }
        let wide = try_to_bignum_or_float(digits, precision);
        trace!(
            digits,
            %precision,
            converted = wide.is_some(),
            "digit run overflows i64"
        );
        wide.map(Self::Wide)
    }

    /// Returns true if the value overflowed `i32`.
    #[inline]
    #[must_use]
    pub const fn is_overflow(&self) -> bool {
        !matches!(self, Self::Int32(_))
    }

    /// The value clamped to the component range.
    #[must_use]
    pub const fn clamped(&self) -> i32 {
        match self {
            Self::Int32(value) => *value,
            _ => COMPONENT_MAX,
        }
    }

    /// How far the value exceeds [`COMPONENT_MAX`], computed in the tier's own
    /// arithmetic and rendered as text.
    ///
    /// Returns `None` when the value fits.
    #[must_use]
    pub fn overflow_remainder(&self) -> Option<String> {
        match self {
            Self::Int32(_) => None,
            Self::Int64(value) => Some((value - i64::from(COMPONENT_MAX)).to_string()),
            Self::Wide(value) => Some(value.minus(i64::from(COMPONENT_MAX)).to_string()),
        }
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int32(value) => write!(f, "{value}"),
            Self::Int64(value) => write!(f, "{value}"),
            Self::Wide(value) => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cascade_tiers() {
        assert_eq!(
            Magnitude::convert("42", Precision::Arbitrary),
            Some(Magnitude::Int32(42))
        );
        assert_eq!(
            Magnitude::convert("2147483700", Precision::Arbitrary),
            Some(Magnitude::Int64(2_147_483_700))
        );
        assert!(matches!(
            Magnitude::convert("99999999999999999999", Precision::Arbitrary),
            Some(Magnitude::Wide(WideNumber::Big(_)))
        ));
        assert!(matches!(
            Magnitude::convert("99999999999999999999", Precision::Float),
            Some(Magnitude::Wide(WideNumber::Float(_)))
        ));
        assert_eq!(Magnitude::convert("", Precision::Arbitrary), None);
    }

    #[test]
    fn test_overflow_remainder() {
        let fits = Magnitude::convert("7", Precision::Arbitrary).unwrap();
        assert!(!fits.is_overflow());
        assert_eq!(fits.clamped(), 7);
        assert_eq!(fits.overflow_remainder(), None);

        let int64 = Magnitude::convert("2147483700", Precision::Arbitrary).unwrap();
        assert!(int64.is_overflow());
        assert_eq!(int64.clamped(), i32::MAX);
        assert_eq!(int64.overflow_remainder().as_deref(), Some("53"));

        let big = Magnitude::convert("9223372036854775808", Precision::Arbitrary).unwrap();
        assert_eq!(big.overflow_remainder().as_deref(), Some("9223372034707292161"));
    }

    #[test]
    fn test_float_remainder_is_approximate() {
        let float = Magnitude::convert("100000000000000000000", Precision::Float).unwrap();
        // 1e20 - 2147483647 is not representable as f64.
        let remainder: f64 = float.overflow_remainder().unwrap().parse().unwrap();
        assert_eq!(remainder, 1e20 - f64::from(i32::MAX));
    }

    #[test]
    fn test_float_unrepresentable() {
        let digits = "1".repeat(400);
        assert_eq!(Magnitude::convert(&digits, Precision::Float), None);
    }

    proptest! {
        #[test]
        fn test_int64_remainder_matches_arithmetic(value in (i32::MAX as i64 + 1)..i64::MAX) {
            let magnitude = Magnitude::convert(&value.to_string(), Precision::Float).unwrap();
            prop_assert_eq!(magnitude.clone(), Magnitude::Int64(value));
            let expected = (value - i32::MAX as i64).to_string();
            prop_assert_eq!(magnitude.overflow_remainder(), Some(expected));
        }
    }
}
