//! Non-panicking conversions of ASCII digit runs.
//!
//! All converters expect the caller to have isolated a digit run already
//! (see [`crate::leading_digits`]). Anything else, including the leading `+`
//! accepted by the standard library integer parsers, converts to `None`.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;

use crate::digits::is_digit_run;

/// Whether the host can represent integers of arbitrary magnitude.
///
/// This is a capability decided once by the embedding layer and passed down
/// explicitly. It is never probed while a parse is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Precision {
    /// Values beyond `i64` are held exactly as [`BigInt`].
    #[default]
    Arbitrary,
    /// Values beyond `i64` are approximated with `f64`.
    Float,
}

impl Precision {
    /// Returns true if arbitrary precision integers are available.
    #[inline]
    #[must_use]
    pub const fn has_bignum(self) -> bool {
        matches!(self, Self::Arbitrary)
    }
}

impl From<bool> for Precision {
    fn from(has_bignum: bool) -> Self {
        if has_bignum {
            Self::Arbitrary
        } else {
            Self::Float
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arbitrary => f.write_str("arbitrary"),
            Self::Float => f.write_str("float"),
        }
    }
}

/// A value too large for `i64`.
#[derive(Debug, Clone, PartialEq)]
pub enum WideNumber {
    /// Exact arbitrary precision integer.
    Big(BigInt),
    /// Finite floating-point approximation.
    Float(f64),
}

impl WideNumber {
    /// Subtracts `rhs` using this value's own arithmetic.
    #[must_use]
    pub fn minus(&self, rhs: i64) -> Self {
        match self {
            Self::Big(value) => Self::Big(value - BigInt::from(rhs)),
            Self::Float(value) => Self::Float(value - rhs as f64),
        }
    }
}

impl fmt::Display for WideNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Big(value) => write!(f, "{value}"),
            // `f64` display never switches to exponent notation.
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

/// Attempts to convert a digit run to `i32`.
#[must_use]
pub fn try_to_int32(s: &str) -> Option<i32> {
    if !is_digit_run(s) {
        return None;
    }
    s.parse().ok()
}

/// Attempts to convert a digit run to `i64`.
#[must_use]
pub fn try_to_int64(s: &str) -> Option<i64> {
    if !is_digit_run(s) {
        return None;
    }
    s.parse().ok()
}

/// Attempts to convert a digit run to a [`WideNumber`].
///
/// With [`Precision::Arbitrary`] every digit run converts exactly. With
/// [`Precision::Float`] the result is an approximation, and runs so long that
/// they round to infinity are rejected.
#[must_use]
pub fn try_to_bignum_or_float(s: &str, precision: Precision) -> Option<WideNumber> {
    if !is_digit_run(s) {
        return None;
    }
    match precision {
        Precision::Arbitrary => BigInt::from_str(s).ok().map(WideNumber::Big),
        Precision::Float => s
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(WideNumber::Float),
    }
}
