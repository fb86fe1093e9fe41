//! # Flexver Numeric
//!
//! Safe converters for runs of ASCII digits.
//!
//! Every conversion in this crate reports failure as `None` instead of
//! panicking or returning an error, so callers can attempt speculative
//! conversions cheaply:
//! - [`try_to_int32`] / [`try_to_int64`]: fixed-width conversions, `None` on overflow
//! - [`try_to_bignum_or_float`]: arbitrary precision (`BigInt`) or an `f64`
//!   approximation, selected by an explicit [`Precision`] capability
//! - [`Magnitude`]: the int32 → int64 → wide cascade used for overflow recovery
//!
//! ## Example
//!
//! ```rust
//! use flexver_numeric::{leading_digits, Magnitude, Precision};
//!
//! let (digits, rest) = leading_digits("2147483700rc1");
//! assert_eq!((digits, rest), ("2147483700", "rc1"));
//!
//! let magnitude = Magnitude::convert(digits, Precision::Arbitrary).unwrap();
//! assert_eq!(magnitude.overflow_remainder().as_deref(), Some("53"));
//! ```

pub mod convert;
pub mod digits;
pub mod magnitude;

pub use convert::{try_to_bignum_or_float, try_to_int32, try_to_int64, Precision, WideNumber};
pub use digits::{is_digit_run, leading_digits};
pub use magnitude::Magnitude;

/// Largest value a version component may hold.
pub const COMPONENT_MAX: i32 = i32::MAX;
