//! Digit-run helpers.

/// Returns true if `s` is a non-empty run of ASCII digits.
#[inline]
#[must_use]
pub fn is_digit_run(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Splits `s` into its longest leading run of ASCII digits and the remainder.
///
/// The split always lands on a char boundary because ASCII digits are single
/// bytes, so `rest` keeps every byte of the input that was not consumed.
#[must_use]
pub fn leading_digits(s: &str) -> (&str, &str) {
    let end = s
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len());
    s.split_at(end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_is_digit_run() {
        assert!(is_digit_run("0"));
        assert!(is_digit_run("0123456789"));
        assert!(!is_digit_run(""));
        assert!(!is_digit_run("+1"));
        assert!(!is_digit_run("1 "));
        assert!(!is_digit_run("1e5"));
        assert!(!is_digit_run("١٢")); // Arabic-Indic digits are not ASCII
    }

    #[test]
    fn test_leading_digits() {
        assert_eq!(leading_digits("4abc"), ("4", "abc"));
        assert_eq!(leading_digits("123"), ("123", ""));
        assert_eq!(leading_digits("abc"), ("", "abc"));
        assert_eq!(leading_digits(""), ("", ""));
        assert_eq!(leading_digits("12-beta.3"), ("12", "-beta.3"));
    }

    #[test]
    fn test_leading_digits_multibyte_rest() {
        assert_eq!(leading_digits("7ß"), ("7", "ß"));
        assert_eq!(leading_digits("ß7"), ("", "ß7"));
    }

    proptest! {
        #[test]
        fn test_split_preserves_input(s in "\\PC*") {
            let (digits, rest) = leading_digits(&s);
            prop_assert_eq!(format!("{digits}{rest}"), s.clone());
            prop_assert!(digits.is_empty() || is_digit_run(digits));
            prop_assert!(!rest.bytes().next().is_some_and(|b| b.is_ascii_digit()));
        }
    }
}
