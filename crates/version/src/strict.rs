//! All-or-nothing parsing of well-formed `N.N[.N[.N]]` strings.

use flexver_numeric::{is_digit_run, try_to_int32};

use crate::error::{VersionError, VersionResult};
use crate::version::{Version, ABSENT};

/// Minimum number of components in a version.
pub const MIN_COMPONENTS: usize = 2;
/// Maximum number of components in a version.
pub const MAX_COMPONENTS: usize = 4;

/// Parses `s` as a well-formed version, reporting the first defect found.
///
/// Accepts 2 to 4 `.`-separated runs of ASCII digits, each within
/// `0..=i32::MAX`. Leading zeros are allowed; whitespace, signs, exponents
/// and empty components are not.
pub(crate) fn parse_components(s: &str) -> VersionResult<Version> {
    let count = s.split('.').count();
    if !(MIN_COMPONENTS..=MAX_COMPONENTS).contains(&count) {
        return Err(VersionError::ComponentCount { count });
    }

    let mut parts = [ABSENT; MAX_COMPONENTS];
    for (index, text) in s.split('.').enumerate() {
        parts[index] = match try_to_int32(text) {
            Some(value) => value,
            None if is_digit_run(text) => return Err(VersionError::overflow(index, text)),
            None => return Err(VersionError::invalid_component(index, text)),
        };
    }

    let [major, minor, build, revision] = parts;
    Version::from_parts(major, minor, build, revision)
        .ok_or_else(|| VersionError::invalid_component(0, s))
}

/// Attempts a strict parse of `s`.
///
/// Never panics; every kind of failure (component count, non-digit
/// characters, overflow) yields `None`. Use [`str::parse`] instead when the
/// reason matters.
#[inline]
#[must_use]
pub fn parse_strict(s: &str) -> Option<Version> {
    parse_components(s).ok()
}
