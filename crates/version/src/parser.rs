//! Best-effort parsing of malformed version strings.
//!
//! [`VersionParser`] first tries a strict parse. When that fails it drops
//! components beyond the fourth, then walks backwards from the last eligible
//! component looking for the latest point where a valid prefix can be kept.
//! Everything it could not use ends up in the outcome's [`Leftovers`].

use flexver_numeric::{leading_digits, try_to_int32, Magnitude, Precision};
use tracing::{debug, trace, warn};

use crate::outcome::{Component, Leftovers, ParseOutcome};
use crate::status::StatusCode;
use crate::strict::{parse_strict, MAX_COMPONENTS, MIN_COMPONENTS};

/// Filler for a minor component that could not be recovered.
const MINOR_FILL: &str = "0";

/// Recovers the best version it can from arbitrary input.
///
/// The parser holds no mutable state; one instance can be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VersionParser {
    precision: Precision,
}

/// What precedes the component being recovered, once validated.
enum Prefix<'a> {
    /// Recovering the major component.
    Empty,
    /// Only the major component precedes.
    Major(&'a str),
    /// At least `major.minor` precedes and forms a valid version.
    Version(String),
}

impl<'a> Prefix<'a> {
    /// Validates `components` as the prefix of a version.
    ///
    /// A lone major component cannot be checked by the strict parser, so it
    /// is checked as a digit run within the component range instead.
    fn validate(components: &[&'a str]) -> Option<Self> {
        match *components {
            [] => Some(Self::Empty),
            [major] => try_to_int32(major).map(|_| Self::Major(major)),
            _ => {
                let joined = components.join(".");
                parse_strict(&joined).map(|_| Self::Version(joined))
            }
        }
    }

    /// Appends `component` to the prefix, filling the minor if needed.
    ///
    /// Returns `None` when there is nothing to build a version from.
    fn candidate(&self, component: Option<&str>) -> Option<String> {
        match (self, component) {
            (Prefix::Empty, None) => None,
            (Prefix::Empty, Some(major)) => Some(format!("{major}.{MINOR_FILL}")),
            (Prefix::Major(major), None) => Some(format!("{major}.{MINOR_FILL}")),
            (Prefix::Major(major), Some(minor)) => Some(format!("{major}.{minor}")),
            (Prefix::Version(prefix), None) => Some(prefix.clone()),
            (Prefix::Version(prefix), Some(component)) => Some(format!("{prefix}.{component}")),
        }
    }
}

impl VersionParser {
    /// Creates a parser with the given numeric capability.
    #[must_use]
    pub const fn new(precision: Precision) -> Self {
        Self { precision }
    }

    #[inline]
    #[must_use]
    pub const fn precision(&self) -> Precision {
        self.precision
    }

    /// Parses `input`, degrading gracefully when it is malformed.
    #[must_use]
    pub fn parse(&self, input: &str) -> ParseOutcome {
        if let Some(version) = parse_strict(input) {
            return ParseOutcome::exact(version);
        }

        let components: Vec<&str> = input.split('.').collect();
        if components.len() < MIN_COMPONENTS {
            trace!(input, "fewer than two components");
            return ParseOutcome::unparseable();
        }

        let excess = components
            .get(MAX_COMPONENTS..)
            .map(|rest| rest.join("."))
            .unwrap_or_default();
        let limit = components.len().min(MAX_COMPONENTS) - 1;

        if let Some(version) = parse_strict(&components[..=limit].join(".")) {
            debug!(input, %version, excess = %excess, "dropped excess components");
            let mut leftovers = Leftovers::default();
            leftovers[Component::Excess] = excess;
            return ParseOutcome::new(version, StatusCode::TruncatedExcess, leftovers);
        }

        for index in (0..=limit).rev() {
            if let Some(outcome) = self.recover_at(input, &components, limit, index, &excess) {
                return outcome;
            }
        }

        debug!(input, "no component could be recovered");
        ParseOutcome::unparseable()
    }

    /// Tries to keep `components[..index]` and salvage `components[index]`.
    fn recover_at(
        &self,
        input: &str,
        components: &[&str],
        limit: usize,
        index: usize,
        excess: &str,
    ) -> Option<ParseOutcome> {
        let Some(prefix) = Prefix::validate(&components[..index]) else {
            trace!(input, index, "prefix is not a valid version");
            return None;
        };

        let component = components[index];
        let (digits, rest) = leading_digits(component);

        let (candidate, leftover) = if digits.is_empty() {
            trace!(input, index, component, "component has no leading digits");
            (prefix.candidate(None)?, component.to_string())
        } else {
            let Some(magnitude) = Magnitude::convert(digits, self.precision) else {
                trace!(input, index, digits, "digit run not representable");
                return None;
            };
            match magnitude.overflow_remainder() {
                Some(remainder) => (
                    prefix.candidate(Some(&magnitude.clamped().to_string()))?,
                    format!("{remainder}{rest}"),
                ),
                None => (prefix.candidate(Some(digits))?, rest.to_string()),
            }
        };

        // Not reached while `Prefix::validate` admits only valid prefixes and
        // `Magnitude::clamped` stays within `0..=i32::MAX`.
        let Some(version) = parse_strict(&candidate) else {
            warn!(
                input,
                index,
                candidate = %candidate,
                "recovered candidate failed strict validation; continuing descent"
            );
            return None;
        };

        let component = Component::from_index(index)?;
        let mut leftovers = Leftovers::default();
        leftovers[component] = leftover;
        for later in index + 1..=limit {
            if let Some(slot) = Component::from_index(later) {
                leftovers[slot] = components[later].to_string();
            }
        }
        leftovers[Component::Excess] = excess.to_string();

        let status = StatusCode::truncated_at(component);
        debug!(input, %version, %status, "recovered truncated version");
        Some(ParseOutcome::new(version, status, leftovers))
    }
}

/// Parses `input` with best-effort recovery.
///
/// `has_bignum` states whether arbitrary precision integers are available
/// for measuring overflow; without them an `f64` approximation is used.
#[must_use]
pub fn parse_flexible(input: &str, has_bignum: bool) -> ParseOutcome {
    VersionParser::new(Precision::from(has_bignum)).parse(input)
}
