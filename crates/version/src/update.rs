//! Deciding whether a registry version is newer than an installed one.

use flexver_numeric::Precision;
use tracing::debug;

use crate::outcome::ParseOutcome;
use crate::parser::VersionParser;
use crate::status::StatusCode;
use crate::version::Version;

/// How registry version strings are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdatePolicy {
    /// Numeric capability used while parsing.
    pub precision: Precision,
    /// Whether a partially parsed registry version may drive a decision.
    pub accept_partial: bool,
}

impl Default for UpdatePolicy {
    fn default() -> Self {
        Self {
            precision: Precision::Arbitrary,
            accept_partial: true,
        }
    }
}

impl UpdatePolicy {
    /// A policy that only trusts exactly matching registry strings.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            accept_partial: false,
            ..Self::default()
        }
    }
}

/// Result of comparing an installed version against a registry string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateCheck {
    /// The installed version is the same or newer.
    UpToDate {
        available: Version,
        status: StatusCode,
    },
    /// The registry offers a newer version.
    UpdateAvailable {
        available: Version,
        status: StatusCode,
    },
    /// The registry string parsed only partially and the policy refused it.
    Rejected { outcome: ParseOutcome },
    /// The registry string could not be parsed at all.
    Unknown { raw: String },
}

impl UpdateCheck {
    #[must_use]
    pub fn is_update_available(&self) -> bool {
        matches!(self, Self::UpdateAvailable { .. })
    }

    /// The registry version, when one was accepted.
    #[must_use]
    pub fn available(&self) -> Option<&Version> {
        match self {
            Self::UpToDate { available, .. } | Self::UpdateAvailable { available, .. } => {
                Some(available)
            }
            Self::Rejected { .. } | Self::Unknown { .. } => None,
        }
    }
}

/// Compares `installed` with the version parsed from `available_raw`.
#[must_use]
pub fn check_update(installed: &Version, available_raw: &str, policy: &UpdatePolicy) -> UpdateCheck {
    let outcome = VersionParser::new(policy.precision).parse(available_raw);
    let status = outcome.status();

    let Some(available) = outcome.version().copied() else {
        debug!(available_raw, "registry version unparseable");
        return UpdateCheck::Unknown {
            raw: available_raw.to_string(),
        };
    };

    if status.is_partial() && !policy.accept_partial {
        debug!(available_raw, %status, "partial registry version rejected by policy");
        return UpdateCheck::Rejected { outcome };
    }

    let check = if available > *installed {
        UpdateCheck::UpdateAvailable { available, status }
    } else {
        UpdateCheck::UpToDate { available, status }
    };
    debug!(
        %installed,
        %available,
        %status,
        update = check.is_update_available(),
        "compared installed version against registry"
    );
    check
}

#[cfg(test)]
mod tests {
    use super::*;

    fn installed() -> Version {
        Version::new(1, 4).with_build(2)
    }

    #[test]
    fn test_newer_available() {
        let check = check_update(&installed(), "1.5.0", &UpdatePolicy::default());
        assert!(check.is_update_available());
        assert_eq!(check.available(), Some(&Version::new(1, 5).with_build(0)));
    }

    #[test]
    fn test_same_or_older() {
        let policy = UpdatePolicy::default();
        assert!(matches!(
            check_update(&installed(), "1.4.2", &policy),
            UpdateCheck::UpToDate { status: StatusCode::Exact, .. }
        ));
        assert!(!check_update(&installed(), "1.3.9", &policy).is_update_available());
    }

    #[test]
    fn test_absent_build_is_older() {
        // 1.4 < 1.4.0 because an absent build sorts below zero.
        let check = check_update(&Version::new(1, 4), "1.4.0", &UpdatePolicy::default());
        assert!(check.is_update_available());
    }

    #[test]
    fn test_partial_accepted_by_default() {
        let check = check_update(&installed(), "1.4.3-preview", &UpdatePolicy::default());
        assert_eq!(
            check,
            UpdateCheck::UpdateAvailable {
                available: Version::new(1, 4).with_build(3),
                status: StatusCode::TruncatedBuild,
            }
        );
    }

    #[test]
    fn test_partial_rejected_by_strict_policy() {
        match check_update(&installed(), "1.4.3-preview", &UpdatePolicy::strict()) {
            UpdateCheck::Rejected { outcome } => {
                assert_eq!(outcome.status(), StatusCode::TruncatedBuild);
                assert_eq!(outcome.leftover(crate::Component::Build), "-preview");
            }
            other => panic!("expected rejection, got {other:?}"),
        }

        let exact = check_update(&installed(), "1.5", &UpdatePolicy::strict());
        assert_eq!(exact.available(), Some(&Version::new(1, 5)));
    }

    #[test]
    fn test_unknown() {
        let check = check_update(&installed(), "latest", &UpdatePolicy::default());
        assert_eq!(
            check,
            UpdateCheck::Unknown {
                raw: "latest".to_string()
            }
        );
        assert_eq!(check.available(), None);
    }
}
