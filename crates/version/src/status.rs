//! `StatusCode` - how faithfully an input matched a well-formed version.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::outcome::Component;

/// Classification of a parse attempt.
///
/// The codes are ordinal: non-negative codes mean a usable version was
/// produced, `-1` means the version must not be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum StatusCode {
    /// The input is a well-formed version.
    Exact = 0,
    /// The major component was cut short.
    TruncatedMajor = 1,
    /// The minor component was cut short.
    TruncatedMinor = 2,
    /// The build component was cut short.
    TruncatedBuild = 3,
    /// The revision component was cut short.
    TruncatedRevision = 4,
    /// Components beyond the fourth were discarded.
    TruncatedExcess = 5,
    /// No trustworthy version could be produced.
    Unparseable = -1,
}

impl StatusCode {
    /// Converts to the integer code.
    #[must_use]
    pub const fn code(self) -> i8 {
        self as i8
    }

    /// Creates from the integer code.
    #[must_use]
    pub const fn from_code(value: i8) -> Option<Self> {
        match value {
            0 => Some(Self::Exact),
            1 => Some(Self::TruncatedMajor),
            2 => Some(Self::TruncatedMinor),
            3 => Some(Self::TruncatedBuild),
            4 => Some(Self::TruncatedRevision),
            5 => Some(Self::TruncatedExcess),
            -1 => Some(Self::Unparseable),
            _ => None,
        }
    }

    /// The status reported when recovery truncated `component`.
    #[must_use]
    pub const fn truncated_at(component: Component) -> Self {
        match component {
            Component::Major => Self::TruncatedMajor,
            Component::Minor => Self::TruncatedMinor,
            Component::Build => Self::TruncatedBuild,
            Component::Revision => Self::TruncatedRevision,
            Component::Excess => Self::TruncatedExcess,
        }
    }

    /// The component where truncation happened, if any.
    #[must_use]
    pub const fn truncated_component(self) -> Option<Component> {
        match self {
            Self::TruncatedMajor => Some(Component::Major),
            Self::TruncatedMinor => Some(Component::Minor),
            Self::TruncatedBuild => Some(Component::Build),
            Self::TruncatedRevision => Some(Component::Revision),
            Self::TruncatedExcess => Some(Component::Excess),
            Self::Exact | Self::Unparseable => None,
        }
    }

    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "Exact",
            Self::TruncatedMajor => "TruncatedMajor",
            Self::TruncatedMinor => "TruncatedMinor",
            Self::TruncatedBuild => "TruncatedBuild",
            Self::TruncatedRevision => "TruncatedRevision",
            Self::TruncatedExcess => "TruncatedExcess",
            Self::Unparseable => "Unparseable",
        }
    }

    /// Returns true if a usable version was produced.
    #[must_use]
    pub const fn is_usable(self) -> bool {
        self.code() >= 0
    }

    /// Returns true if the input matched exactly.
    #[must_use]
    pub const fn is_exact(self) -> bool {
        matches!(self, Self::Exact)
    }

    /// Returns true if a version was produced but only approximates the input.
    #[must_use]
    pub const fn is_partial(self) -> bool {
        self.code() > 0
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for StatusCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i8(self.code())
    }
}

impl<'de> Deserialize<'de> for StatusCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = i8::deserialize(deserializer)?;
        Self::from_code(code)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid status code: {code}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [StatusCode; 7] = [
        StatusCode::Exact,
        StatusCode::TruncatedMajor,
        StatusCode::TruncatedMinor,
        StatusCode::TruncatedBuild,
        StatusCode::TruncatedRevision,
        StatusCode::TruncatedExcess,
        StatusCode::Unparseable,
    ];

    #[test]
    fn test_status_code_values() {
        assert_eq!(StatusCode::Exact.code(), 0);
        assert_eq!(StatusCode::TruncatedMajor.code(), 1);
        assert_eq!(StatusCode::TruncatedRevision.code(), 4);
        assert_eq!(StatusCode::TruncatedExcess.code(), 5);
        assert_eq!(StatusCode::Unparseable.code(), -1);
    }

    #[test]
    fn test_code_roundtrip() {
        for status in ALL {
            assert_eq!(StatusCode::from_code(status.code()), Some(status));
        }
        assert_eq!(StatusCode::from_code(6), None);
        assert_eq!(StatusCode::from_code(-2), None);
    }

    #[test]
    fn test_usability() {
        assert!(StatusCode::Exact.is_usable());
        assert!(!StatusCode::Exact.is_partial());
        assert!(StatusCode::TruncatedExcess.is_partial());
        assert!(!StatusCode::Unparseable.is_usable());
        assert!(!StatusCode::Unparseable.is_partial());
    }

    #[test]
    fn test_component_mapping() {
        for component in Component::ALL {
            let status = StatusCode::truncated_at(component);
            assert_eq!(status.code() as usize, component.index() + 1);
            assert_eq!(status.truncated_component(), Some(component));
        }
        assert_eq!(StatusCode::Exact.truncated_component(), None);
    }

    #[test]
    fn test_serde_as_code() {
        let json = serde_json::to_string(&StatusCode::TruncatedBuild).unwrap();
        assert_eq!(json, "3");
        let status: StatusCode = serde_json::from_str("-1").unwrap();
        assert_eq!(status, StatusCode::Unparseable);
        assert!(serde_json::from_str::<StatusCode>("9").is_err());
    }
}
