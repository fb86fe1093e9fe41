//! Four-part version numbers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::VersionError;
use crate::strict;

/// Sentinel stored in `build` or `revision` when the component is absent.
pub const ABSENT: i32 = -1;

/// A `major.minor[.build[.revision]]` version.
///
/// Ordering is lexicographic over `(major, minor, build, revision)`. An absent
/// component is stored as [`ABSENT`] and therefore sorts below any present
/// value, so `1.2 < 1.2.0 < 1.2.0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version {
    major: i32,
    minor: i32,
    build: i32,
    revision: i32,
}

impl Version {
    /// Creates a two-part version.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if either component is negative.
    #[must_use]
    pub const fn new(major: i32, minor: i32) -> Self {
        debug_assert!(major >= 0 && minor >= 0);
        Self {
            major,
            minor,
            build: ABSENT,
            revision: ABSENT,
        }
    }

    /// Creates a version from raw components, using [`ABSENT`] for missing
    /// trailing ones.
    ///
    /// Returns `None` if `major` or `minor` is negative, if `build` or
    /// `revision` is negative but not [`ABSENT`], or if a revision is given
    /// without a build.
    #[must_use]
    pub const fn from_parts(major: i32, minor: i32, build: i32, revision: i32) -> Option<Self> {
        if major < 0 || minor < 0 || build < ABSENT || revision < ABSENT {
            return None;
        }
        if build == ABSENT && revision != ABSENT {
            return None;
        }
        Some(Self {
            major,
            minor,
            build,
            revision,
        })
    }

    /// Returns a copy with the build component set.
    #[must_use]
    pub const fn with_build(mut self, build: i32) -> Self {
        debug_assert!(build >= 0);
        self.build = build;
        self
    }

    /// Returns a copy with the revision component set.
    ///
    /// A missing build is filled with `0` so the version stays well formed.
    #[must_use]
    pub const fn with_revision(mut self, revision: i32) -> Self {
        debug_assert!(revision >= 0);
        if self.build == ABSENT {
            self.build = 0;
        }
        self.revision = revision;
        self
    }

    #[inline]
    #[must_use]
    pub const fn major(&self) -> i32 {
        self.major
    }

    #[inline]
    #[must_use]
    pub const fn minor(&self) -> i32 {
        self.minor
    }

    /// The build component, if present.
    #[inline]
    #[must_use]
    pub const fn build(&self) -> Option<i32> {
        if self.build == ABSENT {
            None
        } else {
            Some(self.build)
        }
    }

    /// The revision component, if present.
    #[inline]
    #[must_use]
    pub const fn revision(&self) -> Option<i32> {
        if self.revision == ABSENT {
            None
        } else {
            Some(self.revision)
        }
    }

    /// All four components, with [`ABSENT`] for missing ones.
    #[inline]
    #[must_use]
    pub const fn to_parts(&self) -> [i32; 4] {
        [self.major, self.minor, self.build, self.revision]
    }

    /// Returns true if the version can take part in comparisons.
    #[inline]
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.major >= 0 && self.minor >= 0
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if let Some(build) = self.build() {
            write!(f, ".{build}")?;
            if let Some(revision) = self.revision() {
                write!(f, ".{revision}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        strict::parse_components(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
