//! Result of a flexible parse: version, status and leftovers.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::status::StatusCode;
use crate::version::Version;

/// Number of leftover slots.
pub const LEFTOVER_SLOTS: usize = 5;

/// A leftover slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Component {
    Major = 0,
    Minor = 1,
    Build = 2,
    Revision = 3,
    /// Everything after the fourth `.`-separated component.
    Excess = 4,
}

impl Component {
    /// All slots in index order.
    pub const ALL: [Self; LEFTOVER_SLOTS] = [
        Self::Major,
        Self::Minor,
        Self::Build,
        Self::Revision,
        Self::Excess,
    ];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Major),
            1 => Some(Self::Minor),
            2 => Some(Self::Build),
            3 => Some(Self::Revision),
            4 => Some(Self::Excess),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Build => "build",
            Self::Revision => "revision",
            Self::Excess => "excess",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unparsed input, one slot per [`Component`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Leftovers([String; LEFTOVER_SLOTS]);

impl Leftovers {
    /// Returns true if every slot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(String::is_empty)
    }

    /// The leftover at a raw slot index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Iterates over the non-empty slots.
    pub fn non_empty(&self) -> impl Iterator<Item = (Component, &str)> + '_ {
        Component::ALL
            .into_iter()
            .map(|component| (component, self[component].as_str()))
            .filter(|(_, text)| !text.is_empty())
    }
}

impl Index<Component> for Leftovers {
    type Output = String;

    fn index(&self, component: Component) -> &Self::Output {
        &self.0[component.index()]
    }
}

impl IndexMut<Component> for Leftovers {
    fn index_mut(&mut self, component: Component) -> &mut Self::Output {
        &mut self.0[component.index()]
    }
}

/// The result of one flexible parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParseOutcome {
    version: Version,
    status: StatusCode,
    leftovers: Leftovers,
}

impl ParseOutcome {
    pub(crate) fn new(version: Version, status: StatusCode, leftovers: Leftovers) -> Self {
        Self {
            version,
            status,
            leftovers,
        }
    }

    pub(crate) fn exact(version: Version) -> Self {
        Self::new(version, StatusCode::Exact, Leftovers::default())
    }

    pub(crate) fn unparseable() -> Self {
        Self::new(
            Version::default(),
            StatusCode::Unparseable,
            Leftovers::default(),
        )
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The parsed version, or `None` if the status is
    /// [`StatusCode::Unparseable`].
    #[must_use]
    pub fn version(&self) -> Option<&Version> {
        self.status.is_usable().then_some(&self.version)
    }

    /// The best-effort version regardless of status. Zero for unparseable
    /// input.
    #[inline]
    #[must_use]
    pub fn best_effort_version(&self) -> &Version {
        &self.version
    }

    #[inline]
    #[must_use]
    pub fn leftovers(&self) -> &Leftovers {
        &self.leftovers
    }

    /// The leftover text for one slot.
    #[must_use]
    pub fn leftover(&self, component: Component) -> &str {
        &self.leftovers[component]
    }
}

impl fmt::Display for ParseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.version() {
            Some(version) => write!(f, "{} ({})", version, self.status)?,
            None => write!(f, "{}", self.status)?,
        }
        for (component, text) in self.leftovers.non_empty() {
            write!(f, " {component}={text:?}")?;
        }
        Ok(())
    }
}

impl Serialize for ParseOutcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ParseOutcome", 3)?;
        state.serialize_field("status", &self.status)?;
        state.serialize_field("version", &self.version())?;
        state.serialize_field("leftovers", &self.leftovers)?;
        state.end()
    }
}
