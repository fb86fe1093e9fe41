//! Error types for strict version parsing.

use thiserror::Error;

/// Why a string is not a well-formed `N.N[.N[.N]]` version.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// The input has fewer than two or more than four components.
    #[error("version must have 2 to 4 components, found {count}")]
    ComponentCount {
        /// Number of `.`-separated components found.
        count: usize,
    },

    /// A component is empty or contains something other than ASCII digits.
    #[error("component {index} is not a digit run: {text:?}")]
    InvalidComponent {
        /// Zero-based component index.
        index: usize,
        /// The offending component.
        text: String,
    },

    /// A component does not fit a 32-bit signed integer.
    #[error("component {index} exceeds {max}: {text}")]
    Overflow {
        /// Zero-based component index.
        index: usize,
        /// The offending component.
        text: String,
        /// Largest accepted value.
        max: i32,
    },
}

impl VersionError {
    /// Create an invalid component error.
    pub fn invalid_component<S: Into<String>>(index: usize, text: S) -> Self {
        Self::InvalidComponent {
            index,
            text: text.into(),
        }
    }

    /// Create an overflow error.
    pub fn overflow<S: Into<String>>(index: usize, text: S) -> Self {
        Self::Overflow {
            index,
            text: text.into(),
            max: i32::MAX,
        }
    }
}

/// Result alias for strict version parsing.
pub type VersionResult<T> = Result<T, VersionError>;
