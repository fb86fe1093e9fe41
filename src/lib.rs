//! # flexver: best-effort parsing of dotted version strings
//!
//! Registry metadata, tool banners and hand-edited manifests rarely contain
//! clean `major.minor[.build[.revision]]` versions. flexver recovers the best
//! version it can from such input and reports exactly what it had to leave
//! behind.
//!
//! This library provides:
//! - Strict, all-or-nothing parsing of well-formed versions
//! - Flexible parsing with a [`StatusCode`] saying which component was cut short
//! - Leftover text for every truncated component, byte for byte
//! - Overflow measurement with big integers or an `f64` fallback
//! - Update decisions comparing an installed version with a registry string
//!
//! ## Quick Start
//!
//! ```rust
//! use flexver::prelude::*;
//!
//! let outcome = parse_flexible("1.2.2147483700.4", true);
//! assert_eq!(outcome.status(), StatusCode::TruncatedBuild);
//! assert_eq!(outcome.leftover(Component::Build), "53");
//! assert_eq!(outcome.leftover(Component::Revision), "4");
//!
//! let installed: Version = "1.2.0".parse().unwrap();
//! assert!(outcome.version().is_some_and(|available| *available > installed));
//! ```
//!
//! ## Architecture
//!
//! - [`numeric`] - Non-panicking digit-run converters
//! - [`version`] - Version type, strict and flexible parsers, update checks
//! - [`config`] - TOML configuration for the capability flag and policies

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub use flexver_config as config;
pub use flexver_numeric as numeric;
pub use flexver_version as version;

pub use flexver_version::{
    check_update, parse_flexible, parse_strict, Component, Leftovers, ParseOutcome, Precision,
    StatusCode, UpdateCheck, UpdatePolicy, Version, VersionError, VersionParser,
};

/// Common imports for flexver users
pub mod prelude {
    pub use crate::config::FlexverConfig;
    pub use crate::version::{
        check_update, parse_flexible, parse_strict, Component, ParseOutcome, Precision,
        StatusCode, UpdateCheck, UpdatePolicy, Version, VersionParser,
    };
}
