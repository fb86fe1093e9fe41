//! # Flexver Version
//!
//! Four-part `major.minor[.build[.revision]]` versions, parsed either strictly
//! or with best-effort recovery.
//!
//! - [`Version`]: ordered value type; absent components sort lowest
//! - [`parse_strict`]: all-or-nothing parse, `None` on any defect
//! - [`parse_flexible`] / [`VersionParser`]: recovers what it can and reports
//!   a [`StatusCode`] plus the unparsed [`Leftovers`]
//! - [`check_update`]: compares an installed version with a registry string
//!
//! ## Example
//!
//! ```rust
//! use flexver_version::{parse_flexible, Component, StatusCode, Version};
//!
//! let outcome = parse_flexible("1.2.3.4abc", true);
//! assert_eq!(outcome.status(), StatusCode::TruncatedRevision);
//! assert_eq!(outcome.version(), Some(&Version::new(1, 2).with_build(3).with_revision(4)));
//! assert_eq!(outcome.leftover(Component::Revision), "abc");
//! ```

pub mod error;
pub mod outcome;
pub mod parser;
pub mod status;
pub mod strict;
pub mod update;
pub mod version;

// Re-exports
pub use error::{VersionError, VersionResult};
pub use flexver_numeric::Precision;
pub use outcome::{Component, Leftovers, ParseOutcome, LEFTOVER_SLOTS};
pub use parser::{parse_flexible, VersionParser};
pub use status::StatusCode;
pub use strict::{parse_strict, MAX_COMPONENTS, MIN_COMPONENTS};
pub use update::{check_update, UpdateCheck, UpdatePolicy};
pub use version::{Version, ABSENT};
