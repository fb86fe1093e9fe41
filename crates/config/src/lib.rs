//! Flexver Configuration Module
//!
//! TOML configuration for the flexver tools. The numeric precision
//! capability is decided here, once, and handed to the parser explicitly.
//!
//! ```toml
//! [parser]
//! arbitrary_precision = true
//!
//! [update]
//! accept_partial = true
//!
//! [logging]
//! level = "info"
//! ```

pub mod error;
pub mod settings;

pub use error::{ConfigError, ConfigResult};
pub use settings::{FlexverConfig, LoggingSettings, ParserSettings, UpdateSettings};

/// Default configuration file name looked up by the CLI
pub const DEFAULT_CONFIG_FILE: &str = "flexver.toml";
