//! Settings for the flexver tools
//!
//! Every key is optional; a missing file section falls back to its defaults.

use std::fs;
use std::path::Path;

use flexver_version::{Precision, UpdatePolicy};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlexverConfig {
    /// Parser capability settings
    #[serde(default)]
    pub parser: ParserSettings,

    /// Update comparison settings
    #[serde(default)]
    pub update: UpdateSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Parser capability settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParserSettings {
    /// Whether arbitrary precision integers are used to measure overflow.
    /// When false, an f64 approximation is used instead.
    #[serde(default = "default_arbitrary_precision")]
    pub arbitrary_precision: bool,
}

/// Update comparison settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateSettings {
    /// Accept partially parsed registry versions (statuses 1 to 5)
    #[serde(default = "default_accept_partial")]
    pub accept_partial: bool,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSettings {
    /// Default filter directive, used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_arbitrary_precision() -> bool {
    true
}

fn default_accept_partial() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            arbitrary_precision: default_arbitrary_precision(),
        }
    }
}

impl Default for UpdateSettings {
    fn default() -> Self {
        Self {
            accept_partial: default_accept_partial(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl ParserSettings {
    /// The numeric capability handed to the parser.
    pub fn precision(&self) -> Precision {
        Precision::from(self.arbitrary_precision)
    }
}

impl FlexverConfig {
    /// Parses configuration from TOML text and validates it.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`. A missing file is an error.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Loads configuration from `path` if given, otherwise returns defaults.
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Checks values serde cannot check on its own.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::invalid_value(
                "logging.level",
                "must not be empty",
            ));
        }
        Ok(())
    }

    /// The update policy described by this configuration.
    pub fn update_policy(&self) -> UpdatePolicy {
        UpdatePolicy {
            precision: self.parser.precision(),
            accept_partial: self.update.accept_partial,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FlexverConfig::default();
        assert!(config.parser.arbitrary_precision);
        assert!(config.update.accept_partial);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.update_policy(), UpdatePolicy::default());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = FlexverConfig::from_toml_str("").unwrap();
        assert_eq!(config, FlexverConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = FlexverConfig::from_toml_str("[parser]\narbitrary_precision = false\n").unwrap();
        assert_eq!(config.parser.precision(), Precision::Float);
        assert!(config.update.accept_partial);
        assert_eq!(config.update_policy().precision, Precision::Float);
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let err = FlexverConfig::from_toml_str("[parser]\nbignum = true\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_rejects_empty_level() {
        let err = FlexverConfig::from_toml_str("[logging]\nlevel = \" \"\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: "logging.level", .. }
        ));
    }
}
