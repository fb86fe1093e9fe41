//! Loading configuration files from disk.

use std::io::Write;

use flexver_config::{ConfigError, FlexverConfig};
use flexver_version::{Precision, UpdatePolicy};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_full_file() {
    let file = write_config(
        r#"
[parser]
arbitrary_precision = false

[update]
accept_partial = false

[logging]
level = "flexver=debug"
"#,
    );

    let config = FlexverConfig::load(file.path()).unwrap();
    assert_eq!(config.parser.precision(), Precision::Float);
    assert_eq!(config.logging.level, "flexver=debug");
    assert_eq!(
        config.update_policy(),
        UpdatePolicy {
            precision: Precision::Float,
            accept_partial: false,
        }
    );
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = FlexverConfig::load(&path).unwrap_err();
    match err {
        ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_load_invalid_toml() {
    let file = write_config("[parser\narbitrary_precision = true");
    let err = FlexverConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
    assert!(err.to_string().starts_with("config: toml parse error"));
}

#[test]
fn test_load_or_default() {
    let config = FlexverConfig::load_or_default(None).unwrap();
    assert_eq!(config, FlexverConfig::default());

    let file = write_config("[update]\naccept_partial = false\n");
    let config = FlexverConfig::load_or_default(Some(file.path())).unwrap();
    assert!(!config.update.accept_partial);
    assert!(config.parser.arbitrary_precision);
}
