//! Serialized form of parse outcomes and versions.

use flexver::prelude::*;
use serde_json::json;

#[test]
fn test_truncated_outcome_json() {
    let outcome = parse_flexible("1.2.3b.4c", true);
    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        json!({
            "status": 3,
            "version": "1.2.3",
            "leftovers": ["", "", "b", "4c", ""],
        })
    );
}

#[test]
fn test_unparseable_outcome_json_has_no_version() {
    let outcome = parse_flexible("v1.2", false);
    assert_eq!(outcome.status(), StatusCode::Unparseable);
    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value["status"], json!(-1));
    assert!(value["version"].is_null());
}

#[test]
fn test_version_json_uses_display_form() {
    let version: Version = "10.0.19041".parse().unwrap();
    let text = serde_json::to_string(&version).unwrap();
    assert_eq!(text, "\"10.0.19041\"");
    assert_eq!(serde_json::from_str::<Version>(&text).unwrap(), version);
    assert!(serde_json::from_str::<Version>("\"10.x\"").is_err());
}
