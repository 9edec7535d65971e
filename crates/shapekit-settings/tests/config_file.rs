//! Integration tests for config persistence

use shapekit_settings::{Config, SettingsError};
use tempfile::tempdir;

#[test]
fn test_toml_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::new();
    config.history.limit = Some(25);
    config.display.indent_marker = '#';
    config.session.load_demo_scene = false;
    config.save_to_file(&path).unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_json_round_trip_without_limit() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");

    let config = Config::new();
    config.save_to_file(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"indent_marker\": \"+\""));

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.history.limit, None);
    assert_eq!(loaded, config);
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let config = Config::load_or_default(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_invalid_file_content_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[history]\nlimit = 0\n").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::InvalidSetting { .. }));

    std::fs::write(&path, "this is = = not toml").unwrap();
    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::TomlError(_)));
}

#[test]
fn test_unsupported_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    let err = Config::new().save_to_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::UnsupportedFormat(_)));
    assert!(!path.exists());
}
