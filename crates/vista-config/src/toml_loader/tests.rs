//! Tests for TOML config loading, creation, and path resolution.

use super::template::default_config_toml;
use super::*;
use crate::schema::VistaConfig;
use std::path::Path;
use vista_common::ConfigError;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_vista_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[chrome]
activation_threshold = 48.0

[boundary]
distance = 500.0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.chrome.activation_threshold, 48.0);
    assert_eq!(config.boundary.distance, 500.0);
    // Defaults preserved
    assert_eq!(config.chrome.noise_threshold, 3.0);
    assert_eq!(config.sticky.threshold, 120.0);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[chrome]
chrome_height = 0.0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.chrome.chrome_height, 56.0);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vista").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.chrome.activation_threshold, 30.0);
}

#[test]
fn default_config_toml_is_valid() {
    let config: VistaConfig = toml::from_str(&default_config_toml()).unwrap();
    assert_eq!(config.boundary.dead_zone, 10.0);
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("vista"));
        assert!(path_str.ends_with("config.toml"));
    }
}

#[test]
fn read_from_path_skips_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[chrome]\nchrome_height = 0.0\n").unwrap();

    let config = read_from_path(&path).unwrap();
    assert_eq!(config.chrome.chrome_height, 0.0);
}
