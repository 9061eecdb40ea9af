//! Unit tests for loading, updating and persisting the configuration file.

use serde_json::json;
use std::fs;
use tempfile::TempDir;
use toolvana::services::config::{ConfigEngine, ConfigEngineTrait};
use toolvana::types::errors::ConfigError;
use toolvana::types::settings::ToolvanaSettings;

fn setup() -> (TempDir, ConfigEngine) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let engine = ConfigEngine::new(Some(path.to_string_lossy().to_string()));
    (dir, engine)
}

#[test]
fn test_missing_file_loads_defaults() {
    let (_dir, mut engine) = setup();
    let settings = engine.load().unwrap();
    assert_eq!(settings, ToolvanaSettings::default());
    assert_eq!(settings.recent.storage_key, "toolvana_recent");
    assert_eq!(settings.recent.max_items, 5);
    assert_eq!(settings.search.debounce_ms, 300);
    assert_eq!(settings.selectors.tools_grid, "#araclar .tools-grid");
    assert_eq!(settings.storage.theme_key, "toolvana_theme_preference");
}

#[test]
fn test_set_value_persists() {
    let (_dir, mut engine) = setup();
    engine.load().unwrap();
    engine.set_value("search.debounce_ms", json!(150)).unwrap();
    engine
        .set_value("selectors.recent_list", json!("#son-araclar"))
        .unwrap();

    let mut reloaded = ConfigEngine::new(Some(engine.get_config_path().to_string()));
    let settings = reloaded.load().unwrap();
    assert_eq!(settings.search.debounce_ms, 150);
    assert_eq!(settings.selectors.recent_list, "#son-araclar");
    assert_eq!(reloaded.get_settings(), &settings);
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, mut engine) = setup();
    let path = std::path::Path::new(engine.get_config_path()).to_path_buf();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, r#"{"recent":{"max_items":3}}"#).unwrap();
    let settings = engine.load().unwrap();
    assert_eq!(settings.recent.max_items, 3);
    assert_eq!(settings.recent.storage_key, "toolvana_recent");
    assert_eq!(settings.search.debounce_ms, 300);
}

#[test]
fn test_malformed_file_is_error() {
    let (_dir, mut engine) = setup();
    let path = std::path::Path::new(engine.get_config_path()).to_path_buf();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        engine.load(),
        Err(ConfigError::SerializationError(_))
    ));
}

#[test]
fn test_invalid_values_are_rejected() {
    let (_dir, mut engine) = setup();
    engine.load().unwrap();
    assert!(matches!(
        engine.set_value("recent.max_items", json!(0)),
        Err(ConfigError::InvalidValue(_))
    ));
    assert!(matches!(
        engine.set_value("selectors.tools_grid", json!("  ")),
        Err(ConfigError::InvalidValue(_))
    ));
    assert!(matches!(
        engine.set_value("recent.max_items", json!("five")),
        Err(ConfigError::InvalidValue(_))
    ));
    assert!(matches!(
        engine.set_value("recent.unknown", json!(1)),
        Err(ConfigError::InvalidValue(_))
    ));
    assert!(matches!(
        engine.set_value("", json!(1)),
        Err(ConfigError::InvalidValue(_))
    ));
    assert_eq!(engine.get_settings(), &ToolvanaSettings::default());
}

#[test]
fn test_reset_restores_defaults() {
    let (_dir, mut engine) = setup();
    engine.load().unwrap();
    engine.set_value("recent.max_items", json!(2)).unwrap();
    engine.reset().unwrap();
    assert_eq!(engine.get_settings(), &ToolvanaSettings::default());

    let mut reloaded = ConfigEngine::new(Some(engine.get_config_path().to_string()));
    assert_eq!(reloaded.load().unwrap(), ToolvanaSettings::default());
}
