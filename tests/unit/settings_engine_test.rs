//! Integration-level unit tests for the SettingsEngine public API.
//!
//! These exercise default loading, value persistence and reset through
//! `SettingsEngineTrait`, using a settings file in a temp directory.

use linkshelf::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use linkshelf::types::errors::SettingsError;
use linkshelf::types::settings::{IdScheme, LinkshelfSettings};
use tempfile::TempDir;

/// Helper: a SettingsEngine backed by `settings.json` inside `dir`.
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

/// Without a settings file, `load()` returns the defaults.
#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(settings, LinkshelfSettings::default());
    assert!(settings.general.seed_sample_links);
    assert_eq!(settings.general.id_scheme, IdScheme::Uuid);
    assert_eq!(settings.logging.filter, "info");
    assert_eq!(settings.rpc.max_requests_per_second, 200);
}

/// `set_value` writes through to disk, so a fresh engine sees the change.
#[test]
fn test_set_value_persists_changes() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine
            .set_value("general.id_scheme", serde_json::json!("sequential"))
            .unwrap();
        engine
            .set_value("logging.filter", serde_json::json!("linkshelf=debug"))
            .unwrap();
    }

    let mut engine = engine_in_temp(&dir);
    let loaded = engine.load().unwrap();
    assert_eq!(loaded.general.id_scheme, IdScheme::Sequential);
    assert_eq!(loaded.logging.filter, "linkshelf=debug");
}

#[test]
fn test_set_value_rejects_unknown_keys() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    assert!(matches!(
        engine.set_value("", serde_json::json!(1)),
        Err(SettingsError::InvalidKey(_))
    ));
    assert!(matches!(
        engine.set_value("general.nope", serde_json::json!(1)),
        Err(SettingsError::InvalidKey(_))
    ));
    assert!(matches!(
        engine.set_value("missing.section", serde_json::json!(1)),
        Err(SettingsError::InvalidKey(_))
    ));
    assert!(matches!(
        engine.set_value("general.seed_sample_links.deeper", serde_json::json!(1)),
        Err(SettingsError::InvalidKey(_))
    ));
}

#[test]
fn test_set_value_rejects_wrong_type() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let err = engine
        .set_value("rpc.max_requests_per_second", serde_json::json!("fast"))
        .unwrap_err();
    assert!(matches!(err, SettingsError::InvalidValue(_)));
    assert_eq!(engine.get_settings().rpc.max_requests_per_second, 200);
}

/// Sections missing from the file keep their defaults.
#[test]
fn test_load_file_with_only_some_sections() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("settings.json"),
        r#"{"general":{"seed_sample_links":false,"id_scheme":"sequential"}}"#,
    )
    .unwrap();

    let mut engine = engine_in_temp(&dir);
    let settings = engine.load().unwrap();

    assert!(!settings.general.seed_sample_links);
    assert_eq!(settings.general.id_scheme, IdScheme::Sequential);
    assert_eq!(settings.logging.filter, "info");
    assert_eq!(settings.rpc.max_requests_per_second, 200);
}

/// Fields missing from a section keep their defaults too.
#[test]
fn test_load_section_with_missing_fields() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("settings.json"),
        r#"{"general":{"id_scheme":"sequential"},"rpc":{}}"#,
    )
    .unwrap();

    let mut engine = engine_in_temp(&dir);
    let settings = engine.load().unwrap();

    assert!(settings.general.seed_sample_links);
    assert_eq!(settings.general.id_scheme, IdScheme::Sequential);
    assert_eq!(settings.rpc.max_requests_per_second, 200);

    engine
        .set_value("logging.filter", serde_json::json!("warn"))
        .unwrap();
    let mut reloaded = engine_in_temp(&dir);
    let reloaded = reloaded.load().unwrap();
    assert_eq!(reloaded.general.id_scheme, IdScheme::Sequential);
    assert_eq!(reloaded.logging.filter, "warn");
}

/// A malformed file is reported instead of silently replaced.
#[test]
fn test_load_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();

    let mut engine = engine_in_temp(&dir);
    assert!(matches!(
        engine.load(),
        Err(SettingsError::SerializationError(_))
    ));
}

#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    engine
        .set_value("general.seed_sample_links", serde_json::json!(false))
        .unwrap();

    engine.reset().unwrap();
    assert_eq!(engine.get_settings(), &LinkshelfSettings::default());

    let mut reloaded = engine_in_temp(&dir);
    assert_eq!(reloaded.load().unwrap(), LinkshelfSettings::default());
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("settings.json");
    let engine = SettingsEngine::new(Some(path.to_string_lossy().to_string()));

    engine.save().unwrap();
    assert!(path.exists());
}

#[test]
fn test_get_config_path() {
    let engine = SettingsEngine::new(Some("/tmp/linkshelf_settings.json".to_string()));
    assert_eq!(engine.get_config_path(), "/tmp/linkshelf_settings.json");
}
