//! Tests for the TOML settings store.

use std::fs;

use tempfile::TempDir;

use less_game::{Settings, SettingsStore};

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = SettingsStore::new(dir.path().join("settings.toml"));
    let settings = store.load().expect("Load failed");
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_save_then_load_roundtrip() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = SettingsStore::new(dir.path().join("settings.toml"));

    let settings = Settings::default()
        .with_alias("Grace".to_string())
        .with_timed(true)
        .with_seconds(120)
        .with_configured(true);
    store.save(&settings).expect("Save failed");

    let loaded = store.load().expect("Load failed");
    assert_eq!(loaded, settings);
}

#[test]
fn test_partial_file_keeps_defaults_for_missing_fields() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("settings.toml");
    fs::write(&path, "alias = \"Grace\"\n").expect("Write failed");

    let loaded = SettingsStore::new(&path).load().expect("Load failed");
    assert_eq!(loaded.alias, "Grace");
    assert_eq!(loaded.player_count, 2);
    assert_eq!(loaded.seconds, 60);
    assert!(!loaded.timed);
    assert!(!loaded.configured);
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("settings.toml");
    fs::write(&path, "alias = [not toml").expect("Write failed");

    let result = SettingsStore::new(&path).load();
    assert!(result.is_err());
}

#[test]
fn test_overwrite_replaces_previous_values() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = SettingsStore::new(dir.path().join("settings.toml"));

    store
        .save(&Settings::default().with_alias("first".to_string()))
        .expect("Save failed");
    store
        .save(&Settings::default().with_alias("second".to_string()))
        .expect("Save failed");

    let loaded = store.load().expect("Load failed");
    assert_eq!(loaded.alias, "second");
}
