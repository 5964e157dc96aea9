//! Integration tests for configuration loading and saving

use osi_journey::config::loader::{ConfigLoader, LoadOptions};
use osi_journey::config::{Config, RuntimeConfig};
use osi_journey::{Error, LengthUnit};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_toml_round_trip_through_runtime_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.ui.theme_name = "dark".to_string();
    config.ui.font_size = 18;
    config.activation.length_unit = LengthUnit::Utf16;
    ConfigLoader::new().save_to_path(&config, &path).unwrap();

    let runtime = RuntimeConfig::load_from_file(&path).unwrap();
    assert_eq!(runtime.config(), &config);
    assert_eq!(runtime.theme_manager().current_theme_name(), "dark");
    assert_eq!(runtime.activation_rules().length_unit, LengthUnit::Utf16);
    assert_eq!(runtime.config_path(), Some(path.as_path()));
}

#[test]
fn test_json_config_is_detected_by_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{ "ui": { "font_size": 20, "show_layer_descriptions": true } }"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_path(&path).unwrap();
    assert_eq!(config.ui.font_size, 20);
    assert!(config.ui.show_layer_descriptions);
    // Missing fields keep their defaults
    assert_eq!(config.ui.theme_name, "light");
    assert_eq!(config.activation.length_unit, LengthUnit::Chars);
}

#[test]
fn test_partial_toml_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[activation]\nlength_unit = \"utf16\"\n").unwrap();

    let config = ConfigLoader::load_from_path(&path).unwrap();
    assert_eq!(config.activation.length_unit, LengthUnit::Utf16);
    assert_eq!(config.ui, Config::default().ui);
}

#[test]
fn test_invalid_font_size_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui]\nfont_size = 200\n").unwrap();

    let result = RuntimeConfig::load_from_file(&path);
    match result {
        Err(Error::ConfigValidationFailed { field, .. }) => assert_eq!(field, "ui.font_size"),
        other => panic!("expected validation error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_malformed_toml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui\nfont_size = ").unwrap();

    let result = ConfigLoader::load_from_path(&path);
    assert!(matches!(result, Err(Error::ConfigParseFailed { .. })));
}

#[test]
fn test_missing_file_is_a_load_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let result = RuntimeConfig::load_from_file(&path);
    assert!(matches!(result, Err(Error::ConfigLoadFailed { .. })));
}

#[test]
fn test_search_paths_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let mut loader = ConfigLoader::with_search_paths(vec![dir.path().join("config")]);

    let config = loader.load_with(LoadOptions::default()).unwrap();
    assert_eq!(config, Config::default());
    assert!(loader.current_path().is_none());

    let strict = LoadOptions {
        create_default: false,
        validate: true,
    };
    assert!(matches!(loader.load_with(strict), Err(Error::ConfigNotFound)));
}

#[test]
fn test_search_skips_broken_files() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    fs::write(first.path().join("config.toml"), "not = [valid").unwrap();
    fs::write(
        second.path().join("config.toml"),
        "[ui]\ntheme_name = \"dark\"\n",
    )
    .unwrap();

    let mut loader = ConfigLoader::with_search_paths(vec![
        first.path().join("config"),
        second.path().join("config"),
    ]);
    let config = loader.load_with(LoadOptions::default()).unwrap();

    assert_eq!(config.ui.theme_name, "dark");
    assert_eq!(
        loader.current_path(),
        Some(second.path().join("config.toml").as_path())
    );
}

#[test]
fn test_unknown_theme_falls_back_to_light() {
    let mut config = Config::default();
    config.ui.theme_name = "solarized".to_string();

    let runtime = RuntimeConfig::from_config(config);
    assert_eq!(runtime.theme_manager().current_theme_name(), "light");
    assert_eq!(runtime.theme().name, "light");
}

#[test]
fn test_init_with_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui]\nshow_layer_descriptions = true\n").unwrap();

    let runtime = osi_journey::init_with_config(&path).unwrap();
    assert!(runtime.config().ui.show_layer_descriptions);
}

#[test]
fn test_runtime_config_saves_back_to_its_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.json");
    ConfigLoader::new()
        .save_to_path(&Config::default(), &path)
        .unwrap();

    let mut runtime = RuntimeConfig::load_from_file(&path).unwrap();
    runtime.set_theme("dark").unwrap();
    let saved_to = runtime.save().unwrap();
    assert_eq!(saved_to, path);

    let reloaded = ConfigLoader::load_from_path(&path).unwrap();
    assert_eq!(reloaded.ui.theme_name, "dark");
}
