//! Integration tests for jetpack-config crate.

use jetpack_common::test_utils::{config_fixtures, create_temp_dir};
use jetpack_common::{Color, JetpackError, LoggingConfig, TickDirection};
use jetpack_config::{Config, ConfigCache, ConfigError, ConfigFormat, ConfigLoader};
use std::fs;

#[test]
fn test_default_config_validation() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.style.font_size = -1.0;
    assert!(config.validate().is_err());
}

#[test]
fn test_load_full_yaml() {
    let dir = create_temp_dir();
    let path = dir.path().join("jetpack.yaml");
    fs::write(&path, config_fixtures::full_config_yaml()).unwrap();

    let config = ConfigLoader::new(&path).load_file().unwrap();

    assert!((config.style.font_size - 14.0).abs() < f64::EPSILON);
    assert_eq!(config.style.color, Color::rgb(0x33, 0x66, 0x99));
    assert_eq!(config.style.breathe.direction, TickDirection::In);
    assert!(!config.style.spines.right);
    assert!(config.style.preset.font_size);
    assert!(!config.style.preset.color);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json_format);

    let logging = LoggingConfig::from(&config.logging);
    assert_eq!(logging.level, "debug");
    assert!(logging.json_format);
    assert!(!logging.pretty_format);
}

#[test]
fn test_load_minimal_yaml_fills_defaults() {
    let dir = create_temp_dir();
    let path = dir.path().join("minimal.yml");
    fs::write(&path, config_fixtures::minimal_config_yaml()).unwrap();

    let config = ConfigLoader::new(&path).load_file().unwrap();
    let defaults = Config::default();

    assert_eq!(config.style.color, Color::rgb(0x22, 0x22, 0x22));
    assert_eq!(config.style.breathe, defaults.style.breathe);
    assert_eq!(config.style.spines, defaults.style.spines);
    assert_eq!(config.logging, defaults.logging);
}

#[test]
fn test_load_toml() {
    let dir = create_temp_dir();
    let path = dir.path().join("jetpack.toml");
    fs::write(&path, config_fixtures::full_config_toml()).unwrap();

    let config = ConfigLoader::new(&path).load_file().unwrap();

    assert!((config.style.font_size - 12.5).abs() < f64::EPSILON);
    assert_eq!(config.style.breathe.direction, TickDirection::InOut);
    assert!(config.style.spines.left);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_invalid_values_are_rejected() {
    let dir = create_temp_dir();
    let path = dir.path().join("bad.yaml");

    fs::write(&path, "style:\n  color: \"#zzzzzz\"\n").unwrap();
    assert!(matches!(
        ConfigLoader::new(&path).load_file(),
        Err(ConfigError::Yaml(_))
    ));

    fs::write(&path, "style:\n  breathe:\n    factor: -0.5\n").unwrap();
    let err: JetpackError = ConfigLoader::new(&path).load_file().unwrap_err().into();
    assert!(matches!(err, JetpackError::Validation { .. }));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = create_temp_dir();
    let result = ConfigLoader::new(dir.path().join("absent.yaml")).load_file();
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_save_then_load_yaml_and_toml() {
    let dir = create_temp_dir();
    let mut config = Config::default();
    config.style.font_size = 9.0;
    config.style.color = Color::rgb(1, 2, 3);
    config.style.breathe.direction = TickDirection::In;

    for name in ["saved.yaml", "saved.toml"] {
        let loader = ConfigLoader::new(dir.path().join(name));
        loader.save(&config).unwrap();
        let loaded = loader.load_file().unwrap();
        assert_eq!(loaded, config, "mismatch for {name}");
    }
}

#[test]
fn test_save_rejects_unknown_extension() {
    let dir = create_temp_dir();
    let loader = ConfigLoader::new(dir.path().join("style.json"));
    assert!(matches!(
        loader.save(&Config::default()),
        Err(ConfigError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_render_yaml_mentions_every_section() {
    let rendered = ConfigFormat::Yaml.render(&Config::default()).unwrap();
    for key in ["style:", "breathe:", "spines:", "preset:", "logging:"] {
        assert!(rendered.contains(key), "missing {key} in\n{rendered}");
    }
}

#[test]
fn test_config_cache() {
    let config = Config::default();
    let cache = ConfigCache::new(config.clone());

    // Should be able to get the config
    let cached_config = cache.get();
    assert_eq!(cached_config.style.color, config.style.color);

    // Should be able to update the config
    let mut new_config = config;
    new_config.style.color = Color::BLACK;
    cache.update(new_config);

    let updated_config = cache.get();
    assert_eq!(updated_config.style.color, Color::BLACK);

    // Previously loaded snapshots are unaffected
    assert_eq!(cached_config.style.color, Color::DARK_GRAY);
}

#[test]
fn test_cache_reload_keeps_old_config_on_error() {
    let dir = create_temp_dir();
    let path = dir.path().join("jetpack.yaml");
    fs::write(&path, config_fixtures::full_config_yaml()).unwrap();

    let cache = ConfigCache::default();
    let loader = ConfigLoader::new(&path);
    cache.reload(&loader).unwrap();
    assert!((cache.get().style.font_size - 14.0).abs() < f64::EPSILON);

    fs::write(&path, "style: [not, a, map]\n").unwrap();
    assert!(cache.reload(&loader).is_err());
    assert!((cache.get().style.font_size - 14.0).abs() < f64::EPSILON);
}
