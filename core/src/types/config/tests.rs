use super::*;
use crate::types::CollectionId;
use tempfile::TempDir;

#[test]
fn test_load_missing_file_returns_default() {
    let dir = TempDir::new().unwrap();
    let path = AppConfig::path(dir.path());

    let config = AppConfig::load(&path).unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.general.default_view, CollectionId::Pokemon);
    assert_eq!(config.search.rebuild_policy, RebuildPolicy::OnChange);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = AppConfig::path(dir.path());

    let mut config = AppConfig::default();
    config.general.default_view = CollectionId::Abilities;
    config.search.rebuild_policy = RebuildPolicy::Always;
    config.logging.level = "debug".to_string();
    config.save(&path).unwrap();

    let loaded = AppConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = AppConfig::path(dir.path());
    std::fs::write(&path, "[general]\ndefault_view = \"elements\"\n").unwrap();

    let config = AppConfig::load(&path).unwrap();

    assert_eq!(config.general.default_view, CollectionId::Elements);
    assert_eq!(config.search, SearchSettings::default());
    assert_eq!(config.logging, LoggingConfig::default());
}

#[test]
fn test_unknown_view_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = AppConfig::path(dir.path());
    std::fs::write(&path, "[general]\ndefault_view = \"trainers\"\n").unwrap();

    let err = AppConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_validate_flags_unknown_log_level() {
    let mut config = AppConfig::default();
    config.logging.level = "loud".to_string();

    let errors = config.validate();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("logging.level"));

    let repaired = config.with_defaults_for_invalid();
    assert!(repaired.validate().is_empty());
    assert_eq!(repaired.logging.level, "warn");
}

#[test]
fn test_validate_accepts_mixed_case_level() {
    let mut config = AppConfig::default();
    config.logging.level = "INFO".to_string();

    assert!(config.validate().is_empty());
    assert_eq!(config.with_defaults_for_invalid().logging.level, "INFO");
}
