//! Tests for search configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        random_seed = 42
        step_limit = 1000
        initial_rows = [0, 0, 0, 0, 0, 0]

        [logging]
        level = "trace"
        banner = false
    "#;

    let config = SearchConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.step_limit, Some(1000));
    assert_eq!(config.initial_rows, Some(vec![0; 6]));
    assert_eq!(config.logging.level, "trace");
    assert!(!config.logging.banner);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        random_seed: 42
        step_limit: 250
        logging:
          level: debug
    "#;

    let config = SearchConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.step_limit, Some(250));
    assert_eq!(config.initial_rows, None);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.banner);
}

#[test]
fn test_empty_document_gives_defaults() {
    let config = SearchConfig::from_toml_str("").unwrap();
    assert_eq!(config, SearchConfig::default());
    assert_eq!(config.step_limit, None);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_zero_step_limit_rejected() {
    let err = SearchConfig::from_toml_str("step_limit = 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_empty_initial_rows_rejected() {
    let err = SearchConfig::from_yaml_str("initial_rows: []").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_malformed_toml() {
    let err = SearchConfig::from_toml_str("random_seed = \"abc\"").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file() {
    let err = SearchConfig::load("does-not-exist/queenclimb.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let config = SearchConfig::new()
        .with_random_seed(123)
        .with_step_limit(50)
        .with_initial_rows(vec![1, 3, 5, 0, 2, 4])
        .with_log_level("warn");

    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.step_limit, Some(50));
    assert_eq!(config.logging.level, "warn");
    assert!(config.validate().is_ok());
}

#[test]
fn test_toml_serialization_parses_back() {
    let config = SearchConfig::new().with_random_seed(9).with_step_limit(10);
    let text = config.to_toml_string().unwrap();
    assert_eq!(SearchConfig::from_toml_str(&text).unwrap(), config);
}
