use termnote::config::Config;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.ui.tick_interval_ms, 100);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Out-of-range tick interval should fail
    config.ui.tick_interval_ms = 5;
    assert!(config.validate().is_err());

    config.ui.tick_interval_ms = 2000;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("mouse_enabled = true"));
    assert!(toml_str.contains("tick_interval_ms = 100"));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert!(config.logging.enabled);

    // Unspecified values use defaults
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.ui.tick_interval_ms, 100);
}
