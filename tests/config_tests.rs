use hclquill::config::Config;
use hclquill::output::OutputFormat;

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.log_level, "warn");
}

#[test]
fn test_custom_config() {
    let config = Config {
        format: OutputFormat::Raw,
        log_level: "debug".to_string(),
    };

    assert_eq!(config.format, OutputFormat::Raw);
    assert_eq!(config.log_level, "debug");
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = Config {
        format: OutputFormat::Raw,
        log_level: "info".to_string(),
    };
    config.save_to(&path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("format = \"raw\""));
    assert_eq!(Config::load_from(&path), config);
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml"));
    assert_eq!(config, Config::default());
}

#[test]
fn test_invalid_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "format = \"yaml\"").unwrap();

    assert_eq!(Config::load_from(&path), Config::default());
}
