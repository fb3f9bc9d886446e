//! Integration tests for configuration management

use module_guide::config::{Config, ConfigOverrides};
use module_guide::core::models::Language;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert_eq!(config.guide.language, "german");
    assert_eq!(config.guide.elective_marker, "Wahlpflicht");
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[guide]
language = "english"
elective_marker = "Elective"

[paths]
reports_dir = "./reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.language(), Language::English);
    assert_eq!(config.elective_marker(), "Elective");
    assert_eq!(config.paths.reports_dir, "./reports");
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.guide.language, "");
    // Empty guide settings fall back to the built-in values
    assert_eq!(config.language(), Language::German);
    assert_eq!(config.elective_marker(), "Wahlpflicht");
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$MODULE_GUIDE/test.log"

[paths]
reports_dir = "$MODULE_GUIDE/out"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("moduleguide"));
    assert!(!config.logging.file.contains("$MODULE_GUIDE"));
    assert!(config.paths.reports_dir.ends_with("out"));
    assert!(!config.paths.reports_dir.contains("$MODULE_GUIDE"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").as_deref(), Some("debug"));

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert_eq!(config.get("verbose").as_deref(), Some("true"));
    assert!(config.logging.verbose);

    config
        .set("language", "EN")
        .expect("Failed to set language");
    assert_eq!(config.get("language").as_deref(), Some("english"));

    config
        .set("elective-marker", "WPF")
        .expect("Failed to set marker");
    assert_eq!(config.get("elective_marker").as_deref(), Some("WPF"));

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_set_validates_values() {
    let mut config = Config::from_defaults();

    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("language", "klingon").is_err());
    assert!(config.set("elective_marker", "  ").is_err());
    assert_eq!(config.guide.language, "german");
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "error").expect("Failed to set level");
    config.set("language", "english").expect("Failed to set language");

    config
        .unset("level", &defaults)
        .expect("Failed to unset level");
    config
        .unset("language", &defaults)
        .expect("Failed to unset language");

    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.guide.language, defaults.guide.language);
    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");

    let mut config = Config::from_defaults();
    config.set("language", "english").expect("Failed to set language");

    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded.language(), Language::English);
    assert_eq!(loaded.elective_marker(), "Wahlpflicht");
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        language: Some("english".to_string()),
        elective_marker: Some("Elective".to_string()),
        reports_dir: Some("./custom_reports".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.language(), Language::English);
    assert_eq!(config.elective_marker(), "Elective");
    assert_eq!(config.paths.reports_dir, "./custom_reports");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let before = config.guide.elective_marker.clone();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..Default::default()
    };
    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.guide.elective_marker, before);
}

#[test]
fn test_config_display_format() {
    let display_str = Config::from_defaults().to_string();

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[guide]"));
    assert!(display_str.contains("[paths]"));
    assert!(display_str.contains("elective_marker"));
    assert!(display_str.contains("language"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
level = "error"
file = ""
verbose = false

[paths]
reports_dir = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    assert!(config.merge_defaults(&defaults));
    assert_eq!(config.guide.elective_marker, "Wahlpflicht");
    assert_eq!(config.guide.language, "german");
    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"

[guide]
language = "english"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    config.merge_defaults(&Config::from_defaults());

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.guide.language, "english");
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
    assert!(Config::get_moduleguide_dir()
        .to_string_lossy()
        .contains("moduleguide"));
}
