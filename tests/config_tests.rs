//! Integration tests for configuration management

use advising::config::{Config, ConfigOverrides};
use advising::core::eligibility::StatusVocabulary;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
    assert_eq!(config.eligibility.status_vocabulary, "grades");
    assert!(!config.eligibility.ignore_offered);
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
reports_dir = "./reports"

[eligibility]
status_vocabulary = "simple"
ignore_offered = true
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.reports_dir, "./reports");
    assert_eq!(config.eligibility.status_vocabulary, "simple");
    assert!(config.eligibility.ignore_offered);
}

#[test]
fn test_config_from_toml_partial() {
    // Missing fields and sections use defaults
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.paths.reports_dir, "");
    assert_eq!(config.eligibility.status_vocabulary, "");
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$ADVISING/test.log"

[paths]
reports_dir = "$ADVISING/reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("advising"));
    assert!(!config.logging.file.contains("$ADVISING"));
    assert!(config.paths.reports_dir.ends_with("reports"));
    assert!(!config.paths.reports_dir.contains("$ADVISING"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "DEBUG").expect("Failed to set level");
    assert_eq!(config.get("level").as_deref(), Some("debug"));

    config.set("verbose", "true").expect("Failed to set verbose");
    assert_eq!(config.get("verbose").as_deref(), Some("true"));
    assert!(config.logging.verbose);

    config
        .set("status-vocabulary", "Simple")
        .expect("Failed to set vocabulary");
    assert_eq!(config.get("status_vocabulary").as_deref(), Some("simple"));

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
    assert!(config.set("level", "loud").is_err());
    assert!(config.set("ignore_offered", "sometimes").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "error").expect("Failed to set level");
    config
        .set("ignore_offered", "true")
        .expect("Failed to set ignore_offered");

    config.unset("level", &defaults).expect("Failed to unset level");
    config
        .unset("ignore_offered", &defaults)
        .expect("Failed to unset ignore_offered");

    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(
        config.eligibility.ignore_offered,
        defaults.eligibility.ignore_offered
    );
    assert!(config.unset("unknown_key", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config
        .set("status_vocabulary", "simple")
        .expect("Failed to set vocabulary");

    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded.logging.level, "info");
    assert_eq!(loaded.eligibility.status_vocabulary, "simple");
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        reports_dir: Some("./custom_reports".to_string()),
        status_vocabulary: Some("simple".to_string()),
        ignore_offered: Some(true),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.reports_dir, "./custom_reports");

    let options = config.evaluation_options();
    assert_eq!(options.vocabulary, StatusVocabulary::Simple);
    assert!(options.ignore_offered);
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let before = config.paths.reports_dir.clone();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..ConfigOverrides::default()
    };
    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.paths.reports_dir, before);
}

#[test]
fn test_with_overrides_leaves_stored_config_untouched() {
    let mut stored = Config::from_defaults();
    let stored_reports_dir = stored.paths.reports_dir.clone();

    let overrides = ConfigOverrides {
        reports_dir: Some("/tmp/one-off-reports".to_string()),
        ignore_offered: Some(true),
        ..ConfigOverrides::default()
    };
    let effective = stored.with_overrides(&overrides);

    assert_eq!(effective.paths.reports_dir, "/tmp/one-off-reports");
    assert!(effective.eligibility.ignore_offered);
    assert_eq!(stored.paths.reports_dir, stored_reports_dir);
    assert!(!stored.eligibility.ignore_offered);

    // An edit made while overrides are active must not carry them to disk
    stored.set("level", "info").expect("Failed to set level");
    let written = toml::to_string_pretty(&stored).expect("Failed to serialize");
    assert!(!written.contains("one-off-reports"));
    assert!(written.contains("ignore_offered = false"));

    let reloaded = Config::from_toml(&written).expect("Failed to parse written config");
    assert_eq!(reloaded.logging.level, "info");
    assert_eq!(reloaded.paths.reports_dir, stored_reports_dir);
}

#[test]
fn test_unknown_vocabulary_falls_back_to_grades() {
    let config = Config::from_toml(
        r#"
[logging]
level = "warn"

[eligibility]
status_vocabulary = "roman"
"#,
    )
    .expect("Failed to parse config");

    assert_eq!(
        config.evaluation_options().vocabulary,
        StatusVocabulary::Grades
    );
}

#[test]
fn test_config_display_format() {
    let config = Config::from_defaults();
    let display_str = format!("{config}");

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[paths]"));
    assert!(display_str.contains("[eligibility]"));
    assert!(display_str.contains("status_vocabulary"));
    assert!(display_str.contains("reports_dir"));
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

    let changed = config.merge_defaults(&defaults);

    assert!(
        changed,
        "merge_defaults should return true when fields are added"
    );
    assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);
    assert_eq!(config.eligibility.status_vocabulary, "grades");
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"
verbose = false

[paths]
reports_dir = "/my/reports"

[eligibility]
status_vocabulary = "simple"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    config.merge_defaults(&defaults);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.paths.reports_dir, "/my/reports");
    assert_eq!(config.eligibility.status_vocabulary, "simple");
}

#[test]
fn test_get_advising_dir() {
    let dir = Config::get_advising_dir();

    assert!(dir.to_string_lossy().contains("advising"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
