//! Integration tests for configuration management

use curriculum_monitor::config::{Config, ConfigOverrides};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("nested").join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert_eq!(config.paths.data_file, "CurriculumData_Grades.csv");
    assert_eq!(config.paths.shift_file, "Shifter.csv");
    assert_eq!(config.paths.out_dir, ".");
    assert_eq!(config.electives.marker, "CSE");
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
data_file = "grades.csv"
shift_file = "previous.csv"
out_dir = "./out"

[electives]
marker = "ELEC"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.data_file, "grades.csv");
    assert_eq!(config.paths.shift_file, "previous.csv");
    assert_eq!(config.paths.out_dir, "./out");
    assert_eq!(config.electives.marker, "ELEC");
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "error"

[paths]
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.paths.data_file, "");
    assert_eq!(config.electives.marker, "");
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$CURRICULUM_MONITOR/test.log"

[paths]
out_dir = "$CURRICULUM_MONITOR/copies"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("curriculum-monitor"));
    assert!(!config.logging.file.contains("$CURRICULUM_MONITOR"));
    assert!(config.paths.out_dir.ends_with("copies"));
    assert!(!config.paths.out_dir.contains("$CURRICULUM_MONITOR"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert!(config.logging.verbose);

    config
        .set("data-file", "other.csv")
        .expect("Failed to set data file");
    assert_eq!(config.get("data_file").unwrap(), "other.csv");

    config
        .set("elective_marker", "GE")
        .expect("Failed to set marker");
    assert_eq!(config.electives.marker, "GE");

    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("out_dir", "/elsewhere").expect("Failed to set");
    config
        .unset("out_dir", &defaults)
        .expect("Failed to unset out_dir");
    assert_eq!(config.paths.out_dir, defaults.paths.out_dir);

    assert!(config.unset("unknown_key", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config.set("shift_file", "old.csv").expect("Failed to set");
    config.save_to(&config_file).expect("Failed to save config");

    let loaded = Config::load_from(&config_file);
    assert_eq!(loaded.logging.level, "info");
    assert_eq!(loaded.paths.shift_file, "old.csv");
}

#[test]
fn test_load_from_missing_file_writes_defaults() {
    let (_temp_dir, config_file) = setup_temp_config();
    assert!(!config_file.exists());

    let config = Config::load_from(&config_file);
    let defaults = Config::from_defaults();

    assert!(config_file.exists());
    assert_eq!(config.paths.data_file, defaults.paths.data_file);
}

#[test]
fn test_load_from_fills_missing_fields() {
    let (_temp_dir, config_file) = setup_temp_config();
    fs::create_dir_all(config_file.parent().unwrap()).unwrap();
    fs::write(&config_file, "[logging]\nlevel = \"error\"\n").unwrap();

    let config = Config::load_from(&config_file);
    assert_eq!(config.logging.level, "error");
    assert_eq!(config.electives.marker, "CSE");

    let saved = fs::read_to_string(&config_file).unwrap();
    assert!(saved.contains("marker"));
}

#[test]
fn test_load_from_invalid_toml_falls_back() {
    let (_temp_dir, config_file) = setup_temp_config();
    fs::create_dir_all(config_file.parent().unwrap()).unwrap();
    fs::write(&config_file, "this is = = not toml").unwrap();

    let config = Config::load_from(&config_file);
    assert_eq!(config.paths.data_file, Config::from_defaults().paths.data_file);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        data_file: Some("mine.csv".to_string()),
        shift_file: Some("theirs.csv".to_string()),
        out_dir: Some("./copies".to_string()),
        elective_marker: Some("ELEC".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.data_file, "mine.csv");
    assert_eq!(config.paths.shift_file, "theirs.csv");
    assert_eq!(config.paths.out_dir, "./copies");
    assert_eq!(config.electives.marker, "ELEC");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let before = config.paths.data_file.clone();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..ConfigOverrides::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.paths.data_file, before);
}

#[test]
fn test_config_display_format() {
    let config = Config::from_defaults();
    let display_str = format!("{config}");

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[paths]"));
    assert!(display_str.contains("[electives]"));
    assert!(display_str.contains("data_file"));
    assert!(display_str.contains("marker"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
level = "error"
file = ""
verbose = false

[paths]
data_file = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    assert!(config.merge_defaults(&defaults));
    assert_eq!(config.paths.data_file, defaults.paths.data_file);
    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"

[paths]
out_dir = "/my/copies"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    config.merge_defaults(&Config::from_defaults());

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.paths.out_dir, "/my/copies");
}

#[test]
fn test_get_config_dir() {
    let dir = Config::get_config_dir();
    assert!(dir.to_string_lossy().contains("curriculum-monitor"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();
    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}

#[test]
fn test_reset_file_removes_config() {
    let (_temp_dir, config_file) = setup_temp_config();
    Config::from_defaults()
        .save_to(&config_file)
        .expect("Failed to save config");
    assert!(config_file.exists());

    Config::reset_file(&config_file).expect("Failed to reset");
    assert!(!config_file.exists());

    // Missing file is already at defaults
    Config::reset_file(&config_file).expect("Reset of a missing file should succeed");
}
