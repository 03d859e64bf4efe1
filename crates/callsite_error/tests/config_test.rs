//! Tests for detection configuration.

use callsite_error::{
    CallsiteErrorKind, DEFAULT_SOURCE_SUFFIXES, DetectionConfig, DetectionConfigBuilder,
};
use std::io::Write;
use tempfile::Builder;

#[test]
fn test_default_matches_builtin_suffixes() {
    let config = DetectionConfig::default();
    assert_eq!(config.source_suffixes().len(), DEFAULT_SOURCE_SUFFIXES.len());
    assert!(config.source_suffixes().iter().any(|s| s == "rs"));
    assert_eq!(DetectionConfig::builtin(), &config);
}

#[test]
fn test_load_bundled_defaults() {
    let config = DetectionConfig::load().unwrap();
    assert!(config.is_source_file("main.rs"));
    assert!(config.is_source_file("example.go"));
}

#[test]
fn test_config_from_file() {
    let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        temp_file,
        r#"
[detection]
source_suffixes = ["ex", ".exs"]
"#
    )
    .unwrap();

    let config = DetectionConfig::from_file(temp_file.path()).unwrap();
    assert_eq!(config.source_suffixes(), &vec!["ex".to_string(), ".exs".to_string()]);
    assert!(config.is_source_file("server.ex"));
    assert!(config.is_source_file("mix.exs"));
    assert!(!config.is_source_file("main.rs"));
}

#[test]
fn test_config_from_file_without_detection_table() {
    let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(temp_file, "# nothing configured").unwrap();

    let config = DetectionConfig::from_file(temp_file.path()).unwrap();
    assert_eq!(config, DetectionConfig::default());
}

#[test]
fn test_config_from_missing_file_is_config_error() {
    let err = DetectionConfig::from_file("/definitely/not/here/callsite.toml").unwrap_err();
    assert!(matches!(err.kind(), CallsiteErrorKind::Config(_)));
    assert!(err.to_string().starts_with("Callsite Error: Configuration error"));
}

#[test]
fn test_config_from_malformed_file_is_config_error() {
    let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(temp_file, "[detection\nsource_suffixes = [").unwrap();

    let err = DetectionConfig::from_file(temp_file.path()).unwrap_err();
    assert!(matches!(err.kind(), CallsiteErrorKind::Config(_)));
}

#[test]
fn test_to_toml_roundtrips_through_from_file() {
    let original = DetectionConfigBuilder::default()
        .source_suffixes(vec!["rs".to_string(), "zig".to_string()])
        .build()
        .unwrap();
    let rendered = original.to_toml().unwrap();
    assert!(rendered.contains("[detection]"));

    let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
    write!(temp_file, "{}", rendered).unwrap();
    assert_eq!(DetectionConfig::from_file(temp_file.path()).unwrap(), original);
}

#[test]
fn test_builder_missing_field_is_builder_error() {
    let err = DetectionConfigBuilder::default().build().unwrap_err();
    assert!(matches!(err.kind(), CallsiteErrorKind::Builder(_)));
}

#[test]
fn test_is_source_file_needs_stem_and_extension() {
    let config = DetectionConfig::default();
    assert!(!config.is_source_file(".rs"));
    assert!(!config.is_source_file("Makefile"));
    assert!(config.is_source_file("dir/nested.rs"));
}
