//! Configuration parsing and database path resolution tests

use musicat_common::config::{default_database_path, resolve_database_path, TomlConfig};
use std::io::Write;
use std::path::{Path, PathBuf};

#[test]
fn test_empty_config_is_valid() {
    let config = TomlConfig::from_toml_str("").unwrap();
    assert!(config.database_path.is_none());
    assert!(config.port.is_none());
    assert!(config.logging.level.is_none());
}

#[test]
fn test_full_config_parses() {
    let config = TomlConfig::from_toml_str(
        r#"
        database_path = "/var/lib/musicat/catalog.db"
        port = 9000
        host = "0.0.0.0"
        seed_demo_data = false

        [logging]
        level = "debug"
        "#,
    )
    .unwrap();

    assert_eq!(config.database_path, Some(PathBuf::from("/var/lib/musicat/catalog.db")));
    assert_eq!(config.port, Some(9000));
    assert_eq!(config.host.as_deref(), Some("0.0.0.0"));
    assert_eq!(config.seed_demo_data, Some(false));
    assert_eq!(config.logging.level.as_deref(), Some("debug"));
}

#[test]
fn test_invalid_config_is_config_error() {
    let err = TomlConfig::from_toml_str("port = \"not a number\"").unwrap_err();
    assert!(matches!(err, musicat_common::Error::Config(_)));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "port = 8123").unwrap();

    let config = TomlConfig::load_or_default(Some(file.path())).unwrap();
    assert_eq!(config.port, Some(8123));
}

#[test]
fn test_missing_explicit_file_is_error() {
    let result = TomlConfig::load_or_default(Some(Path::new("/nonexistent/musicat.toml")));
    assert!(result.is_err());
}

#[test]
fn test_cli_path_wins() {
    let config = TomlConfig {
        database_path: Some(PathBuf::from("/from/toml.db")),
        ..Default::default()
    };

    let resolved = resolve_database_path(Some(Path::new("/from/cli.db")), &config);
    assert_eq!(resolved, PathBuf::from("/from/cli.db"));

    let resolved = resolve_database_path(None, &config);
    assert_eq!(resolved, PathBuf::from("/from/toml.db"));
}

#[test]
fn test_default_path_used_without_overrides() {
    let resolved = resolve_database_path(None, &TomlConfig::default());
    assert_eq!(resolved, default_database_path());
    assert!(resolved.ends_with("music.db"));
}
