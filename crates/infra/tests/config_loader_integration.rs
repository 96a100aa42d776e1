//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use eventdesk_infra::config;
use tempfile::TempDir;

#[test]
fn test_load_config_from_json_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{
            "database": { "path": "/tmp/integration_test.db", "pool_size": 10 },
            "server": { "host": "0.0.0.0", "port": 8088 },
            "logging": { "level": "eventdesk=debug,info", "json": false }
        }"#,
    )
    .expect("Failed to write config file");

    let config = config::load_from_file(Some(path)).expect("Failed to load config from JSON file");

    assert_eq!(config.database.path, "/tmp/integration_test.db");
    assert_eq!(config.database.pool_size, 10);
    assert_eq!(config.server.bind_address(), "0.0.0.0:8088");
    assert_eq!(config.logging.level, "eventdesk=debug,info");
}

#[test]
fn test_load_config_from_toml_with_only_database_section() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("eventdesk.toml");
    std::fs::write(
        &path,
        r#"
[database]
path = "/tmp/integration_test.db"
pool_size = 2
"#,
    )
    .expect("Failed to write config file");

    let config = config::load_from_file(Some(path)).expect("Failed to load config from TOML file");

    assert_eq!(config.database.pool_size, 2);
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_missing_database_section_is_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[server]\nhost = \"127.0.0.1\"\nport = 1\n").unwrap();

    let err = config::load_from_file(Some(path)).unwrap_err();
    assert!(err.to_string().contains("Invalid TOML format"));
}
