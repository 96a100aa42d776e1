//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. If `EVENTDESK_DB_PATH` is set, loads from environment variables and
//!    fails on any missing or invalid value
//! 2. Otherwise falls back to loading from file
//! 3. Searches several paths for config files
//! 4. Supports JSON and TOML formats
//! 5. Uses built-in defaults when no file exists
//!
//! Optional variables override whichever source won.
//!
//! ## Environment Variables
//! - `EVENTDESK_DB_PATH`: Database file path (required for env loading)
//! - `EVENTDESK_DB_POOL_SIZE`: Connection pool size (required for env loading)
//! - `EVENTDESK_HOST`: Listen address
//! - `EVENTDESK_PORT`: Listen port
//! - `EVENTDESK_LOG_LEVEL`: Log filter directive
//! - `EVENTDESK_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! The loader searches the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./eventdesk.json` or `./eventdesk.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};

use eventdesk_domain::{Config, DatabaseConfig, EventDeskError, Result};

const ENV_DB_PATH: &str = "EVENTDESK_DB_PATH";
const ENV_DB_POOL_SIZE: &str = "EVENTDESK_DB_POOL_SIZE";
const ENV_HOST: &str = "EVENTDESK_HOST";
const ENV_PORT: &str = "EVENTDESK_PORT";
const ENV_LOG_LEVEL: &str = "EVENTDESK_LOG_LEVEL";
const ENV_LOG_JSON: &str = "EVENTDESK_LOG_JSON";

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `EventDeskError::Config` if a discovered file cannot be parsed or
/// an environment variable holds an invalid value.
pub fn load() -> Result<Config> {
    if std::env::var_os(ENV_DB_PATH).is_some() {
        let config = load_from_env()?;
        tracing::info!("Configuration loaded from environment variables");
        return Ok(config);
    }

    tracing::debug!("{} not set, trying config file", ENV_DB_PATH);

    match find_config_file() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::info!("No configuration file found, using defaults");
            apply_env_overrides(Config::default())
        }
    }
}

/// Load configuration from environment variables
///
/// `EVENTDESK_DB_PATH` and `EVENTDESK_DB_POOL_SIZE` must be present; the
/// remaining variables are optional.
///
/// # Errors
/// Returns `EventDeskError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<Config> {
    let db_path = env_var(ENV_DB_PATH)?;
    let db_pool_size = env_var(ENV_DB_POOL_SIZE).and_then(|s| {
        s.parse::<u32>().map_err(|e| EventDeskError::Config(format!("Invalid pool size: {}", e)))
    })?;

    apply_env_overrides(Config {
        database: DatabaseConfig { path: db_path, pool_size: db_pool_size },
        ..Config::default()
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, searches several locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `EventDeskError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(EventDeskError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => find_config_file().ok_or_else(|| {
            EventDeskError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| EventDeskError::Config(format!("Failed to read config file: {}", e)))?;

    apply_env_overrides(parse_config(&contents, &config_path)?)
}

/// Apply the optional `EVENTDESK_*` variables on top of `config`
///
/// # Errors
/// Returns `EventDeskError::Config` if `EVENTDESK_PORT` is not a valid port.
pub fn apply_env_overrides(mut config: Config) -> Result<Config> {
    if let Ok(host) = std::env::var(ENV_HOST) {
        config.server.host = host;
    }
    if let Ok(port) = std::env::var(ENV_PORT) {
        config.server.port = port
            .parse::<u16>()
            .map_err(|e| EventDeskError::Config(format!("Invalid port: {}", e)))?;
    }
    if let Ok(level) = std::env::var(ENV_LOG_LEVEL) {
        config.logging.level = level;
    }
    config.logging.json = env_bool(ENV_LOG_JSON, config.logging.json);
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| EventDeskError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| EventDeskError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(EventDeskError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Search several paths for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn find_config_file() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("eventdesk.json"),
        dir.join("eventdesk.toml"),
        dir.join("../config.json"),
        dir.join("../config.toml"),
        dir.join("../../config.json"),
        dir.join("../../config.toml"),
    ]
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        EventDeskError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
