//! Configuration loader
//!
//! Loads the device data configuration from a file and environment
//! variables.
//!
//! ## Loading Strategy
//! 1. Use the explicit path if given, otherwise search the standard locations
//! 2. Fall back to defaults when no file exists
//! 3. Apply `DEVICEDATA_*` environment overrides on top
//!
//! ## Environment Variables
//! - `DEVICEDATA_MODULE_NAME`: Pipeline name of the module
//! - `DEVICEDATA_MODULE_PRIORITY`: Pipeline priority (lower runs first)
//! - `DEVICEDATA_MODULE_ENABLED`: Whether the module is enabled (true/false)
//! - `DEVICEDATA_BUNDLE_INFO_PATH`: Bundle metadata file (JSON or TOML)
//! - `DEVICEDATA_DEVICE_LABEL`: Coarse device label reported as `device`
//! - `DEVICEDATA_LANGUAGES`: Comma-separated preferred languages
//! - `DEVICEDATA_LOG_LEVEL`: Default log filter
//! - `DEVICEDATA_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader searches `devicedata.{json,toml}` and `config.{json,toml}` in the
//! current working directory, its parent, and next to the executable.

use std::path::{Path, PathBuf};

use devicedata_domain::{Config, DeviceDataError, Result};

const FILE_STEMS: [&str; 2] = ["devicedata", "config"];
const EXTENSIONS: [&str; 2] = ["json", "toml"];

/// Load configuration from the first file found (or defaults), then apply
/// environment overrides.
///
/// # Errors
/// Returns `DeviceDataError::Config` if a file exists but cannot be parsed,
/// or an environment override has an invalid value.
pub fn load() -> Result<Config> {
    let config = match find_config_paths() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    apply_env_overrides(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, searches the standard locations. Supports JSON and
/// TOML (detected by file extension). Missing fields take their defaults.
///
/// # Errors
/// Returns `DeviceDataError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(DeviceDataError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => find_config_paths().ok_or_else(|| {
            DeviceDataError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| DeviceDataError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Apply `DEVICEDATA_*` environment variables over `config`
///
/// Unset variables leave the corresponding field untouched.
///
/// # Errors
/// Returns `DeviceDataError::Config` if `DEVICEDATA_MODULE_PRIORITY` is not
/// an unsigned integer.
pub fn apply_env_overrides(mut config: Config) -> Result<Config> {
    if let Some(name) = env_opt("DEVICEDATA_MODULE_NAME") {
        config.module.name = name;
    }
    if let Some(priority) = env_opt("DEVICEDATA_MODULE_PRIORITY") {
        config.module.priority = priority
            .parse::<u32>()
            .map_err(|e| DeviceDataError::Config(format!("Invalid module priority: {e}")))?;
    }
    config.module.enabled = env_bool("DEVICEDATA_MODULE_ENABLED", config.module.enabled);

    if let Some(path) = env_opt("DEVICEDATA_BUNDLE_INFO_PATH") {
        config.platform.bundle_info_path = Some(path);
    }
    if let Some(label) = env_opt("DEVICEDATA_DEVICE_LABEL") {
        config.platform.device_label = Some(label);
    }
    if let Some(languages) = env_opt("DEVICEDATA_LANGUAGES") {
        config.platform.preferred_languages = languages
            .split(',')
            .map(str::trim)
            .filter(|language| !language.is_empty())
            .map(str::to_string)
            .collect();
    }

    if let Some(level) = env_opt("DEVICEDATA_LOG_LEVEL") {
        config.logging.level = level;
    }
    config.logging.json = env_bool("DEVICEDATA_LOG_JSON", config.logging.json);

    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `DeviceDataError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| DeviceDataError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| DeviceDataError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(DeviceDataError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Search the standard locations for a configuration file
///
/// Searches the current working directory, its parent, and the executable's
/// directory, preferring `devicedata.*` over `config.*` and JSON over TOML.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn find_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd.clone());
        roots.push(cwd.join(".."));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    roots
        .iter()
        .flat_map(|root| {
            FILE_STEMS.iter().flat_map(move |stem| {
                EXTENSIONS.iter().map(move |ext| root.join(format!("{stem}.{ext}")))
            })
        })
        .find(|path| path.exists())
}

/// Non-empty environment variable
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
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
