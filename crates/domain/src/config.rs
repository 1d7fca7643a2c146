//! Configuration structures
//!
//! Every field has a default so a partial file (or none at all) yields a
//! working configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{MODULE_NAME, MODULE_PRIORITY};

/// Top-level configuration for the device data stage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub module: ModuleSettings,
    pub platform: PlatformConfig,
    pub logging: LoggingConfig,
}

/// Pipeline identity of the enrichment module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleSettings {
    pub name: String,
    pub priority: u32,
    pub enabled: bool,
}

impl Default for ModuleSettings {
    fn default() -> Self {
        Self { name: MODULE_NAME.to_string(), priority: MODULE_PRIORITY, enabled: true }
    }
}

/// Host platform overrides
///
/// Desktop hosts have no application bundle or device-class label, so both
/// can be supplied here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// JSON or TOML file holding bundle metadata (e.g. `DTSDKBuild`)
    pub bundle_info_path: Option<String>,
    /// Coarse device label reported as the device name
    pub device_label: Option<String>,
    /// Preferred languages, most preferred first; empty means read the locale
    pub preferred_languages: Vec<String>,
}

/// Logging output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}
