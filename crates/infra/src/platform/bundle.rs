//! Bundle metadata
//!
//! Desktop hosts have no application bundle, so the build metadata lives in
//! a small JSON or TOML file of flat key/value pairs.

use std::collections::BTreeMap;
use std::path::Path;

use devicedata_domain::{DeviceDataError, Result};

/// Flat bundle metadata (e.g. `DTSDKBuild = "15C107"`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundleInfo {
    entries: BTreeMap<String, String>,
}

impl BundleInfo {
    /// Load metadata from a `.json` or `.toml` file.
    ///
    /// Non-string scalar values are kept in their textual form; nested tables
    /// and arrays are skipped.
    ///
    /// # Errors
    /// Returns `DeviceDataError::Io` if the file cannot be read and
    /// `DeviceDataError::InvalidInput` if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

        let table: serde_json::Map<String, serde_json::Value> = match extension {
            "toml" => toml::from_str(&contents).map_err(|e| {
                DeviceDataError::InvalidInput(format!("Invalid bundle metadata TOML: {e}"))
            })?,
            "json" => serde_json::from_str(&contents)?,
            _ => {
                return Err(DeviceDataError::InvalidInput(format!(
                    "Unsupported bundle metadata format: {extension}"
                )))
            }
        };

        let entries = table
            .into_iter()
            .filter_map(|(key, value)| scalar_text(value).map(|text| (key, text)))
            .collect();
        Ok(Self { entries })
    }

    #[must_use]
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self { entries: entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

fn scalar_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(text) => Some(text),
        serde_json::Value::Bool(flag) => Some(flag.to_string()),
        serde_json::Value::Number(number) => Some(number.to_string()),
        serde_json::Value::Null | serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            None
        }
    }
}
