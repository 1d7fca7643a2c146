//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for DeviceData
///
/// The enrichment path itself never fails; these variants cover the
/// surrounding plumbing (configuration, metadata files, caller input).
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum DeviceDataError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Platform error: {0}")]
    Platform(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DeviceDataError {
    /// Stable label suitable for structured log fields.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Platform(_) => "platform",
            Self::InvalidInput(_) => "invalid_input",
            Self::Io(_) => "io",
            Self::Internal(_) => "internal",
        }
    }
}

impl From<std::io::Error> for DeviceDataError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DeviceDataError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidInput(format!("Invalid JSON: {err}"))
    }
}

/// Result type alias for DeviceData operations
pub type Result<T> = std::result::Result<T, DeviceDataError>;
