//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Module identity
pub const MODULE_NAME: &str = "devicedata";
pub const MODULE_PRIORITY: u32 = 525;
pub const MODULE_BUILD: u32 = 1;

// Placeholder values
pub const UNKNOWN: &str = "unknown";
pub const CPU_UNKNOWN: &str = "Unknown";
pub const NOT_CHARGING: &str = "false";
pub const CHARGING: &str = "true";

// Orientation labels
pub const ORIENTATION_PORTRAIT: &str = "Portrait";
pub const ORIENTATION_LANDSCAPE: &str = "Landscape";

// Platform lookups
pub const SIMULATOR_MODEL_IDENTIFIER_VAR: &str = "SIMULATOR_MODEL_IDENTIFIER";
pub const BUNDLE_BUILD_KEY: &str = "DTSDKBuild";

// Word size that reports as a 64-bit architecture
pub const WORD_SIZE_64_BIT: usize = 8;
