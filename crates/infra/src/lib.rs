//! # DeviceData Infrastructure
//!
//! Infrastructure implementations of the core ports.
//!
//! This crate contains:
//! - The host platform facade and connectivity provider
//! - Bundle metadata loading
//! - Configuration loading
//! - Logging initialisation
//!
//! ## Architecture
//! - Implements traits defined in `devicedata-core`
//! - Contains all "impure" code (file system, environment, OS queries)

pub mod config;
pub mod logging;
pub mod platform;

// Re-export commonly used items
pub use logging::init_logging;
pub use platform::{BundleInfo, HostPlatform, InterfaceConnectivity};
