//! # DeviceData Domain
//!
//! Domain types for the device metadata enrichment stage.
//!
//! This crate contains:
//! - Attribute keys and attribute maps (payload model)
//! - Tracking events and activation requests
//! - Platform value types (battery, orientation, carrier, CPU identifiers)
//! - Domain error types and Result definitions
//! - Configuration structures and constants
//!
//! ## Architecture
//! - No dependencies on other DeviceData crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
