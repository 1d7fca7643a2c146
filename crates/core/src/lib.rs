//! # DeviceData Core
//!
//! Pure enrichment logic - no platform dependencies.
//!
//! This crate contains:
//! - Port interfaces for platform signals and connectivity (traits)
//! - The device data collector and hardware model table
//! - The enrichment module and the pipeline it plugs into
//!
//! ## Architecture Principles
//! - Only depends on `devicedata-domain`
//! - No OS, file, or environment access
//! - All platform signals via traits
//! - Pure, testable business logic

pub mod devicedata;
pub mod pipeline;

// Re-export specific items to avoid ambiguity
pub use devicedata::ports::{ConnectivityProvider, PlatformFacade};
pub use devicedata::{DeviceDataCollector, DeviceDataModule};
pub use pipeline::ports::TrackingModule;
pub use pipeline::ModuleChain;
