//! # DeviceData App
//!
//! Command-line layer: wires configuration, logging, the host platform and
//! the module chain.
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture

pub mod context;

pub use context::{parse_payload, AppContext};
