//! Tracking pipeline plumbing

pub mod chain;
pub mod ports;

pub use chain::ModuleChain;
