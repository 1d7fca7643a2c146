//! Device metadata collection and enrichment

pub mod collector;
pub mod cpu;
pub mod model_table;
pub mod module;
pub mod ports;

pub use collector::DeviceDataCollector;
pub use module::DeviceDataModule;
