//! Domain types and models

pub mod attributes;
pub mod event;
pub mod keys;
pub mod module;
pub mod platform;

pub use attributes::{merge_attributes, AttributeMap, AttributeMapExt};
pub use event::{Completion, EnableRequest, TrackingEvent};
pub use keys::AttributeKey;
pub use module::ModuleConfig;
pub use platform::{BatteryState, CarrierDetails, ConnectionType, CpuIdentifiers, DeviceOrientation};
