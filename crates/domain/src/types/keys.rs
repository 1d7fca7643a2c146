//! Attribute keys written into tracking payloads

use serde::{Deserialize, Serialize};

use crate::impl_domain_label_conversions;

/// Fixed payload key produced (or reserved) by the device data stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AttributeKey {
    /// Coarse device label, e.g. "iPhone"
    #[serde(rename = "device")]
    Device,
    #[serde(rename = "device_architecture")]
    Architecture,
    #[serde(rename = "device_battery_percent")]
    BatteryPercent,
    #[serde(rename = "device_build")]
    Build,
    #[serde(rename = "device_cputype")]
    CpuType,
    #[serde(rename = "device_ischarging")]
    IsCharging,
    #[serde(rename = "device_language")]
    Language,
    /// Reserved, never populated
    #[serde(rename = "device_memory_available")]
    MemoryAvailable,
    /// Reserved, never populated
    #[serde(rename = "device_memory_usage")]
    MemoryUsage,
    #[serde(rename = "device_model")]
    Model,
    #[serde(rename = "device_orientation")]
    Orientation,
    #[serde(rename = "device_full_orientation")]
    FullOrientation,
    #[serde(rename = "device_os_build")]
    OsBuild,
    #[serde(rename = "device_os_version")]
    OsVersion,
    #[serde(rename = "device_os_name")]
    OsName,
    /// Reserved, never populated
    #[serde(rename = "device_resolution")]
    Resolution,
    #[serde(rename = "carrier")]
    Carrier,
    #[serde(rename = "carrier_mnc")]
    CarrierMnc,
    #[serde(rename = "carrier_mcc")]
    CarrierMcc,
    #[serde(rename = "carrier_iso")]
    CarrierIso,
    #[serde(rename = "connection_type")]
    ConnectionType,
}

impl_domain_label_conversions!(AttributeKey {
    Device => "device",
    Architecture => "device_architecture",
    BatteryPercent => "device_battery_percent",
    Build => "device_build",
    CpuType => "device_cputype",
    IsCharging => "device_ischarging",
    Language => "device_language",
    MemoryAvailable => "device_memory_available",
    MemoryUsage => "device_memory_usage",
    Model => "device_model",
    Orientation => "device_orientation",
    FullOrientation => "device_full_orientation",
    OsBuild => "device_os_build",
    OsVersion => "device_os_version",
    OsName => "device_os_name",
    Resolution => "device_resolution",
    Carrier => "carrier",
    CarrierMnc => "carrier_mnc",
    CarrierMcc => "carrier_mcc",
    CarrierIso => "carrier_iso",
    ConnectionType => "connection_type",
});

impl AttributeKey {
    /// Keys gathered once at activation.
    pub const STATIC: [Self; 8] = [
        Self::Architecture,
        Self::Build,
        Self::OsBuild,
        Self::CpuType,
        Self::Model,
        Self::Device,
        Self::OsVersion,
        Self::OsName,
    ];

    /// Keys gathered on every tracking call.
    pub const VOLATILE: [Self; 10] = [
        Self::BatteryPercent,
        Self::IsCharging,
        Self::Language,
        Self::Orientation,
        Self::FullOrientation,
        Self::CarrierMnc,
        Self::CarrierMcc,
        Self::CarrierIso,
        Self::Carrier,
        Self::ConnectionType,
    ];

    /// Keys declared for the payload but never written.
    pub const RESERVED: [Self; 3] = [Self::MemoryAvailable, Self::MemoryUsage, Self::Resolution];

    /// Payload key string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.as_label()
    }

    /// Every key the stage writes into an enriched payload.
    pub fn produced() -> impl Iterator<Item = Self> {
        Self::STATIC.into_iter().chain(Self::VOLATILE)
    }
}

impl AsRef<str> for AttributeKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
