//! Raw readings returned by the platform facade

use serde::{Deserialize, Serialize};

use crate::impl_domain_label_conversions;

/// Battery charging state as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatteryState {
    #[default]
    Unknown,
    Unplugged,
    Charging,
    Full,
}

impl_domain_label_conversions!(BatteryState {
    Unknown => "unknown",
    Unplugged => "unplugged",
    Charging => "charging",
    Full => "full",
});

/// Physical device orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceOrientation {
    #[default]
    Unknown,
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
    FaceUp,
    FaceDown,
}

impl_domain_label_conversions!(DeviceOrientation {
    Unknown => "unknown",
    Portrait => "portrait",
    PortraitUpsideDown => "portrait_upside_down",
    LandscapeLeft => "landscape_left",
    LandscapeRight => "landscape_right",
    FaceUp => "face_up",
    FaceDown => "face_down",
});

impl DeviceOrientation {
    #[must_use]
    pub const fn is_landscape(self) -> bool {
        matches!(self, Self::LandscapeLeft | Self::LandscapeRight)
    }
}

/// Network classification reported by the connectivity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionType {
    Wifi,
    Cellular,
    Wired,
    None,
    #[default]
    Unknown,
}

impl_domain_label_conversions!(ConnectionType {
    Wifi => "wifi",
    Cellular => "cellular",
    Wired => "wired",
    None => "none",
    Unknown => "unknown",
});

/// Subscriber cellular provider details; any field may be unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierDetails {
    pub mobile_network_code: Option<String>,
    pub mobile_country_code: Option<String>,
    pub iso_country_code: Option<String>,
    pub carrier_name: Option<String>,
}

/// Mach-style CPU type and subtype identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuIdentifiers {
    pub cpu_type: i32,
    pub cpu_subtype: i32,
}
