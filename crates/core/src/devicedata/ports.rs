//! Port interfaces for device signals
//!
//! These traits define the boundaries between the collector and the
//! platform implementations. Every method reads one signal and must not
//! block; a signal the platform cannot provide is reported as `None` or the
//! type's unknown variant.

use devicedata_domain::{BatteryState, CarrierDetails, CpuIdentifiers, DeviceOrientation};

/// Read-only facade over host platform state
pub trait PlatformFacade: Send + Sync {
    /// Native pointer width in bytes
    fn pointer_width(&self) -> usize;

    /// CPU type and subtype, if the platform exposes them
    fn cpu_identifiers(&self) -> Option<CpuIdentifiers>;

    /// Turn on battery monitoring; must be safe to call repeatedly
    fn enable_battery_monitoring(&self);

    /// Battery level on a 0.0..=1.0 scale, or -1.0 when unknown
    fn battery_level(&self) -> f32;

    /// Current charging state
    fn battery_state(&self) -> BatteryState;

    /// User-preferred languages, most preferred first
    fn preferred_languages(&self) -> Vec<String>;

    /// Read a process environment variable
    fn environment_variable(&self, name: &str) -> Option<String>;

    /// Hardware machine identifier (e.g. "iPhone10,6")
    fn machine_identifier(&self) -> Option<String>;

    /// Coarse device model label (e.g. "iPhone")
    fn device_model(&self) -> String;

    /// Subscriber cellular provider, if any
    fn carrier(&self) -> Option<CarrierDetails>;

    /// Current physical orientation
    fn orientation(&self) -> DeviceOrientation;

    /// Value from the bundled application metadata
    fn bundle_info(&self, key: &str) -> Option<String>;

    /// Operating system version string
    fn os_version(&self) -> String;

    /// Operating system name
    fn os_name(&self) -> String;
}

/// Trait for classifying the current network connection
pub trait ConnectivityProvider: Send + Sync {
    /// Current connection type label (e.g. "wifi", "cellular", "none")
    fn current_connection_type(&self) -> String;
}
