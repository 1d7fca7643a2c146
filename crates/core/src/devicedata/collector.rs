//! Device data collector
//!
//! One query per attribute. Every query is total: when the platform cannot
//! supply a signal the documented placeholder is returned instead, so a
//! snapshot always carries every key.

use std::sync::Arc;

use devicedata_domain::constants::{
    BUNDLE_BUILD_KEY, CHARGING, NOT_CHARGING, ORIENTATION_LANDSCAPE, ORIENTATION_PORTRAIT,
    SIMULATOR_MODEL_IDENTIFIER_VAR, UNKNOWN, WORD_SIZE_64_BIT,
};
use devicedata_domain::{
    AttributeKey, AttributeMap, AttributeMapExt, BatteryState, CarrierDetails, DeviceOrientation,
};
use tracing::{debug, trace};

use super::cpu::cpu_type_label;
use super::model_table::lookup_model;
use super::ports::{ConnectivityProvider, PlatformFacade};

/// Stateless query service over the platform facade
#[derive(Clone)]
pub struct DeviceDataCollector {
    platform: Arc<dyn PlatformFacade>,
    connectivity: Arc<dyn ConnectivityProvider>,
}

impl DeviceDataCollector {
    /// Create a collector reading from the given platform and connectivity ports
    pub fn new(
        platform: Arc<dyn PlatformFacade>,
        connectivity: Arc<dyn ConnectivityProvider>,
    ) -> Self {
        Self { platform, connectivity }
    }

    /// "64" on 8-byte words, "32" otherwise
    #[must_use]
    pub fn architecture(&self) -> String {
        let bits = if self.platform.pointer_width() == WORD_SIZE_64_BIT { "64" } else { "32" };
        bits.to_string()
    }

    #[must_use]
    pub fn cpu_type(&self) -> String {
        cpu_type_label(self.platform.cpu_identifiers()).to_string()
    }

    /// Battery level times 100, formatted as a raw float.
    ///
    /// The value is not rounded: a level of 0.57 can read "57.000004" and an
    /// unknown level (-1.0) reads "-100.0".
    #[must_use]
    pub fn battery_percent(&self) -> String {
        self.platform.enable_battery_monitoring();
        format!("{:?}", self.platform.battery_level() * 100.0)
    }

    #[must_use]
    pub fn is_charging(&self) -> String {
        let charging = match self.platform.battery_state() {
            BatteryState::Charging => CHARGING,
            BatteryState::Full | BatteryState::Unplugged | BatteryState::Unknown => NOT_CHARGING,
        };
        charging.to_string()
    }

    /// Most preferred user language
    #[must_use]
    pub fn iso639_language(&self) -> String {
        self.platform
            .preferred_languages()
            .into_iter()
            .next()
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    /// Not yet implemented; always empty.
    #[must_use]
    pub fn memory_available(&self) -> String {
        String::new()
    }

    /// Not yet implemented; always empty.
    #[must_use]
    pub fn memory_usage(&self) -> String {
        String::new()
    }

    /// Human-readable hardware model.
    ///
    /// The simulator identifier takes precedence over the machine identifier.
    /// Identifiers missing from the table are returned unchanged.
    #[must_use]
    pub fn model(&self) -> String {
        let identifier = self
            .platform
            .environment_variable(SIMULATOR_MODEL_IDENTIFIER_VAR)
            .filter(|id| !id.is_empty())
            .or_else(|| self.platform.machine_identifier());

        match identifier {
            Some(id) => lookup_model(&id).map_or(id, str::to_string),
            None => UNKNOWN.to_string(),
        }
    }

    /// Coarse device label such as "iPhone"
    #[must_use]
    pub fn name(&self) -> String {
        self.platform.device_model()
    }

    /// Carrier codes, carrier name and connection type
    #[must_use]
    pub fn carrier_info(&self) -> AttributeMap {
        let connection = self.connectivity.current_connection_type();
        let CarrierDetails { mobile_network_code, mobile_country_code, iso_country_code, carrier_name } =
            self.platform.carrier().unwrap_or_default();

        let mut info = AttributeMap::new();
        info.set_attribute(AttributeKey::CarrierMnc, mobile_network_code.unwrap_or_default());
        info.set_attribute(AttributeKey::CarrierMcc, mobile_country_code.unwrap_or_default());
        info.set_attribute(AttributeKey::CarrierIso, iso_country_code.unwrap_or_default());
        info.set_attribute(AttributeKey::Carrier, carrier_name.unwrap_or_default());
        info.set_attribute(AttributeKey::ConnectionType, connection);
        info
    }

    /// Coarse and detailed orientation labels.
    ///
    /// Upside-down portrait is reported as plain "Portrait".
    #[must_use]
    pub fn orientation(&self) -> AttributeMap {
        let orientation = self.platform.orientation();
        let coarse = if orientation.is_landscape() { ORIENTATION_LANDSCAPE } else { ORIENTATION_PORTRAIT };
        let full = match orientation {
            DeviceOrientation::FaceUp => "Face Up",
            DeviceOrientation::FaceDown => "Face Down",
            DeviceOrientation::LandscapeLeft => "Landscape Left",
            DeviceOrientation::LandscapeRight => "Landscape Right",
            DeviceOrientation::Portrait | DeviceOrientation::PortraitUpsideDown => {
                ORIENTATION_PORTRAIT
            }
            DeviceOrientation::Unknown => UNKNOWN,
        };

        let mut labels = AttributeMap::new();
        labels.set_attribute(AttributeKey::Orientation, coarse);
        labels.set_attribute(AttributeKey::FullOrientation, full);
        labels
    }

    /// SDK build from the bundle metadata, or "unknown"
    #[must_use]
    pub fn os_build(&self) -> String {
        self.platform.bundle_info(BUNDLE_BUILD_KEY).unwrap_or_else(|| UNKNOWN.to_string())
    }

    #[must_use]
    pub fn os_version(&self) -> String {
        self.platform.os_version()
    }

    #[must_use]
    pub fn os_name(&self) -> String {
        self.platform.os_name()
    }

    /// Attributes that stay constant for the process lifetime
    #[must_use]
    pub fn static_snapshot(&self) -> AttributeMap {
        let build = self.os_build();

        let mut snapshot = AttributeMap::new();
        snapshot.set_attribute(AttributeKey::Architecture, self.architecture());
        snapshot.set_attribute(AttributeKey::Build, build.clone());
        snapshot.set_attribute(AttributeKey::OsBuild, build);
        snapshot.set_attribute(AttributeKey::CpuType, self.cpu_type());
        snapshot.set_attribute(AttributeKey::Model, self.model());
        snapshot.set_attribute(AttributeKey::Device, self.name());
        snapshot.set_attribute(AttributeKey::OsVersion, self.os_version());
        snapshot.set_attribute(AttributeKey::OsName, self.os_name());

        debug!(attributes = snapshot.len(), "Collected static device attributes");
        snapshot
    }

    /// Attributes that may change between tracking calls
    #[must_use]
    pub fn volatile_snapshot(&self) -> AttributeMap {
        let mut snapshot = AttributeMap::new();
        snapshot.set_attribute(AttributeKey::BatteryPercent, self.battery_percent());
        snapshot.set_attribute(AttributeKey::IsCharging, self.is_charging());
        snapshot.set_attribute(AttributeKey::Language, self.iso639_language());
        snapshot.extend(self.orientation());
        snapshot.extend(self.carrier_info());

        trace!(attributes = snapshot.len(), "Collected volatile device attributes");
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use devicedata_domain::CpuIdentifiers;
    use serde_json::json;

    use super::*;
    use crate::devicedata::cpu::{CPU_SUBTYPE_ARM64_V8, CPU_TYPE_ARM64};

    #[derive(Default)]
    struct StubPlatform {
        pointer_width: usize,
        battery_level: f32,
        battery_state: BatteryState,
        languages: Vec<String>,
        simulator_model: Option<String>,
        machine: Option<String>,
        carrier: Option<CarrierDetails>,
        orientation: DeviceOrientation,
        sdk_build: Option<String>,
        monitoring_calls: AtomicUsize,
    }

    impl PlatformFacade for StubPlatform {
        fn pointer_width(&self) -> usize {
            self.pointer_width
        }

        fn cpu_identifiers(&self) -> Option<CpuIdentifiers> {
            Some(CpuIdentifiers { cpu_type: CPU_TYPE_ARM64, cpu_subtype: CPU_SUBTYPE_ARM64_V8 })
        }

        fn enable_battery_monitoring(&self) {
            self.monitoring_calls.fetch_add(1, Ordering::SeqCst);
        }

        fn battery_level(&self) -> f32 {
            self.battery_level
        }

        fn battery_state(&self) -> BatteryState {
            self.battery_state
        }

        fn preferred_languages(&self) -> Vec<String> {
            self.languages.clone()
        }

        fn environment_variable(&self, name: &str) -> Option<String> {
            (name == SIMULATOR_MODEL_IDENTIFIER_VAR).then(|| self.simulator_model.clone()).flatten()
        }

        fn machine_identifier(&self) -> Option<String> {
            self.machine.clone()
        }

        fn device_model(&self) -> String {
            "iPhone".to_string()
        }

        fn carrier(&self) -> Option<CarrierDetails> {
            self.carrier.clone()
        }

        fn orientation(&self) -> DeviceOrientation {
            self.orientation
        }

        fn bundle_info(&self, key: &str) -> Option<String> {
            (key == BUNDLE_BUILD_KEY).then(|| self.sdk_build.clone()).flatten()
        }

        fn os_version(&self) -> String {
            "11.2".to_string()
        }

        fn os_name(&self) -> String {
            "iOS".to_string()
        }
    }

    struct StubConnectivity;

    impl ConnectivityProvider for StubConnectivity {
        fn current_connection_type(&self) -> String {
            "wifi".to_string()
        }
    }

    fn collector(platform: StubPlatform) -> (DeviceDataCollector, Arc<StubPlatform>) {
        let platform = Arc::new(platform);
        let collector = DeviceDataCollector::new(platform.clone(), Arc::new(StubConnectivity));
        (collector, platform)
    }

    #[test]
    fn test_architecture_by_word_size() {
        let (wide, _) = collector(StubPlatform { pointer_width: 8, ..Default::default() });
        let (narrow, _) = collector(StubPlatform { pointer_width: 4, ..Default::default() });
        assert_eq!(wide.architecture(), "64");
        assert_eq!(narrow.architecture(), "32");
    }

    #[test]
    fn test_battery_percent_is_raw_float() {
        let (full, _) = collector(StubPlatform { battery_level: 1.0, ..Default::default() });
        let (unknown, _) = collector(StubPlatform { battery_level: -1.0, ..Default::default() });
        let (half, _) = collector(StubPlatform { battery_level: 0.5, ..Default::default() });
        assert_eq!(full.battery_percent(), "100.0");
        assert_eq!(unknown.battery_percent(), "-100.0");
        assert_eq!(half.battery_percent(), "50.0");
    }

    #[test]
    fn test_battery_monitoring_enabled_before_every_read() {
        let (collector, platform) = collector(StubPlatform::default());
        let _ = collector.battery_percent();
        let _ = collector.battery_percent();
        assert_eq!(platform.monitoring_calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_is_charging_only_when_charging() {
        for (state, expected) in [
            (BatteryState::Charging, "true"),
            (BatteryState::Full, "false"),
            (BatteryState::Unplugged, "false"),
            (BatteryState::Unknown, "false"),
        ] {
            let (collector, _) = collector(StubPlatform { battery_state: state, ..Default::default() });
            assert_eq!(collector.is_charging(), expected, "state {state}");
        }
    }

    #[test]
    fn test_language_takes_first_preference() {
        let languages = vec!["fr-CA".to_string(), "en-US".to_string()];
        let (collector, _) = collector(StubPlatform { languages, ..Default::default() });
        assert_eq!(collector.iso639_language(), "fr-CA");
    }

    #[test]
    fn test_language_without_preferences() {
        let (collector, _) = collector(StubPlatform::default());
        assert_eq!(collector.iso639_language(), "unknown");
    }

    #[test]
    fn test_model_lookup_and_passthrough() {
        let (known, _) =
            collector(StubPlatform { machine: Some("iPhone10,6".into()), ..Default::default() });
        let (unmapped, _) =
            collector(StubPlatform { machine: Some("iPhone99,9".into()), ..Default::default() });
        let (missing, _) = collector(StubPlatform::default());

        assert_eq!(known.model(), "iPhone X (GSM)");
        assert_eq!(unmapped.model(), "iPhone99,9");
        assert_eq!(missing.model(), "unknown");
    }

    #[test]
    fn test_simulator_identifier_overrides_machine() {
        let (collector, _) = collector(StubPlatform {
            simulator_model: Some("iPhone9,3".into()),
            machine: Some("x86_64".into()),
            ..Default::default()
        });
        assert_eq!(collector.model(), "iPhone 7 (GSM)");
    }

    #[test]
    fn test_carrier_defaults_to_empty_strings() {
        let (collector, _) = collector(StubPlatform::default());
        let info = collector.carrier_info();

        assert_eq!(info.len(), 5);
        assert_eq!(info["carrier"], json!(""));
        assert_eq!(info["carrier_mnc"], json!(""));
        assert_eq!(info["carrier_mcc"], json!(""));
        assert_eq!(info["carrier_iso"], json!(""));
        assert_eq!(info["connection_type"], json!("wifi"));
    }

    #[test]
    fn test_carrier_partial_details() {
        let carrier = CarrierDetails {
            mobile_network_code: Some("410".into()),
            carrier_name: Some("AT&T".into()),
            ..Default::default()
        };
        let (collector, _) = collector(StubPlatform { carrier: Some(carrier), ..Default::default() });
        let info = collector.carrier_info();

        assert_eq!(info["carrier_mnc"], json!("410"));
        assert_eq!(info["carrier"], json!("AT&T"));
        assert_eq!(info["carrier_mcc"], json!(""));
    }

    #[test]
    fn test_orientation_labels() {
        let cases = [
            (DeviceOrientation::FaceUp, "Portrait", "Face Up"),
            (DeviceOrientation::FaceDown, "Portrait", "Face Down"),
            (DeviceOrientation::LandscapeLeft, "Landscape", "Landscape Left"),
            (DeviceOrientation::LandscapeRight, "Landscape", "Landscape Right"),
            (DeviceOrientation::Portrait, "Portrait", "Portrait"),
            (DeviceOrientation::PortraitUpsideDown, "Portrait", "Portrait"),
            (DeviceOrientation::Unknown, "Portrait", "unknown"),
        ];
        for (orientation, coarse, full) in cases {
            let (collector, _) = collector(StubPlatform { orientation, ..Default::default() });
            let labels = collector.orientation();
            assert_eq!(labels.len(), 2);
            assert_eq!(labels["device_orientation"], json!(coarse), "{orientation}");
            assert_eq!(labels["device_full_orientation"], json!(full), "{orientation}");
        }
    }

    #[test]
    fn test_os_build_placeholder() {
        let (missing, _) = collector(StubPlatform::default());
        let (present, _) =
            collector(StubPlatform { sdk_build: Some("15C107".into()), ..Default::default() });
        assert_eq!(missing.os_build(), "unknown");
        assert_eq!(present.os_build(), "15C107");
    }

    #[test]
    fn test_memory_stubs_are_empty() {
        let (collector, _) = collector(StubPlatform::default());
        assert_eq!(collector.memory_available(), "");
        assert_eq!(collector.memory_usage(), "");
    }

    #[test]
    fn test_snapshots_cover_their_keys() {
        let (collector, _) = collector(StubPlatform::default());
        let statics = collector.static_snapshot();
        let volatile = collector.volatile_snapshot();

        for key in AttributeKey::STATIC {
            assert!(statics.contains_key(key.as_str()), "static snapshot missing {key}");
        }
        for key in AttributeKey::VOLATILE {
            assert!(volatile.contains_key(key.as_str()), "volatile snapshot missing {key}");
        }
        assert_eq!(statics.len(), AttributeKey::STATIC.len());
        assert_eq!(volatile.len(), AttributeKey::VOLATILE.len());
        assert_eq!(statics["device_cputype"], json!("ARM64v8"));
        assert_eq!(statics["device"], json!("iPhone"));
    }
}
