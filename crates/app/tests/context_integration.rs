//! Integration tests for application wiring

use std::sync::Arc;

use devicedata_core::{ConnectivityProvider, PlatformFacade};
use devicedata_domain::{
    AttributeKey, AttributeMapExt, BatteryState, CarrierDetails, Config, CpuIdentifiers,
    DeviceOrientation,
};
use devicedata_lib::{parse_payload, AppContext};
use serde_json::json;

/// Fixed readings for a phone-like host
struct FixedPlatform;

impl PlatformFacade for FixedPlatform {
    fn pointer_width(&self) -> usize {
        8
    }

    fn cpu_identifiers(&self) -> Option<CpuIdentifiers> {
        None
    }

    fn enable_battery_monitoring(&self) {}

    fn battery_level(&self) -> f32 {
        0.25
    }

    fn battery_state(&self) -> BatteryState {
        BatteryState::Unplugged
    }

    fn preferred_languages(&self) -> Vec<String> {
        vec!["it-IT".to_string()]
    }

    fn environment_variable(&self, _name: &str) -> Option<String> {
        None
    }

    fn machine_identifier(&self) -> Option<String> {
        Some("iPad6,4".to_string())
    }

    fn device_model(&self) -> String {
        "iPad".to_string()
    }

    fn carrier(&self) -> Option<CarrierDetails> {
        None
    }

    fn orientation(&self) -> DeviceOrientation {
        DeviceOrientation::LandscapeRight
    }

    fn bundle_info(&self, _key: &str) -> Option<String> {
        None
    }

    fn os_version(&self) -> String {
        "12.1".to_string()
    }

    fn os_name(&self) -> String {
        "iPadOS".to_string()
    }
}

struct Offline;

impl ConnectivityProvider for Offline {
    fn current_connection_type(&self) -> String {
        "none".to_string()
    }
}

fn context(config: Config) -> AppContext {
    AppContext::with_adapters(config, Arc::new(FixedPlatform), Arc::new(Offline))
}

#[test]
fn test_enrich_parsed_payload() {
    let app = context(Config::default());
    let payload = parse_payload(r#"{"event_name": "purchase", "amount": 9.99}"#).expect("payload");

    let enriched = app.enrich(payload);

    assert_eq!(enriched.get("amount"), Some(&json!(9.99)));
    assert_eq!(enriched.attribute(AttributeKey::Model), Some("iPad Pro 9.7-inch (Cellular)"));
    assert_eq!(enriched.attribute(AttributeKey::BatteryPercent), Some("25.0"));
    assert_eq!(enriched.attribute(AttributeKey::IsCharging), Some("false"));
    assert_eq!(enriched.attribute(AttributeKey::Orientation), Some("Landscape"));
    assert_eq!(enriched.attribute(AttributeKey::FullOrientation), Some("Landscape Right"));
    assert_eq!(enriched.attribute(AttributeKey::ConnectionType), Some("none"));
    assert_eq!(enriched.attribute(AttributeKey::CpuType), Some("Unknown"));
}

#[test]
fn test_configured_module_identity() {
    let mut config = Config::default();
    config.module.name = "device".to_string();

    let app = context(config);

    assert_eq!(app.module_names(), vec!["device"]);
}

#[test]
fn test_disabled_module_leaves_payload_untouched() {
    let mut config = Config::default();
    config.module.enabled = false;
    let app = context(config);

    let enriched = app.enrich(parse_payload(r#"{"a": 1}"#).expect("payload"));

    assert_eq!(enriched.len(), 1);
    assert_eq!(enriched.get("a"), Some(&json!(1)));
}
