use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use devicedata_core::devicedata::cpu::{CPU_SUBTYPE_ARM64_V8, CPU_TYPE_ARM64};
use devicedata_core::{ConnectivityProvider, DeviceDataCollector, PlatformFacade};
use devicedata_domain::{BatteryState, CarrierDetails, CpuIdentifiers, DeviceOrientation};

/// Mutable readings served by [`FakePlatform`].
#[derive(Debug, Clone)]
pub struct Readings {
    pub pointer_width: usize,
    pub cpu: Option<CpuIdentifiers>,
    pub battery_level: f32,
    pub battery_state: BatteryState,
    pub languages: Vec<String>,
    pub simulator_model: Option<String>,
    pub machine: Option<String>,
    pub device_model: String,
    pub carrier: Option<CarrierDetails>,
    pub orientation: DeviceOrientation,
    pub sdk_build: Option<String>,
    pub os_version: String,
    pub os_name: String,
}

impl Readings {
    /// A fully populated iPhone X reading.
    pub fn iphone() -> Self {
        Self {
            pointer_width: 8,
            cpu: Some(CpuIdentifiers { cpu_type: CPU_TYPE_ARM64, cpu_subtype: CPU_SUBTYPE_ARM64_V8 }),
            battery_level: 0.75,
            battery_state: BatteryState::Charging,
            languages: vec!["en-US".to_string(), "de-DE".to_string()],
            simulator_model: None,
            machine: Some("iPhone10,6".to_string()),
            device_model: "iPhone".to_string(),
            carrier: Some(CarrierDetails {
                mobile_network_code: Some("410".to_string()),
                mobile_country_code: Some("310".to_string()),
                iso_country_code: Some("us".to_string()),
                carrier_name: Some("AT&T".to_string()),
            }),
            orientation: DeviceOrientation::FaceUp,
            sdk_build: Some("15C107".to_string()),
            os_version: "11.2".to_string(),
            os_name: "iOS".to_string(),
        }
    }

    /// A reading where every optional platform signal is unavailable.
    pub fn degraded() -> Self {
        Self {
            pointer_width: 4,
            cpu: None,
            battery_level: -1.0,
            battery_state: BatteryState::Unknown,
            languages: Vec::new(),
            simulator_model: None,
            machine: None,
            device_model: String::new(),
            carrier: None,
            orientation: DeviceOrientation::Unknown,
            sdk_build: None,
            os_version: String::new(),
            os_name: String::new(),
        }
    }
}

/// In-memory `PlatformFacade` with adjustable readings and call counters.
pub struct FakePlatform {
    readings: Mutex<Readings>,
    monitoring_calls: AtomicUsize,
    machine_reads: AtomicUsize,
}

impl FakePlatform {
    pub fn new(readings: Readings) -> Self {
        Self {
            readings: Mutex::new(readings),
            monitoring_calls: AtomicUsize::new(0),
            machine_reads: AtomicUsize::new(0),
        }
    }

    /// Change readings between calls.
    pub fn update(&self, change: impl FnOnce(&mut Readings)) {
        change(&mut self.readings.lock().unwrap());
    }

    pub fn monitoring_calls(&self) -> usize {
        self.monitoring_calls.load(Ordering::SeqCst)
    }

    pub fn machine_reads(&self) -> usize {
        self.machine_reads.load(Ordering::SeqCst)
    }

    fn read<T>(&self, pick: impl FnOnce(&Readings) -> T) -> T {
        pick(&self.readings.lock().unwrap())
    }
}

impl PlatformFacade for FakePlatform {
    fn pointer_width(&self) -> usize {
        self.read(|r| r.pointer_width)
    }

    fn cpu_identifiers(&self) -> Option<CpuIdentifiers> {
        self.read(|r| r.cpu)
    }

    fn enable_battery_monitoring(&self) {
        self.monitoring_calls.fetch_add(1, Ordering::SeqCst);
    }

    fn battery_level(&self) -> f32 {
        self.read(|r| r.battery_level)
    }

    fn battery_state(&self) -> BatteryState {
        self.read(|r| r.battery_state)
    }

    fn preferred_languages(&self) -> Vec<String> {
        self.read(|r| r.languages.clone())
    }

    fn environment_variable(&self, name: &str) -> Option<String> {
        if name == "SIMULATOR_MODEL_IDENTIFIER" {
            self.read(|r| r.simulator_model.clone())
        } else {
            None
        }
    }

    fn machine_identifier(&self) -> Option<String> {
        self.machine_reads.fetch_add(1, Ordering::SeqCst);
        self.read(|r| r.machine.clone())
    }

    fn device_model(&self) -> String {
        self.read(|r| r.device_model.clone())
    }

    fn carrier(&self) -> Option<CarrierDetails> {
        self.read(|r| r.carrier.clone())
    }

    fn orientation(&self) -> DeviceOrientation {
        self.read(|r| r.orientation)
    }

    fn bundle_info(&self, key: &str) -> Option<String> {
        if key == "DTSDKBuild" {
            self.read(|r| r.sdk_build.clone())
        } else {
            None
        }
    }

    fn os_version(&self) -> String {
        self.read(|r| r.os_version.clone())
    }

    fn os_name(&self) -> String {
        self.read(|r| r.os_name.clone())
    }
}

/// Connectivity provider returning a settable label.
pub struct FakeConnectivity {
    connection: Mutex<String>,
}

impl FakeConnectivity {
    pub fn new(connection: &str) -> Self {
        Self { connection: Mutex::new(connection.to_string()) }
    }

    pub fn set(&self, connection: &str) {
        *self.connection.lock().unwrap() = connection.to_string();
    }
}

impl ConnectivityProvider for FakeConnectivity {
    fn current_connection_type(&self) -> String {
        self.connection.lock().unwrap().clone()
    }
}

/// Collector wired to fresh fakes; the fakes are returned for inspection.
pub fn collector_with(
    readings: Readings,
) -> (DeviceDataCollector, Arc<FakePlatform>, Arc<FakeConnectivity>) {
    let platform = Arc::new(FakePlatform::new(readings));
    let connectivity = Arc::new(FakeConnectivity::new("wifi"));
    let collector = DeviceDataCollector::new(platform.clone(), connectivity.clone());
    (collector, platform, connectivity)
}
