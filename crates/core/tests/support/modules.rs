use std::sync::{Arc, Mutex};

use devicedata_core::TrackingModule;
use devicedata_domain::{EnableRequest, ModuleConfig, TrackingEvent};
use serde_json::json;

/// Module that stamps its name into the payload and logs hook calls.
pub struct RecordingModule {
    config: ModuleConfig,
    enabled: bool,
    log: Arc<Mutex<Vec<String>>>,
}

impl RecordingModule {
    pub fn new(name: &str, priority: u32, log: Arc<Mutex<Vec<String>>>) -> Self {
        Self { config: ModuleConfig::new(name, priority, 1, true), enabled: false, log }
    }

    pub fn disabled(name: &str, priority: u32, log: Arc<Mutex<Vec<String>>>) -> Self {
        Self { config: ModuleConfig::new(name, priority, 1, false), enabled: false, log }
    }
}

impl TrackingModule for RecordingModule {
    fn config(&self) -> &ModuleConfig {
        &self.config
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn enable(&mut self, request: EnableRequest) {
        self.enabled = true;
        self.log.lock().unwrap().push(format!("enable:{}", self.config.name));
        request.finish(true);
    }

    fn track(&self, event: TrackingEvent) -> TrackingEvent {
        self.log.lock().unwrap().push(format!("track:{}", self.config.name));
        let mut payload = event.payload().clone();
        payload.insert("last_module".to_string(), json!(self.config.name));
        payload.insert("device_model".to_string(), json!(format!("set by {}", self.config.name)));
        event.with_payload(payload)
    }
}
