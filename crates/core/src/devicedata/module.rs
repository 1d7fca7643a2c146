//! Device data enrichment module
//!
//! Collects static attributes once on activation and merges them, together
//! with freshly collected volatile attributes, into every tracking event.

use devicedata_domain::{
    merge_attributes, AttributeMap, EnableRequest, ModuleConfig, TrackingEvent,
};
use tracing::{debug, info, trace};

use super::collector::DeviceDataCollector;
use crate::pipeline::ports::TrackingModule;

/// Pipeline stage that enriches tracking events with device attributes
pub struct DeviceDataModule {
    config: ModuleConfig,
    collector: DeviceDataCollector,
    enabled: bool,
    static_snapshot: AttributeMap,
}

impl DeviceDataModule {
    /// Create the module with its default identity (`devicedata`, priority 525)
    pub fn new(collector: DeviceDataCollector) -> Self {
        Self::with_config(ModuleConfig::device_data(), collector)
    }

    /// Create the module with an explicit pipeline identity
    pub fn with_config(config: ModuleConfig, collector: DeviceDataCollector) -> Self {
        Self { config, collector, enabled: false, static_snapshot: AttributeMap::new() }
    }

    /// Enable the module, (re)compute the static snapshot, then finish
    /// `request` with success.
    ///
    /// Calling this again recomputes the snapshot; there is no guard.
    pub fn activate(&mut self, request: EnableRequest) {
        self.enabled = true;
        self.static_snapshot = self.collector.static_snapshot();

        info!(
            module = %self.config.name,
            attributes = self.static_snapshot.len(),
            "Device data module activated"
        );
        request.finish(true);
    }

    /// Merge device attributes into the event payload.
    ///
    /// Precedence: incoming payload, then static, then volatile attributes;
    /// collector keys overwrite caller keys of the same name. The returned
    /// event keeps the incoming id and completion handle.
    #[must_use]
    pub fn on_tracking_event(&self, event: TrackingEvent) -> TrackingEvent {
        if !self.enabled {
            debug!(event_id = %event.id(), "Enriching event before activation");
        }

        let volatile = self.collector.volatile_snapshot();
        let payload = merge_attributes([event.payload(), &self.static_snapshot, &volatile]);

        trace!(event_id = %event.id(), keys = payload.len(), "Enriched tracking event");
        event.with_payload(payload)
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Attributes cached at the last activation
    #[must_use]
    pub const fn static_snapshot(&self) -> &AttributeMap {
        &self.static_snapshot
    }

    #[must_use]
    pub const fn collector(&self) -> &DeviceDataCollector {
        &self.collector
    }
}

impl TrackingModule for DeviceDataModule {
    fn config(&self) -> &ModuleConfig {
        &self.config
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn enable(&mut self, request: EnableRequest) {
        self.activate(request);
    }

    fn track(&self, event: TrackingEvent) -> TrackingEvent {
        self.on_tracking_event(event)
    }
}
