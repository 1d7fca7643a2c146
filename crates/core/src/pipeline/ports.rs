//! Port interface for pipeline modules

use devicedata_domain::{EnableRequest, ModuleConfig, TrackingEvent};

/// A stage in the tracking pipeline.
pub trait TrackingModule: Send + Sync {
    /// Name, priority and default state
    fn config(&self) -> &ModuleConfig;

    /// Whether `enable` has run
    fn is_enabled(&self) -> bool;

    /// Activate the module and finish `request` once activation is done
    fn enable(&mut self, request: EnableRequest);

    /// Process a tracking event and return the event to forward
    fn track(&self, event: TrackingEvent) -> TrackingEvent;
}
