//! Priority-ordered module chain
//!
//! Modules run in ascending priority; modules registered with the same
//! priority keep their registration order.

use devicedata_domain::{AttributeMap, EnableRequest, TrackingEvent};
use tracing::{debug, info};

use super::ports::TrackingModule;

/// Ordered set of pipeline modules
#[derive(Default)]
pub struct ModuleChain {
    modules: Vec<Box<dyn TrackingModule>>,
}

impl ModuleChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a module (builder form)
    #[must_use]
    pub fn with_module(mut self, module: Box<dyn TrackingModule>) -> Self {
        self.register(module);
        self
    }

    /// Insert a module after every module with an equal or lower priority
    pub fn register(&mut self, module: Box<dyn TrackingModule>) {
        let priority = module.config().priority;
        let position = self
            .modules
            .iter()
            .position(|existing| existing.config().priority > priority)
            .unwrap_or(self.modules.len());

        debug!(module = %module.config().name, priority, position, "Registered pipeline module");
        self.modules.insert(position, module);
    }

    /// Module names in execution order
    #[must_use]
    pub fn module_names(&self) -> Vec<&str> {
        self.modules.iter().map(|module| module.config().name.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Enable every module whose config allows it, then signal the request once.
    ///
    /// Each module receives its own request without a completion; only the
    /// caller's request is finished, after the last module.
    pub fn enable_all(&mut self, request: EnableRequest) {
        for module in &mut self.modules {
            if !module.config().enabled {
                debug!(module = %module.config().name, "Skipping disabled module");
                continue;
            }
            module.enable(EnableRequest::new());
        }

        info!(modules = self.modules.len(), "Pipeline modules enabled");
        request.finish(true);
    }

    /// Pass an event through every enabled module in order
    #[must_use]
    pub fn track(&self, event: TrackingEvent) -> TrackingEvent {
        self.modules
            .iter()
            .filter(|module| module.is_enabled())
            .fold(event, |event, module| module.track(event))
    }

    /// Track an event, then invoke its completion with the final payload
    pub fn dispatch(&self, event: TrackingEvent) -> AttributeMap {
        self.track(event).finish(true)
    }
}
