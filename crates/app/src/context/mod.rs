//! Application context - dependency wiring

use std::sync::Arc;

use devicedata_core::{
    ConnectivityProvider, DeviceDataCollector, DeviceDataModule, ModuleChain, PlatformFacade,
};
use devicedata_domain::{
    AttributeMap, Config, DeviceDataError, EnableRequest, ModuleConfig, Result, TrackingEvent,
};
use devicedata_infra::{HostPlatform, InterfaceConnectivity};

/// Enabled pipeline built from configuration
pub struct AppContext {
    pub config: Config,
    chain: ModuleChain,
}

impl AppContext {
    /// Wire the host platform adapters into an enabled pipeline.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let platform = Arc::new(HostPlatform::new(config.platform.clone()));
        let connectivity = Arc::new(InterfaceConnectivity::new());
        Self::with_adapters(config, platform, connectivity)
    }

    /// Wire explicit adapters into an enabled pipeline.
    #[must_use]
    pub fn with_adapters(
        config: Config,
        platform: Arc<dyn PlatformFacade>,
        connectivity: Arc<dyn ConnectivityProvider>,
    ) -> Self {
        let collector = DeviceDataCollector::new(platform, connectivity);
        let module = DeviceDataModule::with_config(ModuleConfig::from(&config.module), collector);

        let mut chain = ModuleChain::new().with_module(Box::new(module));
        chain.enable_all(EnableRequest::new());

        tracing::info!(modules = ?chain.module_names(), "Pipeline ready");
        Self { config, chain }
    }

    /// Names of the pipeline modules in execution order
    #[must_use]
    pub fn module_names(&self) -> Vec<&str> {
        self.chain.module_names()
    }

    /// Run a payload through the pipeline and return the enriched payload
    #[must_use]
    pub fn enrich(&self, payload: AttributeMap) -> AttributeMap {
        let event = TrackingEvent::new(payload);
        tracing::debug!(event_id = %event.id(), "Dispatching tracking event");
        self.chain.dispatch(event)
    }
}

/// Parse a JSON object into a payload; blank input is an empty payload.
///
/// # Errors
/// Returns `DeviceDataError::InvalidInput` if the input is not valid JSON or
/// is not an object.
pub fn parse_payload(input: &str) -> Result<AttributeMap> {
    if input.trim().is_empty() {
        return Ok(AttributeMap::new());
    }

    match serde_json::from_str::<serde_json::Value>(input)? {
        serde_json::Value::Object(map) => Ok(map.into_iter().collect()),
        other => Err(DeviceDataError::InvalidInput(format!(
            "Tracking payload must be a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
