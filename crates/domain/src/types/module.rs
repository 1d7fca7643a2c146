//! Pipeline module identity

use serde::{Deserialize, Serialize};

use crate::config::ModuleSettings;
use crate::constants::{MODULE_BUILD, MODULE_NAME, MODULE_PRIORITY};

/// Name, ordering priority and default state of a pipeline module.
///
/// Lower priorities run first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleConfig {
    pub name: String,
    pub priority: u32,
    pub build: u32,
    pub enabled: bool,
}

impl ModuleConfig {
    #[must_use]
    pub fn new(name: impl Into<String>, priority: u32, build: u32, enabled: bool) -> Self {
        Self { name: name.into(), priority, build, enabled }
    }

    /// Identity of the device data module.
    #[must_use]
    pub fn device_data() -> Self {
        Self::new(MODULE_NAME, MODULE_PRIORITY, MODULE_BUILD, true)
    }
}

impl From<&ModuleSettings> for ModuleConfig {
    fn from(settings: &ModuleSettings) -> Self {
        Self::new(settings.name.clone(), settings.priority, MODULE_BUILD, settings.enabled)
    }
}
