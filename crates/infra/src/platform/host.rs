//! Platform facade for desktop and server hosts.
//!
//! Mobile-only signals (carrier, orientation) report "not available" and the
//! collector substitutes its placeholders.

use std::sync::atomic::{AtomicBool, Ordering};

use devicedata_core::devicedata::cpu::{
    CPU_SUBTYPE_ARM64_ALL, CPU_SUBTYPE_ARM_V7, CPU_SUBTYPE_X86_ALL, CPU_TYPE_ARM, CPU_TYPE_ARM64,
    CPU_TYPE_X86, CPU_TYPE_X86_64,
};
use devicedata_core::PlatformFacade;
use devicedata_domain::constants::UNKNOWN;
use devicedata_domain::{
    BatteryState, CarrierDetails, CpuIdentifiers, DeviceOrientation, PlatformConfig,
};
use sysinfo::System;

use super::bundle::BundleInfo;
use super::power;

/// Device label used when none is configured
pub const DEFAULT_DEVICE_LABEL: &str = "Desktop";

/// Locale variables in lookup order
const LOCALE_VARS: [&str; 4] = ["LANGUAGE", "LC_ALL", "LC_MESSAGES", "LANG"];

/// Host-backed `PlatformFacade`
#[derive(Debug)]
pub struct HostPlatform {
    config: PlatformConfig,
    bundle: BundleInfo,
    battery_monitoring: AtomicBool,
}

impl HostPlatform {
    /// Build the facade, loading bundle metadata from the configured file.
    ///
    /// A missing or unreadable metadata file is logged and treated as empty.
    #[must_use]
    pub fn new(config: PlatformConfig) -> Self {
        let bundle = match config.bundle_info_path.as_deref() {
            Some(path) => BundleInfo::load(std::path::Path::new(path)).unwrap_or_else(|e| {
                tracing::warn!(path, error = %e, "Bundle metadata unavailable");
                BundleInfo::default()
            }),
            None => BundleInfo::default(),
        };

        Self::with_bundle(config, bundle)
    }

    #[must_use]
    pub fn with_bundle(config: PlatformConfig, bundle: BundleInfo) -> Self {
        Self { config, bundle, battery_monitoring: AtomicBool::new(false) }
    }

    /// Whether battery monitoring has been requested
    #[must_use]
    pub fn battery_monitoring_enabled(&self) -> bool {
        self.battery_monitoring.load(Ordering::Relaxed)
    }
}

impl PlatformFacade for HostPlatform {
    fn pointer_width(&self) -> usize {
        std::mem::size_of::<usize>()
    }

    fn cpu_identifiers(&self) -> Option<CpuIdentifiers> {
        cpu_identifiers_for(std::env::consts::ARCH)
    }

    fn enable_battery_monitoring(&self) {
        if !self.battery_monitoring.swap(true, Ordering::Relaxed) {
            tracing::debug!("Battery monitoring enabled");
        }
    }

    fn battery_level(&self) -> f32 {
        power::read_battery().map_or(-1.0, |reading| reading.level)
    }

    fn battery_state(&self) -> BatteryState {
        power::read_battery().map_or(BatteryState::Unknown, |reading| reading.state)
    }

    fn preferred_languages(&self) -> Vec<String> {
        if !self.config.preferred_languages.is_empty() {
            return self.config.preferred_languages.clone();
        }

        let values: Vec<String> =
            LOCALE_VARS.iter().filter_map(|var| std::env::var(var).ok()).collect();
        languages_from_locale(values.iter().map(String::as_str))
    }

    fn environment_variable(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn machine_identifier(&self) -> Option<String> {
        Some(std::env::consts::ARCH.to_string())
    }

    fn device_model(&self) -> String {
        self.config.device_label.clone().unwrap_or_else(|| DEFAULT_DEVICE_LABEL.to_string())
    }

    fn carrier(&self) -> Option<CarrierDetails> {
        None
    }

    fn orientation(&self) -> DeviceOrientation {
        DeviceOrientation::Unknown
    }

    fn bundle_info(&self, key: &str) -> Option<String> {
        self.bundle.get(key).map(str::to_string)
    }

    fn os_version(&self) -> String {
        System::os_version().unwrap_or_else(|| UNKNOWN.to_string())
    }

    fn os_name(&self) -> String {
        System::name().unwrap_or_else(|| UNKNOWN.to_string())
    }
}

/// Mach-style CPU identifiers for a Rust target architecture name.
#[must_use]
pub fn cpu_identifiers_for(arch: &str) -> Option<CpuIdentifiers> {
    let (cpu_type, cpu_subtype) = match arch {
        "x86_64" => (CPU_TYPE_X86_64, CPU_SUBTYPE_X86_ALL),
        "x86" => (CPU_TYPE_X86, CPU_SUBTYPE_X86_ALL),
        "aarch64" => (CPU_TYPE_ARM64, CPU_SUBTYPE_ARM64_ALL),
        "arm" => (CPU_TYPE_ARM, CPU_SUBTYPE_ARM_V7),
        _ => return None,
    };
    Some(CpuIdentifiers { cpu_type, cpu_subtype })
}

/// Language tags from POSIX locale values, most preferred first.
///
/// `LANGUAGE` style colon lists are split; `en_US.UTF-8@euro` becomes
/// `en-US`; `C` and `POSIX` are ignored; duplicates are dropped.
pub fn languages_from_locale<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut languages: Vec<String> = Vec::new();
    for tag in values.into_iter().flat_map(|value| value.split(':')).filter_map(locale_to_tag) {
        if !languages.contains(&tag) {
            languages.push(tag);
        }
    }
    languages
}

fn locale_to_tag(locale: &str) -> Option<String> {
    let base = locale.split(['.', '@']).next()?.trim();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    Some(base.replace('_', "-"))
}
