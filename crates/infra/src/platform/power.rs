//! Battery readings from Linux sysfs.
//!
//! The battery directory is resolved once on first access and cached for
//! the lifetime of the process. Hosts without the sysfs tree report no
//! battery.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use devicedata_domain::BatteryState;

/// Charge level in `0.0..=1.0` and charging state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryReading {
    pub level: f32,
    pub state: BatteryState,
}

const POWER_SUPPLY_ROOT: &str = "/sys/class/power_supply";

static BATTERY_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Current reading of the first system battery, if any.
pub fn read_battery() -> Option<BatteryReading> {
    let dir = BATTERY_DIR.get_or_init(|| find_battery(Path::new(POWER_SUPPLY_ROOT))).as_ref()?;
    read_battery_at(dir)
}

/// First `power_supply` entry whose `type` is `Battery`.
pub(crate) fn find_battery(root: &Path) -> Option<PathBuf> {
    let mut candidates: Vec<PathBuf> = std::fs::read_dir(root)
        .ok()?
        .flatten()
        .map(|entry| entry.path())
        .filter(|dir| read_trimmed(&dir.join("type")).is_some_and(|kind| kind == "Battery"))
        .collect();
    candidates.sort();

    let found = candidates.into_iter().next();
    tracing::debug!(battery = ?found, "Resolved battery sysfs path");
    found
}

/// Read `capacity` (percent) and `status` from a battery directory.
pub(crate) fn read_battery_at(dir: &Path) -> Option<BatteryReading> {
    let capacity = read_trimmed(&dir.join("capacity"))?.parse::<u8>().ok()?;
    let state = read_trimmed(&dir.join("status")).map_or(BatteryState::Unknown, |s| parse_status(&s));

    Some(BatteryReading { level: f32::from(capacity.min(100)) / 100.0, state })
}

/// Map a sysfs `status` string to a battery state.
pub(crate) fn parse_status(status: &str) -> BatteryState {
    match status {
        "Charging" => BatteryState::Charging,
        "Full" => BatteryState::Full,
        "Discharging" | "Not charging" => BatteryState::Unplugged,
        _ => BatteryState::Unknown,
    }
}

fn read_trimmed(path: &Path) -> Option<String> {
    std::fs::read_to_string(path).ok().map(|s| s.trim().to_string())
}
