//! Connection type from network interface state.

use std::path::{Path, PathBuf};

use devicedata_core::ConnectivityProvider;
use devicedata_domain::ConnectionType;

const NET_CLASS_ROOT: &str = "/sys/class/net";

/// Classifies the active link by scanning `/sys/class/net`.
///
/// Only physical links count: an interface needs a `device` entry and must
/// not be a bridge, VLAN or tunnel, so Docker, libvirt, veth and tun links
/// are ignored. Wired links win over Wi-Fi, and Wi-Fi over cellular modems.
/// Hosts without the sysfs tree report `unknown`.
#[derive(Debug, Clone)]
pub struct InterfaceConnectivity {
    root: PathBuf,
}

impl InterfaceConnectivity {
    #[must_use]
    pub fn new() -> Self {
        Self::with_root(NET_CLASS_ROOT)
    }

    /// Scan an alternative interface directory
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Classify the interfaces under the configured root
    #[must_use]
    pub fn connection_type(&self) -> ConnectionType {
        let Ok(entries) = std::fs::read_dir(&self.root) else {
            return ConnectionType::Unknown;
        };

        entries
            .flatten()
            .filter(|entry| entry.file_name() != "lo")
            .map(|entry| entry.path())
            .filter(|dir| is_up(dir) && is_physical(dir))
            .map(|dir| classify_interface(&dir))
            .min_by_key(|kind| preference(*kind))
            .unwrap_or(ConnectionType::None)
    }
}

impl Default for InterfaceConnectivity {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectivityProvider for InterfaceConnectivity {
    fn current_connection_type(&self) -> String {
        let kind = self.connection_type();
        tracing::trace!(connection = %kind, "Classified network connection");
        kind.to_string()
    }
}

fn is_up(dir: &Path) -> bool {
    std::fs::read_to_string(dir.join("operstate")).is_ok_and(|state| state.trim() == "up")
}

/// Virtual device types that never carry the host's own uplink
const VIRTUAL_DEVTYPES: [&str; 5] = ["bridge", "vlan", "tun", "veth", "bond"];

fn is_physical(dir: &Path) -> bool {
    if !dir.join("device").exists() {
        return false;
    }
    devtype(dir).is_none_or(|kind| !VIRTUAL_DEVTYPES.contains(&kind.as_str()))
}

/// `DEVTYPE` from the interface's `uevent`, if declared
fn devtype(dir: &Path) -> Option<String> {
    std::fs::read_to_string(dir.join("uevent")).ok().and_then(|uevent| {
        uevent.lines().find_map(|line| line.strip_prefix("DEVTYPE=").map(str::to_string))
    })
}

fn classify_interface(dir: &Path) -> ConnectionType {
    if dir.join("wireless").exists() || dir.join("phy80211").exists() {
        return ConnectionType::Wifi;
    }

    let is_modem = devtype(dir).as_deref() == Some("wwan")
        || dir.file_name().and_then(|name| name.to_str()).is_some_and(|name| name.starts_with("wwan"));

    if is_modem {
        ConnectionType::Cellular
    } else {
        ConnectionType::Wired
    }
}

const fn preference(kind: ConnectionType) -> u8 {
    match kind {
        ConnectionType::Wired => 0,
        ConnectionType::Wifi => 1,
        ConnectionType::Cellular => 2,
        ConnectionType::None | ConnectionType::Unknown => 3,
    }
}
