//! Host platform adapters
//!
//! - [`HostPlatform`]: `PlatformFacade` over sysinfo, sysfs and the process
//!   environment
//! - [`InterfaceConnectivity`]: `ConnectivityProvider` over network interface
//!   state
//! - [`BundleInfo`]: bundle build metadata loaded from a file

pub mod bundle;
pub mod connectivity;
pub mod host;
pub mod power;

pub use bundle::BundleInfo;
pub use connectivity::InterfaceConnectivity;
pub use host::HostPlatform;
