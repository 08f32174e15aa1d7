//! A Rust client library for the NetworkManager D-Bus service.
//!
//! This crate wraps NetworkManager's object tree in typed async
//! wrappers: devices, access points, connection profiles, active
//! connections, IP/DHCP configuration, WiMAX NSPs, and the secret
//! agent registration machinery.
//!
//! # Example
//!
//! ```no_run
//! use nmdbus::NetworkManager;
//!
//! # async fn example() -> nmdbus::Result<()> {
//! let nm = NetworkManager::connect().await?;
//! println!("NetworkManager {}", nm.version().await?);
//!
//! for wifi in nm.wifi_devices().await? {
//!     wifi.request_scan().await?;
//!     for network in wifi.networks().await? {
//!         println!("{} ({}%) {}", network.ssid, network.strength, network.security);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All operations return `Result<T, NmError>`. Transient objects
//! (access points, active connections, IP configs) can disappear at any
//! moment; errors the daemon raises for a removed object are classified
//! as [`NmError::ObjectVanished`] so callers can re-enumerate instead
//! of failing. Authorization failures surface as
//! [`NmError::PermissionDenied`] together with the
//! [`NetworkManager::permissions`] query.
//!
//! # Signal-Based State Monitoring
//!
//! State transitions are observed through D-Bus signals rather than
//! polling: activation waits subscribe to `StateChanged` before reading
//! the current state, and the [`monitoring`] module exposes typed
//! streams and callback monitors for daemon, device, and network-list
//! events.
//!
//! # Logging
//!
//! This crate uses the [`log`](https://docs.rs/log) facade. To see log
//! output, install an implementation such as `env_logger` in the
//! application.

mod api;
mod core;
mod dbus;
pub mod monitoring;
mod types;
mod util;

pub use crate::api::models::{
    AccessPointInfo, ActiveConnectionInfo, AddressData, DeviceInfo, DhcpConfigInfo, Ipv4Address,
    Ipv4ConfigInfo, Ipv4Route, Ipv6Address, Ipv6ConfigInfo, NmError, NspInfo, Permission,
    PermissionResult, ProfileSettings, RouteData, SettingsMap,
};
pub use crate::api::network_manager::{NetworkManager, TimeoutConfig};
pub use crate::api::profile::{EapMethod, EapOptions, Phase2, ProfileBuilder, WifiBand};
pub use crate::core::active::ActiveConnection;
pub use crate::core::agent::{AgentHandle, SecretAgent};
pub use crate::core::device::{BluetoothDevice, Device, ModemDevice, SpecificDevice, WiredDevice};
pub use crate::core::ip_config::{Dhcp4Config, Dhcp6Config, Ipv4Config, Ipv6Config};
pub use crate::core::settings::{ConnectionProfile, Settings};
pub use crate::core::vpn::VpnConnection;
pub use crate::core::wifi::{AccessPoint, WirelessDevice};
pub use crate::core::wimax::{Nsp, WimaxDevice};
pub use crate::types::constants::{bus, secret_flags, SECRET_SECTIONS};
pub use crate::types::flags::{AgentCapabilities, ApFlags, ApSecurityFlags, DeviceCapabilities};
pub use crate::types::states::{
    ActiveConnectionState, ActiveConnectionStateReason, ConnectivityState, DeviceKind, DeviceState,
    DeviceStateReason, NmState, VpnConnectionState, VpnConnectionStateReason, WirelessMode,
};

/// A specialized `Result` type for NetworkManager operations.
pub type Result<T> = std::result::Result<T, NmError>;
