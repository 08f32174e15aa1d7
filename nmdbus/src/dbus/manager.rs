//! Proxy for the manager singleton.

use std::collections::HashMap;
use zbus::proxy;
use zvariant::OwnedObjectPath;

/// Proxy for the main NetworkManager interface.
///
/// Provides device enumeration, connection activation, global radio
/// switches, and the daemon-level signals.
#[proxy(
    interface = "org.freedesktop.NetworkManager",
    default_service = "org.freedesktop.NetworkManager",
    default_path = "/org/freedesktop/NetworkManager"
)]
pub trait NM {
    /// Returns paths to all network devices.
    fn get_devices(&self) -> zbus::Result<Vec<OwnedObjectPath>>;

    /// Returns the device handling the given IP interface name.
    fn get_device_by_ip_iface(&self, iface: &str) -> zbus::Result<OwnedObjectPath>;

    /// Activates an existing saved connection.
    ///
    /// Any of the three paths may be "/" to let the daemon pick.
    fn activate_connection(
        &self,
        connection: OwnedObjectPath,
        device: OwnedObjectPath,
        specific_object: OwnedObjectPath,
    ) -> zbus::Result<OwnedObjectPath>;

    /// Creates a new connection and activates it simultaneously.
    ///
    /// Returns paths to both the new connection settings and active connection.
    fn add_and_activate_connection(
        &self,
        connection: HashMap<String, HashMap<String, zvariant::OwnedValue>>,
        device: OwnedObjectPath,
        specific_object: OwnedObjectPath,
    ) -> zbus::Result<(OwnedObjectPath, OwnedObjectPath)>;

    /// Deactivates an active connection.
    fn deactivate_connection(&self, active_connection: OwnedObjectPath) -> zbus::Result<()>;

    /// Enables or disables networking as a whole.
    fn enable(&self, enable: bool) -> zbus::Result<()>;

    /// Puts the daemon to sleep or wakes it up.
    fn sleep(&self, sleep: bool) -> zbus::Result<()>;

    /// Returns the caller's polkit permissions as a name-to-result map.
    fn get_permissions(&self) -> zbus::Result<HashMap<String, String>>;

    /// Re-checks connectivity and returns the resulting state code.
    fn check_connectivity(&self) -> zbus::Result<u32>;

    /// Returns the current daemon state code.
    #[zbus(name = "state")]
    fn state_code(&self) -> zbus::Result<u32>;

    /// Daemon version string.
    #[zbus(property)]
    fn version(&self) -> zbus::Result<String>;

    /// Current daemon state.
    #[zbus(property)]
    fn state(&self) -> zbus::Result<u32>;

    /// Result of the most recent connectivity check.
    #[zbus(property)]
    fn connectivity(&self) -> zbus::Result<u32>;

    /// Whether the daemon is still starting up.
    #[zbus(property)]
    fn startup(&self) -> zbus::Result<bool>;

    /// Whether networking as a whole is enabled.
    #[zbus(property)]
    fn networking_enabled(&self) -> zbus::Result<bool>;

    /// Whether Wi-Fi is globally enabled.
    #[zbus(property)]
    fn wireless_enabled(&self) -> zbus::Result<bool>;

    /// Enable or disable Wi-Fi globally.
    #[zbus(property)]
    fn set_wireless_enabled(&self, value: bool) -> zbus::Result<()>;

    /// Whether the Wi-Fi hardware switch allows Wi-Fi.
    #[zbus(property)]
    fn wireless_hardware_enabled(&self) -> zbus::Result<bool>;

    /// Whether mobile broadband is globally enabled.
    #[zbus(property)]
    fn wwan_enabled(&self) -> zbus::Result<bool>;

    /// Enable or disable mobile broadband globally.
    #[zbus(property)]
    fn set_wwan_enabled(&self, value: bool) -> zbus::Result<()>;

    /// Whether the mobile broadband hardware switch is on.
    #[zbus(property)]
    fn wwan_hardware_enabled(&self) -> zbus::Result<bool>;

    /// Whether WiMAX is globally enabled.
    #[zbus(property)]
    fn wimax_enabled(&self) -> zbus::Result<bool>;

    /// Enable or disable WiMAX globally.
    #[zbus(property)]
    fn set_wimax_enabled(&self, value: bool) -> zbus::Result<()>;

    /// Whether the WiMAX hardware switch is on.
    #[zbus(property)]
    fn wimax_hardware_enabled(&self) -> zbus::Result<bool>;

    /// Paths to all active connections.
    #[zbus(property)]
    fn active_connections(&self) -> zbus::Result<Vec<OwnedObjectPath>>;

    /// Path of the active connection holding the default route ("/" if none).
    #[zbus(property)]
    fn primary_connection(&self) -> zbus::Result<OwnedObjectPath>;

    /// Path of an active connection currently activating ("/" if none).
    #[zbus(property)]
    fn activating_connection(&self) -> zbus::Result<OwnedObjectPath>;

    /// Signal emitted when the daemon state changes.
    ///
    /// The method is named `daemon_state_changed` to avoid conflicts with
    /// the `state` property's change stream.
    #[zbus(signal, name = "StateChanged")]
    fn daemon_state_changed(&self, state: u32);

    /// Signal emitted when a device appears.
    #[zbus(signal)]
    fn device_added(&self, path: OwnedObjectPath);

    /// Signal emitted when a device disappears.
    #[zbus(signal)]
    fn device_removed(&self, path: OwnedObjectPath);

    /// Signal emitted when polkit permissions may have changed.
    #[zbus(signal)]
    fn check_permissions(&self);

    /// Legacy manager-level property change notification, emitted on the
    /// NetworkManager interface itself rather than
    /// `org.freedesktop.DBus.Properties`.
    #[zbus(signal, name = "PropertiesChanged")]
    fn daemon_properties_changed(
        &self,
        properties: HashMap<String, zvariant::OwnedValue>,
    );
}
