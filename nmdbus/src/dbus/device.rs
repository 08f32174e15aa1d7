//! Proxy for the base device interface.

use zbus::proxy;
use zvariant::OwnedObjectPath;

/// Proxy for NetworkManager device interface.
///
/// Covers the properties shared by every device kind. Type-specific
/// interfaces (wireless, wired, modem, ...) live alongside this one on
/// the same object path.
///
/// # Signals
///
/// The `StateChanged` signal is emitted whenever the device state changes.
/// Use `receive_device_state_changed()` to get a stream of state change events.
#[proxy(
    interface = "org.freedesktop.NetworkManager.Device",
    default_service = "org.freedesktop.NetworkManager"
)]
pub trait NMDevice {
    /// Disconnects the device and blocks autoconnect until told otherwise.
    fn disconnect(&self) -> zbus::Result<()>;

    /// Deletes a software device (bridges, bonds, vlans).
    fn delete(&self) -> zbus::Result<()>;

    /// Operating-system device identifier.
    #[zbus(property)]
    fn udi(&self) -> zbus::Result<String>;

    /// The network interface name (e.g., "wlan0").
    #[zbus(property)]
    fn interface(&self) -> zbus::Result<String>;

    /// The IP interface name, which can differ for some devicekinds
    /// (e.g. ADSL devices expose a ppp interface).
    #[zbus(property)]
    fn ip_interface(&self) -> zbus::Result<String>;

    /// The kernel driver in use.
    #[zbus(property)]
    fn driver(&self) -> zbus::Result<String>;

    /// Version of the kernel driver, when known.
    #[zbus(property)]
    fn driver_version(&self) -> zbus::Result<String>;

    /// Version of the device firmware, when known.
    #[zbus(property)]
    fn firmware_version(&self) -> zbus::Result<String>;

    /// Capability bitmask of the device.
    #[zbus(property)]
    fn capabilities(&self) -> zbus::Result<u32>;

    /// Device type as a numeric code (2 = Wi-Fi).
    #[zbus(property)]
    fn device_type(&self) -> zbus::Result<u32>;

    /// Current device state (100 = activated, 120 = failed).
    #[zbus(property)]
    fn state(&self) -> zbus::Result<u32>;

    /// Current state and reason code for the last state change.
    #[zbus(property)]
    fn state_reason(&self) -> zbus::Result<(u32, u32)>;

    /// Whether NetworkManager manages this device.
    #[zbus(property)]
    fn managed(&self) -> zbus::Result<bool>;

    /// Whether the device activates matching profiles on its own.
    #[zbus(property)]
    fn autoconnect(&self) -> zbus::Result<bool>;

    /// Allows or blocks autoconnect for this device.
    #[zbus(property)]
    fn set_autoconnect(&self, value: bool) -> zbus::Result<()>;

    /// Whether device firmware is missing.
    #[zbus(property)]
    fn firmware_missing(&self) -> zbus::Result<bool>;

    /// Path of the active connection on this device ("/" if none).
    #[zbus(property)]
    fn active_connection(&self) -> zbus::Result<OwnedObjectPath>;

    /// Path of the IPv4 configuration ("/" while not activated).
    #[zbus(property)]
    fn ip4_config(&self) -> zbus::Result<OwnedObjectPath>;

    /// Path of the IPv6 configuration ("/" while not activated).
    #[zbus(property)]
    fn ip6_config(&self) -> zbus::Result<OwnedObjectPath>;

    /// Path of the DHCPv4 lease object ("/" when DHCP is not in use).
    #[zbus(property)]
    fn dhcp4_config(&self) -> zbus::Result<OwnedObjectPath>;

    /// Path of the DHCPv6 lease object ("/" when DHCP is not in use).
    #[zbus(property)]
    fn dhcp6_config(&self) -> zbus::Result<OwnedObjectPath>;

    /// Paths of profiles that could activate on this device.
    #[zbus(property)]
    fn available_connections(&self) -> zbus::Result<Vec<OwnedObjectPath>>;

    /// Signal emitted when device state changes.
    ///
    /// The method is named `device_state_changed` to avoid conflicts with the
    /// `state` property's change stream. Use `receive_device_state_changed()`
    /// to subscribe to this signal.
    ///
    /// Arguments:
    /// - `new_state`: The new device state code
    /// - `old_state`: The previous device state code
    /// - `reason`: The reason code for the state change
    #[zbus(signal, name = "StateChanged")]
    fn device_state_changed(&self, new_state: u32, old_state: u32, reason: u32);
}
