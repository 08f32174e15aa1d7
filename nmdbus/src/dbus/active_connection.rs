//! Proxy for the active connection interface.

use zbus::proxy;
use zvariant::OwnedObjectPath;

/// Proxy for active connection interface.
///
/// An active connection ties a profile to the device(s) it is running
/// on. The object exists only while the connection is activating,
/// active, or deactivating.
///
/// # Signals
///
/// The `StateChanged` signal is emitted when the activation state
/// changes. Use `receive_activation_state_changed()` to get a stream of
/// state changes.
#[proxy(
    interface = "org.freedesktop.NetworkManager.Connection.Active",
    default_service = "org.freedesktop.NetworkManager"
)]
pub trait NMActiveConnection {
    /// Path to the connection profile in use.
    #[zbus(property)]
    fn connection(&self) -> zbus::Result<OwnedObjectPath>;

    /// Path to the specific object (e.g., access point) used for this connection.
    #[zbus(property)]
    fn specific_object(&self) -> zbus::Result<OwnedObjectPath>;

    /// Profile identifier (usually the SSID for Wi-Fi).
    #[zbus(property)]
    fn id(&self) -> zbus::Result<String>;

    /// Profile UUID.
    #[zbus(property)]
    fn uuid(&self) -> zbus::Result<String>;

    /// The `connection.type` setting of the profile in use.
    #[zbus(property, name = "Type")]
    fn connection_type(&self) -> zbus::Result<String>;

    /// Paths to devices using this connection.
    #[zbus(property)]
    fn devices(&self) -> zbus::Result<Vec<OwnedObjectPath>>;

    /// Current state of the active connection.
    #[zbus(property)]
    fn state(&self) -> zbus::Result<u32>;

    /// Whether this connection owns the default IPv4 route.
    #[zbus(property)]
    fn default(&self) -> zbus::Result<bool>;

    /// Whether this connection owns the default IPv6 route.
    #[zbus(property)]
    fn default6(&self) -> zbus::Result<bool>;

    /// Whether this is a VPN connection.
    #[zbus(property)]
    fn vpn(&self) -> zbus::Result<bool>;

    /// Path of the IPv4 configuration ("/" until activated).
    #[zbus(property)]
    fn ip4_config(&self) -> zbus::Result<OwnedObjectPath>;

    /// Path of the DHCPv4 lease object ("/" when DHCP is not in use).
    #[zbus(property)]
    fn dhcp4_config(&self) -> zbus::Result<OwnedObjectPath>;

    /// Path of the IPv6 configuration ("/" until activated).
    #[zbus(property)]
    fn ip6_config(&self) -> zbus::Result<OwnedObjectPath>;

    /// Path of the DHCPv6 lease object ("/" when DHCP is not in use).
    #[zbus(property)]
    fn dhcp6_config(&self) -> zbus::Result<OwnedObjectPath>;

    /// Path of the master device when this connection is enslaved.
    #[zbus(property)]
    fn master(&self) -> zbus::Result<OwnedObjectPath>;

    /// Signal emitted when the connection activation state changes.
    ///
    /// The method is named `activation_state_changed` to avoid conflicts with
    /// the `state` property's change stream. Use
    /// `receive_activation_state_changed()` to subscribe to this signal.
    ///
    /// Arguments:
    /// - `state`: The new connection state (see `ActiveConnectionState`)
    /// - `reason`: The reason for the state change (see `ActiveConnectionStateReason`)
    #[zbus(signal, name = "StateChanged")]
    fn activation_state_changed(&self, state: u32, reason: u32);
}
