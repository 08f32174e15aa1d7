//! Proxy for the VPN connection interface.

use zbus::proxy;

/// Proxy for a VPN active connection.
///
/// VPN connections carry this interface in addition to
/// `Connection.Active`, on the same object path.
#[proxy(
    interface = "org.freedesktop.NetworkManager.VPN.Connection",
    default_service = "org.freedesktop.NetworkManager"
)]
pub trait NMVpnConnection {
    /// Current VPN tunnel state.
    #[zbus(property)]
    fn vpn_state(&self) -> zbus::Result<u32>;

    /// Login banner supplied by the VPN concentrator, if any.
    #[zbus(property)]
    fn banner(&self) -> zbus::Result<String>;

    /// Signal emitted when the VPN tunnel state changes.
    ///
    /// The method is named `tunnel_state_changed` to avoid conflicts with
    /// the `vpn_state` property's change stream.
    ///
    /// Arguments:
    /// - `state`: The new VPN state (see `VpnConnectionState`)
    /// - `reason`: The reason for the change (see `VpnConnectionStateReason`)
    #[zbus(signal, name = "VpnStateChanged")]
    fn tunnel_state_changed(&self, state: u32, reason: u32);
}
