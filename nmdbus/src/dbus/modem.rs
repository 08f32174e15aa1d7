//! Proxy for the modem device interface.

use zbus::proxy;

/// Proxy for mobile broadband device interface.
#[proxy(
    interface = "org.freedesktop.NetworkManager.Device.Modem",
    default_service = "org.freedesktop.NetworkManager"
)]
pub trait NMModem {
    /// Generic access technologies the modem supports (bitmask).
    #[zbus(property)]
    fn modem_capabilities(&self) -> zbus::Result<u32>;

    /// Access technologies available without a firmware reload (bitmask).
    #[zbus(property)]
    fn current_capabilities(&self) -> zbus::Result<u32>;
}
