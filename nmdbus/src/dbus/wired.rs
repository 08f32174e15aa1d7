//! Proxy for the wired device interface.

use zbus::proxy;

/// Proxy for ethernet device interface.
#[proxy(
    interface = "org.freedesktop.NetworkManager.Device.Wired",
    default_service = "org.freedesktop.NetworkManager"
)]
pub trait NMWired {
    /// Hardware (MAC) address of the device.
    #[zbus(property)]
    fn hw_address(&self) -> zbus::Result<String>;

    /// Permanent hardware (MAC) address of the device.
    #[zbus(property, name = "PermHwAddress")]
    fn perm_hw_address(&self) -> zbus::Result<String>;

    /// Link speed in Mb/s.
    #[zbus(property)]
    fn speed(&self) -> zbus::Result<u32>;

    /// Whether the cable is plugged in.
    #[zbus(property)]
    fn carrier(&self) -> zbus::Result<bool>;
}
