//! Proxy for the bluetooth device interface.

use zbus::proxy;

/// Proxy for bluetooth (DUN/PAN) device interface.
#[proxy(
    interface = "org.freedesktop.NetworkManager.Device.Bluetooth",
    default_service = "org.freedesktop.NetworkManager"
)]
pub trait NMBluetooth {
    /// Hardware (MAC) address of the device.
    #[zbus(property)]
    fn hw_address(&self) -> zbus::Result<String>;

    /// Name of the paired bluetooth device.
    #[zbus(property)]
    fn name(&self) -> zbus::Result<String>;

    /// Supported bluetooth networking capabilities (bitmask).
    #[zbus(property)]
    fn bt_capabilities(&self) -> zbus::Result<u32>;
}
