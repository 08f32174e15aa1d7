//! Proxy for the WiMAX device interface.

use zbus::proxy;
use zvariant::OwnedObjectPath;

/// Proxy for WiMAX device interface.
#[proxy(
    interface = "org.freedesktop.NetworkManager.Device.WiMax",
    default_service = "org.freedesktop.NetworkManager"
)]
pub trait NMWimax {
    /// Returns paths of all visible network service providers.
    fn get_nsp_list(&self) -> zbus::Result<Vec<OwnedObjectPath>>;

    /// Signal emitted when a new provider becomes visible.
    #[zbus(signal)]
    fn nsp_added(&self, path: OwnedObjectPath);

    /// Signal emitted when a provider is no longer visible.
    #[zbus(signal)]
    fn nsp_removed(&self, path: OwnedObjectPath);

    /// Hardware (MAC) address of the device.
    #[zbus(property)]
    fn hw_address(&self) -> zbus::Result<String>;

    /// Paths of visible network service providers.
    #[zbus(property)]
    fn nsps(&self) -> zbus::Result<Vec<OwnedObjectPath>>;

    /// Path of the provider currently in use ("/" if none).
    #[zbus(property)]
    fn active_nsp(&self) -> zbus::Result<OwnedObjectPath>;

    /// Center frequency in kHz of the radio channel in use.
    #[zbus(property)]
    fn center_frequency(&self) -> zbus::Result<u32>;

    /// Received signal strength in dBm.
    #[zbus(property)]
    fn rssi(&self) -> zbus::Result<i32>;

    /// Carrier-to-interference-and-noise ratio in dB.
    #[zbus(property)]
    fn cinr(&self) -> zbus::Result<i32>;

    /// Average transmit power in dBm.
    #[zbus(property)]
    fn tx_power(&self) -> zbus::Result<i32>;

    /// Base station identifier of the cell in use.
    #[zbus(property)]
    fn bsid(&self) -> zbus::Result<String>;
}
