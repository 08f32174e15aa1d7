//! Proxy for the WiMAX network service provider interface.

use zbus::proxy;

/// Proxy for a WiMAX network service provider.
#[proxy(
    interface = "org.freedesktop.NetworkManager.WiMax.Nsp",
    default_service = "org.freedesktop.NetworkManager"
)]
pub trait NMNsp {
    /// Provider name.
    #[zbus(property)]
    fn name(&self) -> zbus::Result<String>;

    /// Signal quality as a percentage (0-100).
    #[zbus(property)]
    fn signal_quality(&self) -> zbus::Result<u32>;

    /// Network type code (home/partner/roaming).
    #[zbus(property)]
    fn network_type(&self) -> zbus::Result<u32>;
}
