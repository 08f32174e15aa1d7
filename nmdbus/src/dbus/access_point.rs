//! Proxy for the access point interface.

use zbus::proxy;

/// Proxy for access point interface.
///
/// Provides information about a visible Wi-Fi network including
/// SSID, signal strength, security capabilities, and frequency.
/// Access point objects are transient: NetworkManager removes them as
/// networks go out of sight, after which every call here fails.
#[proxy(
    interface = "org.freedesktop.NetworkManager.AccessPoint",
    default_service = "org.freedesktop.NetworkManager"
)]
pub trait NMAccessPoint {
    /// SSID as raw bytes (may not be valid UTF-8).
    #[zbus(property)]
    fn ssid(&self) -> zbus::Result<Vec<u8>>;

    /// Signal strength as percentage (0-100).
    #[zbus(property)]
    fn strength(&self) -> zbus::Result<u8>;

    /// BSSID (MAC address) of the access point.
    #[zbus(property)]
    fn hw_address(&self) -> zbus::Result<String>;

    /// General capability flags (bit 0 = privacy).
    #[zbus(property)]
    fn flags(&self) -> zbus::Result<u32>;

    /// WPA security flags (PSK, EAP, etc.).
    #[zbus(property)]
    fn wpa_flags(&self) -> zbus::Result<u32>;

    /// RSN/WPA2 security flags.
    #[zbus(property)]
    fn rsn_flags(&self) -> zbus::Result<u32>;

    /// Operating frequency in MHz.
    #[zbus(property)]
    fn frequency(&self) -> zbus::Result<u32>;

    /// Maximum supported bitrate in Kbit/s.
    #[zbus(property)]
    fn max_bitrate(&self) -> zbus::Result<u32>;

    /// Wi-Fi mode (1 = adhoc, 2 = infrastructure, 3 = AP).
    #[zbus(property)]
    fn mode(&self) -> zbus::Result<u32>;

    /// CLOCK_BOOTTIME seconds when the access point was last seen in a
    /// scan; -1 if never.
    #[zbus(property)]
    fn last_seen(&self) -> zbus::Result<i32>;
}
