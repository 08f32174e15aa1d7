//! Proxy for the IPv4 configuration interface.

use std::collections::HashMap;
use zbus::proxy;
use zvariant::OwnedValue;

/// Proxy for an IP4Config object.
///
/// The legacy `Addresses`/`Routes`/`Nameservers` properties carry
/// addresses as u32 cells; the `*Data` properties are their modern,
/// string-based replacements. Config objects are transient and owned by
/// whatever activation produced them.
#[proxy(
    interface = "org.freedesktop.NetworkManager.IP4Config",
    default_service = "org.freedesktop.NetworkManager"
)]
pub trait NMIp4Config {
    /// Legacy address list: (address, prefix, gateway) u32 triples.
    #[zbus(property)]
    fn addresses(&self) -> zbus::Result<Vec<Vec<u32>>>;

    /// Address dictionaries with string addresses.
    #[zbus(property)]
    fn address_data(&self) -> zbus::Result<Vec<HashMap<String, OwnedValue>>>;

    /// The default gateway, empty when none.
    #[zbus(property)]
    fn gateway(&self) -> zbus::Result<String>;

    /// Legacy route list: (dest, prefix, next-hop, metric) u32 quads.
    #[zbus(property)]
    fn routes(&self) -> zbus::Result<Vec<Vec<u32>>>;

    /// Route dictionaries with string addresses.
    #[zbus(property)]
    fn route_data(&self) -> zbus::Result<Vec<HashMap<String, OwnedValue>>>;

    /// Nameservers as legacy u32 cells.
    #[zbus(property)]
    fn nameservers(&self) -> zbus::Result<Vec<u32>>;

    /// Search domains.
    #[zbus(property)]
    fn domains(&self) -> zbus::Result<Vec<String>>;

    /// Additional DNS search entries.
    #[zbus(property)]
    fn searches(&self) -> zbus::Result<Vec<String>>;

    /// resolv.conf options.
    #[zbus(property)]
    fn dns_options(&self) -> zbus::Result<Vec<String>>;

    /// Relative priority of this configuration's DNS servers.
    #[zbus(property)]
    fn dns_priority(&self) -> zbus::Result<i32>;

    /// WINS servers as legacy u32 cells.
    #[zbus(property)]
    fn wins_servers(&self) -> zbus::Result<Vec<u32>>;
}
