//! Proxy for the IPv6 configuration interface.

use std::collections::HashMap;
use zbus::proxy;
use zvariant::OwnedValue;

/// Proxy for an IP6Config object.
#[proxy(
    interface = "org.freedesktop.NetworkManager.IP6Config",
    default_service = "org.freedesktop.NetworkManager"
)]
pub trait NMIp6Config {
    /// Legacy address list: (address bytes, prefix, gateway bytes) tuples.
    #[zbus(property)]
    fn addresses(&self) -> zbus::Result<Vec<(Vec<u8>, u32, Vec<u8>)>>;

    /// Address dictionaries with string addresses.
    #[zbus(property)]
    fn address_data(&self) -> zbus::Result<Vec<HashMap<String, OwnedValue>>>;

    /// The default gateway, empty when none.
    #[zbus(property)]
    fn gateway(&self) -> zbus::Result<String>;

    /// Route dictionaries with string addresses.
    #[zbus(property)]
    fn route_data(&self) -> zbus::Result<Vec<HashMap<String, OwnedValue>>>;

    /// Nameservers as 16-byte arrays.
    #[zbus(property)]
    fn nameservers(&self) -> zbus::Result<Vec<Vec<u8>>>;

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
}
