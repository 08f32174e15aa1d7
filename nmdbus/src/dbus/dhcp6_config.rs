//! Proxy for the DHCPv6 lease interface.

use std::collections::HashMap;
use zbus::proxy;
use zvariant::OwnedValue;

/// Proxy for a DHCP6Config object, holding the options of the current lease.
#[proxy(
    interface = "org.freedesktop.NetworkManager.DHCP6Config",
    default_service = "org.freedesktop.NetworkManager"
)]
pub trait NMDhcp6Config {
    /// Option name to value, as sent by the DHCP server.
    #[zbus(property)]
    fn options(&self) -> zbus::Result<HashMap<String, OwnedValue>>;
}
