//! Read-only IP and DHCP configuration snapshots.
//!
//! Config objects belong to whatever activation produced them and vanish
//! with it; every accessor can therefore fail with
//! [`NmError::ObjectVanished`](crate::NmError::ObjectVanished).

use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use log::debug;
use zbus::Connection;
use zvariant::{OwnedObjectPath, OwnedValue, Value};

use crate::api::models::{
    AddressData, DhcpConfigInfo, Ipv4Address, Ipv4ConfigInfo, Ipv4Route, Ipv6Address,
    Ipv6ConfigInfo, RouteData,
};
use crate::core::guard;
use crate::dbus::{NMDhcp4ConfigProxy, NMDhcp6ConfigProxy, NMIp4ConfigProxy, NMIp6ConfigProxy};
use crate::util::convert::{
    decode_legacy_ipv4_addresses, decode_legacy_ipv4_routes, ipv4_from_cell, ipv6_from_bytes,
};
use crate::Result;

/// An `IP4Config` object: the IPv4 address, route, and DNS state of an
/// active connection.
#[derive(Debug, Clone)]
pub struct Ipv4Config {
    conn: Connection,
    path: OwnedObjectPath,
}

impl Ipv4Config {
    pub(crate) fn new(conn: Connection, path: OwnedObjectPath) -> Self {
        Self { conn, path }
    }

    /// D-Bus object path of this configuration.
    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    async fn proxy(&self) -> Result<NMIp4ConfigProxy<'_>> {
        Ok(NMIp4ConfigProxy::builder(&self.conn)
            .path(self.path.clone())?
            .build()
            .await?)
    }

    /// Reads the full configuration in one snapshot.
    ///
    /// Both the legacy u32-cell properties and the modern `*Data`
    /// dictionaries are decoded; older daemons populate only the former.
    pub async fn info(&self) -> Result<Ipv4ConfigInfo> {
        let proxy = self.proxy().await?;
        let path = self.path.as_str();

        let addresses = guard(path, proxy.addresses().await)?;
        let address_data = guard(path, proxy.address_data().await)?;
        let gateway = guard(path, proxy.gateway().await)?;
        let routes = guard(path, proxy.routes().await)?;
        let route_data = guard(path, proxy.route_data().await)?;
        let nameservers = guard(path, proxy.nameservers().await)?;
        let domains = guard(path, proxy.domains().await)?;
        let searches = guard(path, proxy.searches().await)?;
        let dns_options = guard(path, proxy.dns_options().await)?;
        let dns_priority = guard(path, proxy.dns_priority().await)?;
        let wins_servers = guard(path, proxy.wins_servers().await)?;

        Ok(Ipv4ConfigInfo {
            addresses: decode_legacy_ipv4_addresses(&addresses)
                .into_iter()
                .map(|(address, prefix, gateway)| Ipv4Address {
                    address,
                    prefix,
                    gateway,
                })
                .collect(),
            address_data: decode_address_data(&address_data),
            gateway: parse_addr::<Ipv4Addr>(&gateway),
            routes: decode_legacy_ipv4_routes(&routes)
                .into_iter()
                .map(|(dest, prefix, next_hop, metric)| Ipv4Route {
                    dest,
                    prefix,
                    next_hop,
                    metric,
                })
                .collect(),
            route_data: decode_route_data(&route_data),
            nameservers: nameservers.into_iter().map(ipv4_from_cell).collect(),
            domains,
            searches,
            dns_options,
            dns_priority,
            wins_servers: wins_servers.into_iter().map(ipv4_from_cell).collect(),
        })
    }
}

/// An `IP6Config` object.
#[derive(Debug, Clone)]
pub struct Ipv6Config {
    conn: Connection,
    path: OwnedObjectPath,
}

impl Ipv6Config {
    pub(crate) fn new(conn: Connection, path: OwnedObjectPath) -> Self {
        Self { conn, path }
    }

    /// D-Bus object path of this configuration.
    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    async fn proxy(&self) -> Result<NMIp6ConfigProxy<'_>> {
        Ok(NMIp6ConfigProxy::builder(&self.conn)
            .path(self.path.clone())?
            .build()
            .await?)
    }

    /// Reads the full configuration in one snapshot.
    pub async fn info(&self) -> Result<Ipv6ConfigInfo> {
        let proxy = self.proxy().await?;
        let path = self.path.as_str();

        let addresses = guard(path, proxy.addresses().await)?;
        let address_data = guard(path, proxy.address_data().await)?;
        let gateway = guard(path, proxy.gateway().await)?;
        let route_data = guard(path, proxy.route_data().await)?;
        let nameservers = guard(path, proxy.nameservers().await)?;
        let domains = guard(path, proxy.domains().await)?;
        let searches = guard(path, proxy.searches().await)?;
        let dns_options = guard(path, proxy.dns_options().await)?;
        let dns_priority = guard(path, proxy.dns_priority().await)?;

        Ok(Ipv6ConfigInfo {
            addresses: addresses
                .iter()
                .filter_map(|(addr, prefix, gw)| {
                    let address = ipv6_from_bytes(addr)?;
                    // The per-address gateway may be all zeroes or absent.
                    let gateway = ipv6_from_bytes(gw).unwrap_or(Ipv6Addr::UNSPECIFIED);
                    Some(Ipv6Address {
                        address,
                        prefix: *prefix,
                        gateway,
                    })
                })
                .collect(),
            address_data: decode_address_data(&address_data),
            gateway: parse_addr::<Ipv6Addr>(&gateway),
            route_data: decode_route_data(&route_data),
            nameservers: nameservers
                .iter()
                .filter_map(|bytes| ipv6_from_bytes(bytes))
                .collect(),
            domains,
            searches,
            dns_options,
            dns_priority,
        })
    }
}

/// A `DHCP4Config` object holding the current lease's options.
#[derive(Debug, Clone)]
pub struct Dhcp4Config {
    conn: Connection,
    path: OwnedObjectPath,
}

impl Dhcp4Config {
    pub(crate) fn new(conn: Connection, path: OwnedObjectPath) -> Self {
        Self { conn, path }
    }

    /// D-Bus object path of this lease.
    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    /// Reads the lease options, rendered as strings.
    pub async fn info(&self) -> Result<DhcpConfigInfo> {
        let proxy = NMDhcp4ConfigProxy::builder(&self.conn)
            .path(self.path.clone())?
            .build()
            .await?;
        let options = guard(self.path.as_str(), proxy.options().await)?;
        Ok(DhcpConfigInfo {
            options: render_options(options),
        })
    }
}

/// A `DHCP6Config` object holding the current lease's options.
#[derive(Debug, Clone)]
pub struct Dhcp6Config {
    conn: Connection,
    path: OwnedObjectPath,
}

impl Dhcp6Config {
    pub(crate) fn new(conn: Connection, path: OwnedObjectPath) -> Self {
        Self { conn, path }
    }

    /// D-Bus object path of this lease.
    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    /// Reads the lease options, rendered as strings.
    pub async fn info(&self) -> Result<DhcpConfigInfo> {
        let proxy = NMDhcp6ConfigProxy::builder(&self.conn)
            .path(self.path.clone())?
            .build()
            .await?;
        let options = guard(self.path.as_str(), proxy.options().await)?;
        Ok(DhcpConfigInfo {
            options: render_options(options),
        })
    }
}

fn parse_addr<T: FromStr>(text: &str) -> Option<T> {
    if text.is_empty() {
        return None;
    }
    text.parse().ok()
}

fn str_entry(dict: &HashMap<String, OwnedValue>, key: &str) -> Option<String> {
    match &**dict.get(key)? {
        Value::Str(s) => Some(s.as_str().to_owned()),
        _ => None,
    }
}

fn u32_entry(dict: &HashMap<String, OwnedValue>, key: &str) -> Option<u32> {
    match &**dict.get(key)? {
        Value::U32(n) => Some(*n),
        _ => None,
    }
}

/// Decodes the modern `AddressData` dictionaries, skipping malformed rows.
pub(crate) fn decode_address_data(raw: &[HashMap<String, OwnedValue>]) -> Vec<AddressData> {
    raw.iter()
        .filter_map(|dict| {
            let address = str_entry(dict, "address")?;
            let prefix = u32_entry(dict, "prefix")?;
            Some(AddressData { address, prefix })
        })
        .collect()
}

/// Decodes the modern `RouteData` dictionaries, skipping malformed rows.
pub(crate) fn decode_route_data(raw: &[HashMap<String, OwnedValue>]) -> Vec<RouteData> {
    raw.iter()
        .filter_map(|dict| {
            let dest = str_entry(dict, "dest")?;
            let prefix = u32_entry(dict, "prefix")?;
            Some(RouteData {
                dest,
                prefix,
                next_hop: str_entry(dict, "next-hop"),
                metric: u32_entry(dict, "metric"),
            })
        })
        .collect()
}

/// Renders DHCP option values as display strings.
///
/// Servers send nearly everything as strings already; anything else is
/// rendered through its variant representation.
pub(crate) fn render_options(options: HashMap<String, OwnedValue>) -> HashMap<String, String> {
    options
        .into_iter()
        .map(|(name, value)| {
            let text = match &*value {
                Value::Str(s) => s.as_str().to_owned(),
                Value::U32(n) => n.to_string(),
                Value::I32(n) => n.to_string(),
                Value::U64(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                other => {
                    debug!("DHCP option {name} has non-string type {}", other.value_signature());
                    format!("{other:?}")
                }
            };
            (name, text)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(value: Value<'_>) -> OwnedValue {
        value.try_to_owned().expect("value owns no fds")
    }

    #[test]
    fn test_decode_address_data() {
        let mut dict = HashMap::new();
        dict.insert("address".to_owned(), owned(Value::from("192.168.1.5")));
        dict.insert("prefix".to_owned(), owned(Value::from(24u32)));

        let decoded = decode_address_data(&[dict]);
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].address, "192.168.1.5");
        assert_eq!(decoded[0].prefix, 24);
    }

    #[test]
    fn test_decode_address_data_skips_malformed() {
        let mut dict = HashMap::new();
        dict.insert("address".to_owned(), owned(Value::from("10.0.0.1")));
        // prefix missing
        assert!(decode_address_data(&[dict]).is_empty());
    }

    #[test]
    fn test_decode_route_data_optional_fields() {
        let mut full = HashMap::new();
        full.insert("dest".to_owned(), owned(Value::from("10.0.0.0")));
        full.insert("prefix".to_owned(), owned(Value::from(8u32)));
        full.insert("next-hop".to_owned(), owned(Value::from("192.168.1.1")));
        full.insert("metric".to_owned(), owned(Value::from(100u32)));

        let mut bare = HashMap::new();
        bare.insert("dest".to_owned(), owned(Value::from("0.0.0.0")));
        bare.insert("prefix".to_owned(), owned(Value::from(0u32)));

        let decoded = decode_route_data(&[full, bare]);
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].next_hop.as_deref(), Some("192.168.1.1"));
        assert_eq!(decoded[0].metric, Some(100));
        assert_eq!(decoded[1].next_hop, None);
        assert_eq!(decoded[1].metric, None);
    }

    #[test]
    fn test_render_options() {
        let mut options = HashMap::new();
        options.insert("domain_name".to_owned(), owned(Value::from("lan")));
        options.insert("dhcp_lease_time".to_owned(), owned(Value::from(86400u32)));

        let rendered = render_options(options);
        assert_eq!(rendered.get("domain_name").map(String::as_str), Some("lan"));
        assert_eq!(
            rendered.get("dhcp_lease_time").map(String::as_str),
            Some("86400")
        );
    }

    #[test]
    fn test_parse_addr_empty_is_none() {
        assert_eq!(parse_addr::<Ipv4Addr>(""), None);
        assert_eq!(
            parse_addr::<Ipv4Addr>("192.168.1.1"),
            Some("192.168.1.1".parse().unwrap())
        );
    }
}
