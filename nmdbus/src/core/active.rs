//! Active connection wrappers.
//!
//! An active connection ties a stored profile to the device(s) it runs
//! on. The remote object is transient: it appears when activation starts
//! and vanishes once the connection is fully torn down.

use zbus::Connection;
use zvariant::OwnedObjectPath;

use crate::api::models::ActiveConnectionInfo;
use crate::core::device::Device;
use crate::core::ip_config::{Dhcp4Config, Dhcp6Config, Ipv4Config, Ipv6Config};
use crate::core::settings::ConnectionProfile;
use crate::core::vpn::VpnConnection;
use crate::core::{guard, opt_path};
use crate::dbus::NMActiveConnectionProxy;
use crate::types::states::ActiveConnectionState;
use crate::Result;

/// A live instantiation of a connection profile.
#[derive(Debug, Clone)]
pub struct ActiveConnection {
    conn: Connection,
    path: OwnedObjectPath,
}

impl ActiveConnection {
    pub(crate) fn new(conn: Connection, path: OwnedObjectPath) -> Self {
        Self { conn, path }
    }

    /// D-Bus object path of this active connection.
    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }

    pub(crate) fn object_path(&self) -> &OwnedObjectPath {
        &self.path
    }

    pub(crate) async fn proxy(&self) -> Result<NMActiveConnectionProxy<'_>> {
        Ok(NMActiveConnectionProxy::builder(&self.conn)
            .path(self.path.clone())?
            .build()
            .await?)
    }

    /// The profile id (human-readable name).
    pub async fn id(&self) -> Result<String> {
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.id().await)
    }

    /// The profile uuid.
    pub async fn uuid(&self) -> Result<String> {
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.uuid().await)
    }

    /// The `connection.type` setting of the profile in use.
    pub async fn connection_type(&self) -> Result<String> {
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.connection_type().await)
    }

    /// Current activation state.
    pub async fn state(&self) -> Result<ActiveConnectionState> {
        let proxy = self.proxy().await?;
        let raw = guard(self.path(), proxy.state().await)?;
        Ok(ActiveConnectionState::from(raw))
    }

    /// The stored profile this activation was created from.
    pub async fn profile(&self) -> Result<ConnectionProfile> {
        let proxy = self.proxy().await?;
        let path = guard(self.path(), proxy.connection().await)?;
        Ok(ConnectionProfile::new(self.conn.clone(), path))
    }

    /// The specific object (access point, NSP) used for the activation.
    pub async fn specific_object(&self) -> Result<Option<String>> {
        let proxy = self.proxy().await?;
        let path = guard(self.path(), proxy.specific_object().await)?;
        Ok(opt_path(path).map(|p| p.to_string()))
    }

    /// The devices carrying this connection.
    pub async fn devices(&self) -> Result<Vec<Device>> {
        let proxy = self.proxy().await?;
        let paths = guard(self.path(), proxy.devices().await)?;
        Ok(paths
            .into_iter()
            .map(|p| Device::new(self.conn.clone(), p))
            .collect())
    }

    /// Whether this connection owns the default IPv4 route.
    pub async fn default4(&self) -> Result<bool> {
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.default().await)
    }

    /// Whether this connection owns the default IPv6 route.
    pub async fn default6(&self) -> Result<bool> {
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.default6().await)
    }

    /// The master device path when this connection is enslaved to a
    /// bond, bridge, or team.
    pub async fn master(&self) -> Result<Option<String>> {
        let proxy = self.proxy().await?;
        let path = guard(self.path(), proxy.master().await)?;
        Ok(opt_path(path).map(|p| p.to_string()))
    }

    /// The IPv4 configuration, once the connection has one.
    pub async fn ip4_config(&self) -> Result<Option<Ipv4Config>> {
        let proxy = self.proxy().await?;
        let path = guard(self.path(), proxy.ip4_config().await)?;
        Ok(opt_path(path).map(|p| Ipv4Config::new(self.conn.clone(), p)))
    }

    /// The IPv6 configuration, once the connection has one.
    pub async fn ip6_config(&self) -> Result<Option<Ipv6Config>> {
        let proxy = self.proxy().await?;
        let path = guard(self.path(), proxy.ip6_config().await)?;
        Ok(opt_path(path).map(|p| Ipv6Config::new(self.conn.clone(), p)))
    }

    /// The DHCPv4 lease, when DHCP is in use.
    pub async fn dhcp4_config(&self) -> Result<Option<Dhcp4Config>> {
        let proxy = self.proxy().await?;
        let path = guard(self.path(), proxy.dhcp4_config().await)?;
        Ok(opt_path(path).map(|p| Dhcp4Config::new(self.conn.clone(), p)))
    }

    /// The DHCPv6 lease, when DHCP is in use.
    pub async fn dhcp6_config(&self) -> Result<Option<Dhcp6Config>> {
        let proxy = self.proxy().await?;
        let path = guard(self.path(), proxy.dhcp6_config().await)?;
        Ok(opt_path(path).map(|p| Dhcp6Config::new(self.conn.clone(), p)))
    }

    /// Whether the underlying profile is a VPN.
    pub async fn is_vpn(&self) -> Result<bool> {
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.vpn().await)
    }

    /// Promotes this handle to a [`VpnConnection`] when the daemon marks
    /// it as a VPN; returns the plain handle back otherwise.
    pub async fn into_vpn(self) -> Result<std::result::Result<VpnConnection, ActiveConnection>> {
        if self.is_vpn().await? {
            Ok(Ok(VpnConnection::new(self)))
        } else {
            Ok(Err(self))
        }
    }

    /// Reads identity and state in one snapshot.
    pub async fn info(&self) -> Result<ActiveConnectionInfo> {
        let proxy = self.proxy().await?;
        let path = self.path();

        let id = guard(path, proxy.id().await)?;
        let uuid = guard(path, proxy.uuid().await)?;
        let connection_type = guard(path, proxy.connection_type().await)?;
        let state = ActiveConnectionState::from(guard(path, proxy.state().await)?);
        let devices = guard(path, proxy.devices().await)?
            .into_iter()
            .map(|p| p.to_string())
            .collect();
        let vpn = guard(path, proxy.vpn().await)?;
        let default4 = guard(path, proxy.default().await)?;
        let default6 = guard(path, proxy.default6().await)?;

        Ok(ActiveConnectionInfo {
            path: path.to_owned(),
            id,
            uuid,
            connection_type,
            state,
            devices,
            vpn,
            default4,
            default6,
        })
    }
}
