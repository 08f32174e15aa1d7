//! VPN connection handling.
//!
//! A VPN active connection carries the `VPN.Connection` interface on top
//! of `Connection.Active`, on the same object path. [`VpnConnection`]
//! wraps both; plain active-connection accessors remain available
//! through [`VpnConnection::active`].

use futures::{Stream, StreamExt};
use log::debug;

use crate::core::active::ActiveConnection;
use crate::core::guard;
use crate::dbus::NMVpnConnectionProxy;
use crate::types::states::{VpnConnectionState, VpnConnectionStateReason};
use crate::Result;

/// An active connection that tunnels through a VPN service.
#[derive(Debug, Clone)]
pub struct VpnConnection {
    active: ActiveConnection,
}

impl VpnConnection {
    pub(crate) fn new(active: ActiveConnection) -> Self {
        Self { active }
    }

    /// The underlying active-connection handle.
    pub fn active(&self) -> &ActiveConnection {
        &self.active
    }

    /// D-Bus object path of this connection.
    pub fn path(&self) -> &str {
        self.active.path()
    }

    async fn proxy(&self) -> Result<NMVpnConnectionProxy<'_>> {
        Ok(NMVpnConnectionProxy::builder(self.active.connection())
            .path(self.active.object_path().clone())?
            .build()
            .await?)
    }

    /// Current state of the VPN tunnel itself.
    ///
    /// Distinct from the active-connection state: the tunnel can still be
    /// authenticating while the activation already reports `Activating`.
    pub async fn vpn_state(&self) -> Result<VpnConnectionState> {
        let proxy = self.proxy().await?;
        let raw = guard(self.path(), proxy.vpn_state().await)?;
        Ok(VpnConnectionState::from(raw))
    }

    /// The login banner supplied by the VPN concentrator, if any.
    pub async fn banner(&self) -> Result<Option<String>> {
        let proxy = self.proxy().await?;
        let banner = guard(self.path(), proxy.banner().await)?;
        Ok(if banner.is_empty() { None } else { Some(banner) })
    }

    /// Subscribes to tunnel state changes, yielding typed
    /// (state, reason) pairs.
    pub async fn state_changes(
        &self,
    ) -> Result<impl Stream<Item = (VpnConnectionState, VpnConnectionStateReason)> + use<>> {
        let proxy = self.proxy().await?;
        let stream = guard(self.path(), proxy.receive_tunnel_state_changed().await)?;
        debug!("Subscribed to VPN state changes on {}", self.path());
        Ok(stream.filter_map(|signal| async move {
            signal.args().ok().map(|args| {
                (
                    VpnConnectionState::from(args.state),
                    VpnConnectionStateReason::from(args.reason),
                )
            })
        }))
    }
}
