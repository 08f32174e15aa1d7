//! Secret agent serving and registration.
//!
//! A secret agent is a service the *client* exports: NetworkManager
//! calls back into it whenever an activation needs credentials. The
//! caller implements [`SecretAgent`]; [`register_agent`] exports it at
//! the well-known agent path and registers it with the agent manager.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use zbus::Connection;
use zvariant::OwnedObjectPath;

use crate::api::models::SettingsMap;
use crate::dbus::NMAgentManagerProxy;
use crate::types::constants::bus;
use crate::types::flags::AgentCapabilities;
use crate::Result;

/// User-implemented credential provider.
///
/// NetworkManager invokes these callbacks on the bus connection the
/// agent was registered on. Implementations should be quick; a stalled
/// `get_secrets` stalls the activation that requested it.
#[async_trait]
pub trait SecretAgent: Send + Sync + 'static {
    /// Supplies secrets for one settings section of a profile.
    ///
    /// `hints` names the specific keys the daemon is after (e.g. "psk");
    /// `flags` carries the request context, see
    /// [`secret_flags`](crate::types::constants::secret_flags).
    async fn get_secrets(
        &self,
        connection: SettingsMap,
        connection_path: String,
        setting_name: String,
        hints: Vec<String>,
        flags: u32,
    ) -> Result<SettingsMap>;

    /// Asks the agent to persist the secrets embedded in `connection`.
    async fn save_secrets(&self, connection: SettingsMap, connection_path: String) -> Result<()>;

    /// Asks the agent to forget any secrets it stored for the profile.
    async fn delete_secrets(&self, connection: SettingsMap, connection_path: String)
        -> Result<()>;

    /// Cancels an outstanding `get_secrets` request.
    async fn cancel_get_secrets(
        &self,
        connection_path: String,
        setting_name: String,
    ) -> Result<()>;
}

/// The served D-Bus object delegating to the user's agent.
struct AgentService {
    agent: Arc<dyn SecretAgent>,
}

#[zbus::interface(name = "org.freedesktop.NetworkManager.SecretAgent")]
impl AgentService {
    async fn get_secrets(
        &self,
        connection: SettingsMap,
        connection_path: OwnedObjectPath,
        setting_name: String,
        hints: Vec<String>,
        flags: u32,
    ) -> zbus::fdo::Result<SettingsMap> {
        debug!("GetSecrets for {connection_path} section {setting_name} (flags {flags:#x})");
        self.agent
            .get_secrets(
                connection,
                connection_path.to_string(),
                setting_name,
                hints,
                flags,
            )
            .await
            .map_err(|e| zbus::fdo::Error::Failed(e.to_string()))
    }

    async fn cancel_get_secrets(
        &self,
        connection_path: OwnedObjectPath,
        setting_name: String,
    ) -> zbus::fdo::Result<()> {
        debug!("CancelGetSecrets for {connection_path} section {setting_name}");
        self.agent
            .cancel_get_secrets(connection_path.to_string(), setting_name)
            .await
            .map_err(|e| zbus::fdo::Error::Failed(e.to_string()))
    }

    async fn save_secrets(
        &self,
        connection: SettingsMap,
        connection_path: OwnedObjectPath,
    ) -> zbus::fdo::Result<()> {
        debug!("SaveSecrets for {connection_path}");
        self.agent
            .save_secrets(connection, connection_path.to_string())
            .await
            .map_err(|e| zbus::fdo::Error::Failed(e.to_string()))
    }

    async fn delete_secrets(
        &self,
        connection: SettingsMap,
        connection_path: OwnedObjectPath,
    ) -> zbus::fdo::Result<()> {
        debug!("DeleteSecrets for {connection_path}");
        self.agent
            .delete_secrets(connection, connection_path.to_string())
            .await
            .map_err(|e| zbus::fdo::Error::Failed(e.to_string()))
    }
}

/// A live agent registration; dropping it leaves the agent registered,
/// call [`AgentHandle::unregister`] for an orderly teardown.
pub struct AgentHandle {
    conn: Connection,
}

impl AgentHandle {
    /// Withdraws the registration and stops serving the agent object.
    pub async fn unregister(self) -> Result<()> {
        let manager = NMAgentManagerProxy::new(&self.conn).await?;
        manager.unregister().await?;
        let removed = self
            .conn
            .object_server()
            .remove::<AgentService, _>(bus::SECRET_AGENT_PATH)
            .await?;
        if !removed {
            warn!("Agent object was not being served at unregister time");
        }
        debug!("Secret agent unregistered");
        Ok(())
    }
}

/// Exports `agent` at the well-known agent path and registers it with
/// the daemon under `identifier`.
///
/// `identifier` follows D-Bus bus-name rules, minus the ':' character;
/// one agent per identifier per session.
pub(crate) async fn register_agent(
    conn: &Connection,
    identifier: &str,
    capabilities: AgentCapabilities,
    agent: Arc<dyn SecretAgent>,
) -> Result<AgentHandle> {
    conn.object_server()
        .at(bus::SECRET_AGENT_PATH, AgentService { agent })
        .await?;

    let manager = NMAgentManagerProxy::new(conn).await?;
    let result = if capabilities.is_empty() {
        manager.register(identifier).await
    } else {
        manager
            .register_with_capabilities(identifier, capabilities.bits())
            .await
    };

    if let Err(e) = result {
        // Roll the export back so a retry starts clean.
        let _ = conn
            .object_server()
            .remove::<AgentService, _>(bus::SECRET_AGENT_PATH)
            .await;
        return Err(e.into());
    }

    debug!("Secret agent registered as {identifier}");
    Ok(AgentHandle { conn: conn.clone() })
}
