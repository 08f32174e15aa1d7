//! Proxy for the agent manager singleton.

use zbus::proxy;

/// Proxy for registering secret agents with the daemon.
///
/// An agent must export the SecretAgent interface at the well-known
/// agent path on its own connection before registering.
#[proxy(
    interface = "org.freedesktop.NetworkManager.AgentManager",
    default_service = "org.freedesktop.NetworkManager",
    default_path = "/org/freedesktop/NetworkManager/AgentManager"
)]
pub trait NMAgentManager {
    /// Registers the caller as a secret agent under `identifier`.
    fn register(&self, identifier: &str) -> zbus::Result<()>;

    /// Registers the caller with extra capability flags.
    fn register_with_capabilities(&self, identifier: &str, capabilities: u32) -> zbus::Result<()>;

    /// Withdraws the caller's agent registration.
    fn unregister(&self) -> zbus::Result<()>;
}
