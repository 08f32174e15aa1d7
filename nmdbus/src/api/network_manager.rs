use std::sync::Arc;
use std::time::Duration;

use log::debug;
use tokio::sync::watch;
use zbus::Connection;
use zvariant::OwnedObjectPath;

use crate::api::models::{Permission, PermissionResult, SettingsMap};
use crate::core::active::ActiveConnection;
use crate::core::agent::{register_agent, AgentHandle, SecretAgent};
use crate::core::device::{self, Device};
use crate::core::guard;
use crate::core::opt_path;
use crate::core::settings::{ConnectionProfile, Settings};
use crate::core::state_wait;
use crate::core::wifi::{AccessPoint, WirelessDevice};
use crate::dbus::NMProxy;
use crate::monitoring::device as device_monitor;
use crate::monitoring::manager as manager_monitor;
use crate::monitoring::network as network_monitor;
use crate::monitoring::{ManagerEvent, NetworkEvent};
use crate::types::constants::{bus, timeouts};
use crate::types::flags::AgentCapabilities;
use crate::types::states::{ConnectivityState, DeviceState, NmState};
use crate::Result;

/// Per-client timeouts for the blocking-style operations.
///
/// ```no_run
/// use std::time::Duration;
/// use nmdbus::{NetworkManager, TimeoutConfig};
///
/// # async fn example() -> nmdbus::Result<()> {
/// let config = TimeoutConfig::new().with_activation_timeout(Duration::from_secs(90));
/// let nm = NetworkManager::with_config(config).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutConfig {
    activation: Duration,
    deactivation: Duration,
    scan_settle: Duration,
}

impl TimeoutConfig {
    /// The default timeouts.
    pub fn new() -> Self {
        Self {
            activation: timeouts::activation_timeout(),
            deactivation: timeouts::deactivation_timeout(),
            scan_settle: timeouts::scan_wait(),
        }
    }

    /// Maximum time to wait for a connection to reach Activated.
    pub fn with_activation_timeout(mut self, timeout: Duration) -> Self {
        self.activation = timeout;
        self
    }

    /// Maximum time to wait for a deactivation to finish.
    pub fn with_deactivation_timeout(mut self, timeout: Duration) -> Self {
        self.deactivation = timeout;
        self
    }

    /// Time to wait after a scan request before reading results.
    pub fn with_scan_settle(mut self, settle: Duration) -> Self {
        self.scan_settle = settle;
        self
    }

    pub fn activation_timeout(&self) -> Duration {
        self.activation
    }

    pub fn deactivation_timeout(&self) -> Duration {
        self.deactivation
    }

    pub fn scan_settle(&self) -> Duration {
        self.scan_settle
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// High-level client for the NetworkManager daemon.
///
/// The main entry point of the crate: attaches to the system bus and
/// hands out typed wrappers for the daemon's object tree.
///
/// # Example
///
/// ```no_run
/// use nmdbus::NetworkManager;
///
/// # async fn example() -> nmdbus::Result<()> {
/// let nm = NetworkManager::connect().await?;
/// println!("daemon {} in state {}", nm.version().await?, nm.state().await?);
///
/// for device in nm.devices().await? {
///     let info = device.info().await?;
///     println!("{}: {} ({})", info.interface, info.state, info.kind);
/// }
/// # Ok(())
/// # }
/// ```
///
/// # Thread Safety
///
/// `NetworkManager` is `Clone` and can be shared across async tasks;
/// clones share the underlying D-Bus connection.
#[derive(Debug, Clone)]
pub struct NetworkManager {
    conn: Connection,
    timeouts: TimeoutConfig,
}

impl NetworkManager {
    /// Attaches to the system bus with default timeouts.
    pub async fn connect() -> Result<Self> {
        Self::with_config(TimeoutConfig::new()).await
    }

    /// Attaches to the system bus with the given timeouts.
    pub async fn with_config(timeouts: TimeoutConfig) -> Result<Self> {
        let conn = Connection::system().await?;
        debug!("Attached to the system bus");
        Ok(Self { conn, timeouts })
    }

    /// Wraps an existing bus connection.
    ///
    /// Useful when the caller already holds a connection, or for test
    /// harnesses that serve a daemon mock on the session bus.
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn,
            timeouts: TimeoutConfig::new(),
        }
    }

    /// The underlying bus connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// The timeouts this client uses.
    pub fn timeout_config(&self) -> &TimeoutConfig {
        &self.timeouts
    }

    async fn proxy(&self) -> Result<NMProxy<'_>> {
        Ok(NMProxy::new(&self.conn).await?)
    }

    // --- daemon-level properties -------------------------------------

    /// Daemon version string.
    pub async fn version(&self) -> Result<String> {
        let proxy = self.proxy().await?;
        guard(bus::MANAGER_PATH, proxy.version().await)
    }

    /// Overall daemon state.
    pub async fn state(&self) -> Result<NmState> {
        let proxy = self.proxy().await?;
        Ok(NmState::from(guard(bus::MANAGER_PATH, proxy.state().await)?))
    }

    /// Result of the most recent connectivity check.
    pub async fn connectivity(&self) -> Result<ConnectivityState> {
        let proxy = self.proxy().await?;
        Ok(ConnectivityState::from(guard(
            bus::MANAGER_PATH,
            proxy.connectivity().await,
        )?))
    }

    /// Whether the daemon is still activating connections at startup.
    pub async fn startup(&self) -> Result<bool> {
        let proxy = self.proxy().await?;
        guard(bus::MANAGER_PATH, proxy.startup().await)
    }

    /// Whether networking as a whole is enabled.
    pub async fn networking_enabled(&self) -> Result<bool> {
        let proxy = self.proxy().await?;
        guard(bus::MANAGER_PATH, proxy.networking_enabled().await)
    }

    /// Whether Wi-Fi is enabled in software.
    pub async fn wireless_enabled(&self) -> Result<bool> {
        let proxy = self.proxy().await?;
        guard(bus::MANAGER_PATH, proxy.wireless_enabled().await)
    }

    /// Enables or disables Wi-Fi.
    pub async fn set_wireless_enabled(&self, value: bool) -> Result<()> {
        let proxy = self.proxy().await?;
        guard(bus::MANAGER_PATH, proxy.set_wireless_enabled(value).await)
    }

    /// Whether the Wi-Fi hardware switch allows Wi-Fi.
    pub async fn wireless_hardware_enabled(&self) -> Result<bool> {
        let proxy = self.proxy().await?;
        guard(bus::MANAGER_PATH, proxy.wireless_hardware_enabled().await)
    }

    /// Whether mobile broadband is enabled in software.
    pub async fn wwan_enabled(&self) -> Result<bool> {
        let proxy = self.proxy().await?;
        guard(bus::MANAGER_PATH, proxy.wwan_enabled().await)
    }

    /// Enables or disables mobile broadband.
    pub async fn set_wwan_enabled(&self, value: bool) -> Result<()> {
        let proxy = self.proxy().await?;
        guard(bus::MANAGER_PATH, proxy.set_wwan_enabled(value).await)
    }

    /// Whether the mobile broadband hardware switch is on.
    pub async fn wwan_hardware_enabled(&self) -> Result<bool> {
        let proxy = self.proxy().await?;
        guard(bus::MANAGER_PATH, proxy.wwan_hardware_enabled().await)
    }

    /// Whether WiMAX is enabled in software.
    pub async fn wimax_enabled(&self) -> Result<bool> {
        let proxy = self.proxy().await?;
        guard(bus::MANAGER_PATH, proxy.wimax_enabled().await)
    }

    /// Enables or disables WiMAX.
    pub async fn set_wimax_enabled(&self, value: bool) -> Result<()> {
        let proxy = self.proxy().await?;
        guard(bus::MANAGER_PATH, proxy.set_wimax_enabled(value).await)
    }

    /// Whether the WiMAX hardware switch is on.
    pub async fn wimax_hardware_enabled(&self) -> Result<bool> {
        let proxy = self.proxy().await?;
        guard(bus::MANAGER_PATH, proxy.wimax_hardware_enabled().await)
    }

    // --- daemon-level methods ----------------------------------------

    /// Enables or disables networking as a whole.
    pub async fn enable(&self, enable: bool) -> Result<()> {
        let proxy = self.proxy().await?;
        guard(bus::MANAGER_PATH, proxy.enable(enable).await)
    }

    /// Puts the daemon to sleep (true) or wakes it up (false).
    pub async fn sleep(&self, sleep: bool) -> Result<()> {
        let proxy = self.proxy().await?;
        guard(bus::MANAGER_PATH, proxy.sleep(sleep).await)
    }

    /// Re-runs the connectivity check and returns the fresh result.
    pub async fn check_connectivity(&self) -> Result<ConnectivityState> {
        let proxy = self.proxy().await?;
        Ok(ConnectivityState::from(guard(
            bus::MANAGER_PATH,
            proxy.check_connectivity().await,
        )?))
    }

    /// The caller's polkit permissions, one entry per daemon operation.
    ///
    /// The `CheckPermissions` signal (see
    /// [`crate::monitoring::manager::permissions_changed_stream`])
    /// invalidates any cached copy of this list.
    pub async fn permissions(&self) -> Result<Vec<(Permission, PermissionResult)>> {
        let proxy = self.proxy().await?;
        let raw = guard(bus::MANAGER_PATH, proxy.get_permissions().await)?;
        let mut permissions: Vec<(Permission, PermissionResult)> = raw
            .into_iter()
            .map(|(name, value)| (Permission::parse(&name), PermissionResult::parse(&value)))
            .collect();
        permissions.sort_by_key(|(p, _)| p.to_string());
        Ok(permissions)
    }

    // --- object tree entry points ------------------------------------

    /// All devices the daemon manages.
    pub async fn devices(&self) -> Result<Vec<Device>> {
        device::list_devices(&self.conn).await
    }

    /// The device handling the given IP interface name.
    ///
    /// Fails with `NotFound` when no such interface exists.
    pub async fn device_by_iface(&self, iface: &str) -> Result<Device> {
        device::device_by_iface(&self.conn, iface).await
    }

    /// All Wi-Fi devices.
    pub async fn wifi_devices(&self) -> Result<Vec<WirelessDevice>> {
        device::wifi_devices(&self.conn).await
    }

    /// Handle to the connection profile store.
    pub fn settings(&self) -> Settings {
        Settings::new(self.conn.clone())
    }

    /// All active connections.
    pub async fn active_connections(&self) -> Result<Vec<ActiveConnection>> {
        let proxy = self.proxy().await?;
        let paths = guard(bus::MANAGER_PATH, proxy.active_connections().await)?;
        Ok(paths
            .into_iter()
            .map(|p| ActiveConnection::new(self.conn.clone(), p))
            .collect())
    }

    /// The active connection holding the default route, if any.
    pub async fn primary_connection(&self) -> Result<Option<ActiveConnection>> {
        let proxy = self.proxy().await?;
        let path = guard(bus::MANAGER_PATH, proxy.primary_connection().await)?;
        Ok(opt_path(path).map(|p| ActiveConnection::new(self.conn.clone(), p)))
    }

    /// An active connection currently activating, if any.
    pub async fn activating_connection(&self) -> Result<Option<ActiveConnection>> {
        let proxy = self.proxy().await?;
        let path = guard(bus::MANAGER_PATH, proxy.activating_connection().await)?;
        Ok(opt_path(path).map(|p| ActiveConnection::new(self.conn.clone(), p)))
    }

    // --- activation --------------------------------------------------

    /// Activates a saved profile.
    ///
    /// Without `device` the daemon picks one compatible with the
    /// profile; `specific_object` narrows the activation target (an
    /// access point path, for instance). Returns as soon as the daemon
    /// accepts the request; pair with
    /// [`wait_until_activated`](Self::wait_until_activated) to block
    /// until the connection is up.
    pub async fn activate(
        &self,
        profile: &ConnectionProfile,
        device: Option<&Device>,
        specific_object: Option<&str>,
    ) -> Result<ActiveConnection> {
        let proxy = self.proxy().await?;
        let device_path = match device {
            Some(d) => d.object_path().clone(),
            None => null_path()?,
        };
        let specific = match specific_object {
            Some(path) => OwnedObjectPath::try_from(path)?,
            None => null_path()?,
        };
        debug!("Activating profile {}", profile.path());
        let active = guard(
            bus::MANAGER_PATH,
            proxy
                .activate_connection(profile.object_path().clone(), device_path, specific)
                .await,
        )?;
        Ok(ActiveConnection::new(self.conn.clone(), active))
    }

    /// Activates a saved profile and waits for it to reach Activated.
    pub async fn activate_and_wait(
        &self,
        profile: &ConnectionProfile,
        device: Option<&Device>,
        specific_object: Option<&str>,
    ) -> Result<ActiveConnection> {
        let active = self.activate(profile, device, specific_object).await?;
        self.wait_until_activated(&active, device).await?;
        Ok(active)
    }

    /// Saves a new profile and activates it in one call.
    ///
    /// `access_point` narrows Wi-Fi activation to one AP. Returns the
    /// stored profile alongside the active connection.
    pub async fn add_and_activate(
        &self,
        settings: SettingsMap,
        device: &Device,
        access_point: Option<&AccessPoint>,
    ) -> Result<(ConnectionProfile, ActiveConnection)> {
        let proxy = self.proxy().await?;
        let specific = match access_point {
            Some(ap) => ap.object_path().clone(),
            None => null_path()?,
        };
        debug!("Adding and activating a profile on {}", device.path());
        let (profile, active) = guard(
            bus::MANAGER_PATH,
            proxy
                .add_and_activate_connection(settings, device.object_path().clone(), specific)
                .await,
        )?;
        Ok((
            ConnectionProfile::new(self.conn.clone(), profile),
            ActiveConnection::new(self.conn.clone(), active),
        ))
    }

    /// [`add_and_activate`](Self::add_and_activate), then waits for the
    /// connection to reach Activated.
    pub async fn add_and_activate_and_wait(
        &self,
        settings: SettingsMap,
        device: &Device,
        access_point: Option<&AccessPoint>,
    ) -> Result<(ConnectionProfile, ActiveConnection)> {
        let (profile, active) = self.add_and_activate(settings, device, access_point).await?;
        self.wait_until_activated(&active, Some(device)).await?;
        Ok((profile, active))
    }

    /// Tears down an active connection.
    pub async fn deactivate(&self, active: &ActiveConnection) -> Result<()> {
        let proxy = self.proxy().await?;
        debug!("Deactivating {}", active.path());
        guard(
            bus::MANAGER_PATH,
            proxy
                .deactivate_connection(active.object_path().clone())
                .await,
        )
    }

    /// Tears down an active connection and waits for it to finish.
    pub async fn deactivate_and_wait(&self, active: &ActiveConnection) -> Result<()> {
        self.deactivate(active).await?;
        self.wait_until_deactivated(active).await
    }

    /// Waits for `active` to reach the Activated state.
    ///
    /// Passing the `device` being activated improves failure diagnosis:
    /// a generic activation failure is replaced by the device's own
    /// state reason (wrong PSK surfaces as an auth failure, say).
    pub async fn wait_until_activated(
        &self,
        active: &ActiveConnection,
        device: Option<&Device>,
    ) -> Result<()> {
        state_wait::wait_until_activated(active, device, self.timeouts.activation).await
    }

    /// Waits for `active` to deactivate; the object vanishing counts as
    /// success.
    pub async fn wait_until_deactivated(&self, active: &ActiveConnection) -> Result<()> {
        state_wait::wait_until_deactivated(active, self.timeouts.deactivation).await
    }

    /// Waits for a device to reach `target`.
    pub async fn wait_for_device_state(&self, device: &Device, target: DeviceState) -> Result<()> {
        state_wait::wait_for_device_state(device, target, self.timeouts.activation).await
    }

    // --- secret agent ------------------------------------------------

    /// Registers a secret agent with the daemon.
    ///
    /// The agent is served on this client's bus connection and consulted
    /// by the daemon whenever an activation needs secrets. `identifier`
    /// follows D-Bus bus-name rules (reverse-DNS, no ':').
    pub async fn register_agent(
        &self,
        identifier: &str,
        capabilities: AgentCapabilities,
        agent: Arc<dyn SecretAgent>,
    ) -> Result<AgentHandle> {
        register_agent(&self.conn, identifier, capabilities, agent).await
    }

    // --- monitoring --------------------------------------------------

    /// Runs `callback` for every daemon-level event (state change,
    /// device hotplug, permission invalidation) until `shutdown` fires.
    pub async fn monitor_manager_events<F>(
        &self,
        shutdown: watch::Receiver<()>,
        callback: F,
    ) -> Result<()>
    where
        F: Fn(ManagerEvent) + 'static,
    {
        manager_monitor::monitor_manager_events(&self.conn, shutdown, callback).await
    }

    /// Runs `callback` for every change to the visible-network and
    /// saved-profile lists until `shutdown` fires.
    pub async fn monitor_network_changes<F>(
        &self,
        shutdown: watch::Receiver<()>,
        callback: F,
    ) -> Result<()>
    where
        F: Fn(NetworkEvent) + 'static,
    {
        network_monitor::monitor_network_changes(&self.conn, shutdown, callback).await
    }

    /// Runs `callback` on every device state transition until `shutdown`
    /// fires.
    pub async fn monitor_device_changes<F>(
        &self,
        shutdown: watch::Receiver<()>,
        callback: F,
    ) -> Result<()>
    where
        F: Fn() + 'static,
    {
        device_monitor::monitor_device_changes(&self.conn, shutdown, callback).await
    }
}

fn null_path() -> Result<OwnedObjectPath> {
    Ok(OwnedObjectPath::try_from(bus::NULL_PATH)?)
}
