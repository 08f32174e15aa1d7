//! Network device enumeration and control.
//!
//! [`Device`] wraps the base device interface shared by every hardware
//! kind; [`Device::specialize`] dispatches to the type-specific wrapper
//! matching the device's `DeviceType` property.

use log::{debug, warn};
use zbus::Connection;
use zvariant::OwnedObjectPath;

use crate::api::models::{DeviceInfo, NmError};
use crate::core::active::ActiveConnection;
use crate::core::ip_config::{Dhcp4Config, Dhcp6Config, Ipv4Config, Ipv6Config};
use crate::core::settings::ConnectionProfile;
use crate::core::wifi::WirelessDevice;
use crate::core::wimax::WimaxDevice;
use crate::core::{guard, opt_path};
use crate::dbus::{NMBluetoothProxy, NMDeviceProxy, NMModemProxy, NMProxy, NMWiredProxy};
use crate::types::flags::DeviceCapabilities;
use crate::types::states::{DeviceKind, DeviceState, DeviceStateReason};
use crate::Result;

/// A network interface known to NetworkManager.
#[derive(Debug, Clone)]
pub struct Device {
    conn: Connection,
    path: OwnedObjectPath,
}

impl Device {
    pub(crate) fn new(conn: Connection, path: OwnedObjectPath) -> Self {
        Self { conn, path }
    }

    /// D-Bus object path of this device.
    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }

    pub(crate) fn object_path(&self) -> &OwnedObjectPath {
        &self.path
    }

    // The builder clones the connection and owns the path, so the proxy
    // does not borrow `self`; signal and property streams built from it
    // stay usable after the wrapper is dropped.
    pub(crate) async fn proxy(&self) -> Result<NMDeviceProxy<'static>> {
        Ok(NMDeviceProxy::builder(&self.conn)
            .path(self.path.clone())?
            .build()
            .await?)
    }

    /// The network interface name (e.g., "wlan0").
    pub async fn interface(&self) -> Result<String> {
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.interface().await)
    }

    /// Hardware kind of the device.
    pub async fn kind(&self) -> Result<DeviceKind> {
        let proxy = self.proxy().await?;
        let raw = guard(self.path(), proxy.device_type().await)?;
        Ok(DeviceKind::from(raw))
    }

    /// Current device state.
    pub async fn state(&self) -> Result<DeviceState> {
        let proxy = self.proxy().await?;
        let raw = guard(self.path(), proxy.state().await)?;
        Ok(DeviceState::from(raw))
    }

    /// Current state plus the reason for the last transition.
    pub async fn state_reason(&self) -> Result<(DeviceState, DeviceStateReason)> {
        let proxy = self.proxy().await?;
        let (state, reason) = guard(self.path(), proxy.state_reason().await)?;
        Ok((DeviceState::from(state), DeviceStateReason::from(reason)))
    }

    /// Capability flags of the device.
    pub async fn capabilities(&self) -> Result<DeviceCapabilities> {
        let proxy = self.proxy().await?;
        let raw = guard(self.path(), proxy.capabilities().await)?;
        Ok(DeviceCapabilities::from_bits_truncate(raw))
    }

    /// Version of the kernel driver, when the driver reports one.
    pub async fn driver_version(&self) -> Result<Option<String>> {
        let proxy = self.proxy().await?;
        let version = guard(self.path(), proxy.driver_version().await)?;
        Ok(if version.is_empty() { None } else { Some(version) })
    }

    /// Version of the device firmware, when the driver reports one.
    pub async fn firmware_version(&self) -> Result<Option<String>> {
        let proxy = self.proxy().await?;
        let version = guard(self.path(), proxy.firmware_version().await)?;
        Ok(if version.is_empty() { None } else { Some(version) })
    }

    /// Whether the device activates matching profiles automatically.
    pub async fn autoconnect(&self) -> Result<bool> {
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.autoconnect().await)
    }

    /// Allows or blocks autoconnect for this device.
    pub async fn set_autoconnect(&self, value: bool) -> Result<()> {
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.set_autoconnect(value).await)
    }

    /// Disconnects the device and blocks autoconnect until re-enabled.
    pub async fn disconnect(&self) -> Result<()> {
        debug!("Disconnecting device {}", self.path());
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.disconnect().await)
    }

    /// Deletes a software device (bridge, bond, vlan). Fails for
    /// hardware devices.
    pub async fn delete(&self) -> Result<()> {
        debug!("Deleting software device {}", self.path());
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.delete().await)
    }

    /// The active connection on this device, if one exists.
    pub async fn active_connection(&self) -> Result<Option<ActiveConnection>> {
        let proxy = self.proxy().await?;
        let path = guard(self.path(), proxy.active_connection().await)?;
        Ok(opt_path(path).map(|p| ActiveConnection::new(self.conn.clone(), p)))
    }

    /// Profiles that could currently activate on this device.
    pub async fn available_connections(&self) -> Result<Vec<ConnectionProfile>> {
        let proxy = self.proxy().await?;
        let paths = guard(self.path(), proxy.available_connections().await)?;
        Ok(paths
            .into_iter()
            .map(|p| ConnectionProfile::new(self.conn.clone(), p))
            .collect())
    }

    /// The device's IPv4 configuration, present while activated.
    pub async fn ip4_config(&self) -> Result<Option<Ipv4Config>> {
        let proxy = self.proxy().await?;
        let path = guard(self.path(), proxy.ip4_config().await)?;
        Ok(opt_path(path).map(|p| Ipv4Config::new(self.conn.clone(), p)))
    }

    /// The device's IPv6 configuration, present while activated.
    pub async fn ip6_config(&self) -> Result<Option<Ipv6Config>> {
        let proxy = self.proxy().await?;
        let path = guard(self.path(), proxy.ip6_config().await)?;
        Ok(opt_path(path).map(|p| Ipv6Config::new(self.conn.clone(), p)))
    }

    /// The device's DHCPv4 lease, when DHCP is in use.
    pub async fn dhcp4_config(&self) -> Result<Option<Dhcp4Config>> {
        let proxy = self.proxy().await?;
        let path = guard(self.path(), proxy.dhcp4_config().await)?;
        Ok(opt_path(path).map(|p| Dhcp4Config::new(self.conn.clone(), p)))
    }

    /// The device's DHCPv6 lease, when DHCP is in use.
    pub async fn dhcp6_config(&self) -> Result<Option<Dhcp6Config>> {
        let proxy = self.proxy().await?;
        let path = guard(self.path(), proxy.dhcp6_config().await)?;
        Ok(opt_path(path).map(|p| Dhcp6Config::new(self.conn.clone(), p)))
    }

    /// Reads identity and state in one snapshot.
    pub async fn info(&self) -> Result<DeviceInfo> {
        let proxy = self.proxy().await?;
        let path = self.path();

        let interface = guard(path, proxy.interface().await)?;
        let ip_interface = match proxy.ip_interface().await {
            Ok(name) if !name.is_empty() && name != interface => Some(name),
            Ok(_) => None,
            Err(e) => {
                debug!("IP interface not available for {interface}: {e}");
                None
            }
        };
        let kind = DeviceKind::from(guard(path, proxy.device_type().await)?);
        let (state, state_reason) = {
            let (s, r) = guard(path, proxy.state_reason().await)?;
            (DeviceState::from(s), DeviceStateReason::from(r))
        };
        let driver = match proxy.driver().await {
            Ok(d) if !d.is_empty() => Some(d),
            Ok(_) => None,
            Err(e) => {
                debug!("Driver not available for {interface}: {e}");
                None
            }
        };
        let managed = guard(path, proxy.managed().await)?;
        let autoconnect = guard(path, proxy.autoconnect().await)?;
        let firmware_missing = match proxy.firmware_missing().await {
            Ok(v) => v,
            Err(e) => {
                warn!("FirmwareMissing not readable for {interface}: {e}");
                false
            }
        };

        Ok(DeviceInfo {
            path: path.to_owned(),
            interface,
            ip_interface,
            kind,
            state,
            state_reason,
            driver,
            managed,
            autoconnect,
            firmware_missing,
        })
    }

    /// Dispatches to the wrapper matching the device's hardware kind.
    pub async fn specialize(self) -> Result<SpecificDevice> {
        Ok(match self.kind().await? {
            DeviceKind::Ethernet => SpecificDevice::Wired(WiredDevice::new(self)),
            DeviceKind::Wifi => SpecificDevice::Wireless(WirelessDevice::new(self)),
            DeviceKind::Modem => SpecificDevice::Modem(ModemDevice::new(self)),
            DeviceKind::Bluetooth => SpecificDevice::Bluetooth(BluetoothDevice::new(self)),
            DeviceKind::Wimax => SpecificDevice::Wimax(WimaxDevice::new(self)),
            _ => SpecificDevice::Generic(self),
        })
    }
}

/// A device dispatched to its type-specific wrapper.
///
/// Kinds without extra D-Bus surface (bridges, bonds, vlans, tunnels)
/// come back as `Generic`, carrying the base device.
#[derive(Debug, Clone)]
pub enum SpecificDevice {
    Wired(WiredDevice),
    Wireless(WirelessDevice),
    Modem(ModemDevice),
    Bluetooth(BluetoothDevice),
    Wimax(WimaxDevice),
    Generic(Device),
}

impl SpecificDevice {
    /// The base device regardless of kind.
    pub fn device(&self) -> &Device {
        match self {
            Self::Wired(d) => d.device(),
            Self::Wireless(d) => d.device(),
            Self::Modem(d) => d.device(),
            Self::Bluetooth(d) => d.device(),
            Self::Wimax(d) => d.device(),
            Self::Generic(d) => d,
        }
    }
}

/// An ethernet device.
#[derive(Debug, Clone)]
pub struct WiredDevice {
    device: Device,
}

impl WiredDevice {
    pub(crate) fn new(device: Device) -> Self {
        Self { device }
    }

    /// The base device.
    pub fn device(&self) -> &Device {
        &self.device
    }

    async fn proxy(&self) -> Result<NMWiredProxy<'_>> {
        Ok(NMWiredProxy::builder(self.device.connection())
            .path(self.device.object_path().clone())?
            .build()
            .await?)
    }

    /// Hardware (MAC) address.
    pub async fn hw_address(&self) -> Result<String> {
        let proxy = self.proxy().await?;
        guard(self.device.path(), proxy.hw_address().await)
    }

    /// Permanent hardware (MAC) address.
    pub async fn perm_hw_address(&self) -> Result<String> {
        let proxy = self.proxy().await?;
        guard(self.device.path(), proxy.perm_hw_address().await)
    }

    /// Link speed in Mb/s; 0 when the link is down.
    pub async fn speed(&self) -> Result<u32> {
        let proxy = self.proxy().await?;
        guard(self.device.path(), proxy.speed().await)
    }

    /// Whether a cable is plugged in.
    pub async fn carrier(&self) -> Result<bool> {
        let proxy = self.proxy().await?;
        guard(self.device.path(), proxy.carrier().await)
    }
}

/// A mobile broadband device.
#[derive(Debug, Clone)]
pub struct ModemDevice {
    device: Device,
}

impl ModemDevice {
    pub(crate) fn new(device: Device) -> Self {
        Self { device }
    }

    /// The base device.
    pub fn device(&self) -> &Device {
        &self.device
    }

    async fn proxy(&self) -> Result<NMModemProxy<'_>> {
        Ok(NMModemProxy::builder(self.device.connection())
            .path(self.device.object_path().clone())?
            .build()
            .await?)
    }

    /// Access technologies the modem supports (raw bitmask).
    pub async fn modem_capabilities(&self) -> Result<u32> {
        let proxy = self.proxy().await?;
        guard(self.device.path(), proxy.modem_capabilities().await)
    }

    /// Access technologies available without a firmware reload.
    pub async fn current_capabilities(&self) -> Result<u32> {
        let proxy = self.proxy().await?;
        guard(self.device.path(), proxy.current_capabilities().await)
    }
}

/// A bluetooth (DUN/PAN) device.
#[derive(Debug, Clone)]
pub struct BluetoothDevice {
    device: Device,
}

impl BluetoothDevice {
    pub(crate) fn new(device: Device) -> Self {
        Self { device }
    }

    /// The base device.
    pub fn device(&self) -> &Device {
        &self.device
    }

    async fn proxy(&self) -> Result<NMBluetoothProxy<'_>> {
        Ok(NMBluetoothProxy::builder(self.device.connection())
            .path(self.device.object_path().clone())?
            .build()
            .await?)
    }

    /// Bluetooth hardware address (BD_ADDR).
    pub async fn hw_address(&self) -> Result<String> {
        let proxy = self.proxy().await?;
        guard(self.device.path(), proxy.hw_address().await)
    }

    /// Name of the paired bluetooth device.
    pub async fn name(&self) -> Result<String> {
        let proxy = self.proxy().await?;
        guard(self.device.path(), proxy.name().await)
    }

    /// Supported bluetooth networking capabilities (raw bitmask).
    pub async fn bt_capabilities(&self) -> Result<u32> {
        let proxy = self.proxy().await?;
        guard(self.device.path(), proxy.bt_capabilities().await)
    }
}

/// Lists all devices the daemon knows about.
pub(crate) async fn list_devices(conn: &Connection) -> Result<Vec<Device>> {
    let nm = NMProxy::new(conn).await?;
    let paths = nm.get_devices().await?;
    debug!("NetworkManager reports {} devices", paths.len());
    Ok(paths
        .into_iter()
        .map(|p| Device::new(conn.clone(), p))
        .collect())
}

/// Resolves a device by its IP interface name via the daemon's own lookup.
pub(crate) async fn device_by_iface(conn: &Connection, iface: &str) -> Result<Device> {
    let nm = NMProxy::new(conn).await?;
    match nm.get_device_by_ip_iface(iface).await {
        Ok(path) => Ok(Device::new(conn.clone(), path)),
        Err(zbus::Error::MethodError(name, _, _)) if name.as_str().ends_with("UnknownDevice") => {
            Err(NmError::NotFound(format!("no device for interface {iface}")))
        }
        Err(e) => Err(NmError::classify("/org/freedesktop/NetworkManager", e)),
    }
}

/// Lists wireless devices only, already specialized.
pub(crate) async fn wifi_devices(conn: &Connection) -> Result<Vec<WirelessDevice>> {
    let mut wifi = Vec::new();
    for device in list_devices(conn).await? {
        match device.kind().await {
            Ok(DeviceKind::Wifi) => wifi.push(WirelessDevice::new(device)),
            Ok(_) => {}
            Err(e) if e.is_vanished() => {
                debug!("Device {} vanished during enumeration", device.path());
            }
            Err(e) => return Err(e),
        }
    }
    Ok(wifi)
}
