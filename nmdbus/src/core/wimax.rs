//! WiMAX device and network service provider operations.

use log::debug;
use zbus::Connection;
use zvariant::OwnedObjectPath;

use crate::api::models::NspInfo;
use crate::core::device::Device;
use crate::core::{guard, opt_path};
use crate::dbus::{NMNspProxy, NMWimaxProxy};
use crate::Result;

/// A WiMAX device.
#[derive(Debug, Clone)]
pub struct WimaxDevice {
    device: Device,
}

impl WimaxDevice {
    pub(crate) fn new(device: Device) -> Self {
        Self { device }
    }

    /// The base device.
    pub fn device(&self) -> &Device {
        &self.device
    }

    /// D-Bus object path of this device.
    pub fn path(&self) -> &str {
        self.device.path()
    }

    fn connection(&self) -> &Connection {
        self.device.connection()
    }

    async fn proxy(&self) -> Result<NMWimaxProxy<'_>> {
        Ok(NMWimaxProxy::builder(self.connection())
            .path(self.device.object_path().clone())?
            .build()
            .await?)
    }

    /// All network service providers visible to this device.
    pub async fn nsps(&self) -> Result<Vec<Nsp>> {
        let proxy = self.proxy().await?;
        let paths = guard(self.path(), proxy.get_nsp_list().await)?;
        debug!("WiMAX device {} sees {} providers", self.path(), paths.len());
        Ok(paths
            .into_iter()
            .map(|p| Nsp::new(self.connection().clone(), p))
            .collect())
    }

    /// The provider currently in use, if connected.
    pub async fn active_nsp(&self) -> Result<Option<Nsp>> {
        let proxy = self.proxy().await?;
        let path = guard(self.path(), proxy.active_nsp().await)?;
        Ok(opt_path(path).map(|p| Nsp::new(self.connection().clone(), p)))
    }

    /// Hardware (MAC) address of the device.
    pub async fn hw_address(&self) -> Result<String> {
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.hw_address().await)
    }

    /// Center frequency in kHz of the radio channel in use.
    pub async fn center_frequency(&self) -> Result<u32> {
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.center_frequency().await)
    }

    /// Received signal strength in dBm.
    pub async fn rssi(&self) -> Result<i32> {
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.rssi().await)
    }

    /// Carrier-to-interference-and-noise ratio in dB.
    pub async fn cinr(&self) -> Result<i32> {
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.cinr().await)
    }

    /// Average transmit power in dBm.
    pub async fn tx_power(&self) -> Result<i32> {
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.tx_power().await)
    }

    /// Base station identifier of the cell in use.
    pub async fn bsid(&self) -> Result<String> {
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.bsid().await)
    }
}

/// A WiMAX network service provider.
#[derive(Debug, Clone)]
pub struct Nsp {
    conn: Connection,
    path: OwnedObjectPath,
}

impl Nsp {
    pub(crate) fn new(conn: Connection, path: OwnedObjectPath) -> Self {
        Self { conn, path }
    }

    /// D-Bus object path of this provider.
    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    async fn proxy(&self) -> Result<NMNspProxy<'_>> {
        Ok(NMNspProxy::builder(&self.conn)
            .path(self.path.clone())?
            .build()
            .await?)
    }

    /// Provider name.
    pub async fn name(&self) -> Result<String> {
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.name().await)
    }

    /// Signal quality as a percentage.
    pub async fn signal_quality(&self) -> Result<u32> {
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.signal_quality().await)
    }

    /// Raw network type code (home/partner/roaming).
    pub async fn network_type(&self) -> Result<u32> {
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.network_type().await)
    }

    /// Reads all properties in one snapshot.
    pub async fn info(&self) -> Result<NspInfo> {
        let proxy = self.proxy().await?;
        let path = self.path();
        Ok(NspInfo {
            path: path.to_owned(),
            name: guard(path, proxy.name().await)?,
            signal_quality: guard(path, proxy.signal_quality().await)?,
            network_type: guard(path, proxy.network_type().await)?,
        })
    }
}
