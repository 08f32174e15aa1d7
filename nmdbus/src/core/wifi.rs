//! Wi-Fi device and access point operations.
//!
//! Access points are the most transient objects in the tree: they come
//! and go with every scan. Enumeration therefore skips objects that
//! vanish mid-read instead of failing the whole listing.

use std::collections::HashMap;
use std::time::Duration;

use futures_timer::Delay;
use log::{debug, warn};
use zbus::Connection;
use zvariant::OwnedObjectPath;

use crate::api::models::AccessPointInfo;
use crate::core::device::Device;
use crate::core::{guard, opt_path};
use crate::dbus::{NMAccessPointProxy, NMWirelessProxy};
use crate::types::constants::{rate, timeouts};
use crate::types::flags::{ApFlags, ApSecurityFlags};
use crate::types::states::WirelessMode;
use crate::util::convert::{bars_from_strength, channel_from_freq, decode_ssid};
use crate::Result;

/// A Wi-Fi device.
#[derive(Debug, Clone)]
pub struct WirelessDevice {
    device: Device,
}

impl WirelessDevice {
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

    pub(crate) fn connection(&self) -> &Connection {
        self.device.connection()
    }

    pub(crate) async fn proxy(&self) -> Result<NMWirelessProxy<'_>> {
        Ok(NMWirelessProxy::builder(self.connection())
            .path(self.device.object_path().clone())?
            .build()
            .await?)
    }

    /// Requests a scan and waits briefly for results to settle.
    ///
    /// The daemon refuses back-to-back scan requests; errors from a
    /// too-recent scan are logged and ignored since fresh-enough results
    /// are already available.
    pub async fn request_scan(&self) -> Result<()> {
        self.request_scan_with_settle(timeouts::scan_wait()).await
    }

    /// Same as [`request_scan`](Self::request_scan) with an explicit
    /// settle delay.
    pub async fn request_scan_with_settle(&self, settle: Duration) -> Result<()> {
        let proxy = self.proxy().await?;
        debug!("Requesting Wi-Fi scan on {}", self.path());
        match proxy.request_scan(HashMap::new()).await {
            Ok(()) => {}
            Err(e) => {
                warn!("Scan request on {} not accepted: {e}", self.path());
                return guard(self.path(), Err(e));
            }
        }
        Delay::new(settle).await;
        Ok(())
    }

    /// All access points visible to this device, including hidden ones.
    ///
    /// Access points that disappear between path enumeration and wrapping
    /// are silently dropped.
    pub async fn access_points(&self) -> Result<Vec<AccessPoint>> {
        let proxy = self.proxy().await?;
        let paths = guard(self.path(), proxy.get_all_access_points().await)?;
        Ok(paths
            .into_iter()
            .map(|p| AccessPoint::new(self.connection().clone(), p))
            .collect())
    }

    /// The access point currently in use, if connected.
    pub async fn active_access_point(&self) -> Result<Option<AccessPoint>> {
        let proxy = self.proxy().await?;
        let path = guard(self.path(), proxy.active_access_point().await)?;
        Ok(opt_path(path).map(|p| AccessPoint::new(self.connection().clone(), p)))
    }

    /// Hardware (MAC) address of the device.
    pub async fn hw_address(&self) -> Result<String> {
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.hw_address().await)
    }

    /// Current connection bitrate in Mbps.
    pub async fn bitrate(&self) -> Result<u32> {
        let proxy = self.proxy().await?;
        let kbit = guard(self.path(), proxy.bitrate().await)?;
        Ok(kbit / rate::KBIT_TO_MBPS)
    }

    /// Operating mode of the device.
    pub async fn mode(&self) -> Result<WirelessMode> {
        let proxy = self.proxy().await?;
        let raw = guard(self.path(), proxy.mode().await)?;
        Ok(WirelessMode::from(raw))
    }

    /// CLOCK_BOOTTIME milliseconds of the last finished scan, -1 if the
    /// device never scanned.
    pub async fn last_scan(&self) -> Result<i64> {
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.last_scan().await)
    }

    /// Deduplicated network listing.
    ///
    /// Collapses access points by (SSID, band), keeping the strongest
    /// signal per network, so mesh networks and multi-BSSID routers show
    /// up once per band. Access points that vanish mid-read are skipped.
    pub async fn networks(&self) -> Result<Vec<AccessPointInfo>> {
        let mut by_network: HashMap<(Vec<u8>, u8), AccessPointInfo> = HashMap::new();

        for ap in self.access_points().await? {
            let info = match ap.info().await {
                Ok(info) => info,
                Err(e) if e.is_vanished() => {
                    debug!("Access point {} vanished during listing", ap.path());
                    continue;
                }
                Err(e) => return Err(e),
            };

            let key = (info.ssid_bytes.clone(), band(info.frequency));
            by_network
                .entry(key)
                .and_modify(|existing| {
                    if info.strength > existing.strength {
                        *existing = info.clone();
                    }
                })
                .or_insert(info);
        }

        let mut networks: Vec<_> = by_network.into_values().collect();
        networks.sort_by(|a, b| b.strength.cmp(&a.strength));
        Ok(networks)
    }
}

/// A visible wireless network endpoint.
#[derive(Debug, Clone)]
pub struct AccessPoint {
    conn: Connection,
    path: OwnedObjectPath,
}

impl AccessPoint {
    pub(crate) fn new(conn: Connection, path: OwnedObjectPath) -> Self {
        Self { conn, path }
    }

    /// D-Bus object path of this access point.
    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    pub(crate) fn object_path(&self) -> &OwnedObjectPath {
        &self.path
    }

    // Owns its connection and path, so the `Strength` property stream
    // built from it outlives the wrapper.
    pub(crate) async fn proxy(&self) -> Result<NMAccessPointProxy<'static>> {
        Ok(NMAccessPointProxy::builder(&self.conn)
            .path(self.path.clone())?
            .build()
            .await?)
    }

    /// Raw SSID bytes as broadcast; need not be valid UTF-8.
    pub async fn ssid_bytes(&self) -> Result<Vec<u8>> {
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.ssid().await)
    }

    /// SSID decoded for display, lossily when not UTF-8.
    pub async fn ssid(&self) -> Result<String> {
        Ok(decode_ssid(&self.ssid_bytes().await?))
    }

    /// BSSID (MAC address) of the access point.
    pub async fn bssid(&self) -> Result<String> {
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.hw_address().await)
    }

    /// Signal strength as a percentage.
    pub async fn strength(&self) -> Result<u8> {
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.strength().await)
    }

    /// Operating frequency in MHz.
    pub async fn frequency(&self) -> Result<u32> {
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.frequency().await)
    }

    /// 802.11 mode the access point operates in.
    pub async fn mode(&self) -> Result<WirelessMode> {
        let proxy = self.proxy().await?;
        let raw = guard(self.path(), proxy.mode().await)?;
        Ok(WirelessMode::from(raw))
    }

    /// Capability flags.
    pub async fn flags(&self) -> Result<ApFlags> {
        let proxy = self.proxy().await?;
        let raw = guard(self.path(), proxy.flags().await)?;
        Ok(ApFlags::from_bits_truncate(raw))
    }

    /// WPA security flags.
    pub async fn wpa_flags(&self) -> Result<ApSecurityFlags> {
        let proxy = self.proxy().await?;
        let raw = guard(self.path(), proxy.wpa_flags().await)?;
        Ok(ApSecurityFlags::from_bits_truncate(raw))
    }

    /// RSN (WPA2/WPA3) security flags.
    pub async fn rsn_flags(&self) -> Result<ApSecurityFlags> {
        let proxy = self.proxy().await?;
        let raw = guard(self.path(), proxy.rsn_flags().await)?;
        Ok(ApSecurityFlags::from_bits_truncate(raw))
    }

    /// CLOCK_BOOTTIME seconds when a scan last saw this access point;
    /// -1 if never.
    pub async fn last_seen(&self) -> Result<i32> {
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.last_seen().await)
    }

    /// Human-readable security description (e.g. "WPA2/WPA3 + PSK").
    pub async fn security_summary(&self) -> Result<String> {
        let flags = self.flags().await?;
        let wpa = self.wpa_flags().await?;
        let rsn = self.rsn_flags().await?;
        Ok(security_summary(flags, wpa, rsn))
    }

    /// Reads all display-relevant properties in one snapshot.
    pub async fn info(&self) -> Result<AccessPointInfo> {
        let proxy = self.proxy().await?;
        let path = self.path();

        let ssid_bytes = guard(path, proxy.ssid().await)?;
        let bssid = guard(path, proxy.hw_address().await)?;
        let strength = guard(path, proxy.strength().await)?;
        let frequency = guard(path, proxy.frequency().await)?;
        let mode = WirelessMode::from(guard(path, proxy.mode().await)?);
        let flags_raw = guard(path, proxy.flags().await)?;
        let wpa_raw = guard(path, proxy.wpa_flags().await)?;
        let rsn_raw = guard(path, proxy.rsn_flags().await)?;
        let flags = ApFlags::from_bits_truncate(flags_raw);
        let wpa = ApSecurityFlags::from_bits_truncate(wpa_raw);
        let rsn = ApSecurityFlags::from_bits_truncate(rsn_raw);
        let max_bitrate = guard(path, proxy.max_bitrate().await)?;
        let last_seen = guard(path, proxy.last_seen().await)?;

        let secured = flags.contains(ApFlags::PRIVACY)
            || !wpa.is_empty()
            || !rsn.is_empty();

        Ok(AccessPointInfo {
            path: path.to_owned(),
            ssid: decode_ssid(&ssid_bytes),
            ssid_bytes,
            bssid,
            strength,
            frequency,
            channel: channel_from_freq(frequency),
            mode: mode.to_string(),
            max_bitrate_mbps: max_bitrate / rate::KBIT_TO_MBPS,
            secured,
            security: security_summary(flags, wpa, rsn),
            flags: flags_raw,
            wpa_flags: wpa_raw,
            rsn_flags: rsn_raw,
            last_seen,
            bars: bars_from_strength(strength).to_owned(),
        })
    }
}

/// Frequency band as a dedup key: 2 for 2.4GHz, 5 for 5GHz, 6 for 6GHz.
fn band(mhz: u32) -> u8 {
    match mhz {
        0..=2500 => 2,
        2501..=5925 => 5,
        _ => 6,
    }
}

/// Builds the "WPA2/WPA3 + PSK" style security description.
pub(crate) fn security_summary(
    flags: ApFlags,
    wpa: ApSecurityFlags,
    rsn: ApSecurityFlags,
) -> String {
    let mut parts: Vec<&str> = Vec::new();
    let combined = wpa | rsn;

    if flags.contains(ApFlags::PRIVACY) && wpa.is_empty() && rsn.is_empty() {
        parts.push("WEP");
    }
    if !wpa.is_empty() {
        parts.push("WPA");
    }
    if !rsn.is_empty() {
        parts.push("WPA2/WPA3");
    }
    if combined.is_psk() {
        parts.push("PSK");
    }
    if combined.is_enterprise() {
        parts.push("802.1X");
    }
    if combined.contains(ApSecurityFlags::KEY_MGMT_OWE) {
        parts.push("OWE");
    }

    if parts.is_empty() {
        "Open".to_owned()
    } else {
        parts.join(" + ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_security_summary_open() {
        let summary = security_summary(
            ApFlags::NONE,
            ApSecurityFlags::NONE,
            ApSecurityFlags::NONE,
        );
        assert_eq!(summary, "Open");
    }

    #[test]
    fn test_security_summary_wep() {
        let summary = security_summary(
            ApFlags::PRIVACY,
            ApSecurityFlags::NONE,
            ApSecurityFlags::NONE,
        );
        assert_eq!(summary, "WEP");
    }

    #[test]
    fn test_security_summary_wpa2_psk() {
        let rsn = ApSecurityFlags::KEY_MGMT_PSK
            | ApSecurityFlags::PAIR_CCMP
            | ApSecurityFlags::GROUP_CCMP;
        let summary = security_summary(ApFlags::PRIVACY, ApSecurityFlags::NONE, rsn);
        assert_eq!(summary, "WPA2/WPA3 + PSK");
    }

    #[test]
    fn test_security_summary_enterprise() {
        let rsn = ApSecurityFlags::KEY_MGMT_802_1X;
        let summary = security_summary(ApFlags::PRIVACY, ApSecurityFlags::NONE, rsn);
        assert_eq!(summary, "WPA2/WPA3 + 802.1X");
    }

    #[test]
    fn test_security_summary_mixed_wpa_wpa2() {
        let wpa = ApSecurityFlags::KEY_MGMT_PSK;
        let rsn = ApSecurityFlags::KEY_MGMT_PSK;
        let summary = security_summary(ApFlags::PRIVACY, wpa, rsn);
        assert_eq!(summary, "WPA + WPA2/WPA3 + PSK");
    }

    #[test]
    fn test_snapshot_keeps_raw_security_flags() {
        let rsn = ApSecurityFlags::KEY_MGMT_PSK | ApSecurityFlags::PAIR_CCMP;
        let info = AccessPointInfo {
            path: "/org/freedesktop/NetworkManager/AccessPoint/1".to_owned(),
            ssid: "HomeNet".to_owned(),
            ssid_bytes: b"HomeNet".to_vec(),
            bssid: "AA:BB:CC:00:11:22".to_owned(),
            strength: 80,
            frequency: 2412,
            channel: Some(1),
            mode: "infrastructure".to_owned(),
            max_bitrate_mbps: 540,
            secured: true,
            security: "WPA2/WPA3 + PSK".to_owned(),
            flags: ApFlags::PRIVACY.bits(),
            wpa_flags: 0,
            rsn_flags: rsn.bits(),
            last_seen: 1200,
            bars: "▂▄▆█".to_owned(),
        };

        // The raw codes decode back into the typed flag sets.
        assert!(ApFlags::from_bits_truncate(info.flags).contains(ApFlags::PRIVACY));
        assert!(ApSecurityFlags::from_bits_truncate(info.rsn_flags).is_psk());
        assert!(ApSecurityFlags::from_bits_truncate(info.wpa_flags).is_empty());
    }

    #[test]
    fn test_band_split() {
        assert_eq!(band(2412), 2);
        assert_eq!(band(2484), 2);
        assert_eq!(band(5180), 5);
        assert_eq!(band(5955), 6);
        assert_eq!(band(6875), 6);
    }
}
