//! Public data types: errors, snapshots, permissions, and settings views.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::net::{Ipv4Addr, Ipv6Addr};
use thiserror::Error;
use zvariant::{OwnedValue, Value};

use crate::types::states::{
    ActiveConnectionState, ActiveConnectionStateReason, DeviceKind, DeviceState, DeviceStateReason,
};
use crate::util::convert::mac_to_string;

/// Connection settings as they travel over the bus: a map of section name
/// to a map of key/value pairs.
pub type SettingsMap = HashMap<String, HashMap<String, OwnedValue>>;

/// Errors returned by this crate.
///
/// Remote failures keep their D-Bus detail in [`NmError::Dbus`] unless they
/// match one of the recognizable conditions: an object that disappeared
/// mid-use becomes [`NmError::ObjectVanished`], an authorization refusal
/// becomes [`NmError::PermissionDenied`].
#[derive(Debug, Error)]
pub enum NmError {
    /// A D-Bus communication error occurred.
    #[error("D-Bus error: {0}")]
    Dbus(#[from] zbus::Error),

    /// The remote object disappeared while it was being used.
    ///
    /// Access points, active connections, and IP configuration objects are
    /// transient: NetworkManager removes them whenever the network changes,
    /// and calls against a removed path fail with this error.
    #[error("object vanished: {0}")]
    ObjectVanished(String),

    /// NetworkManager rejected the request for lack of authorization.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// A lookup found nothing (device, profile, or settings section).
    #[error("not found: {0}")]
    NotFound(String),

    /// A state transition did not finish within the configured timeout.
    #[error("timed out waiting for state change")]
    Timeout,

    /// Activation ended in a terminal failure state.
    #[error("activation failed: {0}")]
    ActivationFailed(ActiveConnectionStateReason),

    /// The device reported a failure reason during activation.
    #[error("device failed: {0}")]
    DeviceFailed(DeviceStateReason),

    /// A hardware address string could not be parsed.
    #[error("invalid MAC address: {0}")]
    InvalidMacAddress(String),

    /// An SSID failed validation (empty or longer than 32 bytes).
    #[error("invalid SSID: {0}")]
    InvalidSsid(String),

    /// A pre-shared key failed validation.
    #[error("invalid pre-shared key: {0}")]
    InvalidPsk(String),

    /// A value in a D-Bus reply had an unexpected type.
    #[error("variant decode error: {0}")]
    Variant(#[from] zvariant::Error),
}

const VANISHED_ERRORS: [&str; 5] = [
    "org.freedesktop.DBus.Error.UnknownObject",
    "org.freedesktop.DBus.Error.UnknownMethod",
    "org.freedesktop.DBus.Error.UnknownInterface",
    "org.freedesktop.DBus.Error.ServiceUnknown",
    "org.freedesktop.DBus.Error.NameHasNoOwner",
];

const DENIED_ERRORS: [&str; 2] = [
    "org.freedesktop.DBus.Error.AccessDenied",
    "org.freedesktop.NetworkManager.PermissionDenied",
];

impl NmError {
    /// Classifies a raw zbus error against the conditions this crate
    /// recognizes, attributing it to `path`.
    pub(crate) fn classify(path: &str, err: zbus::Error) -> NmError {
        match &err {
            zbus::Error::MethodError(name, _, _) => {
                let name = name.as_str();
                if VANISHED_ERRORS.contains(&name) {
                    NmError::ObjectVanished(path.to_owned())
                } else if DENIED_ERRORS.contains(&name) {
                    NmError::PermissionDenied(path.to_owned())
                } else {
                    NmError::Dbus(err)
                }
            }
            zbus::Error::FDO(fdo) => match fdo.as_ref() {
                zbus::fdo::Error::UnknownObject(_)
                | zbus::fdo::Error::UnknownMethod(_)
                | zbus::fdo::Error::UnknownInterface(_)
                | zbus::fdo::Error::ServiceUnknown(_)
                | zbus::fdo::Error::NameHasNoOwner(_) => NmError::ObjectVanished(path.to_owned()),
                zbus::fdo::Error::AccessDenied(_) => NmError::PermissionDenied(path.to_owned()),
                _ => NmError::Dbus(err),
            },
            _ => NmError::Dbus(err),
        }
    }

    /// True when the error means the remote object no longer exists.
    pub fn is_vanished(&self) -> bool {
        matches!(self, NmError::ObjectVanished(_))
    }
}

/// Snapshot of a device's identity and state.
#[derive(Debug, Clone)]
pub struct DeviceInfo {
    /// D-Bus object path
    pub path: String,
    /// Interface name (e.g., "wlan0", "eth0")
    pub interface: String,
    /// The IP interface name, when it differs from the device interface
    pub ip_interface: Option<String>,
    /// Hardware kind of the device
    pub kind: DeviceKind,
    /// Current device state
    pub state: DeviceState,
    /// Why the device entered its current state
    pub state_reason: DeviceStateReason,
    /// Kernel driver name
    pub driver: Option<String>,
    /// Whether NetworkManager manages this device
    pub managed: bool,
    /// Whether the device activates matching profiles automatically
    pub autoconnect: bool,
    /// Whether required firmware is missing
    pub firmware_missing: bool,
}

/// Snapshot of a visible access point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessPointInfo {
    /// D-Bus object path
    pub path: String,
    /// SSID decoded for display (lossy when not UTF-8)
    pub ssid: String,
    /// Raw SSID bytes as broadcast
    pub ssid_bytes: Vec<u8>,
    /// Access point MAC address (BSSID)
    pub bssid: String,
    /// Signal strength (0-100)
    pub strength: u8,
    /// Frequency in MHz
    pub frequency: u32,
    /// WiFi channel number
    pub channel: Option<u16>,
    /// Operating mode (e.g., "infrastructure")
    pub mode: String,
    /// Highest bitrate the access point supports, in Mbps
    pub max_bitrate_mbps: u32,
    /// Whether the network requires authentication
    pub secured: bool,
    /// Security type description (e.g., "WPA2 + PSK")
    pub security: String,
    /// Raw capability flags; decode with [`ApFlags`](crate::ApFlags)
    pub flags: u32,
    /// Raw WPA security flags; decode with
    /// [`ApSecurityFlags`](crate::ApSecurityFlags)
    pub wpa_flags: u32,
    /// Raw RSN (WPA2/WPA3) security flags
    pub rsn_flags: u32,
    /// CLOCK_BOOTTIME seconds when a scan last saw this access point,
    /// -1 if never
    pub last_seen: i32,
    /// Visual signal strength representation (e.g., "▂▄▆█")
    pub bars: String,
}

/// Snapshot of a WiMAX network service provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NspInfo {
    /// D-Bus object path
    pub path: String,
    /// Provider name
    pub name: String,
    /// Signal quality (0-100)
    pub signal_quality: u32,
    /// Raw network type code
    pub network_type: u32,
}

/// Snapshot of an active connection.
#[derive(Debug, Clone)]
pub struct ActiveConnectionInfo {
    /// D-Bus object path
    pub path: String,
    /// Profile id (human-readable name)
    pub id: String,
    /// Profile uuid
    pub uuid: String,
    /// The `connection.type` setting value
    pub connection_type: String,
    /// Current activation state
    pub state: ActiveConnectionState,
    /// Paths of the devices carrying this connection
    pub devices: Vec<String>,
    /// Whether this is a VPN connection
    pub vpn: bool,
    /// Whether this connection owns the default IPv4 route
    pub default4: bool,
    /// Whether this connection owns the default IPv6 route
    pub default6: bool,
}

/// One entry of the modern `AddressData` property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressData {
    pub address: String,
    pub prefix: u32,
}

/// One entry of the modern `RouteData` property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteData {
    pub dest: String,
    pub prefix: u32,
    pub next_hop: Option<String>,
    pub metric: Option<u32>,
}

/// An IPv4 address with prefix and per-address gateway, decoded from the
/// daemon's legacy representation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ipv4Address {
    pub address: Ipv4Addr,
    pub prefix: u32,
    pub gateway: Ipv4Addr,
}

/// An IPv4 route from the legacy `Routes` property.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ipv4Route {
    pub dest: Ipv4Addr,
    pub prefix: u32,
    pub next_hop: Ipv4Addr,
    pub metric: u32,
}

/// An IPv6 address with prefix and per-address gateway.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ipv6Address {
    pub address: Ipv6Addr,
    pub prefix: u32,
    pub gateway: Ipv6Addr,
}

/// Snapshot of an `IP4Config` object.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Ipv4ConfigInfo {
    pub addresses: Vec<Ipv4Address>,
    pub address_data: Vec<AddressData>,
    pub gateway: Option<Ipv4Addr>,
    pub routes: Vec<Ipv4Route>,
    pub route_data: Vec<RouteData>,
    pub nameservers: Vec<Ipv4Addr>,
    pub domains: Vec<String>,
    pub searches: Vec<String>,
    pub dns_options: Vec<String>,
    pub dns_priority: i32,
    pub wins_servers: Vec<Ipv4Addr>,
}

/// Snapshot of an `IP6Config` object.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Ipv6ConfigInfo {
    pub addresses: Vec<Ipv6Address>,
    pub address_data: Vec<AddressData>,
    pub gateway: Option<Ipv6Addr>,
    pub route_data: Vec<RouteData>,
    pub nameservers: Vec<Ipv6Addr>,
    pub domains: Vec<String>,
    pub searches: Vec<String>,
    pub dns_options: Vec<String>,
    pub dns_priority: i32,
}

/// Snapshot of a DHCP lease's option table.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DhcpConfigInfo {
    /// Option name to value, values rendered as strings.
    pub options: HashMap<String, String>,
}

/// Daemon operations guarded by polkit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Permission {
    EnableDisableNetwork,
    EnableDisableWifi,
    EnableDisableWwan,
    EnableDisableWimax,
    SleepWake,
    NetworkControl,
    WifiShareProtected,
    WifiShareOpen,
    WifiScan,
    SettingsModifySystem,
    SettingsModifyOwn,
    SettingsModifyHostname,
    SettingsModifyGlobalDns,
    Reload,
    CheckpointRollback,
    EnableDisableStatistics,
    EnableDisableConnectivityCheck,
    /// A permission name this crate does not know, kept verbatim.
    Other(String),
}

const PERMISSION_PREFIX: &str = "org.freedesktop.NetworkManager.";

impl Permission {
    /// Parses a permission name as reported by `GetPermissions`.
    pub fn parse(name: &str) -> Self {
        let Some(tail) = name.strip_prefix(PERMISSION_PREFIX) else {
            return Self::Other(name.to_owned());
        };
        match tail {
            "enable-disable-network" => Self::EnableDisableNetwork,
            "enable-disable-wifi" => Self::EnableDisableWifi,
            "enable-disable-wwan" => Self::EnableDisableWwan,
            "enable-disable-wimax" => Self::EnableDisableWimax,
            "sleep-wake" => Self::SleepWake,
            "network-control" => Self::NetworkControl,
            "wifi.share.protected" => Self::WifiShareProtected,
            "wifi.share.open" => Self::WifiShareOpen,
            "wifi.scan" => Self::WifiScan,
            "settings.modify.system" => Self::SettingsModifySystem,
            "settings.modify.own" => Self::SettingsModifyOwn,
            "settings.modify.hostname" => Self::SettingsModifyHostname,
            "settings.modify.global-dns" => Self::SettingsModifyGlobalDns,
            "reload" => Self::Reload,
            "checkpoint-rollback" => Self::CheckpointRollback,
            "enable-disable-statistics" => Self::EnableDisableStatistics,
            "enable-disable-connectivity-check" => Self::EnableDisableConnectivityCheck,
            _ => Self::Other(name.to_owned()),
        }
    }
}

impl Display for Permission {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let tail = match self {
            Self::EnableDisableNetwork => "enable-disable-network",
            Self::EnableDisableWifi => "enable-disable-wifi",
            Self::EnableDisableWwan => "enable-disable-wwan",
            Self::EnableDisableWimax => "enable-disable-wimax",
            Self::SleepWake => "sleep-wake",
            Self::NetworkControl => "network-control",
            Self::WifiShareProtected => "wifi.share.protected",
            Self::WifiShareOpen => "wifi.share.open",
            Self::WifiScan => "wifi.scan",
            Self::SettingsModifySystem => "settings.modify.system",
            Self::SettingsModifyOwn => "settings.modify.own",
            Self::SettingsModifyHostname => "settings.modify.hostname",
            Self::SettingsModifyGlobalDns => "settings.modify.global-dns",
            Self::Reload => "reload",
            Self::CheckpointRollback => "checkpoint-rollback",
            Self::EnableDisableStatistics => "enable-disable-statistics",
            Self::EnableDisableConnectivityCheck => "enable-disable-connectivity-check",
            Self::Other(name) => return write!(f, "{name}"),
        };
        write!(f, "{PERMISSION_PREFIX}{tail}")
    }
}

/// Whether the caller holds a [`Permission`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionResult {
    /// Allowed without further interaction.
    Yes,
    /// Denied.
    No,
    /// Allowed after interactive authentication.
    Auth,
    /// The daemon reported something unrecognized.
    Unknown,
}

impl PermissionResult {
    pub fn parse(value: &str) -> Self {
        match value {
            "yes" => Self::Yes,
            "no" => Self::No,
            "auth" => Self::Auth,
            _ => Self::Unknown,
        }
    }
}

impl Display for PermissionResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yes => write!(f, "yes"),
            Self::No => write!(f, "no"),
            Self::Auth => write!(f, "auth"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Typed, read-only view over a profile's [`SettingsMap`].
///
/// Raw access stays available through [`ProfileSettings::raw`]; the
/// accessors cover the keys nearly every profile carries.
#[derive(Debug, Clone)]
pub struct ProfileSettings {
    map: SettingsMap,
}

impl ProfileSettings {
    pub fn new(map: SettingsMap) -> Self {
        Self { map }
    }

    fn connection_str(&self, key: &str) -> Option<String> {
        self.str_value("connection", key)
    }

    fn str_value(&self, section: &str, key: &str) -> Option<String> {
        let value = self.map.get(section)?.get(key)?;
        match &**value {
            Value::Str(s) => Some(s.as_str().to_owned()),
            _ => None,
        }
    }

    /// The profile's human-readable name (`connection.id`).
    pub fn id(&self) -> Option<String> {
        self.connection_str("id")
    }

    /// The profile's uuid (`connection.uuid`).
    pub fn uuid(&self) -> Option<String> {
        self.connection_str("uuid")
    }

    /// The profile's type (`connection.type`), e.g. "802-11-wireless".
    pub fn connection_type(&self) -> Option<String> {
        self.connection_str("type")
    }

    /// The interface the profile is bound to, when restricted.
    pub fn interface_name(&self) -> Option<String> {
        self.connection_str("interface-name")
    }

    /// Whether the profile activates automatically. Missing means yes,
    /// which is the daemon's default.
    pub fn autoconnect(&self) -> bool {
        let value = self
            .map
            .get("connection")
            .and_then(|section| section.get("autoconnect"));
        match value {
            Some(v) => match &**v {
                Value::Bool(b) => *b,
                _ => true,
            },
            None => true,
        }
    }

    /// SSID bytes of a wireless profile, decoded from the byte array in
    /// the `802-11-wireless` section.
    pub fn ssid_bytes(&self) -> Option<Vec<u8>> {
        let value = self.map.get("802-11-wireless")?.get("ssid")?;
        match &**value {
            Value::Array(array) => array
                .iter()
                .map(|item| item.downcast_ref::<u8>().ok())
                .collect(),
            _ => None,
        }
    }

    /// SSID of a wireless profile, decoded for display.
    pub fn ssid(&self) -> Option<String> {
        self.ssid_bytes()
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }

    /// BSSID the profile is locked to, rendered as colon-separated hex
    /// from the byte array in the `802-11-wireless` section.
    pub fn bssid(&self) -> Option<String> {
        let value = self.map.get("802-11-wireless")?.get("bssid")?;
        match &**value {
            Value::Array(array) => {
                let bytes: Option<Vec<u8>> = array
                    .iter()
                    .map(|item| item.downcast_ref::<u8>().ok())
                    .collect();
                Some(mac_to_string(&bytes?))
            }
            _ => None,
        }
    }

    /// The section names present in this profile.
    pub fn sections(&self) -> Vec<&str> {
        self.map.keys().map(String::as_str).collect()
    }

    /// Looks up one section.
    pub fn section(&self, name: &str) -> Option<&HashMap<String, OwnedValue>> {
        self.map.get(name)
    }

    /// The raw settings map.
    pub fn raw(&self) -> &SettingsMap {
        &self.map
    }

    /// Consumes the view, returning the raw settings map.
    pub fn into_raw(self) -> SettingsMap {
        self.map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zvariant::Value;

    fn owned(value: Value<'_>) -> OwnedValue {
        value.try_to_owned().expect("value owns no fds")
    }

    fn sample_settings() -> SettingsMap {
        let mut connection = HashMap::new();
        connection.insert("id".to_owned(), owned(Value::from("Home")));
        connection.insert(
            "uuid".to_owned(),
            owned(Value::from("8a6b0e3d-0000-4444-8888-3dd5d1e62b9a")),
        );
        connection.insert("type".to_owned(), owned(Value::from("802-11-wireless")));
        connection.insert("autoconnect".to_owned(), owned(Value::from(false)));

        let mut wireless = HashMap::new();
        wireless.insert(
            "ssid".to_owned(),
            owned(Value::from(b"HomeNet".to_vec())),
        );
        wireless.insert(
            "bssid".to_owned(),
            owned(Value::from(vec![0xaau8, 0xbb, 0xcc, 0x00, 0x11, 0x22])),
        );

        let mut map = HashMap::new();
        map.insert("connection".to_owned(), connection);
        map.insert("802-11-wireless".to_owned(), wireless);
        map
    }

    #[test]
    fn test_profile_settings_accessors() {
        let view = ProfileSettings::new(sample_settings());
        assert_eq!(view.id().as_deref(), Some("Home"));
        assert_eq!(
            view.uuid().as_deref(),
            Some("8a6b0e3d-0000-4444-8888-3dd5d1e62b9a")
        );
        assert_eq!(view.connection_type().as_deref(), Some("802-11-wireless"));
        assert!(!view.autoconnect());
        assert_eq!(view.ssid().as_deref(), Some("HomeNet"));
        assert_eq!(view.ssid_bytes(), Some(b"HomeNet".to_vec()));
        assert_eq!(view.bssid().as_deref(), Some("AA:BB:CC:00:11:22"));
    }

    #[test]
    fn test_profile_settings_missing_keys() {
        let view = ProfileSettings::new(SettingsMap::new());
        assert_eq!(view.id(), None);
        assert_eq!(view.ssid(), None);
        assert_eq!(view.bssid(), None);
        assert!(view.autoconnect());
        assert!(view.sections().is_empty());
    }

    #[test]
    fn test_profile_settings_sections() {
        let view = ProfileSettings::new(sample_settings());
        let mut sections = view.sections();
        sections.sort_unstable();
        assert_eq!(sections, vec!["802-11-wireless", "connection"]);
        assert!(view.section("connection").is_some());
        assert!(view.section("vpn").is_none());
    }

    #[test]
    fn test_permission_parse_known() {
        assert_eq!(
            Permission::parse("org.freedesktop.NetworkManager.enable-disable-wifi"),
            Permission::EnableDisableWifi
        );
        assert_eq!(
            Permission::parse("org.freedesktop.NetworkManager.settings.modify.system"),
            Permission::SettingsModifySystem
        );
        assert_eq!(
            Permission::parse("org.freedesktop.NetworkManager.network-control"),
            Permission::NetworkControl
        );
    }

    #[test]
    fn test_permission_parse_unknown() {
        let odd = Permission::parse("org.freedesktop.NetworkManager.frobnicate");
        assert_eq!(
            odd,
            Permission::Other("org.freedesktop.NetworkManager.frobnicate".to_owned())
        );
        let foreign = Permission::parse("org.example.something");
        assert_eq!(foreign, Permission::Other("org.example.something".to_owned()));
    }

    #[test]
    fn test_permission_display_round_trip() {
        for name in [
            "org.freedesktop.NetworkManager.enable-disable-network",
            "org.freedesktop.NetworkManager.sleep-wake",
            "org.freedesktop.NetworkManager.wifi.share.open",
            "org.freedesktop.NetworkManager.settings.modify.hostname",
        ] {
            assert_eq!(Permission::parse(name).to_string(), name);
        }
    }

    #[test]
    fn test_permission_result_parse() {
        assert_eq!(PermissionResult::parse("yes"), PermissionResult::Yes);
        assert_eq!(PermissionResult::parse("no"), PermissionResult::No);
        assert_eq!(PermissionResult::parse("auth"), PermissionResult::Auth);
        assert_eq!(PermissionResult::parse("maybe"), PermissionResult::Unknown);
    }

    #[test]
    fn test_error_display() {
        let err = NmError::ObjectVanished("/org/freedesktop/NetworkManager/AccessPoint/7".into());
        assert_eq!(
            err.to_string(),
            "object vanished: /org/freedesktop/NetworkManager/AccessPoint/7"
        );
        assert!(err.is_vanished());

        let err = NmError::Timeout;
        assert_eq!(err.to_string(), "timed out waiting for state change");
        assert!(!err.is_vanished());
    }

    #[test]
    fn test_error_from_zbus() {
        let err: NmError = zbus::Error::InvalidField.into();
        assert!(matches!(err, NmError::Dbus(_)));
    }

    #[test]
    fn test_classify_unrelated_error_stays_dbus() {
        let classified = NmError::classify("/some/path", zbus::Error::InvalidField);
        assert!(matches!(classified, NmError::Dbus(_)));
    }

    #[test]
    fn test_classify_fdo_unknown_object() {
        let raw = zbus::Error::FDO(Box::new(zbus::fdo::Error::UnknownObject(
            "no such object".into(),
        )));
        let classified = NmError::classify("/org/freedesktop/NetworkManager/AccessPoint/3", raw);
        assert!(classified.is_vanished());
    }

    #[test]
    fn test_classify_fdo_access_denied() {
        let raw = zbus::Error::FDO(Box::new(zbus::fdo::Error::AccessDenied(
            "not authorized".into(),
        )));
        let classified = NmError::classify("/org/freedesktop/NetworkManager", raw);
        assert!(matches!(classified, NmError::PermissionDenied(_)));
    }
}
