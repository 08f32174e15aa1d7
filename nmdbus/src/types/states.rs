//! Typed views of NetworkManager's numeric state spaces.
//!
//! Every enum converts from the raw `u32` codes the daemon emits over
//! D-Bus and keeps unrecognized codes in an `Other` variant so newer
//! daemons never break decoding.

use std::fmt::{Display, Formatter};

/// Overall daemon state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NmState {
    /// State is unknown.
    Unknown,
    /// Networking is disabled because the host is suspending.
    Asleep,
    /// No active connections.
    Disconnected,
    /// Active connections are being torn down.
    Disconnecting,
    /// A connection is activating.
    Connecting,
    /// Connected, local link only.
    ConnectedLocal,
    /// Connected, site-level reachability.
    ConnectedSite,
    /// Connected with global reachability.
    ConnectedGlobal,
    /// Unknown state code not mapped to a specific variant.
    Other(u32),
}

impl From<u32> for NmState {
    fn from(code: u32) -> Self {
        match code {
            0 => Self::Unknown,
            10 => Self::Asleep,
            20 => Self::Disconnected,
            30 => Self::Disconnecting,
            40 => Self::Connecting,
            50 => Self::ConnectedLocal,
            60 => Self::ConnectedSite,
            70 => Self::ConnectedGlobal,
            v => Self::Other(v),
        }
    }
}

impl NmState {
    /// True for any of the connected states.
    pub fn is_connected(&self) -> bool {
        matches!(
            self,
            Self::ConnectedLocal | Self::ConnectedSite | Self::ConnectedGlobal
        )
    }
}

impl Display for NmState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Asleep => write!(f, "asleep"),
            Self::Disconnected => write!(f, "disconnected"),
            Self::Disconnecting => write!(f, "disconnecting"),
            Self::Connecting => write!(f, "connecting"),
            Self::ConnectedLocal => write!(f, "connected (local)"),
            Self::ConnectedSite => write!(f, "connected (site)"),
            Self::ConnectedGlobal => write!(f, "connected (global)"),
            Self::Other(v) => write!(f, "unknown state ({v})"),
        }
    }
}

/// Result of the daemon's connectivity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityState {
    Unknown,
    /// No connectivity at all.
    None,
    /// Behind a captive portal.
    Portal,
    /// Link-local or otherwise limited connectivity.
    Limited,
    /// Full internet connectivity.
    Full,
    Other(u32),
}

impl From<u32> for ConnectivityState {
    fn from(code: u32) -> Self {
        match code {
            0 => Self::Unknown,
            1 => Self::None,
            2 => Self::Portal,
            3 => Self::Limited,
            4 => Self::Full,
            v => Self::Other(v),
        }
    }
}

impl Display for ConnectivityState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::None => write!(f, "none"),
            Self::Portal => write!(f, "portal"),
            Self::Limited => write!(f, "limited"),
            Self::Full => write!(f, "full"),
            Self::Other(v) => write!(f, "unknown connectivity ({v})"),
        }
    }
}

/// Hardware kind of a device, from the manager's `DeviceType` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    Unknown,
    Ethernet,
    Wifi,
    Unused1,
    Unused2,
    Bluetooth,
    OlpcMesh,
    Wimax,
    Modem,
    Infiniband,
    Bond,
    Vlan,
    Adsl,
    Bridge,
    Generic,
    Team,
    Tun,
    IpTunnel,
    Macvlan,
    Vxlan,
    Veth,
    Other(u32),
}

impl From<u32> for DeviceKind {
    fn from(code: u32) -> Self {
        match code {
            0 => Self::Unknown,
            1 => Self::Ethernet,
            2 => Self::Wifi,
            3 => Self::Unused1,
            4 => Self::Unused2,
            5 => Self::Bluetooth,
            6 => Self::OlpcMesh,
            7 => Self::Wimax,
            8 => Self::Modem,
            9 => Self::Infiniband,
            10 => Self::Bond,
            11 => Self::Vlan,
            12 => Self::Adsl,
            13 => Self::Bridge,
            14 => Self::Generic,
            15 => Self::Team,
            16 => Self::Tun,
            17 => Self::IpTunnel,
            18 => Self::Macvlan,
            19 => Self::Vxlan,
            20 => Self::Veth,
            v => Self::Other(v),
        }
    }
}

impl DeviceKind {
    /// The `connection.type` setting value used by profiles for this kind,
    /// when one exists.
    pub fn connection_type(&self) -> Option<&'static str> {
        match self {
            Self::Ethernet => Some("802-3-ethernet"),
            Self::Wifi => Some("802-11-wireless"),
            Self::Bluetooth => Some("bluetooth"),
            Self::OlpcMesh => Some("802-11-olpc-mesh"),
            Self::Wimax => Some("wimax"),
            Self::Modem => Some("gsm"),
            Self::Infiniband => Some("infiniband"),
            Self::Bond => Some("bond"),
            Self::Vlan => Some("vlan"),
            Self::Adsl => Some("adsl"),
            Self::Bridge => Some("bridge"),
            Self::Team => Some("team"),
            Self::Tun => Some("tun"),
            Self::IpTunnel => Some("ip-tunnel"),
            Self::Macvlan => Some("macvlan"),
            Self::Vxlan => Some("vxlan"),
            Self::Veth => Some("veth"),
            _ => None,
        }
    }
}

impl Display for DeviceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Ethernet => write!(f, "ethernet"),
            Self::Wifi => write!(f, "wifi"),
            Self::Unused1 => write!(f, "unused"),
            Self::Unused2 => write!(f, "unused"),
            Self::Bluetooth => write!(f, "bluetooth"),
            Self::OlpcMesh => write!(f, "olpc mesh"),
            Self::Wimax => write!(f, "wimax"),
            Self::Modem => write!(f, "modem"),
            Self::Infiniband => write!(f, "infiniband"),
            Self::Bond => write!(f, "bond"),
            Self::Vlan => write!(f, "vlan"),
            Self::Adsl => write!(f, "adsl"),
            Self::Bridge => write!(f, "bridge"),
            Self::Generic => write!(f, "generic"),
            Self::Team => write!(f, "team"),
            Self::Tun => write!(f, "tun"),
            Self::IpTunnel => write!(f, "ip tunnel"),
            Self::Macvlan => write!(f, "macvlan"),
            Self::Vxlan => write!(f, "vxlan"),
            Self::Veth => write!(f, "veth"),
            Self::Other(v) => write!(f, "unknown device type ({v})"),
        }
    }
}

/// Lifecycle state of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceState {
    Unknown,
    /// Not managed by NetworkManager.
    Unmanaged,
    /// Managed but cannot activate (missing firmware, rfkill, no carrier).
    Unavailable,
    /// Ready to activate.
    Disconnected,
    /// Preparing to connect.
    Prepare,
    /// Configuring the link layer.
    Config,
    /// Waiting for secrets.
    NeedAuth,
    /// Requesting IP configuration.
    IpConfig,
    /// Checking whether further action is required.
    IpCheck,
    /// Waiting for a secondary connection.
    Secondaries,
    /// Fully activated.
    Activated,
    /// Tearing down the connection.
    Deactivating,
    /// Activation failed.
    Failed,
    /// Unknown state code not mapped to a specific variant.
    Other(u32),
}

impl From<u32> for DeviceState {
    fn from(code: u32) -> Self {
        match code {
            0 => Self::Unknown,
            10 => Self::Unmanaged,
            20 => Self::Unavailable,
            30 => Self::Disconnected,
            40 => Self::Prepare,
            50 => Self::Config,
            60 => Self::NeedAuth,
            70 => Self::IpConfig,
            80 => Self::IpCheck,
            90 => Self::Secondaries,
            100 => Self::Activated,
            110 => Self::Deactivating,
            120 => Self::Failed,
            v => Self::Other(v),
        }
    }
}

impl Display for DeviceState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Unmanaged => write!(f, "unmanaged"),
            Self::Unavailable => write!(f, "unavailable"),
            Self::Disconnected => write!(f, "disconnected"),
            Self::Prepare => write!(f, "preparing"),
            Self::Config => write!(f, "configuring"),
            Self::NeedAuth => write!(f, "need auth"),
            Self::IpConfig => write!(f, "ip config"),
            Self::IpCheck => write!(f, "ip check"),
            Self::Secondaries => write!(f, "secondaries"),
            Self::Activated => write!(f, "activated"),
            Self::Deactivating => write!(f, "deactivating"),
            Self::Failed => write!(f, "failed"),
            Self::Other(v) => write!(f, "unknown state ({v})"),
        }
    }
}

/// Why a device entered its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceStateReason {
    None,
    Unknown,
    NowManaged,
    NowUnmanaged,
    ConfigFailed,
    IpConfigUnavailable,
    IpConfigExpired,
    NoSecrets,
    SupplicantDisconnect,
    SupplicantConfigFailed,
    SupplicantFailed,
    SupplicantTimeout,
    PppStartFailed,
    PppDisconnect,
    PppFailed,
    DhcpStartFailed,
    DhcpError,
    DhcpFailed,
    SharedStartFailed,
    SharedFailed,
    AutoipStartFailed,
    AutoipError,
    AutoipFailed,
    ModemBusy,
    ModemNoDialTone,
    ModemNoCarrier,
    ModemDialTimeout,
    ModemDialFailed,
    ModemInitFailed,
    GsmApnFailed,
    GsmRegistrationNotSearching,
    GsmRegistrationDenied,
    GsmRegistrationTimeout,
    GsmRegistrationFailed,
    GsmPinCheckFailed,
    FirmwareMissing,
    Removed,
    Sleeping,
    ConnectionRemoved,
    UserRequested,
    Carrier,
    ConnectionAssumed,
    SupplicantAvailable,
    ModemNotFound,
    BtFailed,
    GsmSimNotInserted,
    GsmSimPinRequired,
    GsmSimPukRequired,
    GsmSimWrong,
    InfinibandMode,
    DependencyFailed,
    Br2684Failed,
    Other(u32),
}

impl From<u32> for DeviceStateReason {
    fn from(code: u32) -> Self {
        match code {
            0 => Self::None,
            1 => Self::Unknown,
            2 => Self::NowManaged,
            3 => Self::NowUnmanaged,
            4 => Self::ConfigFailed,
            5 => Self::IpConfigUnavailable,
            6 => Self::IpConfigExpired,
            7 => Self::NoSecrets,
            8 => Self::SupplicantDisconnect,
            9 => Self::SupplicantConfigFailed,
            10 => Self::SupplicantFailed,
            11 => Self::SupplicantTimeout,
            12 => Self::PppStartFailed,
            13 => Self::PppDisconnect,
            14 => Self::PppFailed,
            15 => Self::DhcpStartFailed,
            16 => Self::DhcpError,
            17 => Self::DhcpFailed,
            18 => Self::SharedStartFailed,
            19 => Self::SharedFailed,
            20 => Self::AutoipStartFailed,
            21 => Self::AutoipError,
            22 => Self::AutoipFailed,
            23 => Self::ModemBusy,
            24 => Self::ModemNoDialTone,
            25 => Self::ModemNoCarrier,
            26 => Self::ModemDialTimeout,
            27 => Self::ModemDialFailed,
            28 => Self::ModemInitFailed,
            29 => Self::GsmApnFailed,
            30 => Self::GsmRegistrationNotSearching,
            31 => Self::GsmRegistrationDenied,
            32 => Self::GsmRegistrationTimeout,
            33 => Self::GsmRegistrationFailed,
            34 => Self::GsmPinCheckFailed,
            35 => Self::FirmwareMissing,
            36 => Self::Removed,
            37 => Self::Sleeping,
            38 => Self::ConnectionRemoved,
            39 => Self::UserRequested,
            40 => Self::Carrier,
            41 => Self::ConnectionAssumed,
            42 => Self::SupplicantAvailable,
            43 => Self::ModemNotFound,
            44 => Self::BtFailed,
            45 => Self::GsmSimNotInserted,
            46 => Self::GsmSimPinRequired,
            47 => Self::GsmSimPukRequired,
            48 => Self::GsmSimWrong,
            49 => Self::InfinibandMode,
            50 => Self::DependencyFailed,
            51 => Self::Br2684Failed,
            v => Self::Other(v),
        }
    }
}

impl DeviceStateReason {
    /// True for reasons that indicate bad or missing credentials.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            Self::NoSecrets
                | Self::SupplicantDisconnect
                | Self::SupplicantConfigFailed
                | Self::SupplicantFailed
                | Self::SupplicantTimeout
        )
    }
}

impl Display for DeviceStateReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::None => "none",
            Self::Unknown => "unknown",
            Self::NowManaged => "device is now managed",
            Self::NowUnmanaged => "device is now unmanaged",
            Self::ConfigFailed => "configuration failed",
            Self::IpConfigUnavailable => "ip configuration unavailable",
            Self::IpConfigExpired => "ip configuration expired",
            Self::NoSecrets => "secrets were required but not provided",
            Self::SupplicantDisconnect => "supplicant disconnected",
            Self::SupplicantConfigFailed => "supplicant configuration failed",
            Self::SupplicantFailed => "supplicant failed",
            Self::SupplicantTimeout => "supplicant timed out",
            Self::PppStartFailed => "ppp failed to start",
            Self::PppDisconnect => "ppp disconnected",
            Self::PppFailed => "ppp failed",
            Self::DhcpStartFailed => "dhcp client failed to start",
            Self::DhcpError => "dhcp client error",
            Self::DhcpFailed => "dhcp client failed",
            Self::SharedStartFailed => "shared connection service failed to start",
            Self::SharedFailed => "shared connection service failed",
            Self::AutoipStartFailed => "autoip service failed to start",
            Self::AutoipError => "autoip service error",
            Self::AutoipFailed => "autoip service failed",
            Self::ModemBusy => "modem busy",
            Self::ModemNoDialTone => "modem has no dial tone",
            Self::ModemNoCarrier => "modem has no carrier",
            Self::ModemDialTimeout => "modem dial timed out",
            Self::ModemDialFailed => "modem dial failed",
            Self::ModemInitFailed => "modem initialization failed",
            Self::GsmApnFailed => "gsm apn selection failed",
            Self::GsmRegistrationNotSearching => "gsm modem not searching for networks",
            Self::GsmRegistrationDenied => "gsm registration denied",
            Self::GsmRegistrationTimeout => "gsm registration timed out",
            Self::GsmRegistrationFailed => "gsm registration failed",
            Self::GsmPinCheckFailed => "gsm pin check failed",
            Self::FirmwareMissing => "firmware missing",
            Self::Removed => "device removed",
            Self::Sleeping => "networking sleeping",
            Self::ConnectionRemoved => "connection removed",
            Self::UserRequested => "user requested",
            Self::Carrier => "carrier changed",
            Self::ConnectionAssumed => "existing connection assumed",
            Self::SupplicantAvailable => "supplicant now available",
            Self::ModemNotFound => "modem not found",
            Self::BtFailed => "bluetooth connection failed",
            Self::GsmSimNotInserted => "gsm sim not inserted",
            Self::GsmSimPinRequired => "gsm sim pin required",
            Self::GsmSimPukRequired => "gsm sim puk required",
            Self::GsmSimWrong => "gsm sim wrong",
            Self::InfinibandMode => "infiniband mode unsupported",
            Self::DependencyFailed => "dependency failed",
            Self::Br2684Failed => "br2684 bridge failed",
            Self::Other(v) => return write!(f, "unknown reason ({v})"),
        };
        write!(f, "{text}")
    }
}

/// Lifecycle state of an active connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveConnectionState {
    /// Connection state is unknown.
    Unknown,
    /// Connection is activating (connecting).
    Activating,
    /// Connection is fully activated (connected).
    Activated,
    /// Connection is deactivating (disconnecting).
    Deactivating,
    /// Connection is fully deactivated (disconnected).
    Deactivated,
    /// Unknown state code not mapped to a specific variant.
    Other(u32),
}

impl From<u32> for ActiveConnectionState {
    fn from(code: u32) -> Self {
        match code {
            0 => Self::Unknown,
            1 => Self::Activating,
            2 => Self::Activated,
            3 => Self::Deactivating,
            4 => Self::Deactivated,
            v => Self::Other(v),
        }
    }
}

impl Display for ActiveConnectionState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Activating => write!(f, "activating"),
            Self::Activated => write!(f, "activated"),
            Self::Deactivating => write!(f, "deactivating"),
            Self::Deactivated => write!(f, "deactivated"),
            Self::Other(v) => write!(f, "unknown state ({v})"),
        }
    }
}

/// Why an active connection changed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveConnectionStateReason {
    Unknown,
    None,
    UserDisconnected,
    DeviceDisconnected,
    ServiceStopped,
    IpConfigInvalid,
    ConnectTimeout,
    ServiceStartTimeout,
    ServiceStartFailed,
    NoSecrets,
    LoginFailed,
    ConnectionRemoved,
    DependencyFailed,
    DeviceRealizeFailed,
    DeviceRemoved,
    Other(u32),
}

impl From<u32> for ActiveConnectionStateReason {
    fn from(code: u32) -> Self {
        match code {
            0 => Self::Unknown,
            1 => Self::None,
            2 => Self::UserDisconnected,
            3 => Self::DeviceDisconnected,
            4 => Self::ServiceStopped,
            5 => Self::IpConfigInvalid,
            6 => Self::ConnectTimeout,
            7 => Self::ServiceStartTimeout,
            8 => Self::ServiceStartFailed,
            9 => Self::NoSecrets,
            10 => Self::LoginFailed,
            11 => Self::ConnectionRemoved,
            12 => Self::DependencyFailed,
            13 => Self::DeviceRealizeFailed,
            14 => Self::DeviceRemoved,
            v => Self::Other(v),
        }
    }
}

impl Display for ActiveConnectionStateReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::None => write!(f, "none"),
            Self::UserDisconnected => write!(f, "user disconnected"),
            Self::DeviceDisconnected => write!(f, "device disconnected"),
            Self::ServiceStopped => write!(f, "service stopped"),
            Self::IpConfigInvalid => write!(f, "invalid ip configuration"),
            Self::ConnectTimeout => write!(f, "connect timed out"),
            Self::ServiceStartTimeout => write!(f, "service start timed out"),
            Self::ServiceStartFailed => write!(f, "service failed to start"),
            Self::NoSecrets => write!(f, "no secrets provided"),
            Self::LoginFailed => write!(f, "login failed"),
            Self::ConnectionRemoved => write!(f, "connection removed"),
            Self::DependencyFailed => write!(f, "dependency failed"),
            Self::DeviceRealizeFailed => write!(f, "device realization failed"),
            Self::DeviceRemoved => write!(f, "device removed"),
            Self::Other(v) => write!(f, "unknown reason ({v})"),
        }
    }
}

/// Lifecycle state of a VPN connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VpnConnectionState {
    Unknown,
    /// The VPN is preparing to connect.
    Prepare,
    /// The VPN needs secrets.
    NeedAuth,
    /// The VPN service is connecting.
    Connect,
    /// Fetching IP configuration from the VPN service.
    IpConfigGet,
    /// The VPN is up.
    Activated,
    /// The VPN failed.
    Failed,
    /// The VPN is disconnected.
    Disconnected,
    Other(u32),
}

impl From<u32> for VpnConnectionState {
    fn from(code: u32) -> Self {
        match code {
            0 => Self::Unknown,
            1 => Self::Prepare,
            2 => Self::NeedAuth,
            3 => Self::Connect,
            4 => Self::IpConfigGet,
            5 => Self::Activated,
            6 => Self::Failed,
            7 => Self::Disconnected,
            v => Self::Other(v),
        }
    }
}

impl Display for VpnConnectionState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Prepare => write!(f, "preparing"),
            Self::NeedAuth => write!(f, "need auth"),
            Self::Connect => write!(f, "connecting"),
            Self::IpConfigGet => write!(f, "getting ip configuration"),
            Self::Activated => write!(f, "activated"),
            Self::Failed => write!(f, "failed"),
            Self::Disconnected => write!(f, "disconnected"),
            Self::Other(v) => write!(f, "unknown state ({v})"),
        }
    }
}

/// Why a VPN connection changed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VpnConnectionStateReason {
    Unknown,
    None,
    UserDisconnected,
    DeviceDisconnected,
    ServiceStopped,
    IpConfigInvalid,
    ConnectTimeout,
    ServiceStartTimeout,
    ServiceStartFailed,
    NoSecrets,
    LoginFailed,
    ConnectionRemoved,
    Other(u32),
}

impl From<u32> for VpnConnectionStateReason {
    fn from(code: u32) -> Self {
        match code {
            0 => Self::Unknown,
            1 => Self::None,
            2 => Self::UserDisconnected,
            3 => Self::DeviceDisconnected,
            4 => Self::ServiceStopped,
            5 => Self::IpConfigInvalid,
            6 => Self::ConnectTimeout,
            7 => Self::ServiceStartTimeout,
            8 => Self::ServiceStartFailed,
            9 => Self::NoSecrets,
            10 => Self::LoginFailed,
            11 => Self::ConnectionRemoved,
            v => Self::Other(v),
        }
    }
}

impl Display for VpnConnectionStateReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::None => write!(f, "none"),
            Self::UserDisconnected => write!(f, "user disconnected"),
            Self::DeviceDisconnected => write!(f, "device disconnected"),
            Self::ServiceStopped => write!(f, "service stopped"),
            Self::IpConfigInvalid => write!(f, "invalid ip configuration"),
            Self::ConnectTimeout => write!(f, "connect timed out"),
            Self::ServiceStartTimeout => write!(f, "service start timed out"),
            Self::ServiceStartFailed => write!(f, "service failed to start"),
            Self::NoSecrets => write!(f, "no secrets provided"),
            Self::LoginFailed => write!(f, "login failed"),
            Self::ConnectionRemoved => write!(f, "connection removed"),
            Self::Other(v) => write!(f, "unknown reason ({v})"),
        }
    }
}

/// 802.11 operating mode of a device or access point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WirelessMode {
    Unknown,
    Adhoc,
    Infra,
    Ap,
    Other(u32),
}

impl From<u32> for WirelessMode {
    fn from(code: u32) -> Self {
        match code {
            0 => Self::Unknown,
            1 => Self::Adhoc,
            2 => Self::Infra,
            3 => Self::Ap,
            v => Self::Other(v),
        }
    }
}

impl Display for WirelessMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Adhoc => write!(f, "adhoc"),
            Self::Infra => write!(f, "infrastructure"),
            Self::Ap => write!(f, "access point"),
            Self::Other(v) => write!(f, "unknown mode ({v})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nm_state_from_u32() {
        assert_eq!(NmState::from(0), NmState::Unknown);
        assert_eq!(NmState::from(20), NmState::Disconnected);
        assert_eq!(NmState::from(40), NmState::Connecting);
        assert_eq!(NmState::from(70), NmState::ConnectedGlobal);
        assert_eq!(NmState::from(99), NmState::Other(99));
    }

    #[test]
    fn test_nm_state_is_connected() {
        assert!(NmState::ConnectedLocal.is_connected());
        assert!(NmState::ConnectedSite.is_connected());
        assert!(NmState::ConnectedGlobal.is_connected());
        assert!(!NmState::Connecting.is_connected());
        assert!(!NmState::Disconnected.is_connected());
    }

    #[test]
    fn test_device_kind_from_u32() {
        assert_eq!(DeviceKind::from(1), DeviceKind::Ethernet);
        assert_eq!(DeviceKind::from(2), DeviceKind::Wifi);
        assert_eq!(DeviceKind::from(5), DeviceKind::Bluetooth);
        assert_eq!(DeviceKind::from(7), DeviceKind::Wimax);
        assert_eq!(DeviceKind::from(10), DeviceKind::Bond);
        assert_eq!(DeviceKind::from(11), DeviceKind::Vlan);
        assert_eq!(DeviceKind::from(12), DeviceKind::Adsl);
        assert_eq!(DeviceKind::from(13), DeviceKind::Bridge);
        assert_eq!(DeviceKind::from(16), DeviceKind::Tun);
        assert_eq!(DeviceKind::from(20), DeviceKind::Veth);
        assert_eq!(DeviceKind::from(500), DeviceKind::Other(500));
    }

    #[test]
    fn test_device_kind_connection_type() {
        assert_eq!(DeviceKind::Ethernet.connection_type(), Some("802-3-ethernet"));
        assert_eq!(DeviceKind::Wifi.connection_type(), Some("802-11-wireless"));
        assert_eq!(DeviceKind::Vlan.connection_type(), Some("vlan"));
        assert_eq!(DeviceKind::Unknown.connection_type(), None);
        assert_eq!(DeviceKind::Other(77).connection_type(), None);
    }

    #[test]
    fn test_device_state_from_u32() {
        assert_eq!(DeviceState::from(10), DeviceState::Unmanaged);
        assert_eq!(DeviceState::from(30), DeviceState::Disconnected);
        assert_eq!(DeviceState::from(60), DeviceState::NeedAuth);
        assert_eq!(DeviceState::from(100), DeviceState::Activated);
        assert_eq!(DeviceState::from(120), DeviceState::Failed);
        assert_eq!(DeviceState::from(45), DeviceState::Other(45));
    }

    #[test]
    fn test_device_state_reason_bounds() {
        assert_eq!(DeviceStateReason::from(0), DeviceStateReason::None);
        assert_eq!(DeviceStateReason::from(7), DeviceStateReason::NoSecrets);
        assert_eq!(DeviceStateReason::from(39), DeviceStateReason::UserRequested);
        assert_eq!(DeviceStateReason::from(51), DeviceStateReason::Br2684Failed);
        assert_eq!(DeviceStateReason::from(52), DeviceStateReason::Other(52));
    }

    #[test]
    fn test_device_state_reason_auth_failure() {
        assert!(DeviceStateReason::NoSecrets.is_auth_failure());
        assert!(DeviceStateReason::SupplicantFailed.is_auth_failure());
        assert!(!DeviceStateReason::Carrier.is_auth_failure());
        assert!(!DeviceStateReason::UserRequested.is_auth_failure());
    }

    #[test]
    fn test_active_connection_state_from_u32() {
        assert_eq!(ActiveConnectionState::from(1), ActiveConnectionState::Activating);
        assert_eq!(ActiveConnectionState::from(2), ActiveConnectionState::Activated);
        assert_eq!(ActiveConnectionState::from(4), ActiveConnectionState::Deactivated);
        assert_eq!(ActiveConnectionState::from(9), ActiveConnectionState::Other(9));
    }

    #[test]
    fn test_vpn_state_from_u32() {
        assert_eq!(VpnConnectionState::from(2), VpnConnectionState::NeedAuth);
        assert_eq!(VpnConnectionState::from(5), VpnConnectionState::Activated);
        assert_eq!(VpnConnectionState::from(7), VpnConnectionState::Disconnected);
        assert_eq!(VpnConnectionState::from(8), VpnConnectionState::Other(8));
    }

    #[test]
    fn test_vpn_state_reason_display() {
        assert_eq!(VpnConnectionStateReason::from(9).to_string(), "no secrets provided");
        assert_eq!(VpnConnectionStateReason::from(10).to_string(), "login failed");
    }

    #[test]
    fn test_wireless_mode_display() {
        assert_eq!(WirelessMode::from(1).to_string(), "adhoc");
        assert_eq!(WirelessMode::from(2).to_string(), "infrastructure");
        assert_eq!(WirelessMode::from(3).to_string(), "access point");
    }

    #[test]
    fn test_connectivity_from_u32() {
        assert_eq!(ConnectivityState::from(2), ConnectivityState::Portal);
        assert_eq!(ConnectivityState::from(4), ConnectivityState::Full);
        assert_eq!(ConnectivityState::from(11), ConnectivityState::Other(11));
    }

    #[test]
    fn test_state_display_strings() {
        assert_eq!(NmState::ConnectedGlobal.to_string(), "connected (global)");
        assert_eq!(DeviceState::NeedAuth.to_string(), "need auth");
        assert_eq!(DeviceStateReason::Other(200).to_string(), "unknown reason (200)");
        assert_eq!(DeviceKind::Wifi.to_string(), "wifi");
    }
}
