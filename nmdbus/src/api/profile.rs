//! Connection profile builder.
//!
//! Builds the nested settings map `Settings.AddConnection` and
//! `AddAndActivateConnection` expect, with validation of the fields the
//! daemon would otherwise reject asynchronously mid-activation (SSID
//! length, PSK length, MAC syntax).
//!
//! # Example
//!
//! ```no_run
//! use nmdbus::ProfileBuilder;
//!
//! # fn example() -> nmdbus::Result<()> {
//! let settings = ProfileBuilder::wifi_psk("HomeNet", "correct horse battery")
//!     .autoconnect(true)
//!     .ipv4_auto()
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::net::Ipv4Addr;

use uuid::Uuid;
use zvariant::{OwnedValue, Value};

use crate::api::models::{NmError, SettingsMap};
use crate::util::convert::{ipv4_to_cell, mac_from_string};
use crate::Result;

/// Wi-Fi band restriction for a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WifiBand {
    /// 2.4 GHz ("bg").
    Bg,
    /// 5 GHz ("a").
    A,
}

impl WifiBand {
    fn setting_value(self) -> &'static str {
        match self {
            Self::Bg => "bg",
            Self::A => "a",
        }
    }
}

/// Outer EAP authentication method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EapMethod {
    Peap,
    Ttls,
    Pwd,
    Tls,
}

impl EapMethod {
    fn setting_value(self) -> &'static str {
        match self {
            Self::Peap => "peap",
            Self::Ttls => "ttls",
            Self::Pwd => "pwd",
            Self::Tls => "tls",
        }
    }
}

/// Inner (phase 2) authentication method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase2 {
    Mschapv2,
    Pap,
    Chap,
    Gtc,
    Md5,
}

impl Phase2 {
    fn setting_value(self) -> &'static str {
        match self {
            Self::Mschapv2 => "mschapv2",
            Self::Pap => "pap",
            Self::Chap => "chap",
            Self::Gtc => "gtc",
            Self::Md5 => "md5",
        }
    }
}

/// Options for WPA-EAP (enterprise) authentication.
#[derive(Debug, Clone)]
pub struct EapOptions {
    identity: String,
    password: String,
    method: EapMethod,
    phase2: Option<Phase2>,
    anonymous_identity: Option<String>,
    domain_suffix_match: Option<String>,
    system_ca_certs: bool,
}

impl EapOptions {
    /// EAP credentials with the common PEAP/MSCHAPv2 combination.
    pub fn new(identity: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            password: password.into(),
            method: EapMethod::Peap,
            phase2: Some(Phase2::Mschapv2),
            anonymous_identity: None,
            domain_suffix_match: None,
            system_ca_certs: false,
        }
    }

    /// Overrides the outer EAP method.
    pub fn with_method(mut self, method: EapMethod) -> Self {
        self.method = method;
        self
    }

    /// Overrides the phase 2 (inner) method.
    pub fn with_phase2(mut self, phase2: Phase2) -> Self {
        self.phase2 = Some(phase2);
        self
    }

    /// Sets the anonymous outer identity.
    pub fn with_anonymous_identity(mut self, identity: impl Into<String>) -> Self {
        self.anonymous_identity = Some(identity.into());
        self
    }

    /// Requires the server certificate's domain to match.
    pub fn with_domain_suffix_match(mut self, domain: impl Into<String>) -> Self {
        self.domain_suffix_match = Some(domain.into());
        self
    }

    /// Validates the server certificate against the system CA store.
    pub fn with_system_ca_certs(mut self, enabled: bool) -> Self {
        self.system_ca_certs = enabled;
        self
    }
}

#[derive(Debug, Clone)]
enum WifiSecurity {
    Open,
    Psk(String),
    Eap(EapOptions),
}

#[derive(Debug, Clone)]
struct WifiSection {
    ssid: String,
    security: WifiSecurity,
    hidden: bool,
    band: Option<WifiBand>,
    bssid: Option<String>,
}

#[derive(Debug, Clone, Default)]
enum IpMethod {
    #[default]
    Auto,
    Manual {
        addresses: Vec<(Ipv4Addr, u32)>,
        gateway: Option<Ipv4Addr>,
        dns: Vec<Ipv4Addr>,
    },
    Disabled,
}

/// Builds connection profile settings maps.
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    connection_type: &'static str,
    id: String,
    uuid: Option<Uuid>,
    autoconnect: Option<bool>,
    autoconnect_priority: Option<i32>,
    interface_name: Option<String>,
    wifi: Option<WifiSection>,
    ipv4: IpMethod,
    ipv6_ignore: bool,
}

impl ProfileBuilder {
    fn new(connection_type: &'static str, id: String, wifi: Option<WifiSection>) -> Self {
        Self {
            connection_type,
            id,
            uuid: None,
            autoconnect: None,
            autoconnect_priority: None,
            interface_name: None,
            wifi,
            ipv4: IpMethod::Auto,
            ipv6_ignore: false,
        }
    }

    /// A Wi-Fi profile for an open (unsecured) network.
    pub fn wifi_open(ssid: impl Into<String>) -> Self {
        let ssid = ssid.into();
        Self::new(
            "802-11-wireless",
            ssid.clone(),
            Some(WifiSection {
                ssid,
                security: WifiSecurity::Open,
                hidden: false,
                band: None,
                bssid: None,
            }),
        )
    }

    /// A Wi-Fi profile secured with a pre-shared key (WPA2/WPA3).
    pub fn wifi_psk(ssid: impl Into<String>, psk: impl Into<String>) -> Self {
        let ssid = ssid.into();
        Self::new(
            "802-11-wireless",
            ssid.clone(),
            Some(WifiSection {
                ssid,
                security: WifiSecurity::Psk(psk.into()),
                hidden: false,
                band: None,
                bssid: None,
            }),
        )
    }

    /// A Wi-Fi profile with WPA-EAP (enterprise) authentication.
    pub fn wifi_eap(ssid: impl Into<String>, options: EapOptions) -> Self {
        let ssid = ssid.into();
        Self::new(
            "802-11-wireless",
            ssid.clone(),
            Some(WifiSection {
                ssid,
                security: WifiSecurity::Eap(options),
                hidden: false,
                band: None,
                bssid: None,
            }),
        )
    }

    /// An ethernet profile.
    pub fn ethernet(id: impl Into<String>) -> Self {
        Self::new("802-3-ethernet", id.into(), None)
    }

    /// Overrides the human-readable profile name; defaults to the SSID
    /// for Wi-Fi profiles.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Pins the profile uuid; a random v4 uuid is generated otherwise.
    pub fn uuid(mut self, uuid: Uuid) -> Self {
        self.uuid = Some(uuid);
        self
    }

    /// Whether the profile activates automatically.
    pub fn autoconnect(mut self, enabled: bool) -> Self {
        self.autoconnect = Some(enabled);
        self
    }

    /// Priority among autoconnect candidates; higher wins.
    pub fn autoconnect_priority(mut self, priority: i32) -> Self {
        self.autoconnect_priority = Some(priority);
        self
    }

    /// Restricts the profile to one interface.
    pub fn interface_name(mut self, name: impl Into<String>) -> Self {
        self.interface_name = Some(name.into());
        self
    }

    /// Marks the network as hidden (not broadcasting its SSID).
    pub fn hidden(mut self, hidden: bool) -> Self {
        if let Some(wifi) = self.wifi.as_mut() {
            wifi.hidden = hidden;
        }
        self
    }

    /// Restricts the profile to one band.
    pub fn band(mut self, band: WifiBand) -> Self {
        if let Some(wifi) = self.wifi.as_mut() {
            wifi.band = Some(band);
        }
        self
    }

    /// Locks the profile to a specific access point by BSSID.
    pub fn bssid(mut self, bssid: impl Into<String>) -> Self {
        if let Some(wifi) = self.wifi.as_mut() {
            wifi.bssid = Some(bssid.into());
        }
        self
    }

    /// Automatic (DHCP) IPv4 configuration. The default.
    pub fn ipv4_auto(mut self) -> Self {
        self.ipv4 = IpMethod::Auto;
        self
    }

    /// Static IPv4 configuration.
    pub fn ipv4_manual(
        mut self,
        addresses: Vec<(Ipv4Addr, u32)>,
        gateway: Option<Ipv4Addr>,
        dns: Vec<Ipv4Addr>,
    ) -> Self {
        self.ipv4 = IpMethod::Manual {
            addresses,
            gateway,
            dns,
        };
        self
    }

    /// Disables IPv4 for this profile.
    pub fn ipv4_disabled(mut self) -> Self {
        self.ipv4 = IpMethod::Disabled;
        self
    }

    /// Ignores IPv6 instead of autoconfiguring it.
    pub fn ipv6_ignore(mut self) -> Self {
        self.ipv6_ignore = true;
        self
    }

    /// Validates the accumulated settings and produces the settings map.
    pub fn build(self) -> Result<SettingsMap> {
        let mut map = SettingsMap::new();

        let mut connection = HashMap::new();
        connection.insert("type".to_owned(), owned(Value::from(self.connection_type))?);
        connection.insert("id".to_owned(), owned(Value::from(self.id.clone()))?);
        connection.insert(
            "uuid".to_owned(),
            owned(Value::from(
                self.uuid.unwrap_or_else(Uuid::new_v4).to_string(),
            ))?,
        );
        if let Some(autoconnect) = self.autoconnect {
            connection.insert("autoconnect".to_owned(), owned(Value::from(autoconnect))?);
        }
        if let Some(priority) = self.autoconnect_priority {
            connection.insert(
                "autoconnect-priority".to_owned(),
                owned(Value::from(priority))?,
            );
        }
        if let Some(iface) = self.interface_name {
            connection.insert("interface-name".to_owned(), owned(Value::from(iface))?);
        }
        map.insert("connection".to_owned(), connection);

        if let Some(wifi) = self.wifi {
            validate_ssid(&wifi.ssid)?;

            let mut wireless = HashMap::new();
            wireless.insert(
                "ssid".to_owned(),
                owned(Value::from(wifi.ssid.as_bytes().to_vec()))?,
            );
            wireless.insert("mode".to_owned(), owned(Value::from("infrastructure"))?);
            if wifi.hidden {
                wireless.insert("hidden".to_owned(), owned(Value::from(true))?);
            }
            if let Some(band) = wifi.band {
                wireless.insert("band".to_owned(), owned(Value::from(band.setting_value()))?);
            }
            if let Some(bssid) = wifi.bssid {
                let bytes = mac_from_string(&bssid)?;
                wireless.insert("bssid".to_owned(), owned(Value::from(bytes))?);
            }

            match wifi.security {
                WifiSecurity::Open => {}
                WifiSecurity::Psk(psk) => {
                    validate_psk(&psk)?;
                    wireless.insert(
                        "security".to_owned(),
                        owned(Value::from("802-11-wireless-security"))?,
                    );

                    let mut security = HashMap::new();
                    security.insert("key-mgmt".to_owned(), owned(Value::from("wpa-psk"))?);
                    security.insert("psk".to_owned(), owned(Value::from(psk))?);
                    security.insert("auth-alg".to_owned(), owned(Value::from("open"))?);
                    map.insert("802-11-wireless-security".to_owned(), security);
                }
                WifiSecurity::Eap(eap) => {
                    wireless.insert(
                        "security".to_owned(),
                        owned(Value::from("802-11-wireless-security"))?,
                    );

                    let mut security = HashMap::new();
                    security.insert("key-mgmt".to_owned(), owned(Value::from("wpa-eap"))?);
                    map.insert("802-11-wireless-security".to_owned(), security);

                    let mut dot1x = HashMap::new();
                    dot1x.insert(
                        "eap".to_owned(),
                        owned(Value::from(vec![eap.method.setting_value().to_owned()]))?,
                    );
                    dot1x.insert("identity".to_owned(), owned(Value::from(eap.identity))?);
                    dot1x.insert("password".to_owned(), owned(Value::from(eap.password))?);
                    if let Some(phase2) = eap.phase2 {
                        dot1x.insert(
                            "phase2-auth".to_owned(),
                            owned(Value::from(phase2.setting_value()))?,
                        );
                    }
                    if let Some(anon) = eap.anonymous_identity {
                        dot1x.insert("anonymous-identity".to_owned(), owned(Value::from(anon))?);
                    }
                    if let Some(domain) = eap.domain_suffix_match {
                        dot1x.insert(
                            "domain-suffix-match".to_owned(),
                            owned(Value::from(domain))?,
                        );
                    }
                    if eap.system_ca_certs {
                        dot1x.insert("system-ca-certs".to_owned(), owned(Value::from(true))?);
                    }
                    map.insert("802-1x".to_owned(), dot1x);
                }
            }
            map.insert("802-11-wireless".to_owned(), wireless);
        }

        let mut ipv4 = HashMap::new();
        match self.ipv4 {
            IpMethod::Auto => {
                ipv4.insert("method".to_owned(), owned(Value::from("auto"))?);
            }
            IpMethod::Disabled => {
                ipv4.insert("method".to_owned(), owned(Value::from("disabled"))?);
            }
            IpMethod::Manual {
                addresses,
                gateway,
                dns,
            } => {
                ipv4.insert("method".to_owned(), owned(Value::from("manual"))?);

                let address_data: Vec<HashMap<String, Value<'static>>> = addresses
                    .into_iter()
                    .map(|(address, prefix)| {
                        let mut dict = HashMap::new();
                        dict.insert("address".to_owned(), Value::from(address.to_string()));
                        dict.insert("prefix".to_owned(), Value::from(prefix));
                        dict
                    })
                    .collect();
                ipv4.insert("address-data".to_owned(), owned(Value::from(address_data))?);

                if let Some(gateway) = gateway {
                    ipv4.insert("gateway".to_owned(), owned(Value::from(gateway.to_string()))?);
                }
                if !dns.is_empty() {
                    let cells: Vec<u32> = dns.into_iter().map(ipv4_to_cell).collect();
                    ipv4.insert("dns".to_owned(), owned(Value::from(cells))?);
                }
            }
        }
        map.insert("ipv4".to_owned(), ipv4);

        let mut ipv6 = HashMap::new();
        let ipv6_method = if self.ipv6_ignore { "ignore" } else { "auto" };
        ipv6.insert("method".to_owned(), owned(Value::from(ipv6_method))?);
        map.insert("ipv6".to_owned(), ipv6);

        Ok(map)
    }
}

fn owned(value: Value<'static>) -> Result<OwnedValue> {
    Ok(value.try_to_owned()?)
}

/// SSIDs are 1 to 32 bytes.
fn validate_ssid(ssid: &str) -> Result<()> {
    let len = ssid.as_bytes().len();
    if len == 0 || len > 32 {
        return Err(NmError::InvalidSsid(ssid.to_owned()));
    }
    Ok(())
}

/// WPA passphrases are 8 to 63 characters, or exactly 64 hex digits for
/// a raw key.
fn validate_psk(psk: &str) -> Result<()> {
    let len = psk.len();
    if len == 64 {
        if psk.chars().all(|c| c.is_ascii_hexdigit()) {
            return Ok(());
        }
        return Err(NmError::InvalidPsk(
            "64-character keys must be hex".to_owned(),
        ));
    }
    if !(8..=63).contains(&len) {
        return Err(NmError::InvalidPsk(format!(
            "passphrase length {len} outside 8..=63"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::ProfileSettings;

    #[test]
    fn test_wifi_psk_profile_shape() {
        let map = ProfileBuilder::wifi_psk("HomeNet", "hunter2hunter2")
            .autoconnect(true)
            .build()
            .unwrap();

        let view = ProfileSettings::new(map);
        assert_eq!(view.connection_type().as_deref(), Some("802-11-wireless"));
        assert_eq!(view.id().as_deref(), Some("HomeNet"));
        assert_eq!(view.ssid().as_deref(), Some("HomeNet"));
        assert!(view.autoconnect());
        assert!(view.section("802-11-wireless-security").is_some());
        assert!(view.section("ipv4").is_some());
        assert!(view.section("ipv6").is_some());
        assert!(view.uuid().is_some());
    }

    #[test]
    fn test_wifi_open_has_no_security_section() {
        let map = ProfileBuilder::wifi_open("CoffeeShop").build().unwrap();
        let view = ProfileSettings::new(map);
        assert!(view.section("802-11-wireless-security").is_none());
        assert!(view.section("802-1x").is_none());
    }

    #[test]
    fn test_wifi_eap_profile_sections() {
        let options = EapOptions::new("user@example.com", "secret")
            .with_method(EapMethod::Ttls)
            .with_phase2(Phase2::Pap)
            .with_domain_suffix_match("example.com");
        let map = ProfileBuilder::wifi_eap("Corp", options).build().unwrap();

        let view = ProfileSettings::new(map);
        assert!(view.section("802-11-wireless-security").is_some());
        let dot1x = view.section("802-1x").unwrap();
        assert!(dot1x.contains_key("identity"));
        assert!(dot1x.contains_key("password"));
        assert!(dot1x.contains_key("phase2-auth"));
        assert!(dot1x.contains_key("domain-suffix-match"));
    }

    #[test]
    fn test_ethernet_profile() {
        let map = ProfileBuilder::ethernet("office")
            .interface_name("eth0")
            .build()
            .unwrap();
        let view = ProfileSettings::new(map);
        assert_eq!(view.connection_type().as_deref(), Some("802-3-ethernet"));
        assert_eq!(view.interface_name().as_deref(), Some("eth0"));
        assert!(view.section("802-11-wireless").is_none());
    }

    #[test]
    fn test_ipv4_manual() {
        let map = ProfileBuilder::ethernet("static")
            .ipv4_manual(
                vec![("192.168.1.50".parse().unwrap(), 24)],
                Some("192.168.1.1".parse().unwrap()),
                vec!["1.1.1.1".parse().unwrap()],
            )
            .build()
            .unwrap();
        let view = ProfileSettings::new(map);
        let ipv4 = view.section("ipv4").unwrap();
        assert!(ipv4.contains_key("address-data"));
        assert!(ipv4.contains_key("gateway"));
        assert!(ipv4.contains_key("dns"));
    }

    #[test]
    fn test_ssid_validation() {
        assert!(matches!(
            ProfileBuilder::wifi_open("").build(),
            Err(NmError::InvalidSsid(_))
        ));
        assert!(matches!(
            ProfileBuilder::wifi_open("a".repeat(33)).build(),
            Err(NmError::InvalidSsid(_))
        ));
        assert!(ProfileBuilder::wifi_open("a".repeat(32)).build().is_ok());
    }

    #[test]
    fn test_psk_validation() {
        assert!(matches!(
            ProfileBuilder::wifi_psk("net", "short").build(),
            Err(NmError::InvalidPsk(_))
        ));
        assert!(matches!(
            ProfileBuilder::wifi_psk("net", "x".repeat(64)).build(),
            Err(NmError::InvalidPsk(_))
        ));
        assert!(ProfileBuilder::wifi_psk("net", "0123456789abcdef".repeat(4))
            .build()
            .is_ok());
        assert!(ProfileBuilder::wifi_psk("net", "password").build().is_ok());
    }

    #[test]
    fn test_bssid_validation() {
        assert!(matches!(
            ProfileBuilder::wifi_open("net").bssid("nope").build(),
            Err(NmError::InvalidMacAddress(_))
        ));
        assert!(ProfileBuilder::wifi_open("net")
            .bssid("AA:BB:CC:00:11:22")
            .build()
            .is_ok());
    }

    #[test]
    fn test_pinned_uuid_round_trips() {
        let uuid = Uuid::new_v4();
        let map = ProfileBuilder::ethernet("pinned").uuid(uuid).build().unwrap();
        let view = ProfileSettings::new(map);
        assert_eq!(view.uuid().as_deref(), Some(uuid.to_string().as_str()));
    }
}
