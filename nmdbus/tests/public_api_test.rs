//! Tests for the public API surface that need no running daemon:
//! builder output, error formatting, settings parsing, and the typed
//! code tables.

use std::collections::HashMap;

use nmdbus::{
    ActiveConnectionState, ApSecurityFlags, DeviceKind, DeviceState, DeviceStateReason, NmError,
    NmState, Permission, PermissionResult, ProfileBuilder, ProfileSettings, SettingsMap,
    VpnConnectionState, WifiBand,
};
use zvariant::Value;

fn owned(value: Value<'static>) -> zvariant::OwnedValue {
    value.try_to_owned().unwrap()
}

#[test]
fn test_builder_produces_complete_wifi_profile() {
    let map = ProfileBuilder::wifi_psk("Office", "super secret")
        .autoconnect(false)
        .autoconnect_priority(10)
        .interface_name("wlan0")
        .hidden(true)
        .band(WifiBand::A)
        .build()
        .unwrap();

    let view = ProfileSettings::new(map);
    assert_eq!(view.id().as_deref(), Some("Office"));
    assert_eq!(view.connection_type().as_deref(), Some("802-11-wireless"));
    assert_eq!(view.interface_name().as_deref(), Some("wlan0"));
    assert!(!view.autoconnect());
    assert_eq!(view.ssid().as_deref(), Some("Office"));

    let wireless = view.section("802-11-wireless").unwrap();
    assert!(wireless.contains_key("hidden"));
    assert!(wireless.contains_key("band"));
    let security = view.section("802-11-wireless-security").unwrap();
    assert!(security.contains_key("psk"));
}

#[test]
fn test_builder_rejects_bad_input_before_any_bus_traffic() {
    assert!(matches!(
        ProfileBuilder::wifi_open("").build(),
        Err(NmError::InvalidSsid(_))
    ));
    assert!(matches!(
        ProfileBuilder::wifi_psk("net", "2short").build(),
        Err(NmError::InvalidPsk(_))
    ));
    assert!(matches!(
        ProfileBuilder::wifi_open("net").bssid("00:11:22").build(),
        Err(NmError::InvalidMacAddress(_))
    ));
}

#[test]
fn test_error_display() {
    assert_eq!(
        NmError::ObjectVanished("/org/freedesktop/NetworkManager/AccessPoint/7".into())
            .to_string(),
        "object vanished: /org/freedesktop/NetworkManager/AccessPoint/7"
    );
    assert_eq!(
        NmError::NotFound("HomeNet".into()).to_string(),
        "not found: HomeNet"
    );
    assert_eq!(
        NmError::Timeout.to_string(),
        "timed out waiting for state change"
    );
    assert!(NmError::PermissionDenied("wifi.scan".into())
        .to_string()
        .starts_with("permission denied"));
}

#[test]
fn test_settings_view_parses_hand_built_map() {
    let mut connection = HashMap::new();
    connection.insert("id".to_owned(), owned(Value::from("Cafe")));
    connection.insert(
        "uuid".to_owned(),
        owned(Value::from("2b7a4c09-9e83-4b63-bb1a-2f1c7b4daea1")),
    );
    connection.insert("type".to_owned(), owned(Value::from("802-11-wireless")));

    let mut wireless = HashMap::new();
    wireless.insert("ssid".to_owned(), owned(Value::from(b"Cafe".to_vec())));

    let mut map = SettingsMap::new();
    map.insert("connection".to_owned(), connection);
    map.insert("802-11-wireless".to_owned(), wireless);

    let view = ProfileSettings::new(map);
    assert_eq!(view.id().as_deref(), Some("Cafe"));
    assert_eq!(
        view.uuid().as_deref(),
        Some("2b7a4c09-9e83-4b63-bb1a-2f1c7b4daea1")
    );
    assert_eq!(view.ssid().as_deref(), Some("Cafe"));
    // Absent autoconnect defaults to on, matching the daemon.
    assert!(view.autoconnect());
    assert!(view.section("ipv4").is_none());
}

#[test]
fn test_permission_parse_and_display_round_trip() {
    let names = [
        "org.freedesktop.NetworkManager.enable-disable-wifi",
        "org.freedesktop.NetworkManager.network-control",
        "org.freedesktop.NetworkManager.settings.modify.system",
        "org.freedesktop.NetworkManager.wifi.scan",
    ];
    for name in names {
        let parsed = Permission::parse(name);
        assert!(!matches!(parsed, Permission::Other(_)), "{name}");
        assert_eq!(parsed.to_string(), name);
    }

    let unknown = Permission::parse("org.freedesktop.NetworkManager.brand-new-thing");
    assert!(matches!(unknown, Permission::Other(_)));
    assert_eq!(
        unknown.to_string(),
        "org.freedesktop.NetworkManager.brand-new-thing"
    );
}

#[test]
fn test_permission_result_parse() {
    assert_eq!(PermissionResult::parse("yes"), PermissionResult::Yes);
    assert_eq!(PermissionResult::parse("no"), PermissionResult::No);
    assert_eq!(PermissionResult::parse("auth"), PermissionResult::Auth);
    assert_eq!(PermissionResult::parse("maybe"), PermissionResult::Unknown);
}

#[test]
fn test_state_code_tables() {
    assert_eq!(NmState::from(70), NmState::ConnectedGlobal);
    assert_eq!(DeviceState::from(100), DeviceState::Activated);
    assert_eq!(DeviceState::from(30), DeviceState::Disconnected);
    assert_eq!(ActiveConnectionState::from(2), ActiveConnectionState::Activated);
    assert_eq!(VpnConnectionState::from(5), VpnConnectionState::Activated);
    assert_eq!(DeviceKind::from(2), DeviceKind::Wifi);

    // Unknown codes survive round-tripping instead of panicking.
    assert!(matches!(DeviceKind::from(9999), DeviceKind::Other(9999)));
    assert!(matches!(NmState::from(9999), NmState::Other(9999)));
}

#[test]
fn test_auth_failure_reasons() {
    assert!(DeviceStateReason::from(7).is_auth_failure()); // no secrets
    assert!(!DeviceStateReason::from(0).is_auth_failure());
}

#[test]
fn test_security_flag_helpers() {
    let psk = ApSecurityFlags::KEY_MGMT_PSK;
    assert!(psk.is_psk());
    assert!(!psk.is_enterprise());

    let eap = ApSecurityFlags::KEY_MGMT_802_1X;
    assert!(eap.is_enterprise());
}
