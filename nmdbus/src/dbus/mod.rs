//! D-Bus proxy interfaces for NetworkManager.
//!
//! This module contains low-level D-Bus proxy definitions for communicating
//! with NetworkManager over the system bus. One file per remote interface;
//! the higher-level wrappers in `core` are the intended entry points.

mod access_point;
mod active_connection;
mod agent_manager;
mod bluetooth;
mod device;
mod dhcp4_config;
mod dhcp6_config;
mod ip4_config;
mod ip6_config;
mod manager;
mod modem;
mod nsp;
mod settings;
mod settings_connection;
mod vpn_connection;
mod wimax;
mod wired;
mod wireless;

pub(crate) use access_point::NMAccessPointProxy;
pub(crate) use active_connection::NMActiveConnectionProxy;
pub(crate) use agent_manager::NMAgentManagerProxy;
pub(crate) use bluetooth::NMBluetoothProxy;
pub(crate) use device::NMDeviceProxy;
pub(crate) use dhcp4_config::NMDhcp4ConfigProxy;
pub(crate) use dhcp6_config::NMDhcp6ConfigProxy;
pub(crate) use ip4_config::NMIp4ConfigProxy;
pub(crate) use ip6_config::NMIp6ConfigProxy;
pub(crate) use manager::NMProxy;
pub(crate) use modem::NMModemProxy;
pub(crate) use nsp::NMNspProxy;
pub(crate) use settings::NMSettingsProxy;
pub(crate) use settings_connection::NMSettingsConnectionProxy;
pub(crate) use vpn_connection::NMVpnConnectionProxy;
pub(crate) use wimax::NMWimaxProxy;
pub(crate) use wired::NMWiredProxy;
pub(crate) use wireless::NMWirelessProxy;
