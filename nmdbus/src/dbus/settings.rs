//! Proxy for the settings (profile store) singleton.

use std::collections::HashMap;
use zbus::proxy;
use zvariant::{OwnedObjectPath, OwnedValue};

/// Proxy for the connection profile store.
///
/// Profiles live here independently of any activation; activating one
/// produces a separate active-connection object.
#[proxy(
    interface = "org.freedesktop.NetworkManager.Settings",
    default_service = "org.freedesktop.NetworkManager",
    default_path = "/org/freedesktop/NetworkManager/Settings"
)]
pub trait NMSettings {
    /// Returns paths of all stored profiles.
    fn list_connections(&self) -> zbus::Result<Vec<OwnedObjectPath>>;

    /// Returns the path of the profile with the given UUID.
    fn get_connection_by_uuid(&self, uuid: &str) -> zbus::Result<OwnedObjectPath>;

    /// Stores a new profile and saves it to disk.
    fn add_connection(
        &self,
        connection: HashMap<String, HashMap<String, OwnedValue>>,
    ) -> zbus::Result<OwnedObjectPath>;

    /// Stores a new profile in memory only.
    fn add_connection_unsaved(
        &self,
        connection: HashMap<String, HashMap<String, OwnedValue>>,
    ) -> zbus::Result<OwnedObjectPath>;

    /// Loads or reloads the given on-disk profile files.
    ///
    /// Returns overall success plus the filenames that failed to load.
    fn load_connections(&self, filenames: Vec<String>) -> zbus::Result<(bool, Vec<String>)>;

    /// Rereads every profile from disk, picking up external edits.
    fn reload_connections(&self) -> zbus::Result<bool>;

    /// Persists a new hostname, or clears the override when empty.
    fn save_hostname(&self, hostname: &str) -> zbus::Result<()>;

    /// Paths of all stored profiles.
    #[zbus(property)]
    fn connections(&self) -> zbus::Result<Vec<OwnedObjectPath>>;

    /// The persistent machine hostname.
    #[zbus(property)]
    fn hostname(&self) -> zbus::Result<String>;

    /// Whether the caller may add or modify profiles.
    #[zbus(property)]
    fn can_modify(&self) -> zbus::Result<bool>;

    /// Signal emitted when a profile is added.
    #[zbus(signal)]
    fn new_connection(&self, path: OwnedObjectPath);

    /// Signal emitted when a profile is removed.
    #[zbus(signal)]
    fn connection_removed(&self, path: OwnedObjectPath);
}
