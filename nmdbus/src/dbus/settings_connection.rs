//! Proxy for a single stored connection profile.

use std::collections::HashMap;
use zbus::proxy;
use zvariant::OwnedValue;

/// Proxy for one connection profile in the settings store.
///
/// `GetSettings` never includes secrets; those must be fetched
/// explicitly with `GetSecrets`, which may prompt agents and can be
/// refused by policy.
#[proxy(
    interface = "org.freedesktop.NetworkManager.Settings.Connection",
    default_service = "org.freedesktop.NetworkManager"
)]
pub trait NMSettingsConnection {
    /// Returns the profile's settings, secrets omitted.
    fn get_settings(&self) -> zbus::Result<HashMap<String, HashMap<String, OwnedValue>>>;

    /// Returns the secrets of one settings section.
    fn get_secrets(
        &self,
        setting_name: &str,
    ) -> zbus::Result<HashMap<String, HashMap<String, OwnedValue>>>;

    /// Replaces the profile's settings and saves them to disk.
    fn update(
        &self,
        properties: HashMap<String, HashMap<String, OwnedValue>>,
    ) -> zbus::Result<()>;

    /// Replaces the profile's settings in memory only.
    fn update_unsaved(
        &self,
        properties: HashMap<String, HashMap<String, OwnedValue>>,
    ) -> zbus::Result<()>;

    /// Deletes the profile.
    fn delete(&self) -> zbus::Result<()>;

    /// Saves in-memory changes to disk.
    fn save(&self) -> zbus::Result<()>;

    /// Removes all secrets from the profile.
    fn clear_secrets(&self) -> zbus::Result<()>;

    /// Whether the profile has unsaved in-memory changes.
    #[zbus(property)]
    fn unsaved(&self) -> zbus::Result<bool>;

    /// Signal emitted when the profile's settings change.
    #[zbus(signal)]
    fn updated(&self);

    /// Signal emitted when the profile is deleted.
    #[zbus(signal)]
    fn removed(&self);
}
