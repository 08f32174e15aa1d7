//! The connection profile store and individual profiles.
//!
//! Profiles persist independently of any activation; deleting one while
//! it is active tears the activation down.

use log::{debug, warn};
use zbus::Connection;
use zvariant::OwnedObjectPath;

use crate::api::models::{NmError, ProfileSettings, SettingsMap};
use crate::core::guard;
use crate::dbus::{NMSettingsConnectionProxy, NMSettingsProxy};
use crate::types::constants::SECRET_SECTIONS;
use crate::Result;

/// Handle to the profile store singleton.
#[derive(Debug, Clone)]
pub struct Settings {
    conn: Connection,
}

impl Settings {
    pub(crate) fn new(conn: Connection) -> Self {
        Self { conn }
    }

    async fn proxy(&self) -> Result<NMSettingsProxy<'_>> {
        Ok(NMSettingsProxy::new(&self.conn).await?)
    }

    /// All stored profiles.
    pub async fn connections(&self) -> Result<Vec<ConnectionProfile>> {
        let proxy = self.proxy().await?;
        let paths = proxy.list_connections().await?;
        Ok(paths
            .into_iter()
            .map(|p| ConnectionProfile::new(self.conn.clone(), p))
            .collect())
    }

    /// Looks up a profile by uuid via the daemon's own index.
    pub async fn by_uuid(&self, uuid: &str) -> Result<ConnectionProfile> {
        let proxy = self.proxy().await?;
        match proxy.get_connection_by_uuid(uuid).await {
            Ok(path) => Ok(ConnectionProfile::new(self.conn.clone(), path)),
            Err(zbus::Error::MethodError(name, _, _))
                if name.as_str().ends_with("InvalidConnection")
                    || name.as_str().ends_with("UnknownConnection") =>
            {
                Err(NmError::NotFound(format!("no profile with uuid {uuid}")))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Scans stored profiles for one whose `connection.id` matches.
    ///
    /// The daemon has no server-side index for ids, so this reads each
    /// profile's settings; profiles deleted mid-scan are skipped.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<ConnectionProfile>> {
        for profile in self.connections().await? {
            let settings = match profile.settings().await {
                Ok(view) => view,
                Err(e) if e.is_vanished() => {
                    debug!("Profile {} removed during id scan", profile.path());
                    continue;
                }
                Err(e) => return Err(e),
            };
            if settings.id().as_deref() == Some(id) {
                return Ok(Some(profile));
            }
        }
        Ok(None)
    }

    /// Stores a new profile and saves it to disk.
    pub async fn add(&self, settings: SettingsMap) -> Result<ConnectionProfile> {
        let proxy = self.proxy().await?;
        let path = proxy.add_connection(settings).await?;
        debug!("Added connection profile at {path}");
        Ok(ConnectionProfile::new(self.conn.clone(), path))
    }

    /// Stores a new profile in memory only.
    pub async fn add_unsaved(&self, settings: SettingsMap) -> Result<ConnectionProfile> {
        let proxy = self.proxy().await?;
        let path = proxy.add_connection_unsaved(settings).await?;
        debug!("Added unsaved connection profile at {path}");
        Ok(ConnectionProfile::new(self.conn.clone(), path))
    }

    /// Loads or reloads specific on-disk profile files.
    ///
    /// Returns overall success plus the filenames that failed to load.
    pub async fn load(&self, filenames: Vec<String>) -> Result<(bool, Vec<String>)> {
        let proxy = self.proxy().await?;
        let (ok, failures) = proxy.load_connections(filenames).await?;
        if !failures.is_empty() {
            warn!("{} profile files failed to load", failures.len());
        }
        Ok((ok, failures))
    }

    /// Rereads every profile from disk, picking up external edits.
    pub async fn reload(&self) -> Result<bool> {
        let proxy = self.proxy().await?;
        Ok(proxy.reload_connections().await?)
    }

    /// The persistent machine hostname.
    pub async fn hostname(&self) -> Result<String> {
        let proxy = self.proxy().await?;
        Ok(proxy.hostname().await?)
    }

    /// Persists a new hostname; an empty string clears the override.
    pub async fn save_hostname(&self, hostname: &str) -> Result<()> {
        let proxy = self.proxy().await?;
        Ok(proxy.save_hostname(hostname).await?)
    }

    /// Whether the caller may add or modify profiles.
    pub async fn can_modify(&self) -> Result<bool> {
        let proxy = self.proxy().await?;
        Ok(proxy.can_modify().await?)
    }
}

/// A stored connection profile.
#[derive(Debug, Clone)]
pub struct ConnectionProfile {
    conn: Connection,
    path: OwnedObjectPath,
}

impl ConnectionProfile {
    pub(crate) fn new(conn: Connection, path: OwnedObjectPath) -> Self {
        Self { conn, path }
    }

    /// D-Bus object path of this profile.
    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    pub(crate) fn object_path(&self) -> &OwnedObjectPath {
        &self.path
    }

    async fn proxy(&self) -> Result<NMSettingsConnectionProxy<'_>> {
        Ok(NMSettingsConnectionProxy::builder(&self.conn)
            .path(self.path.clone())?
            .build()
            .await?)
    }

    /// The profile's settings, secrets omitted.
    pub async fn settings(&self) -> Result<ProfileSettings> {
        let proxy = self.proxy().await?;
        let map = guard(self.path(), proxy.get_settings().await)?;
        Ok(ProfileSettings::new(map))
    }

    /// Fetches the profile's secrets.
    ///
    /// With a section name, asks for exactly that section. Without one,
    /// probes the sections that can carry secrets against the sections
    /// this profile actually has and fetches the first present match;
    /// [`NmError::NotFound`] when no section of the profile holds secrets.
    pub async fn secrets(&self, setting_name: Option<&str>) -> Result<SettingsMap> {
        let proxy = self.proxy().await?;
        if let Some(name) = setting_name {
            return guard(self.path(), proxy.get_secrets(name).await);
        }

        let settings = self.settings().await?;
        for candidate in SECRET_SECTIONS {
            if settings.section(candidate).is_some() {
                debug!("Fetching secrets for section {candidate} of {}", self.path());
                return guard(self.path(), proxy.get_secrets(candidate).await);
            }
        }
        Err(NmError::NotFound(format!(
            "no settings section of {} carries secrets",
            self.path()
        )))
    }

    /// Replaces the settings and saves them to disk.
    pub async fn update(&self, settings: SettingsMap) -> Result<()> {
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.update(settings).await)
    }

    /// Replaces the settings in memory only.
    pub async fn update_unsaved(&self, settings: SettingsMap) -> Result<()> {
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.update_unsaved(settings).await)
    }

    /// Deletes the profile, deactivating it first if necessary.
    pub async fn delete(&self) -> Result<()> {
        debug!("Deleting connection profile {}", self.path());
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.delete().await)
    }

    /// Saves in-memory changes to disk.
    pub async fn save(&self) -> Result<()> {
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.save().await)
    }

    /// Removes every secret from the profile.
    pub async fn clear_secrets(&self) -> Result<()> {
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.clear_secrets().await)
    }

    /// Whether the profile has unsaved in-memory changes.
    pub async fn unsaved(&self) -> Result<bool> {
        let proxy = self.proxy().await?;
        guard(self.path(), proxy.unsaved().await)
    }
}
