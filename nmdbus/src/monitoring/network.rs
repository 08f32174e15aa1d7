//! Network availability monitoring.
//!
//! Merges access point additions/removals on every Wi-Fi device with the
//! profile store's NewConnection/ConnectionRemoved signals, so a single
//! callback can refresh a network list without polling.

use futures::stream::{Stream, StreamExt};
use log::{debug, warn};
use std::pin::Pin;
use tokio::sync::watch;
use zbus::Connection;
use zvariant::OwnedObjectPath;

use crate::api::models::NmError;
use crate::core::device;
use crate::core::settings::ConnectionProfile;
use crate::core::wifi::AccessPoint;
use crate::dbus::NMSettingsProxy;
use crate::types::constants::bus;
use crate::Result;

/// A change to the set of reachable networks or saved profiles.
#[derive(Debug)]
pub enum NetworkEvent {
    /// An access point became visible.
    AccessPointAdded(AccessPoint),
    /// An access point disappeared; only the path remains usable.
    AccessPointRemoved(OwnedObjectPath),
    /// A connection profile was added to the store.
    ProfileAdded(ConnectionProfile),
    /// A connection profile was removed; only the path remains usable.
    ProfileRemoved(OwnedObjectPath),
}

/// Runs `callback` for every network change until `shutdown` fires.
///
/// Subscribes on all Wi-Fi devices present at call time; devices added
/// later are not covered, restart the monitor after hotplug (pair it
/// with [`crate::monitoring::manager::monitor_manager_events`]).
pub async fn monitor_network_changes<F>(
    conn: &Connection,
    mut shutdown: watch::Receiver<()>,
    callback: F,
) -> Result<()>
where
    F: Fn(NetworkEvent) + 'static,
{
    let mut streams: Vec<Pin<Box<dyn Stream<Item = NetworkEvent> + Send>>> = Vec::new();

    for wifi in device::wifi_devices(conn).await? {
        let proxy = wifi.proxy().await?;

        let added = proxy.receive_access_point_added().await?;
        let added_conn = conn.clone();
        streams.push(Box::pin(added.filter_map(move |signal| {
            let conn = added_conn.clone();
            async move {
                signal
                    .args()
                    .ok()
                    .map(|args| NetworkEvent::AccessPointAdded(AccessPoint::new(conn, args.path)))
            }
        })));

        let removed = proxy.receive_access_point_removed().await?;
        streams.push(Box::pin(removed.filter_map(|signal| async move {
            signal
                .args()
                .ok()
                .map(|args| NetworkEvent::AccessPointRemoved(args.path))
        })));

        debug!("Subscribed to AP signals on {}", wifi.path());
    }

    let settings = NMSettingsProxy::new(conn).await?;

    let new_profiles = settings.receive_new_connection().await?;
    let profile_conn = conn.clone();
    streams.push(Box::pin(new_profiles.filter_map(move |signal| {
        let conn = profile_conn.clone();
        async move {
            signal
                .args()
                .ok()
                .map(|args| NetworkEvent::ProfileAdded(ConnectionProfile::new(conn, args.path)))
        }
    })));

    let removed_profiles = settings.receive_connection_removed().await?;
    streams.push(Box::pin(removed_profiles.filter_map(|signal| async move {
        signal
            .args()
            .ok()
            .map(|args| NetworkEvent::ProfileRemoved(args.path))
    })));

    debug!("Monitoring {} network signal streams", streams.len());
    let mut merged = futures::stream::select_all(streams);

    loop {
        tokio::select! {
            _ = shutdown.changed() => {
                debug!("Network monitor shut down");
                return Ok(());
            }
            event = merged.next() => match event {
                Some(event) => {
                    debug!("Network change detected");
                    callback(event);
                }
                None => {
                    warn!("Network monitoring streams ended unexpectedly");
                    return Err(NmError::ObjectVanished(bus::SETTINGS_PATH.to_owned()));
                }
            }
        }
    }
}
