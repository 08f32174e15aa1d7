//! Daemon-level signal streams.
//!
//! Subscribes to the manager singleton's signals: overall state changes,
//! device hotplug, and polkit permission invalidation. Streams stay live
//! after the proxy that produced them is dropped.

use futures::stream::{Stream, StreamExt};
use log::{debug, warn};
use std::pin::Pin;
use tokio::sync::watch;
use zbus::Connection;
use zvariant::OwnedObjectPath;

use crate::api::models::NmError;
use crate::core::device::Device;
use crate::dbus::NMProxy;
use crate::types::constants::bus;
use crate::types::states::NmState;
use crate::Result;

/// An event from the manager singleton.
#[derive(Debug)]
pub enum ManagerEvent {
    /// Overall daemon state changed.
    StateChanged(NmState),
    /// A device appeared.
    DeviceAdded(Device),
    /// A device disappeared; only the path remains usable.
    DeviceRemoved(OwnedObjectPath),
    /// Polkit permissions may have changed; re-query if cached.
    PermissionsChanged,
}

/// Typed stream of daemon state transitions.
pub async fn state_stream(
    conn: &Connection,
) -> Result<impl Stream<Item = NmState> + Send + use<>> {
    let nm = NMProxy::new(conn).await?;
    let stream = nm.receive_daemon_state_changed().await?;
    Ok(stream.filter_map(|signal| async move {
        signal.args().ok().map(|args| NmState::from(args.state))
    }))
}

/// Stream of newly appeared devices.
pub async fn device_added_stream(
    conn: &Connection,
) -> Result<impl Stream<Item = Device> + Send + use<>> {
    let nm = NMProxy::new(conn).await?;
    let stream = nm.receive_device_added().await?;
    let conn = conn.clone();
    Ok(stream.filter_map(move |signal| {
        let conn = conn.clone();
        async move {
            signal
                .args()
                .ok()
                .map(|args| Device::new(conn, args.path))
        }
    }))
}

/// Stream of removed device paths.
pub async fn device_removed_stream(
    conn: &Connection,
) -> Result<impl Stream<Item = OwnedObjectPath> + Send + use<>> {
    let nm = NMProxy::new(conn).await?;
    let stream = nm.receive_device_removed().await?;
    Ok(stream.filter_map(|signal| async move { signal.args().ok().map(|args| args.path) }))
}

/// Stream firing whenever cached permission results become stale.
pub async fn permissions_changed_stream(
    conn: &Connection,
) -> Result<impl Stream<Item = ()> + Send + use<>> {
    let nm = NMProxy::new(conn).await?;
    let stream = nm.receive_check_permissions().await?;
    Ok(stream.map(|_| ()))
}

/// Runs `callback` for every manager event until `shutdown` fires.
///
/// Merges the state, hotplug, and permission streams. Returns
/// `ObjectVanished` if every stream ends, which normally means the bus
/// connection was lost.
pub async fn monitor_manager_events<F>(
    conn: &Connection,
    mut shutdown: watch::Receiver<()>,
    callback: F,
) -> Result<()>
where
    F: Fn(ManagerEvent) + 'static,
{
    let mut streams: Vec<Pin<Box<dyn Stream<Item = ManagerEvent> + Send>>> = Vec::new();
    streams.push(Box::pin(state_stream(conn).await?.map(ManagerEvent::StateChanged)));
    streams.push(Box::pin(
        device_added_stream(conn).await?.map(ManagerEvent::DeviceAdded),
    ));
    streams.push(Box::pin(
        device_removed_stream(conn)
            .await?
            .map(ManagerEvent::DeviceRemoved),
    ));
    streams.push(Box::pin(
        permissions_changed_stream(conn)
            .await?
            .map(|_| ManagerEvent::PermissionsChanged),
    ));

    debug!("Monitoring {} manager signal streams", streams.len());
    let mut merged = futures::stream::select_all(streams);

    loop {
        tokio::select! {
            _ = shutdown.changed() => {
                debug!("Manager monitor shut down");
                return Ok(());
            }
            event = merged.next() => match event {
                Some(event) => {
                    debug!("Manager event: {event:?}");
                    callback(event);
                }
                None => {
                    warn!("Manager monitoring streams ended unexpectedly");
                    return Err(NmError::ObjectVanished(bus::MANAGER_PATH.to_owned()));
                }
            }
        }
    }
}
