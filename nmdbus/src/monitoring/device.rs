//! Device state and signal-strength monitoring.

use futures::stream::{Stream, StreamExt};
use log::{debug, warn};
use std::pin::Pin;
use tokio::sync::watch;
use zbus::Connection;

use crate::api::models::NmError;
use crate::core::device::{self, Device};
use crate::core::wifi::AccessPoint;
use crate::types::constants::bus;
use crate::types::states::{DeviceState, DeviceStateReason};
use crate::Result;

/// Typed stream of a device's state transitions as
/// `(new, old, reason)` tuples.
///
/// The stream owns its subscription (`use<>`), so it stays live after
/// `device` is dropped.
pub async fn device_state_stream(
    device: &Device,
) -> Result<impl Stream<Item = (DeviceState, DeviceState, DeviceStateReason)> + Send + use<>> {
    let proxy = device.proxy().await?;
    let stream = proxy.receive_device_state_changed().await?;
    Ok(stream.filter_map(|signal| async move {
        signal.args().ok().map(|args| {
            (
                DeviceState::from(args.new_state),
                DeviceState::from(args.old_state),
                DeviceStateReason::from(args.reason),
            )
        })
    }))
}

/// Stream of signal-strength readings for one access point.
///
/// Backed by the `Strength` property-change stream; the daemon refreshes
/// it periodically while the AP is visible. The stream owns its
/// subscription (`use<>`) and stays live after `ap` is dropped.
pub async fn strength_stream(ap: &AccessPoint) -> Result<impl Stream<Item = u8> + Send + use<>> {
    let proxy = ap.proxy().await?;
    let stream = proxy.receive_strength_changed().await;
    Ok(stream.filter_map(|change| async move { change.get().await.ok() }))
}

/// Runs `callback` for every device state transition until `shutdown`
/// fires.
///
/// Covers every device present at call time plus the manager's hotplug
/// signals, so a newly added device triggers the callback even though
/// its own transitions are not yet subscribed.
pub async fn monitor_device_changes<F>(
    conn: &Connection,
    mut shutdown: watch::Receiver<()>,
    callback: F,
) -> Result<()>
where
    F: Fn() + 'static,
{
    let mut streams: Vec<Pin<Box<dyn Stream<Item = ()> + Send>>> = Vec::new();

    for dev in device::list_devices(conn).await? {
        match device_state_stream(&dev).await {
            Ok(stream) => {
                streams.push(Box::pin(stream.map(|_| ())));
                debug!("Subscribed to state changes on {}", dev.path());
            }
            // The device may have vanished between listing and subscribing.
            Err(e) => warn!("Skipping device {}: {e}", dev.path()),
        }
    }

    let added = super::manager::device_added_stream(conn).await?;
    let removed = super::manager::device_removed_stream(conn).await?;
    streams.push(Box::pin(added.map(|_| ())));
    streams.push(Box::pin(removed.map(|_| ())));

    debug!("Monitoring {} device signal streams", streams.len());
    let mut merged = futures::stream::select_all(streams);

    loop {
        tokio::select! {
            _ = shutdown.changed() => {
                debug!("Device monitor shut down");
                return Ok(());
            }
            event = merged.next() => match event {
                Some(()) => {
                    debug!("Device change detected");
                    callback();
                }
                None => {
                    warn!("Device monitoring streams ended unexpectedly");
                    return Err(NmError::ObjectVanished(bus::MANAGER_PATH.to_owned()));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check: the streams own their subscriptions and remain
    // usable after the wrapper they were created from is gone.
    #[allow(dead_code)]
    async fn streams_outlive_their_sources(dev: Device, ap: AccessPoint) -> Result<()> {
        fn assert_owned<T: Send + 'static>(_: &T) {}

        let states = device_state_stream(&dev).await?;
        let strengths = strength_stream(&ap).await?;
        drop(dev);
        drop(ap);
        assert_owned(&states);
        assert_owned(&strengths);
        Ok(())
    }
}
