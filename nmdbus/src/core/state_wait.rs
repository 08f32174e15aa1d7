//! Signal-based waiting for state transitions.
//!
//! Subscribes to the relevant `StateChanged` signal before reading the
//! current state, so a transition that fires between the two is never
//! missed. A timeout always rechecks the state once more, since the
//! target state may have been reached through a signal that raced the
//! subscription teardown.

use std::time::Duration;

use futures::StreamExt;
use log::{debug, warn};

use crate::api::models::NmError;
use crate::core::active::ActiveConnection;
use crate::core::device::Device;
use crate::types::states::{ActiveConnectionState, ActiveConnectionStateReason, DeviceState};
use crate::Result;

/// Waits until `active` reaches the Activated state.
///
/// A terminal Deactivated state fails with the reason carried by the
/// signal; when the reason is unspecific and `device` is given, the
/// device's own `StateReason` is consulted for a better diagnosis
/// (`DeviceFailed` instead of a generic activation failure).
pub(crate) async fn wait_until_activated(
    active: &ActiveConnection,
    device: Option<&Device>,
    timeout: Duration,
) -> Result<()> {
    let proxy = active.proxy().await?;

    // Subscribe before the state check so no transition slips through.
    let mut stream = proxy.receive_activation_state_changed().await?;
    debug!("Waiting for activation of {}", active.path());

    match active.state().await? {
        ActiveConnectionState::Activated => {
            debug!("Connection {} already activated", active.path());
            return Ok(());
        }
        ActiveConnectionState::Deactivated => {
            warn!("Connection {} already deactivated", active.path());
            return Err(activation_failure(
                device,
                ActiveConnectionStateReason::Unknown,
            )
            .await);
        }
        state => debug!("Current activation state: {state}"),
    }

    let wait = async {
        while let Some(signal) = stream.next().await {
            let args = match signal.args() {
                Ok(args) => args,
                Err(e) => {
                    warn!("Unparseable StateChanged signal: {e}");
                    continue;
                }
            };
            let state = ActiveConnectionState::from(args.state);
            let reason = ActiveConnectionStateReason::from(args.reason);
            debug!("Activation state of {}: {state} ({reason})", active.path());

            match state {
                ActiveConnectionState::Activated => return Ok(()),
                ActiveConnectionState::Deactivated => {
                    return Err(activation_failure(device, reason).await);
                }
                _ => {}
            }
        }
        // Stream ending usually means the object vanished mid-activation.
        Err(NmError::ObjectVanished(active.path().to_owned()))
    };

    match tokio::time::timeout(timeout, wait).await {
        Ok(result) => result,
        Err(_) => {
            // The final transition may have raced the signal stream.
            if matches!(active.state().await, Ok(ActiveConnectionState::Activated)) {
                debug!("Activation of {} completed at the deadline", active.path());
                Ok(())
            } else {
                warn!("Activation of {} timed out after {timeout:?}", active.path());
                Err(NmError::Timeout)
            }
        }
    }
}

/// Waits until `active` reaches the Deactivated state.
///
/// The object routinely vanishes during teardown; that counts as a
/// successful deactivation.
pub(crate) async fn wait_until_deactivated(
    active: &ActiveConnection,
    timeout: Duration,
) -> Result<()> {
    let proxy = match active.proxy().await {
        Ok(proxy) => proxy,
        Err(e) if e.is_vanished() => return Ok(()),
        Err(e) => return Err(e),
    };
    let mut stream = proxy.receive_activation_state_changed().await?;

    match active.state().await {
        Ok(ActiveConnectionState::Deactivated) => return Ok(()),
        Ok(state) => debug!("Waiting for deactivation of {} from {state}", active.path()),
        Err(e) if e.is_vanished() => return Ok(()),
        Err(e) => return Err(e),
    }

    let wait = async {
        while let Some(signal) = stream.next().await {
            if let Ok(args) = signal.args() {
                if ActiveConnectionState::from(args.state) == ActiveConnectionState::Deactivated {
                    return Ok(());
                }
            }
        }
        // Object gone entirely: torn down.
        Ok(())
    };

    match tokio::time::timeout(timeout, wait).await {
        Ok(result) => result,
        Err(_) => match active.state().await {
            Ok(ActiveConnectionState::Deactivated) => Ok(()),
            Err(e) if e.is_vanished() => Ok(()),
            _ => Err(NmError::Timeout),
        },
    }
}

/// Waits until `device` reaches `target`.
///
/// A transition into Failed short-circuits with the signalled reason.
pub(crate) async fn wait_for_device_state(
    device: &Device,
    target: DeviceState,
    timeout: Duration,
) -> Result<()> {
    let proxy = device.proxy().await?;
    let mut stream = proxy.receive_device_state_changed().await?;

    let current = device.state().await?;
    if current == target {
        return Ok(());
    }
    debug!(
        "Waiting for device {} to reach {target} (currently {current})",
        device.path()
    );

    let wait = async {
        while let Some(signal) = stream.next().await {
            let args = match signal.args() {
                Ok(args) => args,
                Err(e) => {
                    warn!("Unparseable device StateChanged signal: {e}");
                    continue;
                }
            };
            let state = DeviceState::from(args.new_state);
            debug!("Device {} entered {state}", device.path());

            if state == target {
                return Ok(());
            }
            if state == DeviceState::Failed {
                return Err(NmError::DeviceFailed(args.reason.into()));
            }
        }
        Err(NmError::ObjectVanished(device.path().to_owned()))
    };

    match tokio::time::timeout(timeout, wait).await {
        Ok(result) => result,
        Err(_) => {
            if matches!(device.state().await, Ok(state) if state == target) {
                Ok(())
            } else {
                warn!(
                    "Device {} did not reach {target} within {timeout:?}",
                    device.path()
                );
                Err(NmError::Timeout)
            }
        }
    }
}

/// Picks the most informative error for a failed activation.
async fn activation_failure(
    device: Option<&Device>,
    reason: ActiveConnectionStateReason,
) -> NmError {
    if matches!(
        reason,
        ActiveConnectionStateReason::Unknown | ActiveConnectionStateReason::None
    ) {
        if let Some(device) = device {
            if let Ok((DeviceState::Failed, device_reason)) = device.state_reason().await {
                return NmError::DeviceFailed(device_reason);
            }
        }
    }
    NmError::ActivationFailed(reason)
}
