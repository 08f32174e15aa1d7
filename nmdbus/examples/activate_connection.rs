//! Activate a saved connection by name.
//!
//! Usage: activate_connection <profile-id>

use nmdbus::{DeviceState, NetworkManager, NmError};

#[tokio::main]
async fn main() -> nmdbus::Result<()> {
    let name = std::env::args()
        .nth(1)
        .ok_or_else(|| NmError::NotFound("usage: activate_connection <profile-id>".into()))?;

    let nm = NetworkManager::connect().await?;

    let profile = nm
        .settings()
        .find_by_id(&name)
        .await?
        .ok_or_else(|| NmError::NotFound(name.clone()))?;
    let ctype = profile
        .settings()
        .await?
        .connection_type()
        .unwrap_or_default();

    // VPN profiles ride on whichever device is already activated;
    // anything else wants a disconnected device of a matching kind.
    let mut chosen = None;
    for device in nm.devices().await? {
        let suitable = if ctype == "vpn" {
            device.state().await? == DeviceState::Activated && device.info().await?.managed
        } else {
            device.kind().await?.connection_type() == Some(ctype.as_str())
                && device.state().await? == DeviceState::Disconnected
        };
        if suitable {
            chosen = Some(device);
            break;
        }
    }
    let device = chosen.ok_or_else(|| {
        NmError::NotFound(format!("no suitable and available {ctype} device"))
    })?;

    println!("Activating {name} on {}", device.interface().await?);
    let active = nm.activate_and_wait(&profile, Some(&device), None).await?;
    println!("Activated: {}", active.path());

    Ok(())
}
