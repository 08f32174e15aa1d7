//! Listen to daemon-level signals for a while.

use std::time::Duration;

use nmdbus::monitoring::ManagerEvent;
use nmdbus::NetworkManager;
use tokio::sync::watch;

#[tokio::main]
async fn main() -> nmdbus::Result<()> {
    let nm = NetworkManager::connect().await?;
    let (stop, shutdown) = watch::channel(());

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(300)).await;
        let _ = stop.send(());
    });

    println!("Waiting for signals (5 minutes)");
    nm.monitor_manager_events(shutdown, |event| match event {
        ManagerEvent::StateChanged(state) => println!("State changed to {state}"),
        ManagerEvent::DeviceAdded(device) => println!("Device {} added", device.path()),
        ManagerEvent::DeviceRemoved(path) => println!("Device {path} removed"),
        ManagerEvent::PermissionsChanged => println!("Permissions changed"),
    })
    .await
}
