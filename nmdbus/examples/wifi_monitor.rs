//! Show visible access points and monitor additions, removals, and
//! strength changes.

use std::time::Duration;

use futures::StreamExt;
use nmdbus::monitoring::{device::strength_stream, NetworkEvent};
use nmdbus::{NetworkManager, NmError};
use tokio::sync::watch;

#[tokio::main]
async fn main() -> nmdbus::Result<()> {
    let nm = NetworkManager::connect().await?;

    for wifi in nm.wifi_devices().await? {
        for ap in wifi.access_points().await? {
            // APs can vanish between listing and reading.
            let info = match ap.info().await {
                Ok(info) => info,
                Err(NmError::ObjectVanished(_)) => continue,
                Err(e) => return Err(e),
            };
            println!(
                "* {:<30} {} {}MHz {}%",
                info.ssid, info.bssid, info.frequency, info.strength
            );

            let ssid = info.ssid.clone();
            let mut strength = Box::pin(strength_stream(&ap).await?);
            tokio::spawn(async move {
                while let Some(value) = strength.next().await {
                    println!("  {ssid:<30} now {value}%");
                }
            });
        }
    }

    let (stop, shutdown) = watch::channel(());
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(300)).await;
        let _ = stop.send(());
    });

    nm.monitor_network_changes(shutdown, |event| match event {
        NetworkEvent::AccessPointAdded(ap) => println!("+ {}", ap.path()),
        NetworkEvent::AccessPointRemoved(path) => println!("- {path}"),
        NetworkEvent::ProfileAdded(profile) => println!("new profile {}", profile.path()),
        NetworkEvent::ProfileRemoved(path) => println!("profile {path} removed"),
    })
    .await
}
