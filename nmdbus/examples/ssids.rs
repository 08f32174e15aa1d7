//! Display all visible SSIDs.

use nmdbus::NetworkManager;

#[tokio::main]
async fn main() -> nmdbus::Result<()> {
    let nm = NetworkManager::connect().await?;

    for wifi in nm.wifi_devices().await? {
        wifi.request_scan().await?;
        for network in wifi.networks().await? {
            println!(
                "{:<30} {}MHz {}%",
                network.ssid, network.frequency, network.strength
            );
        }
    }

    Ok(())
}
