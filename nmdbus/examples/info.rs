//! Dump everything network-related the daemon can say something about.

use nmdbus::NetworkManager;

#[tokio::main]
async fn main() -> nmdbus::Result<()> {
    let nm = NetworkManager::connect().await?;
    let settings = nm.settings();

    println!("{:<30} {}", "Version:", nm.version().await?);
    println!("{:<30} {}", "Hostname:", settings.hostname().await?);
    println!("{:<30} {}", "Can modify:", settings.can_modify().await?);
    println!("{:<30} {}", "Networking enabled:", nm.networking_enabled().await?);
    println!("{:<30} {}", "Wireless enabled:", nm.wireless_enabled().await?);
    println!("{:<30} {}", "Wireless hw enabled:", nm.wireless_hardware_enabled().await?);
    println!("{:<30} {}", "Wwan enabled:", nm.wwan_enabled().await?);
    println!("{:<30} {}", "Wwan hw enabled:", nm.wwan_hardware_enabled().await?);
    println!("{:<30} {}", "Overall state:", nm.state().await?);

    println!("\nPermissions");
    for (permission, result) in nm.permissions().await? {
        println!("{:<60} {}", permission.to_string(), result);
    }

    println!("\nAvailable network devices");
    println!("{:<10} {:<19} {:<20} Managed?", "Name", "State", "Driver");
    for device in nm.devices().await? {
        let info = device.info().await?;
        println!(
            "{:<10} {:<19} {:<20} {}",
            info.interface,
            info.state.to_string(),
            info.driver.unwrap_or_default(),
            info.managed
        );
    }

    println!("\nAvailable connections");
    println!("{:<30} Type", "Name");
    for profile in settings.connections().await? {
        let view = profile.settings().await?;
        println!(
            "{:<30} {}",
            view.id().unwrap_or_default(),
            view.connection_type().unwrap_or_default()
        );
    }

    println!("\nActive connections");
    println!("{:<30} {:<20} {:<10} Devices", "Name", "Type", "Default");
    for active in nm.active_connections().await? {
        let info = active.info().await?;
        println!(
            "{:<30} {:<20} {:<10} {}",
            info.id,
            info.connection_type,
            info.default4,
            info.devices.join(", ")
        );
    }

    Ok(())
}
