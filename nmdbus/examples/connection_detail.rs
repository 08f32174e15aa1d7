//! Display detailed information about currently active connections,
//! including secrets and per-device IP configuration.

use nmdbus::{NetworkManager, NmError};

#[tokio::main]
async fn main() -> nmdbus::Result<()> {
    let nm = NetworkManager::connect().await?;

    for active in nm.active_connections().await? {
        let profile = active.profile().await?;
        let mut settings = profile.settings().await?.into_raw();

        // Merge secrets into the settings dump; a profile without any
        // secret-bearing section reports NotFound, which is fine here.
        match profile.secrets(None).await {
            Ok(secrets) => {
                for (section, values) in secrets {
                    settings.entry(section).or_default().extend(values);
                }
            }
            Err(NmError::NotFound(_)) => {}
            Err(e) => return Err(e),
        }

        let devices = active.devices().await?;
        let mut interfaces = Vec::new();
        for device in &devices {
            interfaces.push(device.interface().await?);
        }

        let id = settings
            .get("connection")
            .and_then(|s| s.get("id"))
            .map(|v| format!("{v:?}"))
            .unwrap_or_default();
        if interfaces.is_empty() {
            println!("Active connection: {id}");
        } else {
            println!("Active connection: {id} (on {})", interfaces.join(", "));
        }

        let mut sections: Vec<_> = settings.into_iter().collect();
        sections.sort_by(|a, b| a.0.cmp(&b.0));
        for (section, values) in sections {
            println!("   {section}");
            for (name, value) in values {
                println!("      {name:<25} {value:?}");
            }
        }

        for device in &devices {
            println!("Device: {}", device.interface().await?);
            println!("   Type             {}", device.kind().await?);
            if let Some(config) = device.ip4_config().await? {
                let info = config.info().await?;
                println!("   IPv4 config");
                println!("      Addresses");
                for addr in &info.address_data {
                    println!("         {}/{}", addr.address, addr.prefix);
                }
                println!("      Routes");
                for route in &info.route_data {
                    println!(
                        "         {}/{} -> {} ({})",
                        route.dest,
                        route.prefix,
                        route
                            .next_hop
                            .as_deref()
                            .unwrap_or("-"),
                        route.metric.unwrap_or(0)
                    );
                }
                println!("      Nameservers");
                for ns in &info.nameservers {
                    println!("         {ns}");
                }
            }
        }
    }

    Ok(())
}
