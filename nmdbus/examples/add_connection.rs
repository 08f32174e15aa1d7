//! Add a connection profile to the store without activating it.

use nmdbus::{EapOptions, NetworkManager, ProfileBuilder};

#[tokio::main]
async fn main() -> nmdbus::Result<()> {
    let nm = NetworkManager::connect().await?;

    let eap = EapOptions::new("eap-identity-goes-here", "eap-password-goes-here");
    let settings = ProfileBuilder::wifi_eap("nm-example-connection", eap).build()?;

    let profile = nm.settings().add(settings).await?;
    println!("Added {}", profile.path());

    Ok(())
}
