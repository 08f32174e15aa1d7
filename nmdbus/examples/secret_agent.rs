//! Serve a secret agent that answers Wi-Fi PSK requests.
//!
//! While this runs, activations that need a pre-shared key and have no
//! stored secret will ask this process instead.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use nmdbus::{
    AgentCapabilities, NetworkManager, NmError, ProfileSettings, SecretAgent, SettingsMap,
};
use zvariant::Value;

struct PskAgent {
    psk: String,
}

#[async_trait]
impl SecretAgent for PskAgent {
    async fn get_secrets(
        &self,
        connection: SettingsMap,
        _connection_path: String,
        setting_name: String,
        hints: Vec<String>,
        _flags: u32,
    ) -> nmdbus::Result<SettingsMap> {
        let view = ProfileSettings::new(connection);
        println!(
            "Secrets requested for {} ({setting_name}, hints {hints:?})",
            view.id().unwrap_or_default()
        );

        if setting_name != "802-11-wireless-security" {
            return Err(NmError::NotFound(setting_name));
        }

        let mut section = HashMap::new();
        section.insert("psk".to_owned(), Value::from(self.psk.clone()).try_to_owned()?);
        let mut secrets = SettingsMap::new();
        secrets.insert(setting_name, section);
        Ok(secrets)
    }

    async fn save_secrets(
        &self,
        _connection: SettingsMap,
        connection_path: String,
    ) -> nmdbus::Result<()> {
        println!("SaveSecrets for {connection_path} (ignored)");
        Ok(())
    }

    async fn delete_secrets(
        &self,
        _connection: SettingsMap,
        connection_path: String,
    ) -> nmdbus::Result<()> {
        println!("DeleteSecrets for {connection_path} (ignored)");
        Ok(())
    }

    async fn cancel_get_secrets(
        &self,
        connection_path: String,
        setting_name: String,
    ) -> nmdbus::Result<()> {
        println!("CancelGetSecrets for {connection_path} ({setting_name})");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> nmdbus::Result<()> {
    let psk = std::env::args()
        .nth(1)
        .ok_or_else(|| NmError::NotFound("usage: secret_agent <psk>".into()))?;

    let nm = NetworkManager::connect().await?;
    let agent = Arc::new(PskAgent { psk });
    let handle = nm
        .register_agent("org.example.nmdbus.PskAgent", AgentCapabilities::empty(), agent)
        .await?;

    println!("Agent registered; serving for 5 minutes");
    tokio::time::sleep(Duration::from_secs(300)).await;

    handle.unregister().await
}
