//! Health command handler

use crate::clients::backend::BackendClient;
use crate::config::Config;
use crate::state::build_shared_http_client;

pub async fn cmd_health(config: &Config) -> anyhow::Result<()> {
    let client = build_shared_http_client(config.relay.request_timeout_seconds)?;
    let backend = BackendClient::new(config.relay.backend_url.clone(), client);

    match backend.health_check().await {
        Ok(body) => {
            println!("✓ Backend is healthy: {}", config.relay.backend_url);
            if let Some(timestamp) = body.get("timestamp").and_then(|v| v.as_str()) {
                println!("  Reported at: {timestamp}");
            }
        }
        Err(err) => {
            println!("✗ Backend unreachable: {}", config.relay.backend_url);
            println!("  {err}");
        }
    }

    Ok(())
}
