use std::sync::Arc;

use crate::config::Config;
use crate::constants::http;
use crate::db::Store;
use crate::services::{GenerationService, SeaOrmGenerationService};

/// Build a shared HTTP client with reasonable defaults for API calls.
/// This client should be reused across all HTTP-based services to enable
/// connection pooling and avoid socket exhaustion.
pub fn build_shared_http_client(timeout_seconds: u64) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_seconds))
        .user_agent(http::USER_AGENT)
        .pool_max_idle_per_host(http::POOL_MAX_IDLE_PER_HOST)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build shared HTTP client: {e}"))
}

/// Everything the backend role shares across requests.
///
/// The config is read once at startup and immutable from then on, so it is
/// held as a plain `Arc` rather than behind a lock.
#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Arc<Store>,

    pub generation_service: Arc<dyn GenerationService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Arc::new(
            Store::with_pool_options(
                &config.general.database_path,
                config.general.max_db_connections,
                config.general.min_db_connections,
            )
            .await?,
        );

        let generation_service: Arc<dyn GenerationService> =
            Arc::new(SeaOrmGenerationService::new(store.clone()));

        Ok(Self {
            config: Arc::new(config),
            store,
            generation_service,
        })
    }
}
