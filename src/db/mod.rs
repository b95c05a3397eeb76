use crate::domain::RecordId;
use crate::domain::sections::{GenerationRecord, Section};
use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        let is_memory = db_url.contains(":memory:");

        if !is_memory {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        // Each in-memory SQLite connection is its own database, so the pool
        // must stay at a single connection there.
        let (max_connections, min_connections) = if is_memory {
            (1, 1)
        } else {
            (max_connections, min_connections)
        };

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn generation_repo(&self) -> repositories::generation::GenerationRepository {
        repositories::generation::GenerationRepository::new(self.conn.clone())
    }

    pub async fn insert_generation(
        &self,
        prompt: &str,
        sections: &[Section],
    ) -> Result<GenerationRecord> {
        self.generation_repo().insert(prompt, sections).await
    }

    pub async fn list_recent_generations(&self, limit: u64) -> Result<Vec<GenerationRecord>> {
        self.generation_repo().list_recent(limit).await
    }

    pub async fn get_generation(&self, id: &RecordId) -> Result<Option<GenerationRecord>> {
        self.generation_repo().get(id).await
    }

    pub async fn delete_generation(&self, id: &RecordId) -> Result<bool> {
        self.generation_repo().delete(id).await
    }

    pub async fn count_generations(&self) -> Result<u64> {
        self.generation_repo().count().await
    }
}
