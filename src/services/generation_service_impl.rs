//! `SeaORM` implementation of the `GenerationService` trait.

use crate::db::Store;
use crate::domain::RecordId;
use crate::domain::classifier::classify;
use crate::domain::sections::{GenerationRecord, generate_sections};
use crate::services::generation_service::{GenerationError, GenerationOutcome, GenerationService};
use std::sync::Arc;
use tracing::{error, warn};

/// SeaORM-based implementation of [`GenerationService`].
///
/// Orchestrates classifier and generator over the store and maps `SeaORM`
/// errors to domain errors.
pub struct SeaOrmGenerationService {
    store: Arc<Store>,
}

impl SeaOrmGenerationService {
    /// Creates a new instance of the service.
    #[must_use]
    pub const fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl GenerationService for SeaOrmGenerationService {
    async fn handle_generation(
        &self,
        prompt: &str,
    ) -> Result<GenerationOutcome, GenerationError> {
        if prompt.is_empty() {
            warn!("Rejected generation request with empty prompt");
            return Err(GenerationError::InvalidPrompt);
        }

        let business = classify(prompt);
        let sections = generate_sections(business);

        // The deck is only surfaced once the record is durably stored; the
        // sole way to retrieve it later is through the store.
        let record = self
            .store
            .insert_generation(prompt, &sections)
            .await
            .map_err(|e| {
                error!(prompt = %prompt, "Failed to store generation record: {e}");
                GenerationError::Storage(e.to_string())
            })?;

        Ok(GenerationOutcome {
            id: record.id,
            sections: record.sections,
        })
    }

    async fn list_generations(
        &self,
        limit: u64,
    ) -> Result<Vec<GenerationRecord>, GenerationError> {
        self.store.list_recent_generations(limit).await.map_err(|e| {
            error!("Failed to list generation records: {e}");
            GenerationError::Storage(e.to_string())
        })
    }

    async fn get_generation(&self, id: &RecordId) -> Result<GenerationRecord, GenerationError> {
        self.store
            .get_generation(id)
            .await
            .map_err(|e| {
                error!(record_id = %id, "Failed to fetch generation record: {e}");
                GenerationError::Storage(e.to_string())
            })?
            .ok_or_else(|| GenerationError::NotFound(id.clone()))
    }

    async fn delete_generation(&self, id: &RecordId) -> Result<(), GenerationError> {
        let deleted = self.store.delete_generation(id).await.map_err(|e| {
            error!(record_id = %id, "Failed to delete generation record: {e}");
            GenerationError::Storage(e.to_string())
        })?;

        if deleted {
            Ok(())
        } else {
            Err(GenerationError::NotFound(id.clone()))
        }
    }

    async fn count_generations(&self) -> Result<u64, GenerationError> {
        self.store.count_generations().await.map_err(|e| {
            error!("Failed to count generation records: {e}");
            GenerationError::Storage(e.to_string())
        })
    }
}
