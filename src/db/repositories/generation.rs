use crate::constants::generation;
use crate::domain::RecordId;
use crate::domain::sections::{GenerationMetadata, GenerationRecord, Section};
use crate::entities::{generation_records, prelude::*};
use anyhow::{Context, Result};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect, Set};
use tracing::info;

/// Repository for stored generation records
pub struct GenerationRepository {
    conn: DatabaseConnection,
}

impl GenerationRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    // ========================================================================
    // Model Conversion Helpers
    // ========================================================================

    fn map_record_model(r: generation_records::Model) -> Result<GenerationRecord> {
        let sections: Vec<Section> = serde_json::from_str(&r.sections_json)
            .with_context(|| format!("Corrupt sections payload for record {}", r.id))?;

        Ok(GenerationRecord {
            id: RecordId::new(r.id),
            prompt: r.prompt,
            sections,
            metadata: GenerationMetadata {
                source: r.source,
                timestamp: r.generated_at,
                prompt_processed: r.prompt_processed,
                sections_generated: r.sections_generated,
            },
            created_at: r.created_at,
            updated_at: r.updated_at,
        })
    }

    // ========================================================================
    // Generation Record Operations
    // ========================================================================

    /// Inserts a new record, assigning the id and every derived field here.
    /// Callers supply only the prompt and the generated deck.
    pub async fn insert(&self, prompt: &str, sections: &[Section]) -> Result<GenerationRecord> {
        let now = chrono::Utc::now().to_rfc3339();

        let record = GenerationRecord {
            id: RecordId::generate(),
            prompt: prompt.to_string(),
            sections: sections.to_vec(),
            metadata: GenerationMetadata {
                source: generation::SOURCE.to_string(),
                timestamp: now.clone(),
                prompt_processed: prompt.to_string(),
                sections_generated: sections.len() as i32,
            },
            created_at: now.clone(),
            updated_at: now,
        };

        let active_model = generation_records::ActiveModel {
            id: Set(record.id.as_str().to_owned()),
            prompt: Set(record.prompt.clone()),
            sections_json: Set(serde_json::to_string(&record.sections)?),
            source: Set(record.metadata.source.clone()),
            generated_at: Set(record.metadata.timestamp.clone()),
            prompt_processed: Set(record.metadata.prompt_processed.clone()),
            sections_generated: Set(record.metadata.sections_generated),
            created_at: Set(record.created_at.clone()),
            updated_at: Set(record.updated_at.clone()),
        };

        GenerationRecords::insert(active_model).exec(&self.conn).await?;
        info!(
            "Stored generation record {} ({} sections)",
            record.id, record.metadata.sections_generated
        );

        Ok(record)
    }

    pub async fn list_recent(&self, limit: u64) -> Result<Vec<GenerationRecord>> {
        let rows = GenerationRecords::find()
            .order_by_desc(generation_records::Column::CreatedAt)
            .limit(limit)
            .all(&self.conn)
            .await?;

        rows.into_iter().map(Self::map_record_model).collect()
    }

    pub async fn get(&self, id: &RecordId) -> Result<Option<GenerationRecord>> {
        let result = GenerationRecords::find_by_id(id.as_str())
            .one(&self.conn)
            .await?;

        result.map(Self::map_record_model).transpose()
    }

    pub async fn delete(&self, id: &RecordId) -> Result<bool> {
        let result = GenerationRecords::delete_by_id(id.as_str())
            .exec(&self.conn)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64> {
        let count = GenerationRecords::find().count(&self.conn).await?;
        Ok(count)
    }
}
