//! Domain service for the generation lifecycle.
//!
//! This module provides a clean domain layer abstraction over data access,
//! enabling testability and separation of concerns per Principal Rust standards.

use crate::domain::RecordId;
use crate::domain::sections::{GenerationRecord, Section};
use thiserror::Error;

/// Domain errors for generation operations.
///
/// Implements C-GOOD-ERR: errors must be meaningful, implement `std::error::Error`,
/// Send, Sync, and Display.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Prompt is required and must be a string")]
    InvalidPrompt,

    #[error("Section not found: {0}")]
    NotFound(RecordId),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<sea_orm::DbErr> for GenerationError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result of a successful generation.
///
/// Carries the stored record's id alongside the deck so callers can
/// correlate the response with a later `get_generation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub id: RecordId,

    pub sections: Vec<Section>,
}

/// Domain service trait for generation operations.
///
/// This trait abstracts the classify/generate/persist pipeline and the
/// record lifecycle, enabling:
/// - Testability through mocking
/// - Separation of concerns (handlers don't touch DB directly)
/// - Clean architecture with dependency inversion
#[async_trait::async_trait]
pub trait GenerationService: Send + Sync {
    /// Classifies the prompt, generates the section deck, and persists the
    /// pair as a new record.
    ///
    /// All-or-nothing: the deck is returned only if the record was durably
    /// stored. A storage failure surfaces as an error with no sections.
    ///
    /// # Errors
    ///
    /// - Returns [`GenerationError::InvalidPrompt`] if the prompt is empty
    /// - Returns [`GenerationError::Storage`] if persistence fails
    async fn handle_generation(&self, prompt: &str) -> Result<GenerationOutcome, GenerationError>;

    /// Lists stored records, most recent first, capped at `limit`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Storage`] on connection failures.
    async fn list_generations(&self, limit: u64) -> Result<Vec<GenerationRecord>, GenerationError>;

    /// Retrieves a single record by id.
    ///
    /// # Errors
    ///
    /// - Returns [`GenerationError::NotFound`] if the id is absent
    /// - Returns [`GenerationError::Storage`] on connection failures
    async fn get_generation(&self, id: &RecordId) -> Result<GenerationRecord, GenerationError>;

    /// Deletes a single record by id.
    ///
    /// # Errors
    ///
    /// - Returns [`GenerationError::NotFound`] if the id is absent
    /// - Returns [`GenerationError::Storage`] on connection failures
    async fn delete_generation(&self, id: &RecordId) -> Result<(), GenerationError>;

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Storage`] on connection failures.
    async fn count_generations(&self) -> Result<u64, GenerationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_error_display() {
        let err = GenerationError::NotFound(RecordId::new("abc"));
        assert_eq!(err.to_string(), "Section not found: abc");

        let err = GenerationError::InvalidPrompt;
        assert_eq!(err.to_string(), "Prompt is required and must be a string");
    }

    #[test]
    fn db_error_maps_to_storage() {
        let db_err = sea_orm::DbErr::Custom("disk full".to_string());
        let err: GenerationError = db_err.into();
        assert!(matches!(err, GenerationError::Storage(_)));
        assert!(err.to_string().contains("disk full"));
    }
}
