use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::{
    ApiError, AppState, DeleteResponse, GenerateSectionsRequest, GenerateSectionsResponse,
    HealthResponse,
};
use crate::constants::limits;
use crate::domain::RecordId;
use crate::domain::sections::GenerationRecord;

pub async fn generate_sections(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GenerateSectionsRequest>,
) -> Result<Json<GenerateSectionsResponse>, ApiError> {
    let prompt = payload.prompt.unwrap_or_default();

    let outcome = state
        .generation_service()
        .handle_generation(&prompt)
        .await
        .map_err(|e| ApiError::from_generation(e, "Failed to generate sections"))?;

    Ok(Json(GenerateSectionsResponse {
        sections: outcome.sections,
    }))
}

pub async fn list_sections(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<GenerationRecord>>, ApiError> {
    let records = state
        .generation_service()
        .list_generations(limits::DEFAULT_LIST_LIMIT)
        .await
        .map_err(|e| ApiError::from_generation(e, "Failed to fetch sections"))?;

    Ok(Json(records))
}

pub async fn get_section(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<GenerationRecord>, ApiError> {
    let id = RecordId::new(id);
    let record = state
        .generation_service()
        .get_generation(&id)
        .await
        .map_err(|e| ApiError::from_generation(e, "Failed to fetch section"))?;

    Ok(Json(record))
}

pub async fn delete_section(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = RecordId::new(id);
    state
        .generation_service()
        .delete_generation(&id)
        .await
        .map_err(|e| ApiError::from_generation(e, "Failed to delete section"))?;

    Ok(Json(DeleteResponse {
        message: "Section deleted successfully".to_string(),
    }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
