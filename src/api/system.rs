//! System status endpoint.
//!
//! Reports process-level facts (version, uptime) alongside a live look at
//! the store so operators can tell a healthy service from a wedged one.

use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiError, AppState, StatusResponse};

/// `GET /generate-sections/status`
///
/// Aggregates the crate version, seconds since startup, the number of
/// stored generation records, and the result of a database ping.
pub async fn get_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatusResponse>, ApiError> {
    let records = state
        .generation_service()
        .count_generations()
        .await
        .map_err(|e| ApiError::from_generation(e, "Failed to fetch status"))?;

    let database = if state.store().ping().await.is_ok() {
        "connected"
    } else {
        "unreachable"
    };

    Ok(Json(StatusResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        records,
        database: database.to_string(),
    }))
}
