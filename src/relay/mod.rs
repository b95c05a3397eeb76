//! Relay role.
//!
//! A thin public-facing proxy in front of the generation backend. It owns no
//! storage; every route forwards upstream and translates the outcome. The one
//! piece of local behavior is the development fallback on the generate route,
//! where a failed upstream call is answered with locally synthesized sections
//! instead of an error. Production keeps the failure visible.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::api::{ErrorBody, GenerateSectionsRequest, GenerateSectionsResponse, observability};
use crate::clients::backend::{BackendClient, UpstreamError};
use crate::config::{Config, Environment};
use crate::domain::classifier;
use crate::domain::sections::generate_sections;
use crate::state::build_shared_http_client;

#[derive(Clone)]
pub struct RelayState {
    pub backend: BackendClient,
    pub environment: Environment,
}

impl RelayState {
    #[must_use]
    pub const fn new(backend: BackendClient, environment: Environment) -> Self {
        Self {
            backend,
            environment,
        }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = build_shared_http_client(config.relay.request_timeout_seconds)?;
        let backend = BackendClient::new(config.relay.backend_url.clone(), client);

        Ok(Self::new(backend, config.relay.environment))
    }
}

#[derive(Debug, Serialize)]
pub struct RelayHealthResponse {
    pub status: &'static str,
    pub backend: &'static str,
}

#[must_use]
pub fn router(state: Arc<RelayState>) -> Router {
    Router::new()
        .route("/api/generate-sections", post(relay_generate))
        .route("/api/generate-sections", get(relay_list))
        .route("/api/generate-sections/{id}", get(relay_get))
        .route("/api/generate-sections/{id}", delete(relay_delete))
        .route("/api/health", get(relay_health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::logging_middleware))
}

fn upstream_failure(summary: &str, err: &UpstreamError) -> Response {
    if err.is_not_found() {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorBody::new("Section not found")),
        )
            .into_response();
    }

    error!("{}: {}", summary, err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::with_details(summary, err.to_string())),
    )
        .into_response()
}

async fn relay_generate(
    State(state): State<Arc<RelayState>>,
    Json(payload): Json<GenerateSectionsRequest>,
) -> Response {
    let Some(prompt) = payload.prompt.filter(|p| !p.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::new("Prompt is required and must be a string")),
        )
            .into_response();
    };

    match state.backend.generate_sections(&prompt).await {
        Ok(body) => Json(body).into_response(),
        Err(err) if state.environment.is_development() => {
            warn!("Backend generation failed, synthesizing sections locally: {err}");

            let business = classifier::classify(&prompt);
            Json(GenerateSectionsResponse {
                sections: generate_sections(business),
            })
            .into_response()
        }
        Err(err) => {
            error!("Failed to generate sections: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::with_details(
                    "Failed to generate sections",
                    err.to_string(),
                )),
            )
                .into_response()
        }
    }
}

async fn relay_list(State(state): State<Arc<RelayState>>) -> Response {
    match state.backend.fetch_all().await {
        Ok(body) => Json(body).into_response(),
        Err(err) => {
            error!("Failed to fetch sections: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::with_details(
                    "Failed to fetch sections",
                    err.to_string(),
                )),
            )
                .into_response()
        }
    }
}

async fn relay_get(State(state): State<Arc<RelayState>>, Path(id): Path<String>) -> Response {
    match state.backend.fetch_by_id(&id).await {
        Ok(body) => Json(body).into_response(),
        Err(err) => upstream_failure("Failed to fetch section", &err),
    }
}

async fn relay_delete(State(state): State<Arc<RelayState>>, Path(id): Path<String>) -> Response {
    match state.backend.delete_by_id(&id).await {
        Ok(body) => Json(body).into_response(),
        Err(err) => upstream_failure("Failed to delete section", &err),
    }
}

async fn relay_health(State(state): State<Arc<RelayState>>) -> Json<RelayHealthResponse> {
    let backend = match state.backend.health_check().await {
        Ok(_) => "ok",
        Err(err) => {
            warn!("Backend health check failed: {err}");
            "unreachable"
        }
    };

    Json(RelayHealthResponse {
        status: "ok",
        backend,
    })
}
