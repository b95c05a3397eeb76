use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use super::ErrorBody;
use crate::services::GenerationError;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),

    ValidationError(String),

    StorageError { summary: String, details: String },

    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            ApiError::StorageError { summary, details } => {
                write!(f, "{}: {}", summary, details)
            }
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorBody::new(msg)),
            ApiError::ValidationError(msg) => (StatusCode::BAD_REQUEST, ErrorBody::new(msg)),
            ApiError::StorageError { summary, details } => {
                tracing::error!("{}: {}", summary, details);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::with_details(summary, details),
                )
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::with_details("An internal error occurred", msg),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::InternalError(err.to_string())
    }
}

impl ApiError {
    pub fn section_not_found() -> Self {
        ApiError::NotFound("Section not found".to_string())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::ValidationError(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        ApiError::InternalError(msg.into())
    }

    /// Maps a service error to the wire, picking the 500 summary for the
    /// operation that failed.
    pub fn from_generation(err: GenerationError, storage_summary: &str) -> Self {
        match err {
            GenerationError::InvalidPrompt => ApiError::ValidationError(err.to_string()),
            GenerationError::NotFound(_) => Self::section_not_found(),
            GenerationError::Storage(details) => ApiError::StorageError {
                summary: storage_summary.to_string(),
                details,
            },
        }
    }
}
