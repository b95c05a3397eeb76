use serde::{Deserialize, Serialize};

use crate::domain::sections::Section;

/// Error payload shared by every non-2xx response.
///
/// `details` carries the underlying cause on 500s and is omitted entirely
/// for client errors, matching what API consumers already parse.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// Body of `POST /generate-sections`.
///
/// The prompt is optional at the deserialization layer so that a missing
/// field reaches the service and is rejected there with a 400 rather than
/// bouncing as an unprocessable-entity error.
#[derive(Debug, Deserialize)]
pub struct GenerateSectionsRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateSectionsResponse {
    pub sections: Vec<Section>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub version: String,
    pub uptime_seconds: u64,
    pub records: u64,
    pub database: String,
}
