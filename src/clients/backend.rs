use reqwest::Client;
use serde_json::Value;

/// Failure modes of a relayed backend call.
///
/// A non-2xx reply keeps its status so callers can translate it (404 on the
/// by-id routes stays a 404); everything without a usable reply is transport.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("Backend replied {status}")]
    Status {
        status: reqwest::StatusCode,
        body: Value,
    },

    #[error("Backend request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl UpstreamError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            UpstreamError::Status { status, .. } if *status == reqwest::StatusCode::NOT_FOUND
        )
    }
}

/// Thin JSON client for the section-generation backend.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    async fn read_json(response: reqwest::Response) -> Result<Value, UpstreamError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.json().await.unwrap_or(Value::Null);
            return Err(UpstreamError::Status { status, body });
        }

        Ok(response.json().await?)
    }

    pub async fn generate_sections(&self, prompt: &str) -> Result<Value, UpstreamError> {
        let url = format!("{}/generate-sections", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "prompt": prompt }))
            .send()
            .await?;

        Self::read_json(response).await
    }

    pub async fn fetch_all(&self) -> Result<Value, UpstreamError> {
        let url = format!("{}/generate-sections", self.base_url);
        let response = self.client.get(&url).send().await?;

        Self::read_json(response).await
    }

    pub async fn fetch_by_id(&self, id: &str) -> Result<Value, UpstreamError> {
        let url = format!(
            "{}/generate-sections/{}",
            self.base_url,
            urlencoding::encode(id)
        );
        let response = self.client.get(&url).send().await?;

        Self::read_json(response).await
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<Value, UpstreamError> {
        let url = format!(
            "{}/generate-sections/{}",
            self.base_url,
            urlencoding::encode(id)
        );
        let response = self.client.delete(&url).send().await?;

        Self::read_json(response).await
    }

    pub async fn health_check(&self) -> Result<Value, UpstreamError> {
        let url = format!("{}/generate-sections/health", self.base_url);
        let response = self.client.get(&url).send().await?;

        Self::read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let client = BackendClient::new("http://localhost:3002/", Client::new());
        assert_eq!(client.base_url, "http://localhost:3002");
    }

    #[test]
    fn not_found_is_distinguished() {
        let err = UpstreamError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
            body: Value::Null,
        };
        assert!(err.is_not_found());

        let err = UpstreamError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: Value::Null,
        };
        assert!(!err.is_not_found());
    }
}
