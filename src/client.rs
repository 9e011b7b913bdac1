use crate::config::ClientConfig;
use crate::error::{PlantOpsError, Result};
use crate::models::{PlantInputs, Recommendation, RecommendRequest};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Client for the recommendation API.
pub struct AdvisorClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct HealthStatus {
    status: String,
}

impl AdvisorClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.backend_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn recommend_url(&self) -> String {
        format!("{}/recommend", self.base_url)
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }

    pub async fn recommend(&self, inputs: &PlantInputs) -> Result<Recommendation> {
        let payload = RecommendRequest::from(inputs);

        let response = self
            .client
            .post(self.recommend_url())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlantOpsError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        decode(&body)
    }

    pub async fn test_connection(&self) -> Result<bool> {
        let response = self.client.get(self.health_url()).send().await?;

        if !response.status().is_success() {
            return Ok(false);
        }

        let body = response.bytes().await?;
        let health: HealthStatus = decode(&body)?;
        Ok(health.status == "ok")
    }
}

/// Decode a response body read in full. A body that arrives but does not
/// parse is a `Json` error, distinct from a failed transfer (`Http`).
fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(body)?)
}
