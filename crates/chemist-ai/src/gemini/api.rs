//! AiClient trait implementation for GeminiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiClient, AiError, Completion, Turn};

use super::client::GeminiClient;

#[async_trait]
impl AiClient for GeminiClient {
    async fn generate(&self, turns: &[Turn]) -> Result<Completion, AiError> {
        let body = Self::build_request_body(turns);

        debug!(model = %self.config.model, turns = turns.len(), "Gemini API request");

        // `without_url` keeps the key-bearing URL out of error text.
        let response = self
            .http
            .post(self.api_url())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::Network(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let reason = status.canonical_reason().unwrap_or("Unknown Status");
            let message = match text.trim() {
                "" => reason.to_string(),
                detail => format!("{reason}: {detail}"),
            };
            debug!(status = status.as_u16(), "Gemini API returned an error status");
            return Err(AiError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::Parse(e.without_url().to_string()))?;

        Ok(Self::parse_response(&json))
    }
}
