//! Gemini API client struct, request building, and response parsing.

use crate::{AiError, Completion, Turn};

use super::config::GeminiConfig;

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| AiError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    /// `generateContent` URL with the key as a query parameter. Never log it.
    pub(crate) fn api_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.base_url.trim_end_matches('/'),
            self.config.model,
            self.config.api_key
        )
    }

    /// Build the JSON request body: every turn, in order, role and text verbatim.
    pub(crate) fn build_request_body(turns: &[Turn]) -> serde_json::Value {
        let contents: Vec<_> = turns
            .iter()
            .map(|turn| {
                serde_json::json!({
                    "role": turn.role.as_str(),
                    "parts": [{ "text": turn.text }]
                })
            })
            .collect();

        serde_json::json!({ "contents": contents })
    }

    /// Pull the first candidate's first text part out of a success body.
    pub(crate) fn parse_response(json: &serde_json::Value) -> Completion {
        match json["candidates"].as_array() {
            Some(candidates) if !candidates.is_empty() => {
                let text = candidates[0]["content"]["parts"][0]["text"]
                    .as_str()
                    .unwrap_or("");
                Completion::Candidate(text.to_string())
            }
            _ => Completion::NoCandidates,
        }
    }
}
