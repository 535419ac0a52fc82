//! Google Gemini client implementation.
//!
//! Gemini differs from the OpenAI-shaped backends on every axis: the
//! model is part of the URL path, the key travels as a query parameter,
//! messages are `contents` of `parts`, and JSON output is requested via
//! `responseMimeType`. It is also the one backend that supports proxy
//! indirection - the factory hands this client a substituted base URL
//! and nothing here changes.

use crate::client::{CompletionClient, CompletionRequest};
use crate::config::ProviderConfig;
use crate::error::{LlmError, Result};
use async_trait::async_trait;
use athar_core::ProviderKind;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Google Gemini API client.
#[derive(Clone)]
pub struct GeminiClient {
    config: ProviderConfig,
    client: Client,
}

impl GeminiClient {
    /// Create a new Gemini client with the given configuration.
    pub fn new(config: ProviderConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Gemini API URL format: `base_url/models/{model}:generateContent`.
    fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    /// Convert a completion request to the Gemini wire shape.
    fn build_body(&self, request: &CompletionRequest) -> GeminiRequest {
        GeminiRequest {
            system_instruction: Some(GeminiContent {
                role: None,
                parts: vec![GeminiPart {
                    text: request.system.clone(),
                }],
            }),
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: request.prompt.clone(),
                }],
            }],
            generation_config: Some(GeminiGenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_tokens,
                response_mime_type: request
                    .json_output
                    .then(|| "application/json".to_string()),
            }),
        }
    }

    /// Pull the answer text out of a Gemini response.
    ///
    /// Candidates carry their text split over parts; they are joined in
    /// order.
    fn extract_text(response: GeminiResponse) -> Result<String> {
        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::Schema("Gemini response contained no candidates".to_string()))?;

        let text = candidate
            .content
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect::<Vec<_>>()
            .join("");

        if text.is_empty() {
            return Err(LlmError::Schema(
                "Gemini candidate contained no text parts".to_string(),
            ));
        }
        Ok(text)
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        let url = self.request_url();
        let body = self.build_body(&request);

        debug!(model = %self.config.model, "dispatching Gemini completion");

        let response = self
            .client
            .post(&url)
            .query(&[("key", &self.config.api_key)])
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(LlmError::from_status(status, error_text));
        }

        let parsed: GeminiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Schema(e.to_string()))?;

        Self::extract_text(parsed)
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Gemini
    }

    fn clone_box(&self) -> Box<dyn CompletionClient> {
        Box::new(self.clone())
    }
}

// Gemini API types
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GeminiGenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_at(base_url: &str) -> GeminiClient {
        GeminiClient::new(ProviderConfig::new("test-key", base_url, DEFAULT_MODEL))
    }

    #[test]
    fn url_embeds_model_path() {
        assert_eq!(
            client_at(BASE_URL).request_url(),
            format!("{}/models/{}:generateContent", BASE_URL, DEFAULT_MODEL)
        );
    }

    #[test]
    fn proxy_base_changes_transport_only() {
        let bridged = client_at("https://bridge.example/v1beta");
        assert_eq!(
            bridged.request_url(),
            format!("https://bridge.example/v1beta/models/{}:generateContent", DEFAULT_MODEL)
        );

        // Same request body regardless of routing.
        let direct_body = client_at(BASE_URL).build_body(&CompletionRequest::new("s", "p").json());
        let bridged_body = bridged.build_body(&CompletionRequest::new("s", "p").json());
        assert_eq!(
            serde_json::to_value(&direct_body).unwrap(),
            serde_json::to_value(&bridged_body).unwrap()
        );
    }

    #[test]
    fn json_mode_sets_response_mime_type() {
        let body = client_at(BASE_URL).build_body(&CompletionRequest::new("s", "p").json());
        let serialized = serde_json::to_value(&body).unwrap();

        assert_eq!(
            serialized["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(serialized["systemInstruction"]["parts"][0]["text"], "s");
        assert_eq!(serialized["contents"][0]["role"], "user");
    }

    #[test]
    fn extract_text_joins_parts_in_order() {
        let response: GeminiResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"role": "model",
                "parts": [{"text": "["}, {"text": "]"}]}}]}"#,
        )
        .unwrap();

        assert_eq!(GeminiClient::extract_text(response).unwrap(), "[]");
    }

    #[test]
    fn empty_candidates_is_a_schema_error() {
        let response: GeminiResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(GeminiClient::extract_text(response).unwrap_err().is_schema_error());
    }
}
