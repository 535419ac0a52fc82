//! Groq client implementation.
//!
//! Groq exposes an OpenAI-compatible chat completions API at its own
//! endpoint, so the wire shape mirrors the OpenAI client; only the base
//! URL, the model catalogue and the error payloads differ.

use crate::client::{CompletionClient, CompletionRequest};
use crate::config::ProviderConfig;
use crate::error::{LlmError, Result};
use async_trait::async_trait;
use athar_core::ProviderKind;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Groq API client.
#[derive(Clone)]
pub struct GroqClient {
    config: ProviderConfig,
    client: Client,
}

impl GroqClient {
    /// Create a new Groq client with the given configuration.
    pub fn new(config: ProviderConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Convert a completion request to the Groq wire shape.
    fn build_body(&self, request: &CompletionRequest) -> GroqRequest {
        GroqRequest {
            model: self.config.model.clone(),
            messages: vec![
                GroqMessage {
                    role: "system".to_string(),
                    content: request.system.clone(),
                },
                GroqMessage {
                    role: "user".to_string(),
                    content: request.prompt.clone(),
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            response_format: request.json_output.then(|| GroqResponseFormat {
                format_type: "json_object".to_string(),
            }),
        }
    }

    /// Pull the answer text out of a Groq response.
    fn extract_text(response: GroqResponse) -> Result<String> {
        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmError::Schema("Groq response contained no message text".to_string()))
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let body = self.build_body(&request);

        debug!(model = %self.config.model, "dispatching Groq completion");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(LlmError::from_status(status, error_text));
        }

        let parsed: GroqResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Schema(e.to_string()))?;

        Self::extract_text(parsed)
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Groq
    }

    fn clone_box(&self) -> Box<dyn CompletionClient> {
        Box::new(self.clone())
    }
}

// Groq API types (OpenAI-compatible)
#[derive(Debug, Serialize)]
struct GroqRequest {
    model: String,
    messages: Vec<GroqMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<GroqResponseFormat>,
}

#[derive(Debug, Serialize)]
struct GroqMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct GroqResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

#[derive(Debug, Deserialize)]
struct GroqResponse {
    choices: Vec<GroqChoice>,
}

#[derive(Debug, Deserialize)]
struct GroqChoice {
    message: GroqResponseMessage,
}

#[derive(Debug, Deserialize)]
struct GroqResponseMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_is_openai_compatible() {
        let client = GroqClient::new(ProviderConfig::new("test-key", BASE_URL, DEFAULT_MODEL));
        let body = client.build_body(&CompletionRequest::new("sys", "user").json());
        let serialized = serde_json::to_value(&body).unwrap();

        assert_eq!(serialized["model"], DEFAULT_MODEL);
        assert_eq!(serialized["messages"][0]["role"], "system");
        assert_eq!(serialized["messages"][1]["role"], "user");
        assert_eq!(serialized["response_format"]["type"], "json_object");
    }

    #[test]
    fn extract_text_takes_first_choice() {
        let response: GroqResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"content": "answer"}}, {"message": {"content": "other"}}]}"#,
        )
        .unwrap();

        assert_eq!(GroqClient::extract_text(response).unwrap(), "answer");
    }

    #[test]
    fn null_content_is_a_schema_error() {
        let response: GroqResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap();
        assert!(GroqClient::extract_text(response).unwrap_err().is_schema_error());
    }
}
