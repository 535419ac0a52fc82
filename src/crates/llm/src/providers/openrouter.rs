//! OpenRouter client implementation.
//!
//! OpenRouter routes requests to many upstream providers behind an
//! OpenAI-compatible API. It accepts optional attribution headers
//! (`HTTP-Referer`, `X-Title`) which rank the app on their leaderboard;
//! both are sent when an app name is configured.

use crate::client::{CompletionClient, CompletionRequest};
use crate::config::ProviderConfig;
use crate::error::{LlmError, Result};
use async_trait::async_trait;
use athar_core::ProviderKind;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";

/// OpenRouter API client.
#[derive(Clone)]
pub struct OpenRouterClient {
    config: ProviderConfig,
    client: Client,
    app_name: Option<String>,
}

impl OpenRouterClient {
    /// Create a new OpenRouter client with the given configuration.
    pub fn new(config: ProviderConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            client,
            app_name: Some("athar".to_string()),
        }
    }

    /// Set the application name for OpenRouter tracking.
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// Convert a completion request to the OpenRouter wire shape.
    fn build_body(&self, request: &CompletionRequest) -> OpenRouterRequest {
        OpenRouterRequest {
            model: self.config.model.clone(),
            messages: vec![
                OpenRouterMessage {
                    role: "system".to_string(),
                    content: request.system.clone(),
                },
                OpenRouterMessage {
                    role: "user".to_string(),
                    content: request.prompt.clone(),
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            response_format: request.json_output.then(|| OpenRouterResponseFormat {
                format_type: "json_object".to_string(),
            }),
        }
    }

    /// Pull the answer text out of an OpenRouter response.
    fn extract_text(response: OpenRouterResponse) -> Result<String> {
        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                LlmError::Schema("OpenRouter response contained no message text".to_string())
            })
    }
}

#[async_trait]
impl CompletionClient for OpenRouterClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let body = self.build_body(&request);

        debug!(model = %self.config.model, "dispatching OpenRouter completion");

        let mut req = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&body);

        if let Some(app_name) = &self.app_name {
            req = req
                .header("HTTP-Referer", "https://github.com/athar-dev/athar")
                .header("X-Title", app_name);
        }

        let response = req.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(LlmError::from_status(status, error_text));
        }

        let parsed: OpenRouterResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Schema(e.to_string()))?;

        Self::extract_text(parsed)
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenRouter
    }

    fn clone_box(&self) -> Box<dyn CompletionClient> {
        Box::new(self.clone())
    }
}

// OpenRouter API types (OpenAI-compatible)
#[derive(Debug, Serialize)]
struct OpenRouterRequest {
    model: String,
    messages: Vec<OpenRouterMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<OpenRouterResponseFormat>,
}

#[derive(Debug, Serialize)]
struct OpenRouterMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct OpenRouterResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

#[derive(Debug, Deserialize)]
struct OpenRouterResponse {
    choices: Vec<OpenRouterChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenRouterChoice {
    message: OpenRouterResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OpenRouterResponseMessage {
    content: Option<String>,
}
