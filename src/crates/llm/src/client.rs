//! The transport seam: one request shape, one trait, one client per
//! backend.

use crate::error::Result;
use async_trait::async_trait;
use athar_core::ProviderKind;

/// A single structured-output completion request.
///
/// The system text carries the output-shape instruction; the prompt
/// carries the user's inputs. When `json_output` is set, clients that
/// have a native JSON response mode enable it in addition to the prompt
/// instruction.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system: String,
    pub prompt: String,
    pub temperature: Option<f32>,
    pub max_tokens: Option<usize>,
    pub json_output: bool,
}

impl CompletionRequest {
    pub fn new(system: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            prompt: prompt.into(),
            temperature: None,
            max_tokens: None,
            json_output: false,
        }
    }

    /// Ask the backend for a bare JSON value.
    pub fn json(mut self) -> Self {
        self.json_output = true;
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Cap the response length.
    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// A chat backend reachable over HTTP.
///
/// Implementations convert the request into the vendor's wire shape,
/// make exactly one call and return the answer text. They never retry
/// and keep no state between calls.
///
/// Implementations must be `Send + Sync`; use `Box<dyn CompletionClient>`
/// to hold one selected at runtime.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Issue one completion call and return the raw answer text.
    async fn complete(&self, request: CompletionRequest) -> Result<String>;

    /// Which backend this client talks to.
    fn kind(&self) -> ProviderKind;

    /// Clone this client into a boxed trait object.
    fn clone_box(&self) -> Box<dyn CompletionClient>;
}

impl Clone for Box<dyn CompletionClient> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct EchoClient;

    #[async_trait]
    impl CompletionClient for EchoClient {
        async fn complete(&self, request: CompletionRequest) -> Result<String> {
            Ok(request.prompt)
        }

        fn kind(&self) -> ProviderKind {
            ProviderKind::OpenAi
        }

        fn clone_box(&self) -> Box<dyn CompletionClient> {
            Box::new(self.clone())
        }
    }

    #[tokio::test]
    async fn trait_object_round_trip() {
        let client: Box<dyn CompletionClient> = Box::new(EchoClient);
        let answer = client
            .complete(CompletionRequest::new("sys", "hello"))
            .await
            .unwrap();
        assert_eq!(answer, "hello");
        assert_eq!(client.clone().kind(), ProviderKind::OpenAi);
    }

    #[test]
    fn request_builder() {
        let request = CompletionRequest::new("sys", "user")
            .json()
            .with_temperature(0.2)
            .with_max_tokens(512);

        assert!(request.json_output);
        assert_eq!(request.temperature, Some(0.2));
        assert_eq!(request.max_tokens, Some(512));
    }
}
