//! Provider client implementations.
//!
//! One client per [`ProviderKind`], each speaking its vendor's wire
//! format:
//!
//! - **OpenAI** - chat completions, bearer auth, native JSON mode
//! - **Gemini** - `generateContent`, key as query parameter, JSON MIME
//!   response type; the only backend with proxy indirection
//! - **Groq** - OpenAI-compatible chat completions
//! - **OpenRouter** - OpenAI-compatible chat completions with
//!   attribution headers

pub mod gemini;
pub mod groq;
pub mod openai;
pub mod openrouter;

pub use gemini::GeminiClient;
pub use groq::GroqClient;
pub use openai::OpenAiClient;
pub use openrouter::OpenRouterClient;

use crate::client::CompletionClient;
use crate::config::ProviderConfig;
use athar_core::{Credentials, ProviderKind};

/// Select and build the client for the active credentials.
///
/// This is the single dispatch point over the closed provider set. For
/// Gemini, a configured proxy endpoint replaces the vendor base URL;
/// request and response shapes are unchanged.
pub fn client_for(credentials: &Credentials) -> Box<dyn CompletionClient> {
    match credentials.provider {
        ProviderKind::OpenAi => Box::new(OpenAiClient::new(ProviderConfig::new(
            &credentials.secret_key,
            openai::BASE_URL,
            openai::DEFAULT_MODEL,
        ))),
        ProviderKind::Gemini => Box::new(GeminiClient::new(ProviderConfig::new(
            &credentials.secret_key,
            gemini_base_url(credentials),
            gemini::DEFAULT_MODEL,
        ))),
        ProviderKind::Groq => Box::new(GroqClient::new(ProviderConfig::new(
            &credentials.secret_key,
            groq::BASE_URL,
            groq::DEFAULT_MODEL,
        ))),
        ProviderKind::OpenRouter => Box::new(OpenRouterClient::new(ProviderConfig::new(
            &credentials.secret_key,
            openrouter::BASE_URL,
            openrouter::DEFAULT_MODEL,
        ))),
    }
}

/// The base URL a Gemini call will be routed to: the proxy endpoint when
/// one is configured, the vendor API otherwise.
fn gemini_base_url(credentials: &Credentials) -> &str {
    credentials
        .effective_proxy()
        .unwrap_or(gemini::BASE_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_matches_provider_kind() {
        for kind in ProviderKind::ALL {
            let credentials = Credentials::new(kind, "k");
            assert_eq!(client_for(&credentials).kind(), kind);
        }
    }

    #[test]
    fn gemini_proxy_replaces_base_url() {
        let direct = Credentials::new(ProviderKind::Gemini, "k");
        assert_eq!(gemini_base_url(&direct), gemini::BASE_URL);

        let bridged = Credentials::new(ProviderKind::Gemini, "k")
            .with_proxy("https://bridge.example/v1beta");
        assert_eq!(gemini_base_url(&bridged), "https://bridge.example/v1beta");
    }

    #[test]
    fn proxy_is_ignored_for_other_providers() {
        let credentials =
            Credentials::new(ProviderKind::Groq, "k").with_proxy("https://bridge.example");
        // Factory builds a Groq client against the vendor URL; the proxy
        // field is dead weight for this provider kind.
        assert_eq!(credentials.effective_proxy(), None);
        assert_eq!(client_for(&credentials).kind(), ProviderKind::Groq);
    }
}
