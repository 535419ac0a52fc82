//! Provider selection: the closed set of supported backends and the
//! active credentials triple.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of supported LLM backends.
///
/// Adding a vendor means adding a variant here and a client in the `llm`
/// crate; dispatch is always over this enum, never over ad hoc strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    OpenAi,
    Gemini,
    Groq,
    OpenRouter,
}

impl ProviderKind {
    /// All supported backends, in display order.
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::OpenAi,
        ProviderKind::Gemini,
        ProviderKind::Groq,
        ProviderKind::OpenRouter,
    ];

    /// Stable lowercase token used on the wire, in the store and the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Gemini => "gemini",
            ProviderKind::Groq => "groq",
            ProviderKind::OpenRouter => "openrouter",
        }
    }

    /// Whether this backend supports proxy indirection.
    ///
    /// Only Gemini can be routed through an alternate endpoint; the
    /// response contract is identical either way.
    pub fn supports_proxy(&self) -> bool {
        matches!(self, ProviderKind::Gemini)
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a provider token is not one of the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown provider '{0}', expected one of: openai, gemini, groq, openrouter")]
pub struct ParseProviderError(pub String);

impl FromStr for ProviderKind {
    type Err = ParseProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "gemini" => Ok(ProviderKind::Gemini),
            "groq" => Ok(ProviderKind::Groq),
            "openrouter" => Ok(ProviderKind::OpenRouter),
            other => Err(ParseProviderError(other.to_string())),
        }
    }
}

/// The provider/key/proxy triple.
///
/// Exactly one value is active at a time; it is created and replaced only
/// through the credential transaction. `proxy_endpoint` is meaningful
/// only for the provider that supports indirection and is ignored for
/// every other backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub provider: ProviderKind,
    pub secret_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_endpoint: Option<String>,
}

impl Credentials {
    pub fn new(provider: ProviderKind, secret_key: impl Into<String>) -> Self {
        Self {
            provider,
            secret_key: secret_key.into(),
            proxy_endpoint: None,
        }
    }

    /// Set the proxy endpoint.
    pub fn with_proxy(mut self, endpoint: impl Into<String>) -> Self {
        self.proxy_endpoint = Some(endpoint.into());
        self
    }

    /// The proxy endpoint, if set and applicable to this provider.
    pub fn effective_proxy(&self) -> Option<&str> {
        if self.provider.supports_proxy() {
            self.proxy_endpoint.as_deref()
        } else {
            None
        }
    }
}
