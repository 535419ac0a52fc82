//! Common configuration for provider clients.

use std::time::Duration;

/// Connection settings shared by every provider client.
///
/// `base_url` is plain transport configuration: for the provider that
/// supports indirection the factory substitutes the proxy endpoint here
/// and nothing else changes.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// API key for authentication.
    pub api_key: String,

    /// Base URL of the vendor API (or the proxy standing in for it).
    pub base_url: String,

    /// Model name/identifier.
    pub model: String,

    /// Request timeout duration.
    pub timeout: Duration,
}

impl ProviderConfig {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: model.into(),
            timeout: default_timeout(),
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

fn default_timeout() -> Duration {
    Duration::from_secs(120)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = ProviderConfig::new("key", "https://api.example.com", "model-a")
            .with_timeout(Duration::from_secs(10))
            .with_model("model-b");

        assert_eq!(config.api_key, "key");
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.model, "model-b");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }
}
