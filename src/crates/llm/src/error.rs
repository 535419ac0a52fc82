//! Error types for the provider adapters.

use thiserror::Error;

/// Result type for adapter operations.
pub type Result<T> = std::result::Result<T, LlmError>;

/// Errors a provider call can surface to the caller.
///
/// Exactly one of these is delivered per failed call; nothing is retried
/// here. The message text is what the provider reported and is surfaced
/// to the user verbatim.
#[derive(Debug, Error)]
pub enum LlmError {
    /// The credential was rejected (HTTP 401/403) or missing.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The provider rejected the call for quota reasons (HTTP 429).
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    /// The request never produced a usable HTTP response, or the
    /// provider answered with an unexpected status.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response arrived but did not parse into the target entity.
    #[error("Schema error: {0}")]
    Schema(String),
}

impl LlmError {
    /// Map a non-success HTTP status to the matching error kind.
    pub fn from_status(status: reqwest::StatusCode, body: String) -> Self {
        match status.as_u16() {
            401 | 403 => LlmError::Authentication(body),
            429 => LlmError::RateLimited(body),
            _ => LlmError::Transport(format!("HTTP {}: {}", status, body)),
        }
    }

    /// Check if this error is due to authentication.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, LlmError::Authentication(_))
    }

    /// Check if this error means the response shape was wrong.
    pub fn is_schema_error(&self) -> bool {
        matches!(self, LlmError::Schema(_))
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        LlmError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        LlmError::Schema(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn status_mapping_is_distinguishable() {
        assert!(matches!(
            LlmError::from_status(StatusCode::UNAUTHORIZED, String::new()),
            LlmError::Authentication(_)
        ));
        assert!(matches!(
            LlmError::from_status(StatusCode::FORBIDDEN, String::new()),
            LlmError::Authentication(_)
        ));
        assert!(matches!(
            LlmError::from_status(StatusCode::TOO_MANY_REQUESTS, String::new()),
            LlmError::RateLimited(_)
        ));
        assert!(matches!(
            LlmError::from_status(StatusCode::INTERNAL_SERVER_ERROR, String::new()),
            LlmError::Transport(_)
        ));
    }

    #[test]
    fn transport_message_carries_status() {
        let err = LlmError::from_status(StatusCode::BAD_GATEWAY, "upstream down".to_string());
        assert_eq!(
            err.to_string(),
            "Transport error: HTTP 502 Bad Gateway: upstream down"
        );
    }
}
