//! Error types for the ATHAR application layer.

use thiserror::Error;

/// Result type alias for application operations.
pub type Result<T> = std::result::Result<T, AtharError>;

/// Unified application error.
///
/// Adapter failures pass through unchanged so their message reaches the
/// user verbatim; nothing here is retried automatically.
#[derive(Debug, Error)]
pub enum AtharError {
    /// No active credentials. The user has to run `athar configure`.
    #[error("No AI provider is configured. Run `athar configure` first.")]
    NotConfigured,

    /// A provider adapter failure, surfaced as-is.
    #[error(transparent)]
    Llm(#[from] llm::LlmError),

    /// Rendering was requested before a proposal was resolved.
    #[error("No resolved proposal is available yet")]
    ProposalNotReady,

    /// An idea was selected outside the `Ideas` state.
    #[error("No idea batch to select from; submit a vision first")]
    NoIdeaBatch,

    /// The selected id is not in the current batch.
    #[error("No idea with id '{0}' in the current batch")]
    UnknownIdea(String),

    /// Artifact serialization failure.
    #[error(transparent)]
    Export(#[from] export::ExportError),

    /// Credential store read/parse failure.
    #[error("Credential store error: {0}")]
    Store(String),

    /// Invalid command-line input.
    #[error("{0}")]
    InvalidArgument(String),

    /// IO error (store writes, artifact delivery).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
