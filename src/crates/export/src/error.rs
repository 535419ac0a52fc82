//! Error types for artifact rendering.

use thiserror::Error;

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors raised while serializing an artifact container.
///
/// Building the intermediate tree/grid is infallible; only the container
/// serialization can fail.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The document container could not be assembled.
    #[error("Failed to assemble document artifact: {0}")]
    Document(String),

    /// The workbook container could not be assembled.
    #[error("Failed to assemble workbook artifact: {0}")]
    Workbook(String),
}
