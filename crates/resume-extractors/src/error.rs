//! Extraction error types.

use thiserror::Error;

/// Errors that can occur during text extraction.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// File extension is not handled by any extractor.
    #[error("Unsupported file format: {0}. Only '.pdf' and '.docx' are allowed.")]
    UnsupportedFormat(String),

    /// IO error while reading the document.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// PDF-specific extraction error.
    #[cfg(feature = "pdf")]
    #[error("PDF extraction error: {0}")]
    Pdf(String),

    /// DOCX-specific extraction error.
    #[cfg(feature = "docx")]
    #[error("DOCX extraction error: {0}")]
    Docx(String),

    /// Task join error from spawn_blocking.
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;
