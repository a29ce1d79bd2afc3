//! resume-extractors - Plain-text extraction from resume documents.
//!
//! Dispatches on file extension (case-sensitive `.pdf` / `.docx`) to a
//! format-specific extractor behind a common trait.
//!
//! # Features
//!
//! - `pdf` (default) - PDF text extraction via pdf-extract
//! - `docx` (default) - DOCX text extraction via docx-rs
//!
//! # Example
//!
//! ```ignore
//! use resume_extractors::extract_text;
//!
//! let text = extract_text("resumes/jane.pdf").await?;
//! ```

mod error;
mod factory;
mod types;

#[cfg(feature = "pdf")]
mod pdf;

#[cfg(feature = "docx")]
mod docx;

pub use error::{ExtractError, ExtractResult};
pub use factory::ExtractorFactory;
pub use types::{extension_of, ContentSource, DocumentFormat, DocumentStructure, ExtractedContent};

#[cfg(feature = "pdf")]
pub use pdf::PdfExtractor;

#[cfg(feature = "docx")]
pub use docx::DocxExtractor;

use std::path::Path;

use async_trait::async_trait;
use tracing::{debug, warn};

/// Core Extractor trait - all document extractors implement this.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extract text content from document bytes.
    async fn extract(&self, content: &[u8]) -> ExtractResult<ExtractedContent>;

    /// Document format handled by this extractor.
    fn format(&self) -> DocumentFormat;

    /// Check if this extractor handles the given extension (with leading dot).
    fn supports(&self, extension: &str) -> bool {
        self.format().extension() == extension
    }

    /// Human-readable name for this extractor.
    fn name(&self) -> &str;
}

/// Read a document from disk and extract its text with metadata.
///
/// The extension is checked before the file is opened, so an unsupported
/// format is reported even for a path that does not exist.
pub async fn extract_file(path: impl AsRef<Path>) -> ExtractResult<ExtractedContent> {
    let path = path.as_ref();
    let extractor = ExtractorFactory::for_path(path)?;

    let bytes = tokio::fs::read(path).await?;
    debug!(
        path = %path.display(),
        bytes = bytes.len(),
        extractor = extractor.name(),
        "Read document"
    );

    let content = extractor.extract(&bytes).await?;
    if content.is_empty() {
        warn!(path = %path.display(), "Document has no extractable text");
    } else {
        debug!(path = %path.display(), text_len = content.len(), "Extracted text");
    }

    Ok(content.with_source(ContentSource::Path(path.display().to_string())))
}

/// Read a document from disk and return its plain text.
pub async fn extract_text(path: impl AsRef<Path>) -> ExtractResult<String> {
    extract_file(path).await.map(|content| content.text)
}
