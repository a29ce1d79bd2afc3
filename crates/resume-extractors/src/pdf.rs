//! PDF text extraction using pdf-extract.

use crate::error::{ExtractError, ExtractResult};
use crate::types::{ContentSource, DocumentFormat, DocumentStructure, ExtractedContent};
use crate::Extractor;
use async_trait::async_trait;
use tracing::debug;

/// PDF text extractor using the pdf-extract library.
///
/// Text is extracted page by page in document order and the pages are
/// concatenated with no separator. Synchronous pdf-extract calls run in
/// spawn_blocking; a panic inside the parser surfaces as
/// [`ExtractError::TaskJoin`].
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    /// Create new PDF extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract per-page text synchronously (called within spawn_blocking).
    fn extract_pages(content: &[u8]) -> ExtractResult<Vec<String>> {
        pdf_extract::extract_text_from_mem_by_pages(content)
            .map_err(|e| ExtractError::Pdf(format!("Failed to parse PDF: {}", e)))
    }
}

/// Concatenate page texts in order, without separators.
pub(crate) fn join_pages(pages: &[String]) -> String {
    pages.concat()
}

#[async_trait]
impl Extractor for PdfExtractor {
    async fn extract(&self, content: &[u8]) -> ExtractResult<ExtractedContent> {
        let content = content.to_vec();

        let pages = tokio::task::spawn_blocking(move || Self::extract_pages(&content)).await??;

        debug!(pages = pages.len(), "Extracted PDF text");

        let structure = DocumentStructure {
            page_count: Some(pages.len()),
            paragraph_count: None,
        };

        Ok(
            ExtractedContent::new(join_pages(&pages), DocumentFormat::Pdf, ContentSource::Bytes)
                .with_structure(structure),
        )
    }

    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    fn name(&self) -> &str {
        "pdf-extract"
    }
}
