//! Factory for creating extractors.

use std::path::Path;
use std::sync::Arc;

use crate::error::{ExtractError, ExtractResult};
use crate::types::{extension_of, DocumentFormat};
use crate::Extractor;

#[cfg(feature = "pdf")]
use crate::PdfExtractor;

#[cfg(feature = "docx")]
use crate::DocxExtractor;

/// Factory for creating text extractors.
pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Create a PDF extractor.
    #[cfg(feature = "pdf")]
    pub fn pdf() -> Arc<dyn Extractor> {
        Arc::new(PdfExtractor::new())
    }

    /// Create a DOCX extractor.
    #[cfg(feature = "docx")]
    pub fn docx() -> Arc<dyn Extractor> {
        Arc::new(DocxExtractor::new())
    }

    /// Create extractor for a document format.
    pub fn for_format(format: DocumentFormat) -> ExtractResult<Arc<dyn Extractor>> {
        match format {
            #[cfg(feature = "pdf")]
            DocumentFormat::Pdf => Ok(Self::pdf()),

            #[cfg(feature = "docx")]
            DocumentFormat::Docx => Ok(Self::docx()),

            #[allow(unreachable_patterns)]
            other => Err(ExtractError::UnsupportedFormat(other.extension().to_string())),
        }
    }

    /// Create extractor for an extension such as `.pdf` (case-sensitive).
    pub fn for_extension(ext: &str) -> ExtractResult<Arc<dyn Extractor>> {
        DocumentFormat::from_extension(ext)
            .ok_or_else(|| ExtractError::UnsupportedFormat(ext.to_string()))
            .and_then(Self::for_format)
    }

    /// Create extractor for a file path, judged by its extension only.
    pub fn for_path(path: &Path) -> ExtractResult<Arc<dyn Extractor>> {
        Self::for_extension(&extension_of(path))
    }
}
