//! Core types for text extraction.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Document format, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// PDF document.
    Pdf,
    /// Microsoft Word (OOXML) document.
    Docx,
}

impl DocumentFormat {
    /// Extension including the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => ".pdf",
            DocumentFormat::Docx => ".docx",
        }
    }

    /// Match an extension (with leading dot). Case-sensitive: `.PDF` is not `.pdf`.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            ".pdf" => Some(DocumentFormat::Pdf),
            ".docx" => Some(DocumentFormat::Docx),
            _ => None,
        }
    }
}

/// Extension of `path` with its leading dot, or an empty string when the
/// file name has none. Dotfiles like `.pdf` have no extension.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Source reference for extracted content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentSource {
    /// Content provided as bytes (no file reference).
    Bytes,
    /// Content from file path.
    Path(String),
}

/// Document structure metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStructure {
    /// Total page count (for PDFs).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<usize>,

    /// Body paragraph count (for DOCX).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraph_count: Option<usize>,
}

/// Extracted text with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedContent {
    /// Extracted plain text.
    pub text: String,

    /// Original document format.
    pub format: DocumentFormat,

    /// Document structure (if known).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structure: Option<DocumentStructure>,

    /// Reference to original content.
    pub source: ContentSource,
}

impl ExtractedContent {
    /// Create new extracted content.
    pub fn new(text: String, format: DocumentFormat, source: ContentSource) -> Self {
        Self {
            text,
            format,
            structure: None,
            source,
        }
    }

    /// Add structure information.
    pub fn with_structure(mut self, structure: DocumentStructure) -> Self {
        self.structure = Some(structure);
        self
    }

    /// Replace the source reference.
    pub fn with_source(mut self, source: ContentSource) -> Self {
        self.source = source;
        self
    }

    /// Check if extraction produced meaningful content.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Get content length.
    pub fn len(&self) -> usize {
        self.text.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension_is_case_sensitive() {
        assert_eq!(DocumentFormat::from_extension(".pdf"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_extension(".docx"), Some(DocumentFormat::Docx));
        assert_eq!(DocumentFormat::from_extension(".PDF"), None);
        assert_eq!(DocumentFormat::from_extension(".doc"), None);
        assert_eq!(DocumentFormat::from_extension("pdf"), None);
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of(Path::new("resumes/jane.pdf")), ".pdf");
        assert_eq!(extension_of(Path::new("archive.tar.gz")), ".gz");
        assert_eq!(extension_of(Path::new("README")), "");
        assert_eq!(extension_of(Path::new(".pdf")), "");
    }

    #[test]
    fn test_extracted_content_builders() {
        let content = ExtractedContent::new("  ".to_string(), DocumentFormat::Pdf, ContentSource::Bytes)
            .with_structure(DocumentStructure {
                page_count: Some(2),
                paragraph_count: None,
            })
            .with_source(ContentSource::Path("a.pdf".to_string()));
        assert!(content.is_empty());
        assert_eq!(content.len(), 2);
        assert_eq!(content.source, ContentSource::Path("a.pdf".to_string()));
        assert_eq!(content.structure.unwrap().page_count, Some(2));
    }
}
