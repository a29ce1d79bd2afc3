//! DOCX text extraction using docx-rs.
//!
//! Only top-level body paragraphs contribute text, one line each, in
//! document order. Tables, headers and footers are skipped.

use crate::error::{ExtractError, ExtractResult};
use crate::types::{ContentSource, DocumentFormat, DocumentStructure, ExtractedContent};
use crate::Extractor;
use async_trait::async_trait;
use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use tracing::debug;

/// DOCX text extractor using the docx-rs library.
///
/// Wraps synchronous docx-rs calls in spawn_blocking to avoid blocking the
/// async runtime.
#[derive(Debug, Clone, Default)]
pub struct DocxExtractor;

impl DocxExtractor {
    /// Create new DOCX extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract paragraph texts synchronously (called within spawn_blocking).
    fn extract_paragraphs(content: &[u8]) -> ExtractResult<Vec<String>> {
        let docx = docx_rs::read_docx(content)
            .map_err(|e| ExtractError::Docx(format!("Failed to parse DOCX: {}", e)))?;

        let paragraphs = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(p) => Some(Self::paragraph_text(p)),
                _ => None,
            })
            .collect();

        Ok(paragraphs)
    }

    /// Text of one paragraph: its runs in order, tabs as `\t`, breaks as `\n`.
    fn paragraph_text(p: &docx_rs::Paragraph) -> String {
        let mut text = String::new();

        for child in &p.children {
            match child {
                ParagraphChild::Run(r) => Self::push_run(&mut text, r),
                ParagraphChild::Hyperlink(h) => {
                    for child in &h.children {
                        if let ParagraphChild::Run(r) = child {
                            Self::push_run(&mut text, r);
                        }
                    }
                }
                _ => {}
            }
        }

        text
    }

    fn push_run(text: &mut String, run: &docx_rs::Run) {
        for run_child in &run.children {
            match run_child {
                RunChild::Text(t) => text.push_str(&t.text),
                RunChild::Tab(_) => text.push('\t'),
                RunChild::Break(_) => text.push('\n'),
                _ => {}
            }
        }
    }
}

#[async_trait]
impl Extractor for DocxExtractor {
    async fn extract(&self, content: &[u8]) -> ExtractResult<ExtractedContent> {
        let content = content.to_vec();

        let paragraphs =
            tokio::task::spawn_blocking(move || Self::extract_paragraphs(&content)).await??;

        debug!(paragraphs = paragraphs.len(), "Extracted DOCX text");

        let structure = DocumentStructure {
            page_count: None, // DOCX doesn't have inherent page structure
            paragraph_count: Some(paragraphs.len()),
        };

        Ok(ExtractedContent::new(
            paragraphs.join("\n"),
            DocumentFormat::Docx,
            ContentSource::Bytes,
        )
        .with_structure(structure))
    }

    fn format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }

    fn name(&self) -> &str {
        "docx-rs"
    }
}
