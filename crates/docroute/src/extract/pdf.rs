//! Structured-document (PDF) extractor.
//!
//! Reads the document page by page and keeps only pages that carry text.
//! A document with zero extractable pages is a *successful* extraction with
//! empty output; callers must be able to tell that apart from a parse
//! failure.

use crate::extract::{PDF_MEDIA_TYPE, TextExtractor};
use crate::{DocrouteError, Result};
use async_trait::async_trait;
use lopdf::Document;

/// PDF text extraction backed by `lopdf`.
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextExtractor for PdfExtractor {
    fn name(&self) -> &str {
        "pdf"
    }

    fn supported_media_types(&self) -> &[&str] {
        &[PDF_MEDIA_TYPE]
    }

    async fn extract(&self, content: &[u8]) -> Result<String> {
        let document = Document::load_mem(content)
            .map_err(|e| DocrouteError::parsing_with_source("PDF parsing failed", e))?;

        let mut pages_with_text = Vec::new();
        for page_number in document.get_pages().keys() {
            // A page whose text cannot be decoded is treated as carrying no
            // text; only an unreadable document is a parse failure.
            let page_text = match document.extract_text(&[*page_number]) {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(page = *page_number, error = %e, "skipping undecodable PDF page");
                    continue;
                }
            };
            let trimmed = page_text.trim();
            if !trimmed.is_empty() {
                pages_with_text.push(trimmed.to_string());
            }
        }

        Ok(pages_with_text.join("\n"))
    }
}
