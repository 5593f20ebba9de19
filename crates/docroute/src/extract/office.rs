//! Office-document (DOCX) extractor.
//!
//! Keeps the text of non-empty paragraphs joined with newline separators.
//! A document whose paragraphs are all empty extracts to `Ok("")`.

use crate::extract::{DOCX_MEDIA_TYPE, TextExtractor};
use crate::{DocrouteError, Result};
use async_trait::async_trait;
use std::io::Cursor;

/// DOCX text extraction backed by `docx-lite`.
pub struct OfficeExtractor;

impl OfficeExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OfficeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextExtractor for OfficeExtractor {
    fn name(&self) -> &str {
        "office"
    }

    fn supported_media_types(&self) -> &[&str] {
        &[DOCX_MEDIA_TYPE]
    }

    async fn extract(&self, content: &[u8]) -> Result<String> {
        let cursor = Cursor::new(content);
        let document = docx_lite::parse_document(cursor)
            .map_err(|e| DocrouteError::parsing(format!("DOCX parsing failed: {e}")))?;

        // docx-lite emits one paragraph per line; empty paragraphs become
        // blank lines and are dropped here.
        let text = document.extract_text();
        let paragraphs: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();

        Ok(paragraphs.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_garbage_bytes_is_parsing_error() {
        let result = OfficeExtractor::new().extract(b"not a docx file").await;
        assert!(matches!(result.unwrap_err(), DocrouteError::Parsing { .. }));
    }

    #[tokio::test]
    async fn test_empty_input_is_parsing_error() {
        let result = OfficeExtractor::new().extract(b"").await;
        assert!(matches!(result.unwrap_err(), DocrouteError::Parsing { .. }));
    }
}
