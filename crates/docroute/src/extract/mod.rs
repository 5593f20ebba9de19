//! Text extraction: strategy trait, format dispatch, and the built-in
//! extractors.
//!
//! Dispatch is a pure lookup over the declared media type: exact matches
//! first, then `<prefix>/*` patterns. An unknown media type is data, not an
//! error: [`ExtractorRegistry::select`] is total and returns `None`, which
//! the calling layer converts into an `UnsupportedType` failure.

use crate::types::DocumentHandle;
use crate::{DocrouteError, PipelineConfig, Result};
use async_trait::async_trait;
use std::sync::Arc;

pub mod image;
pub mod office;
pub mod pdf;

pub use image::OcrExtractor;
pub use office::OfficeExtractor;
pub use pdf::PdfExtractor;

/// Media type handled by the structured-document extractor.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Media type handled by the office-document extractor.
pub const DOCX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Prefix pattern handled by the OCR extractor.
pub const IMAGE_MEDIA_PATTERN: &str = "image/*";

/// Format-specific extraction strategy.
///
/// Implementations must never let a parsing-library failure escape: every
/// internal error is converted into a typed `DocrouteError`. Empty output is
/// a *valid* outcome (`Ok("")`), distinct from a parse failure.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Media types this extractor handles. Entries are either exact types
    /// (`"application/pdf"`) or prefix patterns (`"image/*"`).
    fn supported_media_types(&self) -> &[&str];

    /// Extract plain text from raw document bytes.
    async fn extract(&self, content: &[u8]) -> Result<String>;
}

/// Maps a declared media type to an extraction strategy.
///
/// The built-in set covers structured documents (PDF), office documents
/// (DOCX) and images (remote OCR); additional strategies can be registered.
/// Exact media types win over prefix patterns; within a match class the
/// earliest registration wins.
pub struct ExtractorRegistry {
    extractors: Vec<Arc<dyn TextExtractor>>,
}

impl ExtractorRegistry {
    /// Create a registry with the built-in extractors.
    pub fn new(config: &PipelineConfig) -> Result<Self> {
        let mut registry = Self::empty();
        registry.register(Arc::new(PdfExtractor::new()));
        registry.register(Arc::new(OfficeExtractor::new()));
        registry.register(Arc::new(OcrExtractor::new(config.ocr.clone())?));
        Ok(registry)
    }

    /// Create an empty registry.
    pub fn empty() -> Self {
        Self { extractors: Vec::new() }
    }

    /// Register an extraction strategy.
    pub fn register(&mut self, extractor: Arc<dyn TextExtractor>) {
        self.extractors.push(extractor);
    }

    /// Select the extractor for a declared media type.
    ///
    /// Pure, side-effect-free and total: no match is `None`, never a panic.
    pub fn select(&self, media_type: &str) -> Option<Arc<dyn TextExtractor>> {
        for extractor in &self.extractors {
            if extractor.supported_media_types().contains(&media_type) {
                return Some(Arc::clone(extractor));
            }
        }

        for extractor in &self.extractors {
            for pattern in extractor.supported_media_types() {
                if let Some(prefix) = pattern.strip_suffix('*')
                    && prefix.ends_with('/')
                    && media_type.starts_with(prefix)
                {
                    return Some(Arc::clone(extractor));
                }
            }
        }

        None
    }

    /// Run the matching extractor over a document handle.
    ///
    /// A registry miss becomes `UnsupportedType`; everything else is the
    /// extractor's own tagged outcome.
    pub async fn extract(&self, handle: &DocumentHandle) -> Result<String> {
        let media_type = handle.media_type();
        let extractor = self
            .select(media_type)
            .ok_or_else(|| DocrouteError::UnsupportedType(media_type.to_string()))?;

        tracing::debug!(
            extractor = extractor.name(),
            media_type,
            bytes = handle.byte_len(),
            "extracting document text"
        );
        extractor.extract(handle.bytes()).await
    }

    /// Names of all registered extractors, in registration order.
    pub fn list(&self) -> Vec<&str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }
}
