//! Core data types shared across the pipeline.

use crate::Result;
use crate::departments::Department;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Maximum summary length in characters; longer summaries are truncated
/// during normalization.
pub const MAX_SUMMARY_CHARS: usize = 600;

/// Immutable reference to an uploaded document.
///
/// Created once at upload time and read-only afterwards; superseded wholesale
/// when a new document enters the session. The media type is the *declared*
/// type: dispatch trusts it and treats an unknown declaration as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHandle {
    name: String,
    media_type: String,
    bytes: Vec<u8>,
}

impl DocumentHandle {
    /// Create a handle from in-memory bytes and a declared media type.
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Create a handle by reading a file and guessing its media type from
    /// the extension.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let media_type = mime_guess::from_path(path).first_or_octet_stream().to_string();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        Ok(Self {
            name,
            media_type,
            bytes,
        })
    }

    /// Display name of the document.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared media type.
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Raw document bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Size of the document in bytes.
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }
}

/// Urgency assigned to a classified document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Parse a priority label, tolerating whitespace and case. Unknown
    /// labels yield `None`; normalization applies the default.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            "critical" => Some(Priority::Critical),
            _ => None,
        }
    }

    /// Stable lowercase label.
    pub const fn label(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }
}

/// Fully-populated classification of an extracted document.
///
/// Every field has a defined default, so the record is complete even when the
/// reasoning service returned a partial or malformed payload. Normalization
/// never fails on a single bad field; only a payload that is not a JSON
/// object at all is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: Department,
    pub priority: Priority,
    pub recommended_department: Department,
    pub resolved: bool,
    pub summary: String,
    pub confidence: u8,
}

impl Default for ClassificationResult {
    fn default() -> Self {
        Self {
            category: Department::fallback(),
            priority: Priority::default(),
            recommended_department: Department::fallback(),
            resolved: false,
            summary: String::new(),
            confidence: 85,
        }
    }
}

/// Encoded audio rendering of a classification summary.
///
/// Audio is a best-effort enhancement: synthesis failure and blank input both
/// produce an *empty* artifact, never an error. The payload is suitable for
/// transport as text via [`AudioArtifact::to_base64`] and for direct playback
/// once decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioArtifact {
    bytes: Vec<u8>,
    mime_type: &'static str,
    language: String,
}

impl AudioArtifact {
    /// MIME type of synthesized payloads.
    pub const MIME_TYPE: &'static str = "audio/mpeg";

    /// Create an artifact from synthesized bytes.
    pub fn new(bytes: Vec<u8>, language: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: Self::MIME_TYPE,
            language: language.into(),
        }
    }

    /// The empty artifact produced when synthesis was skipped or failed.
    pub fn empty(language: impl Into<String>) -> Self {
        Self::new(Vec::new(), language)
    }

    /// Whether this artifact carries any audio.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Raw encoded audio bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// MIME type of the payload.
    pub fn mime_type(&self) -> &str {
        self.mime_type
    }

    /// Language tag the summary was synthesized in.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Base64 encoding of the payload for text transport.
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.bytes)
    }
}
