//! Image extractor delegating to a remote OCR service.
//!
//! The request is a multipart POST carrying the raw image bytes, the API key
//! and a language hint. Transport problems (HTTP failure, network failure,
//! timeout) surface as `Service`; a 200 response with an unexpected envelope
//! shape degrades to the `"No text found"` sentinel instead of failing.

use crate::config::OcrServiceConfig;
use crate::extract::{IMAGE_MEDIA_PATTERN, TextExtractor};
use crate::{DocrouteError, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

/// Sentinel returned when the OCR service answered successfully but the
/// envelope carried no recognizable text.
pub const NO_TEXT_SENTINEL: &str = "No text found";

/// Response envelope of the OCR service.
#[derive(Debug, Deserialize)]
struct OcrEnvelope {
    #[serde(rename = "ParsedResults", default)]
    parsed_results: Vec<OcrParsedResult>,
}

#[derive(Debug, Deserialize)]
struct OcrParsedResult {
    #[serde(rename = "ParsedText", default)]
    parsed_text: Option<String>,
}

/// OCR-over-HTTP extractor for `image/*` media types.
pub struct OcrExtractor {
    http: reqwest::Client,
    config: OcrServiceConfig,
}

impl OcrExtractor {
    /// Create an extractor with its own HTTP client bound to the configured
    /// timeout.
    pub fn new(config: OcrServiceConfig) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { http, config })
    }
}

#[async_trait]
impl TextExtractor for OcrExtractor {
    fn name(&self) -> &str {
        "ocr"
    }

    fn supported_media_types(&self) -> &[&str] {
        &[IMAGE_MEDIA_PATTERN]
    }

    async fn extract(&self, content: &[u8]) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| DocrouteError::MissingCredential("OCR API key".to_string()))?;

        let form = Form::new()
            .part("file", Part::bytes(content.to_vec()).file_name("document"))
            .text("apikey", api_key.to_string())
            .text("language", self.config.language_hint.clone());

        let response = self.http.post(&self.config.endpoint).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DocrouteError::service_with_status(
                format!("OCR service returned {status}"),
                status.as_u16(),
            ));
        }

        // Body-read failures are transport errors; a body that does not
        // decode as the expected envelope is degraded to the sentinel.
        let body = response.text().await?;
        let envelope: OcrEnvelope = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::warn!(error = %e, "unexpected OCR response shape");
                return Ok(NO_TEXT_SENTINEL.to_string());
            }
        };

        let text = envelope
            .parsed_results
            .into_iter()
            .next()
            .and_then(|result| result.parsed_text)
            .unwrap_or_else(|| NO_TEXT_SENTINEL.to_string());

        tracing::debug!(chars = text.len(), "OCR extraction complete");
        Ok(text)
    }
}
