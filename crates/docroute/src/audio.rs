//! Best-effort speech synthesis of classification summaries.
//!
//! Audio is an enhancement, never a pipeline-blocking step: blank input and
//! every synthesis failure degrade to an empty [`AudioArtifact`]. Failures
//! are logged so operators can still distinguish causes.

use crate::config::SpeechServiceConfig;
use crate::types::AudioArtifact;
use crate::{DocrouteError, Result};

/// Client for the external speech-synthesis service.
pub struct SpeechSynthesizer {
    http: reqwest::Client,
    config: SpeechServiceConfig,
}

impl SpeechSynthesizer {
    /// Create a synthesizer with its own HTTP client bound to the configured
    /// timeout.
    pub fn new(config: SpeechServiceConfig) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { http, config })
    }

    /// Synthesize `text` in `language`.
    ///
    /// Blank input returns an empty artifact without touching the network;
    /// service failures are swallowed into an empty artifact as well.
    pub async fn synthesize(&self, text: &str, language: &str) -> AudioArtifact {
        if text.trim().is_empty() {
            return AudioArtifact::empty(language);
        }

        match self.request(text, language).await {
            Ok(bytes) if !bytes.is_empty() => {
                tracing::debug!(bytes = bytes.len(), language, "audio summary synthesized");
                AudioArtifact::new(bytes, language)
            }
            Ok(_) => AudioArtifact::empty(language),
            Err(e) => {
                tracing::warn!(error = %e, language, "speech synthesis failed; continuing without audio");
                AudioArtifact::empty(language)
            }
        }
    }

    async fn request(&self, text: &str, language: &str) -> Result<Vec<u8>> {
        let response = self
            .http
            .get(&self.config.endpoint)
            .query(&[("ie", "UTF-8"), ("q", text), ("tl", language), ("client", "tw-ob")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DocrouteError::service_with_status(
                format!("speech service returned {status}"),
                status.as_u16(),
            ));
        }

        Ok(response.bytes().await?.to_vec())
    }
}
