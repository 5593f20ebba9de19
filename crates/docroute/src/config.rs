//! Pipeline configuration.
//!
//! Configuration can be created programmatically, loaded from a TOML file,
//! or assembled from the environment. Every field has a serde default so a
//! partial file is valid; credentials are deliberately *not* defaulted and
//! their absence is detected before any network call.

use crate::{DocrouteError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Complete configuration for one pipeline instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// OCR service used by the image extractor.
    #[serde(default)]
    pub ocr: OcrServiceConfig,

    /// Reasoning service used by the classifier.
    #[serde(default)]
    pub reasoning: ReasoningServiceConfig,

    /// Speech-synthesis service used by the audio renderer.
    #[serde(default)]
    pub speech: SpeechServiceConfig,
}

impl PipelineConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&content)
            .map_err(|e| DocrouteError::parsing_with_source("invalid pipeline configuration", e))
    }

    /// Build configuration from defaults plus environment overrides.
    ///
    /// Recognized variables: `DOCROUTE_OCR_API_KEY` (fallback `OCR_API_KEY`),
    /// `DOCROUTE_REASONING_API_KEY` (fallback `OPENAI_API_KEY`) and
    /// `DOCROUTE_REASONING_MODEL`.
    pub fn from_env() -> Self {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        config.ocr.api_key = lookup("DOCROUTE_OCR_API_KEY").or_else(|| lookup("OCR_API_KEY"));
        config.reasoning.api_key =
            lookup("DOCROUTE_REASONING_API_KEY").or_else(|| lookup("OPENAI_API_KEY"));
        if let Some(model) = lookup("DOCROUTE_REASONING_MODEL") {
            config.reasoning.model = model;
        }
        config
    }
}

/// OCR service settings (HTTP multipart contract).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrServiceConfig {
    #[serde(default = "default_ocr_endpoint")]
    pub endpoint: String,

    /// API key sent as the `apikey` form field. `None` short-circuits the
    /// extractor before any network call.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Language hint forwarded to the OCR engine.
    #[serde(default = "default_ocr_language")]
    pub language_hint: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OcrServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_ocr_endpoint(),
            api_key: None,
            language_hint: default_ocr_language(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl OcrServiceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Reasoning service settings (chat-completions contract).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReasoningServiceConfig {
    #[serde(default = "default_reasoning_endpoint")]
    pub endpoint: String,

    /// Bearer credential. `None` or blank short-circuits classification
    /// before any network call.
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_reasoning_model")]
    pub model: String,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Fixed low temperature keeps the structured output deterministic-leaning.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ReasoningServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_reasoning_endpoint(),
            api_key: None,
            model: default_reasoning_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ReasoningServiceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Speech-synthesis service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechServiceConfig {
    #[serde(default = "default_speech_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SpeechServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_speech_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SpeechServiceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_speech_endpoint() -> String {
    "https://translate.google.com/translate_tts".to_string()
}

fn default_ocr_endpoint() -> String {
    "https://api.ocr.space/parse/image".to_string()
}

fn default_ocr_language() -> String {
    "eng".to_string()
}

fn default_reasoning_endpoint() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_reasoning_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_max_tokens() -> u32 {
    400
}

fn default_temperature() -> f32 {
    0.2
}

fn default_timeout_secs() -> u64 {
    30
}
