//! Per-invocation session state machine.
//!
//! A [`DocumentSession`] owns at most one document, one extraction outcome,
//! one classification outcome, one audio artifact, and the chosen output
//! language. Submitting new input supersedes the session wholesale; there
//! is no partial overwrite, so a later stage never observes a result from a
//! since-replaced earlier stage. All mutations happen on the single caller
//! execution path; nothing here needs locking.

use crate::audio::SpeechSynthesizer;
use crate::classify::Classifier;
use crate::extract::ExtractorRegistry;
use crate::languages::DEFAULT_LANGUAGE;
use crate::types::{AudioArtifact, ClassificationResult, DocumentHandle};
use crate::{DocrouteError, PipelineConfig, Result};

/// Pipeline stage a failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Extraction,
    Classification,
}

/// Observable phase of a session.
///
/// `Failed` still permits re-entry into the same transition (manual retry)
/// or a full [`DocumentSession::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Empty,
    Extracted,
    Classified,
    Failed(PipelineStage),
}

/// The per-interaction pipeline context: sequences extraction,
/// classification, and audio rendering, and caches their outputs for the
/// presentation layer.
pub struct DocumentSession {
    registry: ExtractorRegistry,
    classifier: Classifier,
    synthesizer: SpeechSynthesizer,
    language: String,
    document: Option<DocumentHandle>,
    extraction: Option<Result<String>>,
    classification: Option<Result<ClassificationResult>>,
    audio: Option<AudioArtifact>,
}

impl DocumentSession {
    /// Create an empty session wired to the configured external services.
    pub fn new(config: &PipelineConfig) -> Result<Self> {
        Ok(Self {
            registry: ExtractorRegistry::new(config)?,
            classifier: Classifier::new(config.reasoning.clone())?,
            synthesizer: SpeechSynthesizer::new(config.speech.clone())?,
            language: DEFAULT_LANGUAGE.to_string(),
            document: None,
            extraction: None,
            classification: None,
            audio: None,
        })
    }

    /// Current phase, derived from the stored outcomes.
    pub fn phase(&self) -> SessionPhase {
        if let Some(outcome) = &self.classification {
            return match outcome {
                Ok(_) => SessionPhase::Classified,
                Err(_) => SessionPhase::Failed(PipelineStage::Classification),
            };
        }
        match &self.extraction {
            Some(Ok(_)) => SessionPhase::Extracted,
            Some(Err(_)) => SessionPhase::Failed(PipelineStage::Extraction),
            None => SessionPhase::Empty,
        }
    }

    /// Submit a document: supersedes all stored results, then runs the
    /// extractor selected for the document's declared media type.
    pub async fn submit_document(&mut self, handle: DocumentHandle) -> SessionPhase {
        self.clear_results();
        let outcome = self.registry.extract(&handle).await;
        if let Err(e) = &outcome {
            tracing::warn!(document = handle.name(), error = %e, "extraction failed");
        }
        self.document = Some(handle);
        self.extraction = Some(outcome);
        self.phase()
    }

    /// Submit already-transcribed voice text, bypassing the extractor stage.
    pub fn submit_voice_text(&mut self, text: impl Into<String>) -> SessionPhase {
        self.clear_results();
        self.document = None;
        self.extraction = Some(Ok(text.into()));
        self.phase()
    }

    /// Run classification over the extracted text, requesting the summary in
    /// `language` (which becomes the session's output language).
    ///
    /// A no-op when no successful extraction is stored: the session stays in
    /// its current phase instead of crashing. On failure no partial result is
    /// left visible; the transition may be retried manually.
    pub async fn run_classification(&mut self, language: &str) -> SessionPhase {
        let text = match &self.extraction {
            Some(Ok(text)) => text.clone(),
            _ => {
                tracing::debug!("classification requested without extracted text; ignoring");
                return self.phase();
            }
        };

        self.language = language.to_string();
        self.classification = None;
        self.audio = None;
        let outcome = self.classifier.classify(&text, language).await;
        if let Err(e) = &outcome {
            tracing::warn!(error = %e, "classification failed");
        }
        self.classification = Some(outcome);
        self.phase()
    }

    /// Derived, idempotent audio read: synthesizes the classification
    /// summary on first call and caches the artifact. `None` unless the
    /// session is `Classified`; synthesis failure yields an *empty* artifact,
    /// never an error.
    pub async fn render_audio(&mut self) -> Option<&AudioArtifact> {
        let summary = match &self.classification {
            Some(Ok(result)) => result.summary.clone(),
            _ => return None,
        };

        if self.audio.is_none() {
            let artifact = self.synthesizer.synthesize(&summary, &self.language).await;
            self.audio = Some(artifact);
        }
        self.audio.as_ref()
    }

    /// Clear all stored state and return to `Empty`. The chosen output
    /// language is preserved.
    pub fn reset(&mut self) {
        self.document = None;
        self.clear_results();
    }

    /// The document currently owned by the session.
    pub fn document(&self) -> Option<&DocumentHandle> {
        self.document.as_ref()
    }

    /// Extracted text of the current document, when extraction succeeded.
    pub fn extracted_text(&self) -> Option<&str> {
        match &self.extraction {
            Some(Ok(text)) => Some(text),
            _ => None,
        }
    }

    /// Classification of the current document, when classification
    /// succeeded.
    pub fn classification(&self) -> Option<&ClassificationResult> {
        match &self.classification {
            Some(Ok(result)) => Some(result),
            _ => None,
        }
    }

    /// Cached audio artifact from the last [`DocumentSession::render_audio`].
    pub fn audio(&self) -> Option<&AudioArtifact> {
        self.audio.as_ref()
    }

    /// The failure that put the session into `Failed`, surfaced verbatim for
    /// display.
    pub fn failure(&self) -> Option<&DocrouteError> {
        if let Some(Err(e)) = &self.classification {
            return Some(e);
        }
        if let Some(Err(e)) = &self.extraction {
            return Some(e);
        }
        None
    }

    /// The session's output language tag.
    pub fn language(&self) -> &str {
        &self.language
    }

    fn clear_results(&mut self) {
        self.extraction = None;
        self.classification = None;
        self.audio = None;
    }
}
