//! docroute - Document Intake & Classification Pipeline
//!
//! docroute ingests an office document or image, extracts its text,
//! classifies it against a fixed department taxonomy via an external
//! reasoning service, and renders a routable, audible summary. Every stage
//! returns a tagged outcome so the stages fail independently without
//! corrupting downstream state.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use docroute::{DocumentHandle, DocumentSession, PipelineConfig, SessionPhase};
//!
//! # async fn example() -> docroute::Result<()> {
//! let config = PipelineConfig::from_env();
//! let mut session = DocumentSession::new(&config)?;
//!
//! let handle = DocumentHandle::from_path("incident-report.pdf").await?;
//! session.submit_document(handle).await;
//!
//! if session.run_classification("en").await == SessionPhase::Classified {
//!     let result = session.classification().unwrap();
//!     println!("route to {}", result.recommended_department.info().display_name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Extraction** (`extract`): media-type dispatch over format-specific
//!   strategies (PDF, DOCX, remote OCR for images)
//! - **Classification** (`classify`): bounded prompt, external reasoning
//!   service, schema-validated normalization with per-field defaults
//! - **Routing** (`departments`): static, read-only department directory
//! - **Audio** (`audio`): best-effort speech synthesis of summaries
//! - **Session** (`session`): the per-invocation state machine tying the
//!   stages together
//!
//! The pipeline is single-request and strictly sequential: each stage runs
//! to completion before the next starts, network-bound stages carry a hard
//! 30-second timeout, and no state is shared between sessions.

#![deny(unsafe_code)]

pub mod audio;
pub mod classify;
pub mod config;
pub mod departments;
pub mod error;
pub mod extract;
pub mod languages;
pub mod session;
pub mod types;

pub use audio::SpeechSynthesizer;
pub use classify::Classifier;
pub use config::{OcrServiceConfig, PipelineConfig, ReasoningServiceConfig, SpeechServiceConfig};
pub use departments::{DEPARTMENTS, Department, DepartmentInfo};
pub use error::{DocrouteError, Result};
pub use extract::{
    DOCX_MEDIA_TYPE, ExtractorRegistry, IMAGE_MEDIA_PATTERN, PDF_MEDIA_TYPE, TextExtractor,
};
pub use session::{DocumentSession, PipelineStage, SessionPhase};
pub use types::{AudioArtifact, ClassificationResult, DocumentHandle, Priority};
