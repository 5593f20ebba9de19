//! Document classification against the department taxonomy.
//!
//! The classifier builds a bounded prompt from extracted text, calls the
//! external reasoning service, and normalizes its structured response into a
//! fully-populated [`ClassificationResult`]. The contract is deliberately
//! forgiving about field values (every field has a default) and strict about
//! overall shape: only a payload that is not a JSON object at all is
//! rejected. A single failed attempt is terminal for that invocation; the
//! session may re-trigger manually.

use crate::config::ReasoningServiceConfig;
use crate::departments::Department;
use crate::languages;
use crate::types::{ClassificationResult, MAX_SUMMARY_CHARS, Priority};
use crate::{DocrouteError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Characters of extracted text embedded into the prompt. Bounds request
/// size and cost; truncation is silent and character-based.
pub const PROMPT_CHAR_BUDGET: usize = 1500;

const SYSTEM_PROMPT: &str = "You are a document routing assistant. Return only JSON.";

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Raw six-field payload as the reasoning service emits it.
///
/// All fields are optional untyped values; [`RawClassification::normalize`]
/// applies the field-level defaults. Aliases accept the shorter field
/// spellings some models produce.
#[derive(Debug, Default, Deserialize)]
struct RawClassification {
    #[serde(default, alias = "category")]
    main_category: Option<Value>,
    #[serde(default, alias = "priority")]
    priority_level: Option<Value>,
    #[serde(default, alias = "department")]
    recommended_department: Option<Value>,
    #[serde(default)]
    resolved: Option<Value>,
    #[serde(default)]
    summary: Option<Value>,
    #[serde(default, alias = "confidence")]
    confidence_score: Option<Value>,
}

impl RawClassification {
    /// Normalize into a fully-populated result. Out-of-domain values are
    /// corrected to their defaults, never treated as errors.
    fn normalize(self) -> ClassificationResult {
        let category = self
            .main_category
            .as_ref()
            .and_then(Value::as_str)
            .and_then(Department::from_id)
            .unwrap_or_else(Department::fallback);

        let priority = self
            .priority_level
            .as_ref()
            .and_then(Value::as_str)
            .and_then(Priority::from_label)
            .unwrap_or_default();

        let recommended_department = self
            .recommended_department
            .as_ref()
            .and_then(Value::as_str)
            .and_then(Department::from_id)
            .unwrap_or_else(Department::fallback);

        let resolved = match &self.resolved {
            Some(Value::Bool(value)) => *value,
            Some(Value::String(value)) => {
                matches!(value.trim().to_ascii_lowercase().as_str(), "yes" | "true")
            }
            _ => false,
        };

        let summary = self
            .summary
            .as_ref()
            .and_then(Value::as_str)
            .map(|s| truncate_chars(s, MAX_SUMMARY_CHARS).to_string())
            .unwrap_or_default();

        let confidence = self
            .confidence_score
            .as_ref()
            .and_then(Value::as_i64)
            .filter(|score| (0..=100).contains(score))
            .map(|score| score as u8)
            .unwrap_or(85);

        ClassificationResult {
            category,
            priority,
            recommended_department,
            resolved,
            summary,
            confidence,
        }
    }
}

/// Truncate to at most `max_chars` characters, never splitting a character.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Strip an optional Markdown code fence (with or without a language tag)
/// so fenced and unfenced payloads parse identically.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_suffix("```").unwrap_or(inner);
    let inner = match inner.split_once('\n') {
        Some((tag, rest)) if tag.trim().chars().all(|c| c.is_ascii_alphanumeric()) => rest,
        _ => inner,
    };
    inner.trim()
}

/// Build the classification prompt: taxonomy from the department registry,
/// summary requested in the caller's language, document text bounded to
/// [`PROMPT_CHAR_BUDGET`] characters.
fn build_prompt(text: &str, language: &str) -> String {
    let taxonomy = Department::ALL.map(Department::id).join("/");
    let language_name = languages::display_name(language);
    let excerpt = truncate_chars(text, PROMPT_CHAR_BUDGET);

    format!(
        "Analyze this document and return JSON:\n\
         - main_category: {taxonomy}\n\
         - priority_level: low/medium/high/critical\n\
         - recommended_department: one of the above\n\
         - resolved: yes/no\n\
         - summary: 2-3 sentence summary in {language_name}\n\
         - confidence_score: 0-100\n\
         \n\
         Document: {excerpt}"
    )
}

/// Client for the external reasoning service.
pub struct Classifier {
    http: reqwest::Client,
    config: ReasoningServiceConfig,
}

impl Classifier {
    /// Create a classifier with its own HTTP client bound to the configured
    /// timeout.
    pub fn new(config: ReasoningServiceConfig) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { http, config })
    }

    /// Classify extracted text, requesting the summary in `language`.
    ///
    /// A missing credential short-circuits before any network call. There is
    /// no automatic retry: one attempt, one tagged outcome.
    pub async fn classify(&self, text: &str, language: &str) -> Result<ClassificationResult> {
        let credential = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| DocrouteError::MissingCredential("reasoning API key".to_string()))?;

        let prompt = build_prompt(text, language);
        let request = ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        tracing::debug!(
            model = %self.config.model,
            prompt_chars = prompt.chars().count(),
            language,
            "requesting classification"
        );

        let response = self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(credential)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DocrouteError::service_with_status(
                format!("reasoning service returned {status}"),
                status.as_u16(),
            ));
        }

        let body = response.text().await?;
        let payload: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| DocrouteError::malformed(format!("invalid completion envelope: {e}")))?;

        let content = payload
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| DocrouteError::malformed("completion contained no choices"))?;

        let stripped = strip_code_fence(&content);
        let value: Value = serde_json::from_str(stripped)
            .map_err(|_| DocrouteError::malformed("classification payload is not valid JSON"))?;
        if !value.is_object() {
            return Err(DocrouteError::malformed("classification payload is not a JSON object"));
        }

        let raw: RawClassification = serde_json::from_value(value)
            .map_err(|e| DocrouteError::malformed(format!("classification payload rejected: {e}")))?;

        let result = raw.normalize();
        tracing::info!(
            department = %result.recommended_department,
            priority = result.priority.label(),
            confidence = result.confidence,
            "classification complete"
        );
        Ok(result)
    }
}
