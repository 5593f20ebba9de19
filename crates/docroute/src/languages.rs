//! Output language table.
//!
//! Summaries and audio are produced in the user's chosen output language.
//! The table maps ISO 639-1 tags to the display names embedded in the
//! reasoning-service prompt. Unknown tags fall back to English rather than
//! failing the request.

/// Supported output languages as `(tag, display name)` pairs.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("hi", "Hindi"),
    ("ml", "Malayalam"),
    ("ar", "Arabic"),
    ("ta", "Tamil"),
    ("fr", "French"),
];

/// Default output language tag.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Display name for a language tag, falling back to English for unknown tags.
pub fn display_name(tag: &str) -> &'static str {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(t, _)| *t == tag)
        .map(|(_, name)| *name)
        .unwrap_or("English")
}

/// Whether a tag is one of the supported output languages.
pub fn is_supported(tag: &str) -> bool {
    SUPPORTED_LANGUAGES.iter().any(|(t, _)| *t == tag)
}
