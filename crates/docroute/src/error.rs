//! Error types for docroute.
//!
//! Every pipeline stage returns a tagged outcome instead of raising past its
//! boundary: extraction, classification, and session transitions all surface
//! `DocrouteError` values that callers can match on. The only errors that
//! bubble unchanged are `Io` (real system problems); everything produced at
//! a parsing-library or service boundary is wrapped with context.

use thiserror::Error;

/// Result type alias using `DocrouteError`.
pub type Result<T> = std::result::Result<T, DocrouteError>;

/// Main error type for all docroute operations.
///
/// # Variants
///
/// - `UnsupportedType` - no extractor registered for the declared media type;
///   the unknown type is carried as data, never as a panic
/// - `Parsing` - a document parsing library failed (corrupt or truncated file)
/// - `Service` - HTTP failure, network failure, or timeout against an
///   external service, with the status code when one was received
/// - `MissingCredential` - a required credential was absent; detected before
///   any network call is attempted
/// - `MalformedResponse` - a service answered 200 with a payload that is not
///   the expected JSON shape
/// - `Io` - file system errors (always bubble up)
#[derive(Debug, Error)]
pub enum DocrouteError {
    #[error("unsupported media type: {0}")]
    UnsupportedType(String),

    #[error("parsing error: {message}")]
    Parsing {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("service error: {message}")]
    Service {
        message: String,
        status: Option<u16>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("missing credential: {0}")]
    MissingCredential(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DocrouteError {
    /// Create a `Parsing` error.
    pub fn parsing<S: Into<String>>(message: S) -> Self {
        Self::Parsing {
            message: message.into(),
            source: None,
        }
    }

    /// Create a `Parsing` error with source.
    pub fn parsing_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Parsing {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a `Service` error without an HTTP status (network failure,
    /// timeout, unreachable host).
    pub fn service<S: Into<String>>(message: S) -> Self {
        Self::Service {
            message: message.into(),
            status: None,
            source: None,
        }
    }

    /// Create a `Service` error carrying the HTTP status code that was
    /// received.
    pub fn service_with_status<S: Into<String>>(message: S, status: u16) -> Self {
        Self::Service {
            message: message.into(),
            status: Some(status),
            source: None,
        }
    }

    /// Create a `MalformedResponse` error.
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// The HTTP status attached to a `Service` error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Service { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for DocrouteError {
    fn from(err: reqwest::Error) -> Self {
        let status = err.status().map(|s| s.as_u16());
        DocrouteError::Service {
            message: err.to_string(),
            status,
            source: Some(Box::new(err)),
        }
    }
}
