//! Typed error enum for the LLM crate.

use thiserror::Error;

/// Errors from generation provider calls.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    /// The provider answered, but not with a `generateContent` response.
    #[error("malformed response in {context}: {source}")]
    MalformedResponse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl LlmError {
    /// Whether retrying the same request later could succeed.
    ///
    /// Nothing in this crate retries; callers use this to phrase the error.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::HttpRequest(_) => true,
            Self::HttpStatus { code, .. } => matches!(code, 429 | 500 | 502 | 503 | 504),
            Self::MalformedResponse { .. } | Self::ClientInit(_) => false,
        }
    }
}
