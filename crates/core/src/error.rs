use thiserror::Error;

/// Errors raised while parsing domain values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown language: {0}")]
    InvalidLanguage(String),

    #[error("unknown content type: {0}")]
    InvalidContentType(String),

    #[error("unknown tone: {0}")]
    InvalidTone(String),

    #[error("unknown length: {0}")]
    InvalidLength(String),
}
