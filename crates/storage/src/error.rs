//! Typed error enum for the storage layer.
//!
//! Remote failures are matched by the gateway to decide on fallback; local
//! failures are the only ones that ever reach a caller.

use thiserror::Error;

/// Storage-layer error covering both the remote table and the local slot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Transport failure talking to the remote store.
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Remote store answered with a non-success status (rejected insert, bad key).
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },

    /// Remote body did not match the record schema.
    #[error("malformed response in {context}: {source}")]
    MalformedResponse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Remote body parsed but did not contain what the operation needs.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Local slot could not be read or written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Local slot exists but does not hold a record array.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A blocking slot operation panicked or was cancelled.
    #[error("local slot task failed: {0}")]
    BlockingTask(#[from] tokio::task::JoinError),

    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl StorageError {
    /// Whether this error came from the local slot rather than the remote store.
    #[must_use]
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Io(_) | Self::DataCorruption { .. } | Self::BlockingTask(_))
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::DataCorruption { context: "JSON serialization/deserialization".to_owned(), source: err }
    }
}
