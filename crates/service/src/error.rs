//! Typed error enum for the service layer.
//!
//! Remote storage failures never get here: the gateway absorbs them. What is
//! left is what the user must be told about.

use omniwriter_core::constants::GENERATION_FAILURE_MESSAGE;
use omniwriter_llm::LlmError;
use omniwriter_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Provider call failed. Shown to the user as a generic, retryable error.
    #[error("generation failed: {0}")]
    GenerationFailure(#[source] LlmError),

    /// Neither store accepted a save.
    #[error("history unavailable: {0}")]
    PersistenceUnavailable(#[source] StorageError),

    /// An optimistic removal could not be confirmed against either store.
    /// The cached history has been re-read by the time this is returned.
    #[error("could not delete {id}: {source}")]
    DeleteReconciliation {
        id: String,
        #[source]
        source: StorageError,
    },

    /// Caller provided invalid input (blank prompt).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ServiceError {
    /// Whether repeating the operation later could succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::GenerationFailure(e) => e.is_transient(),
            Self::PersistenceUnavailable(_) | Self::DeleteReconciliation { .. } => true,
            Self::InvalidInput(_) => false,
        }
    }

    /// Message safe to show in the UI.
    pub fn user_message(&self) -> String {
        match self {
            Self::GenerationFailure(_) => GENERATION_FAILURE_MESSAGE.to_owned(),
            Self::PersistenceUnavailable(_) => "Failed to save item".to_owned(),
            Self::DeleteReconciliation { .. } => "Failed to delete item".to_owned(),
            Self::InvalidInput(msg) => msg.clone(),
        }
    }
}
