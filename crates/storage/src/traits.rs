//! Record store abstraction shared by the remote table and the local slot.

use async_trait::async_trait;
use omniwriter_core::{GenerationRecord, RecordDraft};

use crate::error::StorageError;

/// A place generation records can be written to, listed from and deleted from.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    /// Persist `draft`, assigning its id and creation time.
    async fn insert(&self, draft: &RecordDraft) -> Result<GenerationRecord, StorageError>;

    /// Up to `limit` records, newest first.
    async fn list_recent(&self, limit: usize) -> Result<Vec<GenerationRecord>, StorageError>;

    /// Delete by id. Deleting an id that does not exist is not an error.
    async fn delete(&self, id: &str) -> Result<(), StorageError>;
}
