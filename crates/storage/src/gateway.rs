//! Remote-first persistence with local fallback.
//!
//! Every operation tries the remote store once. Any remote error (transport,
//! status, malformed body) is logged and the local slot answers instead. The
//! two stores are never merged: a call is served fully by one of them.

use std::sync::Arc;

use omniwriter_core::constants::HISTORY_LIMIT;
use omniwriter_core::{GenerationRecord, RecordDraft, RecordSource};

use crate::error::StorageError;
use crate::local::LocalRecordStore;
use crate::traits::RecordStore;

/// A value together with the store that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persisted<T> {
    pub value: T,
    pub source: RecordSource,
}

impl<T> Persisted<T> {
    const fn remote(value: T) -> Self {
        Self { value, source: RecordSource::Remote }
    }

    const fn local(value: T) -> Self {
        Self { value, source: RecordSource::Local }
    }
}

pub struct PersistenceGateway {
    remote: Option<Arc<dyn RecordStore>>,
    local: Arc<LocalRecordStore>,
}

impl std::fmt::Debug for PersistenceGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceGateway")
            .field("remote", &self.remote.as_ref().map(|r| r.name()))
            .field("local", &self.local.path())
            .finish()
    }
}

impl PersistenceGateway {
    #[must_use]
    pub fn new(remote: Arc<dyn RecordStore>, local: Arc<LocalRecordStore>) -> Self {
        Self { remote: Some(remote), local }
    }

    /// Gateway with no remote store; every call is served locally.
    #[must_use]
    pub fn local_only(local: Arc<LocalRecordStore>) -> Self {
        Self { remote: None, local }
    }

    #[must_use]
    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Save `draft`, remotely if possible.
    ///
    /// # Errors
    /// Only when the local fallback write fails as well; the record is then
    /// in neither store.
    pub async fn save(
        &self,
        draft: &RecordDraft,
    ) -> Result<Persisted<GenerationRecord>, StorageError> {
        if let Some(remote) = &self.remote {
            match remote.insert(draft).await {
                Ok(record) => {
                    tracing::info!(id = %record.id, "Saved generation to remote store");
                    return Ok(Persisted::remote(record));
                },
                Err(e) => {
                    tracing::warn!("Remote save failed (falling back to local store): {e}");
                },
            }
        }

        let record = self.local.insert(draft).await?;
        tracing::info!(id = %record.id, "Saved generation to local store");
        Ok(Persisted::local(record))
    }

    /// The most recent records, newest first, from exactly one store.
    ///
    /// A local read failure is logged and yields an empty list.
    pub async fn list(&self) -> Persisted<Vec<GenerationRecord>> {
        if let Some(remote) = &self.remote {
            match remote.list_recent(HISTORY_LIMIT).await {
                Ok(mut records) => {
                    records.truncate(HISTORY_LIMIT);
                    return Persisted::remote(records);
                },
                Err(e) => {
                    tracing::warn!("Remote fetch failed (falling back to local store): {e}");
                },
            }
        }

        match self.local.list_recent(HISTORY_LIMIT).await {
            Ok(records) => Persisted::local(records),
            Err(e) => {
                tracing::warn!("Local history unreadable, returning empty list: {e}");
                Persisted::local(Vec::new())
            },
        }
    }

    /// Delete `id` remotely; on remote failure remove it locally if present.
    ///
    /// # Errors
    /// Only when the remote failed and the local cleanup could not run.
    pub async fn delete(&self, id: &str) -> Result<RecordSource, StorageError> {
        if let Some(remote) = &self.remote {
            match remote.delete(id).await {
                Ok(()) => {
                    tracing::info!(id, "Deleted generation from remote store");
                    return Ok(RecordSource::Remote);
                },
                Err(e) => {
                    tracing::warn!("Remote delete failed (checking local store): {e}");
                },
            }
        }

        self.local.delete(id).await?;
        Ok(RecordSource::Local)
    }
}
