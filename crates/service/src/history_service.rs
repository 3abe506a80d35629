use std::sync::Arc;

use omniwriter_core::constants::HISTORY_LIMIT;
use omniwriter_core::{GenerationRecord, RecordDraft, RecordSource};
use omniwriter_storage::{PersistenceGateway, Persisted};
use tokio::sync::{Mutex, RwLock};

use crate::ServiceError;

/// Cached copy of the history list as last shown to the user.
#[derive(Debug, Default)]
struct HistoryView {
    records: Vec<GenerationRecord>,
    source: Option<RecordSource>,
}

/// History operations plus the cached view they keep in sync.
///
/// The view is a transient copy: the stores behind the gateway own the
/// records. Deletion is optimistic and compensated by a fresh read on failure.
/// Reloads and deletes are serialized, so a list fetched before a delete can
/// never overwrite the view after it.
pub struct HistoryService {
    gateway: Arc<PersistenceGateway>,
    view: RwLock<HistoryView>,
    sync: Mutex<()>,
}

impl HistoryService {
    #[must_use]
    pub fn new(gateway: Arc<PersistenceGateway>) -> Self {
        Self { gateway, view: RwLock::new(HistoryView::default()), sync: Mutex::new(()) }
    }

    /// Reload the view from the gateway and return it.
    pub async fn refresh(&self) -> Persisted<Vec<GenerationRecord>> {
        let _guard = self.sync.lock().await;
        self.reload().await
    }

    /// Caller holds `sync`.
    async fn reload(&self) -> Persisted<Vec<GenerationRecord>> {
        let mut listed = self.gateway.list().await;
        listed.value.truncate(HISTORY_LIMIT);
        tracing::debug!(count = listed.value.len(), source = listed.source.as_str(), "history loaded");

        let mut view = self.view.write().await;
        view.records = listed.value.clone();
        view.source = Some(listed.source);
        listed
    }

    /// Current cached view, without touching the stores.
    pub async fn history(&self) -> Vec<GenerationRecord> {
        self.view.read().await.records.clone()
    }

    /// Store that served the last refresh, if any refresh happened.
    pub async fn last_source(&self) -> Option<RecordSource> {
        self.view.read().await.source
    }

    /// Look up a cached record, e.g. to reopen it in the form.
    pub async fn find(&self, id: &str) -> Option<GenerationRecord> {
        self.view.read().await.records.iter().find(|r| r.id == id).cloned()
    }

    /// Persist a draft, then reload the view from the stores.
    pub async fn save(&self, draft: &RecordDraft) -> Result<Persisted<GenerationRecord>, ServiceError> {
        let saved = self.gateway.save(draft).await.map_err(|e| {
            tracing::error!("Save failed in both stores: {e}");
            ServiceError::PersistenceUnavailable(e)
        })?;
        self.refresh().await;
        Ok(saved)
    }

    /// Optimistically delete `id`.
    ///
    /// The record leaves the view before the stores are asked. If the delete
    /// cannot be confirmed, the view is rebuilt from a fresh read and
    /// `DeleteReconciliation` is returned.
    pub async fn delete(&self, id: &str) -> Result<RecordSource, ServiceError> {
        let _guard = self.sync.lock().await;
        self.view.write().await.records.retain(|r| r.id != id);

        match self.gateway.delete(id).await {
            Ok(source) => Ok(source),
            Err(e) => {
                tracing::error!(id, "Delete could not be confirmed, restoring history: {e}");
                self.reload().await;
                Err(ServiceError::DeleteReconciliation { id: id.to_owned(), source: e })
            },
        }
    }
}
