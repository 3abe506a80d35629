//! Capped local record slot backed by one JSON file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use chrono::Utc;
use omniwriter_core::constants::HISTORY_LIMIT;
use omniwriter_core::{GenerationRecord, RecordDraft};
use uuid::Uuid;

use crate::error::StorageError;
use crate::traits::RecordStore;

/// Newest-first list of at most `HISTORY_LIMIT` records.
///
/// The file holds a JSON array of `GenerationRecord` and is owned exclusively
/// by this store. Every mutation rewrites it through a temp file and a rename.
/// Clones share the same slot and lock.
#[derive(Debug, Clone)]
pub struct LocalRecordStore {
    slot: Arc<Slot>,
}

#[derive(Debug)]
struct Slot {
    path: PathBuf,
    capacity: usize,
    /// Serializes read-modify-write cycles.
    lock: Mutex<()>,
}

/// Run a blocking slot operation on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}

impl LocalRecordStore {
    /// Store backed by `path`. Nothing is touched on disk until the first write.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_capacity(path, HISTORY_LIMIT)
    }

    pub fn with_capacity(path: impl AsRef<Path>, capacity: usize) -> Self {
        Self {
            slot: Arc::new(Slot {
                path: path.as_ref().to_path_buf(),
                capacity,
                lock: Mutex::new(()),
            }),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.slot.path
    }

    /// All stored records, newest first. A missing file is an empty list.
    ///
    /// # Errors
    /// `Io` if the file cannot be read, `DataCorruption` if it is not a record array.
    pub fn get_all(&self) -> Result<Vec<GenerationRecord>, StorageError> {
        let _guard = self.slot.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.slot.read()
    }

    /// Prepend `record`, then drop everything past capacity.
    ///
    /// # Errors
    /// `Io` if the slot cannot be read or rewritten.
    pub fn insert_front(&self, record: GenerationRecord) -> Result<(), StorageError> {
        let _guard = self.slot.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut records = self.slot.read_lenient()?;
        records.insert(0, record);
        self.slot.write(records)
    }

    /// Remove the record with `id`. An unknown id leaves the slot untouched.
    ///
    /// # Errors
    /// `Io` if the slot cannot be read or rewritten.
    pub fn remove_by_id(&self, id: &str) -> Result<(), StorageError> {
        let _guard = self.slot.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let records = self.slot.read_lenient()?;
        let before = records.len();
        let kept: Vec<_> = records.into_iter().filter(|r| r.id != id).collect();
        if kept.len() == before {
            tracing::debug!(id, "local remove: no such record");
        }
        self.slot.write(kept)
    }
}

impl Slot {
    fn read(&self) -> Result<Vec<GenerationRecord>, StorageError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&raw).map_err(|e| StorageError::DataCorruption {
            context: format!("local history slot {}", self.path.display()),
            source: e,
        })
    }

    /// Like `read`, but a corrupt slot is logged and treated as empty so the
    /// next write replaces it.
    fn read_lenient(&self) -> Result<Vec<GenerationRecord>, StorageError> {
        match self.read() {
            Err(e @ StorageError::DataCorruption { .. }) => {
                tracing::warn!("{e}; starting from an empty local history");
                Ok(Vec::new())
            },
            other => other,
        }
    }

    fn write(&self, mut records: Vec<GenerationRecord>) -> Result<(), StorageError> {
        records.truncate(self.capacity);
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let temp_path = self.path.with_extension("json.tmp");
        std::fs::write(&temp_path, serde_json::to_vec(&records)?)?;
        std::fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for LocalRecordStore {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn insert(&self, draft: &RecordDraft) -> Result<GenerationRecord, StorageError> {
        let record =
            GenerationRecord::from_draft(Uuid::new_v4().to_string(), Utc::now(), draft.clone());
        let store = self.clone();
        let stored = record.clone();
        blocking(move || store.insert_front(stored)).await?;
        Ok(record)
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<GenerationRecord>, StorageError> {
        let store = self.clone();
        let mut records = blocking(move || store.get_all()).await?;
        records.truncate(limit);
        Ok(records)
    }

    async fn delete(&self, id: &str) -> Result<(), StorageError> {
        let store = self.clone();
        let id = id.to_owned();
        blocking(move || store.remove_by_id(&id)).await
    }
}
