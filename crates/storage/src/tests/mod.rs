//! Test utilities and module declarations for storage tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use omniwriter_core::{ContentType, GenerationRecord, Language, RecordDraft, Tone};
use tempfile::TempDir;

use crate::error::StorageError;
use crate::local::LocalRecordStore;
use crate::traits::RecordStore;

mod gateway_tests;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_local_store() -> (LocalRecordStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = LocalRecordStore::new(temp_dir.path().join("history.json"));
    (store, temp_dir)
}

pub fn create_test_draft(prompt: &str) -> RecordDraft {
    RecordDraft {
        prompt: prompt.to_owned(),
        content: format!("Generated text about {prompt}"),
        language: Language::English,
        content_type: ContentType::Story,
        tone: Tone::Humorous,
    }
}

/// Record `n` minutes after a fixed epoch, so larger `n` is newer.
pub fn create_test_record(id: &str, n: i64) -> GenerationRecord {
    let base = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).single().unwrap_or_else(Utc::now);
    GenerationRecord::from_draft(id.to_owned(), base + Duration::minutes(n), create_test_draft(id))
}

/// Healthy in-memory stand-in for the remote table.
#[derive(Default)]
pub struct MemoryRemote {
    rows: Mutex<Vec<GenerationRecord>>,
    next_id: Mutex<u32>,
}

impl MemoryRemote {
    pub fn rows(&self) -> Vec<GenerationRecord> {
        self.rows.lock().unwrap_or_else(std::sync::PoisonError::into_inner).clone()
    }
}

#[async_trait]
impl RecordStore for MemoryRemote {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn insert(&self, draft: &RecordDraft) -> Result<GenerationRecord, StorageError> {
        let mut next_id = self.next_id.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        *next_id += 1;
        let record = GenerationRecord::from_draft(
            format!("remote-{next_id}"),
            Utc::now() + Duration::seconds(i64::from(*next_id)),
            draft.clone(),
        );
        self.rows.lock().unwrap_or_else(std::sync::PoisonError::into_inner).push(record.clone());
        Ok(record)
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<GenerationRecord>, StorageError> {
        let mut rows = self.rows();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows.truncate(limit);
        Ok(rows)
    }

    async fn delete(&self, id: &str) -> Result<(), StorageError> {
        self.rows.lock().unwrap_or_else(std::sync::PoisonError::into_inner).retain(|r| r.id != id);
        Ok(())
    }
}

/// Remote that fails every call, as an unreachable project would.
pub struct UnreachableRemote;

fn unreachable_error() -> StorageError {
    StorageError::HttpStatus { code: 503, body: "upstream connect error".to_owned() }
}

#[async_trait]
impl RecordStore for UnreachableRemote {
    fn name(&self) -> &'static str {
        "unreachable"
    }

    async fn insert(&self, _draft: &RecordDraft) -> Result<GenerationRecord, StorageError> {
        Err(unreachable_error())
    }

    async fn list_recent(&self, _limit: usize) -> Result<Vec<GenerationRecord>, StorageError> {
        Err(unreachable_error())
    }

    async fn delete(&self, _id: &str) -> Result<(), StorageError> {
        Err(unreachable_error())
    }
}
