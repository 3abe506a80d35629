use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::options::{ContentType, Language, Tone};

/// A saved generation as stored in the `generations` table and the local slot.
///
/// Field names follow the table's columns so the same serde shape is used for
/// PostgREST rows and for the local JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// Opaque row identity. Numeric keys (`int8` columns) are kept as their
    /// decimal string.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub prompt: String,
    pub content: String,
    pub language: Language,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub tone: Tone,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StrOrNum {
    Str(String),
    Int(i64),
    UInt(u64),
}

fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match StrOrNum::deserialize(deserializer)? {
        StrOrNum::Str(s) => s,
        StrOrNum::Int(n) => n.to_string(),
        StrOrNum::UInt(n) => n.to_string(),
    })
}

impl GenerationRecord {
    /// Materialize a draft with the identity assigned by whichever store wrote it.
    #[must_use]
    pub fn from_draft(id: String, created_at: DateTime<Utc>, draft: RecordDraft) -> Self {
        Self {
            id,
            created_at,
            prompt: draft.prompt,
            content: draft.content,
            language: draft.language,
            content_type: draft.content_type,
            tone: draft.tone,
        }
    }
}

/// The caller-supplied part of a record; id and timestamp are assigned on write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDraft {
    pub prompt: String,
    pub content: String,
    pub language: Language,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub tone: Tone,
}

impl RecordDraft {
    /// Draft for saving `content` generated from `request`.
    #[must_use]
    pub fn from_generation(request: &crate::GenerationRequest, content: impl Into<String>) -> Self {
        Self {
            prompt: request.prompt.clone(),
            content: content.into(),
            language: request.language,
            content_type: request.content_type,
            tone: request.tone,
        }
    }
}

/// Which store served a persistence operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordSource {
    Remote,
    /// The remote store failed or is not configured; the local slot answered.
    Local,
}

impl RecordSource {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Remote => "remote",
            Self::Local => "local",
        }
    }

    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        matches!(*self, Self::Local)
    }
}
