//! Request and response bodies.

use omniwriter_core::{
    ContentType, GenerationRecord, GenerationResult, Language, Length, RecordSource, Tone,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}

/// Value lists and initial selections for the writing form.
#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub languages: &'static [Language],
    pub types: &'static [ContentType],
    pub tones: &'static [Tone],
    pub lengths: &'static [Length],
    pub defaults: OptionDefaults,
}

#[derive(Debug, Serialize)]
pub struct OptionDefaults {
    pub language: Language,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub tone: Tone,
    pub length: Length,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    #[serde(flatten)]
    pub result: GenerationResult,
    /// Render the text right-to-left.
    pub rtl: bool,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub items: Vec<GenerationRecord>,
    pub source: RecordSource,
}

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub record: GenerationRecord,
    pub source: RecordSource,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
    pub id: String,
    pub source: RecordSource,
}
