use serde::{Deserialize, Serialize};

use crate::options::{ContentType, Language, Length, Tone};

/// Parameters collected by the writing form for one generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default, rename = "type")]
    pub content_type: ContentType,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub length: Length,
    #[serde(default)]
    pub enable_search: bool,
    #[serde(default)]
    pub enable_extended_reasoning: bool,
}

impl GenerationRequest {
    /// Request for `prompt` with every option at its form default.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            language: Language::default(),
            content_type: ContentType::default(),
            tone: Tone::default(),
            length: Length::default(),
            enable_search: false,
            enable_extended_reasoning: false,
        }
    }

    #[must_use]
    pub const fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    #[must_use]
    pub const fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    #[must_use]
    pub const fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    #[must_use]
    pub const fn with_length(mut self, length: Length) -> Self {
        self.length = length;
        self
    }

    #[must_use]
    pub const fn with_search(mut self, enabled: bool) -> Self {
        self.enable_search = enabled;
        self
    }

    #[must_use]
    pub const fn with_extended_reasoning(mut self, enabled: bool) -> Self {
        self.enable_extended_reasoning = enabled;
        self
    }

    /// Whether the prompt has any non-whitespace content.
    #[must_use]
    pub fn has_prompt(&self) -> bool {
        !self.prompt.trim().is_empty()
    }
}

/// A source the provider cited while generating text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Normalized output of one generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub text: String,
    #[serde(default)]
    pub grounding_references: Vec<GroundingReference>,
}
