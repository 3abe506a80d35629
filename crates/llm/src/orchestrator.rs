use std::sync::Arc;

use omniwriter_core::constants::{EMPTY_GENERATION_TEXT, THINKING_BUDGET};
use omniwriter_core::{GenerationRequest, GenerationResult, GroundingReference};

use crate::ai_types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, GoogleSearch,
    ThinkingConfig, Tool,
};
use crate::client::GenerationProvider;
use crate::error::LlmError;
use crate::persona::{build_system_instruction, build_user_prompt};

/// Optional capability attached to a generation call.
///
/// At most one is attached per request: extended reasoning wins over search
/// when both toggles are on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    None,
    WebSearch,
    ExtendedReasoning { thinking_budget: u32 },
}

impl Capability {
    #[must_use]
    pub fn resolve(enable_search: bool, enable_extended_reasoning: bool) -> Self {
        if enable_extended_reasoning {
            if enable_search {
                tracing::debug!("search requested together with extended reasoning; search dropped");
            }
            Self::ExtendedReasoning { thinking_budget: THINKING_BUDGET }
        } else if enable_search {
            Self::WebSearch
        } else {
            Self::None
        }
    }

    fn apply(self, request: &mut GenerateContentRequest) {
        match self {
            Self::None => {},
            Self::WebSearch => request.tools.push(Tool { google_search: GoogleSearch {} }),
            Self::ExtendedReasoning { thinking_budget } => {
                request.generation_config =
                    Some(GenerationConfig { thinking_config: ThinkingConfig { thinking_budget } });
            },
        }
    }
}

/// Turns form submissions into provider calls.
#[derive(Clone)]
pub struct RequestOrchestrator {
    provider: Arc<dyn GenerationProvider>,
}

impl std::fmt::Debug for RequestOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestOrchestrator").finish_non_exhaustive()
    }
}

impl RequestOrchestrator {
    #[must_use]
    pub fn new(provider: Arc<dyn GenerationProvider>) -> Self {
        Self { provider }
    }

    /// Build the provider payload for `request` without sending it.
    #[must_use]
    pub fn build_request(request: &GenerationRequest) -> GenerateContentRequest {
        let mut payload = GenerateContentRequest {
            system_instruction: Content::text(build_system_instruction(request)),
            contents: vec![Content::user(build_user_prompt(request))],
            tools: Vec::new(),
            generation_config: None,
        };
        Capability::resolve(request.enable_search, request.enable_extended_reasoning)
            .apply(&mut payload);
        payload
    }

    /// Generate text for `request` with exactly one provider call.
    ///
    /// # Errors
    /// Returns the provider's error unchanged; nothing is retried here.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult, LlmError> {
        let payload = Self::build_request(request);
        tracing::debug!(
            language = %request.language,
            content_type = %request.content_type,
            tone = %request.tone,
            length = %request.length,
            search = !payload.tools.is_empty(),
            thinking = payload.generation_config.is_some(),
            "sending generation request"
        );

        let response = self.provider.generate_content(&payload).await.map_err(|e| {
            tracing::warn!("Gemini generation error: {e}");
            e
        })?;

        Ok(normalize(&response))
    }
}

fn normalize(response: &GenerateContentResponse) -> GenerationResult {
    let text = response.text().unwrap_or_else(|| EMPTY_GENERATION_TEXT.to_owned());
    let grounding_references = response
        .grounding_chunks()
        .iter()
        .filter_map(|chunk| {
            let web = chunk.web.as_ref()?;
            Some(GroundingReference { uri: web.uri.clone(), title: web.title.clone() })
        })
        .collect();
    GenerationResult { text, grounding_references }
}
