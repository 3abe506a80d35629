use omniwriter_core::{GenerationRequest, GenerationResult};
use omniwriter_llm::RequestOrchestrator;

use crate::ServiceError;

pub struct WritingService {
    orchestrator: RequestOrchestrator,
}

impl WritingService {
    #[must_use]
    pub const fn new(orchestrator: RequestOrchestrator) -> Self {
        Self { orchestrator }
    }

    /// Generate text for a form submission. Blank prompts never reach the provider.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, ServiceError> {
        if !request.has_prompt() {
            return Err(ServiceError::InvalidInput("prompt must not be empty".to_owned()));
        }

        match self.orchestrator.generate(request).await {
            Ok(result) => {
                tracing::info!(
                    chars = result.text.chars().count(),
                    references = result.grounding_references.len(),
                    "Generated content"
                );
                Ok(result)
            },
            Err(e) => {
                tracing::error!("Generation failed: {e}");
                Err(ServiceError::GenerationFailure(e))
            },
        }
    }
}
