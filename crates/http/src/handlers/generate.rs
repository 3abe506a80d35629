use axum::{extract::State, Json};
use std::sync::Arc;

use omniwriter_core::{ContentType, GenerationRequest, Language, Length, Tone};

use crate::api_error::ApiError;
use crate::api_types::{GenerateResponse, OptionDefaults, OptionsResponse};
use crate::AppState;

pub async fn options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        languages: Language::ALL,
        types: ContentType::ALL,
        tones: Tone::ALL,
        lengths: Length::ALL,
        defaults: OptionDefaults {
            language: Language::default(),
            content_type: ContentType::default(),
            tone: Tone::default(),
            length: Length::default(),
        },
    })
}

pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let result = state.writing_service.generate(&request).await?;
    Ok(Json(GenerateResponse { result, rtl: request.language.is_rtl() }))
}
