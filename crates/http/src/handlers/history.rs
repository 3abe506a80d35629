use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use omniwriter_core::{GenerationRecord, RecordDraft};

use crate::api_error::ApiError;
use crate::api_types::{DeleteResponse, HistoryResponse, SaveResponse};
use crate::AppState;

pub async fn list_history(State(state): State<Arc<AppState>>) -> Json<HistoryResponse> {
    let listed = state.history_service.refresh().await;
    Json(HistoryResponse { items: listed.value, source: listed.source })
}

pub async fn save_history(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<RecordDraft>,
) -> Result<Json<SaveResponse>, ApiError> {
    if draft.content.trim().is_empty() {
        return Err(ApiError::BadRequest("nothing to save: content is empty".to_owned()));
    }
    let saved = state.history_service.save(&draft).await?;
    Ok(Json(SaveResponse { record: saved.value, source: saved.source }))
}

pub async fn get_history_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<GenerationRecord>, ApiError> {
    state
        .history_service
        .find(&id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("history item '{id}' not found")))
}

pub async fn delete_history(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let source = state.history_service.delete(&id).await?;
    Ok(Json(DeleteResponse { deleted: true, id, source }))
}
