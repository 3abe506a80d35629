pub(crate) mod generate;
pub(crate) mod history;
pub(crate) mod serve;

use std::sync::Arc;

use anyhow::Result;
use omniwriter_llm::{GeminiClient, RequestOrchestrator};
use omniwriter_service::{HistoryService, WritingService};
use omniwriter_storage::{LocalRecordStore, PersistenceGateway, RemoteRecordStore};

use crate::config::AppConfig;

pub(crate) fn build_writing_service(config: &AppConfig) -> Result<WritingService> {
    let client = GeminiClient::new(config.require_api_key()?.to_owned(), config.api_url.clone())?
        .with_model(config.model.clone());
    tracing::info!(model = client.model(), "Generation provider configured");
    Ok(WritingService::new(RequestOrchestrator::new(Arc::new(client))))
}

pub(crate) fn build_history_service(config: &AppConfig) -> Result<HistoryService> {
    let local = Arc::new(LocalRecordStore::new(&config.history_path));
    let gateway = match &config.supabase {
        Some(supabase) => {
            let remote = RemoteRecordStore::new(supabase.url.clone(), supabase.key.clone())?;
            tracing::info!(url = %supabase.url, "Remote history store configured");
            PersistenceGateway::new(Arc::new(remote), local)
        },
        None => {
            tracing::info!(
                path = %config.history_path.display(),
                "SUPABASE_URL/SUPABASE_KEY not set, history is local only"
            );
            PersistenceGateway::local_only(local)
        },
    };
    Ok(HistoryService::new(Arc::new(gateway)))
}
