use std::sync::Arc;

use anyhow::Result;
use omniwriter_http::{create_router, AppState};

use super::{build_history_service, build_writing_service};
use crate::config::AppConfig;

pub(crate) async fn run(config: &AppConfig, host: &str, port: u16) -> Result<()> {
    let history_service = Arc::new(build_history_service(config)?);
    let loaded = history_service.refresh().await;
    tracing::info!(count = loaded.value.len(), source = loaded.source.as_str(), "History loaded");

    let state = Arc::new(AppState {
        writing_service: Arc::new(build_writing_service(config)?),
        history_service,
    });

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
