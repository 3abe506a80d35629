use anyhow::Result;

use super::build_history_service;
use crate::config::AppConfig;

pub(crate) async fn run_list(config: &AppConfig, limit: usize) -> Result<()> {
    let history = build_history_service(config)?;
    let mut listed = history.refresh().await;
    listed.value.truncate(limit);
    if listed.source.is_degraded() {
        tracing::warn!("Showing local history; remote store unavailable or not configured");
    }
    println!("{}", serde_json::to_string_pretty(&listed.value)?);
    Ok(())
}

pub(crate) async fn run_delete(config: &AppConfig, id: &str) -> Result<()> {
    let history = build_history_service(config)?;
    history.refresh().await;
    let source = history.delete(id).await?;
    println!(
        "{}",
        serde_json::to_string_pretty(
            &serde_json::json!({ "deleted": true, "id": id, "source": source })
        )?
    );
    Ok(())
}
