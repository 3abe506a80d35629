use anyhow::Result;
use omniwriter_core::{GenerationRequest, RecordDraft};

use super::{build_history_service, build_writing_service};
use crate::config::AppConfig;

pub(crate) async fn run(config: &AppConfig, request: &GenerationRequest, save: bool) -> Result<()> {
    let writing = build_writing_service(config)?;
    let result = match writing.generate(request).await {
        Ok(result) => result,
        Err(e) => anyhow::bail!("{}", e.user_message()),
    };

    println!("{}", serde_json::to_string_pretty(&result)?);

    if save {
        let history = build_history_service(config)?;
        let draft = RecordDraft::from_generation(request, result.text);
        match history.save(&draft).await {
            Ok(saved) => {
                tracing::info!(id = %saved.value.id, source = saved.source.as_str(), "Saved to history");
            },
            Err(e) => anyhow::bail!("{}", e.user_message()),
        }
    }
    Ok(())
}
