//! Process configuration read once from the environment.

use std::path::PathBuf;

use anyhow::Result;
use omniwriter_core::constants::DEFAULT_MODEL;
use omniwriter_core::env_parse_with_default;
use omniwriter_llm::DEFAULT_BASE_URL;

pub(crate) const DEFAULT_PORT: u16 = 37780;

/// Supabase project holding the `generations` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SupabaseConfig {
    pub url: String,
    pub key: String,
}

#[derive(Debug, Clone)]
pub(crate) struct AppConfig {
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub supabase: Option<SupabaseConfig>,
    pub history_path: PathBuf,
    pub port: u16,
}

impl AppConfig {
    pub(crate) fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable lookup. Blank values count as unset.
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let supabase = match (get("SUPABASE_URL"), get("SUPABASE_KEY")) {
            (Some(url), Some(key)) => Some(SupabaseConfig { url, key }),
            _ => None,
        };

        Self {
            api_key: get("GEMINI_API_KEY").or_else(|| get("API_KEY")),
            api_url: get("GEMINI_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            model: get("OMNIWRITER_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_owned()),
            supabase,
            history_path: get("OMNIWRITER_HISTORY_PATH")
                .map_or_else(default_history_path, PathBuf::from),
            port: env_parse_with_default("OMNIWRITER_PORT", DEFAULT_PORT),
        }
    }

    pub(crate) fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            anyhow::anyhow!("GEMINI_API_KEY or API_KEY environment variable must be set")
        })
    }
}

fn default_history_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("omniwriter")
        .join("history.json")
}
