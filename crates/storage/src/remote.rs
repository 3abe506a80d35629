//! Remote record store speaking the PostgREST dialect used by Supabase.

use async_trait::async_trait;
use omniwriter_core::constants::GENERATIONS_TABLE;
use omniwriter_core::{GenerationRecord, RecordDraft};
use serde::de::DeserializeOwned;

use crate::error::StorageError;
use crate::traits::RecordStore;

/// Client for the `generations` table behind a PostgREST endpoint.
pub struct RemoteRecordStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    table: String,
}

impl std::fmt::Debug for RemoteRecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteRecordStore")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .field("table", &self.table)
            .finish()
    }
}

impl RemoteRecordStore {
    /// Creates a store for the project at `base_url` (e.g. `https://<ref>.supabase.co`).
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: String, api_key: String) -> Result<Self, StorageError> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| StorageError::ClientInit(e.to_string()))?;
        tracing::info!("Remote record store configured at {}", base_url);
        Ok(Self { client, base_url, api_key, table: GENERATIONS_TABLE.to_owned() })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    fn request(&self, method: reqwest::Method) -> reqwest::RequestBuilder {
        self.client
            .request(method, self.table_url())
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }
}

/// Fail on non-success status, otherwise return the body text.
async fn checked_body(response: reqwest::Response) -> Result<String, StorageError> {
    let status = response.status();
    if !status.is_success() {
        let body =
            response.text().await.unwrap_or_else(|_| "Could not read error body".to_owned());
        return Err(StorageError::HttpStatus { code: status.as_u16(), body });
    }
    Ok(response.text().await?)
}

fn parse_rows<T: DeserializeOwned>(body: &str, context: &str) -> Result<T, StorageError> {
    serde_json::from_str(body).map_err(|e| StorageError::MalformedResponse {
        context: context.to_owned(),
        source: e,
    })
}

#[async_trait]
impl RecordStore for RemoteRecordStore {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn insert(&self, draft: &RecordDraft) -> Result<GenerationRecord, StorageError> {
        let response = self
            .request(reqwest::Method::POST)
            .header("Prefer", "return=representation")
            .json(&[draft])
            .send()
            .await?;
        let body = checked_body(response).await?;
        let rows: Vec<GenerationRecord> = parse_rows(&body, "insert response")?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StorageError::UnexpectedResponse("insert returned no rows".to_owned()))
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<GenerationRecord>, StorageError> {
        let response = self
            .request(reqwest::Method::GET)
            .query(&[
                ("select", "*".to_owned()),
                ("order", "created_at.desc".to_owned()),
                ("limit", limit.to_string()),
            ])
            .send()
            .await?;
        let body = checked_body(response).await?;
        parse_rows(&body, "select response")
    }

    async fn delete(&self, id: &str) -> Result<(), StorageError> {
        let response = self
            .request(reqwest::Method::DELETE)
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await?;
        checked_body(response).await?;
        Ok(())
    }
}
