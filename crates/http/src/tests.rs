#![expect(clippy::unwrap_used, reason = "test code")]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use omniwriter_llm::ai_types::{GenerateContentRequest, GenerateContentResponse};
use omniwriter_llm::{GenerationProvider, LlmError, RequestOrchestrator};
use omniwriter_service::{HistoryService, WritingService};
use omniwriter_storage::{LocalRecordStore, PersistenceGateway};
use tempfile::TempDir;
use tower::ServiceExt as _;

use crate::{create_router, AppState};

struct StaticProvider {
    fail: bool,
}

#[async_trait]
impl GenerationProvider for StaticProvider {
    async fn generate_content(
        &self,
        _request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LlmError> {
        if self.fail {
            return Err(LlmError::HttpStatus { code: 500, body: "quota detail".to_owned() });
        }
        Ok(serde_json::from_value(serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": "شارەکەم" }] } }]
        }))
        .unwrap())
    }
}

fn test_router(fail: bool) -> (Router, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let local = Arc::new(LocalRecordStore::new(temp_dir.path().join("history.json")));
    let orchestrator = RequestOrchestrator::new(Arc::new(StaticProvider { fail }));
    let state = Arc::new(AppState {
        writing_service: Arc::new(WritingService::new(orchestrator)),
        history_service: Arc::new(HistoryService::new(Arc::new(PersistenceGateway::local_only(
            local,
        )))),
    });
    (create_router(state), temp_dir)
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder().method(method).uri(uri).body(Body::empty()).unwrap()
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, value)
}

#[tokio::test]
async fn generate_returns_text_and_rtl_flag() {
    let (router, _temp_dir) = test_router(false);
    let (status, body) = send(
        &router,
        json_request(
            "POST",
            "/api/generate",
            serde_json::json!({ "prompt": "My city", "language": "Kurdish (Sorani)" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "شارەکەم");
    assert_eq!(body["rtl"], true);
    assert_eq!(body["grounding_references"], serde_json::json!([]));
}

#[tokio::test]
async fn blank_prompt_is_bad_request() {
    let (router, _temp_dir) = test_router(false);
    let (status, body) =
        send(&router, json_request("POST", "/api/generate", serde_json::json!({ "prompt": " " })))
            .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("prompt"));
}

#[tokio::test]
async fn provider_failure_hides_details() {
    let (router, _temp_dir) = test_router(true);
    let (status, body) =
        send(&router, json_request("POST", "/api/generate", serde_json::json!({ "prompt": "x" })))
            .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "An error occurred while generating content. Please try again.");
}

#[tokio::test]
async fn history_save_list_get_delete() {
    let (router, _temp_dir) = test_router(false);
    let draft = serde_json::json!({
        "prompt": "My city",
        "content": "Erbil",
        "language": "Arabic",
        "type": "Essay",
        "tone": "Formal"
    });

    let (status, saved) = send(&router, json_request("POST", "/api/history", draft)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["source"], "local");
    let id = saved["record"]["id"].as_str().unwrap().to_owned();

    let (status, listed) = send(&router, empty_request("GET", "/api/history")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["items"][0]["id"], id.as_str());
    assert_eq!(listed["items"][0]["type"], "Essay");

    let (status, item) = send(&router, empty_request("GET", &format!("/api/history/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(item["content"], "Erbil");

    let (status, deleted) =
        send(&router, empty_request("DELETE", &format!("/api/history/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["deleted"], true);

    let (_, listed) = send(&router, empty_request("GET", "/api/history")).await;
    assert_eq!(listed["items"], serde_json::json!([]));
}

#[tokio::test]
async fn saving_empty_content_is_rejected() {
    let (router, _temp_dir) = test_router(false);
    let draft = serde_json::json!({
        "prompt": "p", "content": "", "language": "English", "type": "Story", "tone": "Casual"
    });
    let (status, _) = send(&router, json_request("POST", "/api/history", draft)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_history_item_is_not_found() {
    let (router, _temp_dir) = test_router(false);
    let (status, _) = send(&router, empty_request("GET", "/api/history/missing")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn options_lists_form_values_and_defaults() {
    let (router, _temp_dir) = test_router(false);
    let (status, body) = send(&router, empty_request("GET", "/api/options")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["languages"].as_array().unwrap().len(), 6);
    assert_eq!(body["types"][3], "Academic Report");
    assert_eq!(body["lengths"], serde_json::json!(["Short", "Medium", "Long"]));
    assert_eq!(body["defaults"]["language"], "Kurdish (Sorani)");
    assert_eq!(body["defaults"]["type"], "Essay");
}
