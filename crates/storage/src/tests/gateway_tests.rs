#![expect(clippy::unwrap_used, reason = "test code")]

use std::sync::Arc;

use omniwriter_core::RecordSource;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{
    create_test_draft, create_test_local_store, create_test_record, MemoryRemote,
    UnreachableRemote,
};
use crate::gateway::PersistenceGateway;
use crate::local::LocalRecordStore;
use crate::remote::RemoteRecordStore;

fn gateway_with(remote: Arc<MemoryRemote>) -> (PersistenceGateway, Arc<LocalRecordStore>, TempDir) {
    let (local, temp_dir) = create_test_local_store();
    let local = Arc::new(local);
    (PersistenceGateway::new(remote, Arc::clone(&local)), local, temp_dir)
}

fn unreachable_gateway() -> (PersistenceGateway, Arc<LocalRecordStore>, TempDir) {
    let (local, temp_dir) = create_test_local_store();
    let local = Arc::new(local);
    (PersistenceGateway::new(Arc::new(UnreachableRemote), Arc::clone(&local)), local, temp_dir)
}

#[tokio::test]
async fn save_then_list_returns_saved_record_first() {
    let remote = Arc::new(MemoryRemote::default());
    let (gateway, local, _temp_dir) = gateway_with(Arc::clone(&remote));

    gateway.save(&create_test_draft("older")).await.unwrap();
    let saved = gateway.save(&create_test_draft("newest")).await.unwrap();
    assert_eq!(saved.source, RecordSource::Remote);

    let listed = gateway.list().await;
    assert_eq!(listed.source, RecordSource::Remote);
    assert_eq!(listed.value.first().unwrap(), &saved.value);
    assert!(local.get_all().unwrap().is_empty());
}

#[tokio::test]
async fn remote_unreachable_everything_served_locally() {
    let (gateway, local, _temp_dir) = unreachable_gateway();

    let saved = gateway.save(&create_test_draft("offline")).await.unwrap();
    assert_eq!(saved.source, RecordSource::Local);
    assert!(saved.source.is_degraded());
    assert_eq!(local.get_all().unwrap(), vec![saved.value.clone()]);

    let listed = gateway.list().await;
    assert_eq!(listed.source, RecordSource::Local);
    assert_eq!(listed.value, vec![saved.value.clone()]);

    let source = gateway.delete(&saved.value.id).await.unwrap();
    assert_eq!(source, RecordSource::Local);
    assert!(gateway.list().await.value.is_empty());
}

#[tokio::test]
async fn list_never_merges_stores() {
    let remote = Arc::new(MemoryRemote::default());
    let (gateway, local, _temp_dir) = gateway_with(Arc::clone(&remote));
    local.insert_front(create_test_record("only-local", 1)).unwrap();
    gateway.save(&create_test_draft("only-remote")).await.unwrap();

    let listed = gateway.list().await;
    let prompts: Vec<_> = listed.value.iter().map(|r| r.prompt.as_str()).collect();
    assert_eq!(prompts, ["only-remote"]);
}

#[tokio::test]
async fn delete_of_record_missing_locally_is_tolerated() {
    let (gateway, local, _temp_dir) = unreachable_gateway();
    local.insert_front(create_test_record("kept", 1)).unwrap();

    let source = gateway.delete("saved-remotely-earlier").await.unwrap();
    assert_eq!(source, RecordSource::Local);
    assert_eq!(local.get_all().unwrap().len(), 1);
}

#[tokio::test]
async fn remote_delete_success_leaves_local_alone() {
    let remote = Arc::new(MemoryRemote::default());
    let (gateway, local, _temp_dir) = gateway_with(Arc::clone(&remote));
    let saved = gateway.save(&create_test_draft("doomed")).await.unwrap();
    local.insert_front(create_test_record("local-copy", 1)).unwrap();

    assert_eq!(gateway.delete(&saved.value.id).await.unwrap(), RecordSource::Remote);
    assert!(remote.rows().is_empty());
    assert_eq!(local.get_all().unwrap().len(), 1);
}

#[tokio::test]
async fn both_stores_failing_surfaces_local_error() {
    let temp_dir = TempDir::new().unwrap();
    // A directory where the slot file should be makes every local read fail.
    let local = Arc::new(LocalRecordStore::new(temp_dir.path()));
    let gateway = PersistenceGateway::new(Arc::new(UnreachableRemote), local);

    let err = gateway.save(&create_test_draft("lost")).await.unwrap_err();
    assert!(err.is_local());
    let err = gateway.delete("any").await.unwrap_err();
    assert!(err.is_local());

    let listed = gateway.list().await;
    assert_eq!(listed.source, RecordSource::Local);
    assert!(listed.value.is_empty());
}

#[tokio::test]
async fn local_only_gateway_skips_remote() {
    let (local, _temp_dir) = create_test_local_store();
    let gateway = PersistenceGateway::local_only(Arc::new(local));
    assert!(!gateway.has_remote());

    let saved = gateway.save(&create_test_draft("solo")).await.unwrap();
    assert_eq!(saved.source, RecordSource::Local);
    assert_eq!(gateway.list().await.value, vec![saved.value]);
}

#[tokio::test]
async fn malformed_remote_body_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/generations"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "message": "not rows" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/generations"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let (local, _temp_dir) = create_test_local_store();
    let local = Arc::new(local);
    let remote = RemoteRecordStore::new(server.uri(), "key".to_owned()).unwrap();
    let gateway = PersistenceGateway::new(Arc::new(remote), Arc::clone(&local));

    let saved = gateway.save(&create_test_draft("fallback")).await.unwrap();
    assert_eq!(saved.source, RecordSource::Local);

    let listed = gateway.list().await;
    assert_eq!(listed.source, RecordSource::Local);
    assert_eq!(listed.value, vec![saved.value]);
}
