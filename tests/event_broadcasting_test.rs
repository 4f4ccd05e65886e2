mod common;

use common::{stub_client, StubRequester, TEST_API_KEY};
use lastfm_api::{ClientEvent, TagParams};
use serde_json::json;
use std::time::Duration;
use tokio::time::timeout;

fn empty_tag_page() -> serde_json::Value {
    json!({
        "tracks": {
            "track": [],
            "@attr": {"tag": "krautrock", "page": "1", "perPage": "50", "totalPages": "0", "total": "0"}
        }
    })
}

#[test_log::test(tokio::test)]
async fn test_request_lifecycle_events() {
    let stub = StubRequester::new();
    stub.respond("tag.getTopTracks", 200, empty_tag_page());
    let client = stub_client(&stub);
    let mut events = client.subscribe();

    assert!(client.latest_event().is_none());

    let page = client
        .tag_top_tracks(&TagParams::new("krautrock"))
        .await
        .unwrap();
    assert!(page.is_empty());

    let started = timeout(Duration::from_millis(100), events.recv())
        .await
        .expect("started event")
        .unwrap();
    match started {
        ClientEvent::RequestStarted { request } => {
            assert_eq!(request.method, "GET");
            assert_eq!(request.path, "/2.0/");
            assert_eq!(request.api_method(), Some("tag.getTopTracks"));
            assert!(!request.uri.contains(TEST_API_KEY));
        }
        other => panic!("expected RequestStarted, got {other:?}"),
    }

    let completed = timeout(Duration::from_millis(100), events.recv())
        .await
        .expect("completed event")
        .unwrap();
    assert!(matches!(
        completed,
        ClientEvent::RequestCompleted {
            status_code: 200,
            ..
        }
    ));
    assert_eq!(client.latest_event(), Some(completed));
}

#[tokio::test]
async fn test_clones_share_events() {
    let stub = StubRequester::new();
    stub.respond("tag.getTopTracks", 200, empty_tag_page());
    let client = stub_client(&stub);
    let clone = client.clone();
    let mut events = client.subscribe();

    clone
        .tag_top_tracks(&TagParams::new("krautrock"))
        .await
        .unwrap();

    let first = timeout(Duration::from_millis(100), events.recv())
        .await
        .expect("event from clone")
        .unwrap();
    assert!(matches!(first, ClientEvent::RequestStarted { .. }));
    assert!(matches!(
        client.latest_event(),
        Some(ClientEvent::RequestCompleted { .. })
    ));
}

#[tokio::test]
async fn test_separate_clients_have_separate_events() {
    let stub = StubRequester::new();
    stub.respond("tag.getTopTracks", 200, empty_tag_page());
    let busy = stub_client(&stub);
    let idle = stub_client(&stub);

    busy.tag_top_tracks(&TagParams::new("krautrock"))
        .await
        .unwrap();

    assert!(busy.latest_event().is_some());
    assert!(idle.latest_event().is_none());
}

#[tokio::test]
async fn test_service_error_still_completes_request() {
    let stub = StubRequester::new();
    stub.respond(
        "tag.getTopTracks",
        403,
        json!({"error": 10, "message": "Invalid API key - You must be granted a valid key by last.fm"}),
    );
    let client = stub_client(&stub);

    assert!(client
        .tag_top_tracks(&TagParams::new("krautrock"))
        .await
        .is_err());

    match client.latest_event() {
        Some(ClientEvent::RequestCompleted { status_code, .. }) => assert_eq!(status_code, 403),
        other => panic!("expected RequestCompleted, got {other:?}"),
    }
}
