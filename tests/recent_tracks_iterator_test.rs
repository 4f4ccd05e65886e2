mod common;

use common::{now_playing_track, recent_track, recent_tracks_page, stub_client, StubRequester};
use futures::StreamExt;
use lastfm_api::{AsyncPaginatedIterator, LastFmError, RecentTracksParams, ServiceErrorKind};
use serde_json::json;

fn three_page_history(stub: &StubRequester) {
    stub.respond(
        "user.getRecentTracks",
        200,
        recent_tracks_page(
            vec![
                now_playing_track("Miss Modular"),
                recent_track("Brakhage", 1_700_000_500),
                recent_track("Prisoner of Mars", 1_700_000_400),
            ],
            1,
            3,
        ),
    )
    .respond(
        "user.getRecentTracks",
        200,
        recent_tracks_page(
            vec![
                recent_track("Rainbo Conversation", 1_700_000_300),
                recent_track("Refractions in the Plastic Pulse", 1_700_000_200),
            ],
            2,
            3,
        ),
    )
    .respond(
        "user.getRecentTracks",
        200,
        recent_tracks_page(vec![recent_track("Parsec", 1_700_000_100)], 3, 3),
    );
}

#[test_log::test(tokio::test)]
async fn test_iterator_walks_every_page_and_stops() {
    let stub = StubRequester::new();
    three_page_history(&stub);
    let client = stub_client(&stub);

    let mut tracks = client.recent_tracks(RecentTracksParams::new("rj"));
    assert_eq!(tracks.current_page(), 0);
    assert_eq!(tracks.total_pages(), None);

    let all = tracks.collect_all().await.unwrap();

    let names: Vec<_> = all.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Brakhage",
            "Prisoner of Mars",
            "Rainbo Conversation",
            "Refractions in the Plastic Pulse",
            "Parsec"
        ]
    );
    assert_eq!(tracks.current_page(), 3);
    assert_eq!(tracks.total_pages(), Some(3));

    let pages: Vec<_> = stub
        .requests()
        .iter()
        .map(|r| r.param("page").unwrap())
        .collect();
    assert_eq!(pages, vec!["1", "2", "3"]);

    // Exhausted iterators stay exhausted without further requests.
    assert!(tracks.next().await.unwrap().is_none());
    assert_eq!(stub.requests().len(), 3);
}

#[tokio::test]
async fn test_iterator_can_include_now_playing() {
    let stub = StubRequester::new();
    three_page_history(&stub);
    let client = stub_client(&stub);

    let mut tracks = client
        .recent_tracks(RecentTracksParams::new("rj"))
        .include_now_playing(true);

    let first = tracks.next().await.unwrap().unwrap();
    assert!(first.now_playing);
    assert!(first.date.is_none());
    assert_eq!(first.name, "Miss Modular");
}

#[tokio::test]
async fn test_take_fetches_only_needed_pages() {
    let stub = StubRequester::new();
    three_page_history(&stub);
    let client = stub_client(&stub);

    let mut tracks = client.recent_tracks(RecentTracksParams::new("rj").with_limit(2));
    let first_three = tracks.take(3).await.unwrap();

    assert_eq!(first_three.len(), 3);
    assert_eq!(first_three[2].name, "Rainbo Conversation");
    assert_eq!(stub.requests().len(), 2);
    assert_eq!(stub.last_request().param("limit").as_deref(), Some("2"));
}

#[tokio::test]
async fn test_stop_timestamp_ends_iteration() {
    let stub = StubRequester::new();
    three_page_history(&stub);
    let client = stub_client(&stub);

    let mut tracks = client
        .recent_tracks(RecentTracksParams::new("rj"))
        .with_stop_timestamp(1_700_000_300);

    let newer = tracks.collect_all().await.unwrap();

    let names: Vec<_> = newer.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Brakhage", "Prisoner of Mars"]);
    assert_eq!(stub.requests().len(), 2);
}

#[tokio::test]
async fn test_iterator_starts_at_requested_page() {
    let stub = StubRequester::new();
    stub.respond(
        "user.getRecentTracks",
        200,
        recent_tracks_page(vec![recent_track("Parsec", 1_700_000_100)], 3, 3),
    );
    let client = stub_client(&stub);

    let all = client
        .recent_tracks(RecentTracksParams::new("rj").with_page(3))
        .collect_all()
        .await
        .unwrap();

    assert_eq!(all.len(), 1);
    assert_eq!(stub.last_request().param("page").as_deref(), Some("3"));
}

#[tokio::test]
async fn test_last_possible_page_number_ends_iteration() {
    let stub = StubRequester::new();
    stub.respond(
        "user.getRecentTracks",
        200,
        json!({
            "recenttracks": {
                "track": [recent_track("Parsec", 1_700_000_100)],
                "@attr": {
                    "user": "rj",
                    "page": "4294967295",
                    "perPage": "1",
                    "totalPages": "4294967295",
                    "total": "4294967295"
                }
            }
        }),
    );
    let client = stub_client(&stub);

    let mut tracks = client.recent_tracks(RecentTracksParams::new("rj"));

    assert_eq!(tracks.next().await.unwrap().unwrap().name, "Parsec");
    assert!(tracks.next().await.unwrap().is_none());
    assert_eq!(tracks.current_page(), u32::MAX);
    assert_eq!(stub.requests().len(), 1);
}

#[tokio::test]
async fn test_service_error_surfaces_from_next() {
    let stub = StubRequester::new();
    stub.respond(
        "user.getRecentTracks",
        200,
        json!({"error": 6, "message": "User not found"}),
    );
    let client = stub_client(&stub);

    let mut tracks = client.recent_tracks(RecentTracksParams::new("nobody"));
    let err = tracks.next().await.unwrap_err();

    match err {
        LastFmError::Service { kind, message } => {
            assert_eq!(kind, ServiceErrorKind::InvalidParameters);
            assert_eq!(message, "User not found");
        }
        other => panic!("expected a service error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_stream_yields_items_then_ends() {
    let stub = StubRequester::new();
    three_page_history(&stub);
    let client = stub_client(&stub);

    let stream = client.recent_tracks(RecentTracksParams::new("rj")).into_stream();
    let items: Vec<_> = stream.collect().await;

    assert_eq!(items.len(), 5);
    assert!(items.iter().all(|item| item.is_ok()));
}

#[tokio::test]
async fn test_stream_ends_after_error() {
    let stub = StubRequester::new();
    let client = stub_client(&stub);

    let stream = client.recent_tracks(RecentTracksParams::new("rj")).into_stream();
    let items: Vec<_> = stream.collect().await;

    assert_eq!(items.len(), 1);
    assert!(matches!(items[0], Err(LastFmError::Http(_))));
}
