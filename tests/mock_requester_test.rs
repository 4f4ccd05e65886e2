#[cfg(feature = "mock")]
mod mock_tests {
    use lastfm_api::{
        AsyncPaginatedIterator, ClientConfig, LastFmClient, LastFmError, MockAsyncPaginatedIterator,
        MockRequester, RawResponse, Result, ServiceErrorKind,
    };

    #[tokio::test]
    async fn test_mock_requester_serves_user_info() -> Result<()> {
        let mut requester = MockRequester::new();

        requester
            .expect_get()
            .withf(|url, headers| {
                url.contains("method=user.getInfo") && url.contains("user=rj") && headers.is_none()
            })
            .times(1)
            .returning(|_, _| {
                Ok(RawResponse::new(
                    200,
                    r#"{"user": {
                        "name": "rj",
                        "url": "https://www.last.fm/user/rj",
                        "playlists": "0",
                        "playcount": "150316",
                        "registered": {"unixtime": "1037793040"},
                        "subscriber": "1",
                        "bootstrap": "0",
                        "type": "alum",
                        "artist_count": "6823",
                        "track_count": "45621",
                        "album_count": "14301"
                    }}"#,
                ))
            });

        let client = LastFmClient::new(Box::new(requester), ClientConfig::new("mock-key"))?;
        let info = client.user_info("rj").await?;

        assert_eq!(info.profile.name, "rj");
        assert_eq!(info.profile.country, "");
        assert!(info.profile.images.is_empty());
        assert_eq!(info.track_count, 45_621);
        Ok(())
    }

    #[tokio::test]
    async fn test_mock_requester_post_carries_form_header() {
        let mut requester = MockRequester::new();

        requester
            .expect_post()
            .withf(|url, body, headers| {
                url.ends_with("?format=json")
                    && body.starts_with("method=user.getInfo&api_key=mock-key")
                    && headers.as_ref().and_then(|h| h.get("Content-Type")).map(String::as_str)
                        == Some("application/x-www-form-urlencoded")
            })
            .times(1)
            .returning(|_, _, _| {
                Ok(RawResponse::new(
                    200,
                    r#"{"error": 9, "message": "Invalid session key - Please re-authenticate"}"#,
                ))
            });

        let client = LastFmClient::new(Box::new(requester), ClientConfig::new("mock-key")).unwrap();
        let err = client.user_info_by_session("expired").await.unwrap_err();

        assert_eq!(err.service_kind(), Some(ServiceErrorKind::InvalidSessionKey));
    }

    #[tokio::test]
    async fn test_mock_requester_transport_failure() {
        let mut requester = MockRequester::new();
        requester
            .expect_get()
            .returning(|_, _| Err(LastFmError::Http("connection refused".to_string())));

        let client = LastFmClient::new(Box::new(requester), ClientConfig::new("mock-key")).unwrap();
        let err = client.user_weekly_chart_list("rj").await.unwrap_err();

        assert!(matches!(err, LastFmError::Http(ref msg) if msg == "connection refused"));
    }

    #[tokio::test]
    async fn test_mock_iterator() -> Result<()> {
        let mut iterator = MockAsyncPaginatedIterator::<u32>::new();
        let mut remaining = vec![3, 2, 1];

        iterator
            .expect_next()
            .times(4)
            .returning(move || Ok(remaining.pop()));
        iterator.expect_current_page().return_const(1u32);

        let mut items = Vec::new();
        while let Some(item) = iterator.next().await? {
            items.push(item);
        }
        assert_eq!(items, vec![1, 2, 3]);
        assert_eq!(iterator.current_page(), 1);
        Ok(())
    }
}
