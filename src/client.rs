use crate::collection::{
    decode_list, decode_page, decode_search, CollectionList, CollectionPage, DateRange,
    SearchResults,
};
use crate::config::ClientConfig;
use crate::decode::{decode_wrapped, DecodeResult};
use crate::events::{ClientEvent, ClientEventReceiver, RequestInfo, SharedEventBroadcaster};
use crate::iterator::RecentTracksIterator;
use crate::params::{
    AlbumInfoParams, ArtistInfoParams, ArtistSimilarParams, ArtistTopParams, GeoParams, ParamMap,
    Params, RecentTracksParams, SearchParams, TagParams, TrackInfoParams, UserPageParams,
    UserTopParams, WeeklyChartParams,
};
use crate::requester::{Headers, RawResponse, Requester};
use crate::response::decode_response;
use crate::types::{
    Album, AlbumInfo, Artist, ArtistInfo, ExtendedRecentTrack, LovedTrack, RecentTrack,
    SearchTrack, TopTrack, TrackInfo, UserInfo, UserPublicInfo, WeeklyChartAlbum,
    WeeklyChartArtist, WeeklyChartTrack,
};
use crate::Result;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Client for the Last.fm web API.
///
/// Every operation issues one request through the configured [`Requester`]
/// and decodes the answer into typed records. The client is cheap to clone;
/// clones share the transport and the event channel.
///
/// # Examples
///
/// ```rust,no_run
/// use lastfm_api::{ClientConfig, HttpRequester, LastFmClient, Result, TagParams};
///
/// #[tokio::main]
/// async fn main() -> Result<()> {
///     let requester = HttpRequester::new(Box::new(http_client::native::NativeClient::new()));
///     let client = LastFmClient::new(Box::new(requester), ClientConfig::from_env()?)?;
///
///     let page = client.tag_top_tracks(&TagParams::new("shoegaze")).await?;
///     for track in &page.items {
///         println!("{track}");
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct LastFmClient {
    requester: Arc<dyn Requester>,
    config: ClientConfig,
    broadcaster: Arc<SharedEventBroadcaster>,
}

impl LastFmClient {
    /// Create a client, rejecting configurations without an API key.
    pub fn new(requester: Box<dyn Requester>, config: ClientConfig) -> Result<Self> {
        Self::from_shared(Arc::from(requester), config)
    }

    pub fn from_shared(requester: Arc<dyn Requester>, config: ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            requester,
            config,
            broadcaster: Arc::new(SharedEventBroadcaster::new()),
        })
    }

    /// Create a client over the native (curl) HTTP client.
    #[cfg(feature = "curl")]
    pub fn with_native_client(config: ClientConfig) -> Result<Self> {
        let mut requester =
            crate::HttpRequester::new(Box::new(http_client::native::NativeClient::new()));
        if let Some(user_agent) = &config.user_agent {
            requester = requester.with_user_agent(user_agent.clone());
        }
        Self::new(Box::new(requester), config)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn subscribe(&self) -> ClientEventReceiver {
        self.broadcaster.subscribe()
    }

    pub fn latest_event(&self) -> Option<ClientEvent> {
        self.broadcaster.latest_event()
    }

    // ============================================================================================
    // REQUEST PLUMBING
    // ============================================================================================

    fn encode_pairs<'a>(pairs: impl Iterator<Item = (&'a str, &'a str)>) -> String {
        pairs
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// GET URL for `method`: endpoint, then `method`, `api_key`, `format`, then `params`.
    pub fn request_url(&self, method: &str, params: &ParamMap) -> String {
        let fixed = [
            ("method", method),
            ("api_key", self.config.api_key.as_str()),
            ("format", "json"),
        ];
        let query = Self::encode_pairs(
            fixed
                .into_iter()
                .chain(params.iter().map(|(k, v)| (*k, v.as_str()))),
        );
        format!("{}?{query}", self.config.endpoint())
    }

    fn form_body(&self, method: &str, params: &ParamMap) -> String {
        let fixed = [("method", method), ("api_key", self.config.api_key.as_str())];
        Self::encode_pairs(
            fixed
                .into_iter()
                .chain(params.iter().map(|(k, v)| (*k, v.as_str()))),
        )
    }

    async fn execute(
        &self,
        http_method: &str,
        url: &str,
        body: Option<String>,
    ) -> Result<RawResponse> {
        let request_info = RequestInfo::from_url_and_method(url, http_method);
        let request_start = Instant::now();
        log::debug!("Sending {}", request_info.short_description());

        self.broadcaster.broadcast_event(ClientEvent::RequestStarted {
            request: request_info.clone(),
        });

        let outcome = match body {
            Some(body) => {
                let mut headers = Headers::new();
                headers.insert("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string());
                self.requester.post(url, body, Some(headers)).await
            }
            None => self.requester.get(url, None).await,
        };

        match &outcome {
            Ok(response) => {
                let duration_ms = request_start.elapsed().as_millis() as u64;
                log::debug!(
                    "{} -> HTTP {} in {duration_ms}ms",
                    request_info.short_description(),
                    response.status
                );
                self.broadcaster.broadcast_event(ClientEvent::RequestCompleted {
                    request: request_info,
                    status_code: response.status,
                    duration_ms,
                });
            }
            Err(e) => {
                log::debug!("{} failed: {e}", request_info.short_description());
                self.broadcaster.broadcast_event(ClientEvent::RequestFailed {
                    request: request_info,
                    error: e.to_string(),
                });
            }
        }

        outcome
    }

    async fn get<T, F>(&self, method: &str, params: ParamMap, decoder: F) -> Result<T>
    where
        F: FnOnce(&Value) -> DecodeResult<T> + Send,
    {
        let url = self.request_url(method, &params);
        let outcome = self.execute("GET", &url, None).await;
        decode_response(outcome, decoder)
    }

    async fn post<T, F>(&self, method: &str, params: ParamMap, decoder: F) -> Result<T>
    where
        F: FnOnce(&Value) -> DecodeResult<T> + Send,
    {
        let url = format!("{}?format=json", self.config.endpoint());
        let body = self.form_body(method, &params);
        let outcome = self.execute("POST", &url, Some(body)).await;
        decode_response(outcome, decoder)
    }

    // ============================================================================================
    // ARTIST
    // ============================================================================================

    pub async fn artist_info(&self, params: &ArtistInfoParams) -> Result<ArtistInfo> {
        self.get("artist.getInfo", params.to_params(), |v| {
            decode_wrapped(v, "artist")
        })
        .await
    }

    pub async fn artist_similar(
        &self,
        params: &ArtistSimilarParams,
    ) -> Result<CollectionList<Artist>> {
        self.get("artist.getSimilar", params.to_params(), |v| {
            decode_list(v, "similarartists", "artist")
        })
        .await
    }

    pub async fn artist_top_tracks(
        &self,
        params: &ArtistTopParams,
    ) -> Result<CollectionPage<TopTrack>> {
        self.get("artist.getTopTracks", params.to_params(), |v| {
            decode_page(v, "toptracks", "track")
        })
        .await
    }

    pub async fn artist_top_albums(
        &self,
        params: &ArtistTopParams,
    ) -> Result<CollectionPage<Album>> {
        self.get("artist.getTopAlbums", params.to_params(), |v| {
            decode_page(v, "topalbums", "album")
        })
        .await
    }

    pub async fn artist_search(&self, params: &SearchParams) -> Result<SearchResults<Artist>> {
        self.get("artist.search", params.to_search_params("artist"), |v| {
            decode_search(v)
        })
        .await
    }

    // ============================================================================================
    // ALBUM
    // ============================================================================================

    pub async fn album_info(&self, params: &AlbumInfoParams) -> Result<AlbumInfo> {
        self.get("album.getInfo", params.to_params(), |v| {
            decode_wrapped(v, "album")
        })
        .await
    }

    pub async fn album_search(&self, params: &SearchParams) -> Result<SearchResults<Album>> {
        self.get("album.search", params.to_search_params("album"), |v| {
            decode_search(v)
        })
        .await
    }

    // ============================================================================================
    // TRACK
    // ============================================================================================

    pub async fn track_info(&self, params: &TrackInfoParams) -> Result<TrackInfo> {
        self.get("track.getInfo", params.to_params(), |v| {
            decode_wrapped(v, "track")
        })
        .await
    }

    pub async fn track_search(&self, params: &SearchParams) -> Result<SearchResults<SearchTrack>> {
        self.get("track.search", params.to_search_params("track"), |v| {
            decode_search(v)
        })
        .await
    }

    // ============================================================================================
    // GEO
    // ============================================================================================

    pub async fn geo_top_tracks(&self, params: &GeoParams) -> Result<CollectionPage<TopTrack>> {
        self.get("geo.getTopTracks", params.to_params(), |v| {
            decode_page(v, "tracks", "track")
        })
        .await
    }

    pub async fn geo_top_artists(&self, params: &GeoParams) -> Result<CollectionPage<Artist>> {
        let mut map = params.to_params();
        map.remove("location");
        self.get("geo.getTopArtists", map, |v| {
            decode_page(v, "topartists", "artist")
        })
        .await
    }

    // ============================================================================================
    // TAG
    // ============================================================================================

    pub async fn tag_top_tracks(&self, params: &TagParams) -> Result<CollectionPage<TopTrack>> {
        self.get("tag.getTopTracks", params.to_params(), |v| {
            decode_page(v, "tracks", "track")
        })
        .await
    }

    pub async fn tag_top_artists(&self, params: &TagParams) -> Result<CollectionPage<Artist>> {
        self.get("tag.getTopArtists", params.to_params(), |v| {
            decode_page(v, "topartists", "artist")
        })
        .await
    }

    pub async fn tag_top_albums(&self, params: &TagParams) -> Result<CollectionPage<Album>> {
        self.get("tag.getTopAlbums", params.to_params(), |v| {
            decode_page(v, "albums", "album")
        })
        .await
    }

    // ============================================================================================
    // USER
    // ============================================================================================

    pub async fn user_info(&self, user: &str) -> Result<UserInfo> {
        let mut params = ParamMap::new();
        params.insert("user", user.to_string());
        self.get("user.getInfo", params, |v| decode_wrapped(v, "user"))
            .await
    }

    /// Profile of the user owning session key `sk`, sent as a form POST.
    pub async fn user_info_by_session(&self, sk: &str) -> Result<UserInfo> {
        let mut params = ParamMap::new();
        params.insert("sk", sk.to_string());
        self.post("user.getInfo", params, |v| decode_wrapped(v, "user"))
            .await
    }

    pub async fn user_recent_tracks(
        &self,
        params: &RecentTracksParams,
    ) -> Result<CollectionPage<RecentTrack>> {
        let mut map = params.to_params();
        map.insert("extended", "0".to_string());
        self.get("user.getRecentTracks", map, |v| {
            decode_page(v, "recenttracks", "track")
        })
        .await
    }

    pub async fn user_extended_recent_tracks(
        &self,
        params: &RecentTracksParams,
    ) -> Result<CollectionPage<ExtendedRecentTrack>> {
        let mut map = params.to_params();
        map.insert("extended", "1".to_string());
        self.get("user.getRecentTracks", map, |v| {
            decode_page(v, "recenttracks", "track")
        })
        .await
    }

    /// Iterate over a user's scrobbles, newest first, one page per request.
    pub fn recent_tracks(&self, params: RecentTracksParams) -> RecentTracksIterator {
        RecentTracksIterator::new(self.clone(), params)
    }

    pub async fn user_top_tracks(&self, params: &UserTopParams) -> Result<CollectionPage<TopTrack>> {
        self.get("user.getTopTracks", params.to_params(), |v| {
            decode_page(v, "toptracks", "track")
        })
        .await
    }

    pub async fn user_top_artists(&self, params: &UserTopParams) -> Result<CollectionPage<Artist>> {
        self.get("user.getTopArtists", params.to_params(), |v| {
            decode_page(v, "topartists", "artist")
        })
        .await
    }

    pub async fn user_top_albums(&self, params: &UserTopParams) -> Result<CollectionPage<Album>> {
        self.get("user.getTopAlbums", params.to_params(), |v| {
            decode_page(v, "topalbums", "album")
        })
        .await
    }

    pub async fn user_loved_tracks(
        &self,
        params: &UserPageParams,
    ) -> Result<CollectionPage<LovedTrack>> {
        self.get("user.getLovedTracks", params.to_params(), |v| {
            decode_page(v, "lovedtracks", "track")
        })
        .await
    }

    pub async fn user_friends(
        &self,
        params: &UserPageParams,
    ) -> Result<CollectionPage<UserPublicInfo>> {
        self.get("user.getFriends", params.to_params(), |v| {
            decode_page(v, "friends", "user")
        })
        .await
    }

    pub async fn user_weekly_track_chart(
        &self,
        params: &WeeklyChartParams,
    ) -> Result<CollectionList<WeeklyChartTrack>> {
        self.get("user.getWeeklyTrackChart", params.to_params(), |v| {
            decode_list(v, "weeklytrackchart", "track")
        })
        .await
    }

    pub async fn user_weekly_artist_chart(
        &self,
        params: &WeeklyChartParams,
    ) -> Result<CollectionList<WeeklyChartArtist>> {
        self.get("user.getWeeklyArtistChart", params.to_params(), |v| {
            decode_list(v, "weeklyartistchart", "artist")
        })
        .await
    }

    pub async fn user_weekly_album_chart(
        &self,
        params: &WeeklyChartParams,
    ) -> Result<CollectionList<WeeklyChartAlbum>> {
        self.get("user.getWeeklyAlbumChart", params.to_params(), |v| {
            decode_list(v, "weeklyalbumchart", "album")
        })
        .await
    }

    /// Week boundaries for which weekly charts are available.
    pub async fn user_weekly_chart_list(&self, user: &str) -> Result<CollectionList<DateRange>> {
        let mut params = ParamMap::new();
        params.insert("user", user.to_string());
        self.get("user.getWeeklyChartList", params, |v| {
            decode_list(v, "weeklychartlist", "chart")
        })
        .await
    }
}

impl std::fmt::Debug for LastFmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LastFmClient")
            .field("config", &self.config)
            .field("broadcaster", &self.broadcaster)
            .finish_non_exhaustive()
    }
}
