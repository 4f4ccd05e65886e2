#![allow(dead_code)]

use async_trait::async_trait;
use lastfm_api::{ClientConfig, Headers, LastFmClient, LastFmError, RawResponse, Requester, Result};
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

/// One request seen by [`StubRequester`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub http_method: &'static str,
    pub url: String,
    pub body: Option<String>,
    pub headers: Headers,
}

impl RecordedRequest {
    /// Decoded `name=value` pairs from the query string, then the form body.
    pub fn params(&self) -> HashMap<String, String> {
        let query = self.url.split_once('?').map(|(_, q)| q).unwrap_or_default();
        let body = self.body.as_deref().unwrap_or_default();

        query
            .split('&')
            .chain(body.split('&'))
            .filter(|pair| !pair.is_empty())
            .filter_map(|pair| {
                let (name, value) = pair.split_once('=')?;
                let value = urlencoding::decode(value).ok()?.into_owned();
                Some((name.to_string(), value))
            })
            .collect()
    }

    pub fn param(&self, name: &str) -> Option<String> {
        self.params().remove(name)
    }

    pub fn api_method(&self) -> Option<String> {
        self.param("method")
    }
}

/// Requester that answers from canned responses, keyed by API method.
///
/// Responses queued for a method are handed out in order; the last one is
/// repeated once the queue is down to a single entry. Requests for a method
/// with nothing queued fail as transport errors.
#[derive(Clone, Default)]
pub struct StubRequester {
    responses: Arc<Mutex<HashMap<String, VecDeque<RawResponse>>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubRequester {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, api_method: &str, status: u16, body: Value) -> &Self {
        self.respond_raw(api_method, RawResponse::new(status, body.to_string()))
    }

    pub fn respond_raw(&self, api_method: &str, response: RawResponse) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .entry(api_method.to_string())
            .or_default()
            .push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("no request was sent through the stub")
    }

    fn answer(&self, request: RecordedRequest) -> Result<RawResponse> {
        let api_method = request.api_method().unwrap_or_default();
        self.requests.lock().unwrap().push(request);

        let mut responses = self.responses.lock().unwrap();
        let queue = responses
            .get_mut(&api_method)
            .filter(|queue| !queue.is_empty())
            .ok_or_else(|| LastFmError::Http(format!("no canned response for {api_method}")))?;

        Ok(if queue.len() > 1 {
            queue.pop_front().unwrap()
        } else {
            queue[0].clone()
        })
    }
}

#[async_trait]
impl Requester for StubRequester {
    async fn get(&self, url: &str, headers: Option<Headers>) -> Result<RawResponse> {
        self.answer(RecordedRequest {
            http_method: "GET",
            url: url.to_string(),
            body: None,
            headers: headers.unwrap_or_default(),
        })
    }

    async fn post(&self, url: &str, body: String, headers: Option<Headers>) -> Result<RawResponse> {
        self.answer(RecordedRequest {
            http_method: "POST",
            url: url.to_string(),
            body: Some(body),
            headers: headers.unwrap_or_default(),
        })
    }
}

pub const TEST_API_KEY: &str = "test-api-key";

/// A client over `stub`, sharing its recorded requests with the caller.
pub fn stub_client(stub: &StubRequester) -> LastFmClient {
    LastFmClient::new(Box::new(stub.clone()), ClientConfig::new(TEST_API_KEY))
        .expect("test config is valid")
}

pub fn image_list(base: &str) -> Value {
    serde_json::json!([
        {"#text": format!("{base}/34s.png"), "size": "small"},
        {"#text": format!("{base}/64s.png"), "size": "medium"},
        {"#text": format!("{base}/174s.png"), "size": "large"},
        {"#text": format!("{base}/300x300.png"), "size": "extralarge"}
    ])
}

/// A dated scrobble as listed by `user.getRecentTracks`.
pub fn recent_track(name: &str, uts: u64) -> Value {
    serde_json::json!({
        "artist": {"mbid": "", "#text": "Stereolab"},
        "streamable": "0",
        "image": image_list("https://lastfm.freetls.fastly.net/i/u"),
        "mbid": "",
        "album": {"mbid": "", "#text": "Dots and Loops"},
        "name": name,
        "url": format!("https://www.last.fm/music/Stereolab/_/{}", name.replace(' ', "+")),
        "date": {"uts": uts.to_string(), "#text": "01 Jan 2024, 00:00"}
    })
}

pub fn now_playing_track(name: &str) -> Value {
    serde_json::json!({
        "artist": {"mbid": "", "#text": "Stereolab"},
        "streamable": "0",
        "image": [],
        "mbid": "",
        "album": {"mbid": "", "#text": "Dots and Loops"},
        "name": name,
        "url": "https://www.last.fm/music/Stereolab/_/Now",
        "@attr": {"nowplaying": "true"}
    })
}

/// A `user.getRecentTracks` page envelope.
pub fn recent_tracks_page(tracks: Vec<Value>, page: u32, total_pages: u32) -> Value {
    serde_json::json!({
        "recenttracks": {
            "track": tracks,
            "@attr": {
                "user": "rj",
                "page": page.to_string(),
                "perPage": "2",
                "totalPages": total_pages.to_string(),
                "total": (total_pages * 2).to_string()
            }
        }
    })
}

pub fn registered_user(name: &str) -> Value {
    serde_json::json!({
        "name": name,
        "url": format!("https://www.last.fm/user/{name}"),
        "country": "United Kingdom",
        "playlists": "0",
        "playcount": "150316",
        "image": image_list("https://lastfm.freetls.fastly.net/i/u"),
        "registered": {"unixtime": "1037793040", "#text": 1037793040},
        "realname": "Richard Jones ",
        "subscriber": "1",
        "bootstrap": "0",
        "type": "alum"
    })
}
