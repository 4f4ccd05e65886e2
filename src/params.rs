//! Request parameters.
//!
//! Each operation takes a parameter struct that flattens into the string map
//! sent on the wire. `method`, `api_key` and `format` are added by the
//! client and never appear here.

use crate::collection::DateRange;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Flat `name -> value` map of request parameters.
pub type ParamMap = BTreeMap<&'static str, String>;

/// Implemented by every parameter struct.
pub trait Params {
    fn to_params(&self) -> ParamMap;
}

fn put(map: &mut ParamMap, key: &'static str, value: Option<impl ToString>) {
    if let Some(value) = value {
        map.insert(key, value.to_string());
    }
}

fn put_flag(map: &mut ParamMap, key: &'static str, enabled: bool) {
    if enabled {
        map.insert(key, "1".to_string());
    }
}

/// Time window of `user.getTop*` charts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[default]
    Overall,
    SevenDays,
    OneMonth,
    ThreeMonths,
    SixMonths,
    TwelveMonths,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Overall => "overall",
            Period::SevenDays => "7day",
            Period::OneMonth => "1month",
            Period::ThreeMonths => "3month",
            Period::SixMonths => "6month",
            Period::TwelveMonths => "12month",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overall" => Ok(Period::Overall),
            "7day" => Ok(Period::SevenDays),
            "1month" => Ok(Period::OneMonth),
            "3month" => Ok(Period::ThreeMonths),
            "6month" => Ok(Period::SixMonths),
            "12month" => Ok(Period::TwelveMonths),
            other => Err(format!(
                "unknown period '{other}', expected one of overall, 7day, 1month, 3month, 6month, 12month"
            )),
        }
    }
}

// ================================================================================================
// ARTIST
// ================================================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistInfoParams {
    pub artist: Option<String>,
    pub mbid: Option<String>,
    pub autocorrect: bool,
    /// Adds the user's playcount to the stats
    pub username: Option<String>,
    /// ISO 639 alpha-2 code for the biography
    pub lang: Option<String>,
}

impl ArtistInfoParams {
    pub fn new(artist: impl Into<String>) -> Self {
        Self {
            artist: Some(artist.into()),
            ..Default::default()
        }
    }

    pub fn by_mbid(mbid: impl Into<String>) -> Self {
        Self {
            mbid: Some(mbid.into()),
            ..Default::default()
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn with_autocorrect(mut self, autocorrect: bool) -> Self {
        self.autocorrect = autocorrect;
        self
    }
}

impl Params for ArtistInfoParams {
    fn to_params(&self) -> ParamMap {
        let mut map = ParamMap::new();
        put(&mut map, "artist", self.artist.as_ref());
        put(&mut map, "mbid", self.mbid.as_ref());
        put_flag(&mut map, "autocorrect", self.autocorrect);
        put(&mut map, "username", self.username.as_ref());
        put(&mut map, "lang", self.lang.as_ref());
        map
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistSimilarParams {
    pub artist: Option<String>,
    pub mbid: Option<String>,
    pub autocorrect: bool,
    pub limit: Option<u32>,
}

impl ArtistSimilarParams {
    pub fn new(artist: impl Into<String>) -> Self {
        Self {
            artist: Some(artist.into()),
            ..Default::default()
        }
    }

    pub fn by_mbid(mbid: impl Into<String>) -> Self {
        Self {
            mbid: Some(mbid.into()),
            ..Default::default()
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_autocorrect(mut self, autocorrect: bool) -> Self {
        self.autocorrect = autocorrect;
        self
    }
}

impl Params for ArtistSimilarParams {
    fn to_params(&self) -> ParamMap {
        let mut map = ParamMap::new();
        put(&mut map, "artist", self.artist.as_ref());
        put(&mut map, "mbid", self.mbid.as_ref());
        put_flag(&mut map, "autocorrect", self.autocorrect);
        put(&mut map, "limit", self.limit);
        map
    }
}

/// Parameters of `artist.getTopTracks` and `artist.getTopAlbums`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistTopParams {
    pub artist: Option<String>,
    pub mbid: Option<String>,
    pub autocorrect: bool,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ArtistTopParams {
    pub fn new(artist: impl Into<String>) -> Self {
        Self {
            artist: Some(artist.into()),
            ..Default::default()
        }
    }

    pub fn by_mbid(mbid: impl Into<String>) -> Self {
        Self {
            mbid: Some(mbid.into()),
            ..Default::default()
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_autocorrect(mut self, autocorrect: bool) -> Self {
        self.autocorrect = autocorrect;
        self
    }
}

impl Params for ArtistTopParams {
    fn to_params(&self) -> ParamMap {
        let mut map = ParamMap::new();
        put(&mut map, "artist", self.artist.as_ref());
        put(&mut map, "mbid", self.mbid.as_ref());
        put_flag(&mut map, "autocorrect", self.autocorrect);
        put(&mut map, "page", self.page);
        put(&mut map, "limit", self.limit);
        map
    }
}

// ================================================================================================
// SEARCH
// ================================================================================================

/// Parameters of the `*.search` methods.
///
/// The query is sent under the searched entity's name (`artist`, `album` or
/// `track`), so the client supplies that key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub query: String,
    /// Narrows `track.search` to one artist
    pub artist: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl SearchParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub(crate) fn to_search_params(&self, query_key: &'static str) -> ParamMap {
        let mut map = ParamMap::new();
        map.insert(query_key, self.query.clone());
        if query_key != "artist" {
            put(&mut map, "artist", self.artist.as_ref());
        }
        put(&mut map, "page", self.page);
        put(&mut map, "limit", self.limit);
        map
    }
}

// ================================================================================================
// ALBUM / TRACK
// ================================================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlbumInfoParams {
    pub artist: Option<String>,
    pub album: Option<String>,
    pub mbid: Option<String>,
    pub autocorrect: bool,
    /// Adds `userplaycount` to the response
    pub username: Option<String>,
    pub lang: Option<String>,
}

impl AlbumInfoParams {
    pub fn new(artist: impl Into<String>, album: impl Into<String>) -> Self {
        Self {
            artist: Some(artist.into()),
            album: Some(album.into()),
            ..Default::default()
        }
    }

    pub fn by_mbid(mbid: impl Into<String>) -> Self {
        Self {
            mbid: Some(mbid.into()),
            ..Default::default()
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn with_autocorrect(mut self, autocorrect: bool) -> Self {
        self.autocorrect = autocorrect;
        self
    }
}

impl Params for AlbumInfoParams {
    fn to_params(&self) -> ParamMap {
        let mut map = ParamMap::new();
        put(&mut map, "artist", self.artist.as_ref());
        put(&mut map, "album", self.album.as_ref());
        put(&mut map, "mbid", self.mbid.as_ref());
        put_flag(&mut map, "autocorrect", self.autocorrect);
        put(&mut map, "username", self.username.as_ref());
        put(&mut map, "lang", self.lang.as_ref());
        map
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackInfoParams {
    pub artist: Option<String>,
    pub track: Option<String>,
    pub mbid: Option<String>,
    pub autocorrect: bool,
    /// Adds `userplaycount` and `userloved` to the response
    pub username: Option<String>,
}

impl TrackInfoParams {
    pub fn new(artist: impl Into<String>, track: impl Into<String>) -> Self {
        Self {
            artist: Some(artist.into()),
            track: Some(track.into()),
            ..Default::default()
        }
    }

    pub fn by_mbid(mbid: impl Into<String>) -> Self {
        Self {
            mbid: Some(mbid.into()),
            ..Default::default()
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_autocorrect(mut self, autocorrect: bool) -> Self {
        self.autocorrect = autocorrect;
        self
    }
}

impl Params for TrackInfoParams {
    fn to_params(&self) -> ParamMap {
        let mut map = ParamMap::new();
        put(&mut map, "artist", self.artist.as_ref());
        put(&mut map, "track", self.track.as_ref());
        put(&mut map, "mbid", self.mbid.as_ref());
        put_flag(&mut map, "autocorrect", self.autocorrect);
        put(&mut map, "username", self.username.as_ref());
        map
    }
}

// ================================================================================================
// GEO / TAG
// ================================================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeoParams {
    /// ISO 3166-1 country name
    pub country: String,
    /// Metro area within the country (tracks only)
    pub location: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl GeoParams {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            ..Default::default()
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl Params for GeoParams {
    fn to_params(&self) -> ParamMap {
        let mut map = ParamMap::new();
        map.insert("country", self.country.clone());
        put(&mut map, "location", self.location.as_ref());
        put(&mut map, "page", self.page);
        put(&mut map, "limit", self.limit);
        map
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagParams {
    pub tag: String,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl TagParams {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl Params for TagParams {
    fn to_params(&self) -> ParamMap {
        let mut map = ParamMap::new();
        map.insert("tag", self.tag.clone());
        put(&mut map, "page", self.page);
        put(&mut map, "limit", self.limit);
        map
    }
}

// ================================================================================================
// USER
// ================================================================================================

/// Parameters of `user.getRecentTracks`. `from`/`to` are UNIX seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentTracksParams {
    pub user: String,
    pub from: Option<u64>,
    pub to: Option<u64>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl RecentTracksParams {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            ..Default::default()
        }
    }

    pub fn with_range(mut self, from: u64, to: u64) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl Params for RecentTracksParams {
    fn to_params(&self) -> ParamMap {
        let mut map = ParamMap::new();
        map.insert("user", self.user.clone());
        put(&mut map, "from", self.from);
        put(&mut map, "to", self.to);
        put(&mut map, "page", self.page);
        put(&mut map, "limit", self.limit);
        map
    }
}

/// Parameters of `user.getTopTracks`, `user.getTopArtists` and `user.getTopAlbums`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserTopParams {
    pub user: String,
    pub period: Option<Period>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl UserTopParams {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            ..Default::default()
        }
    }

    pub fn with_period(mut self, period: Period) -> Self {
        self.period = Some(period);
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl Params for UserTopParams {
    fn to_params(&self) -> ParamMap {
        let mut map = ParamMap::new();
        map.insert("user", self.user.clone());
        put(&mut map, "period", self.period);
        put(&mut map, "page", self.page);
        put(&mut map, "limit", self.limit);
        map
    }
}

/// Parameters of paged user listings (`user.getLovedTracks`, `user.getFriends`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPageParams {
    pub user: String,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl UserPageParams {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            ..Default::default()
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl Params for UserPageParams {
    fn to_params(&self) -> ParamMap {
        let mut map = ParamMap::new();
        map.insert("user", self.user.clone());
        put(&mut map, "page", self.page);
        put(&mut map, "limit", self.limit);
        map
    }
}

/// Parameters of the `user.getWeekly*Chart` methods.
///
/// Without a range Last.fm returns the most recent week.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyChartParams {
    pub user: String,
    pub range: Option<DateRange>,
}

impl WeeklyChartParams {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            range: None,
        }
    }

    pub fn with_range(mut self, range: DateRange) -> Self {
        self.range = Some(range);
        self
    }
}

impl Params for WeeklyChartParams {
    fn to_params(&self) -> ParamMap {
        let mut map = ParamMap::new();
        map.insert("user", self.user.clone());
        if let Some(range) = self.range {
            map.insert("from", range.from.to_string());
            map.insert("to", range.to.to_string());
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_round_trip_through_str() {
        for period in [
            Period::Overall,
            Period::SevenDays,
            Period::OneMonth,
            Period::ThreeMonths,
            Period::SixMonths,
            Period::TwelveMonths,
        ] {
            assert_eq!(period.as_str().parse::<Period>(), Ok(period));
        }
        assert!("fortnight".parse::<Period>().is_err());
    }

    #[test]
    fn test_unset_options_are_omitted() {
        let map = ArtistTopParams::new("Cafe Tacvba").to_params();
        assert_eq!(map.len(), 1);
        assert_eq!(map["artist"], "Cafe Tacvba");
    }

    #[test]
    fn test_album_info_by_mbid_with_user() {
        let map = AlbumInfoParams::by_mbid("some-mbid")
            .with_username("pepito")
            .with_autocorrect(true)
            .to_params();

        assert_eq!(map.get("mbid").map(String::as_str), Some("some-mbid"));
        assert_eq!(map.get("username").map(String::as_str), Some("pepito"));
        assert_eq!(map.get("autocorrect").map(String::as_str), Some("1"));
        assert!(!map.contains_key("artist"));
        assert!(!map.contains_key("album"));
    }

    #[test]
    fn test_search_query_key() {
        let params = SearchParams::new("Believe").with_artist("Cher").with_limit(5);

        let track = params.to_search_params("track");
        assert_eq!(track["track"], "Believe");
        assert_eq!(track["artist"], "Cher");
        assert_eq!(track["limit"], "5");

        let artist = params.to_search_params("artist");
        assert_eq!(artist["artist"], "Believe");
    }

    #[test]
    fn test_user_top_period() {
        let map = UserTopParams::new("rj")
            .with_period(Period::ThreeMonths)
            .with_page(2)
            .to_params();
        assert_eq!(map["period"], "3month");
        assert_eq!(map["page"], "2");
    }

    #[test]
    fn test_weekly_chart_range() {
        let map = WeeklyChartParams::new("rj")
            .with_range(DateRange {
                from: 1_108_296_000,
                to: 1_108_900_800,
            })
            .to_params();
        assert_eq!(map["from"], "1108296000");
        assert_eq!(map["to"], "1108900800");
    }
}
