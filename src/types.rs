//! Data types for Last.fm music metadata.
//!
//! Every record here is built only by decoding an API response and is never
//! mutated afterwards. Entities of the same family (the track variants, for
//! example) share field names but differ in which optional fields are
//! populated, depending on the API method that produced them.

use crate::decode::{Decode, DecodeResult, JsonObject};
use crate::date::decode_text_date;
use crate::error::DecodeError;
use crate::image::ImageSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// ================================================================================================
// SHARED FIELD DECODERS
// ================================================================================================

/// `@attr.rank`, which Last.fm nests one level down on ranked entries.
fn attr_rank(obj: &JsonObject<'_>) -> DecodeResult<u32> {
    obj.object("@attr")?.uint("rank")
}

fn opt_attr_rank(obj: &JsonObject<'_>) -> DecodeResult<Option<u32>> {
    match obj.opt_object("@attr")? {
        Some(attr) => attr.opt_uint("rank"),
        None => Ok(None),
    }
}

/// Recent tracks flag the track being played right now with
/// `"@attr": {"nowplaying": "true"}`.
fn now_playing(obj: &JsonObject<'_>) -> DecodeResult<bool> {
    let attr = match obj.opt_object("@attr")? {
        Some(attr) => attr,
        None => return Ok(false),
    };
    match attr.opt_str("nowplaying")? {
        None | Some("false") => Ok(false),
        Some("true") => Ok(true),
        Some(other) => Err(DecodeError::malformed(
            attr.field_path("nowplaying"),
            other,
            "\"true\" or \"false\"",
        )),
    }
}

/// A `{"tag": [...]}` block. Last.fm sends `""` when there are no tags.
fn tag_list(obj: &JsonObject<'_>, key: &str) -> DecodeResult<Vec<Tag>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(Vec::new()),
        Some(_) => obj.object(key)?.decode_many_or_empty("tag"),
    }
}

// ================================================================================================
// STREAMABLE
// ================================================================================================

/// Streamability of a track.
///
/// Most entities send a plain `"0"`/`"1"` flag. Track families also send an
/// object `{"#text": "0", "fulltrack": "0"}`, where `fulltrack` marks the
/// full-length variant of a streamable track; it is ignored when `#text` is
/// `"0"`. Both shapes decode into this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackStreamable {
    NotStreamable,
    Streamable,
    FullTrack,
}

impl TrackStreamable {
    pub fn is_streamable(&self) -> bool {
        !matches!(self, TrackStreamable::NotStreamable)
    }

    pub(crate) fn decode_field(obj: &JsonObject<'_>, key: &str) -> DecodeResult<Self> {
        if let Some(rich) = obj.opt_object(key).ok().flatten() {
            let streamable = rich.flag("#text")?;
            let full_track = rich.opt_flag("fulltrack")?.unwrap_or(false);
            return Ok(match (streamable, full_track) {
                (true, true) => TrackStreamable::FullTrack,
                (true, false) => TrackStreamable::Streamable,
                (false, _) => TrackStreamable::NotStreamable,
            });
        }

        Ok(if obj.flag(key)? {
            TrackStreamable::Streamable
        } else {
            TrackStreamable::NotStreamable
        })
    }
}

impl From<bool> for TrackStreamable {
    fn from(streamable: bool) -> Self {
        if streamable {
            TrackStreamable::Streamable
        } else {
            TrackStreamable::NotStreamable
        }
    }
}

// ================================================================================================
// REFERENCES
// ================================================================================================

/// Artist reference embedded in tracks and albums.
///
/// Only identifies the artist. Last.fm uses three shapes for it: a bare name
/// string, `{"#text": name, "mbid": ...}` and `{"name": ..., "mbid": ..., "url": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtistRef {
    pub mbid: String,
    pub name: String,
    pub url: Option<String>,
}

impl ArtistRef {
    pub(crate) fn decode_field(obj: &JsonObject<'_>, key: &str) -> DecodeResult<Self> {
        match obj.get(key) {
            Some(Value::String(name)) => Ok(ArtistRef {
                mbid: String::new(),
                name: name.clone(),
                url: None,
            }),
            _ => obj.decode(key),
        }
    }
}

impl Decode for ArtistRef {
    fn decode(obj: &JsonObject<'_>) -> DecodeResult<Self> {
        let name = match obj.opt_str("name")? {
            Some(name) => name.to_string(),
            None => obj.string("#text")?,
        };
        Ok(ArtistRef {
            mbid: obj.string_or_empty("mbid")?,
            name,
            url: obj.opt_string("url")?,
        })
    }
}

/// Album reference embedded in recent tracks: `{"#text": name, "mbid": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlbumRef {
    pub mbid: String,
    pub name: String,
}

impl Decode for AlbumRef {
    fn decode(obj: &JsonObject<'_>) -> DecodeResult<Self> {
        let name = match obj.opt_str("#text")? {
            Some(name) => name.to_string(),
            None => obj.string("name")?,
        };
        Ok(AlbumRef {
            mbid: obj.string_or_empty("mbid")?,
            name,
        })
    }
}

// ================================================================================================
// TAGS AND WIKI
// ================================================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub url: String,
    /// Tag weight, only sent by top-tag listings
    pub count: Option<u64>,
}

impl Decode for Tag {
    fn decode(obj: &JsonObject<'_>) -> DecodeResult<Self> {
        Ok(Tag {
            name: obj.string("name")?,
            url: obj.string_or_empty("url")?,
            count: obj.opt_u64("count")?,
        })
    }
}

/// Wiki/biography text attached to albums, tracks and artists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wiki {
    pub published: Option<DateTime<Utc>>,
    pub summary: String,
    pub content: String,
}

impl Decode for Wiki {
    fn decode(obj: &JsonObject<'_>) -> DecodeResult<Self> {
        Ok(Wiki {
            published: decode_text_date(obj, "published")?,
            summary: obj.string_or_empty("summary")?,
            content: obj.string_or_empty("content")?,
        })
    }
}

// ================================================================================================
// ARTISTS
// ================================================================================================

/// An artist as listed by top-artist, similar-artist and search methods.
///
/// Which of the optional fields are set depends on the method: `listeners`
/// for geo and search results, `playcount` and `rank` for top charts,
/// `match_score` for similar artists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
    pub mbid: String,
    pub url: String,
    pub images: ImageSet,
    pub streamable: Option<bool>,
    pub listeners: Option<u64>,
    pub playcount: Option<u64>,
    pub rank: Option<u32>,
    /// Similarity in `0.0..=1.0`
    pub match_score: Option<f64>,
}

impl Decode for Artist {
    fn decode(obj: &JsonObject<'_>) -> DecodeResult<Self> {
        Ok(Artist {
            name: obj.string("name")?,
            mbid: obj.string_or_empty("mbid")?,
            url: obj.string("url")?,
            images: obj.images("image")?,
            streamable: obj.opt_flag("streamable")?,
            listeners: obj.opt_u64("listeners")?,
            playcount: obj.opt_u64("playcount")?,
            rank: opt_attr_rank(obj)?,
            match_score: obj.opt_float("match")?,
        })
    }
}

impl fmt::Display for Artist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtistStats {
    pub listeners: u64,
    pub playcount: u64,
    /// Only present when the request named a user
    pub user_playcount: Option<u64>,
}

impl Decode for ArtistStats {
    fn decode(obj: &JsonObject<'_>) -> DecodeResult<Self> {
        Ok(ArtistStats {
            listeners: obj.u64("listeners")?,
            playcount: obj.u64("playcount")?,
            user_playcount: obj.opt_u64("userplaycount")?,
        })
    }
}

/// Full artist record from `artist.getInfo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistInfo {
    pub name: String,
    pub mbid: String,
    pub url: String,
    pub images: ImageSet,
    pub streamable: bool,
    pub on_tour: bool,
    pub stats: ArtistStats,
    pub similar: Vec<Artist>,
    pub tags: Vec<Tag>,
    pub bio: Option<Wiki>,
}

impl Decode for ArtistInfo {
    fn decode(obj: &JsonObject<'_>) -> DecodeResult<Self> {
        let similar = match obj.opt_object("similar")? {
            Some(similar) => similar.decode_many_or_empty("artist")?,
            None => Vec::new(),
        };

        Ok(ArtistInfo {
            name: obj.string("name")?,
            mbid: obj.string_or_empty("mbid")?,
            url: obj.string("url")?,
            images: obj.images("image")?,
            streamable: obj.flag("streamable")?,
            on_tour: obj.opt_flag("ontour")?.unwrap_or(false),
            stats: obj.decode("stats")?,
            similar,
            tags: tag_list(obj, "tags")?,
            bio: obj.opt_decode("bio")?,
        })
    }
}

// ================================================================================================
// ALBUMS
// ================================================================================================

/// An album as listed by top-album and search methods.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Album {
    pub name: String,
    pub mbid: String,
    pub url: String,
    pub artist: ArtistRef,
    pub images: ImageSet,
    pub playcount: Option<u64>,
    pub listeners: Option<u64>,
    pub rank: Option<u32>,
}

impl Decode for Album {
    fn decode(obj: &JsonObject<'_>) -> DecodeResult<Self> {
        Ok(Album {
            name: obj.string("name")?,
            mbid: obj.string_or_empty("mbid")?,
            url: obj.string("url")?,
            artist: ArtistRef::decode_field(obj, "artist")?,
            images: obj.images("image")?,
            playcount: obj.opt_u64("playcount")?,
            listeners: obj.opt_u64("listeners")?,
            rank: opt_attr_rank(obj)?,
        })
    }
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.artist.name, self.name)
    }
}

/// A track listed inside `album.getInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlbumTrack {
    pub name: String,
    pub url: String,
    /// Seconds; Last.fm sends `null` for unknown lengths
    pub duration: Option<u32>,
    pub track_number: u32,
    pub streamable: TrackStreamable,
    pub artist: ArtistRef,
}

impl Decode for AlbumTrack {
    fn decode(obj: &JsonObject<'_>) -> DecodeResult<Self> {
        Ok(AlbumTrack {
            name: obj.string("name")?,
            url: obj.string("url")?,
            duration: obj.opt_uint("duration")?,
            track_number: attr_rank(obj)?,
            streamable: TrackStreamable::decode_field(obj, "streamable")?,
            artist: ArtistRef::decode_field(obj, "artist")?,
        })
    }
}

/// Full album record from `album.getInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumInfo {
    pub name: String,
    pub artist: String,
    pub mbid: String,
    pub url: String,
    pub images: ImageSet,
    pub listeners: u64,
    pub playcount: u64,
    /// Only present when the request named a user
    pub user_playcount: Option<u64>,
    pub tags: Vec<Tag>,
    pub tracks: Vec<AlbumTrack>,
    pub wiki: Option<Wiki>,
}

impl Decode for AlbumInfo {
    fn decode(obj: &JsonObject<'_>) -> DecodeResult<Self> {
        let tracks = match obj.opt_object("tracks")? {
            Some(tracks) => tracks.decode_many_or_empty("track")?,
            None => Vec::new(),
        };

        Ok(AlbumInfo {
            name: obj.string("name")?,
            artist: obj.string("artist")?,
            mbid: obj.string_or_empty("mbid")?,
            url: obj.string("url")?,
            images: obj.images("image")?,
            listeners: obj.u64("listeners")?,
            playcount: obj.u64("playcount")?,
            user_playcount: obj.opt_u64("userplaycount")?,
            tags: tag_list(obj, "tags")?,
            tracks,
            wiki: obj.opt_decode("wiki")?,
        })
    }
}

// ================================================================================================
// TRACKS
// ================================================================================================

/// A ranked track from the `getTopTracks` family (artist, user, geo, tag).
///
/// `artist` and `url` are absent from some trimmed listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TopTrack {
    pub name: String,
    pub mbid: String,
    pub url: Option<String>,
    pub artist: Option<ArtistRef>,
    pub images: ImageSet,
    /// Seconds
    pub duration: Option<u32>,
    pub rank: u32,
    pub playcount: Option<u64>,
    pub listeners: Option<u64>,
    pub streamable: TrackStreamable,
}

impl Decode for TopTrack {
    fn decode(obj: &JsonObject<'_>) -> DecodeResult<Self> {
        let artist = if obj.contains("artist") {
            Some(ArtistRef::decode_field(obj, "artist")?)
        } else {
            None
        };

        Ok(TopTrack {
            name: obj.string("name")?,
            mbid: obj.string_or_empty("mbid")?,
            url: obj.opt_string("url")?,
            artist,
            images: obj.images("image")?,
            duration: obj.opt_uint("duration")?,
            rank: attr_rank(obj)?,
            playcount: obj.opt_u64("playcount")?,
            listeners: obj.opt_u64("listeners")?,
            streamable: TrackStreamable::decode_field(obj, "streamable")?,
        })
    }
}

impl fmt::Display for TopTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.artist {
            Some(artist) => write!(f, "{}. {} - {}", self.rank, artist.name, self.name),
            None => write!(f, "{}. {}", self.rank, self.name),
        }
    }
}

/// A scrobble from `user.getRecentTracks`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecentTrack {
    pub name: String,
    pub mbid: String,
    pub url: String,
    pub artist: ArtistRef,
    pub album: AlbumRef,
    pub images: ImageSet,
    pub streamable: bool,
    pub now_playing: bool,
    /// `None` for the track currently playing
    pub date: Option<DateTime<Utc>>,
}

impl Decode for RecentTrack {
    fn decode(obj: &JsonObject<'_>) -> DecodeResult<Self> {
        Ok(RecentTrack {
            name: obj.string("name")?,
            mbid: obj.string_or_empty("mbid")?,
            url: obj.string("url")?,
            artist: ArtistRef::decode_field(obj, "artist")?,
            album: obj.decode("album")?,
            images: obj.images("image")?,
            streamable: obj.flag("streamable")?,
            now_playing: now_playing(obj)?,
            date: obj.date("date")?,
        })
    }
}

impl fmt::Display for RecentTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.artist.name, self.name)?;
        if !self.album.name.is_empty() {
            write!(f, " [{}]", self.album.name)?;
        }
        Ok(())
    }
}

/// A scrobble from `user.getRecentTracks` with `extended=1`.
///
/// Adds the artist's images and the user's loved flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtendedRecentTrack {
    pub name: String,
    pub mbid: String,
    pub url: String,
    pub artist: ArtistRef,
    pub artist_images: ImageSet,
    pub album: AlbumRef,
    pub images: ImageSet,
    pub streamable: bool,
    pub now_playing: bool,
    pub loved: bool,
    pub date: Option<DateTime<Utc>>,
}

impl Decode for ExtendedRecentTrack {
    fn decode(obj: &JsonObject<'_>) -> DecodeResult<Self> {
        let artist_obj = obj.object("artist")?;

        Ok(ExtendedRecentTrack {
            name: obj.string("name")?,
            mbid: obj.string_or_empty("mbid")?,
            url: obj.string("url")?,
            artist: ArtistRef::decode(&artist_obj)?,
            artist_images: artist_obj.images("image")?,
            album: obj.decode("album")?,
            images: obj.images("image")?,
            streamable: obj.flag("streamable")?,
            now_playing: now_playing(obj)?,
            loved: obj.flag("loved")?,
            date: obj.date("date")?,
        })
    }
}

/// A track from `user.getLovedTracks`. `date` is when it was loved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LovedTrack {
    pub name: String,
    pub mbid: String,
    pub url: String,
    pub artist: ArtistRef,
    pub images: ImageSet,
    pub date: DateTime<Utc>,
    pub streamable: TrackStreamable,
}

impl Decode for LovedTrack {
    fn decode(obj: &JsonObject<'_>) -> DecodeResult<Self> {
        let date = obj
            .date("date")?
            .ok_or_else(|| DecodeError::missing(obj.field_path("date")))?;

        Ok(LovedTrack {
            name: obj.string("name")?,
            mbid: obj.string_or_empty("mbid")?,
            url: obj.string("url")?,
            artist: ArtistRef::decode_field(obj, "artist")?,
            images: obj.images("image")?,
            date,
            streamable: TrackStreamable::decode_field(obj, "streamable")?,
        })
    }
}

/// Album block inside `track.getInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackAlbum {
    pub title: String,
    pub artist: String,
    pub mbid: String,
    pub url: String,
    pub images: ImageSet,
    /// Position of the track on the album
    pub position: Option<u32>,
}

impl Decode for TrackAlbum {
    fn decode(obj: &JsonObject<'_>) -> DecodeResult<Self> {
        let position = match obj.opt_object("@attr")? {
            Some(attr) => attr.opt_uint("position")?,
            None => None,
        };

        Ok(TrackAlbum {
            title: obj.string("title")?,
            artist: obj.string("artist")?,
            mbid: obj.string_or_empty("mbid")?,
            url: obj.string("url")?,
            images: obj.images("image")?,
            position,
        })
    }
}

/// Full track record from `track.getInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackInfo {
    pub name: String,
    pub mbid: String,
    pub url: String,
    /// Milliseconds, as sent by `track.getInfo`
    pub duration: Option<u64>,
    pub listeners: u64,
    pub playcount: u64,
    pub user_playcount: Option<u64>,
    pub user_loved: Option<bool>,
    pub streamable: TrackStreamable,
    pub artist: ArtistRef,
    pub album: Option<TrackAlbum>,
    pub top_tags: Vec<Tag>,
    pub wiki: Option<Wiki>,
}

impl Decode for TrackInfo {
    fn decode(obj: &JsonObject<'_>) -> DecodeResult<Self> {
        Ok(TrackInfo {
            name: obj.string("name")?,
            mbid: obj.string_or_empty("mbid")?,
            url: obj.string("url")?,
            duration: obj.opt_u64("duration")?,
            listeners: obj.u64("listeners")?,
            playcount: obj.u64("playcount")?,
            user_playcount: obj.opt_u64("userplaycount")?,
            user_loved: obj.opt_flag("userloved")?,
            streamable: TrackStreamable::decode_field(obj, "streamable")?,
            artist: ArtistRef::decode_field(obj, "artist")?,
            album: obj.opt_decode("album")?,
            top_tags: tag_list(obj, "toptags")?,
            wiki: obj.opt_decode("wiki")?,
        })
    }
}

/// A track from `track.search`.
///
/// Search results carry the artist as a bare name and report the singular
/// `listeners` count only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchTrack {
    pub name: String,
    pub mbid: String,
    pub url: String,
    pub artist: ArtistRef,
    pub images: ImageSet,
    pub listeners: u64,
}

impl Decode for SearchTrack {
    fn decode(obj: &JsonObject<'_>) -> DecodeResult<Self> {
        Ok(SearchTrack {
            name: obj.string("name")?,
            mbid: obj.string_or_empty("mbid")?,
            url: obj.string("url")?,
            artist: ArtistRef::decode_field(obj, "artist")?,
            images: obj.images("image")?,
            listeners: obj.u64("listeners")?,
        })
    }
}

// ================================================================================================
// WEEKLY CHARTS
// ================================================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeeklyChartTrack {
    pub name: String,
    pub mbid: String,
    pub url: String,
    pub artist: ArtistRef,
    pub images: ImageSet,
    pub rank: u32,
    pub playcount: u64,
}

impl Decode for WeeklyChartTrack {
    fn decode(obj: &JsonObject<'_>) -> DecodeResult<Self> {
        Ok(WeeklyChartTrack {
            name: obj.string("name")?,
            mbid: obj.string_or_empty("mbid")?,
            url: obj.string("url")?,
            artist: ArtistRef::decode_field(obj, "artist")?,
            images: obj.images("image")?,
            rank: attr_rank(obj)?,
            playcount: obj.u64("playcount")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeeklyChartAlbum {
    pub name: String,
    pub mbid: String,
    pub url: String,
    pub artist: ArtistRef,
    pub rank: u32,
    pub playcount: u64,
}

impl Decode for WeeklyChartAlbum {
    fn decode(obj: &JsonObject<'_>) -> DecodeResult<Self> {
        Ok(WeeklyChartAlbum {
            name: obj.string("name")?,
            mbid: obj.string_or_empty("mbid")?,
            url: obj.string("url")?,
            artist: ArtistRef::decode_field(obj, "artist")?,
            rank: attr_rank(obj)?,
            playcount: obj.u64("playcount")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeeklyChartArtist {
    pub name: String,
    pub mbid: String,
    pub url: String,
    pub rank: u32,
    pub playcount: u64,
}

impl Decode for WeeklyChartArtist {
    fn decode(obj: &JsonObject<'_>) -> DecodeResult<Self> {
        Ok(WeeklyChartArtist {
            name: obj.string("name")?,
            mbid: obj.string_or_empty("mbid")?,
            url: obj.string("url")?,
            rank: attr_rank(obj)?,
            playcount: obj.u64("playcount")?,
        })
    }
}

// ================================================================================================
// USERS
// ================================================================================================

/// Public profile of a user, as listed by `user.getFriends`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserPublicInfo {
    pub name: String,
    pub url: String,
    pub country: String,
    pub playlists: u32,
    pub playcount: u64,
    pub images: ImageSet,
    pub registered: DateTime<Utc>,
    pub realname: String,
    pub subscriber: bool,
    pub bootstrap: bool,
    /// `"user"`, `"subscriber"`, `"staff"`...
    pub user_type: String,
}

impl Decode for UserPublicInfo {
    fn decode(obj: &JsonObject<'_>) -> DecodeResult<Self> {
        let registered = obj
            .date("registered")?
            .ok_or_else(|| DecodeError::missing(obj.field_path("registered")))?;

        Ok(UserPublicInfo {
            name: obj.string("name")?,
            url: obj.string("url")?,
            country: obj.string_or_empty("country")?,
            playlists: obj.uint("playlists")?,
            playcount: obj.u64("playcount")?,
            images: obj.images("image")?,
            registered,
            realname: obj.string_or_empty("realname")?,
            subscriber: obj.flag("subscriber")?,
            bootstrap: obj.flag("bootstrap")?,
            user_type: obj.string("type")?,
        })
    }
}

/// Profile returned by `user.getInfo`, including library counters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(flatten)]
    pub profile: UserPublicInfo,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub artist_count: u64,
    pub track_count: u64,
    pub album_count: u64,
}

impl Decode for UserInfo {
    fn decode(obj: &JsonObject<'_>) -> DecodeResult<Self> {
        Ok(UserInfo {
            profile: UserPublicInfo::decode(obj)?,
            age: obj.opt_uint("age")?,
            gender: obj.opt_string("gender")?,
            artist_count: obj.u64("artist_count")?,
            track_count: obj.u64("track_count")?,
            album_count: obj.u64("album_count")?,
        })
    }
}

// ================================================================================================
// TESTS
// ================================================================================================
