//! Typed client for the Last.fm web API.
//!
//! Responses are decoded strictly: Last.fm sends numbers and flags as strings,
//! and a payload that does not match the expected shape is reported as
//! [`LastFmError::Malformed`] naming the offending field, never as a
//! partially-filled record. Failures reported by Last.fm itself surface as
//! [`LastFmError::Service`] with a classified [`ServiceErrorKind`].

pub mod client;
pub mod collection;
pub mod config;
pub mod date;
pub mod decode;
pub mod error;
pub mod events;
pub mod image;
pub mod iterator;
pub mod params;
pub mod requester;
pub mod response;
pub mod types;

pub use client::LastFmClient;
pub use collection::{
    CollectionList, CollectionPage, DateRange, Pagination, SearchPagination, SearchResults,
};
pub use config::ClientConfig;
pub use decode::{Decode, JsonObject};
pub use error::{DecodeError, LastFmError, ServiceErrorKind};
pub use events::{
    ClientEvent, ClientEventReceiver, ClientEventWatcher, RequestInfo, SharedEventBroadcaster,
};
pub use image::ImageSet;
pub use iterator::{AsyncPaginatedIterator, RecentTracksIterator};
pub use params::{
    AlbumInfoParams, ArtistInfoParams, ArtistSimilarParams, ArtistTopParams, GeoParams, ParamMap,
    Params, Period, RecentTracksParams, SearchParams, TagParams, TrackInfoParams, UserPageParams,
    UserTopParams, WeeklyChartParams,
};
pub use requester::{Headers, HttpRequester, RawResponse, Requester};
pub use types::{
    Album, AlbumInfo, AlbumRef, AlbumTrack, Artist, ArtistInfo, ArtistRef, ArtistStats,
    ExtendedRecentTrack, LovedTrack, RecentTrack, SearchTrack, Tag, TopTrack, TrackAlbum,
    TrackInfo, TrackStreamable, UserInfo, UserPublicInfo, WeeklyChartAlbum, WeeklyChartArtist,
    WeeklyChartTrack, Wiki,
};

#[cfg(feature = "mock")]
pub use iterator::MockAsyncPaginatedIterator;
#[cfg(feature = "mock")]
pub use requester::MockRequester;

pub type Result<T> = std::result::Result<T, LastFmError>;
