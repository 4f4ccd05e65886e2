use crate::client::LastFmClient;
use crate::params::RecentTracksParams;
use crate::types::RecentTrack;
use crate::Result;

use async_trait::async_trait;
use futures::Stream;
use std::collections::VecDeque;

/// Async iterator trait for paginated Last.fm data.
///
/// Implementors fetch one page at a time and hand out its items in order,
/// requesting the next page only once the current one is drained.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait(?Send)]
pub trait AsyncPaginatedIterator<T> {
    /// Fetch the next item from the iterator.
    ///
    /// - `Ok(Some(item))` - Next item in the sequence
    /// - `Ok(None)` - No more items available
    /// - `Err(...)` - The page request failed
    async fn next(&mut self) -> Result<Option<T>>;

    /// Collect all remaining items into a Vec.
    ///
    /// **Warning**: This fetches every remaining page, which can be thousands
    /// of requests for a long scrobble history. Prefer [`take`](Self::take).
    async fn collect_all(&mut self) -> Result<Vec<T>> {
        let mut items = Vec::new();
        while let Some(item) = self.next().await? {
            items.push(item);
        }
        Ok(items)
    }

    /// Take up to n items from the iterator.
    async fn take(&mut self, n: usize) -> Result<Vec<T>> {
        let mut items = Vec::new();
        for _ in 0..n {
            match self.next().await? {
                Some(item) => items.push(item),
                None => break,
            }
        }
        Ok(items)
    }

    /// Page number of the most recently fetched page (0 before the first fetch).
    fn current_page(&self) -> u32;

    /// Total number of pages, once a page has been fetched.
    fn total_pages(&self) -> Option<u32> {
        None
    }
}

/// Iterator over a user's scrobbles via `user.getRecentTracks`, newest first.
///
/// Iteration ends after the last page reported by the pagination metadata.
/// The now-playing entry, which has no date, is skipped unless
/// [`include_now_playing`](Self::include_now_playing) is set.
///
/// ```rust,no_run
/// use lastfm_api::{AsyncPaginatedIterator, LastFmClient, RecentTracksParams};
///
/// # fn example(client: LastFmClient) -> lastfm_api::Result<()> {
/// # tokio_test::block_on(async {
/// let mut scrobbles = client.recent_tracks(RecentTracksParams::new("rj"));
/// for track in scrobbles.take(20).await? {
///     println!("{track}");
/// }
/// # Ok(())
/// # })
/// # }
/// ```
pub struct RecentTracksIterator {
    client: LastFmClient,
    params: RecentTracksParams,
    next_page: u32,
    fetched_page: u32,
    total_pages: Option<u32>,
    has_more: bool,
    buffer: VecDeque<RecentTrack>,
    include_now_playing: bool,
    stop_at_timestamp: Option<i64>,
}

impl RecentTracksIterator {
    /// Usually created through [`LastFmClient::recent_tracks`].
    ///
    /// Starts at `params.page`, or page 1.
    pub fn new(client: LastFmClient, params: RecentTracksParams) -> Self {
        let next_page = params.page.unwrap_or(1).max(1);
        Self {
            client,
            params,
            next_page,
            fetched_page: 0,
            total_pages: None,
            has_more: true,
            buffer: VecDeque::new(),
            include_now_playing: false,
            stop_at_timestamp: None,
        }
    }

    pub fn include_now_playing(mut self, include: bool) -> Self {
        self.include_now_playing = include;
        self
    }

    /// Stop once a scrobble at or before `timestamp` (UNIX seconds) is reached.
    pub fn with_stop_timestamp(mut self, timestamp: i64) -> Self {
        self.stop_at_timestamp = Some(timestamp);
        self
    }

    /// Adapt this iterator into a [`Stream`].
    pub fn into_stream(self) -> impl Stream<Item = Result<RecentTrack>> {
        futures::stream::unfold(Some(self), |state| async move {
            let mut iter = state?;
            match iter.next().await {
                Ok(Some(track)) => Some((Ok(track), Some(iter))),
                Ok(None) => None,
                Err(e) => Some((Err(e), None)),
            }
        })
    }

    async fn fetch_page(&mut self) -> Result<()> {
        let mut params = self.params.clone();
        params.page = Some(self.next_page);

        let page = self.client.user_recent_tracks(&params).await?;
        log::debug!(
            "Fetched recent tracks page {}/{} for {} ({} items)",
            page.pagination.page,
            page.pagination.total_pages,
            self.params.user,
            page.len()
        );

        self.fetched_page = page.pagination.page;
        self.total_pages = Some(page.pagination.total_pages);
        self.has_more = page.has_next_page() && !page.is_empty();
        self.next_page = page.pagination.page.max(self.next_page).saturating_add(1);

        for track in page.items {
            if track.now_playing && !self.include_now_playing {
                continue;
            }
            if let (Some(stop), Some(date)) = (self.stop_at_timestamp, track.date) {
                if date.timestamp() <= stop {
                    self.has_more = false;
                    break;
                }
            }
            self.buffer.push_back(track);
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl AsyncPaginatedIterator<RecentTrack> for RecentTracksIterator {
    async fn next(&mut self) -> Result<Option<RecentTrack>> {
        while self.buffer.is_empty() {
            if !self.has_more {
                return Ok(None);
            }
            self.fetch_page().await?;
        }
        Ok(self.buffer.pop_front())
    }

    fn current_page(&self) -> u32 {
        self.fetched_page
    }

    fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }
}
