//! Collection envelopes.
//!
//! Every collection response nests its items and metadata under a
//! method-specific wrapper key:
//!
//! ```text
//! {"toptracks": {"track": [...], "@attr": {"page": "1", "perPage": "50", ...}}}
//! {"weeklytrackchart": {"track": [...], "@attr": {"from": "...", "to": "..."}}}
//! {"results": {"opensearch:totalResults": "...", ..., "trackmatches": {"track": [...]}}}
//! ```

use crate::decode::{Decode, DecodeResult, JsonObject};
use crate::error::DecodeError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wrapper key of every search response.
pub const SEARCH_WRAPPER: &str = "results";

/// Keys of a search wrapper that never hold the result items.
pub const RESERVED_SEARCH_KEYS: [&str; 5] = [
    "opensearch:Query",
    "opensearch:totalResults",
    "opensearch:startIndex",
    "opensearch:itemsPerPage",
    "@attr",
];

/// Page metadata of a paged collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    pub total: u32,
    pub total_pages: u32,
}

impl Pagination {
    /// Whether pages after this one exist.
    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }
}

impl Decode for Pagination {
    fn decode(obj: &JsonObject<'_>) -> DecodeResult<Self> {
        Ok(Pagination {
            page: obj.uint("page")?,
            per_page: obj.uint("perPage")?,
            total: obj.uint("total")?,
            total_pages: obj.uint("totalPages")?,
        })
    }
}

/// OpenSearch metadata of a search response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchPagination {
    pub start_page: u32,
    pub total_results: u32,
    pub start_index: u32,
    pub items_per_page: u32,
}

impl Decode for SearchPagination {
    fn decode(obj: &JsonObject<'_>) -> DecodeResult<Self> {
        Ok(SearchPagination {
            start_page: obj.object("opensearch:Query")?.uint("startPage")?,
            total_results: obj.uint("opensearch:totalResults")?,
            start_index: obj.uint("opensearch:startIndex")?,
            items_per_page: obj.uint("opensearch:itemsPerPage")?,
        })
    }
}

/// A UNIX-seconds interval, as used by weekly charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DateRange {
    pub from: u64,
    pub to: u64,
}

impl Decode for DateRange {
    fn decode(obj: &JsonObject<'_>) -> DecodeResult<Self> {
        Ok(DateRange {
            from: obj.u64("from")?,
            to: obj.u64("to")?,
        })
    }
}

/// One page of a paged collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionPage<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> CollectionPage<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_next_page(&self) -> bool {
        self.pagination.has_next_page()
    }
}

/// An unpaged collection, optionally bound to a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionList<T> {
    pub items: Vec<T>,
    pub range: Option<DateRange>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults<T> {
    pub items: Vec<T>,
    pub pagination: SearchPagination,
}

fn container<'a>(value: &'a Value, wrapper: &str) -> DecodeResult<JsonObject<'a>> {
    JsonObject::root(value)?
        .opt_object(wrapper)?
        .ok_or_else(|| DecodeError::MissingContainer(wrapper.to_string()))
}

fn items<T: Decode>(container: &JsonObject<'_>, items_key: &str) -> DecodeResult<Vec<T>> {
    if !container.contains(items_key) {
        return Err(DecodeError::MissingItemsKey(container.field_path(items_key)));
    }
    container.decode_many(items_key)
}

/// Decode a paged collection such as `{"toptracks": {"track": [...], "@attr": {...}}}`.
///
/// Pagination is read from `@attr` when it carries a `page`, otherwise from
/// the wrapper's own fields. The number of items is whatever the array holds,
/// regardless of `perPage`.
pub fn decode_page<T: Decode>(
    value: &Value,
    wrapper: &str,
    items_key: &str,
) -> DecodeResult<CollectionPage<T>> {
    let container = container(value, wrapper)?;

    let pagination = match container.opt_object("@attr")? {
        Some(attr) if attr.contains("page") => Pagination::decode(&attr)?,
        _ => Pagination::decode(&container)?,
    };
    let items = items(&container, items_key)?;

    log::debug!(
        "Decoded {} {} (page {}/{})",
        items.len(),
        wrapper,
        pagination.page,
        pagination.total_pages
    );
    Ok(CollectionPage { items, pagination })
}

/// Decode an unpaged list such as `{"weeklytrackchart": {"track": [...], "@attr": {"from", "to"}}}`.
pub fn decode_list<T: Decode>(
    value: &Value,
    wrapper: &str,
    items_key: &str,
) -> DecodeResult<CollectionList<T>> {
    let container = container(value, wrapper)?;

    let range = match container.opt_object("@attr")? {
        Some(attr) if attr.contains("from") && attr.contains("to") => {
            Some(DateRange::decode(&attr)?)
        }
        _ => None,
    };
    let items = items(&container, items_key)?;

    log::debug!("Decoded {} {}", items.len(), wrapper);
    Ok(CollectionList { items, range })
}

/// The single key of `obj` that is not reserved, or an error when there are
/// none or several.
fn sole_candidate_key<'a>(obj: &JsonObject<'a>) -> DecodeResult<&'a str> {
    let mut candidates: Vec<&str> = obj
        .keys()
        .filter(|key| !RESERVED_SEARCH_KEYS.contains(key))
        .collect();

    match candidates.len() {
        0 => Err(DecodeError::MissingItemsKey(obj.path().to_string())),
        1 => Ok(candidates.remove(0)),
        _ => {
            candidates.sort_unstable();
            Err(DecodeError::AmbiguousItemsKey(
                candidates.into_iter().map(str::to_string).collect(),
            ))
        }
    }
}

/// Decode a search response.
///
/// The items key depends on the searched entity (`trackmatches`,
/// `albummatches`, ...) and is found by elimination: exactly one key besides
/// the OpenSearch metadata must remain. Its value is either the item array
/// itself or an object whose only key holds the array.
pub fn decode_search<T: Decode>(value: &Value) -> DecodeResult<SearchResults<T>> {
    let container = container(value, SEARCH_WRAPPER)?;
    let pagination = SearchPagination::decode(&container)?;

    let matches_key = sole_candidate_key(&container)?;
    let items = match container.get(matches_key) {
        Some(Value::Object(_)) => {
            let matches = container.object(matches_key)?;
            let items_key = sole_candidate_key(&matches)?;
            matches.decode_many(items_key)?
        }
        _ => container.decode_many(matches_key)?,
    };

    log::debug!(
        "Decoded {} search results under {} ({} total)",
        items.len(),
        matches_key,
        pagination.total_results
    );
    Ok(SearchResults { items, pagination })
}
