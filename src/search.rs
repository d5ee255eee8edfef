//! Query building and pagination.

use serde::de::DeserializeOwned;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use url::Url;

use crate::envelope::ResultEnvelope;
use crate::error::{ElasticError, Result};
use crate::types::{Elapsed, Hit, SearchResponse};

/// Page size used when the caller does not pass one.
///
/// Deliberately 1: a bare search returns a single hit per page.
pub const DEFAULT_PAGE_SIZE: u32 = 1;

/// Query-string key the current page is read from
pub const PAGE_PARAM: &str = "page";

/// Search parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOptions {
    pub query: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl SearchOptions {
    /// Create a new SearchOptions with a filter clause
    pub fn new(query: Value) -> Self {
        Self { query, size: None }
    }

    /// Set the page size
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Effective page size
    pub fn size(&self) -> u32 {
        self.size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

/// 1-based page number taken from the caller's request context.
///
/// Anything missing, unparsable or below 1 resolves to page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CurrentPage(u64);

impl CurrentPage {
    pub fn new(page: u64) -> Self {
        Self(page.max(1))
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Read `page` out of a raw query string such as `q=disk&page=3`
    pub fn from_query(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        Self::from_pairs(url::form_urlencoded::parse(query.as_bytes()))
    }

    /// Read `page` out of a request URL
    pub fn from_url(url: &Url) -> Self {
        Self::from_pairs(url.query_pairs())
    }

    fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (std::borrow::Cow<'a, str>, std::borrow::Cow<'a, str>)>,
    {
        pairs
            .into_iter()
            .find(|(key, _)| key == PAGE_PARAM)
            .and_then(|(_, value)| value.trim().parse::<u64>().ok())
            .map(Self::new)
            .unwrap_or_default()
    }
}

impl Default for CurrentPage {
    fn default() -> Self {
        Self(1)
    }
}

impl From<u64> for CurrentPage {
    fn from(page: u64) -> Self {
        Self::new(page)
    }
}

/// Body POSTed to `_search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryBody {
    pub query: Value,
    pub from: u64,
    pub size: u32,
}

impl QueryBody {
    /// Build the body for `page`, with `from = (page - 1) * size`
    pub fn for_page(query: Value, size: u32, page: CurrentPage) -> Result<Self> {
        if size == 0 {
            return Err(ElasticError::invalid("page size must be at least 1"));
        }

        let from = (page.get() - 1)
            .checked_mul(u64::from(size))
            .ok_or_else(|| {
                ElasticError::invalid(format!(
                    "page {} with size {size} overflows the result offset",
                    page.get()
                ))
            })?;

        Ok(Self { query, from, size })
    }
}

/// One page of search results plus what a length-aware pager needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    items: Vec<T>,
    total: u64,
    per_page: u32,
    current_page: u64,
    took: Option<u64>,
    elapsed: Option<Elapsed>,
}

impl<T> Page<T> {
    /// Create a page. `per_page` of 0 is treated as 1.
    pub fn new(items: Vec<T>, total: u64, per_page: u32, current_page: CurrentPage) -> Self {
        Self {
            items,
            total,
            per_page: per_page.max(1),
            current_page: current_page.get(),
            took: None,
            elapsed: None,
        }
    }

    pub(crate) fn with_took(mut self, took: Option<u64>) -> Self {
        self.took = took;
        self
    }

    pub(crate) fn with_elapsed(mut self, elapsed: Elapsed) -> Self {
        self.elapsed = Some(elapsed);
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Total matches across all pages
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Engine-side processing time in milliseconds
    pub fn took(&self) -> Option<u64> {
        self.took
    }

    /// Client-side wall time of the search
    pub fn elapsed(&self) -> Option<&Elapsed> {
        self.elapsed.as_ref()
    }

    /// Number of the last page; never below 1
    pub fn last_page(&self) -> u64 {
        let per_page = u64::from(self.per_page);
        let pages = self.total / per_page + u64::from(self.total % per_page != 0);
        pages.max(1)
    }

    pub fn has_more_pages(&self) -> bool {
        self.current_page < self.last_page()
    }

    pub fn on_first_page(&self) -> bool {
        self.current_page <= 1
    }

    /// 1-based position of the first item on this page
    pub fn first_item(&self) -> Option<u64> {
        if self.items.is_empty() {
            return None;
        }
        Some((self.current_page - 1) * u64::from(self.per_page) + 1)
    }

    /// 1-based position of the last item on this page
    pub fn last_item(&self) -> Option<u64> {
        self.first_item()
            .map(|first| first + self.items.len() as u64 - 1)
    }

    /// Transform the items, keeping the paging metadata
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            per_page: self.per_page,
            current_page: self.current_page,
            took: self.took,
            elapsed: self.elapsed,
        }
    }
}

impl<T: Serialize> Serialize for Page<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Page", 7)?;
        state.serialize_field("current_page", &self.current_page)?;
        state.serialize_field("data", &self.items)?;
        state.serialize_field("from", &self.first_item())?;
        state.serialize_field("last_page", &self.last_page())?;
        state.serialize_field("per_page", &self.per_page)?;
        state.serialize_field("to", &self.last_item())?;
        state.serialize_field("total", &self.total)?;
        state.end()
    }
}

/// Turn a normalized search response into a page.
///
/// A failed envelope, or one without `hits.hits`/`hits.total`, is an
/// [`ElasticError::Pagination`].
pub fn paginate<T>(
    envelope: ResultEnvelope,
    size: u32,
    page: CurrentPage,
) -> Result<Page<Hit<T>>>
where
    T: DeserializeOwned,
{
    if !envelope.is_success() {
        let reason = envelope
            .error_reason()
            .unwrap_or_else(|| "engine reported an error".to_string());
        return Err(ElasticError::pagination(
            format!("search failed: {reason}"),
            envelope.data,
        ));
    }

    let response = match SearchResponse::<T>::deserialize(&envelope.data) {
        Ok(response) => response,
        Err(e) => {
            return Err(ElasticError::pagination(
                format!("unexpected search response shape: {e}"),
                envelope.data,
            ))
        }
    };

    Ok(Page::new(response.hits.hits, response.hits.total.value(), size, page)
        .with_took(response.took))
}
