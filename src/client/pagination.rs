//! Cursor pagination for list endpoints
//!
//! List endpoints return one page at a time and advertise continuation as a
//! full URL in the `next` field of the response envelope. The cursor for the
//! following request is reconstructed by parsing that URL's query string; the
//! server is the single source of truth for continuation, and the client
//! never does page arithmetic of its own.

use serde::Deserialize;
use url::Url;

use crate::error::{Error, Result};

/// Position in a paginated result list.
///
/// `page == 0` means "unset": as a request cursor it lets the server choose
/// the first page and its size, and as a decoded next-cursor it is the
/// terminal sentinel that ends the walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageQuery {
    /// Page number, 0 = unset
    pub page: u32,
    /// Items per page, 0 = server default
    pub page_size: u32,
}

impl PageQuery {
    /// True when there is no further page to fetch.
    pub fn is_empty(&self) -> bool {
        self.page == 0
    }

    /// Query parameters for a page-fetch request; unset fields are omitted.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if self.page != 0 {
            params.push(("page", self.page.to_string()));
        }
        if self.page_size != 0 {
            params.push(("page_size", self.page_size.to_string()));
        }
        params
    }

    /// Decode a server-provided `next` link into the next cursor.
    ///
    /// A link without a `page` parameter yields the terminal sentinel. An
    /// unparsable URL or a non-numeric parameter is [`Error::Decode`].
    pub fn from_next_link(link: &str) -> Result<Self> {
        let url =
            Url::parse(link).map_err(|e| Error::Decode(format!("next link {link:?}: {e}")))?;
        let mut next = PageQuery::default();
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "page" => {
                    next.page = value.parse().map_err(|_| {
                        Error::Decode(format!("next link page {value:?} is not a number"))
                    })?;
                }
                "page_size" => {
                    next.page_size = value.parse().map_err(|_| {
                        Error::Decode(format!("next link page_size {value:?} is not a number"))
                    })?;
                }
                _ => {}
            }
        }
        Ok(next)
    }
}

/// One page of a list response.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    /// Total number of items across all pages
    pub count: u64,
    /// Full URL of the next page, absent on the last page
    #[serde(default)]
    pub next: Option<String>,
    /// Full URL of the previous page, absent on the first page
    #[serde(default)]
    pub previous: Option<String>,
    /// This page's items, in server order
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Cursor for the page after this one, decoded from the `next` link.
    pub fn next_cursor(&self) -> Result<PageQuery> {
        match &self.next {
            Some(link) => PageQuery::from_next_link(link),
            None => Ok(PageQuery::default()),
        }
    }
}

/// Walk a paginated endpoint to exhaustion, collecting items in server order.
///
/// `fetch` is bound to one endpoint and its filters; it receives the current
/// cursor and returns that page's items plus the decoded next cursor. The
/// walk starts from the default cursor (server picks page size), keeps
/// exactly one request outstanding, and stops at the terminal sentinel. Any
/// failure discards items accumulated so far; a partial list is never
/// returned.
pub fn paginate<T, F>(mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(&PageQuery) -> Result<(Vec<T>, PageQuery)>,
{
    let mut items = Vec::new();
    let mut cursor = PageQuery::default();
    loop {
        let (page, next) = fetch(&cursor)?;
        items.extend(page);
        if next.is_empty() {
            break;
        }
        cursor = next;
    }
    Ok(items)
}
