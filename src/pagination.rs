//! Cursor pagination over list endpoints
//!
//! A [`Pager`] wraps one list operation and hides the continuation cursor.
//! Each call to [`Pager::get_next`] performs exactly one request. Results
//! come back in fetch order; the scan is best-effort and resumable, not a
//! consistent snapshot, so a collection that changes between pages can
//! yield duplicates or gaps.

use crate::client::DetailedResponse;
use crate::error::{ClientError, ClientResult};
use crate::models::PaginationLink;
use futures_util::future::BoxFuture;
use log::debug;

/// Future returned by a page fetcher
pub type PageFuture<'a, R> = BoxFuture<'a, ClientResult<DetailedResponse<R>>>;

/// Parameters of a list operation that accepts a continuation cursor
pub trait PageRequest: Clone + Send {
    /// Query parameter the cursor travels in
    const CURSOR_FIELD: &'static str;

    fn cursor(&self) -> Option<&str>;

    fn set_cursor(&mut self, cursor: Option<String>);
}

/// One page of a list operation's response
pub trait PageResponse {
    type Item;

    /// Top-level field holding the items
    const ITEMS_FIELD: &'static str;

    /// Items of this page, `None` when the field is absent
    fn take_items(&mut self) -> Option<Vec<Self::Item>>;

    fn next_link(&self) -> Option<&PaginationLink>;
}

/// Pull-based iterator over a cursor-paginated endpoint
pub struct Pager<'a, P, R> {
    params: P,
    fetch: Box<dyn Fn(P) -> PageFuture<'a, R> + Send + Sync + 'a>,
    has_more: bool,
    cursor: Option<String>,
}

impl<'a, P, R> Pager<'a, P, R>
where
    P: PageRequest,
    R: PageResponse,
{
    /// Wrap `fetch`, starting from a copy of `params`
    ///
    /// The pager owns the cursor field, so `params` must not set it.
    pub fn new<F>(params: &P, fetch: F) -> ClientResult<Self>
    where
        F: Fn(P) -> PageFuture<'a, R> + Send + Sync + 'a,
    {
        if params.cursor().is_some() {
            return Err(ClientError::usage(format!(
                "the '{}' parameter must not be set when creating a pager",
                P::CURSOR_FIELD
            )));
        }

        Ok(Self {
            params: params.clone(),
            fetch: Box::new(fetch),
            has_more: true,
            cursor: None,
        })
    }

    pub fn has_next(&self) -> bool {
        self.has_more
    }

    /// Fetch the next page of items
    ///
    /// A failed fetch leaves the pager where it was, so calling this again
    /// retries the same page.
    pub async fn get_next(&mut self) -> ClientResult<Vec<R::Item>> {
        if !self.has_more {
            return Err(ClientError::usage("no more results available"));
        }

        if let Some(cursor) = &self.cursor {
            self.params.set_cursor(Some(cursor.clone()));
        }

        let response = (self.fetch)(self.params.clone()).await?;
        let mut page = response.result;

        let next_cursor = match page.next_link() {
            Some(link) => Some(link.query_param(P::CURSOR_FIELD)?),
            None => None,
        };
        let items = page.take_items().ok_or_else(|| {
            ClientError::malformed_response(format!(
                "page response has no '{}' field",
                R::ITEMS_FIELD
            ))
        })?;

        debug!(
            "Fetched page of {} {} (more: {})",
            items.len(),
            R::ITEMS_FIELD,
            next_cursor.is_some()
        );
        self.has_more = next_cursor.is_some();
        self.cursor = next_cursor;

        Ok(items)
    }

    /// Fetch every remaining page and concatenate the items
    pub async fn get_all(&mut self) -> ClientResult<Vec<R::Item>> {
        let mut results = Vec::new();
        while self.has_next() {
            results.extend(self.get_next().await?);
        }
        Ok(results)
    }
}
