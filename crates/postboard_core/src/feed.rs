//! Page-by-page feed loading.
//!
//! The paginator owns the list of loaded items and the cursor. Callers ask it
//! for the next [`PageRequest`], perform the fetch however their platform
//! allows, and hand the result back with the request's [`Ticket`]. Only the
//! ticket that is currently in flight is accepted, so a response that arrives
//! after [`Paginator::cancel`] or [`Paginator::reset`] is discarded instead of
//! being appended to the wrong list.

use crate::model::{FeedPost, PostId};
use std::collections::HashSet;
use std::hash::Hash;

/// Posts requested per feed page.
pub const FEED_PAGE_SIZE: u32 = 3;

/// Distance from the bottom of the document, in CSS pixels, at which the next
/// page is requested.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Items that can be de-duplicated across pages.
pub trait Keyed {
    type Key: Eq + Hash + Clone;

    fn key(&self) -> Self::Key;
}

impl Keyed for FeedPost {
    type Key = PostId;

    fn key(&self) -> PostId {
        self.post.id
    }
}

/// Identifies one page request handed out by [`Paginator::begin`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// One-based page number.
    pub page: u32,
    pub limit: u32,
    pub ticket: Ticket,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageOutcome {
    /// The page was accepted; carries the number of new (non-duplicate) items.
    Appended(usize),
    /// The request was cancelled or superseded; nothing changed.
    Stale,
}

#[derive(Clone, Debug)]
pub struct Paginator<T: Keyed> {
    items: Vec<T>,
    seen: HashSet<T::Key>,
    limit: u32,
    next_page: u32,
    exhausted: bool,
    in_flight: Option<Ticket>,
    issued: u64,
}

impl<T: Keyed> Paginator<T> {
    /// Creates an empty paginator. A zero limit is treated as one.
    #[must_use]
    pub fn new(limit: u32) -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
            limit: limit.max(1),
            next_page: 1,
            exhausted: false,
            in_flight: None,
            issued: 0,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// One-based number of the page the next request will ask for.
    #[must_use]
    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        !self.exhausted
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Hands out the next page request, or `None` when the feed is exhausted
    /// or a request is already in flight.
    pub fn begin(&mut self) -> Option<PageRequest> {
        if self.exhausted || self.in_flight.is_some() {
            return None;
        }

        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.in_flight = Some(ticket);

        Some(PageRequest {
            page: self.next_page,
            limit: self.limit,
            ticket,
        })
    }

    /// Accepts the items fetched for `ticket`. A page shorter than the limit
    /// marks the feed exhausted.
    pub fn complete(&mut self, ticket: Ticket, page: Vec<T>) -> PageOutcome {
        if self.in_flight != Some(ticket) {
            return PageOutcome::Stale;
        }
        self.in_flight = None;

        let fetched = page.len();
        let mut appended = 0;
        for item in page {
            if self.seen.insert(item.key()) {
                self.items.push(item);
                appended += 1;
            }
        }

        if fetched < self.limit as usize {
            self.exhausted = true;
        }
        self.next_page += 1;

        PageOutcome::Appended(appended)
    }

    /// Releases the in-flight slot after a failed fetch. The cursor does not
    /// move, so the next [`begin`](Self::begin) asks for the same page again.
    /// Returns `false` when `ticket` was already stale.
    pub fn fail(&mut self, ticket: Ticket) -> bool {
        if self.in_flight == Some(ticket) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    /// Abandons the request in flight; its response will be reported stale.
    pub fn cancel(&mut self) {
        self.in_flight = None;
    }

    /// Drops every loaded item and starts again from page one.
    pub fn reset(&mut self) {
        self.items.clear();
        self.seen.clear();
        self.next_page = 1;
        self.exhausted = false;
        self.in_flight = None;
    }

    /// Removes an item, typically after it was deleted on the server.
    pub fn remove(&mut self, key: &T::Key) -> Option<T> {
        let index = self.items.iter().position(|item| &item.key() == key)?;
        Some(self.items.remove(index))
    }
}

impl<T: Keyed> Default for Paginator<T> {
    fn default() -> Self {
        Self::new(FEED_PAGE_SIZE)
    }
}

/// Whether the viewport is close enough to the end of the document to load
/// another page.
#[must_use]
pub fn near_bottom(scroll_top: f64, viewport_height: f64, document_height: f64) -> bool {
    scroll_top + viewport_height >= document_height - SCROLL_THRESHOLD_PX
}
