use crate::{ApiClient, Error};
use postboard_core::{
    feed::{PageOutcome, Paginator},
    model::{FeedPost, PostId},
    session::TokenStore,
};
use tracing::{debug, warn};

/// Drives a [`Paginator`] against the feed endpoint.
pub struct FeedLoader<'a, S> {
    client: &'a ApiClient<S>,
    paginator: Paginator<FeedPost>,
}

impl<'a, S: TokenStore> FeedLoader<'a, S> {
    #[must_use]
    pub fn new(client: &'a ApiClient<S>, limit: u32) -> Self {
        Self {
            client,
            paginator: Paginator::new(limit),
        }
    }

    #[must_use]
    pub fn items(&self) -> &[FeedPost] {
        self.paginator.items()
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.paginator.has_more()
    }

    /// Fetches the next page. Returns the number of new posts, zero once the
    /// feed is exhausted. A failed fetch is logged and returned; the cursor
    /// stays put and nothing is retried.
    ///
    /// # Errors
    /// Returns the client error for the failed page.
    pub async fn load_more(&mut self) -> Result<usize, Error> {
        let Some(request) = self.paginator.begin() else {
            return Ok(0);
        };

        match self.client.list_posts(request.page, request.limit).await {
            Ok(posts) => match self.paginator.complete(request.ticket, posts) {
                PageOutcome::Appended(count) => {
                    debug!(page = request.page, count, "feed page loaded");
                    Ok(count)
                }
                PageOutcome::Stale => Ok(0),
            },
            Err(err) => {
                self.paginator.fail(request.ticket);
                warn!(page = request.page, "error fetching posts: {err}");
                Err(err)
            }
        }
    }

    /// Loads pages until the feed is exhausted or `max_pages` more pages
    /// have been fetched.
    ///
    /// # Errors
    /// Stops at and returns the first failed page.
    pub async fn load_pages(&mut self, max_pages: Option<u32>) -> Result<&[FeedPost], Error> {
        let mut fetched = 0;
        while self.has_more() && max_pages.is_none_or(|max| fetched < max) {
            self.load_more().await?;
            fetched += 1;
        }
        Ok(self.items())
    }

    /// Drops a post from the loaded list, typically after deleting it.
    pub fn remove(&mut self, id: PostId) -> Option<FeedPost> {
        self.paginator.remove(&id)
    }
}
