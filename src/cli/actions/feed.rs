use crate::cli::{
    actions::{client, render_feed_post},
    globals::GlobalArgs,
};
use anyhow::{Context, Result};

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    /// Pages to load; `None` loads until the feed is exhausted.
    pub pages: Option<u32>,
}

/// # Errors
/// Returns an error if a page cannot be fetched.
pub async fn execute(args: Args) -> Result<()> {
    let client = client(&args.globals)?;
    let mut feed = client.feed();

    let items = feed
        .load_pages(args.pages)
        .await
        .context("unable to load the feed")?;

    if items.is_empty() {
        println!("No posts yet");
        return Ok(());
    }

    for item in items {
        println!("{}\n", render_feed_post(&client, item));
    }
    if feed.has_more() {
        println!("More posts available, use --pages or --all");
    }

    Ok(())
}
