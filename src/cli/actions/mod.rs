pub mod auth;
pub mod feed;
pub mod posts;
pub mod profile;
pub mod users;

mod run;

use crate::cli::globals::GlobalArgs;
use anyhow::{Context, Result};
use postboard_client::{ApiClient, FileTokenStore, Upload};
use postboard_core::{
    endpoints,
    html::plain_text,
    model::{FeedPost, Post, User},
    session::TokenStore,
};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug)]
pub enum Action {
    Auth(auth::Args),
    Feed(feed::Args),
    Posts(posts::Args),
    Users(users::Args),
    Profile(profile::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> Result<()> {
        run::execute(self).await
    }
}

/// API client bound to the configured URL and token file.
///
/// # Errors
/// Returns an error if the base URL is rejected.
pub fn client(globals: &GlobalArgs) -> Result<ApiClient<FileTokenStore>> {
    debug!(
        api_url = %globals.api_url,
        token_file = %globals.token_file().display(),
        "building api client"
    );
    ApiClient::new(&globals.api_url, FileTokenStore::new(globals.token_file()))
        .with_context(|| format!("invalid api url: {}", globals.api_url))
}

/// Reads every path into an in-memory upload.
///
/// # Errors
/// Returns an error naming the first unreadable file.
pub async fn read_uploads(paths: &[PathBuf]) -> Result<Vec<Upload>> {
    let mut uploads = Vec::with_capacity(paths.len());
    for path in paths {
        let upload = Upload::from_path(path)
            .await
            .with_context(|| format!("unable to read {}", path.display()))?;
        uploads.push(upload);
    }
    Ok(uploads)
}

pub(crate) fn render_user<S: TokenStore>(client: &ApiClient<S>, user: &User) -> String {
    let mut out = format!(
        "#{} {}\n  email: {}\n  phone: {}",
        user.id,
        user.full_name(),
        user.email,
        user.phone
    );
    if let Some(profile) = user.profile_image.as_deref().filter(|p| !p.is_empty()) {
        out.push_str(&format!(
            "\n  profile: {}",
            client.url(&endpoints::profile_image(profile))
        ));
    }
    out
}

pub(crate) fn render_post<S: TokenStore>(
    client: &ApiClient<S>,
    post: &Post,
    author: Option<&str>,
) -> String {
    let mut out = format!("#{} {}", post.id, post.name);
    if let Some(author) = author {
        out.push_str(&format!(" by {author}"));
    }
    let description = plain_text(&post.description);
    if !description.is_empty() {
        out.push_str(&format!("\n  {description}"));
    }
    for image in &post.images {
        out.push_str(&format!(
            "\n  image: {}",
            client.url(&endpoints::post_image(image))
        ));
    }
    out
}

pub(crate) fn render_feed_post<S: TokenStore>(client: &ApiClient<S>, item: &FeedPost) -> String {
    let author = format!(
        "{} {} <{}>",
        item.author.firstname, item.author.lastname, item.author.email
    );
    render_post(client, &item.post, Some(author.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use postboard_core::{model::Author, session::MemoryTokenStore};

    fn test_client() -> ApiClient<MemoryTokenStore> {
        ApiClient::new("http://localhost:2000", MemoryTokenStore::default())
            .expect("valid base url")
    }

    #[test]
    fn test_render_user() {
        let user = User {
            id: 3,
            firstname: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "5551234".to_string(),
            profile_image: Some("ada.png".to_string()),
        };
        let out = render_user(&test_client(), &user);
        assert!(out.starts_with("#3 Ada Lovelace"));
        assert!(out.contains("profile: http://localhost:2000/profile/ada.png"));
    }

    #[test]
    fn test_render_feed_post_strips_html() {
        let item = FeedPost {
            post: Post {
                id: 9,
                name: "Trip".to_string(),
                description: "<p>Day&nbsp;one &amp; two</p>".to_string(),
                images: vec!["a.png".to_string()],
                ..Post::default()
            },
            author: Author {
                firstname: "Ada".to_string(),
                lastname: "Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                profile: None,
            },
        };
        let out = render_feed_post(&test_client(), &item);
        assert!(out.starts_with("#9 Trip by Ada Lovelace <ada@example.com>"));
        assert!(out.contains("Day one & two"));
        assert!(out.contains("image: http://localhost:2000/post/a.png"));
    }
}
