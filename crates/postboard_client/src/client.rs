use crate::{
    Error, FeedLoader,
    upload::{Upload, into_form},
};
use postboard_core::{
    endpoints,
    feed::FEED_PAGE_SIZE,
    forms::{ChangePassword, LoginForm, NewPost, PostUpdate, ProfileUpdate, RegisterForm},
    model::{
        FeedPost, LoginResponse, Post, PostEnvelope, PostId, PostsPage, StatusMessage, User,
        UserEnvelope, UserId, UsersPage,
    },
    pager::USERS_PAGE_SIZE,
    reply::sanitize_body,
    session::{GuardDecision, TokenStore, bearer, decode_claims, guard},
};
use reqwest::{Client, RequestBuilder, Response, header::AUTHORIZATION};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{Instrument, debug, info_span};
use url::Url;

/// Request timeout applied to every call.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub struct ApiClient<S> {
    http: Client,
    base_url: String,
    store: S,
}

impl<S: TokenStore> ApiClient<S> {
    /// # Errors
    /// Returns an error if `base_url` is not an absolute http(s) URL or the
    /// HTTP client cannot be built.
    pub fn new(base_url: &str, store: S) -> Result<Self, Error> {
        let url = Url::parse(base_url.trim())?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Scheme(url.scheme().to_string()));
        }

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(DEFAULT_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: url.as_str().trim_end_matches('/').to_string(),
            store,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Absolute URL of an API path or stored asset.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        endpoints::join_url(&self.base_url, path)
    }

    /// Stored token, or [`Error::NotAuthenticated`] when the session guard
    /// would redirect to login.
    fn token(&self) -> Result<String, Error> {
        let token = self.store.token();
        match guard(token.as_deref()) {
            GuardDecision::Render => token.ok_or(Error::NotAuthenticated),
            GuardDecision::Redirect(_) => Err(Error::NotAuthenticated),
        }
    }

    fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder, Error> {
        let token = self.token()?;
        Ok(builder.header(AUTHORIZATION, bearer(&token)))
    }

    /// Sends a request inside a tracing span and maps non-2xx statuses to
    /// [`Error::Http`].
    async fn send(&self, builder: RequestBuilder) -> Result<Response, Error> {
        let request = builder.build()?;
        let span = info_span!(
            "postboard.request",
            http.method = %request.method(),
            url = %request.url()
        );

        let response = self.http.execute(request).instrument(span).await?;
        let status = response.status();
        debug!(status = status.as_u16(), "response received");

        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(Error::Http {
                status: status.as_u16(),
                message: sanitize_body(&body),
            })
        }
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, Error> {
        let response = self.send(builder).await?;
        Ok(response.json::<T>().await?)
    }

    /// Logs in and stores the returned token.
    ///
    /// # Errors
    /// Returns [`Error::Invalid`] before any request when the form fails
    /// validation, or the HTTP error when the credentials are rejected.
    pub async fn login(&self, form: &LoginForm) -> Result<(), Error> {
        form.validate().into_result()?;

        let builder = self
            .http
            .post(self.url(endpoints::LOGIN))
            .json(&form.to_request());
        let response: LoginResponse = self.send_json(builder).await?;
        self.store.store(&response.token)?;
        Ok(())
    }

    /// Forgets the stored token. No request is made; the API keeps no session.
    ///
    /// # Errors
    /// Returns an error if the token store cannot be cleared.
    pub fn logout(&self) -> Result<(), Error> {
        self.store.clear()?;
        Ok(())
    }

    /// # Errors
    /// Returns [`Error::Invalid`] on validation failure or the HTTP error.
    pub async fn register(&self, form: RegisterForm<Upload>) -> Result<(), Error> {
        form.validate().into_result()?;

        let body = into_form(form.into_multipart())?;
        let builder = self.http.post(self.url(endpoints::REGISTER)).multipart(body);
        self.send(builder).await?;
        Ok(())
    }

    /// Id of the signed-in user, read from the token payload.
    ///
    /// # Errors
    /// Returns [`Error::NotAuthenticated`] without a token, or a session
    /// error when the token is not a JWT carrying an `id`.
    pub fn current_user_id(&self) -> Result<UserId, Error> {
        let token = self.token()?;
        Ok(decode_claims(&token)?.user_id()?)
    }

    /// Fetches one page of the users table.
    ///
    /// # Errors
    /// Returns [`Error::NotAuthenticated`] or the HTTP error.
    pub async fn list_users(&self, page: u32) -> Result<UsersPage, Error> {
        let path = endpoints::users(page.max(1), USERS_PAGE_SIZE);
        let builder = self.http.get(self.url(&path));
        self.send_json(self.authorized(builder)?).await
    }

    /// # Errors
    /// Returns [`Error::NotAuthenticated`] or the HTTP error.
    pub async fn get_user(&self, id: UserId) -> Result<User, Error> {
        let builder = self.http.get(self.url(&endpoints::user(id)));
        let envelope: UserEnvelope = self.send_json(self.authorized(builder)?).await?;
        Ok(envelope.user)
    }

    /// # Errors
    /// Returns [`Error::Invalid`], [`Error::NotAuthenticated`] or the HTTP error.
    pub async fn update_user(&self, id: UserId, form: ProfileUpdate<Upload>) -> Result<(), Error> {
        form.validate().into_result()?;

        let builder = self.authorized(self.http.put(self.url(&endpoints::update_user(id))))?;
        let body = into_form(form.into_multipart())?;
        self.send(builder.multipart(body)).await?;
        Ok(())
    }

    /// Changes the signed-in user's password.
    ///
    /// # Errors
    /// Returns [`Error::Rejected`] with the server message when the API
    /// answers `status: false`, e.g. for a wrong old password.
    pub async fn change_password(&self, form: &ChangePassword) -> Result<String, Error> {
        form.validate().into_result()?;

        let id = self.current_user_id()?;
        let builder = self
            .authorized(self.http.put(self.url(&endpoints::change_password(id))))?
            .json(&form.to_request());
        let reply: StatusMessage = self.send_json(builder).await?;

        if reply.status {
            Ok(reply.message)
        } else {
            Err(Error::Rejected(sanitize_body(&reply.message)))
        }
    }

    /// Fetches one feed page.
    ///
    /// # Errors
    /// Returns [`Error::NotAuthenticated`] or the HTTP error.
    pub async fn list_posts(&self, page: u32, limit: u32) -> Result<Vec<FeedPost>, Error> {
        let builder = self.http.get(self.url(&endpoints::posts(page, limit)));
        let page: PostsPage = self.send_json(self.authorized(builder)?).await?;
        Ok(page.posts)
    }

    /// # Errors
    /// Returns [`Error::NotAuthenticated`] or the HTTP error.
    pub async fn get_post(&self, id: PostId) -> Result<Post, Error> {
        let builder = self.http.get(self.url(&endpoints::post(id)));
        let envelope: PostEnvelope = self.send_json(self.authorized(builder)?).await?;
        Ok(envelope.post)
    }

    /// # Errors
    /// Returns [`Error::Invalid`], [`Error::NotAuthenticated`] or the HTTP error.
    pub async fn create_post(&self, form: NewPost<Upload>) -> Result<(), Error> {
        form.validate().into_result()?;

        let builder = self.authorized(self.http.post(self.url(endpoints::CREATE_POST)))?;
        let body = into_form(form.into_multipart())?;
        self.send(builder.multipart(body)).await?;
        Ok(())
    }

    /// # Errors
    /// Returns [`Error::Invalid`], [`Error::NotAuthenticated`] or the HTTP error.
    pub async fn update_post(&self, id: PostId, form: PostUpdate<Upload>) -> Result<(), Error> {
        form.validate().into_result()?;

        let builder = self.authorized(self.http.put(self.url(&endpoints::update_post(id))))?;
        let body = into_form(form.into_multipart())?;
        self.send(builder.multipart(body)).await?;
        Ok(())
    }

    /// # Errors
    /// Returns [`Error::NotAuthenticated`] or the HTTP error.
    pub async fn delete_post(&self, id: PostId) -> Result<(), Error> {
        let builder = self.http.delete(self.url(&endpoints::delete_post(id)));
        self.send(self.authorized(builder)?).await?;
        Ok(())
    }

    /// Starts an infinite-scroll style feed with the standard page size.
    #[must_use]
    pub fn feed(&self) -> FeedLoader<'_, S> {
        FeedLoader::new(self, FEED_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postboard_core::session::MemoryTokenStore;

    #[test]
    fn rejects_non_http_base_url() {
        assert!(ApiClient::new("ftp://example.com", MemoryTokenStore::default()).is_err());
        assert!(ApiClient::new("not a url", MemoryTokenStore::default()).is_err());
    }

    #[test]
    fn builds_absolute_urls() -> Result<(), Error> {
        let client = ApiClient::new("http://localhost:2000/", MemoryTokenStore::default())?;
        assert_eq!(client.base_url(), "http://localhost:2000");
        assert_eq!(
            client.url(&endpoints::post_image("a.png")),
            "http://localhost:2000/post/a.png"
        );
        Ok(())
    }

    #[test]
    fn protected_calls_need_a_token() -> Result<(), Error> {
        let client = ApiClient::new("http://localhost:2000", MemoryTokenStore::default())?;
        assert!(matches!(client.token(), Err(Error::NotAuthenticated)));
        assert!(matches!(
            client.current_user_id(),
            Err(Error::NotAuthenticated)
        ));

        client.store().store("abc")?;
        assert_eq!(client.token()?, "abc");
        Ok(())
    }
}
