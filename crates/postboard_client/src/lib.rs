//! Async client for the postboard REST API.
//!
//! [`ApiClient`] wraps `reqwest` with the conventions the API expects: JSON
//! for login and password changes, multipart for anything carrying files, and
//! an `Authorization: Bearer` header on every protected call. The token comes
//! from a [`postboard_core::session::TokenStore`]; protected calls fail fast
//! with [`Error::NotAuthenticated`] when none is stored, the same decision the
//! browser route guard makes.
//!
//! Tokens are never logged. Request spans carry only the method and URL.

mod client;
mod error;
mod feed;
mod store;
mod upload;

pub use client::ApiClient;
pub use error::Error;
pub use feed::FeedLoader;
pub use store::FileTokenStore;
pub use upload::{Upload, mime_for};
