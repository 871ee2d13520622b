//! # Postboard core
//!
//! Platform-agnostic pieces shared by the browser app and the terminal client.
//! Nothing here performs I/O: front ends bring their own HTTP stack and token
//! storage and plug them in through [`session::TokenStore`] and
//! [`multipart::Attachment`].
//!
//! ## Session
//!
//! A session is nothing more than a bearer token kept under a single storage
//! key. [`session::guard`] decides whether a protected view renders or
//! redirects to the login route; it checks presence only. Token validity is
//! the API's business.
//!
//! ## Feed
//!
//! [`feed::Paginator`] tracks page-by-page loading with a fixed page size. It
//! allows one request in flight, drops responses that were cancelled or
//! superseded, de-duplicates items by key and stops once a short page arrives.
//!
//! ## Forms
//!
//! Every form shares the validator set in [`validate`], keyed by [`validate::Field`].
//! Forms convert into a [`multipart::MultipartForm`] whose field names match
//! what the server expects.

pub mod endpoints;
pub mod error;
pub mod feed;
pub mod forms;
pub mod html;
pub mod model;
pub mod multipart;
pub mod pager;
pub mod reply;
pub mod session;
pub mod validate;

pub use error::Error;
