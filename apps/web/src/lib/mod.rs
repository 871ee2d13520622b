//! Shared frontend utilities: HTTP access with the bearer token, configuration,
//! token storage, file handles for uploads, errors, and build metadata.
//!
//! Every protected call reads the token from `localStorage` at request time, so
//! a logout in one view is seen by the next request from any other view. The
//! token is never logged.

pub(crate) mod api;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod files;
pub(crate) mod storage;

pub(crate) use api::{FormMethod, api_url, delete, get_json, post_json, put_json, send_form};
pub(crate) use errors::AppError;
pub(crate) use files::PickedFile;
