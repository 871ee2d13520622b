//! Domain-level frontend features (auth, posts, users). Routes import these
//! modules to keep view code focused on rendering.

pub(crate) mod auth;
pub(crate) mod posts;
pub(crate) mod users;
