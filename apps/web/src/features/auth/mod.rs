//! Session handling for the browser: the token signal, the route guard, and
//! the login/register/change-password calls.
//!
//! The guard only checks that a token is stored. The API validates the token
//! on every protected call; a rejected token surfaces as a 401 error in the
//! view that made the call.

pub(crate) mod client;
mod guards;
pub(crate) mod state;

pub(crate) use guards::RequireAuth;
