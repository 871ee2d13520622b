//! `localStorage`-backed token store. The token sits under the `token` key,
//! the only value the app persists.

use postboard_core::{
    Error,
    session::{TOKEN_KEY, TokenStore},
};
use web_sys::Storage;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStore;

fn local_storage() -> Result<Storage, Error> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or_else(|| Error::Storage("localStorage is unavailable".to_string()))
}

impl TokenStore for LocalTokenStore {
    fn token(&self) -> Option<String> {
        local_storage()
            .ok()?
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn store(&self, token: &str) -> Result<(), Error> {
        local_storage()?
            .set_item(TOKEN_KEY, token)
            .map_err(|_| Error::Storage("unable to save the session token".to_string()))
    }

    fn clear(&self) -> Result<(), Error> {
        local_storage()?
            .remove_item(TOKEN_KEY)
            .map_err(|_| Error::Storage("unable to remove the session token".to_string()))
    }
}
