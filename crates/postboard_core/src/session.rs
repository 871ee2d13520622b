//! Bearer-token session handling shared by every front end.
//!
//! The session guard is a routing predicate only: it looks at whether a token
//! is stored, never at whether the token is valid. Expired or forged tokens are
//! rejected by the API, which is the real access-control boundary.

use crate::{Error, model::UserId};
use base64::Engine;
use serde::Deserialize;
use std::sync::Mutex;

/// Storage key the token lives under (browser `localStorage`, token file).
pub const TOKEN_KEY: &str = "token";

/// Route unauthenticated visitors are sent to.
pub const LOGIN_PATH: &str = "/login";

/// Persistence for the bearer token.
pub trait TokenStore {
    /// Returns the stored token, if any.
    fn token(&self) -> Option<String>;

    /// Replaces the stored token.
    ///
    /// # Errors
    /// Returns [`Error::Storage`] when the backing store rejects the write.
    fn store(&self, token: &str) -> Result<(), Error>;

    /// Removes the stored token.
    ///
    /// # Errors
    /// Returns [`Error::Storage`] when the backing store rejects the removal.
    fn clear(&self) -> Result<(), Error>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(&'static str),
}

/// Decides whether a protected view may render.
#[must_use]
pub fn guard(token: Option<&str>) -> GuardDecision {
    match token {
        Some(value) if !value.is_empty() => GuardDecision::Render,
        _ => GuardDecision::Redirect(LOGIN_PATH),
    }
}

/// Same as [`guard`], reading the token from a store.
#[must_use]
pub fn guard_store<S: TokenStore + ?Sized>(store: &S) -> GuardDecision {
    guard(store.token().as_deref())
}

/// Formats the `Authorization` header value for a token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Claims read from the token payload. The signature is not checked.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub id: Option<UserId>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub exp: Option<u64>,
}

impl TokenClaims {
    /// # Errors
    /// Returns [`Error::MissingUserId`] when the payload carries no `id`.
    pub fn user_id(&self) -> Result<UserId, Error> {
        self.id.ok_or(Error::MissingUserId)
    }
}

/// Decodes the JWT payload segment without verifying it. Used to find out
/// which user the stored token belongs to.
///
/// # Errors
/// Returns an error if the token is not three dot-separated segments, the
/// payload is not base64url, or the payload is not a JSON object.
pub fn decode_claims(token: &str) -> Result<TokenClaims, Error> {
    let mut segments = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(Error::TokenFormat);
    };

    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| Error::Base64)?;

    Ok(serde_json::from_slice(&bytes)?)
}

/// In-process token store, handy for tests and one-shot sessions.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.token.lock().ok().and_then(|guard| guard.clone())
    }

    fn store(&self, token: &str) -> Result<(), Error> {
        let mut slot = self
            .token
            .lock()
            .map_err(|_| Error::Storage("token lock poisoned".to_string()))?;
        *slot = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), Error> {
        let mut slot = self
            .token
            .lock()
            .map_err(|_| Error::Storage("token lock poisoned".to_string()))?;
        *slot = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt(payload: &str) -> String {
        let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        format!(
            "{}.{}.{}",
            engine.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            engine.encode(payload),
            engine.encode("signature")
        )
    }

    #[test]
    fn guard_redirects_without_token() {
        assert_eq!(guard(None), GuardDecision::Redirect("/login"));
        assert_eq!(guard(Some("")), GuardDecision::Redirect("/login"));
    }

    #[test]
    fn guard_renders_with_any_token() {
        // Presence is enough, even for garbage.
        assert_eq!(guard(Some("not-a-jwt")), GuardDecision::Render);
    }

    #[test]
    fn guard_store_follows_store_state() -> Result<(), Error> {
        let store = MemoryTokenStore::default();
        assert_eq!(guard_store(&store), GuardDecision::Redirect(LOGIN_PATH));

        store.store("abc")?;
        assert_eq!(guard_store(&store), GuardDecision::Render);

        store.clear()?;
        assert_eq!(guard_store(&store), GuardDecision::Redirect(LOGIN_PATH));
        Ok(())
    }

    #[test]
    fn bearer_header_value() {
        assert_eq!(bearer("abc"), "Bearer abc");
    }

    #[test]
    fn decode_claims_reads_user_id() -> Result<(), Error> {
        let token = jwt(r#"{"id":42,"email":"a@b.co","iat":1700000000}"#);
        let claims = decode_claims(&token)?;
        assert_eq!(claims.user_id()?, 42);
        assert_eq!(claims.email.as_deref(), Some("a@b.co"));
        Ok(())
    }

    #[test]
    fn decode_claims_rejects_malformed_tokens() {
        assert!(matches!(decode_claims("abc"), Err(Error::TokenFormat)));
        assert!(matches!(decode_claims("a.b.c.d"), Err(Error::TokenFormat)));
        assert!(matches!(decode_claims("a.***.c"), Err(Error::Base64)));

        let token = jwt(r#"{"email":"a@b.co"}"#);
        let claims = decode_claims(&token).unwrap();
        assert!(matches!(claims.user_id(), Err(Error::MissingUserId)));
    }
}
