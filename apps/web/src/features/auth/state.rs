//! Auth context shared through Leptos. The token signal is hydrated
//! synchronously from `localStorage` so guarded routes decide on first render.

use crate::app_lib::{AppError, storage::LocalTokenStore};
use leptos::prelude::*;
use postboard_core::{
    model::UserId,
    session::{GuardDecision, TokenStore, decode_claims, guard},
};

#[derive(Clone, Copy)]
pub struct AuthContext {
    pub token: RwSignal<Option<String>>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    fn new(token: RwSignal<Option<String>>) -> Self {
        let is_authenticated = Signal::derive(move || {
            matches!(
                guard(token.read().as_deref()),
                GuardDecision::Render
            )
        });
        Self {
            token,
            is_authenticated,
        }
    }

    /// Persists a fresh token and marks the session signed in.
    pub fn sign_in(&self, token: String) -> Result<(), AppError> {
        LocalTokenStore.store(&token)?;
        self.token.set(Some(token));
        Ok(())
    }

    /// Forgets the token; guarded routes redirect on the next render.
    pub fn sign_out(&self) {
        if let Err(err) = LocalTokenStore.clear() {
            leptos::logging::warn!("failed to clear session token: {err}");
        }
        self.token.set(None);
    }

    /// Id of the signed-in user, read from the unverified token payload.
    pub fn user_id(&self) -> Result<UserId, AppError> {
        let token = self.token.get_untracked().ok_or(AppError::Unauthorized)?;
        Ok(decode_claims(&token)?.user_id()?)
    }
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let token = RwSignal::new(LocalTokenStore.token());
    provide_context(AuthContext::new(token));

    view! { {children()} }
}

/// Returns the current auth context or a fallback read from storage.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .unwrap_or_else(|| AuthContext::new(RwSignal::new(LocalTokenStore.token())))
}
