use super::users::ProfileEditor;
use crate::components::{Alert, AlertKind, Spinner};
use crate::features::{
    auth::{RequireAuth, state::use_auth},
    users::client,
};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! { <RequireAuth><Profile /></RequireAuth> }
}

/// The signed-in user's own record, looked up by the id in the token.
#[component]
fn Profile() -> impl IntoView {
    let auth = use_auth();
    let user = LocalResource::new(move || async move {
        let id = auth.user_id()?;
        client::get_user(id).await
    });
    let saved = RwSignal::new(false);

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-semibold text-gray-900">"Profile"</h1>
                <A href=paths::CHANGE_PASSWORD {..} class="text-sm text-blue-600 hover:underline">
                    "Change password"
                </A>
            </div>
            {move || {
                saved
                    .get()
                    .then_some(view! {
                        <Alert kind=AlertKind::Success message="Profile updated.".to_string() />
                    })
            }}
            <Suspense fallback=move || view! { <Spinner /> }>
                {move || match user.get() {
                    Some(Ok(user)) => view! { <ProfileEditor user=user saved=saved /> }.into_any(),
                    Some(Err(err)) => {
                        view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any()
                    }
                    None => ().into_any(),
                }}
            </Suspense>
        </div>
    }
}
