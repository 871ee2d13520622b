use super::ProfileEditor;
use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, Spinner};
use crate::features::{auth::RequireAuth, users::client};
use crate::routes::{IdParams, paths};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params};

#[component]
pub fn EditUserPage() -> impl IntoView {
    view! { <RequireAuth><EditUser /></RequireAuth> }
}

#[component]
fn EditUser() -> impl IntoView {
    let params = use_params::<IdParams>();
    let navigate = use_navigate();
    let user = LocalResource::new(move || {
        let id = params.with(|params| params.as_ref().ok().and_then(|params| params.id));
        async move {
            match id {
                Some(id) => client::get_user(id).await,
                None => Err(AppError::Http {
                    status: 404,
                    message: "User not found.".to_string(),
                }),
            }
        }
    });
    let saved = RwSignal::new(false);

    Effect::new(move |_| {
        if saved.get() {
            navigate(paths::USERS, Default::default());
        }
    });

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-semibold text-gray-900">"Edit user"</h1>
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
