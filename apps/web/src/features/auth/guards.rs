use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::{NavigateOptions, hooks::use_navigate};
use postboard_core::session::{GuardDecision, guard};

/// Renders its children only while a token is stored, otherwise redirects.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        // UX-only guard; real access control must live on the API.
        if let GuardDecision::Redirect(path) = guard(auth.token.read().as_deref()) {
            navigate(
                path,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! { <Show when=move || auth.is_authenticated.get()>{children()}</Show> }
}
