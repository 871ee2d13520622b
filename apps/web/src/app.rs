use crate::components::AppShell;
use crate::features::auth::state::AuthProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

/// Root component. The session context wraps the router so the navbar and
/// every guarded route read the same token signal.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <Router>
                <AppShell>
                    <AppRoutes />
                </AppShell>
            </Router>
        </AuthProvider>
    }
}
