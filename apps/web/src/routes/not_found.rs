use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4 space-y-6">
            <h1 class="text-6xl font-black text-gray-200 select-none">"404"</h1>
            <p class="text-gray-500 max-w-sm">"This page does not exist."</p>
            <A
                href=paths::HOME
                {..}
                class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800"
            >
                "Go Home"
            </A>
        </div>
    }
}
