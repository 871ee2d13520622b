//! Shared layout wrapper with the navbar and content container. Navigation is
//! client-side only; the API enforces access control.

use crate::{
    app_lib::config::build_sha,
    features::auth::state::use_auth,
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::components::A;

const LINK_CLASS: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-blue-700 md:p-0";

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200">
                <nav class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A href=paths::HOME {..} class="font-semibold whitespace-nowrap">
                        "Postboard"
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <span class="sr-only">"Open main menu"</span>
                        "☰"
                    </button>
                    <div class="w-full md:block md:w-auto" class:hidden=move || !menu_open.get()>
                        <ul
                            class="font-medium flex flex-col p-4 md:p-0 mt-4 md:flex-row md:space-x-8 md:mt-0"
                            on:click=move |_| set_menu_open.set(false)
                        >
                            <li>
                                <A href=paths::HOME {..} class=LINK_CLASS>"Home"</A>
                            </li>
                            <Show
                                when=move || is_authenticated.get()
                                fallback=|| {
                                    view! {
                                        <li>
                                            <A href=paths::LOGIN {..} class=LINK_CLASS>"Login"</A>
                                        </li>
                                        <li>
                                            <A href=paths::REGISTER {..} class=LINK_CLASS>"Register"</A>
                                        </li>
                                    }
                                }
                            >
                                <li>
                                    <A href=paths::USERS {..} class=LINK_CLASS>"Users"</A>
                                </li>
                                <li>
                                    <A href=paths::NEW_POST {..} class=LINK_CLASS>"New post"</A>
                                </li>
                                <li>
                                    <A href=paths::PROFILE {..} class=LINK_CLASS>"Profile"</A>
                                </li>
                                <li>
                                    <A href=paths::LOGIN {..} class=LINK_CLASS on:click=move |_| auth.sign_out()>
                                        "Logout"
                                    </A>
                                </li>
                            </Show>
                        </ul>
                    </div>
                </nav>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
            <footer class="p-4 text-center text-xs text-gray-400">
                {format!("build {}", build_sha())}
            </footer>
        </div>
    }
}
