#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
#[path = "lib/mod.rs"]
mod app_lib;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod features;
#[cfg(target_arch = "wasm32")]
mod routes;

#[cfg(target_arch = "wasm32")]
fn main() {
    use app::App;
    use leptos::prelude::*;

    let config = app_lib::config::AppConfig::load();
    leptos::logging::log!(
        "postboard web {} using {}",
        app_lib::config::build_sha(),
        config.api_base_url
    );
    mount_to_body(|| view! { <App /> });
}

// Browser-only app; native builds produce an empty binary.
#[cfg(not(target_arch = "wasm32"))]
fn main() {}
