use leptos::prelude::*;

/// Centered loading indicator with screen-reader text.
#[component]
pub fn Spinner(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    let label = label.unwrap_or("Loading");

    view! {
        <div class="flex justify-center py-2" role="status">
            <span class="h-6 w-6 animate-spin rounded-full border-4 border-gray-200 border-t-blue-700"></span>
            <span class="sr-only">{label}</span>
        </div>
    }
}
