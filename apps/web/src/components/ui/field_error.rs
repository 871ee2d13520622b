use leptos::prelude::*;
use postboard_core::validate::{Field, FormErrors};

/// Inline message for one field, empty while the field is valid.
#[component]
pub fn FieldError(#[prop(into)] errors: Signal<FormErrors>, field: Field) -> impl IntoView {
    move || {
        errors
            .read()
            .message(field)
            .map(|message| view! { <p class="mt-1 text-sm text-red-600">{message}</p> })
    }
}
