use crate::components::ui::FieldError;
use leptos::{ev::Event, prelude::*};
use postboard_core::validate::{Field, FormErrors, Violation, check_text};

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5";

/// Labelled input bound to `value` that re-validates its field on every
/// keystroke. `check` replaces the default rule for the field.
#[component]
pub fn TextInput(
    label: &'static str,
    field: Field,
    value: RwSignal<String>,
    errors: RwSignal<FormErrors>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional, into)] check: Option<Callback<String, Result<(), Violation>>>,
) -> impl IntoView {
    let id = field.key();
    let on_input = move |event: Event| {
        let next = event_target_value(&event);
        let outcome = match check {
            Some(check) => check.run(next.clone()),
            None => check_text(field, &next),
        };
        errors.update(|errors| errors.record(field, outcome));
        value.set(next);
    };

    view! {
        <div class="mb-5">
            <label class="block mb-2 text-sm font-medium text-gray-900" for=id>
                {label}
            </label>
            <input
                id=id
                type=input_type.unwrap_or("text")
                class=INPUT_CLASS
                autocomplete=autocomplete.unwrap_or("off")
                prop:value=move || value.get()
                on:input=on_input
            />
            <FieldError errors=errors field=field />
        </div>
    }
}

/// Multi-line variant for post descriptions.
#[component]
pub fn TextArea(
    label: &'static str,
    field: Field,
    value: RwSignal<String>,
    errors: RwSignal<FormErrors>,
) -> impl IntoView {
    let id = field.key();

    view! {
        <div class="mb-5">
            <label class="block mb-2 text-sm font-medium text-gray-900" for=id>
                {label}
            </label>
            <textarea
                id=id
                rows="6"
                class=INPUT_CLASS
                prop:value=move || value.get()
                on:input=move |event| {
                    let next = event_target_value(&event);
                    errors.update(|errors| errors.record(field, check_text(field, &next)));
                    value.set(next);
                }
            ></textarea>
            <FieldError errors=errors field=field />
        </div>
    }
}
