use crate::app_lib::{AppError, PickedFile, files::picked_files};
use crate::components::{Alert, AlertKind, Button, FieldError, Spinner, TextInput};
use crate::features::auth::client;
use crate::routes::paths;
use leptos::{
    ev::{Event, SubmitEvent},
    prelude::*,
    task::spawn_local,
};
use leptos_router::hooks::use_navigate;
use postboard_core::{
    forms::RegisterForm,
    multipart::Attachment,
    validate::{Field, FormErrors, check_profile},
};
use web_sys::HtmlInputElement;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let firstname = RwSignal::new(String::new());
    let lastname = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let profile = RwSignal::new_local(None::<PickedFile>);
    let errors = RwSignal::new(FormErrors::new());
    let (pending, set_pending) = signal(false);
    let (error, set_error) = signal::<Option<AppError>>(None);

    let on_profile = move |event: Event| {
        let input = event_target::<HtmlInputElement>(&event);
        let file = picked_files(&input).into_iter().next();
        let meta = file.as_ref().map(Attachment::meta);
        errors.update(|errors| errors.record(Field::Profile, check_profile(meta.as_ref())));
        profile.set(file);
    };

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if pending.get_untracked() {
            return;
        }
        set_error.set(None);

        let form = RegisterForm {
            firstname: firstname.get_untracked(),
            lastname: lastname.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            phone: phone.get_untracked(),
            profile: profile.get_untracked(),
        };
        let outcome = form.validate();
        let valid = outcome.is_empty();
        errors.set(outcome);
        if !valid {
            return;
        }

        set_pending.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match client::register(form).await {
                Ok(()) => navigate(paths::LOGIN, Default::default()),
                Err(err) => {
                    leptos::logging::warn!("registration failed: {err}");
                    set_error.set(Some(err));
                }
            }
            set_pending.set(false);
        });
    };

    view! {
        <form class="max-w-md mx-auto" on:submit=on_submit novalidate>
            <h1 class="mb-6 text-2xl font-semibold text-gray-900">"Create an account"</h1>
            <TextInput label="First name" field=Field::Firstname value=firstname errors=errors />
            <TextInput label="Last name" field=Field::Lastname value=lastname errors=errors />
            <TextInput
                label="Email"
                field=Field::Email
                input_type="email"
                autocomplete="email"
                value=email
                errors=errors
            />
            <TextInput
                label="Password"
                field=Field::Password
                input_type="password"
                autocomplete="new-password"
                value=password
                errors=errors
            />
            <TextInput
                label="Phone"
                field=Field::Phone
                input_type="tel"
                autocomplete="tel"
                value=phone
                errors=errors
            />
            <div class="mb-5">
                <label class="block mb-2 text-sm font-medium text-gray-900" for="profile">
                    "Profile image"
                </label>
                <input
                    id="profile"
                    type="file"
                    accept="image/jpeg,image/jpg,image/png"
                    class="block w-full text-sm text-gray-900"
                    on:change=on_profile
                />
                <FieldError errors=errors field=Field::Profile />
            </div>
            <Button button_type="submit" disabled=pending>
                "Register"
            </Button>
            {move || pending.get().then_some(view! { <div class="mt-4"><Spinner /></div> })}
            {move || {
                error
                    .get()
                    .map(|err| {
                        view! {
                            <div class="mt-4">
                                <Alert kind=AlertKind::Error message=err.to_string() />
                            </div>
                        }
                    })
            }}
        </form>
    }
}
