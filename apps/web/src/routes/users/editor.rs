use crate::app_lib::{AppError, PickedFile, api_url, files::picked_files};
use crate::components::{Alert, AlertKind, Button, FieldError, Spinner, TextInput};
use crate::features::users::client;
use leptos::{
    ev::{Event, SubmitEvent},
    prelude::*,
    task::spawn_local,
};
use postboard_core::{
    endpoints,
    forms::ProfileUpdate,
    model::User,
    multipart::Attachment,
    validate::{Field, FormErrors, Violation, check_profile, check_text},
};
use web_sys::HtmlInputElement;

/// Edit form for one user, shared by the profile page and the users table.
/// An empty password keeps the current one. `saved` flips to true after a
/// successful update and back to false on the next submit.
#[component]
pub fn ProfileEditor(user: User, saved: RwSignal<bool>) -> impl IntoView {
    let initial = ProfileUpdate::<PickedFile>::from_user(&user);
    let firstname = RwSignal::new(initial.firstname);
    let lastname = RwSignal::new(initial.lastname);
    let email = RwSignal::new(initial.email);
    let phone = RwSignal::new(initial.phone);
    let password = RwSignal::new(String::new());
    let profile = RwSignal::new_local(None::<PickedFile>);
    let errors = RwSignal::new(FormErrors::new());
    let (pending, set_pending) = signal(false);
    let (error, set_error) = signal::<Option<AppError>>(None);

    let user_id = user.id;
    let avatar = user
        .profile_image
        .as_deref()
        .filter(|file| !file.is_empty())
        .map(|file| api_url(&endpoints::profile_image(file)));

    let optional_password = Callback::new(|value: String| {
        if value.is_empty() {
            Ok::<(), Violation>(())
        } else {
            check_text(Field::Password, &value)
        }
    });

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
        saved.set(false);

        let password = password.get_untracked();
        let form = ProfileUpdate {
            firstname: firstname.get_untracked(),
            lastname: lastname.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            password: (!password.is_empty()).then_some(password),
            profile: profile.get_untracked(),
        };
        let outcome = form.validate();
        let valid = outcome.is_empty();
        errors.set(outcome);
        if !valid {
            return;
        }

        set_pending.set(true);
        spawn_local(async move {
            match client::update_user(user_id, form).await {
                Ok(()) => saved.set(true),
                Err(err) => {
                    leptos::logging::warn!("profile update failed: {err}");
                    set_error.set(Some(err));
                }
            }
            set_pending.set(false);
        });
    };

    view! {
        <form class="max-w-md" on:submit=on_submit novalidate>
            {avatar.map(|src| view! {
                <img src=src class="mb-6 h-20 w-20 rounded-full object-cover" alt="Profile image" />
            })}
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
                label="Phone"
                field=Field::Phone
                input_type="tel"
                autocomplete="tel"
                value=phone
                errors=errors
            />
            <TextInput
                label="New password (leave empty to keep)"
                field=Field::Password
                input_type="password"
                autocomplete="new-password"
                value=password
                errors=errors
                check=optional_password
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
                "Save"
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
