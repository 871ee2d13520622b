use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, Button, Spinner, TextInput};
use crate::features::auth::{RequireAuth, client, state::use_auth};
use leptos::{ev::SubmitEvent, prelude::*};
use postboard_core::{
    forms::ChangePassword,
    validate::{Field, FormErrors},
};

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    view! { <RequireAuth><ChangePasswordForm /></RequireAuth> }
}

#[component]
fn ChangePasswordForm() -> impl IntoView {
    let auth = use_auth();
    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::new());
    let (notice, set_notice) = signal::<Option<Result<String, AppError>>>(None);

    let current = move || ChangePassword {
        old_password: old_password.get_untracked(),
        new_password: new_password.get_untracked(),
        confirm_password: confirm_password.get_untracked(),
    };

    // The confirmation is checked against the new password as typed so far.
    let check_confirmation = Callback::new(move |confirm_password: String| {
        ChangePassword {
            confirm_password,
            ..current()
        }
        .check_confirmation()
    });

    let change_action = Action::new_local(move |form: &ChangePassword| {
        let form = form.clone();
        async move {
            let id = auth.user_id()?;
            client::change_password(id, &form).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = change_action.value().get() {
            match &result {
                Ok(_) => {
                    old_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                }
                Err(err) => leptos::logging::warn!("password change failed: {err}"),
            }
            set_notice.set(Some(result));
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_notice.set(None);

        let form = current();
        let outcome = form.validate();
        let valid = outcome.is_empty();
        errors.set(outcome);
        if valid {
            change_action.dispatch(form);
        }
    };

    view! {
        <form class="max-w-sm" on:submit=on_submit novalidate>
            <h1 class="mb-6 text-2xl font-semibold text-gray-900">"Change password"</h1>
            <TextInput
                label="Old password"
                field=Field::OldPassword
                input_type="password"
                autocomplete="current-password"
                value=old_password
                errors=errors
            />
            <TextInput
                label="New password"
                field=Field::NewPassword
                input_type="password"
                autocomplete="new-password"
                value=new_password
                errors=errors
            />
            <TextInput
                label="Confirm password"
                field=Field::ConfirmPassword
                input_type="password"
                autocomplete="new-password"
                value=confirm_password
                errors=errors
                check=check_confirmation
            />
            <Button button_type="submit" disabled=change_action.pending()>
                "Change password"
            </Button>
            {move || {
                change_action
                    .pending()
                    .get()
                    .then_some(view! { <div class="mt-4"><Spinner /></div> })
            }}
            {move || {
                notice
                    .get()
                    .map(|result| {
                        let (kind, message) = match result {
                            Ok(message) => (AlertKind::Success, message),
                            Err(err) => (AlertKind::Error, err.to_string()),
                        };
                        view! {
                            <div class="mt-4">
                                <Alert kind=kind message=message />
                            </div>
                        }
                    })
            }}
        </form>
    }
}
