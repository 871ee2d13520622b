use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, Button, Spinner, TextInput};
use crate::features::auth::{client, state::use_auth};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};
use postboard_core::{forms::LoginForm, validate::{Field, FormErrors}};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let login_action = Action::new_local(move |form: &LoginForm| {
        let form = form.clone();
        async move { client::login(&form).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result.and_then(|token| auth.sign_in(token)) {
                Ok(()) => navigate(paths::HOME, Default::default()),
                Err(err) => {
                    leptos::logging::warn!("login failed: {err}");
                    set_error.set(Some(err));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let outcome = form.validate();
        let valid = outcome.is_empty();
        errors.set(outcome);
        if valid {
            login_action.dispatch(form);
        }
    };

    view! {
        <form class="max-w-sm mx-auto" on:submit=on_submit novalidate>
            <h1 class="mb-6 text-2xl font-semibold text-gray-900">"Sign in"</h1>
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
                autocomplete="current-password"
                value=password
                errors=errors
            />
            <Button button_type="submit" disabled=login_action.pending()>
                "Login"
            </Button>
            <p class="mt-4 text-sm text-gray-500">
                "No account yet? "
                <A href=paths::REGISTER {..} class="text-blue-600 hover:underline">
                    "Register"
                </A>
            </p>
            {move || {
                login_action
                    .pending()
                    .get()
                    .then_some(view! { <div class="mt-4"><Spinner /></div> })
            }}
            {move || {
                error
                    .get()
                    .map(|_| {
                        view! {
                            <div class="mt-4">
                                <Alert
                                    kind=AlertKind::Error
                                    message="Something went wrong, please try again.".to_string()
                                />
                            </div>
                        }
                    })
            }}
        </form>
    }
}
