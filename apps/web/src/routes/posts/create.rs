use super::images::ImagePicker;
use crate::app_lib::{AppError, PickedFile};
use crate::components::{Alert, AlertKind, Button, Spinner, TextArea, TextInput};
use crate::features::{auth::RequireAuth, posts::client};
use crate::routes::paths;
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_router::hooks::use_navigate;
use postboard_core::{
    forms::NewPost,
    validate::{Field, FormErrors},
};

#[component]
pub fn NewPostPage() -> impl IntoView {
    view! { <RequireAuth><NewPostForm /></RequireAuth> }
}

#[component]
fn NewPostForm() -> impl IntoView {
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let images = RwSignal::new_local(Vec::<PickedFile>::new());
    let errors = RwSignal::new(FormErrors::new());
    let (pending, set_pending) = signal(false);
    let (error, set_error) = signal::<Option<AppError>>(None);

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if pending.get_untracked() {
            return;
        }
        set_error.set(None);

        let form = NewPost {
            name: name.get_untracked(),
            description: description.get_untracked(),
            images: images.get_untracked(),
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
            match client::create_post(form).await {
                Ok(()) => navigate(paths::HOME, Default::default()),
                Err(err) => {
                    leptos::logging::warn!("post creation failed: {err}");
                    set_error.set(Some(err));
                }
            }
            set_pending.set(false);
        });
    };

    view! {
        <form class="max-w-2xl" on:submit=on_submit novalidate>
            <h1 class="mb-6 text-2xl font-semibold text-gray-900">"New post"</h1>
            <TextInput label="Name" field=Field::PostName value=name errors=errors />
            <TextArea label="Description" field=Field::Description value=description errors=errors />
            <ImagePicker label="Images" files=images errors=errors required=true />
            <Button button_type="submit" disabled=pending>
                "Create"
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
