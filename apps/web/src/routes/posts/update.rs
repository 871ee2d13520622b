use super::images::ImagePicker;
use crate::app_lib::{AppError, PickedFile, api_url};
use crate::components::{Alert, AlertKind, Button, Spinner, TextArea, TextInput};
use crate::features::{auth::RequireAuth, posts::client};
use crate::routes::{IdParams, paths};
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_router::hooks::{use_navigate, use_params};
use postboard_core::{
    endpoints,
    forms::PostUpdate,
    model::Post,
    validate::{Field, FormErrors},
};

#[component]
pub fn UpdatePostPage() -> impl IntoView {
    view! { <RequireAuth><LoadPost /></RequireAuth> }
}

#[component]
fn LoadPost() -> impl IntoView {
    let params = use_params::<IdParams>();
    let post = LocalResource::new(move || {
        let id = params.with(|params| params.as_ref().ok().and_then(|params| params.id));
        async move {
            match id {
                Some(id) => client::get_post(id).await,
                None => Err(AppError::Http {
                    status: 404,
                    message: "Post not found.".to_string(),
                }),
            }
        }
    });

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-semibold text-gray-900">"Update post"</h1>
            <Suspense fallback=move || view! { <Spinner /> }>
                {move || match post.get() {
                    Some(Ok(post)) => view! { <UpdatePostForm post=post /> }.into_any(),
                    Some(Err(err)) => {
                        view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any()
                    }
                    None => ().into_any(),
                }}
            </Suspense>
        </div>
    }
}

/// Prefilled edit form. Existing images toggle between kept and marked for
/// deletion; new images are appended on save.
#[component]
fn UpdatePostForm(post: Post) -> impl IntoView {
    let navigate = use_navigate();
    let post_id = post.id;
    let draft = RwSignal::new(PostUpdate::<String>::from_post(&post));
    let name = RwSignal::new(post.name.clone());
    let description = RwSignal::new(post.description.clone());
    let new_images = RwSignal::new_local(Vec::<PickedFile>::new());
    let errors = RwSignal::new(FormErrors::new());
    let (pending, set_pending) = signal(false);
    let (error, set_error) = signal::<Option<AppError>>(None);

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if pending.get_untracked() {
            return;
        }
        set_error.set(None);

        let form = PostUpdate {
            name: name.get_untracked(),
            description: description.get_untracked(),
            new_images: new_images.get_untracked(),
            delete_images: draft.with_untracked(|draft| draft.delete_images.clone()),
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
            match client::update_post(post_id, form).await {
                Ok(()) => navigate(paths::HOME, Default::default()),
                Err(err) => {
                    leptos::logging::warn!("post update failed: {err}");
                    set_error.set(Some(err));
                }
            }
            set_pending.set(false);
        });
    };

    let existing = post
        .images
        .into_iter()
        .map(|image| {
            let src = api_url(&endpoints::post_image(&image));
            let marked = {
                let image = image.clone();
                move || draft.with(|draft| draft.is_marked(&image))
            };
            let marked_label = marked.clone();
            view! {
                <figure class="w-28">
                    <img
                        src=src
                        class="h-24 w-24 rounded object-cover"
                        class:opacity-40=marked.clone()
                        alt=""
                    />
                    <button
                        type="button"
                        class="mt-1 text-xs text-red-700 hover:underline"
                        on:click=move |_| draft.update(|draft| draft.toggle_delete(&image))
                    >
                        {move || if marked_label() { "Keep" } else { "Delete" }}
                    </button>
                </figure>
            }
        })
        .collect_view();

    view! {
        <form class="max-w-2xl" on:submit=on_submit novalidate>
            <TextInput label="Name" field=Field::PostName value=name errors=errors />
            <TextArea label="Description" field=Field::Description value=description errors=errors />
            <div class="mb-5">
                <span class="block mb-2 text-sm font-medium text-gray-900">"Current images"</span>
                <div class="flex flex-wrap gap-2">{existing}</div>
            </div>
            <ImagePicker label="Add images" files=new_images errors=errors required=false />
            <Button button_type="submit" disabled=pending>
                "Update"
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
