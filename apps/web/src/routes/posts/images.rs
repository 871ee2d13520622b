use crate::app_lib::{
    PickedFile,
    files::{picked_files, preview_url, revoke_preview},
};
use crate::components::FieldError;
use leptos::{ev::Event, prelude::*, reactive::owner::LocalStorage};
use postboard_core::{
    multipart::{Attachment, FileMeta},
    validate::{Field, FormErrors, check_post_images},
};
use web_sys::HtmlInputElement;

/// Multiple image picker with object-URL previews. Previews are revoked when
/// the selection changes or the picker unmounts.
#[component]
pub fn ImagePicker(
    label: &'static str,
    files: RwSignal<Vec<PickedFile>, LocalStorage>,
    errors: RwSignal<FormErrors>,
    required: bool,
) -> impl IntoView {
    let previews = RwSignal::new(Vec::<String>::new());

    let on_change = move |event: Event| {
        let input = event_target::<HtmlInputElement>(&event);
        let picked = picked_files(&input);
        let metas: Vec<FileMeta> = picked.iter().map(Attachment::meta).collect();
        errors.update(|errors| {
            errors.record(Field::PostImages, check_post_images(&metas, required));
        });

        previews.update(|previews| {
            previews.iter().for_each(|url| revoke_preview(url));
            *previews = picked.iter().filter_map(preview_url).collect();
        });
        files.set(picked);
    };

    on_cleanup(move || {
        previews.with_untracked(|previews| previews.iter().for_each(|url| revoke_preview(url)));
    });

    view! {
        <div class="mb-5">
            <label class="block mb-2 text-sm font-medium text-gray-900" for="postImgs">
                {label}
            </label>
            <input
                id="postImgs"
                type="file"
                accept="image/*"
                multiple
                class="block w-full text-sm text-gray-900"
                on:change=on_change
            />
            <FieldError errors=errors field=Field::PostImages />
            <div class="mt-3 flex flex-wrap gap-2">
                {move || {
                    previews
                        .get()
                        .into_iter()
                        .map(|src| view! { <img src=src class="h-24 w-24 rounded object-cover" alt="" /> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
