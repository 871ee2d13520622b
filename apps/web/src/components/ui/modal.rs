use crate::components::ui::{Button, ButtonTone};
use leptos::prelude::*;

/// Yes/no confirmation dialog shown while `open` is true.
#[component]
pub fn ConfirmModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] message: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let message = StoredValue::new(message);

    view! {
        <Show when=move || open.get()>
            <div
                class="fixed inset-0 z-50 flex items-center justify-center bg-gray-900/50"
                role="dialog"
                aria-modal="true"
            >
                <div class="w-full max-w-sm rounded-lg bg-white p-6 shadow-lg space-y-4">
                    <p class="text-gray-900">{message.get_value()}</p>
                    <div class="flex justify-end gap-3">
                        <Button tone=ButtonTone::Plain on_click=on_cancel>
                            "Cancel"
                        </Button>
                        <Button tone=ButtonTone::Danger on_click=on_confirm>
                            "Delete"
                        </Button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
