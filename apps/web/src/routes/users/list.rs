//! Users table with numbered pages of three.

use crate::app_lib::api_url;
use crate::components::{Alert, AlertKind, Spinner};
use crate::features::{auth::RequireAuth, users::client};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;
use postboard_core::{
    endpoints,
    pager::{USERS_PAGE_SIZE, page_numbers},
};

#[component]
pub fn UsersListPage() -> impl IntoView {
    view! { <RequireAuth><UsersTable /></RequireAuth> }
}

#[component]
fn UsersTable() -> impl IntoView {
    let page = RwSignal::new(1_u32);
    let users = LocalResource::new(move || {
        let page = page.get();
        async move { client::list_users(page).await }
    });

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-semibold text-gray-900">"Users"</h1>
            <div class="overflow-hidden bg-white shadow-sm border border-gray-200 rounded-lg">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">""</th>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Name"</th>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Email"</th>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Phone"</th>
                            <th scope="col" class="px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200">
                        <Suspense fallback=move || view! {
                            <tr>
                                <td colspan="5" class="px-6 py-12 text-center"><Spinner /></td>
                            </tr>
                        }>
                            {move || match users.get() {
                                Some(Ok(listing)) if listing.users.is_empty() => {
                                    view! {
                                        <tr>
                                            <td colspan="5" class="px-6 py-12 text-center text-sm text-gray-500">
                                                "No users found."
                                            </td>
                                        </tr>
                                    }
                                        .into_any()
                                }
                                Some(Ok(listing)) => {
                                    listing
                                        .users
                                        .into_iter()
                                        .map(|user| {
                                            let avatar = user
                                                .profile_image
                                                .as_deref()
                                                .filter(|file| !file.is_empty())
                                                .map(|file| api_url(&endpoints::profile_image(file)));
                                            view! {
                                                <tr class="hover:bg-gray-50">
                                                    <td class="px-6 py-4">
                                                        {avatar.map(|src| view! {
                                                            <img src=src class="h-8 w-8 rounded-full object-cover" alt="" />
                                                        })}
                                                    </td>
                                                    <td class="px-6 py-4 text-sm text-gray-900">{user.full_name()}</td>
                                                    <td class="px-6 py-4 text-sm text-gray-500">{user.email.clone()}</td>
                                                    <td class="px-6 py-4 text-sm text-gray-500">{user.phone.clone()}</td>
                                                    <td class="px-6 py-4 text-right text-sm font-medium">
                                                        <A href=paths::user_edit(user.id) {..} class="text-blue-600 hover:text-blue-800">
                                                            "Edit"
                                                        </A>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                }
                                Some(Err(err)) => {
                                    view! {
                                        <tr>
                                            <td colspan="5" class="px-6 py-4">
                                                <Alert kind=AlertKind::Error message=err.to_string() />
                                            </td>
                                        </tr>
                                    }
                                        .into_any()
                                }
                                None => ().into_any(),
                            }}
                        </Suspense>
                    </tbody>
                </table>
            </div>
            <nav class="flex gap-2" aria-label="Pages">
                {move || {
                    let total = users
                        .get()
                        .and_then(Result::ok)
                        .map_or(0, |listing| listing.total_users);
                    page_numbers(total, USERS_PAGE_SIZE)
                        .map(|number| {
                            view! {
                                <button
                                    type="button"
                                    class="px-3 py-1 rounded border border-gray-300 text-sm"
                                    class:bg-blue-700=move || page.get() == number
                                    class:text-white=move || page.get() == number
                                    on:click=move |_| page.set(number)
                                >
                                    {number}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </nav>
        </div>
    }
}
