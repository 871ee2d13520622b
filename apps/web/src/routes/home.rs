//! Post feed with infinite scroll. Pages of three posts are requested as the
//! reader nears the bottom of the document; the paginator keeps one request in
//! flight and drops responses that arrive after the page was left.

use crate::app_lib::{AppError, api_url};
use crate::components::{Alert, AlertKind, Button, ButtonTone, ConfirmModal, Spinner};
use crate::features::{auth::RequireAuth, posts::client};
use crate::routes::paths;
use leptos::{ev, prelude::*, task::spawn_local};
use leptos_dom::helpers::{WindowListenerHandle, window_event_listener};
use leptos_router::components::A;
use postboard_core::{
    endpoints,
    feed::{FEED_PAGE_SIZE, PageOutcome, Paginator, near_bottom},
    html::plain_text,
    model::{FeedPost, PostId},
};

/// Current scroll position, viewport height and document height.
fn scroll_metrics() -> Option<(f64, f64, f64)> {
    let window = web_sys::window()?;
    let scroll_top = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let height = window.document()?.document_element()?.scroll_height();
    Some((scroll_top, viewport, f64::from(height)))
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <RequireAuth><Feed /></RequireAuth> }
}

#[component]
fn Feed() -> impl IntoView {
    let feed = RwSignal::new(Paginator::<FeedPost>::new(FEED_PAGE_SIZE));
    let (error, set_error) = signal::<Option<AppError>>(None);
    let pending_delete = RwSignal::new(None::<PostId>);
    let scroll_listener: StoredValue<Option<WindowListenerHandle>> = StoredValue::new(None);

    let load_next = move || {
        let Some(request) = feed.try_update(Paginator::begin).flatten() else {
            return;
        };
        spawn_local(async move {
            match client::list_posts(request.page, request.limit).await {
                Ok(posts) => {
                    let outcome = feed.try_update(|feed| feed.complete(request.ticket, posts));
                    if matches!(outcome, Some(PageOutcome::Stale)) {
                        leptos::logging::log!("discarded stale feed page {}", request.page);
                    }
                }
                Err(err) => {
                    feed.try_update(|feed| feed.fail(request.ticket));
                    leptos::logging::warn!("error fetching posts: {err}");
                    set_error.try_set(Some(err));
                }
            }
        });
    };

    load_next();

    let handle = window_event_listener(ev::scroll, move |_| {
        if let Some((scroll_top, viewport, height)) = scroll_metrics()
            && near_bottom(scroll_top, viewport, height)
        {
            load_next();
        }
    });
    scroll_listener.set_value(Some(handle));

    on_cleanup(move || {
        if let Some(mut stored) = scroll_listener.try_write_value()
            && let Some(handle) = stored.take()
        {
            handle.remove();
        }
        feed.try_update(Paginator::cancel);
    });

    let confirm_delete = Callback::new(move |()| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        spawn_local(async move {
            match client::delete_post(id).await {
                Ok(()) => {
                    feed.try_update(|feed| feed.remove(&id));
                }
                Err(err) => {
                    leptos::logging::warn!("error deleting post {id}: {err}");
                    set_error.try_set(Some(err));
                }
            }
        });
    });
    let cancel_delete = Callback::new(move |()| pending_delete.set(None));

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            {move || {
                error
                    .get()
                    .map(|err| view! { <Alert kind=AlertKind::Error message=err.to_string() /> })
            }}
            <For
                each=move || feed.read().items().to_vec()
                key=|item| item.post.id
                children=move |item| {
                    let id = item.post.id;
                    view! {
                        <PostCard
                            item=item
                            on_delete=Callback::new(move |()| pending_delete.set(Some(id)))
                        />
                    }
                }
            />
            {move || feed.read().is_loading().then_some(view! { <div class="text-center"><Spinner /></div> })}
            {move || {
                let feed = feed.read();
                if feed.has_more() {
                    (!feed.is_loading())
                        .then_some(
                            view! {
                                <div class="text-center">
                                    <Button tone=ButtonTone::Plain on_click=Callback::new(move |()| load_next())>
                                        "Load more"
                                    </Button>
                                </div>
                            },
                        )
                        .into_any()
                } else if feed.items().is_empty() {
                    view! { <p class="text-center text-gray-500">"No posts yet."</p> }.into_any()
                } else {
                    ().into_any()
                }
            }}
            <ConfirmModal
                open=Signal::derive(move || pending_delete.get().is_some())
                message="Are you sure you want to delete this post?"
                on_confirm=confirm_delete
                on_cancel=cancel_delete
            />
        </div>
    }
}

#[component]
fn PostCard(item: FeedPost, on_delete: Callback<()>) -> impl IntoView {
    let FeedPost { post, author } = item;
    let author_name = format!("{} {}", author.firstname, author.lastname);
    let avatar = author
        .profile
        .filter(|file| !file.is_empty())
        .map(|file| api_url(&endpoints::profile_image(&file)));
    let description = plain_text(&post.description);
    let edit_href = paths::post_update(post.id);

    view! {
        <article class="rounded-lg border border-gray-200 bg-white p-5 shadow-sm space-y-3">
            <header class="flex items-center gap-3">
                {avatar
                    .map(|src| {
                        view! { <img src=src class="h-10 w-10 rounded-full object-cover" alt="" /> }
                    })}
                <div>
                    <p class="font-medium text-gray-900">{author_name}</p>
                    <p class="text-sm text-gray-500">{author.email}</p>
                </div>
            </header>
            <div class="flex gap-2 overflow-x-auto">
                {post
                    .images
                    .into_iter()
                    .map(|image| {
                        let src = api_url(&endpoints::post_image(&image));
                        view! { <img src=src class="h-48 rounded object-cover" alt=image /> }
                    })
                    .collect_view()}
            </div>
            <h2 class="text-lg font-semibold text-gray-900">{post.name}</h2>
            <p class="text-gray-700 whitespace-pre-line">{description}</p>
            <footer class="flex gap-3">
                <Button tone=ButtonTone::Danger on_click=on_delete>
                    "Delete"
                </Button>
                <A
                    href=edit_href
                    {..}
                    class="text-gray-900 bg-white border border-gray-200 hover:bg-gray-100 font-medium rounded-lg text-sm px-5 py-2.5"
                >
                    "Update"
                </A>
            </footer>
        </article>
    }
}
