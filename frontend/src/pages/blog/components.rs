use super::view_model::{format_created, status_label};
use crate::{api::Post, components::forms::SearchInput, state::list::ListState};
use leptos::*;

#[component]
pub fn BlogToolbar(list: RwSignal<ListState<Post>>, on_bulk_delete: Callback<()>) -> impl IntoView {
    let selected_count = create_memo(move |_| list.with(|state| state.selected.len()));
    let all_selected = create_memo(move |_| list.with(|state| state.all_visible_selected()));
    view! {
        <div class="mb-4 flex flex-wrap items-center justify-between gap-3">
            <div class="flex items-center gap-3">
                <input
                    type="checkbox"
                    aria-label="Select all"
                    prop:checked=move || all_selected.get()
                    on:change=move |_| list.update(|state| state.toggle_all())
                />
                <SearchInput
                    value=Signal::derive(move || list.with(|state| state.query.clone()))
                    on_input=Callback::new(move |query: String| list.update(|state| state.query = query))
                    placeholder="Search posts..."
                />
            </div>
            <div class="flex items-center gap-2">
                <Show when=move || { selected_count.get() > 0 }>
                    <button
                        type="button"
                        class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover"
                        on:click=move |_| on_bulk_delete.call(())
                    >
                        <i class="fas fa-trash mr-2"></i>
                        {move || format!("Delete ({})", selected_count.get())}
                    </button>
                </Show>
                <a
                    href="/admin/blog/new"
                    class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                >
                    <i class="fas fa-plus mr-2"></i>
                    "Write New Post"
                </a>
            </div>
        </div>
    }
}

#[component]
pub fn PostList(list: RwSignal<ListState<Post>>, on_delete: Callback<String>) -> impl IntoView {
    view! {
        <ul class="grid gap-4">
            <For
                each=move || list.with(|state| state.visible())
                key=|post| post.id.clone()
                children=move |post| view! { <PostRow post=post list=list on_delete=on_delete /> }
            />
        </ul>
    }
}

#[component]
fn PostRow(post: Post, list: RwSignal<ListState<Post>>, on_delete: Callback<String>) -> impl IntoView {
    let id = post.id.clone();
    let selected_id = id.clone();
    let toggle_id = id.clone();
    let delete_id = id.clone();
    let badge = if post.published {
        "bg-status-success-bg text-status-success-text"
    } else {
        "bg-status-warning-bg text-status-warning-text"
    };

    view! {
        <li class="flex items-center justify-between gap-4 rounded-xl border border-border bg-surface-elevated p-4">
            <div class="flex items-center gap-4">
                <input
                    type="checkbox"
                    aria-label="Select row"
                    prop:checked=move || list.with(|state| state.is_selected(&selected_id))
                    on:change=move |_| list.update(|state| state.toggle(&toggle_id))
                />
                {match post.cover_image.clone() {
                    Some(url) => view! {
                        <img src=url alt=post.title.clone() class="h-16 w-24 rounded-md object-cover" />
                    }.into_view(),
                    None => view! {
                        <div class="h-16 w-24 rounded-md bg-surface-muted flex items-center justify-center text-xs text-fg-muted">
                            "No Cover"
                        </div>
                    }.into_view(),
                }}
                <div>
                    <h3 class="text-lg font-semibold text-fg">{post.title.clone()}</h3>
                    <div class="flex flex-wrap items-center gap-2 text-sm text-fg-muted">
                        <span class=format!("rounded px-2 py-0.5 {}", badge)>{status_label(post.published)}</span>
                        <span class="font-mono">{format!("/{}", post.slug)}</span>
                        <span>{format_created(post.created_at)}</span>
                    </div>
                </div>
            </div>
            <div class="flex items-center gap-2">
                <a href=format!("/admin/blog/{}", id) class="text-fg-muted hover:text-fg" aria-label="Edit">
                    <i class="fas fa-pen"></i>
                </a>
                <button
                    type="button"
                    class="text-status-error-text hover:opacity-80"
                    aria-label="Delete"
                    on:click=move |_| on_delete.call(delete_id.clone())
                >
                    <i class="fas fa-trash"></i>
                </button>
            </div>
        </li>
    }
}
