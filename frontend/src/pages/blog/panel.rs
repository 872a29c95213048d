use super::{
    components::{BlogToolbar, PostList},
    view_model::use_blog_view_model,
};
use crate::components::{
    confirm_dialog::ConfirmDialog,
    empty_state::EmptyState,
    layout::{LoadingSpinner, PageHeader},
};
use leptos::*;

#[component]
pub fn BlogPage() -> impl IntoView {
    let vm = use_blog_view_model();
    create_effect(move |_| vm.reload());

    let list = vm.list;
    let is_loading = create_memo(move |_| list.with(|state| state.loading));
    let is_empty = create_memo(move |_| list.with(|state| state.records.is_empty()));
    let selected_count = create_memo(move |_| list.with(|state| state.selected.len()));
    let on_delete = Callback::new(move |id: String| vm.pending_delete.set(Some(id)));

    view! {
        <div>
            <PageHeader title="Blog Posts" />
            <BlogToolbar list=list on_bulk_delete=Callback::new(move |_| vm.confirm_bulk_delete.set(true)) />
            {move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else if is_empty.get() {
                    view! {
                        <EmptyState
                            title="No blog posts found."
                            action_href="/admin/blog/new"
                            action_label="Write your first post"
                        />
                    }
                    .into_view()
                } else {
                    view! { <PostList list=list on_delete=on_delete /> }.into_view()
                }
            }}
            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.with(Option::is_some))
                title="Delete post?"
                message="Are you sure you want to delete this post?"
                on_confirm=Callback::new(move |_| vm.delete_confirmed())
                on_cancel=Callback::new(move |_| vm.pending_delete.set(None))
                destructive=true
            />
            <ConfirmDialog
                is_open=vm.confirm_bulk_delete.into()
                title="Delete selected posts?"
                message=Signal::derive(move || {
                    format!("{} posts will be permanently deleted.", selected_count.get())
                })
                on_confirm=Callback::new(move |_| vm.bulk_delete_confirmed())
                on_cancel=Callback::new(move |_| vm.confirm_bulk_delete.set(false))
                destructive=true
            />
        </div>
    }
}
