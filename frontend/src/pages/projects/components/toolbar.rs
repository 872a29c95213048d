use crate::{api::Project, components::forms::SearchInput, state::list::ListState};
use leptos::*;
use web_sys::HtmlInputElement;

#[component]
pub fn ProjectToolbar(
    list: RwSignal<ListState<Project>>,
    importing: Signal<bool>,
    on_import: Callback<HtmlInputElement>,
    on_bulk_delete: Callback<()>,
) -> impl IntoView {
    let selected_count = create_memo(move |_| list.with(|state| state.selected.len()));
    view! {
        <div class="mb-4 flex flex-wrap items-center justify-between gap-3">
            <SearchInput
                value=Signal::derive(move || list.with(|state| state.query.clone()))
                on_input=Callback::new(move |query: String| list.update(|state| state.query = query))
                placeholder="Search projects..."
            />
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
                <label class="inline-flex cursor-pointer items-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg border border-border hover:bg-surface-elevated">
                    <i class="fas fa-file-import mr-2"></i>
                    {move || if importing.get() { "Importing..." } else { "Import CSV/JSON" }}
                    <input
                        type="file"
                        accept=".csv,.json"
                        class="hidden"
                        disabled=move || importing.get()
                        on:change=move |ev| on_import.call(event_target::<HtmlInputElement>(&ev))
                    />
                </label>
                <a
                    href="/admin/projects/new"
                    class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                >
                    <i class="fas fa-plus mr-2"></i>
                    "New Project"
                </a>
            </div>
        </div>
    }
}
