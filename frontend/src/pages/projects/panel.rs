use super::{
    components::{table::ProjectTable, toolbar::ProjectToolbar},
    view_model::use_projects_view_model,
};
use crate::components::{
    confirm_dialog::ConfirmDialog,
    empty_state::EmptyState,
    layout::{LoadingSpinner, PageHeader},
};
use leptos::*;
use web_sys::HtmlInputElement;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let vm = use_projects_view_model();
    create_effect(move |_| vm.reload());

    let list = vm.list;
    let is_loading = create_memo(move |_| list.with(|state| state.loading));
    let is_empty = create_memo(move |_| list.with(|state| state.records.is_empty()));
    let selected_count = create_memo(move |_| list.with(|state| state.selected.len()));
    let migration_count =
        create_memo(move |_| vm.pending_migration.with(|drafts| drafts.as_ref().map(Vec::len)));

    let on_import = Callback::new(move |input: HtmlInputElement| vm.import_from_input(input));
    let on_bulk_delete = Callback::new(move |_| vm.confirm_bulk_delete.set(true));
    let on_delete = Callback::new(move |id: String| vm.pending_delete.set(Some(id)));

    view! {
        <div>
            <PageHeader title="Projects" subtitle="Manage the portfolio shown on the site" />
            <ProjectToolbar
                list=list
                importing=vm.importing.into()
                on_import=on_import
                on_bulk_delete=on_bulk_delete
            />
            {move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else if is_empty.get() {
                    view! {
                        <EmptyState
                            title="No projects yet"
                            description="Create one, import a CSV/JSON file, or migrate the bundled projects."
                            action_href="/admin/projects/new"
                            action_label="Add Project"
                        >
                            <button
                                type="button"
                                class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg border border-border hover:bg-surface-elevated"
                                on:click=move |_| vm.start_migration()
                            >
                                <i class="fas fa-database mr-2"></i>
                                "Migrate Local Data"
                            </button>
                        </EmptyState>
                    }
                    .into_view()
                } else {
                    view! { <ProjectTable list=list on_delete=on_delete /> }.into_view()
                }
            }}
            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.with(Option::is_some))
                title="Delete project?"
                message="This action cannot be undone."
                on_confirm=Callback::new(move |_| vm.delete_confirmed())
                on_cancel=Callback::new(move |_| vm.pending_delete.set(None))
                destructive=true
            />
            <ConfirmDialog
                is_open=vm.confirm_bulk_delete.into()
                title="Delete selected projects?"
                message=Signal::derive(move || {
                    format!("{} projects will be permanently deleted.", selected_count.get())
                })
                on_confirm=Callback::new(move |_| vm.bulk_delete_confirmed())
                on_cancel=Callback::new(move |_| vm.confirm_bulk_delete.set(false))
                destructive=true
            />
            <ConfirmDialog
                is_open=Signal::derive(move || migration_count.get().is_some())
                title="Migrate local data?"
                message=Signal::derive(move || {
                    format!("Found {} projects to import.", migration_count.get().unwrap_or_default())
                })
                confirm_label="Import"
                on_confirm=Callback::new(move |_| vm.migration_confirmed())
                on_cancel=Callback::new(move |_| vm.pending_migration.set(None))
            />
        </div>
    }
}
