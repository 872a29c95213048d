use super::{view_model::ProjectEditorViewModel, PROJECTS_PATH};
use crate::components::{
    common::Button,
    forms::{field_error, TextArea, TextField},
    layout::{LoadingSpinner, PageHeader},
};
use leptos::*;

#[component]
pub fn ProjectEditorPanel(id: Option<String>, on_done: Callback<()>) -> impl IntoView {
    let vm = ProjectEditorViewModel::new(id);
    let form = vm.form;
    let is_editing = vm.is_editing();
    create_effect(move |_| vm.load(on_done));

    let heading = if is_editing { "Edit Project" } else { "New Project" };
    let submit_label = if is_editing { "Save Changes" } else { "Create Project" };
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit(on_done);
    };

    view! {
        <div class="max-w-3xl mx-auto">
            <PageHeader title=heading>
                <a href=PROJECTS_PATH class="text-sm text-fg-muted hover:text-fg">
                    <i class="fas fa-arrow-left mr-1"></i>
                    "Back to projects"
                </a>
            </PageHeader>
            <Show when=move || !vm.loading.get() fallback=|| view! { <LoadingSpinner /> }>
                <form
                    class="space-y-6 rounded-xl border border-border bg-surface-elevated p-6"
                    on:submit=on_submit
                >
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <TextField
                            id="title"
                            label="Project Title"
                            value=form.title
                            placeholder="e.g. E-Commerce Platform"
                            required=true
                            error=field_error(form.errors, "title")
                        />
                        <TextField
                            id="category"
                            label="Category"
                            value=form.category
                            placeholder="e.g. Web Development"
                        />
                    </div>
                    <TextArea
                        id="description"
                        label="Description"
                        value=form.description
                        rows=5
                        placeholder="Detailed description of the project..."
                        required=true
                        error=field_error(form.errors, "description")
                    />
                    <TextField
                        id="tech_stack"
                        label="Tech Stack (comma separated)"
                        value=form.tech_stack
                        placeholder="React, Node.js, Tailwind CSS"
                    />
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <TextField
                            id="live_link"
                            label="Live URL"
                            value=form.live_link
                            placeholder="https://example.com"
                        />
                        <TextField
                            id="github_link"
                            label="GitHub URL"
                            value=form.github_link
                            placeholder="https://github.com/user/repo"
                        />
                    </div>
                    <ImageRows vm=vm />
                    <div class="flex justify-end pt-2">
                        <Button attr:type="submit" loading=vm.saving>
                            {submit_label}
                        </Button>
                    </div>
                </form>
            </Show>
        </div>
    }
}

#[component]
fn ImageRows(vm: ProjectEditorViewModel) -> impl IntoView {
    let form = vm.form;
    let row_count = create_memo(move |_| form.images.with(Vec::len));

    view! {
        <div class="space-y-3">
            <div class="flex items-center justify-between">
                <span class="text-sm font-medium text-fg">"Images (URLs)"</span>
                <button
                    type="button"
                    class="text-sm text-action-primary-bg hover:underline"
                    on:click=move |_| form.add_image()
                >
                    <i class="fas fa-plus mr-1"></i>
                    "Add Image"
                </button>
            </div>
            {move || {
                (0..row_count.get())
                    .map(|index| {
                        view! {
                            <div class="flex gap-2">
                                <input
                                    type="url"
                                    class="block w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                                    placeholder="https://..."
                                    prop:value=move || {
                                        form.images.with(|rows| rows.get(index).cloned().unwrap_or_default())
                                    }
                                    on:input=move |ev| form.set_image(index, event_target_value(&ev))
                                />
                                <Show when=move || { row_count.get() > 1 }>
                                    <button
                                        type="button"
                                        class="rounded-md px-3 text-status-error-text hover:bg-surface-muted"
                                        aria-label="Remove image"
                                        on:click=move |_| form.remove_image(index)
                                    >
                                        <i class="fas fa-times"></i>
                                    </button>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()
            }}
            <p class="text-xs text-fg-muted">"Enter direct image URLs."</p>
        </div>
    }
}
