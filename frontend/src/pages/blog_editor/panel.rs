use super::{view_model::BlogEditorViewModel, BLOG_PATH};
use crate::components::{
    common::Button,
    forms::{field_error, CheckboxField, TextArea, TextField},
    layout::{LoadingSpinner, PageHeader},
    rich_text::RichTextEditor,
};
use leptos::*;

#[component]
pub fn BlogEditorPanel(id: Option<String>, on_done: Callback<()>) -> impl IntoView {
    let vm = BlogEditorViewModel::new(id);
    let form = vm.form;
    create_effect(move |_| vm.load(on_done));

    let heading = if vm.is_editing() { "Edit Post" } else { "New Post" };
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit(on_done);
    };

    view! {
        <div class="max-w-5xl mx-auto">
            <PageHeader title=heading>
                <a href=BLOG_PATH class="text-sm text-fg-muted hover:text-fg">
                    <i class="fas fa-arrow-left mr-1"></i>
                    "Back to posts"
                </a>
            </PageHeader>
            <Show when=move || !vm.loading.get() fallback=|| view! { <LoadingSpinner /> }>
                <form class="grid grid-cols-1 gap-8 lg:grid-cols-3" on:submit=on_submit>
                    <div class="space-y-6 lg:col-span-2">
                        <TextField
                            id="title"
                            label="Title"
                            value=form.title
                            placeholder="Enter post title..."
                            required=true
                            error=field_error(form.errors, "title")
                            on_input=Callback::new(move |_| form.title_changed())
                        />
                        <div>
                            <span class="block text-sm font-medium text-fg mb-1">"Content"</span>
                            <RichTextEditor
                                node_ref=vm.editor
                                initial_html=form.content
                                placeholder="Start writing your post..."
                            />
                        </div>
                    </div>
                    <aside class="space-y-6">
                        <section class="space-y-4 rounded-xl border border-border bg-surface-elevated p-4">
                            <h3 class="font-semibold text-fg">"Publishing"</h3>
                            <CheckboxField id="published" label="Publish immediately" checked=form.published />
                            <Button attr:type="submit" class="w-full" loading=vm.saving>
                                <i class="fas fa-save mr-2"></i>
                                "Save"
                            </Button>
                        </section>
                        <section class="space-y-4 rounded-xl border border-border bg-surface-elevated p-4">
                            <h3 class="font-semibold text-fg">"SEO & Metadata"</h3>
                            <TextField
                                id="slug"
                                label="Slug"
                                value=form.slug
                                required=true
                                error=field_error(form.errors, "slug")
                                on_input=Callback::new(move |_| form.slug_edited())
                            />
                            <TextArea
                                id="excerpt"
                                label="Excerpt"
                                value=form.excerpt
                                rows=3
                                placeholder="Short summary for SEO..."
                            />
                            <TextField
                                id="cover_image"
                                label="Cover Image URL"
                                value=form.cover_image
                                placeholder="https://..."
                            />
                            <TextField
                                id="category"
                                label="Category"
                                value=form.category
                                placeholder="e.g. Engineering"
                            />
                        </section>
                    </aside>
                </form>
            </Show>
        </div>
    }
}
