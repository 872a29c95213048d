use super::{
    repository::{display_count, DashboardCounts},
    view_model::use_dashboard_view_model,
};
use crate::components::layout::PageHeader;
use leptos::*;

#[component]
fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] icon: String,
    value: Signal<String>,
    #[prop(into)] href: String,
) -> impl IntoView {
    view! {
        <a href=href class="block rounded-lg border border-border bg-surface-elevated p-6 shadow-sm hover:shadow-md transition-shadow">
            <div class="flex items-center justify-between">
                <p class="text-sm font-medium text-fg-muted">{label}</p>
                <i class=format!("fas {} text-fg-muted", icon)></i>
            </div>
            <p class="mt-2 text-3xl font-bold text-fg">{move || value.get()}</p>
        </a>
    }
}

#[component]
pub fn DashboardView(counts: Signal<Option<DashboardCounts>>) -> impl IntoView {
    let value = move |pick: fn(&DashboardCounts) -> Option<usize>| {
        Signal::derive(move || {
            counts
                .get()
                .map(|counts| display_count(pick(&counts)))
                .unwrap_or_else(|| "...".to_string())
        })
    };
    view! {
        <div>
            <PageHeader title="Overview" subtitle="Content at a glance" />
            <div class="grid gap-4 sm:grid-cols-3">
                <StatCard label="Projects" icon="fa-briefcase" href="/admin/projects" value=value(|c| c.projects) />
                <StatCard label="Blog Posts" icon="fa-pen-nib" href="/admin/blog" value=value(|c| c.posts) />
                <StatCard label="Published" icon="fa-globe" href="/admin/blog" value=value(|c| c.published_posts) />
            </div>
            <div class="mt-8 flex flex-wrap gap-3">
                <a href="/admin/projects/new" class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover">
                    <i class="fas fa-plus mr-2"></i>"New Project"
                </a>
                <a href="/admin/blog/new" class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg border border-border hover:bg-surface-elevated">
                    <i class="fas fa-plus mr-2"></i>"New Post"
                </a>
            </div>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let counts = vm.counts;
    view! { <DashboardView counts=Signal::derive(move || counts.get()) /> }
}
