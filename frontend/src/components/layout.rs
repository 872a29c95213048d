use crate::{
    state::session::use_sign_out_action,
    utils::navigation::{self, section_for_path, AdminSection},
};
use leptos::*;
use leptos_router::{use_location, Outlet};

const NAV_ITEMS: &[(AdminSection, &str, &str, &str)] = &[
    (AdminSection::Overview, "/admin/dashboard", "Overview", "fa-gauge"),
    (AdminSection::Projects, "/admin/projects", "Projects", "fa-briefcase"),
    (AdminSection::Blog, "/admin/blog", "Blog", "fa-pen-nib"),
];

/// Route view for everything under `/admin` once signed in.
#[component]
pub fn AdminLayout() -> impl IntoView {
    let location = use_location();
    let current_path = Signal::derive(move || location.pathname.get());
    view! {
        <AdminShell current_path=current_path>
            <Outlet />
        </AdminShell>
    }
}

#[component]
pub fn AdminShell(
    #[prop(into)] current_path: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    let logout_action = use_sign_out_action();
    let logout_pending = logout_action.pending();
    create_effect(move |_| {
        if let Some(next) = logout_action.value().get() {
            navigation::redirect(next);
        }
    });
    let active = create_memo(move |_| section_for_path(&current_path.get()));

    view! {
        <div class="min-h-screen flex bg-surface">
            <aside class="w-64 shrink-0 border-r border-border bg-surface-elevated flex flex-col">
                <div class="h-16 flex items-center px-6 border-b border-border">
                    <span class="text-lg font-semibold text-fg">"Agency Admin"</span>
                </div>
                <nav class="flex-1 px-3 py-4 space-y-1">
                    {NAV_ITEMS
                        .iter()
                        .map(|(section, href, label, icon)| {
                            let section = *section;
                            view! {
                                <a
                                    href=*href
                                    class=move || {
                                        if active.get() == Some(section) {
                                            "flex items-center gap-3 rounded-md px-3 py-2 text-sm font-medium bg-action-primary-bg text-action-primary-text"
                                        } else {
                                            "flex items-center gap-3 rounded-md px-3 py-2 text-sm font-medium text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                                        }
                                    }
                                    aria-current=move || (active.get() == Some(section)).then_some("page")
                                >
                                    <i class=format!("fas {}", icon)></i>
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="px-3 py-4 border-t border-border">
                    <button
                        type="button"
                        class="w-full flex items-center gap-3 rounded-md px-3 py-2 text-sm font-medium text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover disabled:opacity-50"
                        disabled=move || logout_pending.get()
                        on:click=move |_| logout_action.dispatch(())
                    >
                        <i class="fas fa-right-from-bracket"></i>
                        "Logout"
                    </button>
                </div>
            </aside>
            <main class="flex-1 overflow-y-auto px-8 py-6">{children()}</main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

/// Title row shared by the admin pages.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="mb-6 flex flex-wrap items-center justify-between gap-4">
            <div>
                <h1 class="text-2xl font-bold text-fg">{title}</h1>
                {subtitle.map(|text| view! { <p class="mt-1 text-sm text-fg-muted">{text}</p> })}
            </div>
            <div class="flex items-center gap-2">{children.map(|children| children())}</div>
        </div>
    }
}
