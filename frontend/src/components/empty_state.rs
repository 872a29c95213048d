use leptos::*;

/// Placeholder for an empty collection, with an optional call to action.
#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] action_href: Option<String>,
    #[prop(optional, into)] action_label: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let action = action_href.map(|href| {
        let label = action_label.unwrap_or_else(|| "Create".to_string());
        view! {
            <a
                href=href
                class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
            >
                <i class="fas fa-plus mr-2"></i>
                {label}
            </a>
        }
    });
    view! {
        <div class="text-center py-12 px-4 rounded-lg border-2 border-dashed border-border-strong bg-surface-muted">
            <i class="fas fa-folder-open text-3xl text-fg-muted"></i>
            <h3 class="mt-2 text-sm font-semibold text-fg">{title}</h3>
            {description.map(|desc| view! { <p class="mt-1 text-sm text-fg-muted">{desc}</p> })}
            <div class="mt-4 flex justify-center gap-2">
                {action}
                {children.map(|children| children())}
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn empty_state_links_to_create() {
        let html = render_to_string(|| {
            view! {
                <EmptyState
                    title="No projects yet"
                    action_href="/admin/projects/new"
                    action_label="Add Project"
                />
            }
        });
        assert!(html.contains("No projects yet"));
        assert!(html.contains("href=\"/admin/projects/new\""));
        assert!(html.contains("Add Project"));
    }
}
