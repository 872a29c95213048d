use crate::{api::Project, state::list::ListState};
use leptos::*;

fn thumbnail(project: &Project) -> Option<String> {
    project.images.iter().find(|url| !url.trim().is_empty()).cloned()
}

#[component]
pub fn ProjectTable(list: RwSignal<ListState<Project>>, on_delete: Callback<String>) -> impl IntoView {
    let all_selected = create_memo(move |_| list.with(|state| state.all_visible_selected()));
    view! {
        <div class="overflow-x-auto rounded-lg border border-border bg-surface-elevated">
            <table class="min-w-full divide-y divide-border text-sm">
                <thead class="bg-surface-muted text-left text-xs uppercase tracking-wider text-fg-muted">
                    <tr>
                        <th class="px-4 py-3 w-10">
                            <input
                                type="checkbox"
                                aria-label="Select all"
                                prop:checked=move || all_selected.get()
                                on:change=move |_| list.update(|state| state.toggle_all())
                            />
                        </th>
                        <th class="px-4 py-3">"Image"</th>
                        <th class="px-4 py-3">"Title"</th>
                        <th class="px-4 py-3">"Category"</th>
                        <th class="px-4 py-3">"Links"</th>
                        <th class="px-4 py-3 text-right">"Actions"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    <For
                        each=move || list.with(|state| state.visible())
                        key=|project| project.id.clone()
                        children=move |project| {
                            let id = project.id.clone();
                            let toggle_id = id.clone();
                            let selected_id = id.clone();
                            let delete_id = id.clone();
                            let edit_href = format!("/admin/projects/{}", id);
                            view! {
                                <tr class="hover:bg-surface-muted">
                                    <td class="px-4 py-3">
                                        <input
                                            type="checkbox"
                                            aria-label="Select row"
                                            prop:checked=move || list.with(|state| state.is_selected(&selected_id))
                                            on:change=move |_| list.update(|state| state.toggle(&toggle_id))
                                        />
                                    </td>
                                    <td class="px-4 py-3">
                                        {match thumbnail(&project) {
                                            Some(url) => view! {
                                                <img src=url alt=project.title.clone() class="h-12 w-16 rounded object-cover" />
                                            }.into_view(),
                                            None => view! {
                                                <div class="h-12 w-16 rounded bg-surface-muted flex items-center justify-center text-xs text-fg-muted">
                                                    "No Image"
                                                </div>
                                            }.into_view(),
                                        }}
                                    </td>
                                    <td class="px-4 py-3">
                                        <p class="font-medium text-fg">{project.title.clone()}</p>
                                        <p class="text-xs text-fg-muted line-clamp-1">{project.description.clone()}</p>
                                    </td>
                                    <td class="px-4 py-3">
                                        <span class="inline-flex rounded-full bg-surface-muted px-2 py-0.5 text-xs font-medium text-fg">
                                            {project.category.clone()}
                                        </span>
                                    </td>
                                    <td class="px-4 py-3 space-x-2">
                                        {project.live_link.clone().map(|href| view! {
                                            <a href=href target="_blank" rel="noreferrer" class="text-action-primary-bg hover:underline">"Live"</a>
                                        })}
                                        {project.github_link.clone().map(|href| view! {
                                            <a href=href target="_blank" rel="noreferrer" class="text-action-primary-bg hover:underline">"Code"</a>
                                        })}
                                    </td>
                                    <td class="px-4 py-3 text-right space-x-2 whitespace-nowrap">
                                        <a href=edit_href class="text-fg-muted hover:text-fg" aria-label="Edit">
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
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{fixtures::project, ssr::render_to_string};

    #[test]
    fn table_renders_filtered_rows_with_thumbnails() {
        let html = render_to_string(|| {
            let mut state = ListState::default();
            let mut bare = project("p2", "Fitness App");
            bare.images = vec![String::new()];
            state.set_records(vec![project("p1", "Storefront"), bare]);
            let list = create_rw_signal(state);
            view! { <ProjectTable list=list on_delete=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("Storefront"));
        assert!(html.contains("https://img.example.com/1.png"));
        assert!(html.contains("No Image"));
        assert!(html.contains("/admin/projects/p1"));
    }

    #[test]
    fn search_hides_non_matching_rows() {
        let html = render_to_string(|| {
            let mut state = ListState::default();
            state.set_records(vec![project("p1", "Storefront"), project("p2", "Fitness App")]);
            state.query = "fitness".into();
            let list = create_rw_signal(state);
            view! { <ProjectTable list=list on_delete=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("Fitness App"));
        assert!(!html.contains("Storefront"));
    }
}
