use crate::api::test_support::MemoryStore;
use leptos::*;

use super::fixtures::provide_page_context;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Server-renders a view. Resources are not loaded, so nothing reaches a
/// store while rendering.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Renders a page with the store, session and toast contexts it expects.
pub fn render_page<F, N>(store: &MemoryStore, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let store = store.clone();
    render_to_string(move || {
        provide_page_context(&store);
        view()
    })
}
