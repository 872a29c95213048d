use crate::{
    api::use_store,
    components::layout::LoadingSpinner,
    state::session::{guard_view, load_session, use_session, watch_session, GuardView, RedirectLatch},
    utils::navigation,
};
use leptos::*;

/// Renders `children` only while an authorized session is present.
///
/// Loads the session on mount and follows provider-pushed changes until
/// unmounted; an absent session triggers a single redirect to login.
/// `redirect` replaces the full-page navigation used by default.
#[component]
pub fn RequireSession(
    children: ChildrenFn,
    #[prop(optional)] redirect: Option<Callback<&'static str>>,
) -> impl IntoView {
    let store = use_store();
    let state = use_session().state;

    let subscription = watch_session(&store, state);
    on_cleanup(move || subscription.unsubscribe());

    let loader = store.clone();
    create_effect(move |_| {
        let store = loader.clone();
        spawn_local(async move { load_session(&store, state).await });
    });

    let latch = store_value(RedirectLatch::default());
    create_isomorphic_effect(move |_| {
        let current = state.get();
        if let Some(path) = latch.try_update_value(|latch| latch.observe(&current)).flatten() {
            match redirect {
                Some(redirect) => redirect.call(path),
                None => navigation::redirect(path),
            }
        }
    });

    let view_kind = create_memo(move |_| guard_view(&state.get()));
    move || match view_kind.get() {
        GuardView::Loading => view! { <LoadingSpinner /> }.into_view(),
        GuardView::Protected => children().into_view(),
        GuardView::Nothing => ().into_view(),
    }
}
