use leptos::*;
use std::rc::Rc;

use crate::api::{use_store, Session, StoreError, StoreHandle, Subscription};

pub const LOGIN_PATH: &str = "/admin/login";
pub const DASHBOARD_PATH: &str = "/admin/dashboard";

/// Lifecycle of the admin session as seen by the route tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Pending,
    Authorized(Session),
    Unauthorized,
}

impl SessionState {
    pub fn from_session(session: Option<Session>) -> Self {
        match session {
            Some(session) => SessionState::Authorized(session),
            None => SessionState::Unauthorized,
        }
    }
}

/// Session container shared through context.
#[derive(Debug, Clone, Copy)]
pub struct SessionContext {
    pub state: RwSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(SessionState::Pending),
        }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context(SessionContext::new());
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_default()
}

/// Asks the store for the current session and records the answer.
pub async fn load_session(store: &StoreHandle, state: RwSignal<SessionState>) {
    let session = store.get_session().await;
    let _ = state.try_set(SessionState::from_session(session));
}

/// Mirrors provider-pushed session changes into `state` until the returned
/// subscription is dropped or unsubscribed.
pub fn watch_session(store: &StoreHandle, state: RwSignal<SessionState>) -> Subscription {
    store.on_session_change(Rc::new(move |event, session| {
        log::debug!("Session change: {:?}", event);
        let _ = state.try_set(SessionState::from_session(session.cloned()));
    }))
}

pub async fn sign_in(
    store: &StoreHandle,
    state: RwSignal<SessionState>,
    email: &str,
    password: &str,
) -> Result<(), StoreError> {
    let session = store.sign_in_with_password(email, password).await?;
    let _ = state.try_set(SessionState::Authorized(session));
    Ok(())
}

/// Signs out and returns the path to continue to. The local state always
/// ends up unauthorized and the caller always proceeds to the login page.
pub async fn sign_out(store: &StoreHandle, state: RwSignal<SessionState>) -> &'static str {
    if let Err(err) = store.sign_out().await {
        log::error!("Error signing out: {}", err);
    }
    let _ = state.try_set(SessionState::Unauthorized);
    LOGIN_PATH
}

pub fn use_sign_out_action() -> Action<(), &'static str> {
    let store = use_store();
    let state = use_session().state;
    create_action(move |_: &()| {
        let store = store.clone();
        async move { sign_out(&store, state).await }
    })
}

/// What the guard shows for a given session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardView {
    Loading,
    Protected,
    Nothing,
}

pub fn guard_view(state: &SessionState) -> GuardView {
    match state {
        SessionState::Pending => GuardView::Loading,
        SessionState::Authorized(_) => GuardView::Protected,
        SessionState::Unauthorized => GuardView::Nothing,
    }
}

/// Fires the login redirect at most once per guard instance.
#[derive(Debug, Default)]
pub struct RedirectLatch {
    fired: bool,
}

impl RedirectLatch {
    pub fn observe(&mut self, state: &SessionState) -> Option<&'static str> {
        if self.fired || !matches!(state, SessionState::Unauthorized) {
            return None;
        }
        self.fired = true;
        Some(LOGIN_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::test_session;

    #[test]
    fn guard_shows_spinner_until_resolved() {
        assert_eq!(guard_view(&SessionState::Pending), GuardView::Loading);
        assert_eq!(guard_view(&SessionState::Unauthorized), GuardView::Nothing);
        assert_eq!(
            guard_view(&SessionState::Authorized(test_session())),
            GuardView::Protected
        );
    }

    #[test]
    fn redirect_latch_fires_once() {
        let mut latch = RedirectLatch::default();
        assert_eq!(latch.observe(&SessionState::Pending), None);
        assert_eq!(latch.observe(&SessionState::Unauthorized), Some(LOGIN_PATH));
        assert_eq!(latch.observe(&SessionState::Unauthorized), None);
    }

    #[test]
    fn redirect_latch_ignores_authorized_state() {
        let mut latch = RedirectLatch::default();
        assert_eq!(
            latch.observe(&SessionState::Authorized(test_session())),
            None
        );
        assert_eq!(latch.observe(&SessionState::Unauthorized), Some(LOGIN_PATH));
    }
}
