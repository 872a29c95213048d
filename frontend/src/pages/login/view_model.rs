use super::utils::validate_credentials;
use crate::{
    api::{use_store, StoreError},
    state::session::{self, use_session, DASHBOARD_PATH},
    utils::navigation,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub login_action: Action<(String, String), Result<(), StoreError>>,
}

impl LoginViewModel {
    /// Validates locally, then signs in. Returns false when nothing was sent.
    pub fn submit(&self) -> bool {
        if self.login_action.pending().get_untracked() {
            return false;
        }
        let email = self.email.get_untracked().trim().to_string();
        let password = self.password.get_untracked();
        if let Err(message) = validate_credentials(&email, &password) {
            self.error.set(Some(message));
            return false;
        }
        self.error.set(None);
        self.login_action.dispatch((email, password));
        true
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let store = use_store();
    let state = use_session().state;
    let error = create_rw_signal(None::<String>);

    let login_store = store.clone();
    let login_action = create_action(move |(email, password): &(String, String)| {
        let store = login_store.clone();
        let email = email.clone();
        let password = password.clone();
        async move { session::sign_in(&store, state, &email, &password).await }
    });

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => navigation::redirect(DASHBOARD_PATH),
                Err(err) => {
                    log::warn!("Sign in failed: {}", err);
                    error.set(Some(err.to_string()));
                }
            }
        }
    });

    create_effect(move |_| {
        let store = store.clone();
        spawn_local(async move {
            if store.get_session().await.is_some() {
                navigation::redirect(DASHBOARD_PATH);
            }
        });
    });

    LoginViewModel {
        email: create_rw_signal(String::new()),
        password: create_rw_signal(String::new()),
        error,
        login_action,
    }
}
