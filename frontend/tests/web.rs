//! Browser-only checks; run with `wasm-pack test --headless --chrome frontend`.
#![cfg(target_arch = "wasm32")]

use agency_admin::{
    api::{Session, SessionUser},
    utils::storage,
};
use chrono::{Duration, Utc};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn session() -> Session {
    Session {
        access_token: "access".into(),
        refresh_token: Some("refresh".into()),
        expires_at: Utc::now() + Duration::hours(1),
        user: SessionUser {
            id: "user-1".into(),
            email: Some("admin@example.com".into()),
        },
    }
}

#[wasm_bindgen_test]
fn session_survives_a_reload_through_local_storage() {
    storage::clear_session();
    assert_eq!(storage::load_session(), None);

    let stored = session();
    storage::save_session(&stored);
    assert_eq!(storage::load_session(), Some(stored));

    storage::clear_session();
    assert_eq!(storage::load_session(), None);
}

#[wasm_bindgen_test]
fn unreadable_session_is_discarded() {
    let storage_area = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .expect("localStorage");
    storage_area
        .set_item("agency-admin.session", "{not json")
        .expect("write");

    assert_eq!(storage::load_session(), None);
    assert_eq!(storage_area.get_item("agency-admin.session").ok().flatten(), None);
}

#[wasm_bindgen_test]
async fn unconfigured_store_reports_instead_of_panicking() {
    let store = agency_admin::config::build_store(&agency_admin::config::RuntimeConfig::default());
    assert!(store.get_session().await.is_none());
    let query = agency_admin::api::Query::new(agency_admin::api::Collection::Posts);
    assert_eq!(
        store.select(&query).await,
        Err(agency_admin::api::StoreError::NotConfigured)
    );
}
