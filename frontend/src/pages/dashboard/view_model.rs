use super::repository::{self, DashboardCounts};
use crate::api::use_store;
use leptos::*;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub counts: Resource<(), DashboardCounts>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let store = use_store();
        let counts = create_local_resource(
            || (),
            move |_| repository::fetch_counts(store.clone()),
        );
        Self { counts }
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    DashboardViewModel::new()
}
