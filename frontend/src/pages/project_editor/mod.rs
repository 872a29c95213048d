pub mod panel;
pub mod utils;
pub mod view_model;

use leptos::*;
use leptos_router::{use_navigate, use_params_map};

pub use panel::ProjectEditorPanel;

pub const PROJECTS_PATH: &str = "/admin/projects";

/// Route view for `/admin/projects/new` and `/admin/projects/:id`.
#[component]
pub fn ProjectEditorPage() -> impl IntoView {
    let id = use_params_map().with_untracked(|params| params.get("id").cloned());
    let navigate = use_navigate();
    let back = Callback::new(move |_| navigate(PROJECTS_PATH, Default::default()));
    view! { <ProjectEditorPanel id=id on_done=back /> }
}
