pub mod panel;
pub mod utils;
pub mod view_model;

use leptos::*;
use leptos_router::{use_navigate, use_params_map};

pub use panel::BlogEditorPanel;

pub const BLOG_PATH: &str = "/admin/blog";

#[component]
pub fn BlogEditorPage() -> impl IntoView {
    let id = use_params_map().with_untracked(|params| params.get("id").cloned());
    let navigate = use_navigate();
    let back = Callback::new(move |_| navigate(BLOG_PATH, Default::default()));
    view! { <BlogEditorPanel id=id on_done=back /> }
}
