use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::StoreHandle,
    components::{guard::RequireSession, layout::AdminLayout, toaster::Toaster},
    pages::{
        blog::BlogPage, blog_editor::BlogEditorPage, dashboard::DashboardPage, login::LoginPage,
        project_editor::ProjectEditorPage, projects::ProjectsPage,
    },
    state::{
        session::{SessionProvider, DASHBOARD_PATH},
        toast::provide_toasts,
    },
};

pub fn mount_app(store: StoreHandle) {
    mount_to_body(move || app_root(store));
}

pub fn app_root(store: StoreHandle) -> impl IntoView {
    provide_meta_context();
    provide_context(store);
    provide_toasts();
    view! {
        <Title text="Agency Admin" />
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path="/" view=ToDashboard />
                    <Route path="/admin/login" view=LoginPage />
                    <Route path="/admin" view=ProtectedAdmin>
                        <Route path="" view=ToDashboard />
                        <Route path="dashboard" view=DashboardPage />
                        <Route path="projects" view=ProjectsPage />
                        <Route path="projects/new" view=ProjectEditorPage />
                        <Route path="projects/:id" view=ProjectEditorPage />
                        <Route path="blog" view=BlogPage />
                        <Route path="blog/new" view=BlogEditorPage />
                        <Route path="blog/:id" view=BlogEditorPage />
                    </Route>
                </Routes>
            </Router>
            <Toaster />
        </SessionProvider>
    }
}

#[component]
fn ToDashboard() -> impl IntoView {
    view! { <Redirect path=DASHBOARD_PATH /> }
}

#[component]
fn ProtectedAdmin() -> impl IntoView {
    view! { <RequireSession><AdminLayout /></RequireSession> }
}
