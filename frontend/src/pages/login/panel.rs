use super::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::{ev::SubmitEvent, *};
use leptos_meta::Title;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    view! {
        <LoginForm
            email=vm.email
            password=vm.password
            error=vm.error.into()
            pending=pending.into()
            on_submit=handle_submit
        />
    }
}

/// Route view for `/admin/login`.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <Title text="Sign in | Agency Admin" />
        <LoginPanel />
    }
}
