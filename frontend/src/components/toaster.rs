use crate::state::toast::{use_toasts, ToastKind};
use leptos::*;

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();
    view! {
        <div class="fixed bottom-4 right-4 z-[80] flex w-full max-w-sm flex-col gap-2" aria-live="polite">
            <For
                each=move || toasts.items().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let tone = match toast.kind {
                        ToastKind::Success => "border-status-success-border bg-status-success-bg text-status-success-text",
                        ToastKind::Error => "border-status-error-border bg-status-error-bg text-status-error-text",
                    };
                    view! {
                        <div class=format!("rounded-lg border px-4 py-3 shadow-lg {}", tone) role="status">
                            <div class="flex items-start justify-between gap-3">
                                <p class="text-sm font-semibold">{toast.title}</p>
                                <button
                                    type="button"
                                    aria-label="Dismiss"
                                    class="text-xs opacity-70 hover:opacity-100"
                                    on:click=move |_| toasts.dismiss(id)
                                >
                                    {"✕"}
                                </button>
                            </div>
                            {toast.description.map(|text| view! { <p class="mt-1 text-sm">{text}</p> })}
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::toast::provide_toasts;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn toaster_lists_pending_notifications() {
        let html = render_to_string(|| {
            let toasts = provide_toasts();
            toasts.error("Error fetching projects", "offline");
            toasts.success("Imported", "3 projects added");
            view! { <Toaster /> }
        });
        assert!(html.contains("Error fetching projects"));
        assert!(html.contains("offline"));
        assert!(html.contains("3 projects added"));
        assert!(html.contains("bg-status-error-bg"));
    }
}
