use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    email: RwSignal<String>,
    password: RwSignal<String>,
    error: Signal<Option<String>>,
    pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8 rounded-lg bg-surface-elevated border border-border shadow-sm p-8">
                <div>
                    <h2 class="text-center text-3xl font-extrabold text-fg">"Admin Login"</h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "Sign in to manage projects and blog posts"
                    </p>
                </div>
                <form class="space-y-4" on:submit=move |ev| on_submit.call(ev)>
                    <div>
                        <label for="email" class="block text-sm font-medium text-fg mb-1">"Email"</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            autocomplete="username"
                            class="block w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                            placeholder="admin@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-medium text-fg mb-1">"Password"</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            autocomplete="current-password"
                            class="block w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                    <Show when=move || error.get().is_some()>
                        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded text-sm">
                            {move || error.get().unwrap_or_default()}
                        </div>
                    </Show>
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
