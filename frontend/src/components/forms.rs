use leptos::*;
use std::collections::BTreeMap;

/// Validation messages keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Records `message` for `field` when `value` is blank.
    pub fn require(&mut self, field: &'static str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.insert(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Signal with the message for one field of a shared error map.
pub fn field_error(errors: RwSignal<FieldErrors>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|errors| errors.get(field).map(str::to_string)))
}

const INPUT_CLASS: &str = "block w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg placeholder-fg-muted focus:border-action-primary-bg focus:outline-none focus:ring-1 focus:ring-action-primary-bg";

#[component]
pub fn FieldError(#[prop(into)] message: MaybeSignal<Option<String>>) -> impl IntoView {
    move || {
        message
            .get()
            .map(|text| view! { <p class="mt-1 text-xs text-status-error-text">{text}</p> })
    }
}

#[component]
pub fn TextField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(optional)] on_input: Option<Callback<String>>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    view! {
        <div>
            <label for=id.clone() class="block text-sm font-medium text-fg mb-1">
                {label}
                {required.then_some(" *")}
            </label>
            <input
                id=id
                type=input_type
                class=INPUT_CLASS
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    value.set(text.clone());
                    if let Some(callback) = on_input {
                        callback.call(text);
                    }
                }
            />
            <FieldError message=error />
        </div>
    }
}

#[component]
pub fn TextArea(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(default = 4)] rows: u32,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <div>
            <label for=id.clone() class="block text-sm font-medium text-fg mb-1">
                {label}
                {required.then_some(" *")}
            </label>
            <textarea
                id=id
                rows=rows
                class=INPUT_CLASS
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
            <FieldError message=error />
        </div>
    }
}

#[component]
pub fn CheckboxField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    checked: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <label for=id.clone() class="inline-flex items-center gap-2 text-sm text-fg">
            <input
                id=id
                type="checkbox"
                class="h-4 w-4 rounded border-border"
                prop:checked=move || checked.get()
                on:change=move |ev| checked.set(event_target_checked(&ev))
            />
            {label}
        </label>
    }
}

#[component]
pub fn SearchInput(
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    view! {
        <div class="relative w-full max-w-sm">
            <i class="fas fa-search absolute left-3 top-1/2 -translate-y-1/2 text-fg-muted text-sm"></i>
            <input
                type="search"
                class=format!("{} pl-9", INPUT_CLASS)
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_flags_blank_values_only() {
        let mut errors = FieldErrors::new();
        errors.require("title", "  ", "Title is required");
        errors.require("slug", "hello", "Slug is required");
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert_eq!(errors.get("slug"), None);
        assert!(errors.into_result().is_err());
        assert!(FieldErrors::new().into_result().is_ok());
    }
}
