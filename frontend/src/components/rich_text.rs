use leptos::{html::Div, *};

/// Formatting commands offered by the toolbar: (label, command, value).
const TOOLBAR: &[(&str, &str, &str)] = &[
    ("B", "bold", ""),
    ("I", "italic", ""),
    ("H2", "formatBlock", "h2"),
    ("H3", "formatBlock", "h3"),
    ("List", "insertUnorderedList", ""),
    ("Quote", "formatBlock", "blockquote"),
];

#[cfg(target_arch = "wasm32")]
fn apply_format(command: &str, value: &str) {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.dyn_into::<web_sys::HtmlDocument>().ok());
    if let Some(document) = document {
        if let Err(err) = document.exec_command_with_show_ui_and_value(command, false, value) {
            log::warn!("Editor command {} failed: {:?}", command, err);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_format(_command: &str, _value: &str) {}

/// HTML currently held by an editor, read when the form is submitted.
pub fn editor_html(node_ref: NodeRef<Div>) -> Option<String> {
    node_ref.get_untracked().map(|element| web_sys::Element::inner_html(&element))
}

/// Content-editable HTML editor. The document is owned by the widget;
/// callers read it back with [`editor_html`].
#[component]
pub fn RichTextEditor(
    node_ref: NodeRef<Div>,
    #[prop(into)] initial_html: MaybeSignal<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    view! {
        <div class="rounded-md border border-border bg-surface">
            <div class="flex flex-wrap gap-1 border-b border-border px-2 py-1">
                {TOOLBAR
                    .iter()
                    .map(|(label, command, value)| {
                        view! {
                            <button
                                type="button"
                                class="rounded px-2 py-1 text-xs font-semibold text-fg-muted hover:bg-action-ghost-bg-hover hover:text-fg"
                                on:mousedown=move |ev| {
                                    ev.prevent_default();
                                    apply_format(command, value);
                                }
                            >
                                {*label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div
                node_ref=node_ref
                class="prose max-w-none min-h-[300px] px-4 py-3 text-fg focus:outline-none"
                contenteditable="true"
                data-placeholder=placeholder
                inner_html=move || initial_html.get()
            ></div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn editor_renders_initial_html_and_toolbar() {
        let html = render_to_string(|| {
            let node_ref = create_node_ref::<Div>();
            view! {
                <RichTextEditor
                    node_ref=node_ref
                    initial_html="<p>Hello <strong>world</strong></p>".to_string()
                />
            }
        });
        assert!(html.contains("contenteditable=\"true\""));
        assert!(html.contains("<strong>world</strong>"));
        assert!(html.contains("Quote"));
    }

    #[test]
    fn unmounted_editor_has_no_html() {
        crate::test_support::ssr::with_runtime(|| {
            assert_eq!(editor_html(create_node_ref::<Div>()), None);
        });
    }
}
