use web_sys::{File, HtmlInputElement};

/// First file picked in a file input, if any.
pub fn selected_file(input: &HtmlInputElement) -> Option<File> {
    input.files()?.get(0)
}

/// Clears a file input so the same file can be picked again.
pub fn reset_input(input: &HtmlInputElement) {
    input.set_value("");
}

pub async fn read_text(file: &File) -> Result<String, String> {
    let text = wasm_bindgen_futures::JsFuture::from(file.text())
        .await
        .map_err(|err| format!("{:?}", err))?;
    text.as_string()
        .ok_or_else(|| format!("{} is not a text file", file.name()))
}
