/// Edit-field representation of a tech stack.
pub fn join_tech_stack(items: &[String]) -> String {
    items.join(", ")
}

pub fn parse_tech_stack(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Image input rows for a stored list; never fewer than one row.
pub fn image_rows(images: &[String]) -> Vec<String> {
    if images.is_empty() {
        vec![String::new()]
    } else {
        images.to_vec()
    }
}

pub fn add_image_row(rows: &mut Vec<String>) {
    rows.push(String::new());
}

/// Removes row `index`; the last remaining row is replaced by an empty one.
pub fn remove_image_row(rows: &mut Vec<String>, index: usize) {
    if index < rows.len() {
        rows.remove(index);
    }
    if rows.is_empty() {
        rows.push(String::new());
    }
}

pub fn collect_images(rows: &[String]) -> Vec<String> {
    rows.iter()
        .map(|row| row.trim())
        .filter(|row| !row.is_empty())
        .map(str::to_string)
        .collect()
}
