use serde_json::{Map, Value};

use super::record::{split_list, ImportRecord};

/// Canonical field name followed by the legacy spellings accepted for it.
const FIELD_ALIASES: &[(&str, &[&str])] = &[
    ("title", &[]),
    ("description", &[]),
    ("category", &[]),
    ("tech_stack", &["techStack"]),
    ("live_link", &["liveLink"]),
    ("github_link", &["githubLink"]),
    ("images", &["screenshots"]),
];

fn lookup<'a>(object: &'a Map<String, Value>, canonical: &str) -> Option<&'a Value> {
    let aliases = FIELD_ALIASES
        .iter()
        .find(|(name, _)| *name == canonical)
        .map(|(_, aliases)| *aliases)
        .unwrap_or_default();
    std::iter::once(canonical)
        .chain(aliases.iter().copied())
        .filter_map(|key| object.get(key))
        .find(|value| !value.is_null())
}

fn text(object: &Map<String, Value>, field: &str) -> String {
    match lookup(object, field) {
        Some(Value::String(value)) => value.trim().to_string(),
        Some(Value::Number(value)) => value.to_string(),
        Some(Value::Bool(value)) => value.to_string(),
        _ => String::new(),
    }
}

fn optional_text(object: &Map<String, Value>, field: &str) -> Option<String> {
    Some(text(object, field)).filter(|value| !value.is_empty())
}

/// Accepts either a JSON array of strings or one delimited string.
fn list(object: &Map<String, Value>, field: &str) -> Vec<String> {
    match lookup(object, field) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::String(value)) => split_list(value, &[',', ';']),
        _ => Vec::new(),
    }
}

/// Maps one JSON object through the alias table.
pub fn record_from_object(object: &Map<String, Value>) -> ImportRecord {
    ImportRecord {
        title: text(object, "title"),
        description: text(object, "description"),
        category: text(object, "category"),
        tech_stack: list(object, "tech_stack"),
        live_link: optional_text(object, "live_link"),
        github_link: optional_text(object, "github_link"),
        images: list(object, "images"),
    }
}

/// Records from a JSON value: an array of objects, or one object.
/// Returns `None` for any other root.
pub fn records_from_value(value: &Value) -> Option<Vec<ImportRecord>> {
    match value {
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(Value::as_object)
                .map(record_from_object)
                .collect(),
        ),
        Value::Object(object) => Some(vec![record_from_object(object)]),
        _ => None,
    }
}
