use crate::api::{ProjectDraft, DEFAULT_CATEGORY};

pub const PLACEHOLDER_TITLE: &str = "Untitled Project";

/// Normalized row produced by every import source before it is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportRecord {
    pub title: String,
    pub description: String,
    pub category: String,
    pub tech_stack: Vec<String>,
    pub live_link: Option<String>,
    pub github_link: Option<String>,
    pub images: Vec<String>,
}

impl ImportRecord {
    pub fn into_draft(self) -> ProjectDraft {
        ProjectDraft {
            title: non_blank(self.title).unwrap_or_else(|| PLACEHOLDER_TITLE.to_string()),
            description: self.description.trim().to_string(),
            category: non_blank(self.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            tech_stack: self.tech_stack,
            live_link: self.live_link.and_then(non_blank),
            github_link: self.github_link.and_then(non_blank),
            images: self.images,
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Splits a delimited sub-field, trimming items and dropping empty ones.
pub fn split_list(value: &str, separators: &[char]) -> Vec<String> {
    value
        .split(|c| separators.contains(&c))
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
