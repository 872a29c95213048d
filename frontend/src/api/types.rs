use chrono::{DateTime, Utc};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const DEFAULT_CATEGORY: &str = "Web Development";

/// Portfolio entry as stored in the `projects` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub category: String,
    #[serde(default, deserialize_with = "nullable")]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub live_link: Option<String>,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub images: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Writable project fields; `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub tech_stack: Vec<String>,
    pub live_link: Option<String>,
    pub github_link: Option<String>,
    pub images: Vec<String>,
}

/// Blog entry as stored in the `posts` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub content: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub published: bool,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostDraft {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image: Option<String>,
    pub published: bool,
    pub category: Option<String>,
}

/// Trims the value and maps blank input to `None`.
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(id),
        Value::Number(id) => Ok(id.to_string()),
        other => Err(D::Error::custom(format!("unsupported id value: {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn project_tolerates_nulls_and_numeric_ids() {
        let project: Project = serde_json::from_value(json!({
            "id": 42,
            "title": "Shop",
            "description": null,
            "category": "Web Development",
            "tech_stack": null,
            "live_link": null,
            "images": ["https://img/1.png"],
            "created_at": "2025-01-02T10:00:00.123456+00:00"
        }))
        .unwrap();
        assert_eq!(project.id, "42");
        assert_eq!(project.description, "");
        assert!(project.tech_stack.is_empty());
        assert!(project.live_link.is_none());
        assert!(project.github_link.is_none());
        assert_eq!(project.images, vec!["https://img/1.png".to_string()]);
        assert!(project.created_at.is_some());
    }

    #[test]
    fn post_defaults_missing_optional_fields() {
        let post: Post = serde_json::from_value(json!({
            "id": "p1",
            "title": "Hello",
            "slug": "hello",
            "published": null
        }))
        .unwrap();
        assert!(!post.published);
        assert_eq!(post.content, "");
        assert!(post.excerpt.is_none());
    }

    #[test]
    fn object_ids_are_rejected() {
        let result: Result<Post, _> = serde_json::from_value(json!({ "id": { "x": 1 } }));
        assert!(result.is_err());
    }

    #[test]
    fn optional_text_trims_and_drops_blank() {
        assert_eq!(optional_text("  https://a  "), Some("https://a".into()));
        assert_eq!(optional_text("   "), None);
    }

    #[test]
    fn drafts_serialize_blank_optionals_as_null() {
        let draft = ProjectDraft {
            title: "T".into(),
            description: "D".into(),
            category: DEFAULT_CATEGORY.into(),
            tech_stack: vec!["Rust".into()],
            live_link: None,
            github_link: Some("https://github.com/x".into()),
            images: vec![],
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["live_link"], Value::Null);
        assert_eq!(value["github_link"], json!("https://github.com/x"));
    }
}
