#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod fixtures {
    use crate::api::{test_support::MemoryStore, Post, Project, DEFAULT_CATEGORY};
    use crate::state::{session::SessionContext, toast::Toasts};
    use leptos::*;
    use serde_json::{json, Value};

    pub fn project_row(id: &str, title: &str) -> Value {
        json!({
            "id": id,
            "title": title,
            "description": format!("{} description", title),
            "category": DEFAULT_CATEGORY,
            "tech_stack": ["React", "Node.js"],
            "live_link": "https://example.com",
            "github_link": null,
            "images": ["https://img.example.com/1.png", "https://img.example.com/2.png"],
            "created_at": "2025-03-01T12:00:00Z"
        })
    }

    pub fn post_row(id: &str, title: &str, slug: &str, published: bool) -> Value {
        json!({
            "id": id,
            "title": title,
            "slug": slug,
            "excerpt": "Short summary",
            "content": "<p>Body</p>",
            "cover_image": null,
            "published": published,
            "category": "News",
            "created_at": "2025-03-02T08:30:00Z"
        })
    }

    pub fn project(id: &str, title: &str) -> Project {
        serde_json::from_value(project_row(id, title)).unwrap()
    }

    pub fn post(id: &str, title: &str, slug: &str) -> Post {
        serde_json::from_value(post_row(id, title, slug, false)).unwrap()
    }

    /// Provides the store, session and toast contexts a page expects.
    pub fn provide_page_context(store: &MemoryStore) -> Toasts {
        provide_context(store.handle());
        provide_context(SessionContext::new());
        let toasts = Toasts::new();
        provide_context(toasts);
        toasts
    }
}
