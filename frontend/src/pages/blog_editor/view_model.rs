use super::utils::slugify;
use crate::{
    api::{optional_text, use_store, Post, PostDraft, Repository, StoreError},
    components::{forms::FieldErrors, rich_text::editor_html},
    state::toast::{use_toasts, Toasts},
};
use leptos::{html::Div, *};

pub const DUPLICATE_SLUG_MESSAGE: &str = "Failed to save post. Slug might be duplicate.";

#[derive(Clone, Copy)]
pub struct PostFormState {
    pub title: RwSignal<String>,
    pub slug: RwSignal<String>,
    pub excerpt: RwSignal<String>,
    pub cover_image: RwSignal<String>,
    pub category: RwSignal<String>,
    pub published: RwSignal<bool>,
    /// HTML the editor widget starts from; the live document lives in the widget.
    pub content: RwSignal<String>,
    /// Set once the slug no longer follows the title.
    pub slug_locked: RwSignal<bool>,
    pub errors: RwSignal<FieldErrors>,
}

impl PostFormState {
    pub fn new(is_editing: bool) -> Self {
        Self {
            title: create_rw_signal(String::new()),
            slug: create_rw_signal(String::new()),
            excerpt: create_rw_signal(String::new()),
            cover_image: create_rw_signal(String::new()),
            category: create_rw_signal(String::new()),
            published: create_rw_signal(false),
            content: create_rw_signal(String::new()),
            slug_locked: create_rw_signal(is_editing),
            errors: create_rw_signal(FieldErrors::new()),
        }
    }

    /// Call after `title` changed; re-derives the slug unless it is locked
    /// or the title is blank.
    pub fn title_changed(&self) {
        if self.slug_locked.get_untracked() {
            return;
        }
        let Some(slug) = self
            .title
            .with_untracked(|title| (!title.trim().is_empty()).then(|| slugify(title)))
        else {
            return;
        };
        self.slug.set(slug);
    }

    pub fn slug_edited(&self) {
        self.slug_locked.set(true);
    }

    pub fn fill(&self, post: &Post) {
        self.slug_locked.set(true);
        self.title.set(post.title.clone());
        self.slug.set(post.slug.clone());
        self.excerpt.set(post.excerpt.clone().unwrap_or_default());
        self.cover_image.set(post.cover_image.clone().unwrap_or_default());
        self.category.set(post.category.clone().unwrap_or_default());
        self.published.set(post.published);
        self.content.set(post.content.clone());
    }

    /// Validates and builds the persisted shape. `editor_content` is the
    /// widget's current HTML; the loaded content is used when it is absent.
    pub fn to_draft(&self, editor_content: Option<String>) -> Result<PostDraft, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("title", &self.title.get_untracked(), "Title is required");
        errors.require("slug", &self.slug.get_untracked(), "Slug is required");
        self.errors.set(errors.clone());
        errors.into_result()?;

        Ok(PostDraft {
            title: self.title.get_untracked().trim().to_string(),
            slug: self.slug.get_untracked().trim().to_string(),
            excerpt: optional_text(&self.excerpt.get_untracked()),
            content: editor_content.unwrap_or_else(|| self.content.get_untracked()),
            cover_image: optional_text(&self.cover_image.get_untracked()),
            published: self.published.get_untracked(),
            category: optional_text(&self.category.get_untracked()),
        })
    }
}

pub async fn load_post(repo: &Repository<Post>, id: &str, form: PostFormState, toasts: Toasts) -> bool {
    match repo.fetch(id).await {
        Ok(post) => {
            form.fill(&post);
            true
        }
        Err(err) => {
            log::error!("Error fetching post {}: {}", id, err);
            toasts.error("Error", "Failed to load post.");
            false
        }
    }
}

/// Inserts or updates depending on `id`. A duplicate slug is flagged on
/// the slug field as well.
pub async fn save_post(
    repo: &Repository<Post>,
    id: Option<&str>,
    draft: &PostDraft,
    form: PostFormState,
    toasts: Toasts,
) -> bool {
    let result = match id {
        Some(id) => repo.update(id, draft).await,
        None => repo.create(draft).await,
    };
    match result {
        Ok(()) => {
            let verb = if id.is_some() { "updated" } else { "created" };
            toasts.success("Success", format!("Post {} successfully.", verb));
            true
        }
        Err(err) => {
            log::error!("Error saving post: {}", err);
            report_save_error(&err, form, toasts);
            false
        }
    }
}

fn report_save_error(err: &StoreError, form: PostFormState, toasts: Toasts) {
    if err.is_unique_violation() {
        let _ = form
            .errors
            .try_update(|errors| errors.insert("slug", "This slug is already in use"));
        toasts.error("Error", DUPLICATE_SLUG_MESSAGE);
    } else {
        toasts.error("Error", format!("Failed to save post. {}", err));
    }
}

#[derive(Clone, Copy)]
pub struct BlogEditorViewModel {
    pub form: PostFormState,
    pub editor: NodeRef<Div>,
    pub id: StoredValue<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    repo: StoredValue<Repository<Post>>,
    toasts: Toasts,
}

impl BlogEditorViewModel {
    pub fn new(id: Option<String>) -> Self {
        let is_editing = id.is_some();
        Self {
            form: PostFormState::new(is_editing),
            editor: create_node_ref::<Div>(),
            id: store_value(id),
            loading: create_rw_signal(is_editing),
            saving: create_rw_signal(false),
            repo: store_value(Repository::new(use_store())),
            toasts: use_toasts(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.with_value(Option::is_some)
    }

    pub fn load(&self, on_missing: Callback<()>) {
        let Some(id) = self.id.get_value() else {
            return;
        };
        let vm = *self;
        let repo = vm.repo.get_value();
        spawn_local(async move {
            let found = load_post(&repo, &id, vm.form, vm.toasts).await;
            let _ = vm.loading.try_set(false);
            if !found {
                on_missing.call(());
            }
        });
    }

    pub fn submit(&self, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }
        let Ok(draft) = self.form.to_draft(editor_html(self.editor)) else {
            return;
        };
        let vm = *self;
        let repo = vm.repo.get_value();
        let id = vm.id.get_value();
        vm.saving.set(true);
        spawn_local(async move {
            let saved = save_post(&repo, id.as_deref(), &draft, vm.form, vm.toasts).await;
            let _ = vm.saving.try_set(false);
            if saved {
                on_saved.call(());
            }
        });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{
        test_support::{MemoryStore, Op, StoreCall},
        Collection, Filter,
    };
    use crate::test_support::{fixtures::post_row, ssr::with_runtime};

    #[test]
    fn slug_follows_title_in_create_mode() {
        with_runtime(|| {
            let form = PostFormState::new(false);
            form.title.set("Hello, World! 2025".into());
            form.title_changed();
            assert_eq!(form.slug.get(), "hello-world-2025");
        });
    }

    #[test]
    fn clearing_the_title_keeps_the_last_slug() {
        with_runtime(|| {
            let form = PostFormState::new(false);
            form.title.set("Launch notes".into());
            form.title_changed();
            form.title.set(String::new());
            form.title_changed();
            assert_eq!(form.slug.get(), "launch-notes");
            form.title.set("   ".into());
            form.title_changed();
            assert_eq!(form.slug.get(), "launch-notes");
        });
    }

    #[test]
    fn manual_slug_edit_stops_derivation() {
        with_runtime(|| {
            let form = PostFormState::new(false);
            form.title.set("First".into());
            form.title_changed();
            form.slug.set("custom".into());
            form.slug_edited();
            form.title.set("Second title".into());
            form.title_changed();
            assert_eq!(form.slug.get(), "custom");
        });
    }

    #[test]
    fn edit_mode_never_rederives_the_slug() {
        with_runtime(|| {
            let form = PostFormState::new(true);
            form.slug.set("launch".into());
            form.title.set("A Completely New Title".into());
            form.title_changed();
            assert_eq!(form.slug.get(), "launch");
        });
    }

    #[test]
    fn draft_requires_title_and_slug_and_drops_blank_optionals() {
        with_runtime(|| {
            let form = PostFormState::new(false);
            let errors = form.to_draft(None).unwrap_err();
            assert_eq!(errors.get("title"), Some("Title is required"));
            assert_eq!(errors.get("slug"), Some("Slug is required"));

            form.title.set("Post".into());
            form.title_changed();
            form.excerpt.set("  ".into());
            form.content.set("<p>loaded</p>".into());
            let draft = form.to_draft(None).unwrap();
            assert_eq!(draft.slug, "post");
            assert_eq!(draft.excerpt, None);
            assert_eq!(draft.cover_image, None);
            assert_eq!(draft.content, "<p>loaded</p>");

            let draft = form.to_draft(Some("<p>edited</p>".into())).unwrap();
            assert_eq!(draft.content, "<p>edited</p>");
        });
    }

    #[tokio::test]
    async fn loaded_post_locks_the_slug() {
        let runtime = create_runtime();
        let store = MemoryStore::new();
        store.seed(Collection::Posts, vec![post_row("p1", "Launch", "launch", true)]);
        let repo = Repository::<Post>::new(store.handle());
        let form = PostFormState::new(true);

        assert!(load_post(&repo, "p1", form, Toasts::new()).await);
        form.title.set("Renamed".into());
        form.title_changed();

        assert_eq!(form.slug.get_untracked(), "launch");
        assert!(form.published.get_untracked());
        assert_eq!(form.content.get_untracked(), "<p>Body</p>");
        runtime.dispose();
    }

    #[tokio::test]
    async fn duplicate_slug_keeps_the_form_and_flags_the_field() {
        let runtime = create_runtime();
        let store = MemoryStore::new();
        store.fail_on(
            Op::Insert,
            StoreError::rejected(409, Some("23505".into()), "duplicate key value"),
        );
        let repo = Repository::<Post>::new(store.handle());
        let form = PostFormState::new(false);
        form.title.set("Launch".into());
        form.title_changed();
        let draft = form.to_draft(None).unwrap();
        let toasts = Toasts::new();

        assert!(!save_post(&repo, None, &draft, form, toasts).await);

        assert_eq!(form.title.get_untracked(), "Launch");
        assert!(form.errors.get_untracked().get("slug").is_some());
        assert_eq!(
            toasts.items().get_untracked()[0].description.as_deref(),
            Some(DUPLICATE_SLUG_MESSAGE)
        );
        runtime.dispose();
    }

    #[tokio::test]
    async fn update_targets_the_loaded_id() {
        let runtime = create_runtime();
        let store = MemoryStore::new();
        store.seed(Collection::Posts, vec![post_row("p1", "Launch", "launch", false)]);
        let repo = Repository::<Post>::new(store.handle());
        let form = PostFormState::new(true);
        load_post(&repo, "p1", form, Toasts::new()).await;
        form.published.set(true);
        let draft = form.to_draft(None).unwrap();

        assert!(save_post(&repo, Some("p1"), &draft, form, Toasts::new()).await);

        assert_eq!(
            store.write_calls(),
            vec![StoreCall::Update {
                collection: Collection::Posts,
                filter: Filter::eq("id", "p1"),
            }]
        );
        assert_eq!(store.rows(Collection::Posts)[0]["published"], true);
        runtime.dispose();
    }
}
