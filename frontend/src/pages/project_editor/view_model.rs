use super::utils::{
    add_image_row, collect_images, image_rows, join_tech_stack, parse_tech_stack, remove_image_row,
};
use crate::{
    api::{optional_text, use_store, Project, ProjectDraft, Repository, DEFAULT_CATEGORY},
    components::forms::FieldErrors,
    state::toast::{use_toasts, Toasts},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct ProjectFormState {
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub category: RwSignal<String>,
    pub tech_stack: RwSignal<String>,
    pub live_link: RwSignal<String>,
    pub github_link: RwSignal<String>,
    pub images: RwSignal<Vec<String>>,
    pub errors: RwSignal<FieldErrors>,
}

impl Default for ProjectFormState {
    fn default() -> Self {
        Self {
            title: create_rw_signal(String::new()),
            description: create_rw_signal(String::new()),
            category: create_rw_signal(DEFAULT_CATEGORY.to_string()),
            tech_stack: create_rw_signal(String::new()),
            live_link: create_rw_signal(String::new()),
            github_link: create_rw_signal(String::new()),
            images: create_rw_signal(vec![String::new()]),
            errors: create_rw_signal(FieldErrors::new()),
        }
    }
}

impl ProjectFormState {
    pub fn fill(&self, project: &Project) {
        self.title.set(project.title.clone());
        self.description.set(project.description.clone());
        self.category.set(project.category.clone());
        self.tech_stack.set(join_tech_stack(&project.tech_stack));
        self.live_link.set(project.live_link.clone().unwrap_or_default());
        self.github_link.set(project.github_link.clone().unwrap_or_default());
        self.images.set(image_rows(&project.images));
    }

    pub fn add_image(&self) {
        self.images.update(add_image_row);
    }

    pub fn remove_image(&self, index: usize) {
        self.images.update(|rows| remove_image_row(rows, index));
    }

    pub fn set_image(&self, index: usize, value: String) {
        self.images.update(|rows| {
            if let Some(row) = rows.get_mut(index) {
                *row = value;
            }
        });
    }

    /// Checks required fields and builds the persisted shape.
    pub fn to_draft(&self) -> Result<ProjectDraft, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("title", &self.title.get_untracked(), "Title is required");
        errors.require(
            "description",
            &self.description.get_untracked(),
            "Description is required",
        );
        self.errors.set(errors.clone());
        errors.into_result()?;

        let category = self.category.get_untracked();
        Ok(ProjectDraft {
            title: self.title.get_untracked().trim().to_string(),
            description: self.description.get_untracked().trim().to_string(),
            category: optional_text(&category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            tech_stack: parse_tech_stack(&self.tech_stack.get_untracked()),
            live_link: optional_text(&self.live_link.get_untracked()),
            github_link: optional_text(&self.github_link.get_untracked()),
            images: self.images.with_untracked(|rows| collect_images(rows)),
        })
    }
}

/// Loads the record into the form. Returns false when the editor should
/// leave because the record could not be read.
pub async fn load_project(
    repo: &Repository<Project>,
    id: &str,
    form: ProjectFormState,
    toasts: Toasts,
) -> bool {
    match repo.fetch(id).await {
        Ok(project) => {
            form.fill(&project);
            true
        }
        Err(err) => {
            log::error!("Error fetching project {}: {}", id, err);
            toasts.error("Error", "Failed to load project details.");
            false
        }
    }
}

/// Inserts or updates depending on `id`. Returns true on success.
pub async fn save_project(
    repo: &Repository<Project>,
    id: Option<&str>,
    draft: &ProjectDraft,
    toasts: Toasts,
) -> bool {
    let result = match id {
        Some(id) => repo.update(id, draft).await,
        None => repo.create(draft).await,
    };
    match result {
        Ok(()) => {
            let verb = if id.is_some() { "updated" } else { "created" };
            toasts.success("Success", format!("Project {} successfully.", verb));
            true
        }
        Err(err) => {
            log::error!("Error saving project: {}", err);
            toasts.error("Error", "Failed to save project.");
            false
        }
    }
}

#[derive(Clone, Copy)]
pub struct ProjectEditorViewModel {
    pub form: ProjectFormState,
    pub id: StoredValue<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    repo: StoredValue<Repository<Project>>,
    toasts: Toasts,
}

impl ProjectEditorViewModel {
    pub fn new(id: Option<String>) -> Self {
        let is_editing = id.is_some();
        Self {
            form: ProjectFormState::default(),
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
            let found = load_project(&repo, &id, vm.form, vm.toasts).await;
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
        let Ok(draft) = self.form.to_draft() else {
            return;
        };
        let vm = *self;
        let repo = vm.repo.get_value();
        let id = vm.id.get_value();
        vm.saving.set(true);
        spawn_local(async move {
            let saved = save_project(&repo, id.as_deref(), &draft, vm.toasts).await;
            let _ = vm.saving.try_set(false);
            if saved {
                on_saved.call(());
            }
        });
    }
}
