use crate::{
    api::{use_store, Project, ProjectDraft, Repository},
    import::{self, ImportError},
    state::{
        list::{self, ListState},
        toast::{use_toasts, Toasts},
    },
    utils::navigation,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct ProjectsViewModel {
    pub list: RwSignal<ListState<Project>>,
    pub toasts: Toasts,
    pub repo: StoredValue<Repository<Project>>,
    /// Row awaiting single-delete confirmation.
    pub pending_delete: RwSignal<Option<String>>,
    pub confirm_bulk_delete: RwSignal<bool>,
    pub importing: RwSignal<bool>,
    /// Seed records awaiting migration confirmation.
    pub pending_migration: RwSignal<Option<Vec<ProjectDraft>>>,
}

impl ProjectsViewModel {
    pub fn new() -> Self {
        Self {
            list: create_rw_signal(ListState::default()),
            toasts: use_toasts(),
            repo: store_value(Repository::new(use_store())),
            pending_delete: create_rw_signal(None),
            confirm_bulk_delete: create_rw_signal(false),
            importing: create_rw_signal(false),
            pending_migration: create_rw_signal(None),
        }
    }

    pub fn reload(&self) {
        let vm = *self;
        let repo = vm.repo.get_value();
        spawn_local(async move {
            list::refresh(&repo, vm.list, vm.toasts).await;
        });
    }

    pub fn delete_confirmed(&self) {
        let vm = *self;
        let Some(id) = vm.pending_delete.get_untracked() else {
            return;
        };
        vm.pending_delete.set(None);
        let repo = vm.repo.get_value();
        spawn_local(async move {
            list::delete_one(&repo, vm.list, vm.toasts, id).await;
        });
    }

    pub fn bulk_delete_confirmed(&self) {
        let vm = *self;
        vm.confirm_bulk_delete.set(false);
        let repo = vm.repo.get_value();
        spawn_local(async move {
            list::delete_selected(&repo, vm.list, vm.toasts).await;
        });
    }

    /// Imports the picked file, then clears the input whatever happened.
    pub fn import_from_input(&self, input: web_sys::HtmlInputElement) {
        use crate::utils::file;

        let Some(picked) = file::selected_file(&input) else {
            return;
        };
        let vm = *self;
        vm.importing.set(true);
        let repo = vm.repo.get_value();
        spawn_local(async move {
            let name = picked.name();
            let outcome = match import::ImportFormat::from_file_name(&name) {
                Err(err) => Err(err),
                Ok(_) => match file::read_text(&picked).await {
                    Ok(text) => import::import_file(&repo, &name, &text).await,
                    Err(err) => Err(ImportError::Read(err)),
                },
            };
            finish_import(&repo, vm.list, vm.toasts, outcome).await;
            file::reset_input(&input);
            let _ = vm.importing.try_set(false);
        });
    }

    pub fn start_migration(&self) {
        let vm = *self;
        let Some(origin) = navigation::current_origin() else {
            vm.toasts.error("Migration failed", "Site origin is unavailable");
            return;
        };
        spawn_local(async move {
            match import::load_migration_drafts(&origin).await {
                Ok(drafts) => {
                    let _ = vm.pending_migration.try_set(Some(drafts));
                }
                Err(err) => {
                    log::error!("Error loading migration data: {}", err);
                    vm.toasts.error("Migration failed", err.to_string());
                }
            }
        });
    }

    pub fn migration_confirmed(&self) {
        let vm = *self;
        let Some(drafts) = vm.pending_migration.get_untracked() else {
            return;
        };
        vm.pending_migration.set(None);
        let repo = vm.repo.get_value();
        spawn_local(async move {
            let outcome = import::write_batch(&repo, &drafts).await;
            finish_import(&repo, vm.list, vm.toasts, outcome).await;
        });
    }
}

pub fn use_projects_view_model() -> ProjectsViewModel {
    ProjectsViewModel::new()
}

/// Reports an import or migration outcome and reloads the list on success.
pub async fn finish_import(
    repo: &Repository<Project>,
    list_state: RwSignal<ListState<Project>>,
    toasts: Toasts,
    outcome: Result<usize, ImportError>,
) {
    match outcome {
        Ok(count) => {
            toasts.success("Import successful", format!("Imported {} projects", count));
            list::refresh(repo, list_state, toasts).await;
        }
        Err(err) if err.is_parse_error() => {
            log::warn!("Import rejected: {}", err);
            toasts.error("Import failed", format!("{}. Nothing was imported.", err));
        }
        Err(err) => {
            log::error!("Import error: {}", err);
            toasts.error("Import failed", format!("Could not save projects: {}", err));
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{
        test_support::{MemoryStore, Op, StoreCall},
        Collection, StoreError,
    };
    use crate::state::toast::ToastKind;
    use crate::test_support::fixtures::project_row;

    #[tokio::test]
    async fn successful_import_reports_count_and_reloads() {
        let runtime = create_runtime();
        let store = MemoryStore::new();
        store.seed(Collection::Projects, vec![project_row("p1", "Existing")]);
        let repo = Repository::<Project>::new(store.handle());
        let state = create_rw_signal(ListState::default());
        let toasts = Toasts::new();

        let outcome = import::import_file(
            &repo,
            "new.json",
            r#"[{ "title": "A" }, { "title": "B" }]"#,
        )
        .await;
        finish_import(&repo, state, toasts, outcome).await;

        let items = toasts.items().get_untracked();
        assert_eq!(items[0].kind, ToastKind::Success);
        assert_eq!(items[0].description.as_deref(), Some("Imported 2 projects"));
        assert_eq!(state.get_untracked().records.len(), 3);
        runtime.dispose();
    }

    #[tokio::test]
    async fn rejected_file_is_reported_without_store_calls() {
        let runtime = create_runtime();
        let store = MemoryStore::new();
        let repo = Repository::<Project>::new(store.handle());
        let state = create_rw_signal(ListState::default());
        let toasts = Toasts::new();

        let outcome = import::import_file(&repo, "notes.txt", "Title\nA,B").await;
        finish_import(&repo, state, toasts, outcome).await;

        assert!(store.calls().is_empty());
        let items = toasts.items().get_untracked();
        assert_eq!(items[0].kind, ToastKind::Error);
        assert!(items[0]
            .description
            .as_deref()
            .unwrap_or_default()
            .contains("Nothing was imported"));
        runtime.dispose();
    }

    #[tokio::test]
    async fn store_failure_is_reported_as_write_error() {
        let runtime = create_runtime();
        let store = MemoryStore::new();
        store.fail_on(Op::Insert, StoreError::Request("offline".into()));
        let repo = Repository::<Project>::new(store.handle());
        let state = create_rw_signal(ListState::default());
        let toasts = Toasts::new();

        let outcome = import::import_file(&repo, "p.csv", "Site,Desc,Web").await;
        finish_import(&repo, state, toasts, outcome).await;

        assert_eq!(
            store.calls(),
            vec![StoreCall::Insert {
                collection: Collection::Projects,
                rows: 1
            }]
        );
        let items = toasts.items().get_untracked();
        assert!(items[0]
            .description
            .as_deref()
            .unwrap_or_default()
            .starts_with("Could not save projects"));
        runtime.dispose();
    }
}
