use crate::{
    api::{use_store, Post, Repository},
    state::{
        list::{self, ListState},
        toast::{use_toasts, Toasts},
    },
};
use chrono::{DateTime, Utc};
use leptos::*;

#[derive(Clone, Copy)]
pub struct BlogViewModel {
    pub list: RwSignal<ListState<Post>>,
    pub toasts: Toasts,
    pub repo: StoredValue<Repository<Post>>,
    pub pending_delete: RwSignal<Option<String>>,
    pub confirm_bulk_delete: RwSignal<bool>,
}

impl BlogViewModel {
    pub fn new() -> Self {
        Self {
            list: create_rw_signal(ListState::default()),
            toasts: use_toasts(),
            repo: store_value(Repository::new(use_store())),
            pending_delete: create_rw_signal(None),
            confirm_bulk_delete: create_rw_signal(false),
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
}

pub fn use_blog_view_model() -> BlogViewModel {
    BlogViewModel::new()
}

pub fn status_label(published: bool) -> &'static str {
    if published {
        "Published"
    } else {
        "Draft"
    }
}

/// Creation date as shown in the list, e.g. `Mar 4, 2025`.
pub fn format_created(created_at: Option<DateTime<Utc>>) -> String {
    created_at
        .map(|at| at.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "—".to_string())
}
