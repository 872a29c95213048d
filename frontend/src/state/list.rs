//! Collection list state shared by the projects and blog pages: fetched
//! records, client-side search, and the selection used for bulk delete.

use leptos::*;
use std::collections::BTreeSet;

use crate::api::{Post, Project, Record, Repository};
use crate::state::toast::Toasts;

/// A record that can be shown in a searchable list.
pub trait Listable: Record {
    /// Noun used in log lines and notifications.
    const LABEL: &'static str;

    fn search_fields(&self) -> Vec<&str>;
}

impl Listable for Project {
    const LABEL: &'static str = "projects";

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.category.as_str(),
        ]
    }
}

impl Listable for Post {
    const LABEL: &'static str = "posts";

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        fields.extend(self.excerpt.as_deref());
        fields.extend(self.category.as_deref());
        fields
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub records: Vec<T>,
    pub query: String,
    pub selected: BTreeSet<String>,
    pub loading: bool,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            query: String::new(),
            selected: BTreeSet::new(),
            loading: true,
        }
    }
}

fn matches_query<T: Listable>(record: &T, needle: &str) -> bool {
    needle.is_empty()
        || record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

impl<T: Listable> ListState<T> {
    /// Records matching the current search, in fetch order.
    pub fn visible(&self) -> Vec<T> {
        let needle = self.query.trim().to_lowercase();
        self.records
            .iter()
            .filter(|record| matches_query(*record, &needle))
            .cloned()
            .collect()
    }

    pub fn set_records(&mut self, records: Vec<T>) {
        self.selected
            .retain(|id| records.iter().any(|record| record.id() == id));
        self.records = records;
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    pub fn all_visible_selected(&self) -> bool {
        let visible = self.visible();
        !visible.is_empty() && visible.iter().all(|record| self.is_selected(record.id()))
    }

    /// Clears the selection when every visible row is selected, otherwise
    /// selects every visible row.
    pub fn toggle_all(&mut self) {
        if self.all_visible_selected() {
            self.selected.clear();
        } else {
            self.selected = self
                .visible()
                .iter()
                .map(|record| record.id().to_string())
                .collect();
        }
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }

    pub fn remove(&mut self, ids: &[String]) {
        self.records
            .retain(|record| !ids.iter().any(|id| id == record.id()));
        for id in ids {
            self.selected.remove(id);
        }
    }
}

/// Reloads the list. On failure the previous records stay in place.
pub async fn refresh<T: Listable>(
    repo: &Repository<T>,
    state: RwSignal<ListState<T>>,
    toasts: Toasts,
) {
    let _ = state.try_update(|list| list.loading = true);
    match repo.list().await {
        Ok(records) => {
            let _ = state.try_update(|list| {
                list.set_records(records);
                list.loading = false;
            });
        }
        Err(err) => {
            log::error!("Error fetching {}: {}", T::LABEL, err);
            toasts.error(format!("Error fetching {}", T::LABEL), err.to_string());
            let _ = state.try_update(|list| list.loading = false);
        }
    }
}

/// Deletes one record; it leaves the list only once the store confirmed.
pub async fn delete_one<T: Listable>(
    repo: &Repository<T>,
    state: RwSignal<ListState<T>>,
    toasts: Toasts,
    id: String,
) -> bool {
    match repo.delete(&id).await {
        Ok(()) => {
            let _ = state.try_update(|list| list.remove(&[id]));
            toasts.success("Deleted", "Item removed successfully");
            true
        }
        Err(err) => {
            log::error!("Error deleting from {}: {}", T::LABEL, err);
            toasts.error("Error deleting", err.to_string());
            false
        }
    }
}

/// Deletes every selected record in one call. The selection is cleared
/// whatever the outcome.
pub async fn delete_selected<T: Listable>(
    repo: &Repository<T>,
    state: RwSignal<ListState<T>>,
    toasts: Toasts,
) -> bool {
    let Some(ids) = state.try_with_untracked(|list| list.selected_ids()) else {
        return false;
    };
    if ids.is_empty() {
        return false;
    }
    let result = repo.delete_many(&ids).await;
    let _ = state.try_update(|list| {
        if result.is_ok() {
            list.remove(&ids);
        }
        list.selected.clear();
    });
    match result {
        Ok(()) => {
            toasts.success("Deleted", format!("{} items removed successfully", ids.len()));
            true
        }
        Err(err) => {
            log::error!("Error bulk deleting {}: {}", T::LABEL, err);
            toasts.error("Error deleting", err.to_string());
            false
        }
    }
}
