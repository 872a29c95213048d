use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::marker::PhantomData;

use super::{
    error::StoreError,
    store::{Collection, Filter, Query, StoreHandle},
    types::{Post, PostDraft, Project, ProjectDraft},
};

/// A row type living in one collection of the content store.
pub trait Record: DeserializeOwned + Clone + 'static {
    type Draft: Serialize;

    const COLLECTION: Collection;

    fn id(&self) -> &str;
}

impl Record for Project {
    type Draft = ProjectDraft;

    const COLLECTION: Collection = Collection::Projects;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Post {
    type Draft = PostDraft;

    const COLLECTION: Collection = Collection::Posts;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Typed access to a single collection, converting between rows and records.
pub struct Repository<T> {
    store: StoreHandle,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _record: PhantomData,
        }
    }
}

impl<T: Record> Repository<T> {
    pub fn new(store: StoreHandle) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// All records, newest first.
    pub async fn list(&self) -> Result<Vec<T>, StoreError> {
        let query = Query::new(T::COLLECTION).order("created_at", false);
        self.store
            .select(&query)
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    pub async fn fetch(&self, id: &str) -> Result<T, StoreError> {
        let query = Query::new(T::COLLECTION).eq("id", id);
        decode(self.store.select_single(&query).await?)
    }

    pub async fn count(&self) -> Result<usize, StoreError> {
        self.store.count(&Query::new(T::COLLECTION)).await
    }

    pub async fn count_where(&self, field: &str, value: impl ToString) -> Result<usize, StoreError> {
        self.store
            .count(&Query::new(T::COLLECTION).eq(field, value))
            .await
    }

    pub async fn create(&self, draft: &T::Draft) -> Result<(), StoreError> {
        self.store
            .insert(T::COLLECTION, vec![encode(draft)?])
            .await
    }

    /// Single batch insert; the store accepts or rejects the whole batch.
    pub async fn create_many(&self, drafts: &[T::Draft]) -> Result<(), StoreError> {
        let rows = drafts.iter().map(encode).collect::<Result<Vec<_>, _>>()?;
        self.store.insert(T::COLLECTION, rows).await
    }

    pub async fn update(&self, id: &str, draft: &T::Draft) -> Result<(), StoreError> {
        self.store
            .update(T::COLLECTION, encode(draft)?, Filter::eq("id", id))
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.store
            .delete(T::COLLECTION, Filter::eq("id", id))
            .await
    }

    pub async fn delete_many(&self, ids: &[String]) -> Result<(), StoreError> {
        self.store
            .delete(T::COLLECTION, Filter::any_of("id", ids.iter().cloned()))
            .await
    }
}

fn encode<S: Serialize>(draft: &S) -> Result<Value, StoreError> {
    serde_json::to_value(draft).map_err(|err| StoreError::Decode(err.to_string()))
}

fn decode<T: DeserializeOwned>(row: Value) -> Result<T, StoreError> {
    serde_json::from_value(row).map_err(|err| StoreError::Decode(err.to_string()))
}
