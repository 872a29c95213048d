use async_trait::async_trait;
use serde_json::Value;

use super::{
    error::StoreError,
    session::{Session, SessionListener, Subscription},
    store::{Collection, ContentStore, Filter, Query},
};

/// Stand-in used when the backend URL or key is missing. Reads of the session
/// come back empty and every other call reports [`StoreError::NotConfigured`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredStore;

impl UnconfiguredStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl ContentStore for UnconfiguredStore {
    async fn get_session(&self) -> Option<Session> {
        None
    }

    fn on_session_change(&self, _listener: SessionListener) -> Subscription {
        Subscription::inert()
    }

    async fn sign_in_with_password(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<Session, StoreError> {
        Err(StoreError::Auth(
            "Supabase not configured. Check console.".into(),
        ))
    }

    async fn sign_out(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn select(&self, _query: &Query) -> Result<Vec<Value>, StoreError> {
        Err(StoreError::NotConfigured)
    }

    async fn select_single(&self, _query: &Query) -> Result<Value, StoreError> {
        Err(StoreError::NotConfigured)
    }

    async fn count(&self, _query: &Query) -> Result<usize, StoreError> {
        Err(StoreError::NotConfigured)
    }

    async fn insert(&self, _collection: Collection, _records: Vec<Value>) -> Result<(), StoreError> {
        Err(StoreError::NotConfigured)
    }

    async fn update(
        &self,
        _collection: Collection,
        _patch: Value,
        _filter: Filter,
    ) -> Result<(), StoreError> {
        Err(StoreError::NotConfigured)
    }

    async fn delete(&self, _collection: Collection, _filter: Filter) -> Result<(), StoreError> {
        Err(StoreError::NotConfigured)
    }
}
