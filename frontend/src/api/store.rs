use async_trait::async_trait;
use leptos::*;
use serde_json::Value;
use std::{fmt, ops::Deref, rc::Rc};

use super::{
    error::StoreError,
    session::{Session, SessionListener, Subscription},
    unconfigured::UnconfiguredStore,
};

/// The two managed entity sets in the hosted store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Projects,
    Posts,
}

impl Collection {
    pub fn table(self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Posts => "posts",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    Eq { field: String, value: String },
    In { field: String, values: Vec<String> },
}

impl Filter {
    pub fn eq(field: impl Into<String>, value: impl ToString) -> Self {
        Self::Eq {
            field: field.into(),
            value: value.to_string(),
        }
    }

    pub fn any_of<I, S>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::In {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn field(&self) -> &str {
        match self {
            Self::Eq { field, .. } | Self::In { field, .. } => field,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub field: String,
    pub ascending: bool,
}

/// Read request against one collection: `select * [where ...] [order by ...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub collection: Collection,
    pub filters: Vec<Filter>,
    pub order: Option<Order>,
}

impl Query {
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            filters: Vec::new(),
            order: None,
        }
    }

    pub fn eq(mut self, field: impl Into<String>, value: impl ToString) -> Self {
        self.filters.push(Filter::eq(field, value));
        self
    }

    pub fn order(mut self, field: impl Into<String>, ascending: bool) -> Self {
        self.order = Some(Order {
            field: field.into(),
            ascending,
        });
        self
    }
}

/// Boundary to the hosted backend: auth session plus collection CRUD.
///
/// Every fallible operation reports failure as a [`StoreError`]; nothing here
/// panics when the backend is missing or misconfigured.
#[async_trait(?Send)]
pub trait ContentStore {
    /// Current session, or `None` when signed out, expired or unconfigured.
    async fn get_session(&self) -> Option<Session>;

    fn on_session_change(&self, listener: SessionListener) -> Subscription;

    async fn sign_in_with_password(&self, email: &str, password: &str)
        -> Result<Session, StoreError>;

    async fn sign_out(&self) -> Result<(), StoreError>;

    async fn select(&self, query: &Query) -> Result<Vec<Value>, StoreError>;

    /// Exactly one matching row, otherwise [`StoreError::NotFound`].
    async fn select_single(&self, query: &Query) -> Result<Value, StoreError>;

    /// Count-only read; no rows are transferred.
    async fn count(&self, query: &Query) -> Result<usize, StoreError>;

    /// One call for both a single record and a batch.
    async fn insert(&self, collection: Collection, records: Vec<Value>) -> Result<(), StoreError>;

    async fn update(
        &self,
        collection: Collection,
        patch: Value,
        filter: Filter,
    ) -> Result<(), StoreError>;

    async fn delete(&self, collection: Collection, filter: Filter) -> Result<(), StoreError>;
}

/// Shared, cloneable reference to the active store, passed through context.
#[derive(Clone)]
pub struct StoreHandle(Rc<dyn ContentStore>);

impl StoreHandle {
    pub fn new(store: impl ContentStore + 'static) -> Self {
        Self(Rc::new(store))
    }
}

impl Deref for StoreHandle {
    type Target = dyn ContentStore;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

pub fn use_store() -> StoreHandle {
    use_context::<StoreHandle>().unwrap_or_else(|| StoreHandle::new(UnconfiguredStore::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_builder_collects_filters_and_order() {
        let query = Query::new(Collection::Posts)
            .eq("published", true)
            .order("created_at", false);
        assert_eq!(query.collection.table(), "posts");
        assert_eq!(
            query.filters,
            vec![Filter::Eq {
                field: "published".into(),
                value: "true".into()
            }]
        );
        assert_eq!(
            query.order,
            Some(Order {
                field: "created_at".into(),
                ascending: false
            })
        );
    }

    #[test]
    fn any_of_filter_keeps_value_order() {
        let filter = Filter::any_of("id", ["b", "a"]);
        assert_eq!(filter.field(), "id");
        assert_eq!(
            filter,
            Filter::In {
                field: "id".into(),
                values: vec!["b".into(), "a".into()]
            }
        );
    }
}
