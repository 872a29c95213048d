use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde_json::{Map, Value};
use std::{cell::RefCell, collections::HashMap, rc::Rc};

use super::{
    error::StoreError,
    session::{AuthEvent, Session, SessionEvents, SessionListener, SessionUser, Subscription},
    store::{Collection, ContentStore, Filter, Query, StoreHandle},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    GetSession,
    SignIn { email: String },
    SignOut,
    Select(Query),
    SelectSingle(Query),
    Count(Query),
    Insert { collection: Collection, rows: usize },
    Update { collection: Collection, filter: Filter },
    Delete { collection: Collection, filter: Filter },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    SignOut,
    Select,
    SelectSingle,
    Count,
    Insert,
    Update,
    Delete,
}

#[derive(Default)]
struct Inner {
    rows: HashMap<Collection, Vec<Value>>,
    calls: Vec<StoreCall>,
    failures: HashMap<Op, StoreError>,
    session: Option<Session>,
    credentials: Option<(String, String)>,
    next_id: u64,
}

/// In-memory [`ContentStore`] that records every call and can be told to fail.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<Inner>>,
    events: SessionEvents,
}

pub fn test_session() -> Session {
    Session {
        access_token: "access-token".into(),
        refresh_token: Some("refresh-token".into()),
        expires_at: Utc::now() + Duration::hours(1),
        user: SessionUser {
            id: "admin-1".into(),
            email: Some("admin@example.com".into()),
        },
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> StoreHandle {
        StoreHandle::new(self.clone())
    }

    pub fn seed(&self, collection: Collection, rows: Vec<Value>) {
        self.inner
            .borrow_mut()
            .rows
            .entry(collection)
            .or_default()
            .extend(rows);
    }

    pub fn rows(&self, collection: Collection) -> Vec<Value> {
        self.inner
            .borrow()
            .rows
            .get(&collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.inner.borrow().calls.clone()
    }

    /// Calls that would have reached the network for data (not auth).
    pub fn write_calls(&self) -> Vec<StoreCall> {
        self.calls()
            .into_iter()
            .filter(|call| {
                matches!(
                    call,
                    StoreCall::Insert { .. } | StoreCall::Update { .. } | StoreCall::Delete { .. }
                )
            })
            .collect()
    }

    pub fn fail_on(&self, op: Op, error: StoreError) {
        self.inner.borrow_mut().failures.insert(op, error);
    }

    pub fn with_session(self, session: Session) -> Self {
        self.inner.borrow_mut().session = Some(session);
        self
    }

    pub fn with_credentials(self, email: &str, password: &str) -> Self {
        self.inner.borrow_mut().credentials = Some((email.into(), password.into()));
        self
    }

    pub fn listener_count(&self) -> usize {
        self.events.listener_count()
    }

    /// Simulates a provider-pushed change (expiry, sign-out in another tab, ...).
    pub fn push_change(&self, event: AuthEvent, session: Option<Session>) {
        self.inner.borrow_mut().session = session.clone();
        self.events.emit(event, session.as_ref());
    }

    fn record(&self, call: StoreCall) {
        self.inner.borrow_mut().calls.push(call);
    }

    fn failure(&self, op: Op) -> Result<(), StoreError> {
        match self.inner.borrow().failures.get(&op) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn matching(&self, query: &Query) -> Vec<Value> {
        let inner = self.inner.borrow();
        let mut rows: Vec<Value> = inner
            .rows
            .get(&query.collection)
            .map(|rows| {
                rows.iter()
                    .filter(|row| query.filters.iter().all(|filter| matches(row, filter)))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        if let Some(order) = &query.order {
            rows.sort_by(|a, b| cell(a, &order.field).cmp(&cell(b, &order.field)));
            if !order.ascending {
                rows.reverse();
            }
        }
        rows
    }
}

fn cell(row: &Value, field: &str) -> String {
    match row.get(field) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

fn matches(row: &Value, filter: &Filter) -> bool {
    match filter {
        Filter::Eq { field, value } => cell(row, field) == *value,
        Filter::In { field, values } => values.contains(&cell(row, field)),
    }
}

#[async_trait(?Send)]
impl ContentStore for MemoryStore {
    async fn get_session(&self) -> Option<Session> {
        self.record(StoreCall::GetSession);
        self.inner.borrow().session.clone()
    }

    fn on_session_change(&self, listener: SessionListener) -> Subscription {
        self.events.subscribe(listener)
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, StoreError> {
        self.record(StoreCall::SignIn {
            email: email.to_string(),
        });
        let accepted = self
            .inner
            .borrow()
            .credentials
            .as_ref()
            .map(|(e, p)| e == email && p == password)
            .unwrap_or(false);
        if !accepted {
            return Err(StoreError::Auth("Invalid login credentials".into()));
        }
        let session = test_session();
        self.push_change(AuthEvent::SignedIn, Some(session.clone()));
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), StoreError> {
        self.record(StoreCall::SignOut);
        self.push_change(AuthEvent::SignedOut, None);
        self.failure(Op::SignOut)
    }

    async fn select(&self, query: &Query) -> Result<Vec<Value>, StoreError> {
        self.record(StoreCall::Select(query.clone()));
        self.failure(Op::Select)?;
        Ok(self.matching(query))
    }

    async fn select_single(&self, query: &Query) -> Result<Value, StoreError> {
        self.record(StoreCall::SelectSingle(query.clone()));
        self.failure(Op::SelectSingle)?;
        let mut rows = self.matching(query);
        if rows.len() == 1 {
            Ok(rows.remove(0))
        } else {
            Err(StoreError::NotFound)
        }
    }

    async fn count(&self, query: &Query) -> Result<usize, StoreError> {
        self.record(StoreCall::Count(query.clone()));
        self.failure(Op::Count)?;
        Ok(self.matching(query).len())
    }

    async fn insert(&self, collection: Collection, records: Vec<Value>) -> Result<(), StoreError> {
        self.record(StoreCall::Insert {
            collection,
            rows: records.len(),
        });
        self.failure(Op::Insert)?;
        let mut inner = self.inner.borrow_mut();
        let mut stored = Vec::with_capacity(records.len());
        for record in records {
            inner.next_id += 1;
            let mut row = match record {
                Value::Object(map) => map,
                _ => Map::new(),
            };
            row.entry("id")
                .or_insert_with(|| Value::String(format!("mem-{}", inner.next_id)));
            row.entry("created_at")
                .or_insert_with(|| Value::String(Utc::now().to_rfc3339()));
            stored.push(Value::Object(row));
        }
        inner.rows.entry(collection).or_default().extend(stored);
        Ok(())
    }

    async fn update(
        &self,
        collection: Collection,
        patch: Value,
        filter: Filter,
    ) -> Result<(), StoreError> {
        self.record(StoreCall::Update {
            collection,
            filter: filter.clone(),
        });
        self.failure(Op::Update)?;
        let mut inner = self.inner.borrow_mut();
        if let (Some(rows), Value::Object(patch)) = (inner.rows.get_mut(&collection), patch) {
            for row in rows.iter_mut().filter(|row| matches(row, &filter)) {
                if let Value::Object(fields) = row {
                    for (key, value) in &patch {
                        fields.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        Ok(())
    }

    async fn delete(&self, collection: Collection, filter: Filter) -> Result<(), StoreError> {
        self.record(StoreCall::Delete {
            collection,
            filter: filter.clone(),
        });
        self.failure(Op::Delete)?;
        if let Some(rows) = self.inner.borrow_mut().rows.get_mut(&collection) {
            rows.retain(|row| !matches(row, &filter));
        }
        Ok(())
    }
}
