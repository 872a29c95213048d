use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Authenticated admin identity issued by the hosted auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub expires_at: DateTime<Utc>,
    pub user: SessionUser,
}

impl Session {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn,
    SignedOut,
    TokenRefreshed,
}

pub type SessionListener = Rc<dyn Fn(AuthEvent, Option<&Session>)>;

#[derive(Default)]
struct ListenerTable {
    next_id: u64,
    listeners: Vec<(u64, SessionListener)>,
}

/// Fan-out of session changes to every live [`Subscription`].
#[derive(Clone, Default)]
pub struct SessionEvents {
    table: Rc<RefCell<ListenerTable>>,
}

impl SessionEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: SessionListener) -> Subscription {
        let mut table = self.table.borrow_mut();
        let id = table.next_id;
        table.next_id += 1;
        table.listeners.push((id, listener));
        Subscription {
            id,
            table: Rc::downgrade(&self.table),
        }
    }

    pub fn emit(&self, event: AuthEvent, session: Option<&Session>) {
        // Listeners may subscribe or unsubscribe while being notified.
        let listeners: Vec<SessionListener> = self
            .table
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(event, session);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.table.borrow().listeners.len()
    }
}

/// Handle for one session-change listener. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    table: Weak<RefCell<ListenerTable>>,
}

impl Subscription {
    /// A subscription that was never registered anywhere.
    pub fn inert() -> Self {
        Self {
            id: 0,
            table: Weak::new(),
        }
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(table) = self.table.upgrade() {
            table
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::cell::Cell;

    fn session(expires_at: DateTime<Utc>) -> Session {
        Session {
            access_token: "token".into(),
            refresh_token: None,
            expires_at,
            user: SessionUser {
                id: "user-1".into(),
                email: Some("admin@example.com".into()),
            },
        }
    }

    #[test]
    fn expiry_is_inclusive_of_the_deadline() {
        let now = Utc::now();
        assert!(session(now).is_expired_at(now));
        assert!(session(now - Duration::seconds(1)).is_expired_at(now));
        assert!(!session(now + Duration::minutes(5)).is_expired_at(now));
    }

    #[test]
    fn listeners_receive_events_until_unsubscribed() {
        let events = SessionEvents::new();
        let seen = Rc::new(Cell::new(0));
        let counter = Rc::clone(&seen);
        let subscription = events.subscribe(Rc::new(move |event, session| {
            assert_eq!(event, AuthEvent::SignedOut);
            assert!(session.is_none());
            counter.set(counter.get() + 1);
        }));
        assert_eq!(events.listener_count(), 1);

        events.emit(AuthEvent::SignedOut, None);
        assert_eq!(seen.get(), 1);

        subscription.unsubscribe();
        assert_eq!(events.listener_count(), 0);
        events.emit(AuthEvent::SignedOut, None);
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn dropping_one_subscription_keeps_the_others() {
        let events = SessionEvents::new();
        let first = events.subscribe(Rc::new(|_, _| {}));
        let _second = events.subscribe(Rc::new(|_, _| {}));
        drop(first);
        assert_eq!(events.listener_count(), 1);
    }

    #[test]
    fn inert_subscription_drops_cleanly() {
        Subscription::inert().unsubscribe();
    }
}
