pub mod client;
mod error;
pub mod repository;
pub mod session;
pub mod store;
pub mod types;
mod unconfigured;

pub use client::SupabaseClient;
pub use error::StoreError;
pub use repository::{Record, Repository};
pub use session::{AuthEvent, Session, SessionUser, Subscription};
pub use store::{use_store, Collection, ContentStore, Filter, Query, StoreHandle};
pub use types::*;
pub use unconfigured::UnconfiguredStore;

#[cfg(test)]
pub mod test_support;
