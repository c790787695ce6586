//! Repository trait definitions for the domain layer.
//!
//! The dashboard talks to its backing data through a single
//! [`RecordStore`] trait covering all three collections. Concrete stores
//! live in `crate::infrastructure::persistence`; a mock is generated via
//! `mockall` for unit tests.
//!
//! # Testing
//!
//! See integration tests in `tests/handler_*.rs`, which run the full router
//! over [`crate::infrastructure::persistence::InMemoryRecordStore`].

pub mod record_store;

pub use record_store::{RecordStore, StoreError, StoreResult};

#[cfg(test)]
pub use record_store::MockRecordStore;
