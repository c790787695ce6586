//! Record store implementations.
//!
//! # Stores
//!
//! - [`PgRecordStore`] - PostgreSQL tables via SQLx
//! - [`InMemoryRecordStore`] - Process-local tables for demo mode and tests

pub mod memory_store;
pub mod pg_record_store;

pub use memory_store::InMemoryRecordStore;
pub use pg_record_store::PgRecordStore;
