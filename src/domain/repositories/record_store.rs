//! Record store trait for the dashboard collections.

use crate::domain::entities::{Action, Collection, FieldUpdate, Settings, Stat};
use async_trait::async_trait;
use uuid::Uuid;

/// Errors returned by a record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("no {collection} record with id {id}")]
    NotFound { collection: Collection, id: Uuid },

    #[error("record store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for record store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Read and partial-update access to the three dashboard collections.
///
/// The store is an external collaborator with its own latency and failure
/// modes. Callers decide what a failure means; implementations only report
/// it. No timeouts or retries are applied at this layer.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRecordStore`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryRecordStore`] - Process-local tables
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Reads the singleton settings row (`LIMIT 1`, no ordering).
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Settings))` if at least one row exists
    /// - `Ok(None)` if the collection is empty
    async fn fetch_settings(&self) -> StoreResult<Option<Settings>>;

    /// Reads all stats ordered by `sort_order` ascending.
    async fn fetch_stats(&self) -> StoreResult<Vec<Stat>>;

    /// Reads all actions ordered by `sort_order` ascending.
    async fn fetch_actions(&self) -> StoreResult<Vec<Action>>;

    /// Writes exactly one field of one record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has the given id.
    /// Returns [`StoreError::Database`] on backend errors.
    async fn update(&self, update: FieldUpdate) -> StoreResult<()>;

    /// Checks if the backend is reachable.
    ///
    /// Used by the health endpoint.
    async fn health_check(&self) -> bool;
}
