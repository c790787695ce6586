//! Handlers exposing the dashboard snapshot.

use axum::{Json, extract::State};

use crate::domain::snapshot::Snapshot;
use crate::state::AppState;

/// Returns the current snapshot without touching the store.
///
/// # Endpoint
///
/// `GET /api/snapshot`
pub async fn snapshot_handler(State(state): State<AppState>) -> Json<Snapshot> {
    Json(state.dashboard.snapshot())
}

/// Re-reads all three collections and returns the resulting snapshot.
///
/// Read failures do not fail the request; they show up in the
/// snapshot's `failures` list.
///
/// # Endpoint
///
/// `POST /api/refetch`
pub async fn refetch_handler(State(state): State<AppState>) -> Json<Snapshot> {
    state.dashboard.refetch().await;
    Json(state.dashboard.snapshot())
}
