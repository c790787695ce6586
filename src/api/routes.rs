//! API route configuration.

use crate::api::handlers::{
    confetti_handler, refetch_handler, snapshot_handler, update_field_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch, post},
};

/// All JSON API routes.
///
/// # Endpoints
///
/// - `GET   /snapshot`          - Current snapshot
/// - `POST  /refetch`           - Re-read all collections
/// - `PATCH /fields`            - Update one field of one record
/// - `POST  /effects/confetti`  - Fire a confetti burst
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/snapshot", get(snapshot_handler))
        .route("/refetch", post(refetch_handler))
        .route("/fields", patch(update_field_handler))
        .route("/effects/confetti", post(confetti_handler))
}
