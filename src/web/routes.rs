//! Dashboard page routes.

use crate::state::AppState;
use crate::web::handlers::{admin_handler, dashboard_handler};
use axum::{Router, routing::get};

/// Page routes, nested under `/dashboard`.
///
/// # Endpoints
///
/// - `GET /` - Dashboard with banner, stats and quick actions
/// - `GET /admin` - Admin tab editing the same records
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard_handler))
        .route("/admin", get(admin_handler))
}
