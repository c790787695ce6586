//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Store reachable and the last fetch had no failures
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Record store**: backend ping
/// 2. **Snapshot**: loading state and collections whose last read failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "record_store": { "status": "ok", "message": "Reachable" },
///     "snapshot": { "status": "ok", "message": "Loaded 4 stats, 3 actions" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_record_store(&state).await;
    let snapshot_check = check_snapshot(&state);

    let all_healthy = store_check.is_ok() && snapshot_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            record_store: store_check,
            snapshot: snapshot_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_record_store(state: &AppState) -> CheckStatus {
    if state.store.health_check().await {
        CheckStatus::ok("Reachable")
    } else {
        CheckStatus::error("Record store unreachable")
    }
}

/// Loading counts as healthy; failed reads from the last fetch do not.
fn check_snapshot(state: &AppState) -> CheckStatus {
    let snapshot = state.dashboard.snapshot();

    if !snapshot.failures.is_empty() {
        let names: Vec<&str> = snapshot.failures.iter().map(|c| c.as_str()).collect();
        return CheckStatus::error(format!("Last read failed for: {}", names.join(", ")));
    }

    if snapshot.loading {
        CheckStatus::ok("Loading")
    } else {
        CheckStatus::ok(format!(
            "Loaded {} stats, {} actions",
            snapshot.stats.len(),
            snapshot.actions.len()
        ))
    }
}
