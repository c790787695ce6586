//! Handler for single-field updates from the admin tab.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;

use crate::api::dto::field::{FieldUpdateRequest, FieldUpdateResponse};
use crate::application::services::EditOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Applies one field edit.
///
/// # Endpoint
///
/// `PATCH /api/fields`
///
/// # Response Codes
///
/// - **200 OK**: Store accepted the update; the snapshot has been refetched
/// - **502 Bad Gateway**: Store rejected the update; nothing was refetched
/// - **409 Conflict**: Another update is in flight; nothing was sent
/// - **400 Bad Request**: The field is not editable
///
/// Both 200 and 502 carry a toast for the page to display.
pub async fn update_field_handler(
    State(state): State<AppState>,
    Json(payload): Json<FieldUpdateRequest>,
) -> Result<(StatusCode, Json<FieldUpdateResponse>), AppError> {
    let update = payload.into_update()?;

    match state.admin_form.submit(update).await {
        EditOutcome::Applied(toast) => Ok((
            StatusCode::OK,
            Json(FieldUpdateResponse {
                outcome: "applied",
                toast,
            }),
        )),
        EditOutcome::Failed(toast) => Ok((
            StatusCode::BAD_GATEWAY,
            Json(FieldUpdateResponse {
                outcome: "failed",
                toast,
            }),
        )),
        EditOutcome::Blocked => Err(AppError::conflict(
            "Another update is in flight",
            json!({ "hint": "Retry once the current update completes" }),
        )),
    }
}
