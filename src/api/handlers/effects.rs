//! Handler for the decorative confetti effect.

use axum::{Json, extract::State};

use crate::application::effects::Burst;
use crate::state::AppState;

/// Fires one confetti burst and returns its particle options.
///
/// # Endpoint
///
/// `POST /api/effects/confetti`
pub async fn confetti_handler(State(state): State<AppState>) -> Json<Burst> {
    Json(state.effects.fire())
}
