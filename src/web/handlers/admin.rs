//! Admin tab handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::state::AppState;
use crate::web::view::AdminView;

/// Template for the admin tab.
///
/// Renders `templates/admin.html`. Inputs submit on blur via
/// `static/dashboard.js`, which calls `PATCH /api/fields`.
#[derive(Template, WebTemplate)]
#[template(path = "admin.html")]
pub struct AdminTemplate {
    pub view: AdminView,
}

/// Renders the admin form bound to the current snapshot.
///
/// # Endpoint
///
/// `GET /dashboard/admin`
pub async fn admin_handler(State(state): State<AppState>) -> impl IntoResponse {
    AdminTemplate {
        view: AdminView::build(&state.dashboard.snapshot(), &state.admin_form),
    }
}
