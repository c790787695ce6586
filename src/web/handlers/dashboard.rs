//! Dashboard page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::state::AppState;
use crate::web::view::DashboardView;

/// Template for the dashboard page.
///
/// Renders `templates/dashboard.html`: a placeholder while loading, then
/// the welcome banner, stat cards and quick actions.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub view: DashboardView,
}

/// Renders the dashboard page from the current snapshot.
///
/// # Endpoint
///
/// `GET /dashboard`
pub async fn dashboard_handler(State(state): State<AppState>) -> impl IntoResponse {
    DashboardTemplate {
        view: DashboardView::from_snapshot(&state.dashboard.snapshot()),
    }
}
