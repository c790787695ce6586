//! HTML template rendering handlers.

mod admin;
mod dashboard;

pub use admin::{AdminTemplate, admin_handler};
pub use dashboard::{DashboardTemplate, dashboard_handler};
