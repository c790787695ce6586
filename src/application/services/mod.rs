//! Services consumed by HTTP handlers and the admin CLI.

pub mod admin_form;
pub mod dashboard_data;

pub use admin_form::{AdminForm, EditOutcome, Toast, ToastVariant};
pub use dashboard_data::DashboardData;
