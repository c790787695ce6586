//! HTTP request handlers for API endpoints.

pub mod effects;
pub mod fields;
pub mod health;
pub mod snapshot;

pub use effects::confetti_handler;
pub use fields::update_field_handler;
pub use health::health_handler;
pub use snapshot::{refetch_handler, snapshot_handler};
