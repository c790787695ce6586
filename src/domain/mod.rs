//! Domain layer containing the dashboard data model.
//!
//! # Architecture
//!
//! - [`entities`] - Records of the three collections and partial updates
//! - [`repositories`] - The [`repositories::RecordStore`] contract
//! - [`snapshot`] - The in-memory copy of all three collections
//!
//! The domain layer has no dependencies on the web or infrastructure layers.

pub mod entities;
pub mod repositories;
pub mod snapshot;
