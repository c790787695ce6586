//! Server-rendered dashboard pages.
//!
//! Uses Askama templates from `templates/`. Pages never talk to the record
//! store: they render view models built from the current snapshot.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration
//! - [`view`] - View models derived from the snapshot

pub mod handlers;
pub mod routes;
pub mod view;
