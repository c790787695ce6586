//! Application layer coordinating the record store and the pages.
//!
//! # Modules
//!
//! - [`services::DashboardData`] - Owns the snapshot; concurrent three-way fetch and refetch
//! - [`services::AdminForm`] - Single-field updates guarded by a shared in-flight flag
//! - [`effects`] - Decorative confetti trigger with a fixed configuration

pub mod effects;
pub mod services;
