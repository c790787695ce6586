//! Data Transfer Objects for API requests and responses.
//!
//! Snapshots, bursts and toasts are serialized directly from their
//! application types; only the field update request and the health report
//! need dedicated shapes.

pub mod field;
pub mod health;
