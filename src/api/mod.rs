//! JSON API layer.
//!
//! # Modules
//!
//! - [`dto`] - Request/response shapes
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Rate limiting and request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
