//! Core domain entities representing the dashboard data model.
//!
//! Three flat record collections back the dashboard. Records are created and
//! seeded out of band; this service only reads them and applies partial
//! updates to a fixed set of editable fields.
//!
//! # Entity Types
//!
//! - [`Settings`] - Singleton row holding the welcome banner text
//! - [`Stat`] - A statistic card
//! - [`Action`] - A quick-action button
//!
//! # Partial Updates
//!
//! - [`Collection`] - Which of the three collections a record lives in
//! - [`EditableField`] - The closed set of fields the admin form may change
//! - [`FieldUpdate`] - One field of one record, sent as a single update

pub mod action;
pub mod field;
pub mod settings;
pub mod stat;

pub use action::Action;
pub use field::{Collection, EditableField, FieldUpdate};
pub use settings::Settings;
pub use stat::Stat;
