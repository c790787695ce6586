//! Action entity representing one quick-action button.

use serde::Serialize;
use uuid::Uuid;

/// A quick-action button. Clicking it fires the decorative effect only;
/// actions carry no behaviour of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    pub id: Uuid,
    pub label: String,
    pub icon: String,
    pub color: String,
    pub sort_order: i32,
}

impl Action {
    /// Creates a new Action instance.
    pub fn new(id: Uuid, label: String, icon: String, color: String, sort_order: i32) -> Self {
        Self {
            id,
            label,
            icon,
            color,
            sort_order,
        }
    }
}
