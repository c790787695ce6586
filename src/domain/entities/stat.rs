//! Stat entity representing one statistic card.

use serde::Serialize;
use uuid::Uuid;

/// A statistic card shown in the dashboard grid.
///
/// `value` and `change` are display text, not numbers: the store holds
/// whatever the admin typed (e.g. `"$124,590"`, `"+12.5%"`).
/// `icon` and `color` are symbolic names resolved by the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub id: Uuid,
    pub label: String,
    pub value: String,
    pub change: String,
    pub icon: String,
    pub color: String,
    pub sort_order: i32,
}

impl Stat {
    /// Creates a new Stat instance.
    pub fn new(
        id: Uuid,
        label: String,
        value: String,
        change: String,
        icon: String,
        color: String,
        sort_order: i32,
    ) -> Self {
        Self {
            id,
            label,
            value,
            change,
            icon,
            color,
            sort_order,
        }
    }

    /// Returns true unless the change text starts with a minus sign.
    pub fn is_trending_up(&self) -> bool {
        !self.change.trim_start().starts_with(['-', '\u{2212}'])
    }
}
