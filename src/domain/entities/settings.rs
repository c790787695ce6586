//! Settings entity holding the welcome banner text.

use serde::Serialize;
use uuid::Uuid;

/// Singleton dashboard settings row.
///
/// Only the first row of the collection is ever consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub id: Uuid,
    pub welcome_name: String,
    pub welcome_subtitle: String,
}

impl Settings {
    /// Creates a new Settings instance.
    pub fn new(id: Uuid, welcome_name: String, welcome_subtitle: String) -> Self {
        Self {
            id,
            welcome_name,
            welcome_subtitle,
        }
    }
}
