//! Collections and the editable fields of their records.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// One of the three record collections behind the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Settings,
    Stats,
    Actions,
}

impl Collection {
    /// All collections in fetch order.
    pub const ALL: [Collection; 3] = [Self::Settings, Self::Stats, Self::Actions];

    /// Short name used in logs, metrics labels and the HTTP API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Settings => "settings",
            Self::Stats => "stats",
            Self::Actions => "actions",
        }
    }

    /// Backing table name in the record store.
    pub fn table_name(&self) -> &'static str {
        match self {
            Self::Settings => "dashboard_settings",
            Self::Stats => "dashboard_stats",
            Self::Actions => "dashboard_actions",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field the admin form is allowed to change.
///
/// Sort order, icons, colors and identifiers are never edited through the
/// dashboard, so they have no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditableField {
    WelcomeName,
    WelcomeSubtitle,
    StatValue,
    StatChange,
    ActionLabel,
}

impl EditableField {
    /// Collection the field belongs to.
    pub fn collection(&self) -> Collection {
        match self {
            Self::WelcomeName | Self::WelcomeSubtitle => Collection::Settings,
            Self::StatValue | Self::StatChange => Collection::Stats,
            Self::ActionLabel => Collection::Actions,
        }
    }

    /// Column name of the field within its collection.
    pub fn column(&self) -> &'static str {
        match self {
            Self::WelcomeName => "welcome_name",
            Self::WelcomeSubtitle => "welcome_subtitle",
            Self::StatValue => "value",
            Self::StatChange => "change",
            Self::ActionLabel => "label",
        }
    }

    /// Resolves a column name within a collection.
    ///
    /// Returns `None` for columns that exist but are not editable
    /// (e.g. `sort_order`) as well as for unknown names.
    pub fn parse(collection: Collection, column: &str) -> Option<Self> {
        match (collection, column) {
            (Collection::Settings, "welcome_name") => Some(Self::WelcomeName),
            (Collection::Settings, "welcome_subtitle") => Some(Self::WelcomeSubtitle),
            (Collection::Stats, "value") => Some(Self::StatValue),
            (Collection::Stats, "change") => Some(Self::StatChange),
            (Collection::Actions, "label") => Some(Self::ActionLabel),
            _ => None,
        }
    }
}

/// A partial update of exactly one field of one record.
///
/// The value is sent as-is; no validation is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    pub field: EditableField,
    pub id: Uuid,
    pub value: String,
}

impl FieldUpdate {
    pub fn new(field: EditableField, id: Uuid, value: impl Into<String>) -> Self {
        Self {
            field,
            id,
            value: value.into(),
        }
    }

    pub fn collection(&self) -> Collection {
        self.field.collection()
    }
}
