//! In-memory snapshot of the dashboard collections.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{Action, Collection, Settings, Stat};

/// The copy of settings, stats and actions held at a point in time.
///
/// Produced only by [`crate::application::services::DashboardData`];
/// everything else receives clones.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub settings: Option<Settings>,
    pub stats: Vec<Stat>,
    pub actions: Vec<Action>,
    /// True until the first three-way fetch has settled.
    pub loading: bool,
    /// Collections whose most recent read failed. The affected field keeps
    /// its previous value.
    pub failures: Vec<Collection>,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    /// Snapshot before anything has been fetched.
    pub fn loading() -> Self {
        Self {
            settings: None,
            stats: Vec::new(),
            actions: Vec::new(),
            loading: true,
            failures: Vec::new(),
            fetched_at: None,
        }
    }

    /// Looks up a stat by id.
    pub fn stat(&self, id: uuid::Uuid) -> Option<&Stat> {
        self.stats.iter().find(|s| s.id == id)
    }

    /// Looks up an action by id.
    pub fn action(&self, id: uuid::Uuid) -> Option<&Action> {
        self.actions.iter().find(|a| a.id == id)
    }

    /// Returns true if `collection` holds a record with `id`.
    pub fn contains(&self, collection: Collection, id: uuid::Uuid) -> bool {
        match collection {
            Collection::Settings => self.settings.as_ref().is_some_and(|s| s.id == id),
            Collection::Stats => self.stat(id).is_some(),
            Collection::Actions => self.action(id).is_some(),
        }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_contains_checks_the_right_collection() {
        let id = Uuid::from_u128(5);
        let mut snapshot = Snapshot::loading();
        snapshot.stats.push(Stat::new(
            id,
            "Users".to_string(),
            "10".to_string(),
            "+1%".to_string(),
            "users".to_string(),
            "blue".to_string(),
            1,
        ));

        assert!(snapshot.contains(Collection::Stats, id));
        assert!(!snapshot.contains(Collection::Actions, id));
        assert!(!snapshot.contains(Collection::Settings, id));
    }
}
