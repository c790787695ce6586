//! Process-local record store for demo mode and tests.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::{Action, EditableField, FieldUpdate, Settings, Stat};
use crate::domain::repositories::{RecordStore, StoreError, StoreResult};

#[derive(Default)]
struct Tables {
    settings: Vec<Settings>,
    stats: Vec<Stat>,
    actions: Vec<Action>,
}

/// A record store that keeps all three collections in memory.
///
/// Behaves like [`super::PgRecordStore`]: reads return stats and actions
/// ordered by `sort_order`, the first settings row is the singleton, and
/// updates to unknown ids fail with [`StoreError::NotFound`].
///
/// # Use Cases
///
/// - Running the dashboard without PostgreSQL (`STORE_BACKEND=memory`)
/// - Integration tests of the HTTP layer
#[derive(Default)]
pub struct InMemoryRecordStore {
    tables: RwLock<Tables>,
}

impl InMemoryRecordStore {
    /// Creates a store with the given rows.
    pub fn new(settings: Option<Settings>, stats: Vec<Stat>, actions: Vec<Action>) -> Self {
        Self {
            tables: RwLock::new(Tables {
                settings: settings.into_iter().collect(),
                stats,
                actions,
            }),
        }
    }

    /// Creates a store seeded with the stock dashboard content.
    pub fn demo() -> Self {
        debug!("Using in-memory record store with demo content");

        let settings = Settings::new(
            Uuid::from_u128(1),
            "Admin".to_string(),
            "Here's what's happening with your business.".to_string(),
        );

        let stat = |n: u128, label: &str, value: &str, change: &str, icon: &str, color: &str| {
            Stat::new(
                Uuid::from_u128(100 + n),
                label.to_string(),
                value.to_string(),
                change.to_string(),
                icon.to_string(),
                color.to_string(),
                n as i32,
            )
        };
        let stats = vec![
            stat(1, "Total Revenue", "$124,590", "+12.5%", "dollar-sign", "emerald"),
            stat(2, "Active Users", "12,453", "+8.2%", "users", "blue"),
            stat(3, "Conversion Rate", "3.24%", "+2.1%", "trending-up", "purple"),
            stat(4, "Performance Score", "98.2%", "+5.7%", "activity", "pink"),
        ];

        let action = |n: u128, label: &str, icon: &str, color: &str| {
            Action::new(
                Uuid::from_u128(200 + n),
                label.to_string(),
                icon.to_string(),
                color.to_string(),
                n as i32,
            )
        };
        let actions = vec![
            action(1, "Launch Campaign", "zap", "blue"),
            action(2, "Manage Users", "users", "slate"),
            action(3, "View Analytics", "dollar-sign", "slate"),
        ];

        Self::new(Some(settings), stats, actions)
    }
}

fn not_found(update: &FieldUpdate) -> StoreError {
    StoreError::NotFound {
        collection: update.collection(),
        id: update.id,
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn fetch_settings(&self) -> StoreResult<Option<Settings>> {
        Ok(self.tables.read().await.settings.first().cloned())
    }

    async fn fetch_stats(&self) -> StoreResult<Vec<Stat>> {
        let mut stats = self.tables.read().await.stats.clone();
        stats.sort_by_key(|s| s.sort_order);
        Ok(stats)
    }

    async fn fetch_actions(&self) -> StoreResult<Vec<Action>> {
        let mut actions = self.tables.read().await.actions.clone();
        actions.sort_by_key(|a| a.sort_order);
        Ok(actions)
    }

    async fn update(&self, update: FieldUpdate) -> StoreResult<()> {
        let mut tables = self.tables.write().await;

        let slot = match update.field {
            EditableField::WelcomeName | EditableField::WelcomeSubtitle => {
                let row = tables
                    .settings
                    .iter_mut()
                    .find(|s| s.id == update.id)
                    .ok_or_else(|| not_found(&update))?;
                if update.field == EditableField::WelcomeName {
                    &mut row.welcome_name
                } else {
                    &mut row.welcome_subtitle
                }
            }
            EditableField::StatValue | EditableField::StatChange => {
                let row = tables
                    .stats
                    .iter_mut()
                    .find(|s| s.id == update.id)
                    .ok_or_else(|| not_found(&update))?;
                if update.field == EditableField::StatValue {
                    &mut row.value
                } else {
                    &mut row.change
                }
            }
            EditableField::ActionLabel => {
                let row = tables
                    .actions
                    .iter_mut()
                    .find(|a| a.id == update.id)
                    .ok_or_else(|| not_found(&update))?;
                &mut row.label
            }
        };

        *slot = update.value;
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
