//! PostgreSQL implementation of the record store.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Action, FieldUpdate, Settings, Stat};
use crate::domain::repositories::{RecordStore, StoreError, StoreResult};

/// PostgreSQL store over the `dashboard_settings`, `dashboard_stats` and
/// `dashboard_actions` tables.
///
/// The tables are created and seeded out of band; this store never inserts
/// or deletes rows.
pub struct PgRecordStore {
    pool: Arc<PgPool>,
}

impl PgRecordStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct SettingsRow {
    id: Uuid,
    welcome_name: String,
    welcome_subtitle: String,
}

#[derive(FromRow)]
struct StatRow {
    id: Uuid,
    label: String,
    value: String,
    change: String,
    icon: String,
    color: String,
    sort_order: i32,
}

#[derive(FromRow)]
struct ActionRow {
    id: Uuid,
    label: String,
    icon: String,
    color: String,
    sort_order: i32,
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn fetch_settings(&self) -> StoreResult<Option<Settings>> {
        let row = sqlx::query_as::<_, SettingsRow>(
            r#"
            SELECT id, welcome_name, welcome_subtitle
            FROM dashboard_settings
            LIMIT 1
            "#,
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| Settings::new(r.id, r.welcome_name, r.welcome_subtitle)))
    }

    async fn fetch_stats(&self) -> StoreResult<Vec<Stat>> {
        let rows = sqlx::query_as::<_, StatRow>(
            r#"
            SELECT id, label, value, change, icon, color, sort_order
            FROM dashboard_stats
            ORDER BY sort_order ASC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| Stat::new(r.id, r.label, r.value, r.change, r.icon, r.color, r.sort_order))
            .collect())
    }

    async fn fetch_actions(&self) -> StoreResult<Vec<Action>> {
        let rows = sqlx::query_as::<_, ActionRow>(
            r#"
            SELECT id, label, icon, color, sort_order
            FROM dashboard_actions
            ORDER BY sort_order ASC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| Action::new(r.id, r.label, r.icon, r.color, r.sort_order))
            .collect())
    }

    async fn update(&self, update: FieldUpdate) -> StoreResult<()> {
        let collection = update.collection();
        // Table and column come from closed enums, never from user input.
        let sql = format!(
            "UPDATE {} SET {} = $1 WHERE id = $2",
            collection.table_name(),
            update.field.column()
        );

        let result = sqlx::query(&sql)
            .bind(&update.value)
            .bind(update.id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                collection,
                id: update.id,
            });
        }

        Ok(())
    }

    async fn health_check(&self) -> bool {
        match sqlx::query("SELECT 1").execute(self.pool.as_ref()).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("Record store health check failed: {}", e);
                false
            }
        }
    }
}

