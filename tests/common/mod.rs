#![allow(dead_code)]

use admin_dashboard::domain::entities::{Action, EditableField, FieldUpdate, Settings, Stat};
use admin_dashboard::domain::repositories::{RecordStore, StoreError, StoreResult};
use admin_dashboard::infrastructure::persistence::InMemoryRecordStore;
use admin_dashboard::state::AppState;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Notify;
use uuid::Uuid;

pub const SETTINGS_ID: Uuid = Uuid::from_u128(1);
pub const FIRST_STAT_ID: Uuid = Uuid::from_u128(11);
pub const SECOND_STAT_ID: Uuid = Uuid::from_u128(12);
pub const ACTION_ID: Uuid = Uuid::from_u128(21);

pub fn stat(id: Uuid, label: &str, value: &str, change: &str, sort_order: i32) -> Stat {
    Stat::new(
        id,
        label.to_string(),
        value.to_string(),
        change.to_string(),
        "activity".to_string(),
        "blue".to_string(),
        sort_order,
    )
}

/// Settings `Alex` / `Hi`, two stats stored out of order, one action.
pub fn sample_store() -> InMemoryRecordStore {
    InMemoryRecordStore::new(
        Some(Settings::new(
            SETTINGS_ID,
            "Alex".to_string(),
            "Hi".to_string(),
        )),
        vec![
            stat(SECOND_STAT_ID, "Second Stat", "200", "+2%", 2),
            stat(FIRST_STAT_ID, "First Stat", "100", "-1%", 1),
        ],
        vec![Action::new(
            ACTION_ID,
            "Launch Campaign".to_string(),
            "zap".to_string(),
            "blue".to_string(),
            1,
        )],
    )
}

/// State over `store` with the initial load already settled.
pub async fn loaded_state(store: Arc<dyn RecordStore>) -> AppState {
    let state = AppState::new(store);
    state.dashboard.refetch().await;
    state
}

/// Store whose reads all fail and whose writes are counted then rejected.
#[derive(Default)]
pub struct FailingStore {
    pub updates: AtomicUsize,
    pub reads: AtomicUsize,
}

impl FailingStore {
    fn unavailable<T>(&self) -> StoreResult<T> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Unavailable("offline".to_string()))
    }
}

#[async_trait]
impl RecordStore for FailingStore {
    async fn fetch_settings(&self) -> StoreResult<Option<Settings>> {
        self.unavailable()
    }

    async fn fetch_stats(&self) -> StoreResult<Vec<Stat>> {
        self.unavailable()
    }

    async fn fetch_actions(&self) -> StoreResult<Vec<Action>> {
        self.unavailable()
    }

    async fn update(&self, _update: FieldUpdate) -> StoreResult<()> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Unavailable("offline".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

/// Wraps a store so that its first update waits until `gate` is notified.
pub struct GatedStore {
    inner: InMemoryRecordStore,
    pub gate: Notify,
    pub updates: AtomicUsize,
}

impl GatedStore {
    pub fn new(inner: InMemoryRecordStore) -> Self {
        Self {
            inner,
            gate: Notify::new(),
            updates: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl RecordStore for GatedStore {
    async fn fetch_settings(&self) -> StoreResult<Option<Settings>> {
        self.inner.fetch_settings().await
    }

    async fn fetch_stats(&self) -> StoreResult<Vec<Stat>> {
        self.inner.fetch_stats().await
    }

    async fn fetch_actions(&self) -> StoreResult<Vec<Action>> {
        self.inner.fetch_actions().await
    }

    async fn update(&self, update: FieldUpdate) -> StoreResult<()> {
        if self.updates.fetch_add(1, Ordering::SeqCst) == 0 {
            self.gate.notified().await;
        }
        self.inner.update(update).await
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// Starts an update through the form and waits until it holds the
/// in-flight flag.
pub async fn start_gated_update(
    state: &AppState,
) -> tokio::task::JoinHandle<admin_dashboard::application::services::EditOutcome> {
    let form = state.admin_form.clone();
    let pending = tokio::spawn(async move {
        form.submit(FieldUpdate::new(
            EditableField::StatValue,
            FIRST_STAT_ID,
            "150",
        ))
        .await
    });

    while !state.admin_form.is_updating() {
        tokio::task::yield_now().await;
    }

    pending
}
