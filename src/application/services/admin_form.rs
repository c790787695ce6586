//! Admin form: single-field updates on blur.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::application::services::DashboardData;
use crate::domain::entities::{Collection, EditableField, FieldUpdate};
use crate::domain::repositories::RecordStore;
use crate::domain::snapshot::Snapshot;

/// Visual style of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastVariant {
    Default,
    Destructive,
}

/// Transient notification shown after an edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub title: String,
    pub variant: ToastVariant,
}

impl Toast {
    fn success(collection: Collection) -> Self {
        let title = match collection {
            Collection::Settings => "Settings updated successfully",
            Collection::Stats => "Stat updated successfully",
            Collection::Actions => "Action updated successfully",
        };
        Self {
            title: title.to_string(),
            variant: ToastVariant::Default,
        }
    }

    fn error(collection: Collection) -> Self {
        let title = match collection {
            Collection::Settings => "Error updating settings",
            Collection::Stats => "Error updating stat",
            Collection::Actions => "Error updating action",
        };
        Self {
            title: title.to_string(),
            variant: ToastVariant::Destructive,
        }
    }
}

/// Result of submitting one field edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The store accepted the update and a refetch has completed.
    Applied(Toast),
    /// The store rejected the update. No refetch was issued.
    Failed(Toast),
    /// Another update was in flight; nothing was sent.
    Blocked,
}

/// Clears the shared flag when the in-flight update finishes.
struct UpdatingGuard<'a>(&'a AtomicBool);

impl Drop for UpdatingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Server side of the admin tab.
///
/// Each input submits one [`FieldUpdate`] when it loses focus. A single
/// `updating` flag covers the whole form: while any update is in flight,
/// every input renders disabled and further submissions return
/// [`EditOutcome::Blocked`] without reaching the store. Blocked edits are
/// not queued.
///
/// When an update fails the typed value is kept as a draft, so the input
/// keeps showing it even though the store still holds the old value.
/// Drafts are only kept for records present in the current snapshot and are
/// dropped once their record disappears from it.
pub struct AdminForm {
    store: Arc<dyn RecordStore>,
    data: Arc<DashboardData>,
    updating: AtomicBool,
    drafts: Mutex<HashMap<(EditableField, Uuid), String>>,
}

impl AdminForm {
    /// Creates a form that writes through `store` and refreshes `data`.
    pub fn new(store: Arc<dyn RecordStore>, data: Arc<DashboardData>) -> Self {
        Self {
            store,
            data,
            updating: AtomicBool::new(false),
            drafts: Mutex::new(HashMap::new()),
        }
    }

    /// Returns true while an update is in flight.
    pub fn is_updating(&self) -> bool {
        self.updating.load(Ordering::Acquire)
    }

    /// Value an input should be seeded with: the retained draft if the last
    /// submission of this field failed, otherwise the stored value.
    pub fn input_value(&self, field: EditableField, id: Uuid, stored: &str) -> String {
        self.drafts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(field, id))
            .cloned()
            .unwrap_or_else(|| stored.to_string())
    }

    /// Sends one field update.
    ///
    /// Identical consecutive submissions are each sent; nothing is
    /// deduplicated.
    pub async fn submit(&self, update: FieldUpdate) -> EditOutcome {
        let Some(guard) = self.begin_update() else {
            debug!(field = ?update.field, id = %update.id, "Update blocked: another update in flight");
            metrics::counter!("dashboard_field_updates_total", "outcome" => "blocked").increment(1);
            return EditOutcome::Blocked;
        };

        let collection = update.collection();
        let key = (update.field, update.id);
        let typed = update.value.clone();

        let result = self.store.update(update).await;
        drop(guard);

        match result {
            Ok(()) => {
                info!(%collection, field = key.0.column(), id = %key.1, "Field updated");
                metrics::counter!("dashboard_field_updates_total", "outcome" => "applied")
                    .increment(1);

                self.drafts
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .remove(&key);
                self.data.refetch().await;
                self.prune_drafts(&self.data.snapshot());

                EditOutcome::Applied(Toast::success(collection))
            }
            Err(e) => {
                warn!(%collection, field = key.0.column(), id = %key.1, error = %e, "Field update failed");
                metrics::counter!("dashboard_field_updates_total", "outcome" => "failed")
                    .increment(1);

                let snapshot = self.data.snapshot();
                if snapshot.contains(collection, key.1) {
                    self.drafts
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .insert(key, typed);
                }
                self.prune_drafts(&snapshot);

                EditOutcome::Failed(Toast::error(collection))
            }
        }
    }

    /// Drops drafts whose record is no longer in `snapshot`.
    fn prune_drafts(&self, snapshot: &Snapshot) {
        self.drafts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|(field, id), _| snapshot.contains(field.collection(), *id));
    }

    fn begin_update(&self) -> Option<UpdatingGuard<'_>> {
        self.updating
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| UpdatingGuard(&self.updating))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Action, Settings, Stat};
    use crate::domain::repositories::{MockRecordStore, StoreError, StoreResult};
    use crate::infrastructure::persistence::InMemoryRecordStore;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::Notify;

    fn stat_id() -> Uuid {
        Uuid::from_u128(7)
    }

    fn known_stat() -> Stat {
        Stat::new(
            stat_id(),
            "Revenue".to_string(),
            "100".to_string(),
            "+1%".to_string(),
            "dollar-sign".to_string(),
            "blue".to_string(),
            1,
        )
    }

    fn known_settings() -> Settings {
        Settings::new(Uuid::from_u128(1), "Alex".to_string(), "Hi".to_string())
    }

    fn expect_fetches(mock_store: &mut MockRecordStore, times: usize) {
        mock_store
            .expect_fetch_settings()
            .times(times)
            .returning(|| Ok(Some(known_settings())));
        mock_store
            .expect_fetch_stats()
            .times(times)
            .returning(|| Ok(vec![known_stat()]));
        mock_store
            .expect_fetch_actions()
            .times(times)
            .returning(|| Ok(Vec::new()));
    }

    fn form_over(store: Arc<dyn RecordStore>) -> AdminForm {
        let data = Arc::new(DashboardData::new(store.clone()));
        AdminForm::new(store, data)
    }

    /// Form whose snapshot has already been loaded once.
    async fn loaded_form_over(store: Arc<dyn RecordStore>) -> AdminForm {
        let data = Arc::new(DashboardData::new(store.clone()));
        data.refetch().await;
        AdminForm::new(store, data)
    }

    fn draft_count(form: &AdminForm) -> usize {
        form.drafts.lock().unwrap().len()
    }

    #[tokio::test]
    async fn test_value_edit_sends_single_partial_update() {
        let mut mock_store = MockRecordStore::new();
        mock_store
            .expect_update()
            .withf(|u| {
                u.field == EditableField::StatValue
                    && u.field.column() == "value"
                    && u.id == Uuid::from_u128(7)
                    && u.value == "42"
            })
            .times(1)
            .returning(|_| Ok(()));
        expect_fetches(&mut mock_store, 1);

        let form = form_over(Arc::new(mock_store));

        let outcome = form
            .submit(FieldUpdate::new(EditableField::StatValue, stat_id(), "42"))
            .await;

        assert_eq!(
            outcome,
            EditOutcome::Applied(Toast {
                title: "Stat updated successfully".to_string(),
                variant: ToastVariant::Default,
            })
        );
        assert!(!form.is_updating());
    }

    #[tokio::test]
    async fn test_failure_skips_refetch_and_keeps_typed_value() {
        let mut mock_store = MockRecordStore::new();
        mock_store
            .expect_update()
            .times(1)
            .returning(|_| Err(StoreError::Unavailable("timeout".to_string())));
        // Only the initial load; the failed update does not refetch.
        expect_fetches(&mut mock_store, 1);

        let form = loaded_form_over(Arc::new(mock_store)).await;

        let outcome = form
            .submit(FieldUpdate::new(EditableField::StatChange, stat_id(), "+99%"))
            .await;

        assert_eq!(
            outcome,
            EditOutcome::Failed(Toast {
                title: "Error updating stat".to_string(),
                variant: ToastVariant::Destructive,
            })
        );
        assert_eq!(
            form.input_value(EditableField::StatChange, stat_id(), "+1%"),
            "+99%"
        );
        // Other fields of the same record are unaffected.
        assert_eq!(
            form.input_value(EditableField::StatValue, stat_id(), "100"),
            "100"
        );
        assert!(!form.is_updating());
    }

    #[tokio::test]
    async fn test_success_after_failure_drops_draft() {
        let mut mock_store = MockRecordStore::new();
        let mut seq = mockall::Sequence::new();
        mock_store
            .expect_update()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(StoreError::Unavailable("timeout".to_string())));
        mock_store
            .expect_update()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        expect_fetches(&mut mock_store, 2);

        let form = loaded_form_over(Arc::new(mock_store)).await;
        let id = Uuid::from_u128(1);

        form.submit(FieldUpdate::new(EditableField::WelcomeName, id, "Alx"))
            .await;
        let outcome = form
            .submit(FieldUpdate::new(EditableField::WelcomeName, id, "Alex"))
            .await;

        assert!(matches!(outcome, EditOutcome::Applied(ref t) if t.title == "Settings updated successfully"));
        assert_eq!(
            form.input_value(EditableField::WelcomeName, id, "Alex"),
            "Alex"
        );
    }

    #[tokio::test]
    async fn test_failed_edits_of_unknown_records_keep_no_draft() {
        let store = Arc::new(InMemoryRecordStore::demo());
        let form = loaded_form_over(store).await;
        let known = form.data.snapshot().stats.len();
        let large_value = "x".repeat(1024);

        for n in 0..1000u128 {
            let outcome = form
                .submit(FieldUpdate::new(
                    EditableField::StatValue,
                    Uuid::from_u128(10_000 + n),
                    large_value.clone(),
                ))
                .await;
            assert!(matches!(outcome, EditOutcome::Failed(_)));
        }

        assert_eq!(draft_count(&form), 0);
        assert!(draft_count(&form) <= known);
        assert_eq!(
            form.input_value(EditableField::StatValue, Uuid::from_u128(10_000), "stored"),
            "stored"
        );
    }

    #[tokio::test]
    async fn test_draft_dropped_when_record_leaves_snapshot() {
        let mut mock_store = MockRecordStore::new();
        let mut stats_seq = mockall::Sequence::new();
        mock_store
            .expect_fetch_stats()
            .times(1)
            .in_sequence(&mut stats_seq)
            .returning(|| Ok(vec![known_stat()]));
        mock_store
            .expect_fetch_stats()
            .times(1)
            .in_sequence(&mut stats_seq)
            .returning(|| Ok(Vec::new()));
        mock_store
            .expect_fetch_settings()
            .times(2)
            .returning(|| Ok(Some(known_settings())));
        mock_store
            .expect_fetch_actions()
            .times(2)
            .returning(|| Ok(Vec::new()));

        let mut update_seq = mockall::Sequence::new();
        mock_store
            .expect_update()
            .times(1)
            .in_sequence(&mut update_seq)
            .returning(|_| Err(StoreError::Unavailable("timeout".to_string())));
        mock_store
            .expect_update()
            .times(1)
            .in_sequence(&mut update_seq)
            .returning(|_| Ok(()));

        let form = loaded_form_over(Arc::new(mock_store)).await;

        form.submit(FieldUpdate::new(EditableField::StatChange, stat_id(), "+99%"))
            .await;
        assert_eq!(draft_count(&form), 1);

        form.submit(FieldUpdate::new(
            EditableField::WelcomeName,
            Uuid::from_u128(1),
            "Sam",
        ))
        .await;

        assert_eq!(draft_count(&form), 0);
        assert_eq!(
            form.input_value(EditableField::StatChange, stat_id(), "+1%"),
            "+1%"
        );
    }

    #[tokio::test]
    async fn test_identical_updates_are_not_deduplicated() {
        let mut mock_store = MockRecordStore::new();
        mock_store
            .expect_update()
            .withf(|u| u.field == EditableField::ActionLabel && u.value == "Launch")
            .times(2)
            .returning(|_| Ok(()));
        expect_fetches(&mut mock_store, 2);

        let form = form_over(Arc::new(mock_store));
        let id = Uuid::from_u128(3);

        for _ in 0..2 {
            let outcome = form
                .submit(FieldUpdate::new(EditableField::ActionLabel, id, "Launch"))
                .await;
            assert!(matches!(outcome, EditOutcome::Applied(_)));
        }
    }

    /// Store whose first update waits until released.
    struct GatedStore {
        gate: Notify,
        updates: AtomicUsize,
    }

    #[async_trait]
    impl RecordStore for GatedStore {
        async fn fetch_settings(&self) -> StoreResult<Option<Settings>> {
            Ok(None)
        }

        async fn fetch_stats(&self) -> StoreResult<Vec<Stat>> {
            Ok(Vec::new())
        }

        async fn fetch_actions(&self) -> StoreResult<Vec<Action>> {
            Ok(Vec::new())
        }

        async fn update(&self, _update: FieldUpdate) -> StoreResult<()> {
            if self.updates.fetch_add(1, Ordering::SeqCst) == 0 {
                self.gate.notified().await;
            }
            Ok(())
        }

        async fn health_check(&self) -> bool {
            true
        }
    }

    #[tokio::test]
    async fn test_second_edit_blocked_while_first_in_flight() {
        let store = Arc::new(GatedStore {
            gate: Notify::new(),
            updates: AtomicUsize::new(0),
        });
        let form = Arc::new(form_over(store.clone()));

        let first = tokio::spawn({
            let form = Arc::clone(&form);
            async move {
                form.submit(FieldUpdate::new(EditableField::StatValue, stat_id(), "1"))
                    .await
            }
        });

        while !form.is_updating() {
            tokio::task::yield_now().await;
        }

        let blocked = form
            .submit(FieldUpdate::new(EditableField::StatChange, stat_id(), "+2%"))
            .await;
        assert_eq!(blocked, EditOutcome::Blocked);
        assert_eq!(store.updates.load(Ordering::SeqCst), 1);

        store.gate.notify_one();
        assert!(matches!(first.await.unwrap(), EditOutcome::Applied(_)));
        assert!(!form.is_updating());

        let accepted = form
            .submit(FieldUpdate::new(EditableField::StatChange, stat_id(), "+2%"))
            .await;
        assert!(matches!(accepted, EditOutcome::Applied(_)));
        assert_eq!(store.updates.load(Ordering::SeqCst), 2);
    }
}
