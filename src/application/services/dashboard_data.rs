//! Snapshot owner for the dashboard collections.

use chrono::Utc;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::domain::entities::Collection;
use crate::domain::repositories::{RecordStore, StoreResult};
use crate::domain::snapshot::Snapshot;

/// Fetches settings, stats and actions and holds the latest copy.
///
/// This is the only writer of the [`Snapshot`]. Pages and the admin form
/// read clones through [`DashboardData::snapshot`] or observe changes
/// through [`DashboardData::subscribe`].
///
/// # Fetch semantics
///
/// - The three reads run concurrently and settle independently
/// - Each field is replaced as soon as its own read succeeds
/// - A failed read is logged and leaves its field unchanged
/// - `loading` clears once all three have settled, success or not
pub struct DashboardData {
    store: Arc<dyn RecordStore>,
    snapshot: watch::Sender<Snapshot>,
}

impl DashboardData {
    /// Creates the data service in the loading state. Nothing is fetched
    /// until [`spawn_initial_load`](Self::spawn_initial_load) or
    /// [`refetch`](Self::refetch) is called.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        let (snapshot, _) = watch::channel(Snapshot::loading());
        Self { store, snapshot }
    }

    /// Starts the first fetch in the background.
    pub fn spawn_initial_load(self: &Arc<Self>) -> JoinHandle<()> {
        let data = Arc::clone(self);
        tokio::spawn(async move {
            data.refetch().await;
            debug!("Initial dashboard load settled");
        })
    }

    /// Returns a copy of the current snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot.borrow().clone()
    }

    /// Returns a read-only view that is notified on every change.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshot.subscribe()
    }

    /// Re-runs the three-way fetch.
    ///
    /// Never fails: read errors are logged and recorded in
    /// [`Snapshot::failures`].
    pub async fn refetch(&self) {
        let settings = async {
            let result = self.store.fetch_settings().await;
            self.settle(Collection::Settings, result, |snap, row| {
                if let Some(row) = row {
                    snap.settings = Some(row);
                }
            });
        };

        let stats = async {
            let result = self.store.fetch_stats().await;
            self.settle(Collection::Stats, result, |snap, mut rows| {
                rows.sort_by_key(|s| s.sort_order);
                snap.stats = rows;
            });
        };

        let actions = async {
            let result = self.store.fetch_actions().await;
            self.settle(Collection::Actions, result, |snap, mut rows| {
                rows.sort_by_key(|a| a.sort_order);
                snap.actions = rows;
            });
        };

        tokio::join!(settings, stats, actions);

        self.snapshot.send_modify(|snap| {
            snap.loading = false;
            snap.fetched_at = Some(Utc::now());
        });
    }

    /// Applies one read result to the snapshot.
    fn settle<T>(
        &self,
        collection: Collection,
        result: StoreResult<T>,
        apply: impl FnOnce(&mut Snapshot, T),
    ) {
        match result {
            Ok(value) => self.snapshot.send_modify(|snap| {
                apply(snap, value);
                snap.failures.retain(|c| *c != collection);
            }),
            Err(e) => {
                error!(%collection, error = %e, "Error fetching dashboard data");
                metrics::counter!(
                    "dashboard_fetch_failures_total",
                    "collection" => collection.as_str()
                )
                .increment(1);

                self.snapshot.send_modify(|snap| {
                    if !snap.failures.contains(&collection) {
                        snap.failures.push(collection);
                    }
                });
            }
        }
    }
}
