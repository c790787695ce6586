//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::effects::{ConfettiController, EffectTrigger};
use crate::application::services::{AdminForm, DashboardData};
use crate::domain::repositories::RecordStore;

/// State shared by every handler.
///
/// All members are reference-counted; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub dashboard: Arc<DashboardData>,
    pub admin_form: Arc<AdminForm>,
    pub effects: Arc<dyn EffectTrigger>,
}

impl AppState {
    /// Wires the services over one record store.
    ///
    /// Does not start loading; call
    /// [`DashboardData::spawn_initial_load`] on `dashboard` for that.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        let dashboard = Arc::new(DashboardData::new(store.clone()));
        let admin_form = Arc::new(AdminForm::new(store.clone(), dashboard.clone()));

        Self {
            store,
            dashboard,
            admin_form,
            effects: Arc::new(ConfettiController::new()),
        }
    }

    /// Replaces the effect trigger.
    pub fn with_effects(mut self, effects: Arc<dyn EffectTrigger>) -> Self {
        self.effects = effects;
        self
    }
}
