//! View models derived from the snapshot.
//!
//! Everything here is a pure function of a [`Snapshot`] (plus, for the
//! admin tab, the form's drafts and in-flight flag). Templates only read
//! these structs.

use crate::application::services::AdminForm;
use crate::domain::entities::{EditableField, Settings, Stat};
use crate::domain::snapshot::Snapshot;
use uuid::Uuid;

const FALLBACK_HEADING: &str = "Welcome back!";
const FALLBACK_SUBTITLE: &str = "Here's what's happening with your business.";

/// Heading and subtitle at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeBanner {
    pub heading: String,
    pub subtitle: String,
}

impl WelcomeBanner {
    pub fn from_settings(settings: Option<&Settings>) -> Self {
        match settings {
            Some(s) => Self {
                heading: format!("Welcome back, {}!", s.welcome_name),
                subtitle: s.welcome_subtitle.clone(),
            },
            None => Self {
                heading: FALLBACK_HEADING.to_string(),
                subtitle: FALLBACK_SUBTITLE.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    pub change: String,
    pub icon: String,
    pub color: String,
    pub trending_up: bool,
}

impl From<&Stat> for StatCard {
    fn from(stat: &Stat) -> Self {
        Self {
            label: stat.label.clone(),
            value: stat.value.clone(),
            change: stat.change.clone(),
            icon: stat.icon.clone(),
            color: stat.color.clone(),
            trending_up: stat.is_trending_up(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ActionButton {
    pub label: String,
    pub icon: String,
    pub color: String,
}

/// Everything the dashboard page renders.
#[derive(Debug, Clone)]
pub struct DashboardView {
    /// While true the page shows only a placeholder.
    pub loading: bool,
    pub banner: WelcomeBanner,
    pub stats: Vec<StatCard>,
    pub actions: Vec<ActionButton>,
}

impl DashboardView {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            loading: snapshot.loading,
            banner: WelcomeBanner::from_settings(snapshot.settings.as_ref()),
            stats: snapshot.stats.iter().map(StatCard::from).collect(),
            actions: snapshot
                .actions
                .iter()
                .map(|a| ActionButton {
                    label: a.label.clone(),
                    icon: a.icon.clone(),
                    color: a.color.clone(),
                })
                .collect(),
        }
    }
}

/// One text input of the admin form.
#[derive(Debug, Clone)]
pub struct FieldInput {
    pub collection: &'static str,
    pub field: &'static str,
    pub id: String,
    pub label: String,
    pub value: String,
}

impl FieldInput {
    fn new(form: &AdminForm, field: EditableField, id: Uuid, label: &str, stored: &str) -> Self {
        Self {
            collection: field.collection().as_str(),
            field: field.column(),
            id: id.to_string(),
            label: label.to_string(),
            value: form.input_value(field, id, stored),
        }
    }
}

/// Inputs grouped under one stat heading.
#[derive(Debug, Clone)]
pub struct StatInputs {
    pub label: String,
    pub inputs: Vec<FieldInput>,
}

/// Everything the admin tab renders.
#[derive(Debug, Clone)]
pub struct AdminView {
    pub loading: bool,
    /// When true every input renders disabled.
    pub updating: bool,
    pub settings: Vec<FieldInput>,
    pub stats: Vec<StatInputs>,
    pub actions: Vec<FieldInput>,
}

impl AdminView {
    pub fn build(snapshot: &Snapshot, form: &AdminForm) -> Self {
        let settings = snapshot
            .settings
            .iter()
            .flat_map(|s| {
                [
                    FieldInput::new(form, EditableField::WelcomeName, s.id, "Name", &s.welcome_name),
                    FieldInput::new(
                        form,
                        EditableField::WelcomeSubtitle,
                        s.id,
                        "Subtitle",
                        &s.welcome_subtitle,
                    ),
                ]
            })
            .collect();

        let stats = snapshot
            .stats
            .iter()
            .map(|s| StatInputs {
                label: s.label.clone(),
                inputs: vec![
                    FieldInput::new(form, EditableField::StatValue, s.id, "Value", &s.value),
                    FieldInput::new(form, EditableField::StatChange, s.id, "Change", &s.change),
                ],
            })
            .collect();

        let actions = snapshot
            .actions
            .iter()
            .map(|a| FieldInput::new(form, EditableField::ActionLabel, a.id, &a.label, &a.label))
            .collect();

        Self {
            loading: snapshot.loading,
            updating: form.is_updating(),
            settings,
            stats,
            actions,
        }
    }
}
