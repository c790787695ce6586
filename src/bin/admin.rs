//! CLI administration tool for the dashboard.
//!
//! Reads and edits the dashboard records directly in PostgreSQL, going
//! through the same loading and form logic as the web UI.
//!
//! # Usage
//!
//! ```bash
//! # Print settings, stats and actions
//! cargo run --bin admin -- show
//!
//! # Change one field
//! cargo run --bin admin -- set stats 6f1c...e2 value '$48,000'
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` parts): PostgreSQL connection string

use admin_dashboard::application::services::{AdminForm, DashboardData, EditOutcome};
use admin_dashboard::config::Config;
use admin_dashboard::domain::entities::{Collection, EditableField, FieldUpdate};
use admin_dashboard::domain::repositories::RecordStore;
use admin_dashboard::domain::snapshot::Snapshot;
use admin_dashboard::infrastructure::persistence::PgRecordStore;

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

/// CLI tool for managing dashboard content.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current dashboard content
    Show,

    /// Update one editable field
    Set {
        /// Collection: settings, stats or actions
        collection: String,

        /// Record id
        id: Uuid,

        /// Field name (welcome_name, welcome_subtitle, value, change, label)
        field: String,

        /// New value
        value: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;
    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Show => handle_show(pool).await?,
        Commands::Set {
            collection,
            id,
            field,
            value,
            yes,
        } => handle_set(pool, &collection, id, &field, value, yes).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn load(pool: PgPool) -> (Arc<dyn RecordStore>, Arc<DashboardData>) {
    let store: Arc<dyn RecordStore> = Arc::new(PgRecordStore::new(Arc::new(pool)));
    let data = Arc::new(DashboardData::new(store.clone()));
    data.refetch().await;
    (store, data)
}

/// Prints the snapshot grouped by collection.
///
/// Collections that could not be read are reported and skipped.
async fn handle_show(pool: PgPool) -> Result<()> {
    let (_, data) = load(pool).await;
    let snapshot = data.snapshot();

    println!("{}", "📊 Dashboard".bright_blue().bold());
    println!();

    for collection in &snapshot.failures {
        println!(
            "  {} {}",
            "⚠️  Could not read".yellow(),
            collection.as_str().yellow().bold()
        );
    }

    match &snapshot.settings {
        Some(s) => {
            println!("{}", "Settings".bright_white().bold());
            println!("  {:<10} {}", "id".bright_black(), s.id.to_string().bright_black());
            println!("  {:<10} {}", "name", s.welcome_name.cyan());
            println!("  {:<10} {}", "subtitle", s.welcome_subtitle.cyan());
        }
        None => println!("{}", "  No settings record".yellow()),
    }
    println!();

    println!("{}", "Stats".bright_white().bold());
    for stat in &snapshot.stats {
        let change = if stat.is_trending_up() {
            stat.change.green()
        } else {
            stat.change.red()
        };
        println!(
            "  {:<36}  {:<24} {:<12} {}",
            stat.id.to_string().bright_black(),
            stat.label,
            stat.value.cyan(),
            change
        );
    }
    println!();

    println!("{}", "Actions".bright_white().bold());
    for action in &snapshot.actions {
        println!(
            "  {:<36}  {}",
            action.id.to_string().bright_black(),
            action.label.cyan()
        );
    }
    println!();

    Ok(())
}

/// Applies one field edit through [`AdminForm`].
async fn handle_set(
    pool: PgPool,
    collection: &str,
    id: Uuid,
    field: &str,
    value: String,
    skip_confirm: bool,
) -> Result<()> {
    let collection = Collection::ALL
        .into_iter()
        .find(|c| c.as_str() == collection)
        .ok_or_else(|| anyhow!("Unknown collection: {collection}"))?;
    let field = EditableField::parse(collection, field)
        .ok_or_else(|| anyhow!("Field is not editable: {collection}.{field}"))?;

    let (store, data) = load(pool).await;
    let snapshot = data.snapshot();

    println!("{}", "✏️  Update field".bright_blue().bold());
    println!();
    println!("  Record: {} {}", collection.as_str().cyan(), id.to_string().bright_black());
    println!("  Field:  {}", field.column().cyan());
    match current_value(&snapshot, field, id) {
        Some(old) => println!("  Old:    {}", old.bright_black()),
        None => println!("  Old:    {}", "(not in snapshot)".yellow()),
    }
    println!("  New:    {}", value.bright_yellow().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Apply this change?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let form = AdminForm::new(store, data);
    match form.submit(FieldUpdate::new(field, id, value)).await {
        EditOutcome::Applied(toast) => {
            println!("{}", format!("✅ {}", toast.title).green().bold());
            Ok(())
        }
        EditOutcome::Failed(toast) => bail!(toast.title),
        EditOutcome::Blocked => bail!("Another update is in flight"),
    }
}

fn current_value(snapshot: &Snapshot, field: EditableField, id: Uuid) -> Option<String> {
    match field {
        EditableField::WelcomeName => snapshot
            .settings
            .as_ref()
            .filter(|s| s.id == id)
            .map(|s| s.welcome_name.clone()),
        EditableField::WelcomeSubtitle => snapshot
            .settings
            .as_ref()
            .filter(|s| s.id == id)
            .map(|s| s.welcome_subtitle.clone()),
        EditableField::StatValue => snapshot.stat(id).map(|s| s.value.clone()),
        EditableField::StatChange => snapshot.stat(id).map(|s| s.change.clone()),
        EditableField::ActionLabel => snapshot.action(id).map(|a| a.label.clone()),
    }
}

async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            for collection in Collection::ALL {
                let count: i64 =
                    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", collection.table_name()))
                        .fetch_one(pool)
                        .await
                        .with_context(|| format!("Table {} is not readable", collection.table_name()))?;
                println!(
                    "  {:<20} {}",
                    collection.table_name(),
                    count.to_string().bright_green().bold()
                );
            }

            println!("{}", "✅ Database connection OK".green().bold());
        }
    }

    Ok(())
}
