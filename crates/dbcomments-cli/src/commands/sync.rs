use anyhow::{Context, Result, bail};
use colored::Colorize;
use dbcomments::{LazyConnection, SkipReason, SyncContext, SyncOptions, SyncOutcome, sync_all};

use crate::utils::{database_alias, load_project, select_apps};

pub async fn cmd_sync(app: Option<String>, database: Option<String>, verbosity: u8) -> Result<()> {
    let (config, apps) = load_project()?;
    let apps = select_apps(apps, app.as_deref())?;
    let alias = database_alias(&config, database);

    let Some(db) = config.database(&alias) else {
        bail!("database '{alias}' is not configured");
    };
    // Every application is skipped on other engines, so the url is never dialed.
    let url = if db.engine().supports_comments() {
        db.resolve_url()
            .with_context(|| format!("resolve url of database '{alias}'"))?
    } else {
        String::new()
    };

    tracing::debug!(database = %alias, apps = apps.len(), "syncing comments");
    let connection = LazyConnection::new(url);
    let ctx = SyncContext::new(&config, &config, &connection);
    let options = SyncOptions::default()
        .with_database(alias.as_str())
        .with_verbosity(verbosity);

    let outcomes = sync_all(&apps, &ctx, &options)
        .await
        .with_context(|| format!("write comments to database '{alias}'"))?;

    if verbosity >= 1 {
        for (label, outcome) in &outcomes {
            print_outcome(label, outcome);
        }
    }
    Ok(())
}

fn describe_outcome(outcome: &SyncOutcome) -> String {
    match outcome {
        SyncOutcome::Written(payload) => format!(
            "{} column comments on {} tables",
            payload.column_count(),
            payload.columns.len()
        ),
        SyncOutcome::NothingToWrite => "no column comments".to_string(),
        SyncOutcome::Skipped(SkipReason::NoModels) => "skipped, no models".to_string(),
        SyncOutcome::Skipped(SkipReason::UnsupportedEngine) => {
            "skipped, engine has no comment support".to_string()
        }
        SyncOutcome::Skipped(SkipReason::MigrationNotAllowed) => {
            "skipped, not routed to this database".to_string()
        }
    }
}

fn print_outcome(label: &str, outcome: &SyncOutcome) {
    let status = describe_outcome(outcome);
    let status = match outcome {
        SyncOutcome::Written(_) => status.bright_green(),
        SyncOutcome::NothingToWrite => status.bright_white(),
        SyncOutcome::Skipped(SkipReason::NoModels) => status.bright_black(),
        SyncOutcome::Skipped(_) => status.bright_yellow(),
    };
    println!("{} {}", format!("{label}:").bright_cyan().bold(), status);
}
