use anyhow::{Result, bail};
use colored::Colorize;
use dbcomments::MigrationRouter;
use dbcomments_config::DbCommentsConfig;
use dbcomments_core::{AppDef, CommentsPayload};
use dbcomments_query::build_comment_queries;

use crate::utils::{database_alias, load_project, select_apps};

pub fn cmd_sql(app: Option<String>, database: Option<String>) -> Result<()> {
    let (config, apps) = load_project()?;
    let apps = select_apps(apps, app.as_deref())?;
    let alias = database_alias(&config, database);

    let Some(db) = config.database(&alias) else {
        bail!("database '{alias}' is not configured");
    };
    if !db.engine().supports_comments() {
        println!(
            "{} {}",
            format!("Database '{alias}' uses engine {}.", db.engine).bright_yellow(),
            "Comments are only written on PostgreSQL; no SQL to emit.".bright_white()
        );
        return Ok(());
    }

    for app in &apps {
        emit_sql(&config, &alias, app)?;
    }
    Ok(())
}

fn emit_sql(config: &DbCommentsConfig, alias: &str, app: &AppDef) -> Result<()> {
    println!(
        "{} {}",
        "Application:".bright_cyan().bold(),
        app.label.bright_green()
    );

    if !config.allow_migrate(alias, &app.label) {
        println!(
            "  {}",
            format!("Not routed to database '{alias}'; skipped.").bright_yellow()
        );
        println!();
        return Ok(());
    }

    let payload = CommentsPayload::from_tables(&app.descriptors());
    if payload.is_empty() {
        println!("  {}", "No column comments; no SQL to emit.".bright_green());
        println!();
        return Ok(());
    }

    let queries = build_comment_queries(&payload)
        .map_err(|e| anyhow::anyhow!("query build error: {}", e))?;
    println!(
        "{} {}",
        "SQL statements:".bright_cyan().bold(),
        queries.len().to_string().bright_yellow().bold()
    );

    for (i, q) in queries.iter().enumerate() {
        println!(
            "{}. {}",
            (i + 1).to_string().bright_magenta().bold(),
            q.sql().bright_white()
        );
        println!("   {} {:?}", "binds:".bright_cyan(), q.binds());
    }
    println!();

    Ok(())
}
