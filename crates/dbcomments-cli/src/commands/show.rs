use anyhow::{Context, Result};
use colored::Colorize;
use dbcomments_core::{AppDef, CommentsPayload};

use crate::utils::{load_project, select_apps};

pub fn cmd_show(app: Option<String>, json: bool) -> Result<()> {
    let (_, apps) = load_project()?;
    let apps = select_apps(apps, app.as_deref())?;

    if json {
        let mut by_app = serde_json::Map::new();
        for app in &apps {
            let payload = CommentsPayload::from_tables(&app.descriptors());
            let value = serde_json::to_value(&payload).context("serialize comments")?;
            by_app.insert(app.label.clone(), value);
        }
        println!(
            "{}",
            serde_json::to_string_pretty(&by_app).context("stringify comments")?
        );
        return Ok(());
    }

    if apps.is_empty() {
        println!("{}", "No applications found.".bright_yellow());
        return Ok(());
    }

    for app in &apps {
        print_app(app);
    }
    Ok(())
}

fn print_app(app: &AppDef) {
    let payload = CommentsPayload::from_tables(&app.descriptors());
    println!(
        "{} {} ({} {})",
        "Application:".bright_cyan().bold(),
        app.label.bright_green(),
        app.models.len().to_string().bright_blue(),
        "models".bright_white()
    );

    for (table, comment) in &payload.tables {
        println!("  {} {}", table.bright_white().bold(), format!("'{comment}'").bright_magenta());
        match payload.columns.get(table) {
            Some(columns) => {
                for (column, comment) in columns {
                    println!(
                        "    {} {} {}",
                        "-".bright_white(),
                        column.cyan(),
                        format!("'{comment}'").bright_white()
                    );
                }
            }
            None => println!("    {}", "(no column comments)".bright_black()),
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{CwdGuard, PERSON_JSON, write_config, write_model};
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    #[serial]
    fn cmd_show_lists_comments() {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(tmp.path());
        write_config("postgres");
        write_model("people", "person.json", PERSON_JSON);

        cmd_show(None, false).unwrap();
        cmd_show(Some("people".into()), true).unwrap();
    }

    #[test]
    #[serial]
    fn cmd_show_without_models_dir_is_ok() {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(tmp.path());
        write_config("postgres");

        cmd_show(None, false).unwrap();
    }

    #[test]
    #[serial]
    fn cmd_show_unknown_app_fails() {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(tmp.path());
        write_config("postgres");
        write_model("people", "person.json", PERSON_JSON);

        let err = cmd_show(Some("orders".into()), false).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
