use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dbcomments_config::DbCommentsConfig;

/// Name of the configuration file looked up in the project root.
pub const CONFIG_FILE: &str = "dbcomments.json";

/// Load dbcomments.json config from current directory.
pub fn load_config() -> Result<DbCommentsConfig> {
    let path = PathBuf::from(CONFIG_FILE);
    if !path.exists() {
        anyhow::bail!("{CONFIG_FILE} not found. Run 'dbcomments init' first.");
    }

    read_config(&path)
}

/// Load config from a specific path.
pub fn load_config_from_path(path: PathBuf) -> Result<DbCommentsConfig> {
    if !path.exists() {
        anyhow::bail!("{CONFIG_FILE} not found at: {}", path.display());
    }

    read_config(&path)
}

/// Load config from project root, with fallback to defaults.
pub fn load_config_or_default(project_root: Option<PathBuf>) -> Result<DbCommentsConfig> {
    let config_path = match project_root {
        Some(root) => root.join(CONFIG_FILE),
        None => PathBuf::from(CONFIG_FILE),
    };

    if config_path.exists() {
        load_config_from_path(config_path)
    } else {
        tracing::debug!(path = %config_path.display(), "no config file, using defaults");
        Ok(DbCommentsConfig::default())
    }
}

fn read_config(path: &Path) -> Result<DbCommentsConfig> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let config: DbCommentsConfig =
        serde_json::from_str(&content).with_context(|| format!("parse {}", path.display()))?;
    Ok(config)
}
