use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use dbcomments_core::DatabaseEngine;

use crate::file_format::FileFormat;

/// Alias used when no database is named explicitly.
pub const DEFAULT_DB_ALIAS: &str = "default";

/// Prefix marking a database url that is read from the environment.
const ENV_URL_PREFIX: &str = "env:";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("database url variable '{0}' is not set")]
    MissingUrlVariable(String),
}

/// One configured database connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct DatabaseConfig {
    /// Engine identifier, e.g. `django.db.backends.postgresql` or `postgres`.
    pub engine: String,
    /// Connection url, or `env:VAR` to read it from the environment.
    pub url: String,
    /// Applications allowed on this database. `None` allows every application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apps: Option<Vec<String>>,
    /// Applications never synchronized on this database.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_apps: Vec<String>,
}

impl DatabaseConfig {
    pub fn new(engine: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            engine: engine.into(),
            url: url.into(),
            apps: None,
            exclude_apps: Vec::new(),
        }
    }

    pub fn engine(&self) -> DatabaseEngine {
        DatabaseEngine::classify(&self.engine)
    }

    /// Whether comments of `app_label` may be written to this database.
    pub fn allows_app(&self, app_label: &str) -> bool {
        if self.exclude_apps.iter().any(|a| a == app_label) {
            return false;
        }
        match &self.apps {
            Some(apps) => apps.iter().any(|a| a == app_label),
            None => true,
        }
    }

    /// Connection url with `env:VAR` indirection resolved.
    pub fn resolve_url(&self) -> Result<String, ConfigError> {
        match self.url.strip_prefix(ENV_URL_PREFIX) {
            Some(var) => std::env::var(var).map_err(|_| ConfigError::MissingUrlVariable(var.to_string())),
            None => Ok(self.url.clone()),
        }
    }
}

fn default_models_dir() -> PathBuf {
    PathBuf::from("models")
}

fn default_database_alias() -> String {
    DEFAULT_DB_ALIAS.to_string()
}

fn default_databases() -> IndexMap<String, DatabaseConfig> {
    IndexMap::from([(
        DEFAULT_DB_ALIAS.to_string(),
        DatabaseConfig::new("django.db.backends.postgresql", "env:DATABASE_URL"),
    )])
}

/// Top-level dbcomments configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct DbCommentsConfig {
    #[serde(default = "default_models_dir")]
    pub models_dir: PathBuf,
    #[serde(default)]
    pub model_format: FileFormat,
    #[serde(default = "default_database_alias")]
    pub default_database: String,
    #[serde(default = "default_databases")]
    pub databases: IndexMap<String, DatabaseConfig>,
}

impl Default for DbCommentsConfig {
    fn default() -> Self {
        Self {
            models_dir: default_models_dir(),
            model_format: FileFormat::Json,
            default_database: default_database_alias(),
            databases: default_databases(),
        }
    }
}

impl DbCommentsConfig {
    /// Path where model definitions are stored.
    pub fn models_dir(&self) -> &Path {
        &self.models_dir
    }

    /// Preferred file format for new model files.
    pub fn model_format(&self) -> FileFormat {
        self.model_format
    }

    pub fn default_database(&self) -> &str {
        &self.default_database
    }

    pub fn database(&self, alias: &str) -> Option<&DatabaseConfig> {
        self.databases.get(alias)
    }

    /// Engine family configured for `alias`, if the alias exists.
    pub fn engine(&self, alias: &str) -> Option<DatabaseEngine> {
        self.database(alias).map(DatabaseConfig::engine)
    }
}
