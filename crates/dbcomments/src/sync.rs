use dbcomments_config::{DEFAULT_DB_ALIAS, DbCommentsConfig};
use dbcomments_core::{AppDef, CommentsPayload};

use crate::connection::CommentConnection;
use crate::error::SyncError;
use crate::router::MigrationRouter;
use crate::writer::write_comments;

/// Options a migration runner passes along after migrating one application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    /// 2 and above prints one line per written column comment.
    pub verbosity: u8,
    /// Accepted for parity with other post-migration hooks; never read.
    pub interactive: bool,
    /// Alias of the database to write to.
    pub database: String,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            verbosity: 2,
            interactive: true,
            database: DEFAULT_DB_ALIAS.to_string(),
        }
    }
}

impl SyncOptions {
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoModels,
    UnsupportedEngine,
    MigrationNotAllowed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Skipped(SkipReason),
    /// Models exist but none of their columns carries a comment.
    NothingToWrite,
    Written(CommentsPayload),
}

impl SyncOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, SyncOutcome::Written(_))
    }

    /// One line per written column comment.
    pub fn report_lines(&self) -> Vec<String> {
        match self {
            SyncOutcome::Written(payload) => payload
                .column_entries()
                .map(|(table, column, comment)| {
                    format!("Adding comment in {table} for {column} = '{comment}'")
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// The lines printed after a pass: [`Self::report_lines`] from verbosity 2 up.
    pub fn verbose_report(&self, verbosity: u8) -> Vec<String> {
        if verbosity >= 2 {
            self.report_lines()
        } else {
            Vec::new()
        }
    }
}

/// What a synchronization pass needs besides the application itself.
pub struct SyncContext<'a, C, R> {
    pub config: &'a DbCommentsConfig,
    pub router: &'a R,
    pub connection: &'a C,
}

impl<'a, C, R> SyncContext<'a, C, R> {
    pub fn new(config: &'a DbCommentsConfig, router: &'a R, connection: &'a C) -> Self {
        Self {
            config,
            router,
            connection,
        }
    }
}

/// Copy labels and help texts of one application's models into database
/// comments. Meant to run right after the application's migrations.
pub async fn sync_app_comments<C, R>(
    app: &AppDef,
    ctx: &SyncContext<'_, C, R>,
    options: &SyncOptions,
) -> Result<SyncOutcome, SyncError>
where
    C: CommentConnection,
    R: MigrationRouter,
{
    let database = options.database.as_str();

    if !app.has_models() {
        tracing::debug!(app = %app.label, "no models, skipping");
        return Ok(SyncOutcome::Skipped(SkipReason::NoModels));
    }

    let engine = ctx
        .config
        .engine(database)
        .ok_or_else(|| SyncError::UnknownDatabase(database.to_string()))?;
    if !engine.supports_comments() {
        tracing::debug!(app = %app.label, database, %engine, "engine has no comment support, skipping");
        return Ok(SyncOutcome::Skipped(SkipReason::UnsupportedEngine));
    }

    if !ctx.router.allow_migrate(database, &app.label) {
        tracing::debug!(app = %app.label, database, "migration not allowed, skipping");
        return Ok(SyncOutcome::Skipped(SkipReason::MigrationNotAllowed));
    }

    let payload = CommentsPayload::from_tables(&app.descriptors());
    if payload.is_empty() {
        tracing::debug!(app = %app.label, "no column comments");
        return Ok(SyncOutcome::NothingToWrite);
    }

    write_comments(&payload, ctx.connection).await?;

    let outcome = SyncOutcome::Written(payload);
    for line in outcome.verbose_report(options.verbosity) {
        println!("{line}");
    }
    Ok(outcome)
}

/// Run [`sync_app_comments`] for each application in order, stopping at the
/// first error.
pub async fn sync_all<C, R>(
    apps: &[AppDef],
    ctx: &SyncContext<'_, C, R>,
    options: &SyncOptions,
) -> Result<Vec<(String, SyncOutcome)>, SyncError>
where
    C: CommentConnection,
    R: MigrationRouter,
{
    let mut outcomes = Vec::with_capacity(apps.len());
    for app in apps {
        let outcome = sync_app_comments(app, ctx, options).await?;
        outcomes.push((app.label.clone(), outcome));
    }
    Ok(outcomes)
}
