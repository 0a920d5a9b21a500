use dbcomments_config::DbCommentsConfig;

/// Decides whether an application's tables may be touched on a database.
pub trait MigrationRouter {
    fn allow_migrate(&self, database: &str, app_label: &str) -> bool;
}

/// Router that allows every application on every database.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl MigrationRouter for AllowAll {
    fn allow_migrate(&self, _database: &str, _app_label: &str) -> bool {
        true
    }
}

/// Routes by the `apps` / `excludeApps` lists of each configured database.
/// Unknown aliases allow nothing.
impl MigrationRouter for DbCommentsConfig {
    fn allow_migrate(&self, database: &str, app_label: &str) -> bool {
        self.database(database)
            .is_some_and(|db| db.allows_app(app_label))
    }
}

impl<R: MigrationRouter + ?Sized> MigrationRouter for &R {
    fn allow_migrate(&self, database: &str, app_label: &str) -> bool {
        (**self).allow_migrate(database, app_label)
    }
}
