use dbcomments_query::QueryError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    /// Raised by the database while writing comments; surfaced unchanged.
    #[error(transparent)]
    Database(#[from] DbErr),
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error("database alias '{0}' is not configured")]
    UnknownDatabase(String),
}
