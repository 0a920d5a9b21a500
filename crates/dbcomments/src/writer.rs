use dbcomments_core::CommentsPayload;
use dbcomments_query::build_comment_queries;

use crate::connection::{CommentConnection, CommentTransaction};
use crate::error::SyncError;

/// Write every table and column comment of `payload` in one transaction.
///
/// Statements run in payload order. The first failing statement rolls the
/// whole transaction back and its error is returned as is. The caller decides
/// whether an empty payload is worth a transaction.
pub async fn write_comments<C>(payload: &CommentsPayload, connection: &C) -> Result<(), SyncError>
where
    C: CommentConnection,
{
    let statements = build_comment_queries(payload)?;

    let txn = connection.begin().await?;
    for statement in &statements {
        let sql = statement.to_executable_sql();
        tracing::trace!(target_object = %statement.target(), "COMMENT ON");

        if let Err(err) = txn.execute(&sql).await {
            tracing::debug!(target_object = %statement.target(), error = %err, "comment failed, rolling back");
            if let Err(rollback_err) = txn.rollback().await {
                tracing::warn!(error = %rollback_err, "rollback after failed comment also failed");
            }
            return Err(err.into());
        }
    }
    txn.commit().await?;

    tracing::info!(
        tables = payload.columns.len(),
        columns = payload.column_count(),
        "comments written"
    );
    Ok(())
}
