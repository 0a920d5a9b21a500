use dbcomments_core::CommentsPayload;

use crate::error::QueryError;
use crate::sql::CommentStatement;

/// Statements for a payload, in payload order: each table's comment first,
/// then its column comments.
pub fn build_comment_queries(payload: &CommentsPayload) -> Result<Vec<CommentStatement>, QueryError> {
    let mut queries = Vec::with_capacity(payload.columns.len() + payload.column_count());

    for (table, columns) in &payload.columns {
        queries.push(CommentStatement::table(table, payload.table_comment(table))?);
        for (column, comment) in columns {
            queries.push(CommentStatement::column(table, column, comment)?);
        }
    }

    Ok(queries)
}
