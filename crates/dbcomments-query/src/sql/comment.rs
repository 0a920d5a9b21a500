use crate::error::QueryError;
use crate::sql::helpers::quote_literal;
use crate::sql::types::CommentTarget;

/// `COMMENT ON <object> IS <comment>` with the comment kept as a bound value.
///
/// Only built through [`CommentStatement::new`] and its shorthands, so the
/// quoted identifier is always valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentStatement {
    target: CommentTarget,
    identifier: String,
    comment: String,
}

impl CommentStatement {
    /// Fails on identifiers Postgres cannot represent.
    pub fn new(target: CommentTarget, comment: impl Into<String>) -> Result<Self, QueryError> {
        let identifier = target.identifier()?;
        Ok(Self {
            target,
            identifier,
            comment: comment.into(),
        })
    }

    /// Comment on a table.
    pub fn table(table: &str, comment: &str) -> Result<Self, QueryError> {
        Self::new(
            CommentTarget::Table {
                table: table.to_string(),
            },
            comment,
        )
    }

    /// Comment on a column.
    pub fn column(table: &str, column: &str, comment: &str) -> Result<Self, QueryError> {
        Self::new(
            CommentTarget::Column {
                table: table.to_string(),
                column: column.to_string(),
            },
            comment,
        )
    }

    pub fn target(&self) -> &CommentTarget {
        &self.target
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Statement text with the comment as the `$1` placeholder.
    pub fn sql(&self) -> String {
        format!("{} $1", self.prefix())
    }

    pub fn binds(&self) -> Vec<String> {
        vec![self.comment.clone()]
    }

    /// Statement text with the comment inlined as an escaped literal.
    pub fn to_executable_sql(&self) -> String {
        format!("{} {}", self.prefix(), quote_literal(&self.comment))
    }

    fn prefix(&self) -> String {
        format!("COMMENT ON {} {} IS", self.target.object_type(), self.identifier)
    }
}
