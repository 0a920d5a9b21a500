use std::fmt;

use crate::error::QueryError;
use crate::sql::helpers::quote_ident;

/// Object a comment is attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentTarget {
    Table { table: String },
    Column { table: String, column: String },
}

impl CommentTarget {
    pub fn object_type(&self) -> &'static str {
        match self {
            CommentTarget::Table { .. } => "TABLE",
            CommentTarget::Column { .. } => "COLUMN",
        }
    }

    pub fn table(&self) -> &str {
        match self {
            CommentTarget::Table { table } | CommentTarget::Column { table, .. } => table,
        }
    }

    /// Quoted object name: `"table"` or `"table"."column"`.
    pub fn identifier(&self) -> Result<String, QueryError> {
        match self {
            CommentTarget::Table { table } => quote_ident(table),
            CommentTarget::Column { table, column } => {
                Ok(format!("{}.{}", quote_ident(table)?, quote_ident(column)?))
            }
        }
    }
}

impl fmt::Display for CommentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommentTarget::Table { table } => write!(f, "{table}"),
            CommentTarget::Column { table, column } => write!(f, "{table}.{column}"),
        }
    }
}
