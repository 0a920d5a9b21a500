use indexmap::IndexMap;
use serde::Serialize;

use dbcomments_naming::{is_autogenerated_label, title_case};

use crate::descriptor::{FieldDescriptor, TableDescriptor};
use crate::schema::{ColumnName, TableName};

/// Joins the label and the help text of a column comment.
pub const COMMENT_SEPARATOR: &str = " | ";

/// Column name to synthesized comment, in field order.
pub type ColumnComments = IndexMap<ColumnName, String>;

/// Table name to table comment, in model order.
pub type TableComments = IndexMap<TableName, String>;

/// Comment for a single column, or `None` when there is nothing to say.
///
/// An empty or autogenerated label is left out; help text follows the label.
pub fn field_comment(field: &FieldDescriptor) -> Option<String> {
    let mut segments: Vec<&str> = Vec::with_capacity(2);

    if !field.display_label.is_empty()
        && !is_autogenerated_label(&field.display_label, &field.column_name)
    {
        segments.push(&field.display_label);
    }
    if !field.help_text.is_empty() {
        segments.push(&field.help_text);
    }

    if segments.is_empty() {
        None
    } else {
        Some(segments.join(COMMENT_SEPARATOR))
    }
}

/// Column comments of one table. Columns without a comment are omitted.
pub fn extract_comments(table: &TableDescriptor) -> ColumnComments {
    table
        .fields
        .iter()
        .filter_map(|field| field_comment(field).map(|c| (field.column_name.clone(), c)))
        .collect()
}

/// Table-level comment: the model's display label, title-cased.
pub fn table_comment(table: &TableDescriptor) -> String {
    title_case(&table.display_label)
}

/// Everything one synchronization pass writes.
///
/// `columns` only holds tables with at least one column comment; `tables`
/// holds the table comment of every table that was inspected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CommentsPayload {
    pub columns: IndexMap<TableName, ColumnComments>,
    pub tables: TableComments,
}

impl CommentsPayload {
    pub fn from_tables(tables: &[TableDescriptor]) -> Self {
        let mut payload = Self::default();

        for table in tables {
            payload
                .tables
                .insert(table.table_name.clone(), table_comment(table));

            let columns = extract_comments(table);
            if !columns.is_empty() {
                payload.columns.insert(table.table_name.clone(), columns);
            }
        }

        payload
    }

    /// True when no table has a column comment.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.columns.values().map(IndexMap::len).sum()
    }

    /// Table comment for `table`, or the empty string when it has none.
    pub fn table_comment(&self, table: &str) -> &str {
        self.tables.get(table).map(String::as_str).unwrap_or("")
    }

    /// `(table, column, comment)` for every column comment, in write order.
    pub fn column_entries(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.columns.iter().flat_map(|(table, columns)| {
            columns
                .iter()
                .map(move |(column, comment)| (table.as_str(), column.as_str(), comment.as_str()))
        })
    }
}
