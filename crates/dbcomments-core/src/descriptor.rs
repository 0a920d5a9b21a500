//! Resolved model metadata handed to the comment extractor.
//!
//! Every value here is a concrete string. Defaults (derived labels, table
//! names) are applied while resolving a [`crate::ModelDef`], never later.

use crate::schema::{ColumnName, TableName};

/// One column of a data model.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldDescriptor {
    pub column_name: ColumnName,
    pub display_label: String,
    /// Empty when the field has no help text.
    pub help_text: String,
}

impl FieldDescriptor {
    pub fn new(
        column_name: impl Into<String>,
        display_label: impl Into<String>,
        help_text: impl Into<String>,
    ) -> Self {
        Self {
            column_name: column_name.into(),
            display_label: display_label.into(),
            help_text: help_text.into(),
        }
    }
}

/// One data model and its columns, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableDescriptor {
    pub table_name: TableName,
    pub display_label: String,
    pub fields: Vec<FieldDescriptor>,
}

impl TableDescriptor {
    pub fn new(table_name: impl Into<String>, display_label: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            display_label: display_label.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }
}
