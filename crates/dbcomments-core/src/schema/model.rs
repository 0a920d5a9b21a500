use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use dbcomments_naming::{camel_case_to_spaces, default_table_name};

use crate::descriptor::TableDescriptor;
use crate::schema::{field::FieldDef, names::TableName};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelValidationError {
    #[error("model name must not be empty")]
    EmptyModelName,
    #[error("model '{0}' has a field with an empty name")]
    EmptyFieldName(String),
    #[error("model '{0}' maps more than one field to column '{1}'")]
    DuplicateColumn(String, String),
    #[error("application '{0}' maps more than one model to table '{1}'")]
    DuplicateTable(String, String),
}

/// A data model as written in a model file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct ModelDef {
    /// CamelCase model name, e.g. `UserProfile`.
    pub name: String,
    /// Physical table name; defaults to `{app_label}_{lower(name)}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<TableName>,
    /// Human-readable model name; defaults to the model name split into words.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbose_name: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

impl ModelDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: None,
            verbose_name: None,
            fields: Vec::new(),
        }
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn with_verbose_name(mut self, verbose_name: impl Into<String>) -> Self {
        self.verbose_name = Some(verbose_name.into());
        self
    }

    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    pub fn table_name(&self, app_label: &str) -> TableName {
        match &self.table {
            Some(table) => table.clone(),
            None => default_table_name(app_label, &self.name),
        }
    }

    pub fn display_label(&self) -> String {
        match &self.verbose_name {
            Some(label) => label.clone(),
            None => camel_case_to_spaces(&self.name),
        }
    }

    /// Resolve defaults into a concrete descriptor for the given application.
    pub fn resolve(&self, app_label: &str) -> TableDescriptor {
        TableDescriptor {
            table_name: self.table_name(app_label),
            display_label: self.display_label(),
            fields: self.fields.iter().map(FieldDef::resolve).collect(),
        }
    }

    /// Column names must be unique within a model.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        if self.name.trim().is_empty() {
            return Err(ModelValidationError::EmptyModelName);
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.name.trim().is_empty() {
                return Err(ModelValidationError::EmptyFieldName(self.name.clone()));
            }
            if !seen.insert(field.column_name()) {
                return Err(ModelValidationError::DuplicateColumn(
                    self.name.clone(),
                    field.column_name().to_string(),
                ));
            }
        }

        Ok(())
    }
}
