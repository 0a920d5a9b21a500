use serde::{Deserialize, Serialize};

use dbcomments_naming::auto_label;

use crate::descriptor::FieldDescriptor;
use crate::schema::names::ColumnName;

/// One model attribute as written in a model file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct FieldDef {
    pub name: String,
    /// Physical column name; defaults to `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<ColumnName>,
    /// Human-readable label; defaults to the column name with underscores as spaces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbose_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
}

impl FieldDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column: None,
            verbose_name: None,
            help_text: None,
        }
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    pub fn with_verbose_name(mut self, verbose_name: impl Into<String>) -> Self {
        self.verbose_name = Some(verbose_name.into());
        self
    }

    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    pub fn column_name(&self) -> &str {
        self.column.as_deref().unwrap_or(&self.name)
    }

    /// Resolve defaults into a concrete descriptor.
    pub fn resolve(&self) -> FieldDescriptor {
        let column_name = self.column_name().to_string();
        let display_label = match &self.verbose_name {
            Some(label) => label.clone(),
            None => auto_label(&column_name),
        };

        FieldDescriptor {
            column_name,
            display_label,
            help_text: self.help_text.clone().unwrap_or_default(),
        }
    }
}
