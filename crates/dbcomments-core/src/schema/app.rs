use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::descriptor::TableDescriptor;
use crate::schema::{
    model::{ModelDef, ModelValidationError},
    names::AppLabel,
};

/// An application and the models it defines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct AppDef {
    pub label: AppLabel,
    #[serde(default)]
    pub models: Vec<ModelDef>,
}

impl AppDef {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            models: Vec::new(),
        }
    }

    pub fn with_model(mut self, model: ModelDef) -> Self {
        self.models.push(model);
        self
    }

    pub fn has_models(&self) -> bool {
        !self.models.is_empty()
    }

    /// Table descriptors for every model, in declaration order.
    pub fn descriptors(&self) -> Vec<TableDescriptor> {
        self.models.iter().map(|m| m.resolve(&self.label)).collect()
    }

    /// Validates every model and checks that table names are unique.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        let mut tables = HashSet::new();
        for model in &self.models {
            model.validate()?;
            let table = model.table_name(&self.label);
            if !tables.insert(table.clone()) {
                return Err(ModelValidationError::DuplicateTable(
                    self.label.clone(),
                    table,
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldDef;

    #[test]
    fn empty_app_has_no_models() {
        let app = AppDef::new("people");
        assert!(!app.has_models());
        assert!(app.descriptors().is_empty());
        assert!(app.validate().is_ok());
    }

    #[test]
    fn descriptors_use_app_label_for_table_names() {
        let app = AppDef::new("shop")
            .with_model(ModelDef::new("Order").with_field(FieldDef::new("id")))
            .with_model(ModelDef::new("OrderLine").with_table("order_lines"));

        let tables: Vec<_> = app
            .descriptors()
            .into_iter()
            .map(|t| t.table_name)
            .collect();
        assert_eq!(tables, vec!["shop_order", "order_lines"]);
    }

    #[test]
    fn validate_rejects_duplicate_tables() {
        let app = AppDef::new("shop")
            .with_model(ModelDef::new("Order"))
            .with_model(ModelDef::new("Other").with_table("shop_order"));

        assert_eq!(
            app.validate().unwrap_err(),
            ModelValidationError::DuplicateTable("shop".into(), "shop_order".into())
        );
    }

    #[test]
    fn validate_surfaces_model_errors() {
        let app = AppDef::new("shop").with_model(
            ModelDef::new("Order")
                .with_field(FieldDef::new("total"))
                .with_field(FieldDef::new("total")),
        );
        assert!(matches!(
            app.validate(),
            Err(ModelValidationError::DuplicateColumn(_, _))
        ));
    }
}
