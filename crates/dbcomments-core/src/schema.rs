pub mod app;
pub mod field;
pub mod model;
pub mod names;

pub use app::AppDef;
pub use field::FieldDef;
pub use model::{ModelDef, ModelValidationError};
pub use names::{AppLabel, ColumnName, TableName};
