pub type AppLabel = String;
pub type TableName = String;
pub type ColumnName = String;
