pub mod comments;
pub mod descriptor;
pub mod engine;
pub mod schema;

pub use comments::{
    COMMENT_SEPARATOR, ColumnComments, CommentsPayload, TableComments, extract_comments,
    field_comment, table_comment,
};
pub use descriptor::{FieldDescriptor, TableDescriptor};
pub use engine::{DatabaseEngine, POSTGRES_ENGINES};
pub use schema::{
    AppDef, AppLabel, ColumnName, FieldDef, ModelDef, ModelValidationError, TableName,
};
