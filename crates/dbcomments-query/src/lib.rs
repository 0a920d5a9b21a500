pub mod builder;
pub mod error;
pub mod sql;

pub use builder::build_comment_queries;
pub use error::QueryError;
pub use sql::{CommentStatement, CommentTarget};
