pub mod comment;
pub mod helpers;
pub mod types;

pub use comment::CommentStatement;
pub use types::CommentTarget;
