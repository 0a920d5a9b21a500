//! Copies model labels and help texts into Postgres table and column comments.
//!
//! Run [`sync_app_comments`] after an application's migrations: it checks the
//! database engine and routing rules, derives the comments from the model
//! descriptors and writes them in a single transaction.

pub mod connection;
pub mod error;
pub mod router;
pub mod sync;
pub mod writer;

pub use connection::{CommentConnection, CommentTransaction, LazyConnection};
pub use error::SyncError;
pub use router::{AllowAll, MigrationRouter};
pub use sync::{SkipReason, SyncContext, SyncOptions, SyncOutcome, sync_all, sync_app_comments};
pub use writer::write_comments;

// Re-export commonly used items
pub use dbcomments_config::{DbCommentsConfig, DEFAULT_DB_ALIAS};
pub use dbcomments_core::{AppDef, CommentsPayload, DatabaseEngine, FieldDef, ModelDef};
