use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait,
};
use tokio::sync::OnceCell;

/// A database the comment writer can open transactions on.
#[async_trait]
pub trait CommentConnection: Send + Sync {
    type Transaction: CommentTransaction;

    async fn begin(&self) -> Result<Self::Transaction, DbErr>;
}

/// An open transaction. Dropping it without `commit` discards its statements.
#[async_trait]
pub trait CommentTransaction: Send + Sync + Sized {
    async fn execute(&self, sql: &str) -> Result<(), DbErr>;

    async fn commit(self) -> Result<(), DbErr>;

    async fn rollback(self) -> Result<(), DbErr>;
}

#[async_trait]
impl CommentConnection for DatabaseConnection {
    type Transaction = DatabaseTransaction;

    async fn begin(&self) -> Result<DatabaseTransaction, DbErr> {
        TransactionTrait::begin(self).await
    }
}

#[async_trait]
impl CommentTransaction for DatabaseTransaction {
    async fn execute(&self, sql: &str) -> Result<(), DbErr> {
        self.execute_unprepared(sql).await.map(|_| ())
    }

    async fn commit(self) -> Result<(), DbErr> {
        DatabaseTransaction::commit(self).await
    }

    async fn rollback(self) -> Result<(), DbErr> {
        DatabaseTransaction::rollback(self).await
    }
}

/// Connects on the first `begin`.
///
/// A pass that is skipped, or finds nothing to write, never opens a
/// connection.
#[derive(Debug)]
pub struct LazyConnection {
    url: String,
    inner: OnceCell<DatabaseConnection>,
}

impl LazyConnection {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            inner: OnceCell::new(),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.inner.initialized()
    }

    async fn connection(&self) -> Result<&DatabaseConnection, DbErr> {
        self.inner
            .get_or_try_init(|| async {
                tracing::debug!("opening database connection");
                Database::connect(self.url.as_str()).await
            })
            .await
    }
}

#[async_trait]
impl CommentConnection for LazyConnection {
    type Transaction = DatabaseTransaction;

    async fn begin(&self) -> Result<DatabaseTransaction, DbErr> {
        let connection = self.connection().await?;
        TransactionTrait::begin(connection).await
    }
}

#[cfg(test)]
pub(crate) mod recording {
    //! In-memory connection that records what a transaction commits.

    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Debug, Default, Clone, PartialEq, Eq)]
    pub struct Journal {
        pub begins: usize,
        pub commits: usize,
        pub rollbacks: usize,
        /// Every statement the connection saw, committed or not.
        pub executed: Vec<String>,
        /// Statements of committed transactions only.
        pub committed: Vec<String>,
    }

    #[derive(Debug, Default, Clone)]
    pub struct RecordingConnection {
        journal: Arc<Mutex<Journal>>,
        fail_on: Option<usize>,
    }

    impl RecordingConnection {
        pub fn new() -> Self {
            Self::default()
        }

        /// Fail the statement at `index` (0-based) of each transaction.
        pub fn failing_on(index: usize) -> Self {
            Self {
                fail_on: Some(index),
                ..Self::default()
            }
        }

        pub fn journal(&self) -> Journal {
            self.journal.lock().unwrap().clone()
        }
    }

    #[derive(Debug)]
    pub struct RecordingTransaction {
        journal: Arc<Mutex<Journal>>,
        fail_on: Option<usize>,
        pending: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl CommentConnection for RecordingConnection {
        type Transaction = RecordingTransaction;

        async fn begin(&self) -> Result<RecordingTransaction, DbErr> {
            self.journal.lock().unwrap().begins += 1;
            Ok(RecordingTransaction {
                journal: Arc::clone(&self.journal),
                fail_on: self.fail_on,
                pending: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl CommentTransaction for RecordingTransaction {
        async fn execute(&self, sql: &str) -> Result<(), DbErr> {
            let mut pending = self.pending.lock().unwrap();
            self.journal.lock().unwrap().executed.push(sql.to_string());
            if self.fail_on == Some(pending.len()) {
                return Err(DbErr::Custom("permission denied".into()));
            }
            pending.push(sql.to_string());
            Ok(())
        }

        async fn commit(self) -> Result<(), DbErr> {
            let pending = self.pending.into_inner().unwrap();
            let mut journal = self.journal.lock().unwrap();
            journal.commits += 1;
            journal.committed.extend(pending);
            Ok(())
        }

        async fn rollback(self) -> Result<(), DbErr> {
            self.journal.lock().unwrap().rollbacks += 1;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lazy_connection_starts_disconnected() {
        let conn = LazyConnection::new("postgres://localhost/app");
        assert!(!conn.is_connected());
    }
}
