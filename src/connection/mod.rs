//! Turso connection handle and its [`Executor`] implementation

pub(crate) mod builder;
pub(crate) mod database;
pub(crate) mod opts;

pub use builder::Builder;
pub use database::Database;

use crate::error::Result;
use crate::executor::Executor;
use crate::executor::RawRow;
use crate::value::Value;

pub(self) type ConnectionResult<T> = std::result::Result<T, turso::Error>;

/// A connection to a Turso database.
///
/// Cloning is cheap and clones share the underlying connection, so a
/// connection can be handed to any number of models.
#[derive(Debug, Clone)]
pub struct Connection {
    inner: turso::Connection,
    opts:  opts::DatabaseOpts,
}

impl Connection {
    fn new(inner: turso::Connection, opts: opts::DatabaseOpts) -> Self {
        Self { inner, opts }
    }

    pub fn is_mvcc_enabled(&self) -> bool {
        self.opts.enable_mvcc
    }

    pub fn is_encryption_enabled(&self) -> bool {
        self.opts.enable_encryption
    }

    pub fn path(&self) -> &str {
        self.opts.path.as_str()
    }

    /// Runs one or more `;`-separated statements, e.g. DDL in tests.
    pub async fn execute_batch(&self, sql: &str) -> ConnectionResult<()> {
        self.inner.execute_batch(sql).await
    }

    pub fn busy_timeout(&self, duration: std::time::Duration) -> ConnectionResult<()> {
        self.inner.busy_timeout(duration)
    }
}

#[async_trait::async_trait]
impl Executor for Connection {
    async fn query(&self, sql: &str, params: Vec<Value>) -> Result<Vec<RawRow>> {
        tracing::trace!("SQL: {}", sql);
        tracing::trace!("Params: {:?}", params);

        let mut rows = self.inner.query(sql, params).await?;
        let mut results = Vec::new();

        while let Some(row) = rows.next().await? {
            let mut values = Vec::with_capacity(row.column_count());
            for idx in 0..row.column_count() {
                values.push(row.get_value(idx)?);
            }
            results.push(values);
        }

        tracing::trace!("Rows: {}", results.len());
        Ok(results)
    }

    async fn execute(&self, sql: &str, params: Vec<Value>) -> Result<u64> {
        tracing::trace!("SQL: {}", sql);
        tracing::trace!("Params: {:?}", params);

        Ok(self.inner.execute(sql, params).await?)
    }
}
