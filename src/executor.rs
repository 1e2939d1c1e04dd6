//! The seam between the query builders and whatever runs the SQL

use crate::error::Result;
use crate::value::Value;

/// One result row, values in select-list order.
pub type RawRow = Vec<Value>;

/// Runs SQL produced by the query builders.
///
/// [`Connection`](crate::Connection) is the stock implementation. Errors
/// returned here reach the caller of a model operation unchanged.
#[async_trait::async_trait]
pub trait Executor: Send + Sync {
    /// Runs a statement that yields rows and collects them in order.
    async fn query(&self, sql: &str, params: Vec<Value>) -> Result<Vec<RawRow>>;

    /// Runs a statement and returns the number of affected rows.
    async fn execute(&self, sql: &str, params: Vec<Value>) -> Result<u64>;
}

#[async_trait::async_trait]
impl<'a, E: Executor + ?Sized> Executor for &'a E {
    async fn query(&self, sql: &str, params: Vec<Value>) -> Result<Vec<RawRow>> {
        (**self).query(sql, params).await
    }

    async fn execute(&self, sql: &str, params: Vec<Value>) -> Result<u64> {
        (**self).execute(sql, params).await
    }
}

#[async_trait::async_trait]
impl<E: Executor + ?Sized> Executor for std::sync::Arc<E> {
    async fn query(&self, sql: &str, params: Vec<Value>) -> Result<Vec<RawRow>> {
        (**self).query(sql, params).await
    }

    async fn execute(&self, sql: &str, params: Vec<Value>) -> Result<u64> {
        (**self).execute(sql, params).await
    }
}
