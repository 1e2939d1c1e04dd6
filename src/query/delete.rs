//! DELETE query builder

use crate::Condition;
use crate::Executor;
use crate::Pattern;
use crate::Result;
use crate::ident::quote;
use crate::query::condition::push_where;
use crate::value::Value;

/// DELETE query builder
///
/// Without any condition every row of the table is deleted.
///
/// ```ignore
/// Delete::new("users").where_equal(&pattern! { "id" => 1 }).exec(&conn).await?;
/// ```
#[derive(Clone, Debug)]
pub struct Delete<'a> {
    table:      &'a str,
    conditions: Vec<Condition>,
}

impl<'a> Delete<'a> {
    pub fn new(table: &'a str) -> Self {
        Self { table, conditions: Vec::new() }
    }

    pub fn filter(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn where_equal(mut self, pattern: &Pattern) -> Self {
        self.conditions.extend(Condition::from_pattern(pattern));
        self
    }

    pub fn build(&self) -> (String, Vec<Value>) {
        let mut sql = format!("DELETE FROM {}", quote(self.table));
        let mut params = Vec::new();
        push_where(&mut sql, &mut params, &self.conditions);
        (sql, params)
    }

    /// Runs the delete and returns the number of rows removed.
    pub async fn exec<E: Executor + ?Sized>(self, conn: &E) -> Result<u64> {
        let (sql, params) = self.build();
        tracing::debug!("Delete SQL: {}", sql);
        tracing::debug!("Delete Params: {:?}", params);

        conn.execute(&sql, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_all() {
        let (sql, params) = Delete::new("test_users").build();
        assert_eq!(sql, r#"DELETE FROM "test_users""#);
        assert!(params.is_empty());
    }

    #[test]
    fn test_delete_where_equal() {
        let pattern = Pattern::new().with("name", "Alice").with("age", 30);
        let (sql, params) = Delete::new("test_users").where_equal(&pattern).build();

        assert_eq!(sql, r#"DELETE FROM "test_users" WHERE ("name" = ?) AND ("age" = ?)"#);
        assert_eq!(params, vec![Value::Text("Alice".to_string()), Value::Integer(30)]);
    }

    #[test]
    fn test_delete_where_null() {
        let pattern = Pattern::new().with("email", Value::Null);
        let (sql, _) = Delete::new("test_users").where_equal(&pattern).build();
        assert_eq!(sql, r#"DELETE FROM "test_users" WHERE ("email" IS NULL)"#);
    }

    #[test]
    fn test_delete_filter_and_pattern_combine() {
        let (sql, params) = Delete::new("test_users")
            .filter(Condition::eq("id", 3))
            .where_equal(&Pattern::new().with("name", "Eve"))
            .build();

        assert_eq!(sql, r#"DELETE FROM "test_users" WHERE ("id" = ?) AND ("name" = ?)"#);
        assert_eq!(params.len(), 2);
    }
}
