use crate::Condition;
use crate::Error;
use crate::Executor;
use crate::Pattern;
use crate::Record;
use crate::Result;
use crate::ident::quote;
use crate::ident::quote_list;
use crate::query::condition::push_where;
use crate::value::FromValue;
use crate::value::Value;

#[derive(Clone, Debug)]
pub struct Select<'a> {
    table:      &'a str,
    columns:    &'a [String],
    conditions: Vec<Condition>,
    limit:      Option<usize>,
}

impl<'a> Select<'a> {
    pub fn new(table: &'a str, columns: &'a [String]) -> Self {
        Self { table, columns, conditions: Vec::new(), limit: None }
    }

    pub fn filter(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Adds one equality test per pattern entry.
    pub fn where_equal(mut self, pattern: &Pattern) -> Self {
        self.conditions.extend(Condition::from_pattern(pattern));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn build(&self) -> (String, Vec<Value>) {
        let mut sql = format!("SELECT {} FROM {}", quote_list(self.columns), quote(self.table));
        let mut params = Vec::new();

        push_where(&mut sql, &mut params, &self.conditions);

        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        (sql, params)
    }

    pub async fn all<E: Executor + ?Sized>(self, conn: &E) -> Result<Vec<Record>> {
        let (sql, params) = self.build();
        tracing::debug!("Select SQL: {}", sql);

        let rows = conn.query(&sql, params).await?;
        Ok(rows.into_iter().map(|row| self.to_record(row)).collect())
    }

    pub async fn one<E: Executor + ?Sized>(self, conn: &E) -> Result<Option<Record>> {
        let query = self.limit(1);
        let (sql, params) = query.build();
        tracing::debug!("Select SQL: {}", sql);

        let rows = conn.query(&sql, params).await?;
        Ok(rows.into_iter().next().map(|row| query.to_record(row)))
    }

    pub async fn count<E: Executor + ?Sized>(self, conn: &E) -> Result<i64> {
        let mut sql = format!("SELECT COUNT(*) FROM {}", quote(self.table));
        let mut params = Vec::new();
        push_where(&mut sql, &mut params, &self.conditions);
        tracing::debug!("Count SQL: {}", sql);

        let rows = conn.query(&sql, params).await?;
        let cell = rows
            .into_iter()
            .next()
            .and_then(|row| row.into_iter().next())
            .ok_or_else(|| Error::Query(format!("COUNT on {} returned no row", self.table)))?;
        i64::from_value(cell)
    }

    pub async fn exists<E: Executor + ?Sized>(self, conn: &E) -> Result<bool> {
        Ok(self.one(conn).await?.is_some())
    }

    fn to_record(&self, row: Vec<Value>) -> Record {
        if row.len() != self.columns.len() {
            tracing::warn!(
                "Row from {} has {} values for {} selected columns",
                self.table,
                row.len(),
                self.columns.len()
            );
        }
        Record::from_row(self.columns, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<String> {
        ["id", "name", "email", "age"].iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_select_new() {
        let columns = columns();
        let (sql, params) = Select::new("test_users", &columns).build();
        assert_eq!(sql, r#"SELECT "id", "name", "email", "age" FROM "test_users""#);
        assert!(params.is_empty());
    }

    #[test]
    fn test_select_where_equal_single() {
        let columns = columns();
        let pattern = Pattern::new().with("id", 1);
        let (sql, params) = Select::new("test_users", &columns).where_equal(&pattern).build();

        assert_eq!(sql, r#"SELECT "id", "name", "email", "age" FROM "test_users" WHERE ("id" = ?)"#);
        assert_eq!(params, vec![Value::Integer(1)]);
    }

    #[test]
    fn test_select_where_equal_multiple() {
        let columns = columns();
        let pattern = Pattern::new().with("name", "Alice").with("age", 30);
        let (sql, params) = Select::new("test_users", &columns).where_equal(&pattern).build();

        assert!(sql.ends_with(r#"WHERE ("name" = ?) AND ("age" = ?)"#));
        assert_eq!(params, vec![Value::Text("Alice".to_string()), Value::Integer(30)]);
    }

    #[test]
    fn test_select_empty_pattern_has_no_where() {
        let columns = columns();
        let (sql, params) = Select::new("test_users", &columns).where_equal(&Pattern::new()).build();

        assert!(!sql.contains("WHERE"));
        assert!(params.is_empty());
    }

    #[test]
    fn test_select_where_equal_null() {
        let columns = columns();
        let pattern = Pattern::new().with("age", Value::Null);
        let (sql, params) = Select::new("test_users", &columns).where_equal(&pattern).build();

        assert!(sql.ends_with(r#"WHERE ("age" IS NULL)"#));
        assert!(params.is_empty());
    }

    #[test]
    fn test_select_limit() {
        let columns = columns();
        let (sql, _) = Select::new("test_users", &columns).limit(1).build();
        assert!(sql.ends_with("LIMIT 1"));
    }

    #[test]
    fn test_select_clause_order() {
        let columns = columns();
        let select = Select::new("test_users", &columns).limit(5).filter(Condition::eq("id", 1));
        let (sql, _) = select.build();

        let where_pos = sql.find("WHERE").unwrap();
        let limit_pos = sql.find("LIMIT").unwrap();

        assert!(where_pos < limit_pos);
    }

    #[test]
    fn test_select_clone() {
        let columns = columns();
        let select = Select::new("test_users", &columns).filter(Condition::eq("id", 1)).limit(10);
        let cloned = select.clone();

        assert_eq!(select.build(), cloned.build());
    }

    #[test]
    fn test_to_record_uses_selected_column_names() {
        let columns = columns();
        let select = Select::new("test_users", &columns);
        let record = select.to_record(vec![
            Value::Integer(1),
            Value::Text("Alice".to_string()),
            Value::Text("alice@example.com".to_string()),
            Value::Null,
        ]);

        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["id", "name", "email", "age"]);
        assert_eq!(record.get::<Option<i64>>("age").unwrap(), None);
    }

    #[test]
    fn test_select_quotes_keyword_columns() {
        let columns: Vec<String> = ["id", "order"].iter().map(|c| c.to_string()).collect();
        let (sql, _) = Select::new("orders", &columns).where_equal(&Pattern::new().with("order", 3)).build();
        assert_eq!(sql, r#"SELECT "id", "order" FROM "orders" WHERE ("order" = ?)"#);
    }
}
