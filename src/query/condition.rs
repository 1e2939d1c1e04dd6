use crate::Pattern;
use crate::ident::quote;
use crate::value::IntoValue;
use crate::value::Value;

/// A parameterized SQL predicate.
#[derive(Clone, Debug, PartialEq)]
pub struct Condition {
    pub(crate) sql:    String,
    pub(crate) values: Vec<Value>,
}

impl Condition {
    /// `"column" = ?`, or `"column" IS NULL` when the value is NULL.
    pub fn eq<V: IntoValue>(column: &str, value: V) -> Self {
        match value.into_value() {
            Value::Null => Self::is_null(column),
            value => Self { sql: format!("{} = ?", quote(column)), values: vec![value] },
        }
    }

    pub fn is_null(column: &str) -> Self {
        Self { sql: format!("{} IS NULL", quote(column)), values: vec![] }
    }

    /// One equality test per pattern entry, in pattern order.
    pub fn from_pattern(pattern: &Pattern) -> Vec<Self> {
        pattern.iter().map(|(column, value)| Self::eq(column, value)).collect()
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

/// Appends ` WHERE (a) AND (b) ...` for `conditions` and collects their
/// parameters; a no-op for an empty slice.
pub(crate) fn push_where(sql: &mut String, params: &mut Vec<Value>, conditions: &[Condition]) {
    if conditions.is_empty() {
        return;
    }

    let where_parts: Vec<String> = conditions.iter().map(|c| format!("({})", c.sql())).collect();
    sql.push_str(" WHERE ");
    sql.push_str(&where_parts.join(" AND "));

    for condition in conditions {
        params.extend(condition.values().iter().cloned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_eq() {
        let cond = Condition::eq("id", 42);
        assert_eq!(cond.sql(), r#""id" = ?"#);
        assert_eq!(cond.values(), &[Value::Integer(42)]);
    }

    #[test]
    fn test_condition_eq_with_string() {
        let cond = Condition::eq("name", "Alice");
        assert_eq!(cond.sql(), r#""name" = ?"#);
        assert_eq!(cond.values()[0], Value::Text("Alice".to_string()));
    }

    #[test]
    fn test_condition_eq_null_becomes_is_null() {
        let cond = Condition::eq("age", None::<i64>);
        assert_eq!(cond.sql(), r#""age" IS NULL"#);
        assert!(cond.values().is_empty());
    }

    #[test]
    fn test_condition_from_pattern_keeps_order() {
        let pattern = Pattern::new().with("name", "Alice").with("age", 30);
        let conditions = Condition::from_pattern(&pattern);
        assert_eq!(conditions.len(), 2);
        assert_eq!(conditions[0].sql(), r#""name" = ?"#);
        assert_eq!(conditions[1].sql(), r#""age" = ?"#);
    }

    #[test]
    fn test_push_where_empty() {
        let mut sql = "SELECT id FROM users".to_string();
        let mut params = Vec::new();
        push_where(&mut sql, &mut params, &[]);
        assert_eq!(sql, "SELECT id FROM users");
        assert!(params.is_empty());
    }

    #[test]
    fn test_push_where_joins_with_and() {
        let mut sql = "DELETE FROM users".to_string();
        let mut params = Vec::new();
        push_where(&mut sql, &mut params, &[Condition::eq("id", 1), Condition::is_null("email")]);
        assert_eq!(sql, r#"DELETE FROM users WHERE ("id" = ?) AND ("email" IS NULL)"#);
        assert_eq!(params, vec![Value::Integer(1)]);
    }

    #[test]
    fn test_condition_quotes_keyword_column() {
        let cond = Condition::eq("order", 2);
        assert_eq!(cond.sql(), r#""order" = ?"#);
    }
}
