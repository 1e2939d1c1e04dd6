use crate::Condition;
use crate::Error;
use crate::Executor;
use crate::Pattern;
use crate::Record;
use crate::Result;
use crate::ident::quote;
use crate::ident::quote_list;
use crate::query::condition::push_where;
use crate::value::Value;

#[derive(Clone, Debug)]
pub struct Update<'a> {
    table:      &'a str,
    sets:       Vec<(String, Value)>,
    conditions: Vec<Condition>,
}

impl<'a> Update<'a> {
    pub fn new(table: &'a str) -> Self {
        Self { table, sets: Vec::new(), conditions: Vec::new() }
    }

    /// Adds `column = ?` assignments, one per pattern entry.
    pub fn set_equal(mut self, pattern: &Pattern) -> Self {
        self.sets.extend(pattern.iter().map(|(column, value)| (column.to_string(), value.clone())));
        self
    }

    pub fn filter(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn where_equal(mut self, pattern: &Pattern) -> Self {
        self.conditions.extend(Condition::from_pattern(pattern));
        self
    }

    pub fn build(&self) -> Result<(String, Vec<Value>)> {
        if self.sets.is_empty() {
            return Err(Error::Query("No columns to update".to_string()));
        }

        let set_parts: Vec<String> = self.sets.iter().map(|(col, _)| format!("{} = ?", quote(col))).collect();
        let mut params: Vec<Value> = self.sets.iter().map(|(_, val)| val.clone()).collect();

        let mut sql = format!("UPDATE {} SET {}", quote(self.table), set_parts.join(", "));
        push_where(&mut sql, &mut params, &self.conditions);

        Ok((sql, params))
    }

    /// Runs the update with `RETURNING columns` and yields every updated row.
    pub async fn exec_with_returning<E: Executor + ?Sized>(self, conn: &E, columns: &[String]) -> Result<Vec<Record>> {
        let (base_sql, params) = self.build()?;
        let sql = format!("{} RETURNING {}", base_sql, quote_list(columns));
        tracing::debug!("Update SQL: {}", sql);
        tracing::debug!("Update Params: {:?}", params);

        let rows = conn.query(&sql, params).await?;
        Ok(rows.into_iter().map(|row| Record::from_row(columns, row)).collect())
    }
}
