use crate::Executor;
use crate::Pattern;
use crate::Record;
use crate::Result;
use crate::ident::quote;
use crate::ident::quote_list;
use crate::value::Value;

#[derive(Clone, Debug)]
pub struct Insert<'a> {
    table: &'a str,
    sets:  Vec<(String, Value)>,
}

impl<'a> Insert<'a> {
    pub fn new(table: &'a str) -> Self {
        Self { table, sets: Vec::new() }
    }

    /// Adds every pattern entry as a column to insert.
    pub fn set(mut self, pattern: &Pattern) -> Self {
        self.sets.extend(pattern.iter().map(|(column, value)| (column.to_string(), value.clone())));
        self
    }

    pub fn build(&self) -> (String, Vec<Value>) {
        if self.sets.is_empty() {
            return (format!("INSERT INTO {} DEFAULT VALUES", quote(self.table)), Vec::new());
        }

        let columns: Vec<&str> = self.sets.iter().map(|(c, _)| c.as_str()).collect();
        let placeholders: Vec<&str> = self.sets.iter().map(|_| "?").collect();

        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            quote(self.table),
            quote_list(&columns),
            placeholders.join(", ")
        );
        let params = self.sets.iter().map(|(_, v)| v.clone()).collect();

        (sql, params)
    }

    /// Runs the insert with `RETURNING columns` in a single statement and
    /// yields the stored row, or `None` when the database reports nothing.
    pub async fn exec_with_returning<E: Executor + ?Sized>(
        self,
        conn: &E,
        columns: &[String],
    ) -> Result<Option<Record>> {
        let (base_sql, params) = self.build();
        let sql = format!("{} RETURNING {}", base_sql, quote_list(columns));
        tracing::debug!("Insert SQL: {}", sql);
        tracing::debug!("Insert Params: {:?}", params);

        let rows = conn.query(&sql, params).await?;
        Ok(rows.into_iter().next().map(|row| Record::from_row(columns, row)))
    }
}
