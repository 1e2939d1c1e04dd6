//! Models: a connection, a table and its columns, plus the operations on them
//!
//! A [`Model`] is produced by [`define_model`] and is bound for its whole
//! life to one `(db, table, columns)` triple. Each operation checks the
//! caller's patterns against the column list, builds one query and runs it
//! on the model's executor.
//!
//! ```ignore
//! let users = define_model(conn.clone(), "users", ["id", "name", "email"])?;
//!
//! let alice = users.insert(&pattern! { "name" => "Alice", "email" => "alice@example.com" }).await?;
//! let everyone = users.all(&Pattern::new()).await?;
//! let bob = users.one(&pattern! { "name" => "Bob" }).await?;
//! users.update(&pattern! { "name" => "Robert" }, &pattern! { "name" => "Bob" }).await?;
//! users.delete(&pattern! { "name" => "Robert" }).await?;
//! ```

use crate::error::Error;
use crate::error::Result;
use crate::executor::Executor;
use crate::ident;
use crate::pattern::Pattern;
use crate::query::Delete;
use crate::query::Insert;
use crate::query::Select;
use crate::query::Update;
use crate::record::FromRecord;
use crate::record::Record;
use crate::value::IntoValue;

/// Creates a model for `table` with the given columns on `db`.
///
/// Nothing is sent to the database. The table and every column must be
/// plain SQL identifiers; duplicate columns are dropped.
///
/// # Errors
///
/// [`Error::InvalidIdentifier`] for a malformed table or column name and
/// [`Error::NoColumns`] for an empty column list.
pub fn define_model<C, I, S>(db: C, table: &str, columns: I) -> Result<Model<C>>
where
    C: Executor,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let table = ident::parse(table)?;

    let mut checked: Vec<String> = Vec::new();
    for column in columns {
        let column = ident::parse(column.as_ref())?;
        if !checked.contains(&column) {
            checked.push(column);
        }
    }

    if checked.is_empty() {
        return Err(Error::NoColumns);
    }

    tracing::debug!(table = %table, columns = ?checked, "defined model");
    Ok(Model { db, table, columns: checked })
}

#[derive(Clone, Debug)]
pub struct Model<C> {
    db:      C,
    table:   String,
    columns: Vec<String>,
}

impl<C: Executor> Model<C> {
    pub fn db(&self) -> &C {
        &self.db
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Builds an instance holding exactly the given fields. The fields are
    /// not checked against the column list.
    pub fn new_instance<K, V, I>(&self, fields: I) -> Record
    where
        K: Into<String>,
        V: IntoValue,
        I: IntoIterator<Item = (K, V)>,
    {
        fields.into_iter().collect()
    }

    /// Every row matching `where_fields`, in the order the database returns them.
    #[tracing::instrument(skip_all, fields(table = %self.table))]
    pub async fn all(&self, where_fields: &Pattern) -> Result<Vec<Record>> {
        self.check_pattern(where_fields)?;
        Select::new(&self.table, &self.columns).where_equal(where_fields).all(&self.db).await
    }

    /// The first row matching `where_fields`, or `None`.
    #[tracing::instrument(skip_all, fields(table = %self.table))]
    pub async fn first(&self, where_fields: &Pattern) -> Result<Option<Record>> {
        self.check_pattern(where_fields)?;
        Select::new(&self.table, &self.columns).where_equal(where_fields).one(&self.db).await
    }

    /// Like [`Model::first`], but a missing row is [`Error::NotFound`].
    pub async fn one(&self, where_fields: &Pattern) -> Result<Record> {
        self.first(where_fields).await?.ok_or_else(|| Error::not_found(&self.table))
    }

    /// Inserts one row and returns it as stored, or `None` when the
    /// database reports no row.
    #[tracing::instrument(skip_all, fields(table = %self.table))]
    pub async fn insert(&self, set_fields: &Pattern) -> Result<Option<Record>> {
        self.check_pattern(set_fields)?;
        Insert::new(&self.table).set(set_fields).exec_with_returning(&self.db, &self.columns).await
    }

    /// Applies `set_fields` to every row matching `where_fields` and returns
    /// the first updated row, or `None` when nothing matched.
    #[tracing::instrument(skip_all, fields(table = %self.table))]
    pub async fn update(&self, set_fields: &Pattern, where_fields: &Pattern) -> Result<Option<Record>> {
        self.check_pattern(set_fields)?;
        self.check_pattern(where_fields)?;

        let rows = Update::new(&self.table)
            .set_equal(set_fields)
            .where_equal(where_fields)
            .exec_with_returning(&self.db, &self.columns)
            .await?;
        Ok(rows.into_iter().next())
    }

    /// Deletes every row matching `where_fields`.
    #[tracing::instrument(skip_all, fields(table = %self.table))]
    pub async fn delete(&self, where_fields: &Pattern) -> Result<()> {
        self.check_pattern(where_fields)?;
        let affected = Delete::new(&self.table).where_equal(where_fields).exec(&self.db).await?;
        tracing::debug!("Deleted {} rows", affected);
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(table = %self.table))]
    pub async fn count(&self, where_fields: &Pattern) -> Result<i64> {
        self.check_pattern(where_fields)?;
        Select::new(&self.table, &self.columns).where_equal(where_fields).count(&self.db).await
    }

    #[tracing::instrument(skip_all, fields(table = %self.table))]
    pub async fn exists(&self, where_fields: &Pattern) -> Result<bool> {
        self.check_pattern(where_fields)?;
        Select::new(&self.table, &self.columns).where_equal(where_fields).exists(&self.db).await
    }

    pub async fn all_as<T: FromRecord>(&self, where_fields: &Pattern) -> Result<Vec<T>> {
        self.all(where_fields).await?.iter().map(T::from_record).collect()
    }

    pub async fn first_as<T: FromRecord>(&self, where_fields: &Pattern) -> Result<Option<T>> {
        self.first(where_fields).await?.as_ref().map(T::from_record).transpose()
    }

    pub async fn one_as<T: FromRecord>(&self, where_fields: &Pattern) -> Result<T> {
        T::from_record(&self.one(where_fields).await?)
    }

    /// Every pattern key must name one of the model's columns; keys end up
    /// in SQL text, values are always bound.
    fn check_pattern(&self, pattern: &Pattern) -> Result<()> {
        match pattern.columns().find(|column| !self.columns.iter().any(|c| c == column)) {
            Some(column) => Err(Error::unknown_column(&self.table, column)),
            None => Ok(()),
        }
    }
}
