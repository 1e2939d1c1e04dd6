//! Table metadata for structs using `#[derive(Table)]`

use crate::Executor;
use crate::Model;
use crate::Result;
use crate::define_model;
use crate::pattern::IntoPattern;
use crate::record::FromRecord;

/// Static table name and column list of a typed row struct.
///
/// ```ignore
/// #[derive(Clone, Debug, Table)]
/// #[tursomodel(table_name = "users")]
/// pub struct User {
///     #[tursomodel(auto_increment)]
///     pub id:    Option<i64>,
///     pub name:  String,
///     #[tursomodel(column_name = "email_address")]
///     pub email: String,
/// }
///
/// let users = User::model(conn.clone())?;
/// let alice: User = users.one_as(&pattern! { "name" => "Alice" }).await?;
/// ```
pub trait TableTrait: FromRecord + IntoPattern {
    fn table_name() -> &'static str;

    fn columns() -> &'static [&'static str];
}

pub trait TableModelExt: TableTrait {
    /// A model bound to this struct's table and columns.
    fn model<C: Executor>(db: C) -> Result<Model<C>> {
        define_model(db, Self::table_name(), Self::columns().iter().copied())
    }
}

impl<T: TableTrait> TableModelExt for T {}
