#![deny(warnings)]

//! # tursomodel
//!
//! A tiny active-record layer for [Turso](https://turso.tech).
//!
//! A model is defined at runtime from a connection, a table name and a
//! column list. It offers six operations (`all`, `first`, `one`, `insert`,
//! `update`, `delete`) that take plain column/value [`Pattern`]s and hand
//! back [`Record`]s.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tursomodel::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let db = Builder::new_local(":memory:").build().await?;
//!     let conn = db.connect()?;
//!     conn.execute_batch("CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL, age INTEGER)").await?;
//!
//!     let users = define_model(conn.clone(), "users", ["id", "name", "age"])?;
//!
//!     let alice = users.insert(&pattern! { "name" => "Alice", "age" => 30 }).await?;
//!     let adults = users.all(&pattern! { "age" => 30 }).await?;
//!     let bob = users.first(&pattern! { "name" => "Bob" }).await?; // None
//!     let err = users.one(&pattern! { "name" => "Bob" }).await.unwrap_err();
//!     assert_eq!(err.to_string(), "Could not find match in users.");
//!
//!     users.update(&pattern! { "age" => 31 }, &pattern! { "name" => "Alice" }).await?;
//!     users.delete(&pattern! { "name" => "Alice" }).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Patterns
//!
//! Pattern keys must be columns of the model; anything else is rejected
//! with [`Error::UnknownColumn`] before SQL is built. Values are always
//! bound as parameters. A NULL value in a filter matches with `IS NULL`.
//!
//! ## Typed rows
//!
//! `#[derive(Table)]` maps a struct onto a table so records convert with
//! [`Model::all_as`] and friends and the struct itself can be inserted via
//! [`IntoPattern`].

pub mod connection;
pub mod error;
pub mod executor;
mod ident;
pub mod model;
pub mod pattern;
pub mod prelude;
pub mod query;
pub mod record;
pub mod table;
pub mod value;

pub use connection::Builder;
pub use connection::Connection;
pub use connection::Database;
pub use error::Error;
pub use error::Result;
pub use executor::Executor;
pub use executor::RawRow;
pub use model::Model;
pub use model::define_model;
pub use pattern::IntoPattern;
pub use pattern::Pattern;
pub use query::Condition;
pub use query::Delete;
pub use query::Insert;
pub use query::Select;
pub use query::Update;
pub use record::FromRecord;
pub use record::Record;
pub use table::TableModelExt;
pub use table::TableTrait;
pub use tursomodel_macros::Table;
pub use value::FromValue;
pub use value::IntoValue;
#[cfg(feature = "with-json")]
pub use value::Json;
pub use value::Value;
