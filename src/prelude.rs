//! Prelude module for tursomodel
//!
//! ```ignore
//! use tursomodel::prelude::*;
//! ```

pub use turso::EncryptionOpts;
pub use tursomodel_macros::Table;

pub use crate::connection::Builder;
pub use crate::connection::Connection;
pub use crate::connection::Database;
pub use crate::error::Error;
pub use crate::error::Result;
pub use crate::executor::Executor;
pub use crate::model::Model;
pub use crate::model::define_model;
pub use crate::pattern;
pub use crate::pattern::IntoPattern;
pub use crate::pattern::Pattern;
pub use crate::record::FromRecord;
pub use crate::record::Record;
pub use crate::table::TableModelExt;
pub use crate::table::TableTrait;
pub use crate::value::FromValue;
pub use crate::value::IntoValue;
#[cfg(feature = "with-json")]
pub use crate::value::Json;
pub use crate::value::Value;
