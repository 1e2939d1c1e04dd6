use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] turso::Error),

    #[error("Could not find match in {table}.")]
    NotFound { table: String },

    #[error("Unknown column `{column}` for table {table}")]
    UnknownColumn { table: String, column: String },

    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("A model needs at least one column")]
    NoColumns,

    #[error("Type conversion error: expected {expected}, got {actual}")]
    TypeConversion { expected: &'static str, actual: String },

    #[error("Unexpected null value for non-nullable field")]
    UnexpectedNull,

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Query error: {0}")]
    Query(String),

    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn not_found(table: &str) -> Self {
        Self::NotFound { table: table.to_string() }
    }

    pub(crate) fn unknown_column(table: &str, column: &str) -> Self {
        Self::UnknownColumn { table: table.to_string(), column: column.to_string() }
    }
}
