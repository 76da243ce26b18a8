use sqlx::Row;

use crate::repository::StorageError;

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn conn<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

pub(crate) fn map_value_row(row: &sqlx::sqlite::SqliteRow) -> Result<String, StorageError> {
    row.try_get::<String, _>("value").map_err(ser)
}
