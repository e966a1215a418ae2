//! Conversions between in-memory prices and `BIGINT` columns.

use sqlx::{Row, postgres::PgRow};

pub(crate) fn to_column(price: u64, column: &str) -> Result<i64, sqlx::Error> {
    i64::try_from(price).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

pub(crate) fn from_row(row: &PgRow, column: &str) -> Result<u64, sqlx::Error> {
    let price: i64 = row.try_get(column)?;

    u64::try_from(price).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}
