// SQLite executor
//
// SQLite values carry one of a handful of storage classes; dates and
// decimals arrive as text or numbers, so only the basic types are probed.

use sqlx::sqlite::{SqlitePool, SqliteRow};

use crate::error::Result;
use crate::executor::{decode_first, unsupported, QueryExecutor};
use crate::pivot::PivotValue;

impl QueryExecutor for SqlitePool {
    type Rows = Vec<SqliteRow>;

    async fn query(&self, sql: &str) -> Result<Vec<PivotValue>> {
        let rows = sqlx::query(sql).fetch_all(self).await?;
        rows.iter().map(decode_pivot_value).collect()
    }

    async fn execute(&self, sql: &str) -> Result<Self::Rows> {
        Ok(sqlx::query(sql).fetch_all(self).await?)
    }
}

fn decode_pivot_value(row: &SqliteRow) -> Result<PivotValue> {
    if let Some(v) = decode_first::<_, String, _>(row, PivotValue::Text) {
        return Ok(v);
    }
    if let Some(v) = decode_first::<_, i64, _>(row, PivotValue::Int) {
        return Ok(v);
    }
    if let Some(v) = decode_first::<_, f64, _>(row, PivotValue::Float) {
        return Ok(v);
    }
    Err(unsupported(row))
}
