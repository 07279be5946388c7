// MySQL executor
//
// Runs crosstab SQL on a `MySqlPool`. MySQL reports integer columns of any
// width as compatible with `i64`, so fewer probes are needed than for
// PostgreSQL.

use sqlx::mysql::{MySqlPool, MySqlRow};

use crate::error::Result;
use crate::executor::{decode_first, unsupported, QueryExecutor};
use crate::pivot::PivotValue;

impl QueryExecutor for MySqlPool {
    type Rows = Vec<MySqlRow>;

    async fn query(&self, sql: &str) -> Result<Vec<PivotValue>> {
        let rows = sqlx::query(sql).fetch_all(self).await?;
        rows.iter().map(decode_pivot_value).collect()
    }

    async fn execute(&self, sql: &str) -> Result<Self::Rows> {
        Ok(sqlx::query(sql).fetch_all(self).await?)
    }
}

fn decode_pivot_value(row: &MySqlRow) -> Result<PivotValue> {
    if let Some(v) = decode_first::<_, String, _>(row, PivotValue::Text) {
        return Ok(v);
    }
    if let Some(v) = decode_first::<_, i64, _>(row, PivotValue::Int) {
        return Ok(v);
    }
    if let Some(v) = decode_first::<_, f64, _>(row, PivotValue::Float) {
        return Ok(v);
    }
    #[cfg(feature = "decimal")]
    if let Some(v) = decode_first::<_, rust_decimal::Decimal, _>(row, PivotValue::Decimal) {
        return Ok(v);
    }
    #[cfg(feature = "chrono")]
    if let Some(v) = decode_first::<_, chrono::NaiveDate, _>(row, PivotValue::Date) {
        return Ok(v);
    }
    #[cfg(feature = "chrono")]
    if let Some(v) = decode_first::<_, chrono::NaiveDateTime, _>(row, PivotValue::Timestamp) {
        return Ok(v);
    }
    #[cfg(feature = "json")]
    if let Some(v) = decode_first::<_, serde_json::Value, _>(row, PivotValue::Json) {
        return Ok(v);
    }
    Err(unsupported(row))
}
