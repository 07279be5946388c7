// PostgreSQL executor
//
// Runs crosstab SQL on a `PgPool` and maps the discovery column onto
// `PivotValue`, trying the Rust types PostgreSQL columns commonly decode to.

use sqlx::postgres::{PgPool, PgRow};

use crate::error::Result;
use crate::executor::{decode_first, unsupported, QueryExecutor};
use crate::pivot::PivotValue;

impl QueryExecutor for PgPool {
    type Rows = Vec<PgRow>;

    async fn query(&self, sql: &str) -> Result<Vec<PivotValue>> {
        let rows = sqlx::query(sql).fetch_all(self).await?;
        rows.iter().map(decode_pivot_value).collect()
    }

    async fn execute(&self, sql: &str) -> Result<Self::Rows> {
        Ok(sqlx::query(sql).fetch_all(self).await?)
    }
}

fn decode_pivot_value(row: &PgRow) -> Result<PivotValue> {
    if let Some(v) = decode_first::<_, String, _>(row, PivotValue::Text) {
        return Ok(v);
    }
    if let Some(v) = decode_first::<_, i64, _>(row, PivotValue::Int) {
        return Ok(v);
    }
    if let Some(v) = decode_first::<_, i32, _>(row, |i| PivotValue::Int(i.into())) {
        return Ok(v);
    }
    if let Some(v) = decode_first::<_, i16, _>(row, |i| PivotValue::Int(i.into())) {
        return Ok(v);
    }
    if let Some(v) = decode_first::<_, f64, _>(row, PivotValue::Float) {
        return Ok(v);
    }
    if let Some(v) = decode_first::<_, f32, _>(row, |f| PivotValue::Float(f.into())) {
        return Ok(v);
    }
    if let Some(v) = decode_first::<_, bool, _>(row, PivotValue::Bool) {
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
    #[cfg(feature = "chrono")]
    if let Some(v) = decode_first::<_, chrono::DateTime<chrono::Utc>, _>(row, PivotValue::TimestampTz) {
        return Ok(v);
    }
    #[cfg(feature = "uuid")]
    if let Some(v) = decode_first::<_, uuid::Uuid, _>(row, PivotValue::Uuid) {
        return Ok(v);
    }
    #[cfg(feature = "json")]
    if let Some(v) = decode_first::<_, serde_json::Value, _>(row, PivotValue::Json) {
        return Ok(v);
    }
    Err(unsupported(row))
}
