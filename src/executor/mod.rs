//! The database side of a crosstab build.
//!
//! Building a crosstab needs one round trip to list the distinct values of
//! the pivot column, and optionally a second one to run the generated
//! statement. Both go through [`QueryExecutor`], which is implemented for
//! the sqlx pools of every enabled backend and is easy to fake in tests.

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "mysql")]
mod mysql;

#[cfg(feature = "sqlite")]
mod sqlite;

use futures::Future;
#[cfg(any(feature = "postgres", feature = "mysql", feature = "sqlite"))]
use sqlx::{Column, ColumnIndex, Decode, Row, Type, TypeInfo};

#[cfg(any(feature = "postgres", feature = "mysql", feature = "sqlite"))]
use crate::error::PivotError;
use crate::error::Result;
use crate::pivot::PivotValue;

/// Runs SQL on behalf of the crosstab builder.
///
/// The generated crosstab labels columns with single-quoted strings
/// (`as 'CD'`) and names the NULL bucket `[NULL]`. SQLite and SQL Server
/// accept that dialect; PostgreSQL rejects both, so on a `PgPool` only
/// discovery and [`PivotQueryBuilder::build`](crate::PivotQueryBuilder::build)
/// are usable and executing the statement fails with a syntax error. MySQL
/// accepts the quoted labels but not `[NULL]`.
///
/// # Example
///
/// ```ignore
/// use sqlx::PgPool;
/// use sqlx_crosstab::QueryExecutor;
///
/// let pool = PgPool::connect(&database_url).await?;
/// let types = pool.query("SELECT DISTINCT type FROM media_sales ORDER BY type").await?;
/// ```
pub trait QueryExecutor: Sync {
    /// What [`QueryExecutor::execute`] hands back for the final statement.
    type Rows: Send;

    /// Runs `sql` and returns the first column of every row, in row order.
    fn query(&self, sql: &str) -> impl Future<Output = Result<Vec<PivotValue>>> + Send;

    /// Runs `sql` and returns its result set.
    fn execute(&self, sql: &str) -> impl Future<Output = Result<Self::Rows>> + Send;
}

/// Decodes column 0 of `row` as `Option<T>`, or `None` when the column type
/// is not compatible with `T`.
#[cfg(any(feature = "postgres", feature = "mysql", feature = "sqlite"))]
fn decode_first<'r, R, T, F>(row: &'r R, wrap: F) -> Option<PivotValue>
where
    R: Row,
    F: FnOnce(T) -> PivotValue,
    T: Decode<'r, R::Database> + Type<R::Database>,
    usize: ColumnIndex<R>,
{
    row.try_get::<Option<T>, usize>(0)
        .ok()
        .map(|value| value.map_or(PivotValue::Null, wrap))
}

#[cfg(any(feature = "postgres", feature = "mysql", feature = "sqlite"))]
fn unsupported<R: Row>(row: &R) -> PivotError {
    match row.columns().first() {
        Some(column) => PivotError::UnsupportedValueType(column.type_info().name().to_string()),
        None => PivotError::UnsupportedValueType("<no columns>".to_string()),
    }
}
