pub mod error;
pub mod executor;
pub mod pivot;

pub use error::{PivotError, Result};
pub use executor::QueryExecutor;
pub use pivot::{
    strip_aliases, AggregateOperation, LiteralQuoting, PivotQueryBuilder, PivotRequest, PivotValue,
};

/// Generates the crosstab statement for the given parameters.
///
/// `operation` must be one of SUM, COUNT, MAX, MIN, AVG, STDEV, VAR, VARP or
/// STDEVP; anything else fails with [`PivotError::InvalidOperation`] before
/// the executor is touched. `row_headings` is a comma-separated list that may
/// carry `AS` aliases. The distinct values of `column_heading` are read
/// through `executor` to decide the output columns.
///
/// # Example
///
/// ```ignore
/// use sqlx_crosstab::pivot_sql;
///
/// let sql = pivot_sql(&pool, "SUM", "[amt]", "mediaSales", "[year]", "[type]").await?;
/// // SELECT [year], SUM(CASE [type] WHEN 'CD' THEN [amt] END) as 'CD', ...,
/// //   SUM([amt]) as Total FROM mediaSales GROUP BY [year] ORDER BY [year]
/// ```
pub async fn pivot_sql<E: QueryExecutor>(
    executor: &E,
    operation: &str,
    op_argument: &str,
    base_relation: &str,
    row_headings: &str,
    column_heading: &str,
) -> Result<String> {
    let request = PivotRequest::new(operation, op_argument, base_relation, row_headings, column_heading)?;
    PivotQueryBuilder::new().build(&request, executor).await
}

/// Generates the crosstab statement like [`pivot_sql`] and runs it.
///
/// The statement uses single-quoted column labels and a bracketed `[NULL]`
/// label, the dialect of SQLite and SQL Server. PostgreSQL rejects both and
/// MySQL rejects `[NULL]`; on those backends use [`pivot_sql`] and adapt the
/// text, or expect [`PivotError::Execution`] with a syntax error.
pub async fn pivot<E: QueryExecutor>(
    executor: &E,
    operation: &str,
    op_argument: &str,
    base_relation: &str,
    row_headings: &str,
    column_heading: &str,
) -> Result<E::Rows> {
    let request = PivotRequest::new(operation, op_argument, base_relation, row_headings, column_heading)?;
    PivotQueryBuilder::new().build_and_execute(&request, executor).await
}
