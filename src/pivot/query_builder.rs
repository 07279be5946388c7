//! Crosstab (pivot) query builder.
//!
//! A crosstab turns the distinct values of one column into output columns.
//! Given sales rows like
//!
//! ```text
//! year  type   amt
//! 1999  Vinyl  23
//! 1999  Tape   44
//! 1999  CD     55
//! 2000  Vinyl  66
//! 2000  Tape   77
//! 2000  CD     88
//! 1999  Vinyl  11
//! ```
//!
//! pivoting `SUM([amt])` on `[type]` with `[year]` down the side produces
//!
//! ```text
//! year  CD  Tape  Vinyl  Total
//! 1999  55  44    34     133
//! 2000  88  77    66     231
//! ```
//!
//! The set of output columns depends on the data, so the builder first runs a
//! discovery query for the distinct pivot values and then emits one
//! conditional aggregate per value.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use futures::Future;

use crate::error::{PivotError, Result};
use crate::executor::QueryExecutor;
use crate::pivot::{strip_aliases, AggregateOperation, LiteralQuoting, PivotRequest, PivotValue};

type StatementHook = Arc<dyn Fn(&str) + Send + Sync>;

/// Builds crosstab SQL for a [`PivotRequest`].
///
/// The builder holds options only; every build is independent, so one
/// builder can be cloned or shared across tasks.
///
/// # Example
///
/// ```ignore
/// use sqlx_crosstab::{PivotQueryBuilder, PivotRequest};
/// use std::time::Duration;
///
/// let request = PivotRequest::new("SUM", "[amt]", "mediaSales", "[year]", "[type]")?;
///
/// // Generate the statement only
/// let sql = PivotQueryBuilder::new()
///     .timeout(Duration::from_secs(5))
///     .build(&request, &pool)
///     .await?;
///
/// // Or generate and run it
/// let rows = PivotQueryBuilder::new()
///     .build_and_execute(&request, &pool)
///     .await?;
/// ```
#[derive(Clone, Default)]
pub struct PivotQueryBuilder {
    quoting: LiteralQuoting,
    else_zero: bool,
    timeout: Option<Duration>,
    on_statement: Option<StatementHook>,
}

impl fmt::Debug for PivotQueryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PivotQueryBuilder")
            .field("quoting", &self.quoting)
            .field("else_zero", &self.else_zero)
            .field("timeout", &self.timeout)
            .field("on_statement", &self.on_statement.is_some())
            .finish()
    }
}

impl PivotQueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how discovered values are written into literals and labels.
    pub fn literal_quoting(mut self, quoting: LiteralQuoting) -> Self {
        self.quoting = quoting;
        self
    }

    /// Adds an `else 0` branch to every CASE when the operation is SUM, so
    /// row/column combinations without data sum to 0 instead of NULL.
    ///
    /// Ignored for other operations: a 0 would skew COUNT, MIN, AVG and the
    /// variance functions.
    pub fn else_zero(mut self, enabled: bool) -> Self {
        self.else_zero = enabled;
        self
    }

    /// Limits each database round trip to `timeout`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Registers a callback that receives every generated statement.
    pub fn on_statement<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_statement = Some(Arc::new(hook));
        self
    }

    /// Returns the query listing the distinct pivot values in ascending order.
    pub fn discovery_sql(&self, request: &PivotRequest) -> String {
        format!(
            "SELECT DISTINCT {col} from {base} order by {col}",
            col = request.pivot_column(),
            base = request.base_relation()
        )
    }

    /// Returns the conditional aggregate for one discovered value.
    pub fn pivot_fragment(&self, request: &PivotRequest, value: &PivotValue) -> String {
        let op = request.operation();
        let col = request.pivot_column();
        let arg = request.aggregate_expression();
        let case_else = self.case_else(op);

        if value.is_null_bucket() {
            format!("{op}(CASE WHEN {col} is null THEN {arg}{case_else} END) AS [NULL]")
        } else {
            let literal = self.quoting.literal_body(value);
            format!("{op}(CASE {col} WHEN '{literal}' THEN {arg}{case_else} END) as '{literal}'")
        }
    }

    /// Assembles the crosstab statement for already discovered values.
    ///
    /// Output columns follow the order of `values`, then `Total`.
    pub fn generate(&self, request: &PivotRequest, values: &[PivotValue]) -> String {
        let op = request.operation();
        let group_by = strip_aliases(request.row_headings());

        let mut select_parts = Vec::with_capacity(values.len() + 2);
        select_parts.push(request.row_headings().to_string());
        for value in values {
            select_parts.push(self.pivot_fragment(request, value));
        }
        select_parts.push(format!("{}({}) as Total", op, request.aggregate_expression()));

        format!(
            "SELECT {} FROM {} GROUP BY {} ORDER BY {}",
            select_parts.join(", "),
            request.base_relation(),
            group_by,
            group_by
        )
    }

    /// Discovers the pivot values through `executor` and returns the
    /// generated statement without running it.
    pub async fn build<E: QueryExecutor>(&self, request: &PivotRequest, executor: &E) -> Result<String> {
        let discovery = self.discovery_sql(request);
        log::debug!("pivot discovery: {}", discovery);

        let values = self.with_deadline(executor.query(&discovery)).await?;
        log::trace!("pivot column {} has {} distinct values", request.pivot_column(), values.len());

        let sql = self.generate(request, &values);
        log::debug!("pivot statement: {}", sql);
        if let Some(hook) = &self.on_statement {
            hook(&sql);
        }
        Ok(sql)
    }

    /// Builds the statement and runs it through the same executor.
    pub async fn build_and_execute<E: QueryExecutor>(
        &self,
        request: &PivotRequest,
        executor: &E,
    ) -> Result<E::Rows> {
        let sql = self.build(request, executor).await?;
        self.with_deadline(executor.execute(&sql)).await
    }

    fn case_else(&self, op: AggregateOperation) -> &'static str {
        if self.else_zero && op == AggregateOperation::Sum {
            " else 0"
        } else {
            ""
        }
    }

    async fn with_deadline<T>(&self, fut: impl Future<Output = Result<T>>) -> Result<T> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, fut)
                .await
                .map_err(|_| PivotError::Timeout(limit))?,
            None => fut.await,
        }
    }
}
