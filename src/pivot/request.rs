//! Input of a single crosstab build.

use crate::error::{PivotError, Result};
use crate::pivot::AggregateOperation;

/// Parameters of one crosstab query.
///
/// Every field except `operation` is trusted SQL text supplied by the caller
/// (a column, an expression, a table or a parenthesized subquery) and is
/// copied into the generated statement unchanged.
///
/// # Example
///
/// ```
/// use sqlx_crosstab::{AggregateOperation, PivotRequest};
///
/// let request = PivotRequest::new("SUM", "[amt]", "mediaSales", "[year]", "[type]").unwrap();
/// assert_eq!(request.operation(), AggregateOperation::Sum);
/// assert!(PivotRequest::new("PRODUCT", "[amt]", "mediaSales", "[year]", "[type]").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotRequest {
    operation: AggregateOperation,
    aggregate_expression: String,
    base_relation: String,
    row_headings: String,
    pivot_column: String,
}

impl PivotRequest {
    /// Creates a request from an operator name, rejecting names outside the
    /// allow-list and empty SQL fragments.
    pub fn new(
        operation: &str,
        aggregate_expression: &str,
        base_relation: &str,
        row_headings: &str,
        pivot_column: &str,
    ) -> Result<Self> {
        let operation = operation.parse()?;
        Self::with_operation(
            operation,
            aggregate_expression,
            base_relation,
            row_headings,
            pivot_column,
        )
    }

    pub fn with_operation(
        operation: AggregateOperation,
        aggregate_expression: &str,
        base_relation: &str,
        row_headings: &str,
        pivot_column: &str,
    ) -> Result<Self> {
        Ok(Self {
            operation,
            aggregate_expression: required(aggregate_expression, "aggregate expression")?,
            base_relation: required(base_relation, "base relation")?,
            row_headings: required(row_headings, "row headings")?,
            pivot_column: required(pivot_column, "pivot column")?,
        })
    }

    pub fn operation(&self) -> AggregateOperation {
        self.operation
    }

    pub fn aggregate_expression(&self) -> &str {
        &self.aggregate_expression
    }

    pub fn base_relation(&self) -> &str {
        &self.base_relation
    }

    /// Comma-separated headings, aliases included, in output order.
    pub fn row_headings(&self) -> &str {
        &self.row_headings
    }

    pub fn pivot_column(&self) -> &str {
        &self.pivot_column
    }
}

fn required(fragment: &str, name: &'static str) -> Result<String> {
    if fragment.trim().is_empty() {
        return Err(PivotError::EmptyExpression(name));
    }
    Ok(fragment.to_string())
}
