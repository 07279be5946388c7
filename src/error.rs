//! Error types for crosstab query construction and execution.

use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PivotError>;

#[derive(Error, Debug)]
pub enum PivotError {
    /// The aggregate operator is not one of SUM, COUNT, MAX, MIN, AVG,
    /// STDEV, VAR, VARP or STDEVP.
    #[error("illegal operation: {0:?}")]
    InvalidOperation(String),

    /// A required SQL fragment of the request was empty.
    #[error("{0} must not be empty")]
    EmptyExpression(&'static str),

    /// The discovery or final query failed inside the executor.
    #[error("query execution failed: {0}")]
    Execution(#[from] sqlx::Error),

    #[error("query did not complete within {0:?}")]
    Timeout(Duration),

    /// The pivot column has a type the executor cannot turn into a pivot value.
    #[error("unsupported pivot column type: {0}")]
    UnsupportedValueType(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = PivotError::InvalidOperation("PRODUCT".to_string());
        assert_eq!(err.to_string(), "illegal operation: \"PRODUCT\"");

        let err = PivotError::EmptyExpression("pivot column");
        assert_eq!(err.to_string(), "pivot column must not be empty");

        let err = PivotError::from(sqlx::Error::Protocol("connection reset".to_string()));
        assert!(err.to_string().contains("connection reset"));
    }
}
