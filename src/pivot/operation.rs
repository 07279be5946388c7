//! The closed set of aggregate operators a crosstab can apply.

use std::str::FromStr;

use crate::error::PivotError;

/// Aggregate function applied to every generated pivot column and to the
/// `Total` column.
///
/// Parsing is case-sensitive: only the upper-case SQL names are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateOperation {
    Sum,
    Count,
    Max,
    Min,
    Avg,
    Stdev,
    Var,
    Varp,
    Stdevp,
}

impl AggregateOperation {
    pub const ALL: [AggregateOperation; 9] = [
        AggregateOperation::Sum,
        AggregateOperation::Count,
        AggregateOperation::Max,
        AggregateOperation::Min,
        AggregateOperation::Avg,
        AggregateOperation::Stdev,
        AggregateOperation::Var,
        AggregateOperation::Varp,
        AggregateOperation::Stdevp,
    ];

    /// SQL function name as emitted into the generated statement.
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregateOperation::Sum => "SUM",
            AggregateOperation::Count => "COUNT",
            AggregateOperation::Max => "MAX",
            AggregateOperation::Min => "MIN",
            AggregateOperation::Avg => "AVG",
            AggregateOperation::Stdev => "STDEV",
            AggregateOperation::Var => "VAR",
            AggregateOperation::Varp => "VARP",
            AggregateOperation::Stdevp => "STDEVP",
        }
    }
}

impl std::fmt::Display for AggregateOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AggregateOperation {
    type Err = PivotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| PivotError::InvalidOperation(s.to_string()))
    }
}
