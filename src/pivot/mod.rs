//! Crosstab query construction.
//!
//! This module turns a [`PivotRequest`] (aggregate operation, aggregated
//! expression, source relation, row headings and pivot column) into a single
//! GROUP BY statement with one conditional aggregate per distinct pivot value
//! plus a `Total` column.

mod headings;
mod operation;
mod query_builder;
mod request;
mod value;

pub use headings::strip_aliases;
pub use operation::AggregateOperation;
pub use query_builder::PivotQueryBuilder;
pub use request::PivotRequest;
pub use value::{LiteralQuoting, PivotValue};
