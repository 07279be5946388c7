//! Distinct values of the pivot column and how they become SQL literals.

/// One distinct value of the pivot column, as returned by the discovery query.
///
/// Only the first column of each discovery row is used. Types beyond text,
/// integers, floats and booleans are available behind the matching cargo
/// features.
#[derive(Debug, Clone, PartialEq)]
pub enum PivotValue {
    Null,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    #[cfg(feature = "decimal")]
    Decimal(rust_decimal::Decimal),
    #[cfg(feature = "chrono")]
    Date(chrono::NaiveDate),
    #[cfg(feature = "chrono")]
    Timestamp(chrono::NaiveDateTime),
    #[cfg(feature = "chrono")]
    TimestampTz(chrono::DateTime<chrono::Utc>),
    #[cfg(feature = "uuid")]
    Uuid(uuid::Uuid),
    #[cfg(feature = "json")]
    Json(serde_json::Value),
}

impl PivotValue {
    /// Whether this value selects the `[NULL]` column.
    ///
    /// Blank strings stand for missing values in the source data, so they
    /// share the bucket with real SQL NULLs.
    pub fn is_null_bucket(&self) -> bool {
        match self {
            PivotValue::Null => true,
            PivotValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl std::fmt::Display for PivotValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PivotValue::Null => Ok(()),
            PivotValue::Text(s) => f.write_str(s),
            PivotValue::Int(i) => write!(f, "{}", i),
            PivotValue::Float(v) => write!(f, "{}", v),
            PivotValue::Bool(b) => write!(f, "{}", b),
            #[cfg(feature = "decimal")]
            PivotValue::Decimal(d) => write!(f, "{}", d),
            #[cfg(feature = "chrono")]
            PivotValue::Date(d) => write!(f, "{}", d),
            #[cfg(feature = "chrono")]
            PivotValue::Timestamp(ts) => write!(f, "{}", ts),
            #[cfg(feature = "chrono")]
            PivotValue::TimestampTz(ts) => write!(f, "{}", ts),
            #[cfg(feature = "uuid")]
            PivotValue::Uuid(u) => write!(f, "{}", u),
            #[cfg(feature = "json")]
            PivotValue::Json(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for PivotValue {
    fn from(s: &str) -> Self {
        PivotValue::Text(s.to_string())
    }
}

impl From<String> for PivotValue {
    fn from(s: String) -> Self {
        PivotValue::Text(s)
    }
}

impl From<i64> for PivotValue {
    fn from(i: i64) -> Self {
        PivotValue::Int(i)
    }
}

impl<T: Into<PivotValue>> From<Option<T>> for PivotValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(PivotValue::Null, Into::into)
    }
}

/// How a discovered value is written between single quotes.
///
/// Discovered values are data, not schema: a value containing `'` breaks out
/// of its literal unless it is escaped. `Verbatim` reproduces the historical
/// output exactly and must only be used when the pivot column is known to be
/// quote-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiteralQuoting {
    /// Embedded single quotes are doubled (`O'Neil` -> `O''Neil`).
    #[default]
    Escaped,
    /// The value is interpolated as-is.
    Verbatim,
}

impl LiteralQuoting {
    /// Returns the body of the single-quoted literal for `value`.
    pub fn literal_body(&self, value: &PivotValue) -> String {
        let raw = value.to_string();
        match self {
            LiteralQuoting::Escaped => raw.replace('\'', "''"),
            LiteralQuoting::Verbatim => raw,
        }
    }
}
