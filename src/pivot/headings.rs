//! Row heading helpers.

use once_cell::sync::Lazy;
use regex::Regex;

// `<ws>as <alias>` where the alias is one bracketed, quoted or bare
// identifier closing its comma-separated segment.
static ALIAS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\s+as\s+(\[[^\]]+\]|"[^"]+"|'[^']+'|\w+)\s*(,|$)"#)
        .expect("alias pattern is valid")
});

/// Removes display aliases from a comma-separated row heading list.
///
/// The SELECT list may name a heading `[year] AS [Y]`, but GROUP BY and
/// ORDER BY must reference the expression itself, so every `AS <alias>`
/// that ends a heading is dropped. An `AS` inside an expression, such as
/// `CAST(sold_at AS DATE)`, is left alone.
///
/// ```
/// use sqlx_crosstab::strip_aliases;
///
/// assert_eq!(strip_aliases("[year] AS [Y], [region]"), "[year], [region]");
/// assert_eq!(strip_aliases("[year]"), "[year]");
/// ```
pub fn strip_aliases(row_headings: &str) -> String {
    ALIAS_RE.replace_all(row_headings, "$2").trim_end().to_string()
}
