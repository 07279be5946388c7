// End-to-end crosstab against an in-memory SQLite database.

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use sqlx_crosstab::{pivot, pivot_sql, PivotError, PivotQueryBuilder, PivotRequest, PivotValue, QueryExecutor};

async fn media_sales(with_unknown_type: bool) -> SqlitePool {
    // One connection: every in-memory connection is a separate database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    sqlx::query("CREATE TABLE mediaSales (ID INTEGER PRIMARY KEY, year INTEGER, type TEXT, amt INTEGER)")
        .execute(&pool)
        .await
        .expect("Failed to create table");

    let rows = [
        (7, 1999, "Vinyl", 23),
        (8, 1999, "Tape", 44),
        (9, 1999, "CD", 55),
        (10, 2000, "Vinyl", 66),
        (11, 2000, "Tape", 77),
        (12, 2000, "CD", 88),
        (13, 1999, "Vinyl", 11),
    ];
    for (id, year, kind, amt) in rows {
        sqlx::query("INSERT INTO mediaSales VALUES (?, ?, ?, ?)")
            .bind(id)
            .bind(year)
            .bind(kind)
            .bind(amt)
            .execute(&pool)
            .await
            .expect("Failed to insert");
    }

    if with_unknown_type {
        sqlx::query("INSERT INTO mediaSales VALUES (14, 2000, NULL, 5)")
            .execute(&pool)
            .await
            .expect("Failed to insert");
    }

    pool
}

#[tokio::test]
async fn test_discovery_returns_sorted_distinct_values() {
    let pool = media_sales(false).await;
    let values = pool
        .query("SELECT DISTINCT [type] from mediaSales order by [type]")
        .await
        .unwrap();
    assert_eq!(values, vec![PivotValue::from("CD"), PivotValue::from("Tape"), PivotValue::from("Vinyl")]);
}

#[tokio::test]
async fn test_integer_pivot_values() {
    let pool = media_sales(false).await;
    let values = pool
        .query("SELECT DISTINCT [year] from mediaSales order by [year]")
        .await
        .unwrap();
    assert_eq!(values, vec![PivotValue::Int(1999), PivotValue::Int(2000)]);
}

#[tokio::test]
async fn test_pivot_sql_matches_documented_statement() {
    let pool = media_sales(false).await;
    let sql = pivot_sql(&pool, "SUM", "[amt]", "mediaSales", "[year]", "[type]").await.unwrap();
    assert_eq!(
        sql,
        "SELECT [year], SUM(CASE [type] WHEN 'CD' THEN [amt] END) as 'CD', \
         SUM(CASE [type] WHEN 'Tape' THEN [amt] END) as 'Tape', \
         SUM(CASE [type] WHEN 'Vinyl' THEN [amt] END) as 'Vinyl', \
         SUM([amt]) as Total FROM mediaSales GROUP BY [year] ORDER BY [year]"
    );
}

#[tokio::test]
async fn test_pivot_totals() {
    let pool = media_sales(false).await;
    let rows = pivot(&pool, "SUM", "[amt]", "mediaSales", "[year]", "[type]").await.unwrap();
    assert_eq!(rows.len(), 2);

    // year, CD, Tape, Vinyl, Total
    let first: Vec<i64> = (0..5usize).map(|i| rows[0].get::<i64, _>(i)).collect();
    let second: Vec<i64> = (0..5usize).map(|i| rows[1].get::<i64, _>(i)).collect();
    assert_eq!(first, vec![1999, 55, 44, 34, 133]);
    assert_eq!(second, vec![2000, 88, 77, 66, 231]);
}

#[tokio::test]
async fn test_null_pivot_value_gets_own_column() {
    let pool = media_sales(true).await;
    let request = PivotRequest::new("SUM", "[amt]", "mediaSales", "[year] AS yr", "[type]").unwrap();
    let builder = PivotQueryBuilder::new();

    let sql = builder.build(&request, &pool).await.unwrap();
    assert!(sql.contains("SUM(CASE WHEN [type] is null THEN [amt] END) AS [NULL]"));
    assert!(sql.ends_with("GROUP BY [year] ORDER BY [year]"));

    let rows = builder.build_and_execute(&request, &pool).await.unwrap();
    // year, NULL, CD, Tape, Vinyl, Total
    assert_eq!(rows[0].get::<Option<i64>, _>(1), None);
    assert_eq!(rows[1].get::<Option<i64>, _>(1), Some(5));
    assert_eq!(rows[1].get::<i64, _>(5), 236);
}

#[tokio::test]
async fn test_count_with_else_zero_ignored() {
    let pool = media_sales(false).await;
    let request = PivotRequest::new("COUNT", "[ID]", "mediaSales", "[year]", "[type]").unwrap();
    let rows = PivotQueryBuilder::new()
        .else_zero(true)
        .build_and_execute(&request, &pool)
        .await
        .unwrap();
    // 1999 has two Vinyl rows.
    assert_eq!(rows[0].get::<i64, _>(3), 2);
    assert_eq!(rows[0].get::<i64, _>(4), 4);
}

#[tokio::test]
async fn test_missing_table_is_execution_error() {
    let pool = media_sales(false).await;
    let err = pivot_sql(&pool, "SUM", "[amt]", "noSuchTable", "[year]", "[type]")
        .await
        .unwrap_err();
    assert!(matches!(err, PivotError::Execution(_)));
}
