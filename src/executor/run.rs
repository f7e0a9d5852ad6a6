use super::result::{CellValue, ColumnInfo, QueryResult};
use crate::connection::Database;
use crate::error::{DuckViewError, Result};
use tracing::debug;

/// Execute `sql` verbatim against the read-only connection.
///
/// The engine is the only safety boundary: no timeout, no row cap, no
/// statement filtering. Engine failures come back as `DuckViewError::Query`
/// with the engine message untouched, and the connection stays usable for
/// the next statement.
pub fn execute(db: &Database, sql: &str) -> Result<QueryResult> {
    let mut stmt = db
        .conn()
        .prepare(sql)
        .map_err(|e| DuckViewError::Query(e.to_string()))?;

    let mut collected: Vec<Vec<CellValue>> = Vec::new();
    let mut rows = stmt
        .query([])
        .map_err(|e| DuckViewError::Query(e.to_string()))?;
    while let Some(row) = rows
        .next()
        .map_err(|e| DuckViewError::Query(e.to_string()))?
    {
        let column_count = row.as_ref().column_count();
        let mut record = Vec::with_capacity(column_count);
        for idx in 0..column_count {
            let value = row
                .get_ref(idx)
                .map_err(|e| DuckViewError::Query(e.to_string()))?;
            record.push(CellValue::from(value));
        }
        collected.push(record);
    }
    // Release the borrow; result metadata lives on the executed statement.
    drop(rows);

    let columns = (0..stmt.column_count())
        .map(|idx| ColumnInfo {
            name: stmt
                .column_name(idx)
                .map(|s| s.to_string())
                .unwrap_or_else(|_| format!("col{idx}")),
            column_type: format!("{:?}", stmt.column_type(idx)),
        })
        .collect();

    debug!(rows = collected.len(), "statement executed");
    Ok(QueryResult {
        columns,
        rows: collected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_db;

    #[test]
    fn test_column_names_match_projected_aliases_in_order() {
        let (_dir, db) = test_db::seeded_db();

        let result = execute(
            &db,
            "SELECT b_name AS display_name, b_publisher AS publisher FROM Book ORDER BY b_id",
        )
        .unwrap();

        assert_eq!(result.column_names(), vec!["display_name", "publisher"]);
        assert_eq!(result.rows.len(), 3);
        assert_eq!(
            result.rows[0][0],
            CellValue::Text("Soccer Skills".to_string())
        );
    }

    #[test]
    fn test_invalid_sql_fails_and_connection_survives() {
        let (_dir, db) = test_db::seeded_db();

        let err = execute(&db, "SELEC b_name FRM Book").unwrap_err();
        assert!(matches!(err, DuckViewError::Query(_)));

        let result = execute(&db, "SELECT COUNT(*) AS n FROM Book").unwrap();
        assert_eq!(result.rows[0][0], CellValue::Int(3));
    }

    #[test]
    fn test_write_statement_is_rejected_by_read_only_mode() {
        let (_dir, db) = test_db::seeded_db();

        let err = execute(&db, "INSERT INTO Orders VALUES (99, 1, 1, 500)").unwrap_err();
        assert!(matches!(err, DuckViewError::Query(_)));

        let result = execute(&db, "SELECT COUNT(*) AS n FROM Orders").unwrap();
        assert_eq!(result.rows[0][0], CellValue::Int(5));
    }

    #[test]
    fn test_empty_result_keeps_column_metadata() {
        let (_dir, db) = test_db::seeded_db();

        let result = execute(&db, "SELECT s_id, qty FROM Stock").unwrap();
        assert!(result.is_empty());
        assert_eq!(result.column_names(), vec!["s_id", "qty"]);
    }

    #[test]
    fn test_null_and_aggregate_cells() {
        let (_dir, db) = test_db::seeded_db();

        let result = execute(
            &db,
            "SELECT NULL AS nothing, SUM(o_price) AS total FROM Orders",
        )
        .unwrap();

        assert_eq!(result.rows[0][0], CellValue::Null);
        // SUM over integers widens to HUGEINT; it must still come back numeric.
        assert_eq!(result.rows[0][1], CellValue::Int(58_999));
    }
}
