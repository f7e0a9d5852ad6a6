use crate::connection::Database;
use crate::error::Result;
use crate::executor::{self, QueryResult};
use tracing::debug;

pub const DEFAULT_PREVIEW_ROWS: usize = 5;

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Table names as the engine reports them, in engine order (not sorted).
/// An empty database yields an empty list, not an error.
pub fn list_tables(db: &Database) -> Result<Vec<String>> {
    let result = executor::execute(db, "SHOW TABLES")?;
    let names: Vec<String> = result
        .rows
        .iter()
        .filter_map(|row| row.first())
        .map(|cell| cell.render())
        .collect();
    debug!(tables = names.len(), "listed tables");
    Ok(names)
}

/// First `limit` rows of `name`. Names are expected to come from
/// `list_tables`; the identifier is quoted anyway.
pub fn preview_table(db: &Database, name: &str, limit: usize) -> Result<QueryResult> {
    executor::execute(
        db,
        &format!("SELECT * FROM {} LIMIT {}", quote_ident(name), limit),
    )
}
