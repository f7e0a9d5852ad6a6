use crate::connection::Database;
use duckdb::Connection;
use std::path::PathBuf;
use tempfile::TempDir;

// Bookstore fixture: orders reference books and customers; Stock stays
// empty for the zero-row cases.
pub(crate) const SEED_SQL: &str = "
CREATE TABLE Book (b_id INTEGER PRIMARY KEY, b_name VARCHAR, b_publisher VARCHAR);
CREATE TABLE Customer (c_id INTEGER PRIMARY KEY, c_name VARCHAR);
CREATE TABLE Orders (o_id INTEGER PRIMARY KEY, bookid INTEGER, custid INTEGER, o_price INTEGER);
CREATE TABLE Stock (s_id INTEGER, qty INTEGER);

INSERT INTO Book VALUES
    (1, 'Soccer Skills', 'Goodsport'),
    (2, 'Golf Bible', 'Seoul Media'),
    (3, 'Tennis 101', 'Goodsport');

INSERT INTO Customer VALUES
    (1, 'Park'),
    (2, 'Kim'),
    (3, 'Lee');

INSERT INTO Orders VALUES
    (1, 1, 1, 6000),
    (2, 2, 1, 21000),
    (3, 3, 2, 12000),
    (4, 1, 2, 9999),
    (5, 2, 3, 10000);
";

pub(crate) fn seeded_file() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create tempdir");
    let path = dir.path().join("workbench.db");
    let conn = Connection::open(&path).expect("create fixture database");
    conn.execute_batch(SEED_SQL).expect("seed fixture database");
    drop(conn);
    (dir, path)
}

pub(crate) fn seeded_db() -> (TempDir, Database) {
    let (dir, path) = seeded_file();
    let db = Database::open_read_only(&path).expect("open fixture read-only");
    (dir, db)
}
