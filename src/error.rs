use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DuckViewError {
    /// Startup failure: the database file could not be opened read-only.
    /// Callers report this once and stop; nothing else runs without a
    /// connection.
    #[error("cannot open database {path}: {source}")]
    Connection {
        path: PathBuf,
        #[source]
        source: duckdb::Error,
    },
    /// Engine-reported failure while executing a statement, message kept
    /// verbatim. Recoverable: the connection stays usable.
    #[error("{0}")]
    Query(String),
    #[error("no template {0}")]
    TemplateNotFound(usize),
    #[error("{0}")]
    Usage(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DuckViewError>;
