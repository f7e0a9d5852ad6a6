pub mod catalog;
pub mod connection;
pub mod error;
pub mod executor;
pub mod render;
pub mod repl;
pub mod templates;

#[cfg(test)]
pub(crate) mod test_db;

pub use catalog::{list_tables, preview_table, DEFAULT_PREVIEW_ROWS};
pub use connection::Database;
pub use error::{DuckViewError, Result};
pub use executor::{execute, CellValue, ColumnInfo, QueryResult};
pub use render::{chart_for_templates, maybe_chart, render_table, ChartSpec};
pub use repl::{InteractiveRepl, ReplCommand};
pub use templates::{default_template, template, TemplateQuery, TEMPLATES};
